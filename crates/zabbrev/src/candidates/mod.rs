//! # Candidate Extraction
//!
//! Newly added text is split into words; each word and its
//! punctuation-extended variants become abbreviation candidates.
//!
//! * [`find_words`] - tokenization and variant generation.
//! * [`CandidateTable`] - the profitable candidates, keyed by text.

mod candidate_table;
mod word_finder;

#[doc(inline)]
pub use candidate_table::{Candidate, CandidateTable};
#[doc(inline)]
pub use word_finder::{WORD_DELIMITERS, find_words, is_word_delimiter, word_spans};
