//! # Frequent Words Listing
//!
//! Writes selected abbreviations as assembler source: one `.FSTR` per
//! abbreviation, followed by the `WORDS::` table.

mod frequent_words;

#[doc(inline)]
pub use frequent_words::{
    ListingSummary,
    MAX_ABBREVIATIONS,
    escape_string,
    write_frequent_words,
};
