//! # `zabbrev` Z-Machine Abbreviation Finder
//!
//! Selects the abbreviation table ("frequent words") for a Z-machine story
//! file: given every printable string an assembler will emit, pick a small
//! set of substrings which, when referenced through the abbreviation table
//! instead of spelled out, save the most Z-chars.
//!
//! This is a greedy heuristic; the optimal table is NP-hard to find.
//!
//! See:
//! * [`selection`] for the [`AbbrevFinder`] accumulator and selection loop.
//! * [`encoding`] for the text cost model ([`TextCostModel`], [`ZCharCostModel`]).
//! * [`corpus`] for the accumulated text buffer.
//! * [`candidates`] for candidate extraction.
//! * [`matching`] for the Boyer-Moore-Horspool substring search.
//! * [`listing`] to write the results as assembler source.
//!
//! ## Finding Abbreviations
//!
//! ```rust
//! use zabbrev::{AbbrevFinder, AbbrevResult};
//!
//! let mut finder: AbbrevFinder = AbbrevFinder::default();
//!
//! // During a pass, the assembler reports each printable string.
//! for text in ["You are in a maze of twisty little passages.", "A little lamp."] {
//!     finder.add_text(text);
//! }
//!
//! // A restarted pass can undo its text.
//! let checkpoint = finder.position();
//! finder.add_text("discarded by a restart");
//! finder.rollback(checkpoint);
//!
//! // The results are produced lazily; dropping the sequence resets the finder.
//! let results: Vec<AbbrevResult> = finder.get_results(96).collect();
//! for pair in results.windows(2) {
//!     assert!(pair[0].savings >= pair[1].savings);
//! }
//! ```
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
#![warn(missing_docs, unused)]

pub mod candidates;
pub mod compat;
pub mod corpus;
pub mod encoding;
pub mod errors;
pub mod listing;
pub mod matching;
pub mod selection;
pub mod types;

#[doc(inline)]
pub use encoding::{TextCostModel, ZAlphabets, ZCharCostModel};
#[doc(inline)]
pub use errors::{ZAbbrevError, ZResult};
#[doc(inline)]
pub use selection::{AbbrevFinder, AbbrevFinderOptions, AbbrevResult, AbbrevResults};
