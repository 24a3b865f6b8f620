//! # Abbreviation Selection
//!
//! The greedy selection loop. Each round:
//! 1. scores every candidate against the current corpus, in parallel;
//! 2. drops candidates with no net savings;
//! 3. emits the best candidate and redacts its occurrences.
//!
//! See [`AbbrevFinder`] and [`AbbrevResults`].

mod abbrev_finder;
mod abbrev_results;
mod scoring;

#[doc(inline)]
pub use abbrev_finder::{AbbrevFinder, AbbrevFinderOptions};
#[doc(inline)]
pub use abbrev_results::{AbbrevResult, AbbrevResults};
#[doc(inline)]
pub use scoring::{CandidateScore, ScoringPool};
