//! # Text Corpus
//!
//! The accumulated text of every string submitted during a pass;
//! see [`TextCorpus`].

mod text_corpus;

#[doc(inline)]
pub use text_corpus::{SENTINEL, TextCorpus};
