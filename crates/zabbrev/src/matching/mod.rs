//! # Substring Matching
//!
//! Boyer-Moore-Horspool search over `char` buffers; see [`HorspoolPattern`].

mod horspool;

#[doc(inline)]
pub use horspool::HorspoolPattern;
