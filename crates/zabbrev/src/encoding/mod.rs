//! # Text Cost Model
//!
//! Abbreviation savings are measured in Z-chars, the 5-bit units of
//! Z-machine text. The cost of spelling a string out is supplied by a
//! [`TextCostModel`]; the default is [`ZCharCostModel`].

mod cost_model;
mod zchar_cost;

#[doc(inline)]
pub use cost_model::{ABBREV_REF_COST, TextCostModel, unit_savings};
#[doc(inline)]
pub use zchar_cost::{ALPHABET_SIZE, ZAlphabets, ZCharCostModel};
