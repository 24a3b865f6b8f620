//! # Cost Model Trait

/// Z-chars used by one abbreviation reference, independent of its length.
pub const ABBREV_REF_COST: usize = 2;

/// The text encoder's cost function.
pub trait TextCostModel: Send + Sync {
    /// The number of Z-chars needed to encode `text` literally,
    /// without abbreviations and before padding.
    fn cost_in_units(
        &self,
        text: &str,
    ) -> usize;
}

impl<F> TextCostModel for F
where
    F: Fn(&str) -> usize + Send + Sync,
{
    fn cost_in_units(
        &self,
        text: &str,
    ) -> usize {
        self(text)
    }
}

/// Z-chars saved by replacing one occurrence of `text` with an abbreviation reference.
///
/// May be zero or negative; such text is never worth abbreviating.
pub fn unit_savings<M: TextCostModel + ?Sized>(
    model: &M,
    text: &str,
) -> i64 {
    model.cost_in_units(text) as i64 - ABBREV_REF_COST as i64
}
