//! # Candidate Table

use compact_str::CompactString;

use crate::{
    candidates::find_words,
    encoding::{TextCostModel, unit_savings},
    matching::HorspoolPattern,
    types::{ZHashMap, ZHashSet},
};

/// A profitable abbreviation candidate.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// The prepared search pattern for the candidate text.
    pub pattern: HorspoolPattern,

    /// Z-chars saved per referenced occurrence; always `> 0`.
    pub unit_savings: i64,
}

impl Candidate {
    /// The candidate text.
    pub fn text(&self) -> &str {
        self.pattern.text()
    }

    /// Net savings for `count` occurrences.
    ///
    /// The first occurrence pays for the abbreviation definition,
    /// and the table entry costs another [`crate::encoding::ABBREV_REF_COST`].
    pub fn aggregate_savings(
        &self,
        count: usize,
    ) -> i64 {
        (count as i64 - 1) * self.unit_savings - crate::encoding::ABBREV_REF_COST as i64
    }
}

/// Every candidate text seen so far, classified once.
///
/// Each classification is journaled with the corpus position of the
/// fragment which introduced it, so [`CandidateTable::rollback`] can
/// forget text added after a checkpoint.
#[derive(Debug, Default)]
pub struct CandidateTable {
    accepted: ZHashMap<CompactString, Candidate>,
    rejected: ZHashSet<CompactString>,
    journal: Vec<(usize, CompactString)>,
}

impl CandidateTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of profitable candidates.
    pub fn len(&self) -> usize {
        self.accepted.len()
    }

    /// Are there no profitable candidates?
    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty()
    }

    /// Has `text` already been classified?
    pub fn contains(
        &self,
        text: &str,
    ) -> bool {
        self.accepted.contains_key(text) || self.rejected.contains(text)
    }

    /// Look up a profitable candidate.
    pub fn get(
        &self,
        text: &str,
    ) -> Option<&Candidate> {
        self.accepted.get(text)
    }

    /// Iterate over the profitable candidates, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.accepted.values()
    }

    /// Classify one candidate text, if it has not been seen.
    ///
    /// ## Arguments
    /// * `model` - the text cost model.
    /// * `text` - the candidate text.
    /// * `origin` - the corpus position of the fragment containing `text`.
    ///
    /// ## Returns
    /// `true` if `text` was new and profitable.
    pub fn observe<M: TextCostModel + ?Sized>(
        &mut self,
        model: &M,
        text: &str,
        origin: usize,
    ) -> bool {
        if text.is_empty() || self.contains(text) {
            return false;
        }

        let key: CompactString = text.into();
        self.journal.push((origin, key.clone()));

        let savings = unit_savings(model, text);
        if savings <= 0 {
            self.rejected.insert(key);
            return false;
        }

        match HorspoolPattern::new(text) {
            Ok(pattern) => {
                self.accepted.insert(
                    key,
                    Candidate {
                        pattern,
                        unit_savings: savings,
                    },
                );
                true
            }
            Err(_) => false,
        }
    }

    /// Classify every candidate text found in a new fragment.
    ///
    /// ## Returns
    /// The number of new profitable candidates.
    pub fn observe_fragment<M: TextCostModel + ?Sized>(
        &mut self,
        model: &M,
        fragment: &str,
        origin: usize,
    ) -> usize {
        find_words(fragment)
            .iter()
            .filter(|word| self.observe(model, word, origin))
            .count()
    }

    /// Forget every classification made for fragments at or after `position`.
    ///
    /// ## Returns
    /// The number of forgotten texts.
    pub fn rollback(
        &mut self,
        position: usize,
    ) -> usize {
        let keep = self.journal.partition_point(|(origin, _)| *origin < position);
        let forgotten = self.journal.len() - keep;
        for (_, text) in self.journal.drain(keep..) {
            if self.accepted.remove(&text).is_none() {
                self.rejected.remove(&text);
            }
        }
        forgotten
    }

    /// Permanently remove a candidate.
    pub fn remove(
        &mut self,
        text: &str,
    ) -> Option<Candidate> {
        self.accepted.remove(text)
    }

    /// Drop everything, including the journal.
    pub fn clear(&mut self) {
        self.accepted = ZHashMap::new();
        self.rejected = ZHashSet::new();
        self.journal = Vec::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{encoding::ZCharCostModel, types::check_is_send};

    #[test]
    fn test_aggregate_savings() {
        let candidate = Candidate {
            pattern: HorspoolPattern::new("the").unwrap(),
            unit_savings: 4,
        };
        assert_eq!(candidate.text(), "the");
        assert_eq!(candidate.aggregate_savings(0), -6);
        assert_eq!(candidate.aggregate_savings(1), -2);
        assert_eq!(candidate.aggregate_savings(2), 2);
        assert_eq!(candidate.aggregate_savings(5), 14);
    }

    #[test]
    fn test_observe() {
        let model = ZCharCostModel::default();
        let mut table = CandidateTable::new();
        check_is_send(&table);

        assert!(table.observe(&model, "the", 0));
        assert!(!table.observe(&model, "the", 0));
        assert!(!table.observe(&model, "an", 0));
        assert!(!table.observe(&model, "an", 0));
        assert!(!table.observe(&model, "", 0));

        assert_eq!(table.len(), 1);
        assert!(table.contains("the"));
        assert!(table.contains("an"));
        assert!(table.get("an").is_none());
        assert_eq!(table.get("the").unwrap().unit_savings, 1);
    }

    #[test]
    fn test_observe_fragment() {
        let model = ZCharCostModel::default();
        let mut table = CandidateTable::new();

        // "hi" saves nothing; "hi ", "you" and " you" do.
        assert_eq!(table.observe_fragment(&model, "hi you", 0), 3);
        assert_eq!(table.observe_fragment(&model, "hi you", 7), 0);
        assert!(table.get("hi ").is_some());
        assert!(table.get("hi").is_none());
        assert!(table.contains("hi"));
        assert!(table.iter().all(|c| c.unit_savings > 0));
    }

    #[test]
    fn test_rollback() {
        let model = ZCharCostModel::default();
        let mut table = CandidateTable::new();

        table.observe(&model, "lamp", 0);
        table.observe(&model, "ox", 0);
        table.observe(&model, "grue", 5);
        table.observe(&model, "no", 5);
        table.observe(&model, "sword", 10);

        assert_eq!(table.rollback(5), 3);
        assert!(table.contains("lamp"));
        assert!(table.contains("ox"));
        assert!(!table.contains("grue"));
        assert!(!table.contains("no"));
        assert!(!table.contains("sword"));

        assert!(table.observe(&model, "grue", 5));
        assert_eq!(table.rollback(100), 0);
    }

    #[test]
    fn test_remove_and_clear() {
        let model = ZCharCostModel::default();
        let mut table = CandidateTable::new();
        table.observe_fragment(&model, "the lamp is lit", 0);
        assert!(!table.is_empty());

        assert!(table.remove("lamp").is_some());
        assert!(table.remove("lamp").is_none());

        table.clear();
        assert!(table.is_empty());
        assert!(!table.contains("the"));
    }
}
