//! # Abbreviation Results

use core::iter::FusedIterator;

use compact_str::CompactString;

use crate::{
    encoding::TextCostModel,
    selection::{AbbrevFinder, ScoringPool},
};

/// A selected abbreviation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AbbrevResult {
    /// Net Z-chars saved, as scored in the round that selected it.
    pub savings: i64,

    /// Occurrences counted in that round.
    pub count: usize,

    /// The abbreviation text.
    pub text: CompactString,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
    /// Rounds may still run; `remaining` results may still be emitted.
    Selecting { remaining: usize },

    /// The finder has been reset.
    Done,
}

/// The lazy result sequence of one selection run.
///
/// Each call to [`Iterator::next`] runs one greedy round.
/// Results come out in non-increasing order of savings.
///
/// The run is single-use: once the sequence is exhausted, or dropped
/// early, the finder's corpus and candidates are cleared and it is
/// ready for a fresh accumulation cycle.
pub struct AbbrevResults<'a, M: TextCostModel> {
    finder: &'a mut AbbrevFinder<M>,
    pool: ScoringPool,
    state: RunState,
    emitted: usize,
    total_savings: i64,
}

impl<'a, M: TextCostModel> AbbrevResults<'a, M> {
    pub(crate) fn new(
        finder: &'a mut AbbrevFinder<M>,
        max: usize,
    ) -> Self {
        let pool = ScoringPool::new(finder.options().max_pool);
        let mut results = Self {
            finder,
            pool,
            state: RunState::Selecting { remaining: max },
            emitted: 0,
            total_savings: 0,
        };
        if max < 1 {
            results.finish();
        }
        results
    }

    /// The number of results emitted so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// The summed savings of the results emitted so far.
    pub fn total_savings(&self) -> i64 {
        self.total_savings
    }

    /// Has the run finished, and the finder been reset?
    pub fn is_done(&self) -> bool {
        self.state == RunState::Done
    }

    fn finish(&mut self) {
        if let RunState::Selecting { remaining } = self.state {
            if remaining > 0 && self.emitted > 0 {
                log::debug!("Selection stopped with {remaining} unused slots");
            }
            log::info!(
                "Selected {} abbreviations saving {} z-chars",
                self.emitted,
                self.total_savings
            );
            self.finder.reset();
            self.state = RunState::Done;
        }
    }
}

impl<M: TextCostModel> Iterator for AbbrevResults<'_, M> {
    type Item = AbbrevResult;

    fn next(&mut self) -> Option<Self::Item> {
        let RunState::Selecting { remaining } = self.state else {
            return None;
        };

        let Some(result) = self.finder.select_next(&self.pool) else {
            self.finish();
            return None;
        };

        self.emitted += 1;
        self.total_savings += result.savings;
        self.state = RunState::Selecting {
            remaining: remaining - 1,
        };
        if remaining == 1 {
            self.finish();
        }
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.state {
            RunState::Selecting { remaining } => (0, Some(remaining)),
            RunState::Done => (0, Some(0)),
        }
    }
}

impl<M: TextCostModel> FusedIterator for AbbrevResults<'_, M> {}

impl<M: TextCostModel> Drop for AbbrevResults<'_, M> {
    fn drop(&mut self) {
        if !self.is_done() {
            log::debug!("Selection abandoned after {} results", self.emitted);
        }
        self.finish();
    }
}
