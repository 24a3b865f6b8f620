//! # Abbreviation Finder

use std::num::NonZeroUsize;

use compact_str::CompactString;

use crate::{
    candidates::CandidateTable,
    compat::timers::timeit,
    corpus::TextCorpus,
    encoding::{TextCostModel, ZCharCostModel},
    selection::{AbbrevResult, AbbrevResults, CandidateScore, ScoringPool},
};

/// Options for [`AbbrevFinder`].
#[derive(Debug, Clone, Default)]
pub struct AbbrevFinderOptions {
    /// Upper bound on scoring worker threads.
    ///
    /// `None` uses the default parallelism; see
    /// [`crate::compat::threads::est_max_parallelism`].
    pub max_pool: Option<NonZeroUsize>,
}

impl AbbrevFinderOptions {
    /// Sets the scoring worker bound.
    ///
    /// ## Arguments
    /// * `max_pool` - the max number of worker threads, or `None` for the default.
    ///
    /// ## Returns
    /// The updated `AbbrevFinderOptions` instance.
    pub fn with_max_pool(
        self,
        max_pool: Option<NonZeroUsize>,
    ) -> Self {
        Self { max_pool }
    }

    /// Initializes an [`AbbrevFinder`] from these options.
    ///
    /// ## Arguments
    /// * `model` - the text cost model.
    pub fn init<M: TextCostModel>(
        self,
        model: M,
    ) -> AbbrevFinder<M> {
        AbbrevFinder::with_options(self, model)
    }
}

/// Text accumulator and greedy abbreviation selector.
///
/// Usage is a cycle:
/// 1. [`AbbrevFinder::add_text`] for each printable string of a pass,
///    with [`AbbrevFinder::position`] / [`AbbrevFinder::rollback`]
///    to undo a discarded pass;
/// 2. [`AbbrevFinder::get_results`] once, which consumes the
///    accumulated state and leaves the finder empty.
///
/// # Parameters
/// * `M` - the text cost model.
pub struct AbbrevFinder<M: TextCostModel = ZCharCostModel> {
    options: AbbrevFinderOptions,
    model: M,
    corpus: TextCorpus,
    candidates: CandidateTable,
}

impl Default for AbbrevFinder<ZCharCostModel> {
    fn default() -> Self {
        Self::new(ZCharCostModel::default())
    }
}

impl<M: TextCostModel> AbbrevFinder<M> {
    /// Create a finder with default options.
    pub fn new(model: M) -> Self {
        Self::with_options(AbbrevFinderOptions::default(), model)
    }

    /// Create a finder.
    pub fn with_options(
        options: AbbrevFinderOptions,
        model: M,
    ) -> Self {
        Self {
            options,
            model,
            corpus: TextCorpus::new(),
            candidates: CandidateTable::new(),
        }
    }

    /// The finder options.
    pub fn options(&self) -> &AbbrevFinderOptions {
        &self.options
    }

    /// The text cost model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// The accumulated corpus.
    pub fn corpus(&self) -> &TextCorpus {
        &self.corpus
    }

    /// The profitable candidates seen so far.
    pub fn candidates(&self) -> &CandidateTable {
        &self.candidates
    }

    /// Add one printable string.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn add_text(
        &mut self,
        text: &str,
    ) {
        let origin = self.corpus.position();
        let added = self
            .candidates
            .observe_fragment(&self.model, text, origin);
        log::trace!("Added {added} candidates at {origin}");
        self.corpus.append(text);
    }

    /// The current corpus length; a checkpoint for [`AbbrevFinder::rollback`].
    pub fn position(&self) -> usize {
        self.corpus.position()
    }

    /// Undo text added after `position`.
    ///
    /// Positions at or past the end are ignored. Candidates first seen
    /// in the discarded text are forgotten as well.
    pub fn rollback(
        &mut self,
        position: usize,
    ) {
        if self.corpus.rollback(position) {
            let forgotten = self.candidates.rollback(position);
            log::debug!("Rolled back to {position}; forgot {forgotten} candidate texts");
        }
    }

    /// Start a selection run.
    ///
    /// ## Arguments
    /// * `max` - the max number of abbreviations; `0` yields nothing.
    ///
    /// ## Returns
    /// A lazy sequence of results, in non-increasing order of savings.
    /// The finder is reset when the sequence finishes or is dropped.
    pub fn get_results(
        &mut self,
        max: usize,
    ) -> AbbrevResults<'_, M> {
        log::info!(
            "Finding up to {max} abbreviations among {} candidates ({} chars of text)",
            self.candidates.len(),
            self.corpus.position()
        );
        AbbrevResults::new(self, max)
    }

    /// Drop all accumulated text and candidates.
    pub(crate) fn reset(&mut self) {
        self.corpus.clear();
        self.candidates.clear();
    }

    /// Run one greedy round.
    ///
    /// Prunes every candidate with no net savings, then selects the best
    /// remaining candidate and redacts its occurrences from the corpus.
    pub(crate) fn select_next(
        &mut self,
        pool: &ScoringPool,
    ) -> Option<AbbrevResult> {
        let (elapsed, scores) = timeit(|| pool.score(&self.corpus, &self.candidates));
        log::trace!("Scored {} candidates in {:?}", scores.len(), elapsed);

        let mut pruned: Vec<CompactString> = Vec::new();
        let mut best: Option<&CandidateScore> = None;
        for score in &scores {
            if score.savings <= 0 {
                pruned.push(score.candidate.text().into());
            } else if best.is_none_or(|b| score.rank_key() > b.rank_key()) {
                best = Some(score);
            }
        }
        let selected = best.map(|score| AbbrevResult {
            savings: score.savings,
            count: score.count,
            text: score.candidate.text().into(),
        });
        drop(scores);

        for text in &pruned {
            self.candidates.remove(text);
        }
        log::debug!(
            "Pruned {} candidates; {} remain",
            pruned.len(),
            self.candidates.len()
        );

        let selected = selected?;
        if let Some(candidate) = self.candidates.remove(&selected.text) {
            let redacted = self.corpus.redact_all(&candidate.pattern);
            log::debug!(
                "Selected {:?}: {}x, saved {} ({redacted} redacted)",
                selected.text,
                selected.count,
                selected.savings
            );
        }
        Some(selected)
    }
}
