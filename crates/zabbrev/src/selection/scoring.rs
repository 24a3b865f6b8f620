//! # Parallel Candidate Scoring

use core::cmp::Reverse;
use std::num::NonZeroUsize;

use crate::{
    candidates::{Candidate, CandidateTable},
    corpus::TextCorpus,
};

/// One candidate's score against the current corpus.
#[derive(Debug, Clone, Copy)]
pub struct CandidateScore<'a> {
    /// The scored candidate.
    pub candidate: &'a Candidate,

    /// Occurrences in the corpus, overlapping matches included.
    pub count: usize,

    /// Net savings over all occurrences.
    pub savings: i64,
}

impl<'a> CandidateScore<'a> {
    /// Score `candidate` against `corpus`.
    pub fn new(
        candidate: &'a Candidate,
        corpus: &[char],
    ) -> Self {
        let count = candidate.pattern.count_overlapping(corpus);
        Self {
            candidate,
            count,
            savings: candidate.aggregate_savings(count),
        }
    }

    /// The selection order key.
    ///
    /// Higher savings first; ties go to the lexically smaller text.
    pub fn rank_key(&self) -> (i64, Reverse<&'a str>) {
        (self.savings, Reverse(self.candidate.text()))
    }
}

/// Fan-out pool for scoring rounds.
///
/// With the `rayon` feature, scoring runs on a bounded pool when
/// `max_pool` is set, and on the global rayon pool otherwise.
/// Without it, scoring is sequential.
#[derive(Debug, Default)]
pub struct ScoringPool {
    #[cfg(feature = "rayon")]
    pool: Option<rayon::ThreadPool>,
}

impl ScoringPool {
    /// Build a scoring pool.
    ///
    /// ## Arguments
    /// * `max_pool` - an upper bound on worker threads.
    #[cfg(feature = "rayon")]
    pub fn new(max_pool: Option<NonZeroUsize>) -> Self {
        let Some(max_pool) = max_pool else {
            return Self::default();
        };

        let threads = crate::compat::threads::resolve_max_pool(Some(max_pool));
        match rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|idx| format!("zabbrev-score-{idx}"))
            .build()
        {
            Ok(pool) => Self { pool: Some(pool) },
            Err(err) => {
                log::warn!("Falling back to the global scoring pool: {err}");
                Self::default()
            }
        }
    }

    /// Build a scoring pool.
    ///
    /// ## Arguments
    /// * `max_pool` - ignored; scoring is sequential without `rayon`.
    #[cfg(not(feature = "rayon"))]
    pub fn new(max_pool: Option<NonZeroUsize>) -> Self {
        let _ = max_pool;
        Self::default()
    }

    /// Score every candidate in `table` against `corpus`.
    ///
    /// The corpus is only read; scores come back in no particular order.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn score<'a>(
        &self,
        corpus: &TextCorpus,
        table: &'a CandidateTable,
    ) -> Vec<CandidateScore<'a>> {
        let candidates: Vec<&'a Candidate> = table.iter().collect();
        let chars = corpus.as_chars();
        let score_one = |candidate: &&'a Candidate| CandidateScore::new(*candidate, chars);

        #[cfg(feature = "rayon")]
        {
            use rayon::prelude::*;

            let fan_out =
                || -> Vec<CandidateScore<'a>> { candidates.par_iter().map(score_one).collect() };
            match &self.pool {
                Some(pool) => pool.install(fan_out),
                None => fan_out(),
            }
        }

        #[cfg(not(feature = "rayon"))]
        candidates.iter().map(score_one).collect()
    }
}
