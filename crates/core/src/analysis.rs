// Copyright 2025 Runtime Ranking Contributors
// SPDX-License-Identifier: Apache-2.0

//! End-to-end analysis of a result set.
//!
//! Runs the stages in order and keeps every intermediate product so that a
//! reporter can show which per-benchmark speedups fed each score:
//!
//! ```text
//! ResultStore -> SpeedupTable -> Vec<AggregateScore> -> Ranking
//! ```

use crate::aggregate::GeometricMeanAggregator;
use crate::error::Result;
use crate::rank::{Ranker, Ranking};
use crate::speedup::{Diagnostic, SpeedupCalculator, SpeedupEntry, SpeedupTable};
use crate::store::ResultStore;
use serde::Serialize;
use tracing::info;

/// Default reference runtime.
pub const DEFAULT_BASELINE: &str = "python";

/// Everything derived from one result set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    baseline: String,
    total_benchmarks: usize,
    ranking: Ranking,
    speedups: SpeedupTable,
}

impl Analysis {
    /// Analyze `store` against `baseline`.
    ///
    /// An empty store yields an empty ranking; deciding whether that is a
    /// failure is up to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidBaseline`] if `baseline` is blank.
    pub fn run(store: &ResultStore, baseline: &str) -> Result<Self> {
        let calculator = SpeedupCalculator::new(baseline)?;
        Ok(Self::with_calculator(store, &calculator))
    }

    /// Analyze `store` with an already configured calculator.
    pub fn with_calculator(store: &ResultStore, calculator: &SpeedupCalculator) -> Self {
        let speedups = calculator.compute_all(store);
        let scores = GeometricMeanAggregator::aggregate_table(&speedups);
        let ranking = Ranker::rank(scores);

        info!(
            baseline = calculator.baseline(),
            benchmarks = store.len(),
            ranked = ranking.len(),
            "Analysis complete"
        );

        Self {
            baseline: calculator.baseline().to_string(),
            total_benchmarks: store.len(),
            ranking,
            speedups,
        }
    }

    /// Baseline runtime the speedups are relative to.
    pub fn baseline(&self) -> &str {
        &self.baseline
    }

    /// Runtimes ordered by geometric-mean speedup.
    pub fn ranking(&self) -> &Ranking {
        &self.ranking
    }

    /// Per-benchmark speedups of every compared record.
    pub fn speedups(&self) -> &SpeedupTable {
        &self.speedups
    }

    /// Records skipped during speedup computation.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.speedups.diagnostics()
    }

    /// Number of records in the analyzed store, compared or not.
    pub fn total_benchmarks(&self) -> usize {
        self.total_benchmarks
    }

    /// Number of records that had a baseline timing.
    pub fn compared_benchmarks(&self) -> usize {
        self.speedups.compared_benchmarks().len()
    }

    /// The speedups that produced `runtime`'s score.
    pub fn contributions<'a>(&'a self, runtime: &'a str) -> Vec<&'a SpeedupEntry> {
        self.speedups.for_runtime(runtime).collect()
    }

    /// Whether no runtime could be ranked.
    pub fn is_empty(&self) -> bool {
        self.ranking.is_empty()
    }
}

/// Analyze `store` against `baseline`. Shorthand for [`Analysis::run`].
pub fn analyze(store: &ResultStore, baseline: &str) -> Result<Analysis> {
    Analysis::run(store, baseline)
}
