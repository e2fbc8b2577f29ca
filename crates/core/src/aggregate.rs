// Copyright 2025 Runtime Ranking Contributors
// SPDX-License-Identifier: Apache-2.0

//! Geometric-mean aggregation of speedups.
//!
//! The mean is computed in the log domain, `exp(mean(ln(x)))`, so that
//! products of many speedups spanning several orders of magnitude neither
//! overflow nor underflow. Table aggregation averages the entries' log
//! speedups directly, so every runtime with at least one entry gets a score.

use crate::speedup::{saturate, SpeedupEntry, SpeedupTable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;

/// Combined score of one runtime across the benchmarks it ran.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateScore {
    /// Runtime name.
    pub runtime: String,
    /// Geometric mean of the runtime's speedups.
    pub geometric_mean_speedup: f64,
    /// Number of benchmarks that contributed to the mean.
    pub benchmark_count: usize,
}

/// Geometric mean of strictly positive values.
///
/// Returns `None` for an empty slice or if any value is not a finite,
/// strictly positive number.
pub fn geometric_mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() || values.iter().any(|v| !v.is_finite() || *v <= 0.0) {
        return None;
    }
    if let [only] = values {
        return Some(*only);
    }

    let log_sum: f64 = values.iter().map(|v| v.ln()).sum();
    Some((log_sum / values.len() as f64).exp())
}

/// Builds [`AggregateScore`]s from speedups.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeometricMeanAggregator;

impl GeometricMeanAggregator {
    /// Score `runtime` from its per-benchmark speedups.
    ///
    /// A runtime without speedups has no score.
    pub fn aggregate(runtime: impl Into<String>, speedups: &[f64]) -> Option<AggregateScore> {
        geometric_mean(speedups).map(|mean| AggregateScore {
            runtime: runtime.into(),
            geometric_mean_speedup: mean,
            benchmark_count: speedups.len(),
        })
    }

    /// One score per runtime present in `table`, sorted by runtime name.
    pub fn aggregate_table(table: &SpeedupTable) -> Vec<AggregateScore> {
        let mut by_runtime: BTreeMap<&str, Vec<&SpeedupEntry>> = BTreeMap::new();
        for entry in table.entries() {
            by_runtime
                .entry(entry.runtime.as_str())
                .or_default()
                .push(entry);
        }

        let scores: Vec<AggregateScore> = by_runtime
            .into_iter()
            .map(|(runtime, entries)| Self::score_entries(runtime, &entries))
            .collect();

        info!(runtimes = scores.len(), "Aggregated geometric means");
        scores
    }

    // `entries` is never empty: each group holds the entry that created it.
    fn score_entries(runtime: &str, entries: &[&SpeedupEntry]) -> AggregateScore {
        let geometric_mean_speedup = match entries {
            [only] => only.speedup,
            _ => {
                let log_sum: f64 = entries.iter().map(|e| e.log_speedup).sum();
                saturate((log_sum / entries.len() as f64).exp())
            }
        };
        AggregateScore {
            runtime: runtime.to_string(),
            geometric_mean_speedup,
            benchmark_count: entries.len(),
        }
    }
}
