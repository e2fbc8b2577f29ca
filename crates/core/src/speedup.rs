// Copyright 2025 Runtime Ranking Contributors
// SPDX-License-Identifier: Apache-2.0

//! Speedup normalization against a baseline runtime.
//!
//! For every record that contains the baseline, each runtime's speedup is
//! `baseline_time / runtime_time`. Records without a baseline measurement
//! cannot be compared and are skipped with a [`Diagnostic`].
//!
//! Each entry also carries `ln(baseline_time) - ln(runtime_time)`, which stays
//! finite for any pair of valid timings even when the plain ratio does not.
//! Aggregation works on that value.

use crate::error::{Error, Result};
use crate::record::BenchmarkRecord;
use crate::store::ResultStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use tracing::{debug, info, warn};

/// Speedup of one runtime on one benchmark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedupEntry {
    /// Benchmark the speedup was measured on.
    pub benchmark_id: String,
    /// Runtime name.
    pub runtime: String,
    /// Baseline time divided by runtime time. Exactly `1.0` for the baseline.
    pub speedup: f64,
    /// Natural log of the speedup. Exactly `0.0` for the baseline.
    pub log_speedup: f64,
}

/// Non-fatal condition found while computing speedups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The record has no timing for the baseline runtime and was excluded.
    MissingBaseline {
        /// Excluded benchmark.
        benchmark_id: String,
        /// Baseline runtime that was expected.
        baseline: String,
    },
}

impl Diagnostic {
    /// Benchmark the diagnostic refers to.
    pub fn benchmark_id(&self) -> &str {
        match self {
            Diagnostic::MissingBaseline { benchmark_id, .. } => benchmark_id,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingBaseline {
                benchmark_id,
                baseline,
            } => write!(
                f,
                "{benchmark_id}: no '{baseline}' timing, excluded from comparison"
            ),
        }
    }
}

/// Speedup of a runtime with time `runtime_ms` relative to `baseline_ms`.
///
/// A ratio outside the `f64` range saturates to the largest finite or the
/// smallest positive value, so the result is always finite and positive.
pub fn speedup(baseline_ms: f64, runtime_ms: f64) -> f64 {
    saturate(baseline_ms / runtime_ms)
}

/// Natural log of [`speedup`], computed without forming the ratio.
pub fn log_speedup(baseline_ms: f64, runtime_ms: f64) -> f64 {
    baseline_ms.ln() - runtime_ms.ln()
}

/// Clamp a non-negative value into the positive finite `f64` range.
pub(crate) fn saturate(value: f64) -> f64 {
    value.clamp(f64::from_bits(1), f64::MAX)
}

/// Speedups of every comparable record in a result set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeedupTable {
    entries: Vec<SpeedupEntry>,
    compared: Vec<String>,
    diagnostics: Vec<Diagnostic>,
}

impl SpeedupTable {
    /// All entries, in record order then runtime name order.
    pub fn entries(&self) -> &[SpeedupEntry] {
        &self.entries
    }

    /// Identifiers of the benchmarks that contributed entries, in record order.
    pub fn compared_benchmarks(&self) -> &[String] {
        &self.compared
    }

    /// Records that were skipped and why.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Entries for one runtime.
    pub fn for_runtime<'a>(&'a self, runtime: &'a str) -> impl Iterator<Item = &'a SpeedupEntry> {
        self.entries.iter().filter(move |e| e.runtime == runtime)
    }

    /// Entries for one benchmark.
    pub fn for_benchmark<'a>(
        &'a self,
        benchmark_id: &'a str,
    ) -> impl Iterator<Item = &'a SpeedupEntry> {
        self.entries
            .iter()
            .filter(move |e| e.benchmark_id == benchmark_id)
    }

    /// Speedup of `runtime` on `benchmark_id`, if both took part.
    pub fn speedup(&self, benchmark_id: &str, runtime: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.benchmark_id == benchmark_id && e.runtime == runtime)
            .map(|e| e.speedup)
    }

    /// Runtimes with at least one entry, sorted.
    pub fn runtimes(&self) -> BTreeSet<&str> {
        self.entries.iter().map(|e| e.runtime.as_str()).collect()
    }

    /// Whether no benchmark could be compared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Converts raw timings into speedups relative to a baseline runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeedupCalculator {
    baseline: String,
}

impl SpeedupCalculator {
    /// Create a calculator for `baseline`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBaseline`] if the name is empty or blank.
    pub fn new(baseline: impl Into<String>) -> Result<Self> {
        let baseline = baseline.into();
        if baseline.trim().is_empty() {
            return Err(Error::invalid_baseline("baseline runtime name is empty"));
        }
        Ok(Self { baseline })
    }

    /// The baseline runtime name.
    pub fn baseline(&self) -> &str {
        &self.baseline
    }

    /// Speedups for every runtime of a validated record.
    ///
    /// Returns `None` when the record has no baseline timing.
    pub fn compute(&self, record: &BenchmarkRecord) -> Option<Vec<SpeedupEntry>> {
        let baseline_ms = record.timing(&self.baseline)?;

        let entries = record
            .timings
            .iter()
            .map(|(runtime, &time_ms)| {
                let (value, log_value) = if *runtime == self.baseline {
                    (1.0, 0.0)
                } else {
                    (
                        speedup(baseline_ms, time_ms),
                        log_speedup(baseline_ms, time_ms),
                    )
                };
                SpeedupEntry {
                    benchmark_id: record.benchmark_id.clone(),
                    runtime: runtime.clone(),
                    speedup: value,
                    log_speedup: log_value,
                }
            })
            .collect();
        Some(entries)
    }

    /// Speedups for every record in the store.
    pub fn compute_all(&self, store: &ResultStore) -> SpeedupTable {
        let mut table = SpeedupTable::default();

        for record in store {
            match self.compute(record) {
                Some(entries) => {
                    debug!(
                        benchmark_id = %record.benchmark_id,
                        runtimes = entries.len(),
                        "Computed speedups"
                    );
                    table.compared.push(record.benchmark_id.clone());
                    table.entries.extend(entries);
                }
                None => {
                    let diagnostic = Diagnostic::MissingBaseline {
                        benchmark_id: record.benchmark_id.clone(),
                        baseline: self.baseline.clone(),
                    };
                    warn!(%diagnostic, "Skipping benchmark");
                    table.diagnostics.push(diagnostic);
                }
            }
        }

        info!(
            baseline = %self.baseline,
            compared = table.compared.len(),
            skipped = table.diagnostics.len(),
            "Speedup computation finished"
        );
        table
    }
}
