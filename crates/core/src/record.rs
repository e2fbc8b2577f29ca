// Copyright 2025 Runtime Ranking Contributors
// SPDX-License-Identifier: Apache-2.0

//! Benchmark record type.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mean execution times of one benchmark, keyed by runtime name.
///
/// Timings are in milliseconds. Records need not cover the same runtimes;
/// a runtime missing from a record simply did not run that benchmark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    /// Identifier, unique within a result set (e.g. `BENCH-007`).
    pub benchmark_id: String,
    /// Human label. Not used in computation.
    #[serde(default)]
    pub display_name: String,
    /// Runtime name to mean execution time in milliseconds.
    #[serde(default)]
    pub timings: BTreeMap<String, f64>,
}

impl BenchmarkRecord {
    /// Create a record with no timings.
    pub fn new(benchmark_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            benchmark_id: benchmark_id.into(),
            display_name: display_name.into(),
            timings: BTreeMap::new(),
        }
    }

    /// Add (or replace) the mean time of a runtime.
    pub fn with_timing(mut self, runtime: impl Into<String>, mean_ms: f64) -> Self {
        self.timings.insert(runtime.into(), mean_ms);
        self
    }

    /// Mean time of `runtime`, if it ran this benchmark.
    pub fn timing(&self, runtime: &str) -> Option<f64> {
        self.timings.get(runtime).copied()
    }

    /// Runtime names in lexicographic order.
    pub fn runtimes(&self) -> impl Iterator<Item = &str> {
        self.timings.keys().map(String::as_str)
    }

    /// Check that every timing is a finite, strictly positive number.
    pub fn validate(&self) -> Result<()> {
        for (runtime, &value) in &self.timings {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::non_positive_timing(
                    self.benchmark_id.clone(),
                    runtime,
                    value,
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_collects_timings() {
        let record = BenchmarkRecord::new("BENCH-008", "Prime sieve")
            .with_timing("python", 120.5)
            .with_timing("go", 6.2);
        assert_eq!(record.timing("python"), Some(120.5));
        assert_eq!(record.timing("rust"), None);
        assert_eq!(record.runtimes().collect::<Vec<_>>(), vec!["go", "python"]);
    }

    #[test]
    fn test_validate_accepts_positive_timings() {
        let record = BenchmarkRecord::new("b", "").with_timing("python", 0.001);
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero() {
        let record = BenchmarkRecord::new("b", "").with_timing("go", 0.0);
        assert!(record.validate().unwrap_err().is_invalid_record());
    }

    #[test]
    fn test_validate_rejects_negative_and_nan() {
        let negative = BenchmarkRecord::new("b", "").with_timing("go", -3.0);
        assert!(negative.validate().is_err());

        let nan = BenchmarkRecord::new("b", "").with_timing("go", f64::NAN);
        assert!(nan.validate().is_err());

        let inf = BenchmarkRecord::new("b", "").with_timing("go", f64::INFINITY);
        assert!(inf.validate().is_err());
    }

    #[test]
    fn test_deserialize_without_display_name() {
        let record: BenchmarkRecord =
            serde_json::from_str(r#"{"benchmark_id":"x","timings":{"c":1.5}}"#).unwrap();
        assert_eq!(record.display_name, "");
        assert_eq!(record.timing("c"), Some(1.5));
    }
}
