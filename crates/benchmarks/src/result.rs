//! On-disk benchmark result schema.
//!
//! The benchmark harness writes one JSON document per benchmark, holding
//! summary statistics for every execution mode (runtime) that ran it.

use runtime_ranking_core::BenchmarkRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Summary statistics of one execution mode, in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeStats {
    /// Mean execution time. The only value used for ranking.
    pub mean_ms: f64,
    /// Median execution time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub median_ms: Option<f64>,
    /// Fastest sample.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_ms: Option<f64>,
    /// Slowest sample.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_ms: Option<f64>,
    /// Standard deviation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub std_ms: Option<f64>,
    /// Number of samples behind the statistics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub samples: Option<u32>,
}

impl ModeStats {
    /// Stats with only a mean.
    pub fn from_mean(mean_ms: f64) -> Self {
        Self {
            mean_ms,
            median_ms: None,
            min_ms: None,
            max_ms: None,
            std_ms: None,
            samples: None,
        }
    }
}

/// One benchmark result file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkFile {
    /// Benchmark identifier (e.g. `BENCH-007`).
    pub benchmark: String,
    /// Human readable benchmark name.
    pub name: String,
    /// Statistics per execution mode.
    pub modes: BTreeMap<String, ModeStats>,
}

impl BenchmarkFile {
    /// Parse a result document.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Convert into a ranking record, keeping only mean times.
    pub fn into_record(self) -> BenchmarkRecord {
        let timings = self
            .modes
            .into_iter()
            .map(|(mode, stats)| (mode, stats.mean_ms))
            .collect();
        BenchmarkRecord {
            benchmark_id: self.benchmark,
            display_name: self.name,
            timings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "benchmark": "BENCH-007",
        "name": "Fibonacci recursive",
        "iterations": 10,
        "modes": {
            "python": {"mean_ms": 689.1, "median_ms": 688.0, "min_ms": 680.2,
                       "max_ms": 701.9, "std_ms": 5.1, "samples": 10},
            "go": {"mean_ms": 83.8}
        }
    }"#;

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let file = BenchmarkFile::from_json(SAMPLE).unwrap();
        assert_eq!(file.benchmark, "BENCH-007");
        assert_eq!(file.modes.len(), 2);
        assert_eq!(file.modes["python"].samples, Some(10));
        assert_eq!(file.modes["go"], ModeStats::from_mean(83.8));
    }

    #[test]
    fn test_into_record_keeps_means() {
        let record = BenchmarkFile::from_json(SAMPLE).unwrap().into_record();
        assert_eq!(record.benchmark_id, "BENCH-007");
        assert_eq!(record.display_name, "Fibonacci recursive");
        assert_eq!(record.timing("python"), Some(689.1));
        assert_eq!(record.timing("go"), Some(83.8));
    }

    #[test]
    fn test_parse_requires_mean() {
        let json = r#"{"benchmark":"b","name":"n","modes":{"go":{"median_ms":1.0}}}"#;
        assert!(BenchmarkFile::from_json(json).is_err());
    }
}
