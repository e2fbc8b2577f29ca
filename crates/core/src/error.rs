// Copyright 2025 Runtime Ranking Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types for the ranking core.
//!
//! Only conditions that invalidate input are errors. A record without a
//! baseline measurement is reported as a [`crate::Diagnostic`] and a runtime
//! without coverage simply has no score.

use thiserror::Error;

/// Errors raised while building a result set or configuring a computation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A benchmark record violates a result-set invariant.
    #[error("Invalid record '{benchmark_id}': {reason}")]
    InvalidRecord {
        /// Identifier of the offending record.
        benchmark_id: String,
        /// Human readable reason.
        reason: String,
    },

    /// The baseline runtime name cannot identify any runtime.
    #[error("Invalid baseline runtime: {0}")]
    InvalidBaseline(String),
}

impl Error {
    /// A timing that is zero, negative or not a finite number.
    pub fn non_positive_timing(benchmark_id: impl Into<String>, runtime: &str, value: f64) -> Self {
        Error::InvalidRecord {
            benchmark_id: benchmark_id.into(),
            reason: format!(
                "timing for runtime '{runtime}' must be a positive number, got {value}"
            ),
        }
    }

    /// A record whose identifier is already present in the result set.
    pub fn duplicate_id(benchmark_id: impl Into<String>) -> Self {
        Error::InvalidRecord {
            benchmark_id: benchmark_id.into(),
            reason: "duplicate benchmark_id".to_string(),
        }
    }

    /// A baseline name that is empty or blank.
    pub fn invalid_baseline(msg: impl Into<String>) -> Self {
        Error::InvalidBaseline(msg.into())
    }

    /// Whether this error rejects a single record rather than the whole run.
    pub fn is_invalid_record(&self) -> bool {
        matches!(self, Error::InvalidRecord { .. })
    }
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, Error>;
