//! Error types for loading result files and writing reports.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or writing benchmark results.
#[derive(Debug, Error)]
pub enum BenchmarksError {
    /// The results directory does not exist.
    #[error("Results directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),

    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File or directory involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// A result file is not valid JSON or does not match the schema.
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        /// Offending file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// A result file parsed but its record was rejected.
    #[error("Rejected {}: {source}", .path.display())]
    InvalidFile {
        /// Offending file.
        path: PathBuf,
        /// Validation error from the ranking core.
        #[source]
        source: runtime_ranking_core::Error,
    },

    /// An analysis could not be serialized.
    #[error("Failed to serialize report: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl BenchmarksError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        BenchmarksError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for this crate.
pub type Result<T> = std::result::Result<T, BenchmarksError>;
