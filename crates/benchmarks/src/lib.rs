//! Benchmark result loading and reporting for runtime rankings.
//!
//! This crate connects the benchmark harness output to the ranking core:
//! it reads per-benchmark result files into a validated
//! [`ResultStore`](runtime_ranking_core::ResultStore) and renders the
//! resulting [`Analysis`](runtime_ranking_core::Analysis) as markdown or JSON.
//!
//! # Quick Start
//!
//! ```no_run
//! use runtime_ranking_benchmarks::{DirectorySource, LoadPolicy, ResultSource};
//! use runtime_ranking_core::analyze;
//!
//! let loaded = DirectorySource::new("results").load(LoadPolicy::Lenient)?;
//! let analysis = analyze(&loaded.store, "python")?;
//!
//! for entry in analysis.ranking() {
//!     println!("{}: {:.2}x", entry.score.runtime, entry.score.geometric_mean_speedup);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Modules
//!
//! - [`result`] - The on-disk result file schema
//! - [`io`] - Discovery, loading and report writing
//! - [`source`] - The `ResultSource` abstraction
//! - [`table`] - Presentation model shared by report formats
//! - [`markdown`] - Markdown report generation

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod error;
pub mod io;
pub mod markdown;
pub mod result;
pub mod source;
pub mod table;

pub use error::{BenchmarksError, Result};
pub use io::{FilePattern, LoadPolicy, LoadReport, SkippedFile};
pub use result::{BenchmarkFile, ModeStats};
pub use source::{DirectorySource, Loaded, ResultSource};
