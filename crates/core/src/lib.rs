// Copyright 2025 Runtime Ranking Contributors
// SPDX-License-Identifier: Apache-2.0

//! Cross-runtime benchmark ranking.
//!
//! This crate turns per-benchmark mean execution times into a single
//! ranking of runtimes by geometric-mean speedup over a baseline runtime.
//! It performs no I/O and never measures time itself.
//!
//! # Quick Start
//!
//! ```
//! use runtime_ranking_core::{analyze, BenchmarkRecord, ResultStore};
//!
//! let store = ResultStore::from_records(vec![
//!     BenchmarkRecord::new("BENCH-007", "Fibonacci")
//!         .with_timing("python", 100.0)
//!         .with_timing("go", 10.0),
//! ])?;
//!
//! let analysis = analyze(&store, "python")?;
//! assert_eq!(analysis.ranking().top().unwrap().score.runtime, "go");
//! # Ok::<(), runtime_ranking_core::Error>(())
//! ```
//!
//! # Modules
//!
//! - [`record`] - The `BenchmarkRecord` input type
//! - [`store`] - Validated, ordered result set
//! - [`speedup`] - Speedups relative to a baseline runtime
//! - [`aggregate`] - Log-domain geometric mean per runtime
//! - [`rank`] - Deterministic ordering of scores
//! - [`analysis`] - The full pipeline

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod aggregate;
pub mod analysis;
pub mod error;
pub mod rank;
pub mod record;
pub mod speedup;
pub mod store;

pub use aggregate::{geometric_mean, AggregateScore, GeometricMeanAggregator};
pub use analysis::{analyze, Analysis, DEFAULT_BASELINE};
pub use error::{Error, Result};
pub use rank::{RankedRuntime, Ranker, Ranking};
pub use record::BenchmarkRecord;
pub use speedup::{Diagnostic, SpeedupCalculator, SpeedupEntry, SpeedupTable};
pub use store::ResultStore;
