//! I/O operations for benchmark results.
//!
//! This module discovers result files in a results directory, loads them
//! into a [`ResultStore`], and writes generated reports back to disk.

use crate::error::{BenchmarksError, Result};
use crate::result::BenchmarkFile;
use runtime_ranking_core::{Analysis, ResultStore};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Default results directory path.
pub const RESULTS_DIR: &str = "results";

/// File name prefix of a full benchmark result.
pub const FILE_PREFIX: &str = "bench-";

/// File name suffix of a full benchmark result.
pub const FILE_SUFFIX: &str = "-results-full.json";

/// Which files in a results directory hold benchmark results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePattern {
    /// Required file name prefix.
    pub prefix: String,
    /// Required file name suffix.
    pub suffix: String,
}

impl Default for FilePattern {
    fn default() -> Self {
        Self {
            prefix: FILE_PREFIX.to_string(),
            suffix: FILE_SUFFIX.to_string(),
        }
    }
}

impl FilePattern {
    /// Whether `file_name` matches the pattern.
    pub fn matches(&self, file_name: &str) -> bool {
        file_name.len() >= self.prefix.len() + self.suffix.len()
            && file_name.starts_with(&self.prefix)
            && file_name.ends_with(&self.suffix)
    }
}

/// What to do with a result file that cannot be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadPolicy {
    /// Abort loading on the first bad file.
    Strict,
    /// Skip bad files and report them.
    #[default]
    Lenient,
}

/// A file that was not loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    /// Path of the file.
    pub path: PathBuf,
    /// Why it was skipped.
    pub reason: String,
}

/// Outcome of loading a results directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Files whose records were added, in load order.
    pub loaded: Vec<PathBuf>,
    /// Files that were skipped under [`LoadPolicy::Lenient`].
    pub skipped: Vec<SkippedFile>,
}

/// Result files in `dir` matching `pattern`, sorted by file name.
pub fn discover(dir: impl AsRef<Path>, pattern: &FilePattern) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(BenchmarksError::MissingDirectory(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| BenchmarksError::io(dir, e))? {
        let entry = entry.map_err(|e| BenchmarksError::io(dir, e))?;
        let path = entry.path();
        let matched = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| pattern.matches(n));
        if matched && path.is_file() {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    debug!(dir = %dir.display(), count = files.len(), "Discovered result files");
    Ok(files)
}

/// Read and parse one result file.
pub fn read_benchmark_file(path: impl AsRef<Path>) -> Result<BenchmarkFile> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| BenchmarksError::io(path, e))?;
    BenchmarkFile::from_json(&content).map_err(|source| BenchmarksError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn load_file(store: &mut ResultStore, path: &Path) -> Result<()> {
    let record = read_benchmark_file(path)?.into_record();
    store
        .insert(record)
        .map_err(|source| BenchmarksError::InvalidFile {
            path: path.to_path_buf(),
            source,
        })
}

/// Load every matching result file of `dir` into a new store.
///
/// Records keep the sorted file-name order. Under [`LoadPolicy::Strict`] the
/// first unreadable, malformed or invalid file aborts the load.
pub fn load_dir(
    dir: impl AsRef<Path>,
    pattern: &FilePattern,
    policy: LoadPolicy,
) -> Result<(ResultStore, LoadReport)> {
    let mut store = ResultStore::new();
    let mut report = LoadReport::default();

    for path in discover(dir, pattern)? {
        match load_file(&mut store, &path) {
            Ok(()) => report.loaded.push(path),
            Err(err) if policy == LoadPolicy::Lenient => {
                warn!(error = %err, "Skipping result file");
                report.skipped.push(SkippedFile {
                    path,
                    reason: err.to_string(),
                });
            }
            Err(err) => return Err(err),
        }
    }

    info!(
        loaded = report.loaded.len(),
        skipped = report.skipped.len(),
        "Loaded benchmark results"
    );
    Ok((store, report))
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    analysis: &'a Analysis,
    skipped_files: &'a [SkippedFile],
}

/// Serialize an analysis, plus the files that were not loaded, as pretty JSON.
pub fn analysis_to_json(analysis: &Analysis, skipped_files: &[SkippedFile]) -> Result<String> {
    let report = JsonReport {
        analysis,
        skipped_files,
    };
    serde_json::to_string_pretty(&report).map_err(BenchmarksError::Serialize)
}

/// Write a rendered report, creating parent directories as needed.
pub fn write_report(path: impl AsRef<Path>, contents: &str) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| BenchmarksError::io(parent, e))?;
    }
    fs::write(path, contents).map_err(|e| BenchmarksError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use runtime_ranking_core::analyze;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).unwrap();
    }

    fn result_json(id: &str, modes: &[(&str, f64)]) -> String {
        let modes: Vec<String> = modes
            .iter()
            .map(|(m, t)| format!(r#""{m}": {{"mean_ms": {t}}}"#))
            .collect();
        format!(
            r#"{{"benchmark": "{id}", "name": "{id} name", "modes": {{{}}}}}"#,
            modes.join(", ")
        )
    }

    #[test]
    fn test_file_pattern_matches() {
        let pattern = FilePattern::default();
        assert!(pattern.matches("bench-007-results-full.json"));
        assert!(!pattern.matches("bench-007-results.json"));
        assert!(!pattern.matches("summary.json"));
        assert!(!pattern.matches("bench-results-full.json"));
    }

    #[test]
    fn test_discover_sorts_by_file_name() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "bench-011-results-full.json", "{}");
        write(tmp.path(), "bench-002-results-full.json", "{}");
        write(tmp.path(), "notes.txt", "");

        let files = discover(tmp.path(), &FilePattern::default()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(
            names,
            vec!["bench-002-results-full.json", "bench-011-results-full.json"]
        );
    }

    #[test]
    fn test_discover_missing_directory() {
        let tmp = TempDir::new().unwrap();
        let err = discover(tmp.path().join("nope"), &FilePattern::default()).unwrap_err();
        assert!(matches!(err, BenchmarksError::MissingDirectory(_)));
    }

    #[test]
    fn test_load_dir_builds_store() {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            "bench-003-results-full.json",
            &result_json("BENCH-003", &[("python", 100.0), ("go", 10.0)]),
        );
        write(
            tmp.path(),
            "bench-007-results-full.json",
            &result_json("BENCH-007", &[("python", 50.0)]),
        );

        let (store, report) =
            load_dir(tmp.path(), &FilePattern::default(), LoadPolicy::Strict).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0].benchmark_id, "BENCH-003");
        assert_eq!(report.loaded.len(), 2);
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_lenient_load_skips_bad_files() {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            "bench-001-results-full.json",
            &result_json("BENCH-001", &[("python", 10.0)]),
        );
        write(tmp.path(), "bench-002-results-full.json", "not json");
        write(
            tmp.path(),
            "bench-003-results-full.json",
            &result_json("BENCH-003", &[("python", 0.0)]),
        );
        write(
            tmp.path(),
            "bench-004-results-full.json",
            &result_json("BENCH-001", &[("python", 10.0)]),
        );

        let (store, report) =
            load_dir(tmp.path(), &FilePattern::default(), LoadPolicy::Lenient).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(report.skipped.len(), 3);
        assert!(report.skipped[0].reason.contains("Failed to parse"));
        assert!(report.skipped[1].reason.contains("positive"));
        assert!(report.skipped[2].reason.contains("duplicate"));
    }

    #[test]
    fn test_strict_load_aborts() {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            "bench-001-results-full.json",
            &result_json("BENCH-001", &[("python", -1.0)]),
        );

        let err = load_dir(tmp.path(), &FilePattern::default(), LoadPolicy::Strict).unwrap_err();
        assert!(matches!(err, BenchmarksError::InvalidFile { .. }));
    }

    #[test]
    fn test_write_report_creates_parents() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out/nested/report.md");
        write_report(&path, "# Report").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "# Report");
    }

    #[test]
    fn test_analysis_to_json() {
        let store = ResultStore::from_records(vec![runtime_ranking_core::BenchmarkRecord::new(
            "b", "",
        )
        .with_timing("python", 2.0)
        .with_timing("go", 1.0)])
        .unwrap();
        let analysis = analyze(&store, "python").unwrap();

        let skipped = vec![SkippedFile {
            path: PathBuf::from("results/bench-013-results-full.json"),
            reason: "Failed to parse bench-013".to_string(),
        }];

        let json = analysis_to_json(&analysis, &skipped).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["ranking"][0]["runtime"], "go");
        assert_eq!(value["baseline"], "python");
        assert_eq!(
            value["skipped_files"][0]["path"],
            "results/bench-013-results-full.json"
        );
        assert_eq!(value["skipped_files"][0]["reason"], "Failed to parse bench-013");

        let json = analysis_to_json(&analysis, &[]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["skipped_files"], serde_json::json!([]));
    }
}
