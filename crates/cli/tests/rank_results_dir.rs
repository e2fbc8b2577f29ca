//! End-to-end ranking of a results directory.

use runtime_ranking_benchmarks::DirectorySource;
use runtime_ranking_cli::{rank, OutputFormat, Settings};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_result(dir: &Path, file: &str, id: &str, name: &str, modes: &[(&str, f64)]) {
    let modes: Vec<String> = modes
        .iter()
        .map(|(mode, mean)| format!(r#""{mode}": {{"mean_ms": {mean}, "samples": 10}}"#))
        .collect();
    let json = format!(
        r#"{{"benchmark": "{id}", "name": "{name}", "modes": {{{}}}}}"#,
        modes.join(", ")
    );
    fs::write(dir.join(file), json).unwrap();
}

fn results_dir() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_result(
        tmp.path(),
        "bench-011-results-full.json",
        "BENCH-011",
        "Nested loops",
        &[
            ("python", 58.74),
            ("deno", 31.21),
            ("julia", 1.24),
            ("ruchy-ast", 789.10),
            ("ruchy-compiled", 2.03),
        ],
    );
    write_result(
        tmp.path(),
        "bench-007-results-full.json",
        "BENCH-007",
        "Fibonacci",
        &[("python", 100.0), ("julia", 10.0), ("ruchy-compiled", 10.0)],
    );
    write_result(
        tmp.path(),
        "bench-012-results-full.json",
        "BENCH-012",
        "No python run",
        &[("julia", 3.0)],
    );
    fs::write(tmp.path().join("bench-013-results-full.json"), "{").unwrap();
    tmp
}

fn settings(dir: &Path) -> Settings {
    Settings {
        results_dir: dir.to_path_buf(),
        highlight_prefix: Some("ruchy".to_string()),
        ..Settings::default()
    }
}

#[test]
fn test_markdown_report_from_directory() {
    let tmp = results_dir();
    let settings = settings(tmp.path());
    let source = DirectorySource::new(tmp.path());

    let md = rank(&source, &settings, OutputFormat::Markdown, false).unwrap();

    // Files are read in name order, so BENCH-007 comes first.
    let fib = md.find("| BENCH-007: Fibonacci").unwrap();
    let loops = md.find("| BENCH-011: Nested loops").unwrap();
    assert!(fib < loops);

    assert!(md.contains("| 1 | julia | "));
    assert!(md.contains("| deno | 1.88x | 1 of 2 |"));
    assert!(md.contains("BENCH-012: no 'python' timing"));
    assert!(md.contains("**ruchy-compiled**"));
    assert!(md.contains("## Skipped Files"));
    assert!(md.contains("bench-013-results-full.json`: Failed to parse"));
}

#[test]
fn test_json_report_traces_speedups() {
    let tmp = results_dir();
    let source = DirectorySource::new(tmp.path());

    let json = rank(&source, &settings(tmp.path()), OutputFormat::Json, false).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["ranking"][0]["runtime"], "julia");
    assert_eq!(value["ranking"][0]["benchmark_count"], 2);
    let entries = value["speedups"]["entries"].as_array().unwrap();
    assert!(entries
        .iter()
        .all(|e| e["benchmark_id"] != "BENCH-012"));

    let skipped = value["skipped_files"].as_array().unwrap();
    assert_eq!(skipped.len(), 1);
    assert!(skipped[0]["path"]
        .as_str()
        .unwrap()
        .ends_with("bench-013-results-full.json"));
}

#[test]
fn test_strict_mode_rejects_broken_file() {
    let tmp = results_dir();
    let source = DirectorySource::new(tmp.path());
    let settings = Settings {
        strict: true,
        ..settings(tmp.path())
    };

    let err = rank(&source, &settings, OutputFormat::Text, false).unwrap_err();
    assert!(format!("{err:#}").contains("bench-013-results-full.json"));
}

#[test]
fn test_missing_directory_fails() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("results");
    let source = DirectorySource::new(&missing);

    let err = rank(&source, &settings(&missing), OutputFormat::Text, false).unwrap_err();
    assert!(format!("{err:#}").contains("Results directory not found"));
}
