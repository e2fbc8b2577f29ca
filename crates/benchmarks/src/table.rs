//! Presentation model shared by the report formats.
//!
//! Values are rounded here and nowhere earlier.

use runtime_ranking_core::{Analysis, RankedRuntime, ResultStore};
use std::fmt;

/// Format a speedup for display, e.g. `12.96x`.
pub fn format_speedup(value: f64) -> String {
    format!("{value:.2}x")
}

/// One cell of the speedup matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell {
    /// The baseline runtime's own column.
    Baseline,
    /// A measured speedup.
    Speedup(f64),
    /// The runtime did not run this benchmark.
    Missing,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Baseline => f.pad("baseline"),
            Cell::Speedup(v) => f.pad(&format_speedup(*v)),
            Cell::Missing => f.pad("N/A"),
        }
    }
}

/// A benchmark row of the speedup matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixRow {
    /// Benchmark identifier.
    pub benchmark_id: String,
    /// `"{id}: {display name}"`, or the id alone when there is no name.
    pub label: String,
    /// One cell per runtime column.
    pub cells: Vec<Cell>,
}

/// Per-benchmark speedups laid out as benchmarks × runtimes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpeedupMatrix {
    /// Column headers, sorted.
    pub runtimes: Vec<String>,
    /// Compared benchmarks in result-set order.
    pub rows: Vec<MatrixRow>,
}

impl SpeedupMatrix {
    /// Build the matrix of every compared benchmark in `analysis`.
    pub fn build(store: &ResultStore, analysis: &Analysis) -> Self {
        let speedups = analysis.speedups();
        let runtimes: Vec<String> = speedups.runtimes().into_iter().map(String::from).collect();

        let rows = speedups
            .compared_benchmarks()
            .iter()
            .map(|id| {
                let cells = runtimes
                    .iter()
                    .map(|runtime| match speedups.speedup(id, runtime) {
                        Some(_) if runtime == analysis.baseline() => Cell::Baseline,
                        Some(v) => Cell::Speedup(v),
                        None => Cell::Missing,
                    })
                    .collect();
                MatrixRow {
                    benchmark_id: id.clone(),
                    label: row_label(store, id),
                    cells,
                }
            })
            .collect();

        Self { runtimes, rows }
    }
}

fn row_label(store: &ResultStore, benchmark_id: &str) -> String {
    match store.get(benchmark_id) {
        Some(record) if !record.display_name.is_empty() => {
            format!("{}: {}", benchmark_id, record.display_name)
        }
        _ => benchmark_id.to_string(),
    }
}

/// Ranked runtimes whose name starts with `prefix`, best first.
pub fn highlighted<'a>(analysis: &'a Analysis, prefix: &str) -> Vec<&'a RankedRuntime> {
    analysis
        .ranking()
        .iter()
        .filter(|e| e.score.runtime.starts_with(prefix))
        .collect()
}

/// Whether a runtime's score covers fewer benchmarks than were compared.
pub fn is_partial(analysis: &Analysis, entry: &RankedRuntime) -> bool {
    entry.score.benchmark_count < analysis.compared_benchmarks()
}

#[cfg(test)]
mod tests {
    use super::*;
    use runtime_ranking_core::{analyze, BenchmarkRecord};

    fn fixture() -> (ResultStore, Analysis) {
        let store = ResultStore::from_records(vec![
            BenchmarkRecord::new("BENCH-003", "String concat")
                .with_timing("python", 36.7)
                .with_timing("ruchy-compiled", 6.82)
                .with_timing("go", 4.44),
            BenchmarkRecord::new("BENCH-005", "")
                .with_timing("python", 17.4)
                .with_timing("go", 0.75),
            BenchmarkRecord::new("BENCH-012", "No baseline").with_timing("go", 1.0),
        ])
        .unwrap();
        let analysis = analyze(&store, "python").unwrap();
        (store, analysis)
    }

    #[test]
    fn test_format_speedup_rounds() {
        assert_eq!(format_speedup(12.958), "12.96x");
        assert_eq!(format_speedup(0.0731), "0.07x");
    }

    #[test]
    fn test_cell_display_pads() {
        assert_eq!(format!("{:>10}", Cell::Missing), "       N/A");
        assert_eq!(format!("{:>10}", Cell::Speedup(2.0)), "     2.00x");
        assert_eq!(format!("{}", Cell::Baseline), "baseline");
    }

    #[test]
    fn test_matrix_layout() {
        let (store, analysis) = fixture();
        let matrix = SpeedupMatrix::build(&store, &analysis);

        assert_eq!(matrix.runtimes, vec!["go", "python", "ruchy-compiled"]);
        assert_eq!(matrix.rows.len(), 2);
        assert_eq!(matrix.rows[0].label, "BENCH-003: String concat");
        assert_eq!(matrix.rows[1].label, "BENCH-005");
        assert_eq!(matrix.rows[0].cells[1], Cell::Baseline);
        assert_eq!(matrix.rows[1].cells[2], Cell::Missing);
        assert!(matches!(matrix.rows[1].cells[0], Cell::Speedup(v) if (v - 23.2).abs() < 1e-9));
    }

    #[test]
    fn test_highlighted_and_partial() {
        let (_, analysis) = fixture();
        let ruchy = highlighted(&analysis, "ruchy");
        assert_eq!(ruchy.len(), 1);
        assert!(is_partial(&analysis, ruchy[0]));

        let go = analysis.ranking().get("go").unwrap();
        assert!(!is_partial(&analysis, go));
    }
}
