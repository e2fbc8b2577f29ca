//! Terminal report formatting.

use colored::*;
use runtime_ranking_benchmarks::table::{
    format_speedup, highlighted, is_partial, Cell, SpeedupMatrix,
};
use runtime_ranking_benchmarks::SkippedFile;
use runtime_ranking_core::{Analysis, ResultStore};
use std::fmt::Write;

const WIDTH: usize = 80;
const LABEL_WIDTH: usize = 40;
const CELL_WIDTH: usize = 15;

/// Renders an analysis as a plain-text, optionally colored, report.
pub struct TextReport<'a> {
    store: &'a ResultStore,
    analysis: &'a Analysis,
    highlight: Option<&'a str>,
    skipped_files: &'a [SkippedFile],
}

impl<'a> TextReport<'a> {
    /// Report over `analysis` of `store`.
    pub fn new(store: &'a ResultStore, analysis: &'a Analysis) -> Self {
        Self {
            store,
            analysis,
            highlight: None,
            skipped_files: &[],
        }
    }

    /// Add a summary of runtimes starting with `prefix`.
    pub fn highlight(mut self, prefix: Option<&'a str>) -> Self {
        self.highlight = prefix;
        self
    }

    /// List result files that were not loaded.
    pub fn skipped_files(mut self, skipped: &'a [SkippedFile]) -> Self {
        self.skipped_files = skipped;
        self
    }

    /// Render to a string.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let baseline = self.analysis.baseline();

        header(
            &mut out,
            &format!(
                "GEOMETRIC MEAN ANALYSIS - {} Completed Benchmarks",
                self.analysis.compared_benchmarks()
            ),
        );

        let matrix = SpeedupMatrix::build(self.store, self.analysis);
        writeln!(out, "{}", "Individual Benchmark Results:".bright_white().bold()).unwrap();
        let columns: Vec<String> = matrix
            .runtimes
            .iter()
            .map(|r| format!("{:>CELL_WIDTH$}", r))
            .collect();
        writeln!(out, "{:<LABEL_WIDTH$} | {}", "Benchmark", columns.join(" | ")).unwrap();
        writeln!(out, "{}", "-".repeat(WIDTH).blue()).unwrap();
        for row in &matrix.rows {
            let cells: Vec<String> = row
                .cells
                .iter()
                .map(|cell| {
                    let text = format!("{:>CELL_WIDTH$}", cell);
                    match cell {
                        Cell::Baseline => text.cyan().to_string(),
                        Cell::Speedup(v) if *v >= 1.0 => text.green().to_string(),
                        Cell::Speedup(_) => text.yellow().to_string(),
                        Cell::Missing => text.dimmed().to_string(),
                    }
                })
                .collect();
            writeln!(out, "{:<LABEL_WIDTH$} | {}", row.label, cells.join(" | ")).unwrap();
        }
        writeln!(out).unwrap();

        header(&mut out, "GEOMETRIC MEAN (Overall Performance):");
        if self.analysis.ranking().is_empty() {
            let message = format!("No runtime could be compared against '{baseline}'");
            writeln!(out, "  {}", message.red()).unwrap();
        }
        for entry in self.analysis.ranking() {
            let score = format!("{:>9}", format_speedup(entry.score.geometric_mean_speedup));
            let mut line = format!(
                "  {:>2}. {:<20} {}",
                entry.position,
                entry.score.runtime,
                score.bright_green().bold()
            );
            if entry.score.runtime == baseline {
                line.push_str("  (baseline)");
            }
            if is_partial(self.analysis, entry) {
                let note = format!(
                    "  [{} of {} benchmarks]",
                    entry.score.benchmark_count,
                    self.analysis.compared_benchmarks()
                );
                line.push_str(&note.yellow().to_string());
            }
            writeln!(out, "{line}").unwrap();
        }
        writeln!(out).unwrap();

        header(&mut out, "INTERPRETATION:");
        writeln!(
            out,
            "  Benchmarks analyzed: {}",
            self.analysis.compared_benchmarks().to_string().bright_white().bold()
        )
        .unwrap();
        writeln!(
            out,
            "  Geometric mean is the honest average speedup across all benchmarks"
        )
        .unwrap();
        writeln!(out, "  Values > 1.0x mean faster than {baseline} baseline").unwrap();
        writeln!(out, "  Values < 1.0x mean slower than {baseline} baseline").unwrap();
        writeln!(out).unwrap();

        if let Some(prefix) = self.highlight {
            let selected = highlighted(self.analysis, prefix);
            if !selected.is_empty() {
                writeln!(
                    out,
                    "{}",
                    format!("{} PERFORMANCE SUMMARY:", prefix.to_uppercase())
                        .bright_white()
                        .bold()
                )
                .unwrap();
                for entry in selected {
                    writeln!(
                        out,
                        "  {:<20} {:>9} average speedup",
                        entry.score.runtime,
                        format_speedup(entry.score.geometric_mean_speedup)
                    )
                    .unwrap();
                }
                writeln!(out).unwrap();
            }
        }

        if !self.analysis.diagnostics().is_empty() || !self.skipped_files.is_empty() {
            writeln!(out, "{}", "SKIPPED:".yellow().bold()).unwrap();
            for diagnostic in self.analysis.diagnostics() {
                writeln!(out, "  {} {}", "!".yellow(), diagnostic).unwrap();
            }
            for skipped in self.skipped_files {
                writeln!(out, "  {} {}", "✗".red(), skipped.reason).unwrap();
            }
            writeln!(out).unwrap();
        }

        out
    }
}

fn header(out: &mut String, title: &str) {
    writeln!(out, "{}", "=".repeat(WIDTH).bright_blue()).unwrap();
    writeln!(out, "{}", title.bright_white().bold()).unwrap();
    writeln!(out, "{}", "=".repeat(WIDTH).bright_blue()).unwrap();
    writeln!(out).unwrap();
}
