//! Markdown output generation for rankings.
//!
//! This module renders an [`Analysis`] as markdown tables suitable for
//! committing next to the benchmark results.

use crate::io::SkippedFile;
use crate::table::{format_speedup, highlighted, is_partial, SpeedupMatrix};
use runtime_ranking_core::{Analysis, ResultStore};
use std::fmt::Write;

/// Generate a markdown summary: speedup matrix, ranking, skipped records and
/// result files that were not loaded.
pub fn generate_summary(
    store: &ResultStore,
    analysis: &Analysis,
    highlight: Option<&str>,
    skipped_files: &[SkippedFile],
) -> String {
    let mut output = String::new();
    let baseline = analysis.baseline();

    writeln!(output, "# Geometric Mean Analysis").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "Generated: {}", chrono::Utc::now().to_rfc3339()).unwrap();
    writeln!(output).unwrap();
    writeln!(
        output,
        "Speedups are relative to `{}` (baseline = 1.00x). Benchmarks analyzed: {}.",
        baseline,
        analysis.compared_benchmarks()
    )
    .unwrap();
    writeln!(output).unwrap();

    let matrix = SpeedupMatrix::build(store, analysis);
    if !matrix.rows.is_empty() {
        writeln!(output, "## Individual Benchmark Results").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "| Benchmark | {} |", matrix.runtimes.join(" | ")).unwrap();
        writeln!(output, "|---{}|", "|---:".repeat(matrix.runtimes.len())).unwrap();
        for row in &matrix.rows {
            let cells: Vec<String> = row.cells.iter().map(ToString::to_string).collect();
            writeln!(output, "| {} | {} |", row.label, cells.join(" | ")).unwrap();
        }
        writeln!(output).unwrap();
    }

    writeln!(output, "## Geometric Mean Ranking").unwrap();
    writeln!(output).unwrap();
    if analysis.ranking().is_empty() {
        writeln!(output, "_No benchmark could be compared against `{baseline}`._").unwrap();
    } else {
        writeln!(output, "| Rank | Runtime | Geometric Mean | Benchmarks |").unwrap();
        writeln!(output, "|---:|---|---:|---:|").unwrap();
        for entry in analysis.ranking() {
            let marker = if entry.score.runtime == baseline {
                " (baseline)"
            } else {
                ""
            };
            let count = if is_partial(analysis, entry) {
                format!(
                    "{} of {}",
                    entry.score.benchmark_count,
                    analysis.compared_benchmarks()
                )
            } else {
                entry.score.benchmark_count.to_string()
            };
            writeln!(
                output,
                "| {} | {}{} | {} | {} |",
                entry.position,
                entry.score.runtime,
                marker,
                format_speedup(entry.score.geometric_mean_speedup),
                count
            )
            .unwrap();
        }
    }
    writeln!(output).unwrap();

    if let Some(prefix) = highlight {
        let selected = highlighted(analysis, prefix);
        if !selected.is_empty() {
            writeln!(output, "## `{prefix}*` Performance Summary").unwrap();
            writeln!(output).unwrap();
            for entry in selected {
                writeln!(
                    output,
                    "- **{}**: {} average speedup (rank {})",
                    entry.score.runtime,
                    format_speedup(entry.score.geometric_mean_speedup),
                    entry.position
                )
                .unwrap();
            }
            writeln!(output).unwrap();
        }
    }

    if !analysis.diagnostics().is_empty() {
        writeln!(output, "## Skipped Benchmarks").unwrap();
        writeln!(output).unwrap();
        for diagnostic in analysis.diagnostics() {
            writeln!(output, "- {diagnostic}").unwrap();
        }
        writeln!(output).unwrap();
    }

    if !skipped_files.is_empty() {
        writeln!(output, "## Skipped Files").unwrap();
        writeln!(output).unwrap();
        for skipped in skipped_files {
            writeln!(output, "- `{}`: {}", skipped.path.display(), skipped.reason).unwrap();
        }
        writeln!(output).unwrap();
    }

    writeln!(output, "---").unwrap();
    writeln!(
        output,
        "Values > 1.00x are faster than `{baseline}`; values < 1.00x are slower."
    )
    .unwrap();

    output
}

/// Generate a detailed report listing the speedups behind every score.
pub fn generate_detailed_report(analysis: &Analysis) -> String {
    let mut output = String::new();

    writeln!(output, "# Detailed Ranking Report").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "Generated: {}", chrono::Utc::now().to_rfc3339()).unwrap();
    writeln!(output).unwrap();

    for entry in analysis.ranking() {
        writeln!(output, "## {}. {}", entry.position, entry.score.runtime).unwrap();
        writeln!(output).unwrap();
        writeln!(
            output,
            "**Geometric mean:** {} over {} benchmark(s)",
            format_speedup(entry.score.geometric_mean_speedup),
            entry.score.benchmark_count
        )
        .unwrap();
        writeln!(output).unwrap();
        for contribution in analysis.contributions(&entry.score.runtime) {
            writeln!(
                output,
                "- {}: {}",
                contribution.benchmark_id,
                format_speedup(contribution.speedup)
            )
            .unwrap();
        }
        writeln!(output).unwrap();
    }

    output
}
