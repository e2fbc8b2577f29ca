//! CLI for runtime rankings.
//!
//! This crate provides the `runtime-ranking` command-line interface: the
//! `rank` subcommand loads benchmark result files, ranks runtimes by
//! geometric-mean speedup over a baseline and prints a report; `status`
//! shows what would be analyzed.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod logging;
pub mod report;
pub mod settings;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use runtime_ranking_benchmarks::{io, markdown, DirectorySource, ResultSource};
use runtime_ranking_core::Analysis;
use std::path::PathBuf;
use tracing::info;

pub use report::TextReport;
pub use settings::Settings;

/// Runtime ranking CLI.
#[derive(Parser, Debug)]
#[command(name = "runtime-ranking")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to ./runtime-ranking.toml when present).
    #[arg(long, global = true, env = "RANKING_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank runtimes by geometric-mean speedup over the baseline.
    ///
    /// Reads every `bench-*-results-full.json` file of the results directory,
    /// computes per-benchmark speedups and prints the ranking.
    Rank(RankArgs),

    /// Show configuration, discovered result files and runtimes.
    Status {
        /// Results directory override.
        #[arg(long, env = "RANKING_RESULTS_DIR")]
        results_dir: Option<PathBuf>,

        /// List every discovered file.
        #[arg(short, long)]
        detailed: bool,
    },
}

/// Output formats of the `rank` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human readable terminal report.
    #[default]
    Text,
    /// Markdown tables.
    Markdown,
    /// Serialized analysis.
    Json,
}

/// Arguments of the `rank` command.
#[derive(Args, Debug, Default)]
pub struct RankArgs {
    /// Directory holding the result files.
    #[arg(long, env = "RANKING_RESULTS_DIR")]
    pub results_dir: Option<PathBuf>,

    /// Baseline runtime (speedup 1.0).
    #[arg(short, long, env = "RANKING_BASELINE")]
    pub baseline: Option<String>,

    /// Report format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Summarize runtimes whose name starts with this prefix.
    #[arg(long)]
    pub highlight: Option<String>,

    /// Abort on the first unreadable or invalid result file.
    #[arg(long, overrides_with = "no_strict")]
    pub strict: bool,

    /// Skip unusable result files even if the configuration sets `strict`.
    #[arg(long, overrides_with = "strict")]
    pub no_strict: bool,

    /// Append the per-runtime speedup breakdown (markdown only).
    #[arg(long)]
    pub detailed: bool,
}

impl RankArgs {
    /// Overlay flag and environment values on top of `settings`.
    pub fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(dir) = &self.results_dir {
            settings.results_dir = dir.clone();
        }
        if let Some(baseline) = &self.baseline {
            settings.baseline = baseline.clone();
        }
        if let Some(prefix) = &self.highlight {
            settings.highlight_prefix = Some(prefix.clone());
        }
        if self.strict {
            settings.strict = true;
        } else if self.no_strict {
            settings.strict = false;
        }
        settings
    }
}

/// Load, analyze and render a report.
///
/// Fails when no benchmark could be compared against the baseline.
pub fn rank(
    source: &dyn ResultSource,
    settings: &Settings,
    format: OutputFormat,
    detailed: bool,
) -> Result<String> {
    let loaded = source
        .load(settings.load_policy())
        .with_context(|| format!("Failed to load results from {}", source.describe()))?;

    let analysis = Analysis::run(&loaded.store, &settings.baseline)?;
    if analysis.compared_benchmarks() == 0 {
        bail!(
            "No completed benchmarks found in {} (baseline '{}')",
            source.describe(),
            settings.baseline
        );
    }

    let highlight = settings.highlight_prefix.as_deref();
    let rendered = match format {
        OutputFormat::Text => TextReport::new(&loaded.store, &analysis)
            .highlight(highlight)
            .skipped_files(&loaded.report.skipped)
            .render(),
        OutputFormat::Markdown => {
            let mut md = markdown::generate_summary(
                &loaded.store,
                &analysis,
                highlight,
                &loaded.report.skipped,
            );
            if detailed {
                md.push('\n');
                md.push_str(&markdown::generate_detailed_report(&analysis));
            }
            md
        }
        OutputFormat::Json => io::analysis_to_json(&analysis, &loaded.report.skipped)?,
    };
    Ok(rendered)
}

fn status(settings: &Settings, detailed: bool) -> Result<()> {
    println!("Runtime Ranking");
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Results directory: {}", settings.results_dir.display());
    println!("Baseline runtime:  {}", settings.baseline);
    println!(
        "File pattern:      {}*{}",
        settings.file_pattern.prefix, settings.file_pattern.suffix
    );
    if let Some(prefix) = &settings.highlight_prefix {
        println!("Highlight prefix:  {prefix}");
    }

    let source =
        DirectorySource::new(&settings.results_dir).with_pattern(settings.file_pattern.clone());
    let files = source.files()?;
    println!("Result files:      {}", files.len());
    if detailed {
        for file in &files {
            println!("  - {}", file.display());
        }
    }

    let loaded = source.load(settings.load_policy())?;
    let runtimes: Vec<&str> = loaded.store.runtimes().into_iter().collect();
    println!("Runtimes seen:     {}", runtimes.join(", "));
    if !loaded.report.skipped.is_empty() {
        println!("Unusable files:    {}", loaded.report.skipped.len());
    }
    Ok(())
}

/// Run the CLI with the given arguments.
///
/// # Returns
///
/// Returns `Ok(())` on success, or an error if the command fails.
pub fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Rank(args) => {
            let settings = args.apply(settings);
            info!(
                results_dir = %settings.results_dir.display(),
                baseline = %settings.baseline,
                "Ranking runtimes"
            );

            let source = DirectorySource::new(&settings.results_dir)
                .with_pattern(settings.file_pattern.clone());

            if args.output.is_some() {
                colored::control::set_override(false);
            }
            let rendered = rank(&source, &settings, args.format, args.detailed)?;

            match &args.output {
                Some(path) => {
                    io::write_report(path, &rendered)?;
                    println!("Report written to {}", path.display());
                }
                None => print!("{rendered}"),
            }
            Ok(())
        }
        Commands::Status {
            results_dir,
            detailed,
        } => {
            let mut settings = settings;
            if let Some(dir) = results_dir {
                settings.results_dir = dir;
            }
            status(&settings, detailed)
        }
    }
}
