//! Configuration for the ranking CLI.
//!
//! Values are resolved in this order: command-line flag, environment
//! variable, configuration file, built-in default.

use anyhow::{Context, Result};
use runtime_ranking_benchmarks::io::{FilePattern, RESULTS_DIR};
use runtime_ranking_benchmarks::LoadPolicy;
use runtime_ranking_core::DEFAULT_BASELINE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "runtime-ranking.toml";

/// Resolved settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding the result files.
    pub results_dir: PathBuf,
    /// Runtime whose timings define speedup 1.0.
    pub baseline: String,
    /// Result file naming.
    pub file_pattern: FilePattern,
    /// Runtimes starting with this prefix get a summary section.
    pub highlight_prefix: Option<String>,
    /// Abort on the first unusable result file.
    pub strict: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            results_dir: PathBuf::from(RESULTS_DIR),
            baseline: DEFAULT_BASELINE.to_string(),
            file_pattern: FilePattern::default(),
            highlight_prefix: None,
            strict: false,
        }
    }
}

impl Settings {
    /// Parse settings from TOML. Missing keys take their defaults.
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Invalid configuration")
    }

    /// Load settings from `path`, or from [`DEFAULT_CONFIG_FILE`] if it exists.
    ///
    /// An explicitly given file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default.is_file() {
                    debug!("No configuration file, using defaults");
                    return Ok(Self::default());
                }
                default
            }
        };

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration {}", path.display()))?;
        let settings = Self::from_toml(&contents)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?;
        debug!(path = %path.display(), "Loaded configuration");
        Ok(settings)
    }

    /// Load policy implied by [`Settings::strict`].
    pub fn load_policy(&self) -> LoadPolicy {
        if self.strict {
            LoadPolicy::Strict
        } else {
            LoadPolicy::Lenient
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.baseline, "python");
        assert_eq!(settings.results_dir, PathBuf::from("results"));
        assert_eq!(settings.load_policy(), LoadPolicy::Lenient);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings = Settings::from_toml(
            r#"
            baseline = "c"
            highlight_prefix = "ruchy"

            [file_pattern]
            suffix = ".json"
            "#,
        )
        .unwrap();
        assert_eq!(settings.baseline, "c");
        assert_eq!(settings.highlight_prefix.as_deref(), Some("ruchy"));
        assert_eq!(settings.file_pattern.prefix, "bench-");
        assert_eq!(settings.file_pattern.suffix, ".json");
        assert_eq!(settings.results_dir, PathBuf::from("results"));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(Settings::from_toml("baseline = [").is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("custom.toml");
        fs::write(&path, "strict = true\nresults_dir = \"out\"").unwrap();

        let settings = Settings::load(Some(&path)).unwrap();
        assert!(settings.strict);
        assert_eq!(settings.load_policy(), LoadPolicy::Strict);
        assert_eq!(settings.results_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let tmp = TempDir::new().unwrap();
        assert!(Settings::load(Some(&tmp.path().join("absent.toml"))).is_err());
    }
}
