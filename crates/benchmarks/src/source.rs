//! Result sources.
//!
//! A [`ResultSource`] produces the validated result set a ranking is
//! computed from. [`DirectorySource`] reads harness output from disk.

use crate::error::Result;
use crate::io::{self, FilePattern, LoadPolicy, LoadReport};
use runtime_ranking_core::ResultStore;
use std::path::{Path, PathBuf};

/// A loaded result set together with what was skipped on the way.
#[derive(Debug, Clone, Default)]
pub struct Loaded {
    /// Validated records.
    pub store: ResultStore,
    /// Files loaded and skipped.
    pub report: LoadReport,
}

/// Anything that can supply benchmark records.
pub trait ResultSource {
    /// Short human readable description (e.g. a directory path).
    fn describe(&self) -> String;

    /// Load the records.
    fn load(&self, policy: LoadPolicy) -> Result<Loaded>;
}

/// Result files in a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
    pattern: FilePattern,
}

impl DirectorySource {
    /// Source reading `dir` with the default file pattern.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            pattern: FilePattern::default(),
        }
    }

    /// Use a custom file pattern.
    pub fn with_pattern(mut self, pattern: FilePattern) -> Self {
        self.pattern = pattern;
        self
    }

    /// The directory being read.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Matching files, sorted by name.
    pub fn files(&self) -> Result<Vec<PathBuf>> {
        io::discover(&self.dir, &self.pattern)
    }
}

impl ResultSource for DirectorySource {
    fn describe(&self) -> String {
        self.dir.display().to_string()
    }

    fn load(&self, policy: LoadPolicy) -> Result<Loaded> {
        let (store, report) = io::load_dir(&self.dir, &self.pattern, policy)?;
        Ok(Loaded { store, report })
    }
}
