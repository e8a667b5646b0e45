//! Configuration for a summary run

use std::path::{Path, PathBuf};

use crate::tree::IgnoreSet;

/// File name of the generated listing, placed under the root unless overridden.
pub const DEFAULT_OUTPUT_FILE: &str = "DIRECTORY_LISTING.md";

/// Directory names that are never walked: VCS metadata, dependency and cache
/// directories, editor state.
pub const DEFAULT_IGNORE_DIRS: &[&str] = &[
    ".git",
    ".github",
    "node_modules",
    "venv",
    "env",
    "__pycache__",
    ".idea",
    ".vscode",
];

/// Names starting with this character are hidden and left out of counts.
pub const HIDDEN_MARKER: char = '.';

/// Everything the collector and renderer need to know about a run.
#[derive(Debug, Clone)]
pub struct SummaryConfig {
    pub root: PathBuf,
    pub output_path: PathBuf,
    pub ignore: IgnoreSet,
    pub hidden_marker: char,
}

impl SummaryConfig {
    /// Config for `root` with the default ignore set and output location.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let output_path = root.join(DEFAULT_OUTPUT_FILE);
        Self {
            root,
            output_path,
            ignore: IgnoreSet::default(),
            hidden_marker: HIDDEN_MARKER,
        }
    }

    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Replace the ignore set entirely.
    pub fn with_ignore(mut self, ignore: IgnoreSet) -> Self {
        self.ignore = ignore;
        self
    }

    /// Add patterns on top of the current ignore set.
    pub fn with_extra_ignores<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore.extend(patterns);
        self
    }

    pub fn is_hidden(&self, name: &str) -> bool {
        name.starts_with(self.hidden_marker)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
