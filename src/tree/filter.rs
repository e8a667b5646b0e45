//! Directory-name filtering for the walk

use std::path::{Component, Path};

use glob::Pattern;

use crate::config::DEFAULT_IGNORE_DIRS;

#[derive(Debug, Clone)]
struct IgnoreEntry {
    name: String,
    pattern: Option<Pattern>,
}

impl IgnoreEntry {
    fn new(name: String) -> Self {
        let pattern = Pattern::new(&name).ok();
        Self { name, pattern }
    }

    fn matches(&self, component: &str) -> bool {
        self.name == component || self.pattern.as_ref().is_some_and(|p| p.matches(component))
    }
}

/// Set of directory names (or glob patterns) excluded from traversal.
///
/// A relative path is ignored when any of its components matches an entry,
/// so everything below an ignored directory is ignored as well.
#[derive(Debug, Clone)]
pub struct IgnoreSet {
    entries: Vec<IgnoreEntry>,
}

impl IgnoreSet {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::empty();
        set.extend(patterns);
        set
    }

    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn extend<I, S>(&mut self, patterns: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for pattern in patterns {
            let pattern = pattern.into();
            if !self.entries.iter().any(|e| e.name == pattern) {
                self.entries.push(IgnoreEntry::new(pattern));
            }
        }
    }

    /// Check a single path component.
    pub fn is_ignored_name(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.matches(name))
    }

    /// Check every component of a path relative to the root.
    pub fn is_ignored_path(&self, rel_path: &Path) -> bool {
        rel_path.components().any(|c| match c {
            Component::Normal(name) => self.is_ignored_name(&name.to_string_lossy()),
            _ => false,
        })
    }
}

impl Default for IgnoreSet {
    fn default() -> Self {
        Self::new(DEFAULT_IGNORE_DIRS.iter().copied())
    }
}
