//! Per-directory statistics produced by the collector

use std::collections::BTreeMap;
use std::path::MAIN_SEPARATOR;

/// Counts for the entries physically inside one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryStats {
    /// Path relative to the root, `""` for the root itself
    pub path: String,
    /// Non-hidden files directly in this directory
    pub files: usize,
    /// Immediate child directories that survived pruning
    pub dirs: usize,
    /// Sum of readable direct file sizes in bytes
    pub size: u64,
    pub depth: usize,
    /// Set when the directory's contents could not be listed
    pub unreadable: bool,
}

impl DirectoryStats {
    pub fn new(path: String, files: usize, dirs: usize, size: u64) -> Self {
        let depth = depth_of(&path);
        Self {
            path,
            files,
            dirs,
            size,
            depth,
            unreadable: false,
        }
    }

    /// Stats for a directory whose listing failed.
    pub fn unreadable(path: String) -> Self {
        Self {
            unreadable: true,
            ..Self::new(path, 0, 0, 0)
        }
    }

    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }
}

/// Depth of a relative path: 0 for the root, otherwise its component count.
pub(crate) fn depth_of(rel_path: &str) -> usize {
    if rel_path.is_empty() {
        0
    } else {
        rel_path.split(MAIN_SEPARATOR).count()
    }
}

/// Relative path of `name` inside `parent`, keeping the root as `""`.
pub(crate) fn join_relative(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}{}{}", parent, MAIN_SEPARATOR, name)
    }
}

/// Parent relative path -> immediate child directory relative paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChildrenMap {
    inner: BTreeMap<String, Vec<String>>,
}

impl ChildrenMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, parent: &str, children: Vec<String>) {
        self.inner.insert(parent.to_string(), children);
    }

    /// Children of `parent` in insertion order; empty for leaves and unknown paths.
    pub fn children(&self, parent: &str) -> &[String] {
        self.inner.get(parent).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Children of `parent` ordered by their full relative path.
    pub fn sorted_children(&self, parent: &str) -> Vec<&str> {
        let mut children: Vec<&str> = self.children(parent).iter().map(String::as_str).collect();
        children.sort_unstable();
        children
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.inner
            .iter()
            .map(|(parent, children)| (parent.as_str(), children.as_slice()))
    }
}

/// Everything one walk produced: stats keyed by relative path plus adjacency.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    stats: BTreeMap<String, DirectoryStats>,
    children: ChildrenMap,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a visited directory and its pruned children.
    pub fn record(&mut self, stats: DirectoryStats, children: Vec<String>) {
        self.children.insert(&stats.path, children);
        self.stats.insert(stats.path.clone(), stats);
    }

    pub fn get(&self, rel_path: &str) -> Option<&DirectoryStats> {
        self.stats.get(rel_path)
    }

    pub fn root(&self) -> Option<&DirectoryStats> {
        self.get("")
    }

    pub fn stats(&self) -> &BTreeMap<String, DirectoryStats> {
        &self.stats
    }

    pub fn children(&self) -> &ChildrenMap {
        &self.children
    }

    /// Number of recorded directories, root included.
    pub fn total_dirs(&self) -> usize {
        self.stats.len()
    }

    pub fn total_files(&self) -> usize {
        self.stats.values().map(|s| s.files).sum()
    }

    pub fn total_size(&self) -> u64 {
        self.stats.values().map(|s| s.size).sum()
    }
}
