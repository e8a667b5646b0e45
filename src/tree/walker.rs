//! Collector - single-pass walk that records per-directory stats

use std::fs::{self, DirEntry};
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::config::SummaryConfig;
use crate::error::{Result, TallyError};

use super::stats::{Collection, DirectoryStats, join_relative};

/// Direct contents of one directory, split by kind and sorted by name.
struct Listing {
    dirs: Vec<(String, PathBuf)>,
    files: Vec<(String, PathBuf)>,
}

/// Walks a tree once and builds a [`Collection`].
///
/// Ignored directories are pruned before descending, so nothing below them is
/// ever read. Symlinks are listed as files and never followed.
pub struct Collector<'a> {
    config: &'a SummaryConfig,
}

impl<'a> Collector<'a> {
    pub fn new(config: &'a SummaryConfig) -> Self {
        Self { config }
    }

    pub fn collect(&self) -> Result<Collection> {
        let root = self.config.root();
        let metadata = fs::metadata(root).map_err(|e| TallyError::InvalidRoot {
            path: root.to_path_buf(),
            reason: e.to_string(),
        })?;
        if !metadata.is_dir() {
            return Err(TallyError::InvalidRoot {
                path: root.to_path_buf(),
                reason: "not a directory".to_string(),
            });
        }

        let mut collection = Collection::new();
        self.walk_dir(root, String::new(), &mut collection);
        Ok(collection)
    }

    fn walk_dir(&self, path: &Path, rel_path: String, collection: &mut Collection) {
        if self.config.ignore.is_ignored_path(Path::new(&rel_path)) {
            debug!("pruned {}", path.display());
            return;
        }

        let listing = match read_listing(path) {
            Ok(listing) => listing,
            Err(e) => {
                warn!("cannot list {}: {}", path.display(), e);
                collection.record(DirectoryStats::unreadable(rel_path), Vec::new());
                return;
            }
        };

        let mut files = 0;
        let mut size = 0;
        for (name, file_path) in &listing.files {
            if self.config.is_hidden(name) {
                continue;
            }
            files += 1;
            size += file_size(file_path);
        }

        let children: Vec<(String, PathBuf)> = listing
            .dirs
            .into_iter()
            .map(|(name, dir_path)| (join_relative(&rel_path, &name), dir_path))
            .filter(|(child_rel, dir_path)| {
                let ignored = self.config.ignore.is_ignored_path(Path::new(child_rel));
                if ignored {
                    debug!("pruned {}", dir_path.display());
                }
                !ignored
            })
            .collect();

        let child_paths: Vec<String> = children.iter().map(|(rel, _)| rel.clone()).collect();
        let stats = DirectoryStats::new(rel_path, files, child_paths.len(), size);
        collection.record(stats, child_paths);

        for (child_rel, dir_path) in children {
            self.walk_dir(&dir_path, child_rel, collection);
        }
    }
}

/// Walk `config.root` and collect stats for every non-ignored directory.
pub fn collect(config: &SummaryConfig) -> Result<Collection> {
    Collector::new(config).collect()
}

fn read_listing(path: &Path) -> io::Result<Listing> {
    let mut entries: Vec<DirEntry> = fs::read_dir(path)?.filter_map(|e| e.ok()).collect();
    entries.sort_by_key(|e| e.file_name());

    let mut listing = Listing {
        dirs: Vec::new(),
        files: Vec::new(),
    };
    for entry in entries {
        let name = entry.file_name().to_string_lossy().to_string();
        // file_type() does not follow symlinks, so linked directories land in `files`
        let is_dir = entry.file_type().is_ok_and(|t| t.is_dir());
        if is_dir {
            listing.dirs.push((name, entry.path()));
        } else {
            listing.files.push((name, entry.path()));
        }
    }
    Ok(listing)
}

/// Size of a file in bytes, 0 when it cannot be read.
fn file_size(path: &Path) -> u64 {
    match fs::metadata(path) {
        Ok(meta) => meta.len(),
        Err(e) => {
            debug!("size unavailable for {}: {}", path.display(), e);
            0
        }
    }
}
