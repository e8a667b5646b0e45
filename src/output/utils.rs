//! Formatting helpers for markdown output

use std::path::{Component, Path, PathBuf};

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a byte count with two decimals, dividing by 1024 until the value
/// drops below 1024. Anything past TB is shown in PB.
pub fn format_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    for unit in UNITS {
        if size < 1024.0 {
            return format!("{:.2}{}", size, unit);
        }
        size /= 1024.0;
    }
    format!("{:.2}PB", size)
}

/// Name shown for the root: the last component of its absolute path.
///
/// `..` is folded lexically; symlinks are left as given.
pub fn root_display_name(root: &Path) -> String {
    let absolute = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());
    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::ParentDir => {
                normalized.pop();
            }
            Component::CurDir => {}
            other => normalized.push(other),
        }
    }
    normalized
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| normalized.display().to_string())
}
