//! Markdown output formatting
//!
//! `MarkdownRenderer` turns a `Collection` into a document with three parts:
//! a header of aggregate totals, a nested outline of every directory, and a
//! flat overview of the root's immediate children.

use chrono::{DateTime, Local};

use crate::tree::{Collection, DirectoryStats};

use super::utils::format_size;

const TITLE: &str = "# Project File Inventory";
const OVERVIEW_HEADING: &str = "## Top-level overview";
const ROOT_LABEL: &str = "(root)";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders collected directory stats as markdown.
pub struct MarkdownRenderer {
    root_name: String,
    generated_at: DateTime<Local>,
}

impl MarkdownRenderer {
    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            root_name: root_name.into(),
            generated_at: Local::now(),
        }
    }

    /// Pin the timestamp written into the header.
    pub fn with_timestamp(mut self, generated_at: DateTime<Local>) -> Self {
        self.generated_at = generated_at;
        self
    }

    /// Render the full document: lines joined with `\n` plus one final newline.
    pub fn render(&self, collection: &Collection) -> String {
        let mut lines = Vec::new();

        self.emit_header(collection, &mut lines);
        self.emit_dir(collection, "", 0, &mut lines);
        self.emit_overview(collection, &mut lines);

        let mut output = lines.join("\n");
        output.push('\n');
        output
    }

    fn emit_header(&self, collection: &Collection, lines: &mut Vec<String>) {
        lines.push(TITLE.to_string());
        lines.push(String::new());
        lines.push(format!(
            "- Generated: {}",
            self.generated_at.format(TIMESTAMP_FORMAT)
        ));
        lines.push(format!("- Root directory: {}", self.root_name));
        lines.push(format!(
            "- Directories (including root): {}",
            collection.total_dirs()
        ));
        lines.push(format!("- Files: {}", collection.total_files()));
        lines.push(format!(
            "- Total size: {}",
            format_size(collection.total_size())
        ));
        lines.push(String::new());
        lines.push(format!(
            "Generated by: {} {}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        ));
        lines.push(String::new());
        lines.push(
            "Note: the file count, subdirectory count and size on each line cover only the \
             files directly inside that directory, not the contents of its subdirectories."
                .to_string(),
        );
        lines.push(String::new());
    }

    /// Emit one outline line for `rel_path`, then its children sorted by path.
    fn emit_dir(
        &self,
        collection: &Collection,
        rel_path: &str,
        indent: usize,
        lines: &mut Vec<String>,
    ) {
        let Some(stats) = collection.get(rel_path) else {
            return;
        };

        let name = if rel_path.is_empty() {
            ROOT_LABEL
        } else {
            rel_path
        };
        lines.push(format!(
            "{}- {}  (files: {} | subdirs: {} | size: {}){}",
            "  ".repeat(indent),
            name,
            stats.files,
            stats.dirs,
            format_size(stats.size),
            unreadable_marker(stats)
        ));

        for child in collection.children().sorted_children(rel_path) {
            self.emit_dir(collection, child, indent + 1, lines);
        }
    }

    fn emit_overview(&self, collection: &Collection, lines: &mut Vec<String>) {
        lines.push(String::new());
        lines.push(OVERVIEW_HEADING.to_string());
        lines.push(String::new());

        for child in collection.children().sorted_children("") {
            if let Some(stats) = collection.get(child) {
                lines.push(format!(
                    "- {}: files {}, subdirs {}, direct size {}{}",
                    child,
                    stats.files,
                    stats.dirs,
                    format_size(stats.size),
                    unreadable_marker(stats)
                ));
            }
        }
    }
}

fn unreadable_marker(stats: &DirectoryStats) -> &'static str {
    if stats.unreadable { " [unreadable]" } else { "" }
}
