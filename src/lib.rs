//! treetally - per-directory file counts and sizes as a markdown outline

pub mod config;
pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

use std::path::PathBuf;

use log::info;

pub use config::{DEFAULT_IGNORE_DIRS, DEFAULT_OUTPUT_FILE, SummaryConfig};
pub use error::{Result, TallyError};
pub use output::{MarkdownRenderer, format_size, root_display_name, write_atomic};
pub use tree::{ChildrenMap, Collection, Collector, DirectoryStats, IgnoreSet, collect};

/// Collect stats for `config.root`, render them and write the document.
///
/// Returns the path that was written.
pub fn run(config: &SummaryConfig) -> Result<PathBuf> {
    let collection = collect(config)?;
    info!(
        "collected {} directories, {} files under {}",
        collection.total_dirs(),
        collection.total_files(),
        config.root().display()
    );

    let document = MarkdownRenderer::new(root_display_name(config.root())).render(&collection);
    write_atomic(&config.output_path, &document)?;
    info!("wrote {}", config.output_path.display());

    Ok(config.output_path.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTree;
    use std::fs;

    #[test]
    fn test_run_writes_listing() {
        let tree = TestTree::new();
        tree.add_file("root.txt", 500);
        tree.add_file("a/.hidden", 10);
        tree.add_file("a/data.bin", 2048);

        let config = SummaryConfig::new(tree.path());
        let written = run(&config).unwrap();
        assert_eq!(written, tree.path().join(DEFAULT_OUTPUT_FILE));

        let doc = fs::read_to_string(&written).unwrap();
        assert!(doc.contains("- Directories (including root): 2\n"));
        assert!(doc.contains("- Files: 2\n"));
        assert!(doc.contains("- Total size: 2.49KB\n"));
        assert!(doc.contains("- (root)  (files: 1 | subdirs: 1 | size: 500.00B)\n"));
        assert!(doc.contains("  - a  (files: 1 | subdirs: 0 | size: 2.00KB)\n"));
        assert!(doc.contains("- a: files 1, subdirs 0, direct size 2.00KB\n"));
    }

    #[test]
    fn test_run_custom_output() {
        let tree = TestTree::new();
        let out_dir = TestTree::new();
        tree.add_file("x.txt", 1);

        let target = out_dir.path().join("listing.md");
        let config = SummaryConfig::new(tree.path()).with_output(&target);
        run(&config).unwrap();

        assert!(target.exists());
        assert!(!tree.path().join(DEFAULT_OUTPUT_FILE).exists());
    }

    #[test]
    fn test_run_invalid_root_writes_nothing() {
        let tree = TestTree::new();
        let config = SummaryConfig::new(tree.path().join("missing"))
            .with_output(tree.path().join("out.md"));
        assert!(run(&config).is_err());
        assert!(!tree.path().join("out.md").exists());
    }
}
