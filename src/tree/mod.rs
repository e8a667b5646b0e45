//! Directory tree collection
//!
//! `Collector` walks a tree once, pruning ignored directories, and produces a
//! `Collection`: per-directory `DirectoryStats` keyed by relative path plus the
//! `ChildrenMap` adjacency used by the renderer.

mod filter;
mod stats;
mod walker;

pub use filter::IgnoreSet;
pub use stats::{ChildrenMap, Collection, DirectoryStats};
pub use walker::{Collector, collect};
