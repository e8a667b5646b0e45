//! Output formatting and persistence

mod markdown;
mod utils;
mod writer;

pub use markdown::MarkdownRenderer;
pub use utils::{format_size, root_display_name};
pub use writer::write_atomic;
