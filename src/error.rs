//! Error types shared by the collector and the renderer

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TallyError {
    #[error("cannot summarize '{}': {reason}", path.display())]
    InvalidRoot { path: PathBuf, reason: String },

    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, TallyError>;
