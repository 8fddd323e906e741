use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Missing or invalid filename: {0:?}")]
    InvalidFileName(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Failed to read {name}: {source}")]
    ReadFailure {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to list {}: {source}", dir.display())]
    ListFailure {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Chapter index {index} out of range ({len} chapters)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("A chapter document needs at least one chapter")]
    EmptyDocument,
}

impl SplitError {
    /// Whether the error was caused by the caller's input rather than the server
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            SplitError::InvalidInput(_)
                | SplitError::InvalidFileName(_)
                | SplitError::IndexOutOfRange { .. }
                | SplitError::EmptyDocument
        )
    }
}

pub type Result<T> = std::result::Result<T, SplitError>;
