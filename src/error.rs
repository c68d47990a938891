//! Error types for article-extract.
//!
//! Extraction itself is total and never fails; these errors come only from
//! the I/O-facing helpers that feed it.

use std::path::PathBuf;

/// Error type for input preparation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The prompt file does not exist.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The prompt file exists but is not valid UTF-8.
    #[error("File is not valid UTF-8: {}", .0.display())]
    InvalidUtf8(PathBuf),

    /// Any other failure while reading the prompt file.
    #[error("Error reading file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for input preparation.
pub type Result<T> = std::result::Result<T, Error>;
