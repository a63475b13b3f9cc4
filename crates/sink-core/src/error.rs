//! Shared error type for the `sink-*` crates.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while locating, deleting, or writing output.
#[derive(Debug, Error)]
pub enum SinkError {
    /// Listing or deleting in the target directory failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Opening or writing the new output file failed.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no batch has been set; call set_data before save")]
    NoBatch,

    #[error("no output file found in {}", .dir.display())]
    NoOutputFile { dir: PathBuf },

    #[error("invalid timestamp: {0:?}")]
    InvalidTimestamp(String),

    #[error("invalid output pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[cfg(feature = "sqlite")]
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Shorthand result type for all `sink-*` crates.
pub type SinkResult<T> = Result<T, SinkError>;
