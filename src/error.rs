//! Typed errors for the dictionary core.

use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by [`EntryStore`](crate::store::EntryStore) operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// `remove` was asked for a key that is not defined
    #[error("No such entry to remove: {0}")]
    NoSuchEntry(String),

    /// `search_regex` received a pattern that does not compile
    #[error("Bad regex.")]
    BadPattern(#[from] regex::Error),
}

/// Errors reported while reading an import file
#[derive(Debug, Error)]
pub enum ImportError {
    /// The source file does not exist
    #[error("File {} doesn't exist", .0.display())]
    NotFound(PathBuf),

    /// The source file exceeds the import size limit
    #[error("File {} is too large ({size} bytes, limit {limit} bytes)", .path.display())]
    TooLarge { path: PathBuf, size: u64, limit: u64 },

    /// Any other I/O failure while opening or reading the file
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
