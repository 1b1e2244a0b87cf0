//! Versioned envelope wrapped around each persisted index

use serde::{Deserialize, Serialize};

/// Blob format version; blobs written with another version are treated as unreadable
pub const BLOB_VERSION: u32 = 1;

/// Magic prefix identifying a dictionary blob
pub const BLOB_MAGIC: [u8; 4] = *b"DOYO";

/// On-disk wrapper around one index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blob<T> {
    pub magic: [u8; 4],
    pub version: u32,
    pub index: T,
}

impl<T> Blob<T> {
    pub fn new(index: T) -> Self {
        Self { magic: BLOB_MAGIC, version: BLOB_VERSION, index }
    }

    /// Check the magic prefix and version, returning the wrapped index
    pub fn into_index(self) -> anyhow::Result<T> {
        if self.magic != BLOB_MAGIC {
            anyhow::bail!("not a dictionary blob");
        }
        if self.version != BLOB_VERSION {
            anyhow::bail!("version mismatch (expected {}, found {})", BLOB_VERSION, self.version);
        }
        Ok(self.index)
    }
}
