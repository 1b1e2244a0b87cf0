//! Blob persistence: tolerant loads, atomic per-blob saves

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use bincode::config;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::metadata::Blob;
use crate::store::EntryStore;

/// Blob holding key → definition lines
pub const DICTIONARY_BLOB: &str = "dictionary";
/// Blob holding tag → keys
pub const TAGS_BLOB: &str = "tags";
/// Blob holding key → tags
pub const WORDS_BLOB: &str = "words";

/// Upper bound on a blob's size and on any length it declares while decoding: 64MB
pub const MAX_BLOB_BYTES: usize = 64 * 1024 * 1024;

/// Create the dictionary root directory if it is missing
///
/// Returns `true` when the directory was created by this call.
pub fn ensure_root_dir(root: &Path) -> Result<bool> {
    if root.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create dictionary directory {}", root.display()))?;
    Ok(true)
}

pub fn blob_path(root: &Path, name: &str) -> PathBuf {
    root.join(name)
}

/// Load the three indexes from `root`
///
/// Each blob is read on its own. A blob that is missing, unreadable, corrupt or written
/// with another format version is logged and replaced by an empty index; loading itself
/// never fails. Blobs are not cross-checked against each other.
pub fn load_store(root: &Path) -> EntryStore {
    let definitions = read_blob_or_default(&blob_path(root, DICTIONARY_BLOB));
    let tag_index = read_blob_or_default(&blob_path(root, TAGS_BLOB));
    let key_tags = read_blob_or_default(&blob_path(root, WORDS_BLOB));

    EntryStore::from_parts(definitions, tag_index, key_tags)
}

/// Write the three indexes to `root`, one blob after the other
///
/// Each blob is written to a temp file and renamed into place. There is no transaction
/// across blobs: a crash between two renames leaves the set mixed.
pub fn save_store(root: &Path, store: &EntryStore) -> Result<()> {
    write_blob(&blob_path(root, DICTIONARY_BLOB), store.definitions())?;
    write_blob(&blob_path(root, TAGS_BLOB), store.tag_index())?;
    write_blob(&blob_path(root, WORDS_BLOB), store.key_tags())?;

    debug!(root = %root.display(), entries = store.len(), "saved dictionary");
    Ok(())
}

fn read_blob<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let size = fs::metadata(path).context("failed to read blob metadata")?.len();
    if size > MAX_BLOB_BYTES as u64 {
        bail!("blob is {} bytes, limit {} bytes", size, MAX_BLOB_BYTES);
    }

    let bytes = fs::read(path).context("failed to read blob")?;
    // The limit rejects forged lengths before bincode allocates for them
    let config = config::standard().with_limit::<MAX_BLOB_BYTES>();
    let (blob, consumed): (Blob<T>, usize) =
        bincode::serde::decode_from_slice(&bytes, config).context("failed to decode blob")?;
    if consumed != bytes.len() {
        bail!("{} trailing bytes after blob", bytes.len() - consumed);
    }
    blob.into_index()
}

fn read_blob_or_default<T: DeserializeOwned + Default>(path: &Path) -> T {
    if !path.exists() {
        warn!("Couldn't find blob {}, starting empty", path.display());
        return T::default();
    }

    match read_blob(path) {
        Ok(index) => index,
        Err(e) => {
            warn!("Couldn't load blob {} ({:#}), starting empty", path.display(), e);
            T::default()
        }
    }
}

fn write_blob<T: Serialize>(path: &Path, index: &T) -> Result<()> {
    let bytes = bincode::serde::encode_to_vec(Blob::new(index), config::standard())
        .with_context(|| format!("Failed to encode blob {}", path.display()))?;

    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = PathBuf::from(temp_name);

    fs::write(&temp_path, bytes)
        .with_context(|| format!("Failed to write blob temp file {}", temp_path.display()))?;
    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to write object to path {}", path.display()))?;

    Ok(())
}
