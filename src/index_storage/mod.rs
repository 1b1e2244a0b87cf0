//! Durable storage for the dictionary indexes
//!
//! Each index lives in its own blob under the dictionary root:
//! - `dictionary`: key → definition lines
//! - `tags`: tag → keys
//! - `words`: key → tags
//!
//! Blobs are bincode-encoded [`Blob`] envelopes carrying a magic prefix and a format
//! version. Loading is tolerant (a bad blob becomes an empty index), saving is not.

pub mod metadata;
pub mod persistence;

pub use metadata::{BLOB_VERSION, Blob};
pub use persistence::{
    DICTIONARY_BLOB, TAGS_BLOB, WORDS_BLOB, ensure_root_dir, load_store, save_store,
};
