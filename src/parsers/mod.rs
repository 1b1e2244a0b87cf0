//! Import file parsing
//!
//! An import file holds one dictionary entry. Its name gives the key, its first line
//! the comma-separated tags, and the remaining lines the definition:
//!
//! ```text
//! red, sweet
//! A round fruit.
//! ```
//!
//! A missing file is reported as [`ImportError::NotFound`](crate::error::ImportError) and
//! the import is skipped; the caller decides whether to continue with other files.

pub mod import;

pub use import::{
    derive_entry_key, list_import_candidates, parse_import_file, parse_import_text,
};
