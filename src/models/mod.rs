//! Data models shared by the parser, the store and the command layer.
//!
//! - [`ImportedEntry`] - Key, tags and definition lines read from one import file
//! - [`EntryView`] - Borrowed tags and definition of a stored entry

pub mod entry;

pub use entry::{EntryView, ImportedEntry, format_tags};
