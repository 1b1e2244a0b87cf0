//! Dictionary of Your Own - a tagged personal dictionary
//!
//! Entries are imported from text files, one word per file, and kept in three indexes:
//! word → definition, tag → words, and word → tags. The indexes are persisted as three
//! blobs and reloaded on start. This library provides:
//!
//! - Parsing import files into entries ([`parsers`])
//! - The multi-index [`EntryStore`] with tag, substring, regex and description lookups
//! - Blob persistence for the three indexes ([`index_storage`])
//! - The line-oriented command session behind the `doyo` binary ([`cli`])
//!
//! # Example
//!
//! ```
//! use dict_of_your_own::EntryStore;
//! use dict_of_your_own::parsers::parse_import_text;
//!
//! let mut store = EntryStore::new();
//! store.add_entry(parse_import_text("fruit".into(), "red, sweet\nA round fruit."));
//!
//! assert_eq!(store.lookup_by_tag("red"), Some(vec!["fruit"]));
//! assert_eq!(store.view("fruit").unwrap().definition, ["A round fruit.".to_string()]);
//! ```

pub mod cli;
pub mod error;
pub mod index_storage;
pub mod models;
pub mod parsers;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use error::{ImportError, StoreError};
pub use index_storage::{load_store, save_store};
pub use models::{EntryView, ImportedEntry};
pub use parsers::parse_import_file;
pub use store::EntryStore;
