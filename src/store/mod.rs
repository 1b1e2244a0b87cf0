//! In-memory dictionary state.
//!
//! [`EntryStore`] owns the three indexes and is the only place they are mutated. The
//! command session holds one store for the lifetime of the process and hands it to the
//! persistence layer after every mutating command.

pub mod entry_store;

pub use entry_store::{Definitions, EntryStore, KeyTags, TagIndex};
