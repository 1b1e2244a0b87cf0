//! The multi-index entry store.
//!
//! Three indexes describe the same relation between keys, tags and definitions:
//!
//! - `definitions`: key → definition lines, ordered by key
//! - `tag_index`: tag → keys carrying that tag
//! - `key_tags`: key → tags, the reverse of `tag_index`, used by [`EntryStore::remove`]
//!
//! Every defined key has a `key_tags` entry and is a member of each of its tags' sets.
//! A tag is present in `tag_index` only while its set is non-empty.
//!
//! Re-adding an existing key replaces its definition and tag list but leaves the key in
//! the sets of tags it no longer carries. Only [`EntryStore::remove`] cleans those up, and
//! only for the tags listed at the time of removal.

use std::collections::{BTreeMap, HashMap, HashSet};

use regex::Regex;

use crate::error::StoreError;
use crate::models::{EntryView, ImportedEntry, format_tags};

pub type Definitions = BTreeMap<String, Vec<String>>;
pub type TagIndex = HashMap<String, HashSet<String>>;
pub type KeyTags = HashMap<String, Vec<String>>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryStore {
    definitions: Definitions,
    tag_index: TagIndex,
    key_tags: KeyTags,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from previously persisted indexes
    ///
    /// The indexes are taken as-is; they are not cross-checked against each other.
    pub fn from_parts(definitions: Definitions, tag_index: TagIndex, key_tags: KeyTags) -> Self {
        Self { definitions, tag_index, key_tags }
    }

    pub fn definitions(&self) -> &Definitions {
        &self.definitions
    }

    pub fn tag_index(&self) -> &TagIndex {
        &self.tag_index
    }

    pub fn key_tags(&self) -> &KeyTags {
        &self.key_tags
    }

    /// Number of defined entries
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Number of distinct tags in use
    pub fn tag_count(&self) -> usize {
        self.tag_index.len()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.definitions.contains_key(key)
    }

    /// All keys in alphabetical order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(String::as_str)
    }

    /// Insert or overwrite an entry
    ///
    /// On overwrite, tags dropped from the entry keep the key in their sets.
    pub fn add(&mut self, key: &str, tags: Vec<String>, definition: Vec<String>) {
        self.definitions.insert(key.to_string(), definition);

        for tag in &tags {
            self.tag_index.entry(tag.clone()).or_default().insert(key.to_string());
        }

        self.key_tags.insert(key.to_string(), tags);
    }

    /// Add an entry produced by the import parser
    pub fn add_entry(&mut self, entry: ImportedEntry) {
        self.add(&entry.key, entry.tags, entry.definition);
    }

    /// Remove an entry from all three indexes
    ///
    /// Fails without touching any index if the key is not defined.
    pub fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.definitions.remove(key).is_none() {
            return Err(StoreError::NoSuchEntry(key.to_string()));
        }

        for tag in self.key_tags.remove(key).unwrap_or_default() {
            if let Some(keys) = self.tag_index.get_mut(&tag) {
                keys.remove(key);
                if keys.is_empty() {
                    self.tag_index.remove(&tag);
                }
            }
        }

        Ok(())
    }

    /// Keys carrying `tag`, sorted, or `None` when the tag is unknown
    pub fn lookup_by_tag(&self, tag: &str) -> Option<Vec<&str>> {
        self.tag_index.get(tag).map(|keys| {
            let mut keys: Vec<&str> = keys.iter().map(String::as_str).collect();
            keys.sort_unstable();
            keys
        })
    }

    /// Keys containing `fragment`, in alphabetical order
    pub fn search_substring(&self, fragment: &str) -> Vec<&str> {
        self.keys().filter(|key| key.contains(fragment)).collect()
    }

    /// Keys matched anywhere by `pattern`, in alphabetical order
    ///
    /// Anchor the pattern with `^...$` to require a whole-key match.
    pub fn search_regex(&self, pattern: &str) -> Result<Vec<&str>, StoreError> {
        let regex = Regex::new(pattern)?;
        Ok(self.keys().filter(|key| regex.is_match(key)).collect())
    }

    /// Keys whose definition, joined with newlines, contains `fragment`
    pub fn search_description(&self, fragment: &str) -> Vec<&str> {
        self.definitions
            .iter()
            .filter(|(_, lines)| lines.join("\n").contains(fragment))
            .map(|(key, _)| key.as_str())
            .collect()
    }

    pub fn view(&self, key: &str) -> Option<EntryView<'_>> {
        let definition = self.definitions.get(key)?;
        let tags = self.key_tags.get(key).map(Vec::as_slice).unwrap_or(&[]);
        Some(EntryView { tags, definition })
    }

    /// Render every entry as export text lines, in key order
    pub fn export_all(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for (key, definition) in &self.definitions {
            let tags = self.key_tags.get(key).map(Vec::as_slice).unwrap_or(&[]);
            lines.push(format!("=== {} ===", key));
            lines.push(format!("Tags : {}", format_tags(tags)));
            lines.push(String::new());
            lines.extend(definition.iter().cloned());
            lines.push(String::new());
        }
        lines
    }
}
