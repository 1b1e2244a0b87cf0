/// A parsed import file, ready to be added to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedEntry {
    pub key: String,
    pub tags: Vec<String>,
    pub definition: Vec<String>,
}

/// Borrowed view of one dictionary entry, as returned by `EntryStore::view`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryView<'a> {
    pub tags: &'a [String],
    pub definition: &'a [String],
}

/// Render a tag list the way the view and export outputs show it: `[a, b]`
pub fn format_tags(tags: &[String]) -> String {
    format!("[{}]", tags.join(", "))
}
