/// Edge case integration tests
///
/// These tests cover unusual import files and damaged blobs
mod common;

use std::fs;

use dict_of_your_own::index_storage::{DICTIONARY_BLOB, WORDS_BLOB, ensure_root_dir};
use dict_of_your_own::{EntryStore, ImportError, load_store, parse_import_file, save_store};
use common::{DictDirBuilder, dict_root};

#[test]
fn test_edge_case_empty_file() {
    let workspace = DictDirBuilder::new().with_file("blank.txt", "").build();

    let entry = parse_import_file(&workspace.path().join("blank.txt")).unwrap();
    assert_eq!(entry.key, "blank");
    assert!(entry.tags.is_empty());
    assert!(entry.definition.is_empty());

    let mut store = EntryStore::new();
    store.add_entry(entry);
    assert!(store.view("blank").unwrap().tags.is_empty());
    assert_eq!(store.tag_count(), 0);
}

#[test]
fn test_edge_case_tag_line_only() {
    let workspace = DictDirBuilder::new().with_file("bare.txt", "a, b\n").build();

    let entry = parse_import_file(&workspace.path().join("bare.txt")).unwrap();
    assert_eq!(entry.tags, vec!["a", "b"]);
    assert!(entry.definition.is_empty());
}

#[test]
fn test_edge_case_multi_dot_file_name() {
    let workspace = DictDirBuilder::new().with_file("apple.v2.txt", "red\nCrunchy.").build();

    let entry = parse_import_file(&workspace.path().join("apple.v2.txt")).unwrap();
    assert_eq!(entry.key, "apple");
}

#[test]
fn test_edge_case_invalid_utf8() {
    let workspace = DictDirBuilder::new().build();
    let path = workspace.path().join("bytes.txt");
    fs::write(&path, [0x66, 0x6f, 0xff, 0xfe]).unwrap();

    assert!(matches!(parse_import_file(&path), Err(ImportError::Io { .. })));
}

#[test]
fn test_edge_case_unicode_content() {
    let workspace = DictDirBuilder::new().with_file("pomme.txt", "fruit, 赤い\nUne pomme 🍎").build();

    let mut store = EntryStore::new();
    store.add_entry(parse_import_file(&workspace.path().join("pomme.txt")).unwrap());
    assert_eq!(store.lookup_by_tag("赤い"), Some(vec!["pomme"]));
    assert_eq!(store.search_description("🍎"), vec!["pomme"]);
}

#[test]
fn test_edge_case_truncated_blob_loads_empty_index() {
    let workspace = DictDirBuilder::new().build();
    let root = dict_root(workspace.path());
    ensure_root_dir(&root).unwrap();

    let mut store = EntryStore::new();
    store.add("apple", vec!["red".into()], vec!["Crunchy.".into()]);
    save_store(&root, &store).unwrap();

    let blob = root.join(DICTIONARY_BLOB);
    let bytes = fs::read(&blob).unwrap();
    fs::write(&blob, &bytes[..bytes.len() / 2]).unwrap();

    let reloaded = load_store(&root);
    assert!(reloaded.is_empty());
    // Other blobs are still read; they are not reconciled with the damaged one
    assert_eq!(reloaded.lookup_by_tag("red"), Some(vec!["apple"]));
}

#[test]
fn test_edge_case_missing_single_blob() {
    let workspace = DictDirBuilder::new().build();
    let root = dict_root(workspace.path());
    ensure_root_dir(&root).unwrap();

    let mut store = EntryStore::new();
    store.add("apple", vec!["red".into()], vec!["Crunchy.".into()]);
    save_store(&root, &store).unwrap();
    fs::remove_file(root.join(WORDS_BLOB)).unwrap();

    let reloaded = load_store(&root);
    assert!(reloaded.contains("apple"));
    assert!(reloaded.key_tags().is_empty());
    // View still answers, with no tags
    assert!(reloaded.view("apple").unwrap().tags.is_empty());
}
