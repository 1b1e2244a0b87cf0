//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for a scratch workspace holding word files and a dictionary root
pub struct DictDirBuilder {
    temp_dir: TempDir,
}

impl DictDirBuilder {
    /// Create a new builder with an empty workspace
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Path to the workspace (where word files are written)
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a word file with raw content
    pub fn with_file(self, file_name: &str, content: &str) -> Self {
        let path = self.temp_dir.path().join(file_name);
        let mut file = fs::File::create(path).expect("Failed to create word file");
        file.write_all(content.as_bytes()).expect("Failed to write word file");
        self
    }

    /// Add a word file built from a [`WordFileBuilder`]
    pub fn with_word(self, word: &WordFileBuilder) -> Self {
        let file_name = word.file_name();
        let content = word.content();
        self.with_file(&file_name, &content)
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for DictDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Dictionary root used by the tests inside a workspace
pub fn dict_root(workspace: &Path) -> PathBuf {
    workspace.join("DictOfYourOwn")
}

/// Builder for a single word file
pub struct WordFileBuilder {
    word: String,
    tags: Vec<String>,
    lines: Vec<String>,
}

impl WordFileBuilder {
    /// Create a word file with a default tag and one definition line
    pub fn new(word: &str) -> Self {
        Self {
            word: word.to_string(),
            tags: vec!["misc".to_string()],
            lines: vec![format!("Definition of {}.", word)],
        }
    }

    /// Set the tags
    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Set the definition lines
    pub fn lines(mut self, lines: &[&str]) -> Self {
        self.lines = lines.iter().map(|l| l.to_string()).collect();
        self
    }

    pub fn file_name(&self) -> String {
        format!("{}.txt", self.word)
    }

    /// Render the file content: tag line then definition lines
    pub fn content(&self) -> String {
        let mut content = self.tags.join(", ");
        for line in &self.lines {
            content.push('\n');
            content.push_str(line);
        }
        content
    }
}

/// A small workspace with four words sharing some tags
pub fn realistic_workspace() -> TempDir {
    DictDirBuilder::new()
        .with_word(
            &WordFileBuilder::new("apple")
                .tags(&["fruit", "red"])
                .lines(&["A crunchy fruit.", "Grows on trees."]),
        )
        .with_word(&WordFileBuilder::new("cherry").tags(&["fruit", "red"]).lines(&["Small and red."]))
        .with_word(&WordFileBuilder::new("lemon").tags(&["fruit", "sour"]).lines(&["Yellow citrus."]))
        .with_word(&WordFileBuilder::new("tomato").tags(&["vegetable", "red"]).lines(&["Botanically a fruit."]))
        .build()
}
