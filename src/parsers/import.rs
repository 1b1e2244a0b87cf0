use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::ImportError;
use crate::models::ImportedEntry;

/// Maximum size of an import file: 10MB
pub const MAX_IMPORT_FILE_BYTES: u64 = 10 * 1024 * 1024;

/// Separator between tags on the first line of an import file
pub const TAG_SEPARATOR: &str = ", ";

const IMPORT_EXTENSION: &str = ".txt";

/// Derive the entry key from a file name, keeping only the text before the first `.`
///
/// `apple.v2.txt` yields `apple`, not `apple.v2`.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use dict_of_your_own::parsers::derive_entry_key;
///
/// assert_eq!(derive_entry_key(Path::new("words/apple.v2.txt")), "apple");
/// ```
pub fn derive_entry_key(path: &Path) -> String {
    let file_name = path.file_name().map(|name| name.to_string_lossy()).unwrap_or_default();
    let file_name = file_name.trim();
    file_name.split('.').next().unwrap_or_default().to_string()
}

/// Parse import file contents into tags and definition lines
///
/// The first line holds the tags, split on `", "` with no further trimming, so an empty
/// first line yields a single empty tag. Only an input with no lines at all yields no
/// tags. Every following line is a definition line, in order.
pub fn parse_import_text(key: String, content: &str) -> ImportedEntry {
    let mut lines = content.lines();

    let tags = match lines.next() {
        Some(tag_line) => tag_line.split(TAG_SEPARATOR).map(str::to_string).collect(),
        None => Vec::new(),
    };

    let definition = lines.map(str::to_string).collect();

    ImportedEntry { key, tags, definition }
}

/// Read and parse one import file
///
/// # Errors
///
/// - [`ImportError::NotFound`] if the file does not exist
/// - [`ImportError::TooLarge`] if it exceeds [`MAX_IMPORT_FILE_BYTES`]
/// - [`ImportError::Io`] for any other read failure, including invalid UTF-8
pub fn parse_import_file(path: &Path) -> Result<ImportedEntry, ImportError> {
    let io_error = |source: io::Error| ImportError::Io { path: path.to_path_buf(), source };

    // Size is checked on the open handle so the file read is the file checked
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ImportError::NotFound(path.to_path_buf()),
        _ => io_error(e),
    })?;

    let size = file.metadata().map_err(io_error)?.len();
    if size > MAX_IMPORT_FILE_BYTES {
        return Err(ImportError::TooLarge {
            path: path.to_path_buf(),
            size,
            limit: MAX_IMPORT_FILE_BYTES,
        });
    }

    let mut content = String::with_capacity(size as usize);
    (&file).read_to_string(&mut content).map_err(io_error)?;

    let key = derive_entry_key(path);
    debug!(key = %key, path = %path.display(), "parsed import file");

    Ok(parse_import_text(key, &content))
}

/// List the `.txt` files directly inside `dir`, sorted by file name
pub fn list_import_candidates(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    // Surface a missing or unreadable directory instead of an empty listing
    fs::read_dir(dir).with_context(|| format!("Failed to read directory: {}", dir.display()))?;

    let candidates = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable directory entry: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.file_name().to_string_lossy().ends_with(IMPORT_EXTENSION))
        .map(|entry| entry.into_path())
        .collect();

    Ok(candidates)
}
