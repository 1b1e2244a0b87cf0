//! The interactive command session
//!
//! A [`Session`] owns the [`EntryStore`] for the lifetime of the process. Commands run
//! one at a time: each is parsed, executed to completion, and, when it changed the
//! store, followed by a full save of the three blobs before the next line is read.
//!
//! Not-found conditions and bad patterns are printed and the loop continues. A failed
//! save is returned from [`Session::execute`]; [`Session::run_loop`] reports it and keeps
//! reading commands with the in-memory state intact.

use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{error, info, warn};

use super::command::Command;
use crate::index_storage::{ensure_root_dir, load_store, save_store};
use crate::models::format_tags;
use crate::parsers::{list_import_candidates, parse_import_file};
use crate::store::EntryStore;
use crate::utils::{expand_tilde, format_path_with_tilde, sanitize_for_display};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const PROMPT: &str = ">";

/// Whether the loop should keep reading commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Session {
    store: EntryStore,
    root: PathBuf,
    import_dir: PathBuf,
}

impl Session {
    /// Open the dictionary at `root`, creating the directory on first use
    ///
    /// `importall` scans `import_dir` for `.txt` files.
    pub fn open(root: PathBuf, import_dir: PathBuf) -> Result<Self> {
        let store = if ensure_root_dir(&root)? {
            info!("Initialized dictionary directory under {}", format_path_with_tilde(&root));
            EntryStore::new()
        } else {
            load_store(&root)
        };

        Ok(Self { store, root, import_dir })
    }

    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Print the startup banner followed by the usage text
    pub fn print_banner(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "Starting DoYO version {}", VERSION)?;
        writeln!(
            out,
            "Dictionary at {} ({} entries, {} tags)",
            format_path_with_tilde(&self.root),
            self.store.len(),
            self.store.tag_count()
        )?;
        writeln!(out)?;
        print_help(out)
    }

    /// Read commands from `input` until `exit` or end of input
    pub fn run_loop(&mut self, input: impl BufRead, out: &mut impl Write) -> Result<()> {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        for line in input.lines() {
            let line = line.context("Failed to read command")?;

            if self.execute_line(&line, out)? == Flow::Exit {
                return Ok(());
            }

            write!(out, "{}", PROMPT)?;
            out.flush()?;
        }

        writeln!(out)?;
        Ok(())
    }

    /// Parse and run one line, reporting any error on `out`
    ///
    /// Only failures to write to `out` itself are returned.
    pub fn execute_line(&mut self, line: &str, out: &mut impl Write) -> Result<Flow> {
        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Continue),
            Err(e) => {
                writeln!(out, "{}", e)?;
                return Ok(Flow::Continue);
            }
        };

        match self.execute(&command, out) {
            Ok(flow) => Ok(flow),
            Err(e) => {
                error!("{:#}", e);
                writeln!(out, "Error: {:#}", e)?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Run one command, saving the store afterwards if it changed
    pub fn execute(&mut self, command: &Command, out: &mut impl Write) -> Result<Flow> {
        let changed = match command {
            Command::Import(path) => self.import(&expand_tilde(Path::new(path)), out)?,
            Command::ImportAll => self.import_all(out)?,
            Command::Remove(key) => self.remove(key, out)?,
            Command::List(tag) => {
                match self.store.lookup_by_tag(tag) {
                    Some(keys) => writeln!(out, "Matching words : {}", format_keys(&keys))?,
                    None => writeln!(out, "Matching words : no matches")?,
                }
                false
            }
            Command::Search(fragment) => {
                writeln!(out, "{}", format_keys(&self.store.search_substring(fragment)))?;
                false
            }
            Command::Regex(pattern) => {
                match self.store.search_regex(pattern) {
                    Ok(keys) => writeln!(out, "{}", format_keys(&keys))?,
                    Err(e) => writeln!(out, "{}", e)?,
                }
                false
            }
            Command::Desc(fragment) => {
                writeln!(out, "{}", format_keys(&self.store.search_description(fragment)))?;
                false
            }
            Command::View(key) => {
                self.view(key, out)?;
                false
            }
            Command::Export(path) => {
                self.export(&expand_tilde(Path::new(path)), out)?;
                false
            }
            Command::Help => {
                print_help(out)?;
                false
            }
            Command::Exit => return Ok(Flow::Exit),
        };

        if changed && command.is_mutating() {
            save_store(&self.root, &self.store).context("Failed to save dictionary")?;
        }

        Ok(Flow::Continue)
    }

    fn import(&mut self, path: &Path, out: &mut impl Write) -> Result<bool> {
        let entry = match parse_import_file(path) {
            Ok(entry) => entry,
            Err(e) => {
                writeln!(out, "{}", e)?;
                return Ok(false);
            }
        };

        writeln!(out, "Importing file under key {}", sanitize_for_display(&entry.key))?;
        writeln!(out, "Adding to tags : {}", sanitize_for_display(&format_tags(&entry.tags)))?;
        info!(key = %entry.key, tags = entry.tags.len(), lines = entry.definition.len(), "importing entry");

        self.store.add_entry(entry);
        Ok(true)
    }

    fn import_all(&mut self, out: &mut impl Write) -> Result<bool> {
        let candidates = list_import_candidates(&self.import_dir)?;

        let mut imported = 0;
        for path in &candidates {
            if self.import(path, out)? {
                imported += 1;
            } else {
                warn!("Skipped import of {}", path.display());
            }
        }

        writeln!(out, "Imported {} of {} files", imported, candidates.len())?;
        Ok(imported > 0)
    }

    fn remove(&mut self, key: &str, out: &mut impl Write) -> Result<bool> {
        match self.store.remove(key) {
            Ok(()) => {
                writeln!(out, "Successfully removed entry {}", key)?;
                Ok(true)
            }
            Err(e) => {
                writeln!(out, "{}", e)?;
                Ok(false)
            }
        }
    }

    fn view(&self, key: &str, out: &mut impl Write) -> Result<()> {
        let Some(view) = self.store.view(key) else {
            writeln!(out, "Undefined word.")?;
            return Ok(());
        };

        writeln!(out, "=== {} ===", sanitize_for_display(key))?;
        writeln!(out, "Tags : {}", sanitize_for_display(&format_tags(view.tags)))?;
        writeln!(out)?;
        for line in view.definition {
            writeln!(out, "{}", sanitize_for_display(line))?;
        }
        Ok(())
    }

    fn export(&self, path: &Path, out: &mut impl Write) -> Result<()> {
        match write_export(path, &self.store.export_all()) {
            Ok(()) => writeln!(out, "Dictionary exported under {}", path.display())?,
            Err(e) => {
                warn!("{:#}", e);
                writeln!(out, "Couldn't save dictionary to file {}", path.display())?;
            }
        }
        Ok(())
    }
}

fn write_export(path: &Path, lines: &[String]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create export file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line)?;
    }
    writer.flush().with_context(|| format!("Failed to write export file {}", path.display()))?;
    Ok(())
}

fn format_keys(keys: &[&str]) -> String {
    format!("[{}]", keys.join(", "))
}

pub fn print_help(out: &mut impl Write) -> Result<()> {
    writeln!(out, "Available commands : import, importall, remove, list, search, regex, desc, view, export, help, exit")?;
    writeln!(out)?;
    writeln!(out, "Import syntax : import [WORD].txt or importall")?;
    writeln!(out, "Adds the file(s) to the dictionary. The first line holds the tags, separated by ', '.")?;
    writeln!(out, "importall imports every .txt file in the working directory.")?;
    writeln!(out)?;
    writeln!(out, "Remove syntax : remove [WORD]")?;
    writeln!(out, "Removes the word from the dictionary. This cannot be undone.")?;
    writeln!(out)?;
    writeln!(out, "Export syntax : export [FILE]")?;
    writeln!(out, "Writes the whole dictionary to a text file, ordered alphabetically.")?;
    writeln!(out)?;
    writeln!(out, "Searching syntax : list [TAG], search [SUBSTRING], regex [REGEX] or desc [SUBSTRING]")?;
    writeln!(out, "Lists the words with this tag, the words containing the substring or matching the regex, or the words whose definition contains the substring.")?;
    writeln!(out)?;
    writeln!(out, "Viewing syntax : view [WORD]")?;
    writeln!(out, "Shows the word's tags and definition.")?;
    writeln!(out)?;
    writeln!(out, "exit to quit.")?;
    Ok(())
}
