//! Parsing of interactive command lines
//!
//! A line is split on single spaces. The first token names the command and is matched
//! case-insensitively; the second token, when the command takes one, is its argument.
//! Further tokens are ignored.
//!
//! Key and tag arguments (`remove`, `list`, `search`, `desc`, `view`) are lowercased.
//! File paths (`import`, `export`) and `regex` patterns are kept verbatim.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Import(String),
    ImportAll,
    Remove(String),
    List(String),
    Search(String),
    Regex(String),
    Desc(String),
    View(String),
    Export(String),
    Help,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command. Type 'help' for help.")]
    Unknown(String),

    #[error("Missing argument for '{0}'. Type 'help' for help.")]
    MissingArgument(String),
}

impl Command {
    /// Parse one input line; blank lines yield `Ok(None)`
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let mut tokens = line.split(' ');
        let name = tokens.next().unwrap_or_default().to_lowercase();
        let arg = tokens.next().filter(|t| !t.is_empty()).map(str::to_string);

        let with_arg = |build: fn(String) -> Command| {
            arg.clone().map(build).ok_or_else(|| CommandError::MissingArgument(name.clone()))
        };
        let with_lowered_arg = |build: fn(String) -> Command| {
            arg.as_deref()
                .map(|a| build(a.to_lowercase()))
                .ok_or_else(|| CommandError::MissingArgument(name.clone()))
        };

        let command = match name.as_str() {
            "import" => with_arg(Command::Import)?,
            "importall" => Command::ImportAll,
            "remove" => with_lowered_arg(Command::Remove)?,
            "list" => with_lowered_arg(Command::List)?,
            "search" => with_lowered_arg(Command::Search)?,
            "regex" => with_arg(Command::Regex)?,
            "desc" => with_lowered_arg(Command::Desc)?,
            "view" => with_lowered_arg(Command::View)?,
            "export" => with_arg(Command::Export)?,
            "help" => Command::Help,
            "exit" => Command::Exit,
            _ => return Err(CommandError::Unknown(name.clone())),
        };

        Ok(Some(command))
    }

    /// Whether running this command can change the store
    pub fn is_mutating(&self) -> bool {
        matches!(self, Command::Import(_) | Command::ImportAll | Command::Remove(_))
    }
}
