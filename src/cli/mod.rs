//! Command-line surface: process arguments, command parsing and the command loop

pub mod command;
pub mod commands;
pub mod session;

pub use command::{Command, CommandError};
pub use commands::{Cli, run};
pub use session::{Flow, Session};
