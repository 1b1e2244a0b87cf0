use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use super::session::Session;
use crate::utils::get_dict_dir;

#[derive(Parser)]
#[command(name = "doyo")]
#[command(version)]
#[command(about = "Dictionary of Your Own: a tagged personal dictionary", long_about = None)]
pub struct Cli {
    /// Dictionary directory (defaults to $DOYO_HOME, then ./DictOfYourOwn)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Skip the startup banner
    #[arg(short, long)]
    pub quiet: bool,

    /// Run a single command (e.g. `doyo view apple`) instead of the interactive loop
    #[arg(trailing_var_arg = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let root = get_dict_dir(cli.root);
    let import_dir = env::current_dir().context("Failed to get working directory")?;
    let mut session = Session::open(root, import_dir)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !cli.command.is_empty() {
        session.execute_line(&cli.command.join(" "), &mut out)?;
        out.flush()?;
        return Ok(());
    }

    if !cli.quiet {
        session.print_banner(&mut out)?;
    }

    session.run_loop(io::stdin().lock(), &mut out)
}
