//! Interactive worker collection manager.
//!
//! Loads the collection named on the command line, then reads commands from
//! standard input until `exit` or end of input.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use roster::exit_codes;
use roster::io::config::load_config;
use roster::io::input::InputSource;
use roster::logging;
use roster::session::{Session, load_initial_store};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Interactive manager for an XML-backed collection of workers"
)]
struct Cli {
    /// Collection file to load at startup (exactly one expected).
    #[arg(num_args = 0..)]
    files: Vec<PathBuf>,

    /// TOML configuration file (defaults apply when absent).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => std::process::exit(exit_codes::OK),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    let store = load_initial_store(&cli.files, &config.limits, &mut err)?;
    let mut session = Session::new(store, config, InputSource::stdin());
    let end = session.run(&mut out, &mut err).context("run session")?;
    info!(?end, workers = session.store().len(), "session ended");
    Ok(())
}
