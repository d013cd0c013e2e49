//! TaskFlow terminal board
//!
//! Starts an in-memory board session on stdin/stdout. The board lives only
//! as long as the process.

mod cli;
mod command;
mod config;
mod render;
mod session;

use std::io;

use clap::Parser;
use tf_core::task::TaskStore;
use tracing::info;

use crate::cli::Cli;
use crate::config::{SessionConfig, LOG_VAR};
use crate::session::Session;

fn main() {
    if let Err(error) = run() {
        eprintln!("taskflow error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = SessionConfig::from_env().with_cli(&cli);
    info!(seed = config.seed, format = ?config.format, "Starting TaskFlow");

    let store = if config.seed {
        TaskStore::with_seed_tasks()
    } else {
        TaskStore::new()
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(store, config.format, stdout.lock());
    session.run(stdin.lock())?;

    let store = session.into_store();
    info!(tasks = store.len(), "Session ended, board discarded");
    Ok(())
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_VAR)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
