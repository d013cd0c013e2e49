use clap::{Parser, ValueEnum};

/// How the board is written to the terminal
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Top-level CLI parser for the `taskflow` binary.
#[derive(Debug, Parser)]
#[command(
    name = "taskflow",
    version,
    about = "TaskFlow - an in-memory task board for the terminal",
    after_help = "Type `help` once the session has started to list board commands."
)]
pub struct Cli {
    /// Start with an empty board instead of the sample tasks
    #[arg(long)]
    pub no_seed: bool,

    /// Board output format (overrides TASKFLOW_FORMAT)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (only log errors)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}
