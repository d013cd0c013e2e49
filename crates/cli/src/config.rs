//! Session configuration from the environment and command line

use clap::ValueEnum;

use crate::cli::{Cli, OutputFormat};

pub const SEED_VAR: &str = "TASKFLOW_SEED";
pub const FORMAT_VAR: &str = "TASKFLOW_FORMAT";
pub const LOG_VAR: &str = "TASKFLOW_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Load the sample tasks on start
    pub seed: bool,
    pub format: OutputFormat,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: true,
            format: OutputFormat::Table,
        }
    }
}

fn flag(raw: Option<String>, default: bool) -> bool {
    match raw {
        Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => default,
        },
        None => default,
    }
}

impl SessionConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through `lookup`; unknown values fall back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let format = lookup(FORMAT_VAR)
            .and_then(|raw| OutputFormat::from_str(raw.trim(), true).ok())
            .unwrap_or(defaults.format);
        Self {
            seed: flag(lookup(SEED_VAR), defaults.seed),
            format,
        }
    }

    /// Command-line flags win over the environment
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if cli.no_seed {
            self.seed = false;
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
        self
    }
}
