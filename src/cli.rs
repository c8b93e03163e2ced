//! CLI argument parsing and command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Per-command permission filter for game server command and tab-completion events
#[derive(Parser)]
#[command(
    name = "command-blocker",
    version,
    about = "Per-command permission filter for game server command and tab-completion events",
    long_about = "Evaluates command executions and tab-completions against ordered criteria \
                  and reports whether the host should allow, deny, or leave them alone."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

/// Output format of the verdict
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// JSON object with opinion and messages (default)
    #[default]
    Json,
    /// Opinion on the first line, one message per following line
    Text,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate one event read from stdin (alias: run)
    #[command(alias = "run")]
    Evaluate {
        /// Output format
        #[arg(long, short = 'f', default_value = "json")]
        format: Format,
    },
    /// Generate default configuration file
    Init {
        /// Path where to create the configuration file
        #[arg(long, short = 'p')]
        path: Option<PathBuf>,
    },
    /// Validate configuration file and list filters
    Check,
    /// Display version information
    Version,
}
