//! command-blocker: per-command permission filter
//!
//! A CLI tool that a game server host calls for each command execution or
//! tab-completion to find out whether the command should be allowed, denied,
//! or left alone.

mod cli;
mod service;

use anyhow::{Context, Result};
use clap::Parser;

use cli::{Cli, Commands};
use command_blocker::config::{self, ConfigService};
use command_blocker::domain::{self, FilterChain, SharedFilterChain};
use service::EvaluationService;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = ConfigService::load(cli.config.as_deref())?;

    // Initialize logging
    let verbose = cli.debug || config.debug;
    if verbose || config.log_enabled {
        domain::logger::init(&config, verbose)?;
    }

    // Execute command
    match cli.command {
        Commands::Evaluate { format } => {
            let chain = FilterChain::new(&config).context("Failed to build filters")?;
            let service = EvaluationService::new(SharedFilterChain::new(chain), format);
            service.run()?;
        }
        Commands::Init { path } => {
            let config_path = if let Some(p) = path {
                ConfigService::generate_at(&p)?;
                p
            } else {
                ConfigService::generate_default()?;
                ConfigService::default_path()
            };
            if !cli.quiet {
                eprintln!("Configuration file created at: {}", config_path.display());
            }
        }
        Commands::Check => {
            config::validate(&config)?;
            let chain = FilterChain::new(&config).context("Failed to build filters")?;
            if !cli.quiet {
                eprintln!(
                    "Configuration is valid ({} filter(s): {}).",
                    chain.len(),
                    chain.filter_names().join(", ")
                );
            }
        }
        Commands::Version => {
            println!("command-blocker {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
