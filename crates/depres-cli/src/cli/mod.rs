//! CLI for the depres dependency resolver.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{run_config, run_resolve};

/// Top-level CLI for the depres dependency resolver.
#[derive(Debug, Parser)]
#[command(name = "depres")]
#[command(
    about = "depres: resolve a package's declared dependencies from its repository manifest",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch the package manifest and print its declared dependencies.
    Resolve {
        /// Path to the TOML configuration file.
        #[arg(short, long, default_value = "config.toml")]
        config: PathBuf,
    },

    /// Load, validate and print the configuration.
    Config {
        /// Path to the TOML configuration file.
        #[arg(short, long, default_value = "config.toml")]
        config: PathBuf,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Resolve { config } => run_resolve(&config)?,
            CliCommand::Config { config } => run_config(&config)?,
        }

        Ok(())
    }
}
