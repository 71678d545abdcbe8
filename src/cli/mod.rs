//! Command-line interface for Checkup
//!
//! This module provides the main CLI structure and command handling for
//! Checkup. It uses clap for argument parsing and provides a clean,
//! user-friendly interface.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

pub mod commands;
mod output;

pub use output::Output;

/// Checkup - Self-Diagnostic Property Reports
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", env = "CHECKUP_CONFIG", global = true)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable quiet output (minimal)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Report keys and values from a properties resource
    Report(commands::report::ReportArgs),
    /// Run every report defined in configuration
    Run,
    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Show version information
    Version,
}

/// Configuration subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the merged configuration
    Show {
        /// Output format (toml, json, yaml)
        #[arg(long, default_value = "toml")]
        format: String,
    },
    /// Validate configuration
    Validate,
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        init_tracing(self.verbose);

        // Styled output only makes sense on a terminal
        if !atty::is(atty::Stream::Stdout) {
            console::set_colors_enabled(false);
        }

        // Initialize output handler with global verbose and quiet settings
        let output = Output::new(self.verbose, self.quiet);

        // Handle the command
        match self.command {
            Some(Commands::Report(args)) => {
                commands::report::execute(args, self.config.as_deref(), &output)
            }
            Some(Commands::Run) => commands::run::execute(self.config.as_deref(), &output),
            Some(Commands::Config(cmd)) => {
                commands::config::execute(cmd, self.config.as_deref(), &output)
            }
            Some(Commands::Version) => commands::version::execute(&output),
            None => {
                // Show help when no command is provided
                let mut cmd = Cli::command();
                cmd.print_help()?;
                Ok(())
            }
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "checkup=debug" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
