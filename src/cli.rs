//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for cardbrowse using the `clap` crate.
//!
//! # Commands
//!
//! - **browse**: Interactive card browser (default)
//! - **list**: Print one listing page
//! - **search**: Print the cards whose name matches a term
//! - **config**: Show or initialize the configuration file
//! - **completions**: Generate shell completion scripts
//!
//! # Examples
//!
//! ```
//! use cardbrowse::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["cardbrowse", "list", "--page", "2"]);
//! assert!(matches!(cli.get_command(), Commands::List { page: 2, .. }));
//! ```

use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the path of the configuration file
    Path,

    /// Print the effective configuration as TOML
    Show,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short = 'f', long = "force")]
        force: bool,
    },
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "cardbrowse")]
#[command(about = "Browse and search a trading card catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Log at debug level
    #[arg(long = "debug", global = true)]
    pub debug: bool,

    /// Catalog endpoint (overrides config)
    #[arg(long = "api-url", value_name = "URL", global = true)]
    pub api_url: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive browser (default)
    #[command(visible_alias = "b")]
    Browse {
        /// Search term to start with
        #[arg(value_name = "TERM")]
        term: Option<String>,
    },

    /// Print one page of the catalog
    #[command(visible_alias = "l")]
    List {
        /// Page to print (1-based)
        #[arg(short = 'p', long = "page", default_value_t = 1)]
        page: u32,

        /// Output format
        #[arg(short = 'F', long = "format", value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Print the cards whose name contains TERM
    #[command(visible_alias = "s")]
    Search {
        /// Name to search for (at least two characters)
        #[arg(value_name = "TERM")]
        term: String,

        /// Output format
        #[arg(short = 'F', long = "format", value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Browse { term: None })
    }
}
