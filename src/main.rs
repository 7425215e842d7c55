//! Cardbrowse CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # Browse interactively (default command)
//! cardbrowse
//! cardbrowse browse pikachu
//!
//! # Print a listing page or a search as text, JSON, or CSV
//! cardbrowse list --page 2
//! cardbrowse search charizard --format json
//!
//! # Point at another catalog and log at debug level
//! cardbrowse --api-url http://localhost:8080/v2/cards --debug
//! ```
//!
//! # Configuration
//!
//! Settings are read from `cardbrowse/config.toml` in the user's config
//! directory (`~/.config/cardbrowse/config.toml` on Linux) and from
//! `CARDBROWSE__SECTION__KEY` environment variables.

use cardbrowse::{
    CardbrowseError,
    api::{CardSource, HttpCardSource},
    cli::{Cli, Commands},
    commands,
    config::BrowserConfig,
    logging,
};
use colored::Colorize;
use std::io;
use std::process::ExitCode;
use std::sync::Arc;

type Result<T> = std::result::Result<T, CardbrowseError>;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("{} {e}", "Error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let mut config = BrowserConfig::load()?;
    if let Some(url) = &cli.api_url {
        config.api.base_url.clone_from(url);
    }

    // Logging is best effort; the commands work without it
    let _guard = match config.log_directory() {
        Ok(dir) => {
            let level = logging::effective_level(&config.logging.level, cli.debug);
            match logging::setup_logging(&dir, level) {
                Ok(guard) => Some(guard),
                Err(e) => {
                    eprintln!("{} could not set up logging: {e}", "Warning:".yellow());
                    None
                }
            }
        }
        Err(e) => {
            eprintln!("{} could not set up logging: {e}", "Warning:".yellow());
            None
        }
    };

    let command = cli.get_command();
    tracing::debug!(?command, base_url = %config.api.base_url, "dispatching command");

    let stdout = io::stdout();
    match command {
        Commands::Config { command } => {
            commands::config(&command, &config, cli.quiet, &mut stdout.lock())
        }
        Commands::Completions { shell } => {
            commands::completions(shell, &mut stdout.lock());
            Ok(())
        }
        Commands::Browse { term } => {
            let source: Arc<dyn CardSource> = Arc::new(HttpCardSource::new(&config.api)?);
            commands::browse(&config, source, term)
        }
        Commands::List { page, format } => {
            let source = HttpCardSource::new(&config.api)?;
            commands::list(&source, page, format, cli.quiet, &mut stdout.lock())
        }
        Commands::Search { term, format } => {
            let source = HttpCardSource::new(&config.api)?;
            commands::search(&source, &term, format, cli.quiet, &mut stdout.lock())
        }
    }
}
