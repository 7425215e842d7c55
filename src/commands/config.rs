//! Config command - inspect or create the configuration file

use crate::{CardbrowseError, cli::ConfigCommands, config::BrowserConfig};
use std::io::Write;
use std::path::Path;

type Result<T> = std::result::Result<T, CardbrowseError>;

/// Execute a config subcommand against the effective configuration
///
/// # Errors
/// Returns an error if the config path cannot be determined, the file
/// cannot be written, or `init` would overwrite without `--force`
pub fn execute<W: Write>(
    command: &ConfigCommands,
    config: &BrowserConfig,
    quiet: bool,
    out: &mut W,
) -> Result<()> {
    match command {
        ConfigCommands::Path => {
            writeln!(out, "{}", BrowserConfig::config_path()?.display())?;
        }
        ConfigCommands::Show => {
            write!(out, "{}", config.to_toml()?)?;
        }
        ConfigCommands::Init { force } => {
            init_at(&BrowserConfig::config_path()?, *force, quiet, out)?;
        }
    }
    Ok(())
}

/// Write the default configuration to `path`
///
/// # Errors
/// Returns `InvalidInput` if the file exists and `force` is false
pub fn init_at<W: Write>(path: &Path, force: bool, quiet: bool, out: &mut W) -> Result<()> {
    if path.exists() && !force {
        return Err(CardbrowseError::InvalidInput(format!(
            "Config file already exists at {} (use --force to overwrite)",
            path.display()
        )));
    }

    BrowserConfig::default().save_to(path)?;
    tracing::info!(path = %path.display(), "wrote default configuration");
    if !quiet {
        writeln!(out, "Wrote default configuration to {}", path.display())?;
    }
    Ok(())
}
