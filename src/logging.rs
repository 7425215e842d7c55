//! Log file setup
//!
//! The TUI owns the terminal, so tracing output goes to a daily rotating
//! file only. `RUST_LOG` takes precedence over the configured level.

use crate::CardbrowseError;
use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Prefix of the rotated log files
pub const LOG_FILE_PREFIX: &str = "cardbrowse.log";

/// Level used when `RUST_LOG` is unset
#[must_use]
pub fn effective_level(configured: &str, debug_mode: bool) -> &str {
    if debug_mode { "debug" } else { configured }
}

/// Install the global subscriber writing to `log_dir`
///
/// The returned guard flushes buffered records on drop and must be held for
/// the lifetime of the program.
///
/// # Errors
///
/// Returns `CardbrowseError::Io` if the directory cannot be created and
/// `CardbrowseError::Logging` if a global subscriber is already installed.
pub fn setup_logging(log_dir: &Path, level: &str) -> Result<WorkerGuard, CardbrowseError> {
    fs::create_dir_all(log_dir)?;

    let file_appender = rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_names(true),
        )
        .try_init()?;

    tracing::info!(dir = %log_dir.display(), level, "logging initialized");

    Ok(guard)
}
