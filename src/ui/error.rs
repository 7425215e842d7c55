//! UI error types

use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// IO error while driving the terminal
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The system clipboard could not be used
    #[error("Clipboard unavailable: {0}")]
    ClipboardError(String),

    /// The image URL could not be handed to the system browser
    #[error("Failed to open {url}: {reason}")]
    OpenError {
        /// URL that was being opened
        url: String,
        /// Underlying failure
        reason: String,
    },
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
