//! API error types

use thiserror::Error;

/// Errors that can occur while talking to the card catalog
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connection, TLS, timeout)
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Request failed with status code {status}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// The response body was not the expected JSON
    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    /// The configured base URL could not be parsed
    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Network failure reported without an underlying I/O error
    #[error("{0}")]
    Network(String),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
