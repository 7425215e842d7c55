//! Cardbrowse - a terminal browser for a paginated trading card catalog
//!
//! This library fetches card listings and name searches from an HTTP
//! catalog, keeps the browsing state in a single reducer that discards
//! stale responses, and renders it as an interactive ratatui grid.

use thiserror::Error;

pub mod api;
pub mod browser;
pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod output;
pub mod ui;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum CardbrowseError {
    /// Catalog request error
    #[error("API error: {0}")]
    Api(#[from] api::ApiError),
    /// A fetch settled without cards
    #[error("{0}")]
    Fetch(#[from] browser::FetchError),
    /// Terminal UI error
    #[error("UI error: {0}")]
    Ui(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// CSV output error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// A global log subscriber was already installed
    #[error("Logging error: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
