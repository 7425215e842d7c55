//! Fetch error types

use super::fetcher::FetchMode;
use crate::api::ApiError;
use thiserror::Error;

/// Outcome kinds that end a fetch without cards to show
///
/// Both kinds land in the single `error_message` slot of the browse state
/// and are rendered identically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// A valid response with zero records
    #[error("{}", .0.empty_message())]
    EmptyResult(FetchMode),

    /// Network, HTTP status, or decode failure, with its description
    #[error("{0}")]
    Transport(String),
}

impl From<ApiError> for FetchError {
    fn from(err: ApiError) -> Self {
        Self::Transport(err.to_string())
    }
}
