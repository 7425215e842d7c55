//! Card catalog API
//!
//! Wire types for the trading-card catalog and the `CardSource` seam the
//! browser fetches through. `HttpCardSource` talks to the real endpoint;
//! `MockCardSource` serves a scripted in-memory catalog for tests.

mod client;
mod error;
pub mod mock;

pub use client::HttpCardSource;
pub use error::{ApiError, Result};
pub use mock::{MockCall, MockCardSource};

use serde::{Deserialize, Serialize};

/// Number of records requested per listing page
pub const PAGE_SIZE: u32 = 12;

/// Text shown in place of a missing flavor text
pub const FALLBACK_DESCRIPTION: &str = "No description available.";

/// Image variants attached to a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardImages {
    /// URL of the large card scan
    pub large: String,
}

/// A single card record, sourced verbatim from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    /// Catalog identifier (e.g. `base1-4`)
    pub id: String,
    /// Display name
    pub name: String,
    /// Image URLs
    pub images: CardImages,
    /// Optional flavor/description text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavor_text: Option<String>,
}

impl CardRecord {
    /// Create a card record without flavor text
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            images: CardImages {
                large: image_url.into(),
            },
            flavor_text: None,
        }
    }

    /// Attach flavor text
    #[must_use]
    pub fn with_flavor_text(mut self, text: impl Into<String>) -> Self {
        self.flavor_text = Some(text.into());
        self
    }

    /// URL of the large image
    #[must_use]
    pub fn image_url(&self) -> &str {
        &self.images.large
    }

    /// Flavor text, or the fallback when absent or blank
    #[must_use]
    pub fn description(&self) -> &str {
        self.flavor_text
            .as_deref()
            .filter(|text| !text.is_empty())
            .unwrap_or(FALLBACK_DESCRIPTION)
    }
}

/// Body of a paged listing response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingResponse {
    /// Cards on the requested page
    pub data: Vec<CardRecord>,
    /// Number of records in the whole catalog
    #[serde(default)]
    pub total_count: u64,
}

/// Body of a name-search response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchResponse {
    /// Matching cards
    pub data: Vec<CardRecord>,
}

/// Source of card records
///
/// Implementations are shared with background fetch workers, so they must
/// be thread-safe.
pub trait CardSource: Send + Sync {
    /// Fetch one page of the catalog (`page` is 1-based)
    ///
    /// # Errors
    /// Returns `ApiError` if the request fails or the body cannot be decoded.
    fn fetch_page(&self, page: u32, page_size: u32) -> Result<ListingResponse>;

    /// Fetch every card whose name matches `term`
    ///
    /// # Errors
    /// Returns `ApiError` if the request fails or the body cannot be decoded.
    fn search_by_name(&self, term: &str) -> Result<SearchResponse>;
}
