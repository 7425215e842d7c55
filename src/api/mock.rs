//! In-memory card source for testing

use super::error::{ApiError, Result};
use super::{CardRecord, CardSource, ListingResponse, SearchResponse};
use std::sync::Mutex;

/// A request received by `MockCardSource`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    /// `fetch_page(page, page_size)`
    Page {
        /// Requested page
        page: u32,
        /// Requested page size
        page_size: u32,
    },
    /// `search_by_name(term)`
    Search(String),
}

/// Card source that serves a fixed catalog from memory
///
/// Pages are sliced out of the catalog; searches match names
/// case-insensitively by substring. A scripted failure makes every
/// request fail with `ApiError::Network` until it is cleared.
#[derive(Debug, Default)]
pub struct MockCardSource {
    catalog: Vec<CardRecord>,
    failure: Mutex<Option<String>>,
    calls: Mutex<Vec<MockCall>>,
}

impl MockCardSource {
    /// Create a mock serving the given catalog
    #[must_use]
    pub fn new(catalog: Vec<CardRecord>) -> Self {
        Self {
            catalog,
            failure: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock with `count` generated cards named `Card 1..=count`
    ///
    /// Every other card carries flavor text.
    #[must_use]
    pub fn with_generated(count: usize) -> Self {
        let catalog = (1..=count)
            .map(|i| {
                let card = CardRecord::new(
                    format!("mock-{i}"),
                    format!("Card {i}"),
                    format!("https://images.example/mock/{i}_hires.png"),
                );
                if i % 2 == 0 {
                    card.with_flavor_text(format!("Flavor text for card {i}."))
                } else {
                    card
                }
            })
            .collect();
        Self::new(catalog)
    }

    /// Make every following request fail with `message` (`None` to stop)
    pub fn set_failure(&self, message: Option<&str>) {
        if let Ok(mut failure) = self.failure.lock() {
            *failure = message.map(str::to_string);
        }
    }

    /// Requests received so far, oldest first
    #[must_use]
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    fn record(&self, call: MockCall) -> Result<()> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
        match self.failure.lock() {
            Ok(failure) => failure.clone().map_or(Ok(()), |msg| Err(ApiError::Network(msg))),
            Err(_) => Err(ApiError::Network("mock state poisoned".to_string())),
        }
    }
}

impl CardSource for MockCardSource {
    fn fetch_page(&self, page: u32, page_size: u32) -> Result<ListingResponse> {
        self.record(MockCall::Page { page, page_size })?;

        let size = page_size as usize;
        let start = (page.saturating_sub(1) as usize).saturating_mul(size);
        let data = self
            .catalog
            .iter()
            .skip(start)
            .take(size)
            .cloned()
            .collect();

        Ok(ListingResponse {
            data,
            total_count: self.catalog.len() as u64,
        })
    }

    fn search_by_name(&self, term: &str) -> Result<SearchResponse> {
        self.record(MockCall::Search(term.to_string()))?;

        let needle = term.to_lowercase();
        let data = self
            .catalog
            .iter()
            .filter(|card| card.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        Ok(SearchResponse { data })
    }
}
