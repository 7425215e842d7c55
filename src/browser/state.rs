//! Browse state and its reducer
//!
//! `BrowseState` is owned by the UI thread. Fetch completions are folded in
//! through `apply`, which drops any completion whose generation token is not
//! the latest one handed out by `begin_fetch`.

use super::error::FetchError;
use super::fetcher::{Completion, FetchIntent, FetchMode};
use super::pagination::Pagination;
use crate::api::CardRecord;

/// All mutable state of one browsing session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseState {
    /// Cards currently shown
    pub cards: Vec<CardRecord>,
    /// Current listing page (1-based)
    pub current_page: u32,
    /// Total listing pages (at least 1)
    pub total_pages: u32,
    /// Text in the search box
    pub search_term: String,
    /// Whether search mode is active
    pub is_searching: bool,
    /// Whether the latest fetch is still in flight
    pub is_loading: bool,
    /// Message of the last failed fetch
    pub error_message: Option<String>,
    /// Card shown in the detail overlay
    pub selected_card: Option<CardRecord>,
    /// Whether the detail overlay is open
    pub detail_visible: bool,
    /// Highlighted card in the grid
    pub cursor: usize,
    generation: u64,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self {
            cards: Vec::new(),
            current_page: 1,
            total_pages: 1,
            search_term: String::new(),
            is_searching: false,
            is_loading: true,
            error_message: None,
            selected_card: None,
            detail_visible: false,
            cursor: 0,
            generation: 0,
        }
    }
}

impl BrowseState {
    /// Create the state of a freshly mounted browser
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a fetch as started and return its generation token
    pub fn begin_fetch(&mut self, intent: &FetchIntent) -> u64 {
        self.generation += 1;
        self.is_loading = true;
        tracing::debug!(generation = self.generation, ?intent, "fetch started");
        self.generation
    }

    /// Make every in-flight fetch stale
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Fold a settled fetch into the state
    ///
    /// Returns `false` (and changes nothing) when the completion is stale.
    pub fn apply(&mut self, completion: Completion) -> bool {
        if completion.generation != self.generation {
            tracing::debug!(
                stale = completion.generation,
                current = self.generation,
                "dropping stale fetch result"
            );
            return false;
        }

        self.is_loading = false;
        match completion.outcome {
            Ok(fetched) => {
                if let FetchIntent::Listing(page) = completion.intent {
                    self.current_page = page;
                }
                self.total_pages = fetched.total_pages.max(1);
                self.cards = fetched.cards;
                self.cursor = 0;
                self.error_message = None;
                tracing::info!(
                    cards = self.cards.len(),
                    page = self.current_page,
                    total_pages = self.total_pages,
                    "fetch applied"
                );
            }
            Err(err) => {
                if err == FetchError::EmptyResult(FetchMode::Search) {
                    self.cards.clear();
                    self.cursor = 0;
                }
                if let FetchError::Transport(message) = &err {
                    tracing::warn!(intent = ?completion.intent, %message, "fetch failed");
                }
                self.error_message = Some(err.to_string());
            }
        }
        true
    }

    /// Pagination position, when the pagination controls are shown
    #[must_use]
    pub fn pagination(&self) -> Option<Pagination> {
        (!self.is_searching && self.total_pages > 1)
            .then(|| Pagination::new(self.current_page, self.total_pages))
    }

    /// Open the detail overlay for the card at `index`
    pub fn select_card(&mut self, index: usize) -> bool {
        let Some(card) = self.cards.get(index) else {
            return false;
        };
        self.selected_card = Some(card.clone());
        self.detail_visible = true;
        self.cursor = index;
        true
    }

    /// Close the detail overlay
    pub fn close_detail(&mut self) {
        self.selected_card = None;
        self.detail_visible = false;
    }

    /// Card shown in the overlay, if the overlay is open
    #[must_use]
    pub fn detail_card(&self) -> Option<&CardRecord> {
        self.selected_card.as_ref().filter(|_| self.detail_visible)
    }

    /// Move the grid highlight by `offset`, clamped to the card list
    pub fn move_cursor(&mut self, offset: isize) {
        if self.cards.is_empty() {
            self.cursor = 0;
            return;
        }
        let last = self.cards.len() - 1;
        self.cursor = self.cursor.saturating_add_signed(offset).min(last);
    }
}
