//! Card browser controller
//!
//! Ties the search debouncer, the pagination controller and the background
//! fetcher to one `BrowseState`. Every fetch goes through `dispatch`, which
//! hands out a new generation token, so only the most recent intent's
//! result is ever applied.
//!
//! # Flow
//!
//! ```text
//! keystroke ──► SearchDebouncer ──tick──► SearchDecision ─┐
//!                                                         ├─► dispatch ──► Fetcher ──► Completion
//! go_to / activate ──► Pagination ───────────────────────┘                               │
//!                                                                                         ▼
//!                                                 View ◄── BrowseState::apply ◄──── pump
//! ```

mod debounce;
mod error;
mod fetcher;
mod pagination;
mod state;
mod view;

pub use debounce::{SEARCH_DEBOUNCE, SearchDebouncer, SearchDecision};
pub use error::FetchError;
pub use fetcher::{
    Completion, FetchIntent, FetchMode, FetchOutcome, FetchedCards, Fetcher, fetch,
    total_pages_for,
};
pub use pagination::{ControlKind, MAX_PAGE_LINKS, PageControl, Pagination};
pub use state::BrowseState;
pub use view::{BrowseView, View};

use crate::api::CardSource;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Direction of a grid highlight move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    /// Previous card
    Left,
    /// Next card
    Right,
    /// Same column, previous row
    Up,
    /// Same column, next row
    Down,
}

/// One browsing session over a card source
pub struct CardBrowser {
    state: BrowseState,
    debouncer: SearchDebouncer,
    fetcher: Fetcher,
    last_intent: Option<FetchIntent>,
}

impl CardBrowser {
    /// Create a browser; nothing is fetched until `mount`
    #[must_use]
    pub fn new(source: Arc<dyn CardSource>) -> Self {
        Self {
            state: BrowseState::new(),
            debouncer: SearchDebouncer::default(),
            fetcher: Fetcher::new(source),
            last_intent: None,
        }
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &BrowseState {
        &self.state
    }

    /// Start the session by loading the current listing page
    pub fn mount(&mut self) {
        tracing::info!("card browser mounted");
        self.dispatch(FetchIntent::Listing(self.state.current_page));
    }

    /// End the session; results still in flight are discarded
    pub fn unmount(&mut self) {
        self.state.invalidate();
        self.debouncer.cancel();
        tracing::info!("card browser unmounted");
    }

    fn dispatch(&mut self, intent: FetchIntent) {
        let generation = self.state.begin_fetch(&intent);
        self.fetcher.dispatch(generation, intent.clone());
        self.last_intent = Some(intent);
    }

    /// Replace the search box contents
    ///
    /// The box updates immediately; the search decision waits for the
    /// debounce period (see `tick`).
    pub fn input_changed(&mut self, term: impl Into<String>, now: Instant) {
        self.state.search_term = term.into();
        self.debouncer.queue(&self.state.search_term, now);
    }

    /// Type one character into the search box
    pub fn push_char(&mut self, c: char, now: Instant) {
        let mut term = self.state.search_term.clone();
        term.push(c);
        self.input_changed(term, now);
    }

    /// Delete the last character of the search box
    pub fn pop_char(&mut self, now: Instant) {
        let mut term = self.state.search_term.clone();
        if term.pop().is_some() {
            self.input_changed(term, now);
        }
    }

    /// Empty the search box
    pub fn clear_input(&mut self, now: Instant) {
        if !self.state.search_term.is_empty() {
            self.input_changed(String::new(), now);
        }
    }

    /// Fire the debouncer if its quiet period has passed
    ///
    /// Returns `true` when a search decision was acted on.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(decision) = self.debouncer.take_ready(now) else {
            return false;
        };
        tracing::debug!(?decision, "search input settled");

        match decision {
            SearchDecision::Search(term) => {
                // Search results are never paged, whatever the outcome
                self.state.is_searching = true;
                self.state.total_pages = 1;
                self.dispatch(FetchIntent::Search(term));
            }
            SearchDecision::Reset => {
                let rearm = self.state.is_searching || self.state.current_page != 1;
                self.state.is_searching = false;
                self.state.current_page = 1;
                if rearm {
                    self.dispatch(FetchIntent::Listing(1));
                }
            }
            SearchDecision::Ignore => {}
        }
        true
    }

    /// When the debouncer next needs a `tick`
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Load listing page `page`
    ///
    /// Ignored while searching, when pagination is hidden, for pages outside
    /// `1..=total_pages`, and for the current page.
    pub fn go_to(&mut self, page: u32) -> bool {
        let Some(pagination) = self.state.pagination() else {
            return false;
        };
        if page == 0 || page > pagination.total_pages || page == pagination.current_page {
            return false;
        }
        self.state.current_page = page;
        self.dispatch(FetchIntent::Listing(page));
        true
    }

    /// Activate a pagination control
    pub fn activate(&mut self, kind: ControlKind) -> bool {
        self.state
            .pagination()
            .and_then(|pagination| pagination.resolve(kind))
            .is_some_and(|page| self.go_to(page))
    }

    /// Fetch the most recent intent again
    pub fn reload(&mut self) -> bool {
        let Some(intent) = self.last_intent.clone() else {
            return false;
        };
        tracing::info!(?intent, "reload requested");
        self.dispatch(intent);
        true
    }

    /// Open the detail overlay for the card at `index`
    pub fn select_card(&mut self, index: usize) -> bool {
        self.state.select_card(index)
    }

    /// Open the detail overlay for the highlighted card
    pub fn open_highlighted(&mut self) -> bool {
        self.state.select_card(self.state.cursor)
    }

    /// Close the detail overlay
    pub fn close_detail(&mut self) {
        self.state.close_detail();
    }

    /// Move the grid highlight in a grid of `columns` columns
    pub fn move_cursor(&mut self, direction: CursorMove, columns: u16) {
        let columns = isize::try_from(columns.max(1)).unwrap_or(1);
        let offset = match direction {
            CursorMove::Left => -1,
            CursorMove::Right => 1,
            CursorMove::Up => -columns,
            CursorMove::Down => columns,
        };
        self.state.move_cursor(offset);
    }

    /// Apply every completion that has arrived
    ///
    /// Returns `true` if the state changed.
    pub fn pump(&mut self) -> bool {
        let mut changed = false;
        while let Some(completion) = self.fetcher.try_recv() {
            changed |= self.state.apply(completion);
        }
        changed
    }

    /// Block until the latest fetch settles or `timeout` passes
    ///
    /// Returns `false` on timeout.
    pub fn wait_until_settled(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.state.is_loading {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return false;
            }
            match self.fetcher.recv_timeout(remaining) {
                Some(completion) => {
                    self.state.apply(completion);
                }
                None => return false,
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MockCall, MockCardSource};

    const WAIT: Duration = Duration::from_secs(5);

    fn mounted(count: usize) -> (CardBrowser, Arc<MockCardSource>) {
        let source = Arc::new(MockCardSource::with_generated(count));
        let mut browser = CardBrowser::new(source.clone());
        browser.mount();
        assert!(browser.wait_until_settled(WAIT));
        (browser, source)
    }

    fn settle_input(browser: &mut CardBrowser, term: &str) {
        let start = Instant::now();
        browser.input_changed(term, start);
        browser.tick(start + SEARCH_DEBOUNCE);
        assert!(browser.wait_until_settled(WAIT));
    }

    #[test]
    fn test_mount_loads_first_page() {
        let (browser, source) = mounted(37);
        let state = browser.state();
        assert_eq!(state.cards.len(), 12);
        assert_eq!(state.total_pages, 4);
        assert_eq!(state.current_page, 1);
        assert_eq!(source.calls(), vec![MockCall::Page { page: 1, page_size: 12 }]);
    }

    #[test]
    fn test_go_to_loads_page() {
        let (mut browser, _) = mounted(37);
        assert!(browser.go_to(4));
        assert!(browser.state().is_loading);
        assert!(browser.wait_until_settled(WAIT));
        assert_eq!(browser.state().current_page, 4);
        assert_eq!(browser.state().cards.len(), 1);
        assert_eq!(browser.state().cards[0].name, "Card 37");
    }

    #[test]
    fn test_go_to_rejects_invalid_targets() {
        let (mut browser, source) = mounted(37);
        assert!(!browser.go_to(0));
        assert!(!browser.go_to(5));
        assert!(!browser.go_to(1));
        assert_eq!(source.calls().len(), 1);
    }

    #[test]
    fn test_activate_controls() {
        let (mut browser, _) = mounted(37);
        assert!(!browser.activate(ControlKind::Prev));
        assert!(browser.activate(ControlKind::Last));
        browser.wait_until_settled(WAIT);
        assert_eq!(browser.state().current_page, 4);
        assert!(!browser.activate(ControlKind::Next));
        assert!(browser.activate(ControlKind::Prev));
        browser.wait_until_settled(WAIT);
        assert_eq!(browser.state().current_page, 3);
    }

    #[test]
    fn test_search_waits_for_debounce() {
        let (mut browser, source) = mounted(37);
        let start = Instant::now();
        browser.input_changed("Card 1", start);
        assert_eq!(browser.state().search_term, "Card 1");

        assert!(!browser.tick(start + Duration::from_millis(299)));
        assert!(!browser.state().is_searching);

        assert!(browser.tick(start + SEARCH_DEBOUNCE));
        assert!(browser.state().is_searching);
        assert!(browser.wait_until_settled(WAIT));
        assert_eq!(browser.state().total_pages, 1);
        assert!(browser.state().pagination().is_none());
        assert_eq!(
            source.calls().last(),
            Some(&MockCall::Search("Card 1".to_string()))
        );
    }

    #[test]
    fn test_pagination_disabled_while_searching() {
        let (mut browser, _) = mounted(37);
        settle_input(&mut browser, "Card");
        assert!(!browser.go_to(2));
        assert!(!browser.activate(ControlKind::Next));
    }

    #[test]
    fn test_single_character_is_dead_zone() {
        let (mut browser, source) = mounted(37);
        let start = Instant::now();
        browser.input_changed("C", start);
        assert!(browser.tick(start + SEARCH_DEBOUNCE));
        assert!(!browser.state().is_searching);
        assert!(!browser.state().is_loading);
        assert_eq!(source.calls().len(), 1);
    }

    #[test]
    fn test_empty_search_collapses_page_count() {
        let (mut browser, _) = mounted(37);
        assert_eq!(browser.state().total_pages, 4);

        settle_input(&mut browser, "pik");
        let state = browser.state();
        assert!(state.is_searching);
        assert_eq!(state.total_pages, 1);
        assert!(state.pagination().is_none());
        assert_eq!(
            state.error_message.as_deref(),
            Some("No cards found matching your search")
        );
    }

    #[test]
    fn test_failed_search_collapses_page_count() {
        let (mut browser, source) = mounted(37);
        source.set_failure(Some("Network Error"));

        settle_input(&mut browser, "Card 2");
        let state = browser.state();
        assert!(state.is_searching);
        assert_eq!(state.total_pages, 1);
        assert_eq!(state.error_message.as_deref(), Some("Network Error"));
    }

    #[test]
    fn test_single_character_keeps_active_search() {
        let (mut browser, source) = mounted(37);
        settle_input(&mut browser, "Card 1");
        assert!(browser.state().is_searching);
        let calls = source.calls().len();
        let cards = browser.state().cards.clone();

        let start = Instant::now();
        browser.input_changed("C", start);
        assert!(browser.tick(start + SEARCH_DEBOUNCE));
        let state = browser.state();
        assert!(state.is_searching);
        assert!(!state.is_loading);
        assert_eq!(state.search_term, "C");
        assert_eq!(state.cards, cards);
        assert_eq!(source.calls().len(), calls);
    }

    #[test]
    fn test_clearing_search_restores_listing() {
        let (mut browser, source) = mounted(37);
        browser.go_to(3);
        browser.wait_until_settled(WAIT);

        settle_input(&mut browser, "Card 2");
        assert!(browser.state().is_searching);

        settle_input(&mut browser, "");
        let state = browser.state();
        assert!(!state.is_searching);
        assert_eq!(state.current_page, 1);
        assert_eq!(state.total_pages, 4);
        assert_eq!(state.cards[0].name, "Card 1");
        assert_eq!(
            source.calls().last(),
            Some(&MockCall::Page { page: 1, page_size: 12 })
        );
    }

    #[test]
    fn test_clearing_on_first_page_does_not_refetch() {
        let (mut browser, source) = mounted(37);
        let start = Instant::now();
        browser.input_changed("C", start);
        browser.input_changed("", start);
        browser.tick(start + SEARCH_DEBOUNCE);
        assert!(!browser.state().is_loading);
        assert_eq!(source.calls().len(), 1);
    }

    #[test]
    fn test_keystroke_helpers() {
        let source = Arc::new(MockCardSource::with_generated(3));
        let mut browser = CardBrowser::new(source);
        let now = Instant::now();
        browser.push_char('p', now);
        browser.push_char('i', now);
        assert_eq!(browser.state().search_term, "pi");
        browser.pop_char(now);
        assert_eq!(browser.state().search_term, "p");
        browser.clear_input(now);
        assert_eq!(browser.state().search_term, "");
        assert_eq!(browser.next_deadline(), Some(now + SEARCH_DEBOUNCE));
    }

    #[test]
    fn test_failure_and_reload() {
        let (mut browser, source) = mounted(37);
        source.set_failure(Some("Network Error"));
        browser.go_to(2);
        browser.wait_until_settled(WAIT);
        assert_eq!(browser.state().error_message.as_deref(), Some("Network Error"));
        assert!(!browser.state().is_loading);

        source.set_failure(None);
        assert!(browser.reload());
        browser.wait_until_settled(WAIT);
        assert!(browser.state().error_message.is_none());
        assert_eq!(browser.state().current_page, 2);
    }

    #[test]
    fn test_cursor_moves_by_rows() {
        let (mut browser, _) = mounted(37);
        browser.move_cursor(CursorMove::Down, 3);
        assert_eq!(browser.state().cursor, 3);
        browser.move_cursor(CursorMove::Right, 3);
        assert_eq!(browser.state().cursor, 4);
        browser.move_cursor(CursorMove::Up, 3);
        assert_eq!(browser.state().cursor, 1);
        browser.move_cursor(CursorMove::Left, 3);
        browser.move_cursor(CursorMove::Left, 3);
        assert_eq!(browser.state().cursor, 0);

        assert!(browser.open_highlighted());
        assert_eq!(browser.state().selected_card.as_ref().map(|c| c.name.as_str()), Some("Card 1"));
        browser.close_detail();
        assert!(!browser.state().detail_visible);
    }

    #[test]
    fn test_unmount_discards_in_flight() {
        let source = Arc::new(MockCardSource::with_generated(37));
        let mut browser = CardBrowser::new(source);
        browser.mount();
        browser.unmount();
        assert!(!browser.wait_until_settled(Duration::from_millis(500)));
        assert!(browser.state().cards.is_empty());
    }
}
