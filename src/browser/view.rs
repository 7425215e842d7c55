//! View model derived from `BrowseState`

use super::pagination::Pagination;
use super::state::BrowseState;
use crate::api::CardRecord;

/// What the screen shows for a given state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View<'a> {
    /// A fetch is in flight; nothing else is shown
    Loading,
    /// The last fetch failed; only its message is shown
    Error(&'a str),
    /// Search box, grid, pagination and optional overlay
    Browse(BrowseView<'a>),
}

/// Contents of the browsing screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseView<'a> {
    /// Text in the search box
    pub search_term: &'a str,
    /// Cards in the grid
    pub cards: &'a [CardRecord],
    /// Highlighted card
    pub cursor: usize,
    /// Pagination controls, when shown
    pub pagination: Option<Pagination>,
    /// Card in the detail overlay, when open
    pub detail: Option<&'a CardRecord>,
}

impl BrowseState {
    /// Derive the view for this state
    #[must_use]
    pub fn view(&self) -> View<'_> {
        if self.is_loading {
            return View::Loading;
        }
        if let Some(message) = &self.error_message {
            return View::Error(message);
        }
        View::Browse(BrowseView {
            search_term: &self.search_term,
            cards: &self.cards,
            cursor: self.cursor,
            pagination: self.pagination(),
            detail: self.detail_card(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded() -> BrowseState {
        let mut state = BrowseState::new();
        state.is_loading = false;
        state.cards = vec![
            CardRecord::new("1", "Pikachu", "u1"),
            CardRecord::new("2", "Raichu", "u2"),
        ];
        state
    }

    #[test]
    fn test_loading_wins() {
        let mut state = loaded();
        state.is_loading = true;
        state.error_message = Some("boom".to_string());
        assert_eq!(state.view(), View::Loading);
    }

    #[test]
    fn test_error_hides_browse() {
        let mut state = loaded();
        state.error_message = Some("Network Error".to_string());
        assert_eq!(state.view(), View::Error("Network Error"));
    }

    #[test]
    fn test_browse_view() {
        let mut state = loaded();
        state.search_term = "chu".to_string();
        state.total_pages = 3;
        state.select_card(1);

        let View::Browse(view) = state.view() else {
            panic!("expected browse view");
        };
        assert_eq!(view.search_term, "chu");
        assert_eq!(view.cards.len(), 2);
        assert_eq!(view.pagination, Some(Pagination::new(1, 3)));
        assert_eq!(view.detail.map(|c| c.name.as_str()), Some("Raichu"));
    }

    #[test]
    fn test_single_page_has_no_pagination() {
        let state = loaded();
        let View::Browse(view) = state.view() else {
            panic!("expected browse view");
        };
        assert!(view.pagination.is_none());
        assert!(view.detail.is_none());
    }
}
