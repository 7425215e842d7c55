//! Ratatui widgets for the card browser TUI

mod card_grid;
mod details_modal;
mod help_bar;
mod pagination_bar;
mod search_bar;
mod status_bar;

pub use card_grid::{CARD_HEIGHT, CardGrid, card_cells};
pub use details_modal::DetailsModal;
pub use help_bar::{HelpBar, KeyHint};
pub use pagination_bar::{PaginationBar, control_cells};
pub use search_bar::{PLACEHOLDER, SearchBar};
pub use status_bar::{MessageLevel, STATUS_TTL, StatusBar, StatusMessage};
