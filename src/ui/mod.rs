//! Terminal user interface
//!
//! `BrowserApp` renders a `CardBrowser` with ratatui and turns crossterm
//! events into browser actions.

pub mod app;
mod error;
pub mod events;
pub mod theme;
pub mod widgets;

pub use app::BrowserApp;
pub use error::{Result, UiError};
pub use events::{Action, map_event};
pub use theme::Theme;
