//! Search bar widget for the card name filter

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Text shown while the search box is empty
pub const PLACEHOLDER: &str = "Search for a card...";

/// Search bar widget that displays the term with a trailing cursor
pub struct SearchBar<'a> {
    /// Current search term
    term: &'a str,
    /// Theme for styling
    theme: &'a Theme,
    /// Whether the widget has focus
    focused: bool,
}

impl<'a> SearchBar<'a> {
    /// Create a new search bar widget
    #[must_use]
    pub const fn new(term: &'a str, theme: &'a Theme) -> Self {
        Self {
            term,
            theme,
            focused: true,
        }
    }

    /// Set focus state
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.cursor_style()
        } else {
            self.theme.border_style()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Search ");

        let inner = block.inner(area);
        block.render(area, buf);

        let cursor = Span::styled("│", Style::default().add_modifier(Modifier::SLOW_BLINK));
        let spans = if self.term.is_empty() {
            vec![cursor, Span::styled(PLACEHOLDER, self.theme.dimmed_style())]
        } else {
            vec![Span::raw(self.term), cursor]
        };

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
