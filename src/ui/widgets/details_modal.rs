//! Detail overlay for one card

use crate::api::CardRecord;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Modal showing the enlarged view of the selected card
pub struct DetailsModal<'a> {
    card: &'a CardRecord,
    theme: &'a Theme,
}

impl<'a> DetailsModal<'a> {
    /// Create a new details modal
    #[must_use]
    pub const fn new(card: &'a CardRecord, theme: &'a Theme) -> Self {
        Self { card, theme }
    }

    /// Calculate centered area for the modal, sized in percent of `area`
    #[must_use]
    pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
        let popup_layout = Layout::vertical([
            Constraint::Percentage((100 - height.min(90)) / 2),
            Constraint::Percentage(height.min(90)),
            Constraint::Percentage((100 - height.min(90)) / 2),
        ])
        .split(area);

        Layout::horizontal([
            Constraint::Percentage((100 - width.min(90)) / 2),
            Constraint::Percentage(width.min(90)),
            Constraint::Percentage((100 - width.min(90)) / 2),
        ])
        .split(popup_layout[1])[1]
    }

    fn build_content(&self) -> Vec<Line<'a>> {
        vec![
            Line::from(vec![
                Span::styled("Image: ", self.theme.dimmed_style()),
                Span::styled(self.card.image_url(), self.theme.link_style()),
            ]),
            Line::from(vec![
                Span::styled("Id:    ", self.theme.dimmed_style()),
                Span::raw(self.card.id.as_str()),
            ]),
            Line::default(),
            Line::raw(self.card.description()),
            Line::default(),
            Line::from(Span::styled(
                "o: open image   y: copy URL   Esc: close",
                self.theme.dimmed_style().add_modifier(Modifier::ITALIC),
            )),
        ]
    }
}

impl Widget for DetailsModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = Self::centered_rect(70, 60, area);

        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(Span::styled(
                format!(" {} ", self.card.name),
                self.theme.card_name_style(),
            ))
            .title_alignment(Alignment::Center);

        Paragraph::new(self.build_content())
            .block(block)
            .wrap(Wrap { trim: false })
            .render(popup_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_text(buf: &Buffer) -> String {
        let mut text = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_centered_rect_is_inside() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = DetailsModal::centered_rect(70, 60, area);
        assert_eq!(popup.width, 70);
        assert_eq!(popup.height, 30);
        assert_eq!(popup.x, 15);
        assert_eq!(popup.y, 10);
    }

    #[test]
    fn test_renders_card() {
        let theme = Theme::default();
        let card = CardRecord::new("xy7-54", "Pikachu", "https://img/54_hires.png")
            .with_flavor_text("It keeps its tail raised.");
        let area = Rect::new(0, 0, 100, 40);
        let mut buf = Buffer::empty(area);
        DetailsModal::new(&card, &theme).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains(" Pikachu "));
        assert!(text.contains("https://img/54_hires.png"));
        assert!(text.contains("It keeps its tail raised."));
        assert!(text.contains("xy7-54"));
    }

    #[test]
    fn test_fallback_description() {
        let theme = Theme::default();
        let card = CardRecord::new("1", "Ditto", "u");
        let area = Rect::new(0, 0, 100, 40);
        let mut buf = Buffer::empty(area);
        DetailsModal::new(&card, &theme).render(area, &mut buf);
        assert!(buffer_text(&buf).contains("No description available."));
    }
}
