//! Card grid widget
//!
//! Lays the current page out in fixed-height cells, `columns` per row. When
//! the page has more rows than fit, the grid scrolls so the highlighted card
//! stays on screen.

use crate::api::CardRecord;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Height of one card cell, borders included
pub const CARD_HEIGHT: u16 = 6;

/// Screen cells of the visible cards as `(card index, area)` pairs
///
/// Used both for drawing and for mapping mouse clicks back to cards.
#[must_use]
pub fn card_cells(area: Rect, count: usize, cursor: usize, columns: u16) -> Vec<(usize, Rect)> {
    if count == 0 || area.width == 0 || area.height == 0 {
        return Vec::new();
    }

    let columns = columns.max(1).min(area.width);
    let per_row = usize::from(columns);
    let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
    let cursor_row = cursor.min(count - 1) / per_row;
    let first_row = (cursor_row + 1).saturating_sub(visible_rows);

    let cell_width = area.width / columns;
    let cell_height = CARD_HEIGHT.min(area.height);

    let mut cells = Vec::new();
    for (offset, row) in (first_row..first_row + visible_rows).enumerate() {
        let y = area.y + CARD_HEIGHT * u16::try_from(offset).unwrap_or(u16::MAX);
        for column in 0..columns {
            let index = row * per_row + usize::from(column);
            if index >= count {
                return cells;
            }
            let x = area.x + column * cell_width;
            // Last column absorbs the division remainder
            let width = if column + 1 == columns {
                area.right() - x
            } else {
                cell_width
            };
            cells.push((index, Rect::new(x, y, width, cell_height)));
        }
    }
    cells
}

/// Grid of card summaries
pub struct CardGrid<'a> {
    cards: &'a [CardRecord],
    cursor: usize,
    columns: u16,
    theme: &'a Theme,
}

impl<'a> CardGrid<'a> {
    /// Create a new card grid
    #[must_use]
    pub const fn new(cards: &'a [CardRecord], cursor: usize, columns: u16, theme: &'a Theme) -> Self {
        Self {
            cards,
            cursor,
            columns,
            theme,
        }
    }

    fn render_card(&self, card: &CardRecord, highlighted: bool, area: Rect, buf: &mut Buffer) {
        let border_style = if highlighted {
            self.theme.cursor_style()
        } else {
            self.theme.border_style()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(
                format!(" {} ", card.name),
                self.theme.card_name_style(),
            ));

        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::raw(card.description()),
            Line::styled(card.image_url(), self.theme.link_style()),
        ];
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

impl Widget for CardGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (index, cell) in card_cells(area, self.cards.len(), self.cursor, self.columns) {
            self.render_card(&self.cards[index], index == self.cursor, cell, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol().to_string()).collect()
    }

    #[test]
    fn test_cells_fill_rows() {
        let cells = card_cells(Rect::new(0, 0, 90, 30), 12, 0, 3);
        assert_eq!(cells.len(), 12);
        assert_eq!(cells[0], (0, Rect::new(0, 0, 30, CARD_HEIGHT)));
        assert_eq!(cells[4], (4, Rect::new(30, CARD_HEIGHT, 30, CARD_HEIGHT)));
    }

    #[test]
    fn test_last_column_takes_remainder() {
        let cells = card_cells(Rect::new(0, 0, 100, 6), 3, 0, 3);
        assert_eq!(cells[2].1.width, 34);
        assert_eq!(cells[2].1.right(), 100);
    }

    #[test]
    fn test_scrolls_to_cursor() {
        // Two rows fit; highlighting the last card shows rows 2 and 3
        let cells = card_cells(Rect::new(0, 0, 90, 12), 12, 11, 3);
        let indices: Vec<_> = cells.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![6, 7, 8, 9, 10, 11]);
        assert_eq!(cells[0].1.y, 0);
    }

    #[test]
    fn test_partial_last_row() {
        let cells = card_cells(Rect::new(0, 0, 90, 30), 4, 0, 3);
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[3].1.x, 0);
    }

    #[test]
    fn test_empty_grid() {
        assert!(card_cells(Rect::new(0, 0, 90, 30), 0, 0, 3).is_empty());
        assert!(card_cells(Rect::new(0, 0, 90, 0), 5, 0, 3).is_empty());
    }

    #[test]
    fn test_render_shows_name_and_fallback() {
        let theme = Theme::default();
        let cards = vec![
            CardRecord::new("1", "Pikachu", "https://img/1.png").with_flavor_text("Mouse"),
            CardRecord::new("2", "Raichu", "https://img/2.png"),
        ];
        let area = Rect::new(0, 0, 80, 6);
        let mut buf = Buffer::empty(area);
        CardGrid::new(&cards, 0, 2, &theme).render(area, &mut buf);

        assert!(row_text(&buf, 0).contains("Pikachu"));
        assert!(row_text(&buf, 0).contains("Raichu"));
        let body = row_text(&buf, 1);
        assert!(body.contains("Mouse"));
        assert!(body.contains("No description available."));
    }
}
