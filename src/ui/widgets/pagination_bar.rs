//! Pagination bar widget

use crate::browser::{PageControl, Pagination};
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Gap between controls
const GAP: u16 = 1;

fn control_width(control: &PageControl) -> u16 {
    // One space of padding each side
    u16::try_from(control.label().chars().count() + 2).unwrap_or(u16::MAX)
}

/// Screen cells of each control, centered in `area`
///
/// Controls that do not fit are left out.
#[must_use]
pub fn control_cells(area: Rect, pagination: &Pagination) -> Vec<(PageControl, Rect)> {
    let controls = pagination.controls();
    let total: u16 = controls
        .iter()
        .map(control_width)
        .fold(0u16, |acc, w| acc.saturating_add(w).saturating_add(GAP))
        .saturating_sub(GAP);

    let mut x = area.x + area.width.saturating_sub(total) / 2;
    let mut cells = Vec::with_capacity(controls.len());
    for control in controls {
        let width = control_width(&control);
        if x.saturating_add(width) > area.right() {
            break;
        }
        cells.push((control, Rect::new(x, area.y, width, area.height.min(1))));
        x = x.saturating_add(width + GAP);
    }
    cells
}

/// Row of First / Prev / page numbers / Next / Last controls
pub struct PaginationBar<'a> {
    pagination: &'a Pagination,
    theme: &'a Theme,
}

impl<'a> PaginationBar<'a> {
    /// Create a new pagination bar
    #[must_use]
    pub const fn new(pagination: &'a Pagination, theme: &'a Theme) -> Self {
        Self { pagination, theme }
    }
}

impl Widget for PaginationBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (control, cell) in control_cells(area, self.pagination) {
            let style = if control.active {
                self.theme.selected_style()
            } else if control.enabled {
                self.theme.normal_style()
            } else {
                self.theme.disabled_style()
            };
            Paragraph::new(Line::from(Span::styled(format!(" {} ", control.label()), style)))
                .render(cell, buf);
        }
    }
}
