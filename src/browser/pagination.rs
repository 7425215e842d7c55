//! Pagination controls
//!
//! Page-number controls always start at page 1 and stop after
//! `MAX_PAGE_LINKS`, wherever the current page is. There is no sliding
//! window, so pages past the tenth are only reachable through Next/Last.

/// Most page-number controls shown at once
pub const MAX_PAGE_LINKS: u32 = 10;

/// Kind of pagination control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    /// Jump to page 1
    First,
    /// One page back
    Prev,
    /// A numbered page
    Page(u32),
    /// One page forward
    Next,
    /// Jump to the last page
    Last,
}

/// A rendered pagination control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControl {
    /// What the control does
    pub kind: ControlKind,
    /// Page it leads to
    pub target: u32,
    /// Whether it can be activated
    pub enabled: bool,
    /// Whether it marks the current page
    pub active: bool,
}

impl PageControl {
    /// Label drawn for the control
    #[must_use]
    pub fn label(&self) -> String {
        match self.kind {
            ControlKind::First => "« First".to_string(),
            ControlKind::Prev => "‹ Prev".to_string(),
            ControlKind::Page(n) => n.to_string(),
            ControlKind::Next => "Next ›".to_string(),
            ControlKind::Last => "Last »".to_string(),
        }
    }
}

/// Current position within the listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-based)
    pub current_page: u32,
    /// Total pages (at least 1)
    pub total_pages: u32,
}

impl Pagination {
    /// Create a pagination position
    #[must_use]
    pub fn new(current_page: u32, total_pages: u32) -> Self {
        let total_pages = total_pages.max(1);
        Self {
            current_page: current_page.clamp(1, total_pages),
            total_pages,
        }
    }

    /// On the first page
    #[must_use]
    pub const fn is_first(&self) -> bool {
        self.current_page <= 1
    }

    /// On the last page
    #[must_use]
    pub const fn is_last(&self) -> bool {
        self.current_page >= self.total_pages
    }

    /// Page a control leads to, ignoring whether it is enabled
    #[must_use]
    pub const fn target_of(&self, kind: ControlKind) -> u32 {
        match kind {
            ControlKind::First => 1,
            ControlKind::Prev => self.current_page.saturating_sub(1),
            ControlKind::Page(n) => n,
            ControlKind::Next => self.current_page.saturating_add(1),
            ControlKind::Last => self.total_pages,
        }
    }

    /// Whether a control can currently be activated
    #[must_use]
    pub const fn is_enabled(&self, kind: ControlKind) -> bool {
        match kind {
            ControlKind::First | ControlKind::Prev => !self.is_first(),
            ControlKind::Next | ControlKind::Last => !self.is_last(),
            ControlKind::Page(n) => n >= 1 && n <= self.total_pages,
        }
    }

    /// Page to load when `kind` is activated
    ///
    /// `None` when the control is disabled or leads to the current page.
    #[must_use]
    pub const fn resolve(&self, kind: ControlKind) -> Option<u32> {
        let target = self.target_of(kind);
        if self.is_enabled(kind) && target != self.current_page {
            Some(target)
        } else {
            None
        }
    }

    /// All controls in display order: First, Prev, pages, Next, Last
    #[must_use]
    pub fn controls(&self) -> Vec<PageControl> {
        let shown = self.total_pages.min(MAX_PAGE_LINKS);
        let mut kinds = vec![ControlKind::First, ControlKind::Prev];
        kinds.extend((1..=shown).map(ControlKind::Page));
        kinds.extend([ControlKind::Next, ControlKind::Last]);

        kinds
            .into_iter()
            .map(|kind| PageControl {
                kind,
                target: self.target_of(kind),
                enabled: self.is_enabled(kind),
                active: matches!(kind, ControlKind::Page(n) if n == self.current_page),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_numbers(pagination: &Pagination) -> Vec<u32> {
        pagination
            .controls()
            .iter()
            .filter_map(|c| match c.kind {
                ControlKind::Page(n) => Some(n),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_controls_for_four_pages() {
        let pagination = Pagination::new(1, 4);
        assert_eq!(page_numbers(&pagination), vec![1, 2, 3, 4]);

        let controls = pagination.controls();
        assert_eq!(controls.len(), 8);
        assert_eq!(controls[0].kind, ControlKind::First);
        assert!(!controls[0].enabled);
        assert!(!controls[1].enabled);
        assert!(controls[2].active);
        assert!(controls[6].enabled);
        assert_eq!(controls[7].target, 4);
    }

    #[test]
    fn test_window_does_not_slide() {
        let pagination = Pagination::new(15, 40);
        assert_eq!(page_numbers(&pagination), (1..=10).collect::<Vec<_>>());
        assert!(pagination.controls().iter().all(|c| !c.active));
    }

    #[test]
    fn test_last_page_disables_forward_controls() {
        let pagination = Pagination::new(4, 4);
        assert!(pagination.is_last());
        assert_eq!(pagination.resolve(ControlKind::Next), None);
        assert_eq!(pagination.resolve(ControlKind::Last), None);
        assert_eq!(pagination.resolve(ControlKind::Prev), Some(3));
        assert_eq!(pagination.resolve(ControlKind::First), Some(1));
    }

    #[test]
    fn test_resolve_numbered_pages() {
        let pagination = Pagination::new(2, 4);
        assert_eq!(pagination.resolve(ControlKind::Page(2)), None);
        assert_eq!(pagination.resolve(ControlKind::Page(4)), Some(4));
        assert_eq!(pagination.resolve(ControlKind::Page(5)), None);
        assert_eq!(pagination.resolve(ControlKind::Page(0)), None);
    }

    #[test]
    fn test_new_clamps_position() {
        let pagination = Pagination::new(9, 3);
        assert_eq!(pagination.current_page, 3);
        let pagination = Pagination::new(0, 0);
        assert_eq!(pagination, Pagination { current_page: 1, total_pages: 1 });
    }

    #[test]
    fn test_labels() {
        let controls = Pagination::new(1, 2).controls();
        let labels: Vec<_> = controls.iter().map(PageControl::label).collect();
        assert_eq!(labels, vec!["« First", "‹ Prev", "1", "2", "Next ›", "Last »"]);
    }
}
