//! Interactive card browser
//!
//! Owns the terminal and a `CardBrowser`. Each loop iteration fires the
//! search debouncer, applies finished fetches, draws, and waits for the
//! next input event or deadline.

use super::error::{Result, UiError};
use super::events::{self, Action};
use super::theme::Theme;
use super::widgets::{
    CardGrid, DetailsModal, HelpBar, KeyHint, MessageLevel, PaginationBar, STATUS_TTL, SearchBar,
    StatusBar, StatusMessage, card_cells, control_cells,
};
use crate::browser::{CardBrowser, ControlKind, View};
use crate::config::UiConfig;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    text::Line,
    widgets::Paragraph,
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

/// Clickable regions from the last draw
#[derive(Debug, Default)]
struct HitMap {
    cards: Vec<(usize, Rect)>,
    controls: Vec<(ControlKind, Rect)>,
}

impl HitMap {
    fn card_at(&self, position: Position) -> Option<usize> {
        self.cards
            .iter()
            .find(|(_, rect)| rect.contains(position))
            .map(|(index, _)| *index)
    }

    fn control_at(&self, position: Position) -> Option<ControlKind> {
        self.controls
            .iter()
            .find(|(_, rect)| rect.contains(position))
            .map(|(kind, _)| *kind)
    }
}

/// Terminal front end for one browsing session
pub struct BrowserApp {
    browser: CardBrowser,
    theme: Theme,
    title: String,
    columns: u16,
    tick_rate: Duration,
    status: Option<StatusMessage>,
    hits: HitMap,
    browse_hints: Vec<KeyHint>,
    detail_hints: Vec<KeyHint>,
    should_exit: bool,
}

impl BrowserApp {
    /// Create the app around an unmounted browser
    #[must_use]
    pub fn new(browser: CardBrowser, config: &UiConfig) -> Self {
        Self {
            browser,
            theme: Theme::default(),
            title: config.title.clone(),
            columns: config.columns.max(1),
            tick_rate: Duration::from_millis(config.tick_rate_ms.max(1)),
            status: None,
            hits: HitMap::default(),
            browse_hints: HelpBar::browse_hints(),
            detail_hints: HelpBar::detail_hints(),
            should_exit: false,
        }
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
        Ok(())
    }

    /// Run the browser until the user quits
    ///
    /// # Errors
    ///
    /// Returns `UiError::IoError` if the terminal cannot be set up, drawn, or
    /// restored.
    pub fn run(mut self) -> Result<()> {
        let mut terminal = Self::setup_terminal()?;
        self.browser.mount();

        let result = self.run_loop(&mut terminal);

        self.browser.unmount();

        // Cleanup terminal (always, even on error)
        let restored = Self::cleanup_terminal();
        let cursor = terminal.show_cursor().map_err(UiError::from);
        keep_loop_result(result, restored.and(cursor))
    }

    fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        while !self.should_exit {
            let now = Instant::now();
            self.browser.tick(now);
            self.browser.pump();
            self.expire_status(now);

            terminal.draw(|frame| self.render(frame))?;

            let timeout = self.poll_timeout(Instant::now());
            let action = events::poll_action(timeout, self.browser.state().detail_visible)?;
            self.handle_action(action, Instant::now());
        }
        Ok(())
    }

    /// How long to wait for input before the next iteration
    fn poll_timeout(&self, now: Instant) -> Duration {
        self.browser
            .next_deadline()
            .map_or(self.tick_rate, |deadline| {
                deadline.saturating_duration_since(now).min(self.tick_rate)
            })
    }

    fn expire_status(&mut self, now: Instant) {
        if self
            .status
            .as_ref()
            .is_some_and(|msg| msg.is_expired(STATUS_TTL, now))
        {
            self.status = None;
        }
    }

    fn set_status(&mut self, level: MessageLevel, text: impl Into<String>, now: Instant) {
        self.status = Some(StatusMessage::new(level, text, now));
    }

    /// Draw the whole screen and record clickable regions
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let view = self.browser.state().view();

        let pagination = match &view {
            View::Browse(browse) => browse.pagination,
            _ => None,
        };
        let detail_open = matches!(&view, View::Browse(browse) if browse.detail.is_some());

        let [title_area, search_area, content_area, pagination_area, status_area, help_area] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(u16::from(pagination.is_some())),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .areas(area);

        frame.render_widget(
            Paragraph::new(Line::styled(self.title.as_str(), self.theme.title_style()))
                .alignment(Alignment::Center),
            title_area,
        );

        self.hits = HitMap::default();

        match &view {
            View::Loading => {
                frame.render_widget(
                    Paragraph::new("Loading...")
                        .style(self.theme.info_style())
                        .alignment(Alignment::Center),
                    search_area.union(content_area),
                );
            }
            View::Error(message) => {
                frame.render_widget(
                    Paragraph::new(format!("Error: {message}"))
                        .style(self.theme.error_style())
                        .alignment(Alignment::Center),
                    search_area.union(content_area),
                );
            }
            View::Browse(browse) => {
                frame.render_widget(
                    SearchBar::new(browse.search_term, &self.theme).focused(!detail_open),
                    search_area,
                );

                frame.render_widget(
                    CardGrid::new(browse.cards, browse.cursor, self.columns, &self.theme),
                    content_area,
                );
                self.hits.cards =
                    card_cells(content_area, browse.cards.len(), browse.cursor, self.columns);

                if let Some(pagination) = &browse.pagination {
                    frame.render_widget(PaginationBar::new(pagination, &self.theme), pagination_area);
                    self.hits.controls = control_cells(pagination_area, pagination)
                        .into_iter()
                        .map(|(control, rect)| (control.kind, rect))
                        .collect();
                }
            }
        }

        let position = pagination.map(|p| format!("Page {} of {}", p.current_page, p.total_pages));
        frame.render_widget(
            StatusBar::new(self.status.as_ref(), &self.theme).with_position(position.as_deref()),
            status_area,
        );

        let hints = if detail_open {
            &self.detail_hints
        } else {
            &self.browse_hints
        };
        frame.render_widget(HelpBar::new(hints, &self.theme), help_area);

        if let View::Browse(browse) = &view {
            if let Some(card) = browse.detail {
                frame.render_widget(DetailsModal::new(card, &self.theme), content_area);
                // Nothing behind the overlay is clickable
                self.hits = HitMap::default();
            }
        }
    }

    /// Apply one action at time `now`
    pub fn handle_action(&mut self, action: Action, now: Instant) {
        match action {
            Action::Type(c) => self.browser.push_char(c, now),
            Action::Backspace => self.browser.pop_char(now),
            Action::ClearInput => self.browser.clear_input(now),
            Action::Cursor(direction) => self.browser.move_cursor(direction, self.columns),
            Action::OpenDetail => {
                if matches!(self.browser.state().view(), View::Browse(_)) {
                    self.browser.open_highlighted();
                }
            }
            Action::CloseDetail => self.browser.close_detail(),
            Action::Navigate(kind) => {
                self.browser.activate(kind);
            }
            Action::GoToPage(page) => {
                self.browser.go_to(page);
            }
            Action::Reload => {
                if self.browser.reload() {
                    self.set_status(MessageLevel::Info, "Reloading...", now);
                }
            }
            Action::OpenImage => self.with_detail_url(now, |url| {
                open_image(url).map(|()| format!("Opened {url}"))
            }),
            Action::CopyImageUrl => self.with_detail_url(now, |url| {
                copy_to_clipboard(url).map(|()| "Copied image URL".to_string())
            }),
            Action::Click { column, row } => self.click(Position::new(column, row)),
            Action::Quit => self.should_exit = true,
            Action::None => {}
        }
    }

    fn click(&mut self, position: Position) {
        if self.browser.state().detail_visible {
            self.browser.close_detail();
        } else if let Some(index) = self.hits.card_at(position) {
            self.browser.select_card(index);
        } else if let Some(kind) = self.hits.control_at(position) {
            self.browser.activate(kind);
        }
    }

    /// Run `action` on the overlay card's image URL and report the outcome
    fn with_detail_url(&mut self, now: Instant, action: impl FnOnce(&str) -> Result<String>) {
        let Some(url) = self
            .browser
            .state()
            .detail_card()
            .map(|card| card.image_url().to_string())
        else {
            return;
        };

        match action(&url) {
            Ok(message) => self.set_status(MessageLevel::Success, message, now),
            Err(e) => {
                tracing::warn!(error = %e, "image action failed");
                self.set_status(MessageLevel::Error, e.to_string(), now);
            }
        }
    }

    /// Whether the user asked to leave
    #[must_use]
    pub const fn should_exit(&self) -> bool {
        self.should_exit
    }
}

/// The event loop's result wins; a failed restore is only reported
fn keep_loop_result(result: Result<()>, restored: Result<()>) -> Result<()> {
    if let Err(e) = restored {
        tracing::warn!(error = %e, "terminal cleanup failed");
        eprintln!("Warning: terminal cleanup failed: {e}");
    }
    result
}

fn open_image(url: &str) -> Result<()> {
    open::that(url).map_err(|e| UiError::OpenError {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| UiError::ClipboardError(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| UiError::ClipboardError(e.to_string()))
}
