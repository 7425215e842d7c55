//! Status line for transient feedback

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use std::time::{Duration, Instant};

/// How long a status message stays on screen
pub const STATUS_TTL: Duration = Duration::from_secs(4);

/// Severity of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Neutral information
    Info,
    /// An action succeeded
    Success,
    /// An action failed
    Error,
}

/// A status message with its creation time
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// Message level
    pub level: MessageLevel,
    /// Message text
    pub text: String,
    /// When the message was created
    pub created_at: Instant,
}

impl StatusMessage {
    /// Create a new status message
    #[must_use]
    pub fn new(level: MessageLevel, text: impl Into<String>, now: Instant) -> Self {
        Self {
            level,
            text: text.into(),
            created_at: now,
        }
    }

    /// Check if the message has outlived `ttl` at `now`
    #[must_use]
    pub fn is_expired(&self, ttl: Duration, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) > ttl
    }
}

/// Single-line status bar
pub struct StatusBar<'a> {
    message: Option<&'a StatusMessage>,
    /// Right-aligned position summary, e.g. "Page 2 of 4"
    position: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar widget
    #[must_use]
    pub const fn new(message: Option<&'a StatusMessage>, theme: &'a Theme) -> Self {
        Self {
            message,
            position: None,
            theme,
        }
    }

    /// Set the position summary
    #[must_use]
    pub const fn with_position(mut self, position: Option<&'a str>) -> Self {
        self.position = position;
        self
    }

    fn style_for_level(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Success => self.theme.success_style(),
            MessageLevel::Error => self.theme.error_style(),
            MessageLevel::Info => self.theme.info_style(),
        }
    }

    const fn prefix_for_level(level: MessageLevel) -> &'static str {
        match level {
            MessageLevel::Success => "✓ ",
            MessageLevel::Error => "✗ ",
            MessageLevel::Info => "ℹ ",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let position_width = self
            .position
            .map_or(0, |p| u16::try_from(p.chars().count()).unwrap_or(u16::MAX))
            .min(area.width);
        let [message_area, position_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(position_width),
        ])
        .areas(area);

        if let Some(msg) = self.message {
            let style = self.style_for_level(msg.level);
            let line = Line::from(vec![
                Span::styled(Self::prefix_for_level(msg.level), style),
                Span::styled(msg.text.as_str(), style),
            ]);
            Paragraph::new(line).render(message_area, buf);
        }

        if let Some(position) = self.position {
            Paragraph::new(Line::styled(position, self.theme.dimmed_style()))
                .render(position_area, buf);
        }
    }
}
