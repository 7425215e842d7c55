//! Search input debouncing
//!
//! Keystrokes queue the current input; the decision to search is only taken
//! once input has been quiet for the debounce delay.

use std::time::{Duration, Instant};

/// Quiet period before a queued term is acted on
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// What a settled search term asks the browser to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchDecision {
    /// Run a name search for the term
    Search(String),
    /// Input was cleared: leave search mode and return to page 1
    Reset,
    /// Single character: do nothing
    Ignore,
}

impl SearchDecision {
    /// Decide what to do with a settled term
    ///
    /// Length is counted in characters, not bytes.
    #[must_use]
    pub fn for_term(term: &str) -> Self {
        match term.chars().count() {
            0 => Self::Reset,
            1 => Self::Ignore,
            _ => Self::Search(term.to_string()),
        }
    }
}

/// Single-slot debouncer for the search box
#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    delay: Duration,
    pending: Option<(String, Instant)>,
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE)
    }
}

impl SearchDebouncer {
    /// Create a debouncer with the given quiet period
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Queue `term`, replacing any pending term and restarting the timer
    pub fn queue(&mut self, term: &str, now: Instant) {
        self.pending = Some((term.to_string(), now));
    }

    /// Take the pending decision if the quiet period has elapsed
    pub fn take_ready(&mut self, now: Instant) -> Option<SearchDecision> {
        let (_, queued_at) = self.pending.as_ref()?;
        if now.saturating_duration_since(*queued_at) < self.delay {
            return None;
        }
        self.pending
            .take()
            .map(|(term, _)| SearchDecision::for_term(&term))
    }

    /// When the pending term becomes ready
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, queued_at)| *queued_at + self.delay)
    }

    /// Whether a term is waiting
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending term
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
