//! Event handling for the card browser TUI
//!
//! Maps keyboard and mouse events to browser actions. Mapping is pure;
//! the app applies the resulting `Action`.

use crate::browser::{ControlKind, CursorMove};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::time::Duration;

/// What an input event asks the browser to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Append a character to the search term
    Type(char),
    /// Delete the last search character
    Backspace,
    /// Empty the search term
    ClearInput,
    /// Move the grid highlight
    Cursor(CursorMove),
    /// Open the overlay for the highlighted card
    OpenDetail,
    /// Close the overlay
    CloseDetail,
    /// Activate a pagination control
    Navigate(ControlKind),
    /// Jump to a numbered page
    GoToPage(u32),
    /// Fetch the current intent again
    Reload,
    /// Open the overlay card's image in the system browser
    OpenImage,
    /// Copy the overlay card's image URL
    CopyImageUrl,
    /// Left click at a screen position
    Click {
        /// Screen column
        column: u16,
        /// Screen row
        row: u16,
    },
    /// Leave the browser
    Quit,
    /// Nothing to do
    None,
}

/// Handle keys while the grid is shown
fn handle_browse_key(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Enter, _) => Action::OpenDetail,

        // Grid
        (KeyCode::Left, _) => Action::Cursor(CursorMove::Left),
        (KeyCode::Right, _) => Action::Cursor(CursorMove::Right),
        (KeyCode::Up, _) => Action::Cursor(CursorMove::Up),
        (KeyCode::Down, _) => Action::Cursor(CursorMove::Down),

        // Pages
        (KeyCode::PageUp, _) => Action::Navigate(ControlKind::Prev),
        (KeyCode::PageDown, _) => Action::Navigate(ControlKind::Next),
        (KeyCode::Home, _) => Action::Navigate(ControlKind::First),
        (KeyCode::End, _) => Action::Navigate(ControlKind::Last),
        (KeyCode::Char(c), KeyModifiers::ALT) if c.is_ascii_digit() => {
            let page = c.to_digit(10).unwrap_or(0);
            Action::GoToPage(if page == 0 { 10 } else { page })
        }
        (KeyCode::Char('r'), KeyModifiers::CONTROL) => Action::Reload,

        // Search term
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ClearInput,
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => Action::Type(c),
        (KeyCode::Backspace, _) => Action::Backspace,

        _ => Action::None,
    }
}

/// Handle keys while the detail overlay is open
fn handle_detail_key(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q'), _)
        | (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::CloseDetail,
        (KeyCode::Char('o'), KeyModifiers::NONE) => Action::OpenImage,
        (KeyCode::Char('y'), KeyModifiers::NONE) => Action::CopyImageUrl,
        _ => Action::None,
    }
}

/// Handle mouse events
fn handle_mouse(mouse: MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Action::Click {
            column: mouse.column,
            row: mouse.row,
        },
        MouseEventKind::ScrollUp => Action::Cursor(CursorMove::Up),
        MouseEventKind::ScrollDown => Action::Cursor(CursorMove::Down),
        _ => Action::None,
    }
}

/// Map one terminal event to an action
#[must_use]
pub fn map_event(event: Event, detail_open: bool) -> Action {
    match event {
        // Release and repeat reports would double every keystroke
        Event::Key(key) if key.kind != KeyEventKind::Press => Action::None,
        Event::Key(key) if detail_open => handle_detail_key(key),
        Event::Key(key) => handle_browse_key(key),
        Event::Mouse(mouse) if detail_open => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Action::CloseDetail,
            _ => Action::None,
        },
        Event::Mouse(mouse) => handle_mouse(mouse),
        _ => Action::None,
    }
}

/// Wait up to `timeout` for an event and map it
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_action(timeout: Duration, detail_open: bool) -> std::io::Result<Action> {
    if !event::poll(timeout)? {
        return Ok(Action::None);
    }
    Ok(map_event(event::read()?, detail_open))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn mouse(kind: MouseEventKind) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: 12,
            row: 7,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_typing() {
        assert_eq!(
            map_event(key(KeyCode::Char('p'), KeyModifiers::NONE), false),
            Action::Type('p')
        );
        assert_eq!(
            map_event(key(KeyCode::Char('P'), KeyModifiers::SHIFT), false),
            Action::Type('P')
        );
        assert_eq!(
            map_event(key(KeyCode::Backspace, KeyModifiers::NONE), false),
            Action::Backspace
        );
        assert_eq!(
            map_event(key(KeyCode::Char('u'), KeyModifiers::CONTROL), false),
            Action::ClearInput
        );
    }

    #[test]
    fn test_navigation() {
        assert_eq!(
            map_event(key(KeyCode::Down, KeyModifiers::NONE), false),
            Action::Cursor(CursorMove::Down)
        );
        assert_eq!(
            map_event(key(KeyCode::PageDown, KeyModifiers::NONE), false),
            Action::Navigate(ControlKind::Next)
        );
        assert_eq!(
            map_event(key(KeyCode::Home, KeyModifiers::NONE), false),
            Action::Navigate(ControlKind::First)
        );
        assert_eq!(
            map_event(key(KeyCode::End, KeyModifiers::NONE), false),
            Action::Navigate(ControlKind::Last)
        );
    }

    #[test]
    fn test_alt_digits_jump_to_pages() {
        assert_eq!(
            map_event(key(KeyCode::Char('3'), KeyModifiers::ALT), false),
            Action::GoToPage(3)
        );
        assert_eq!(
            map_event(key(KeyCode::Char('0'), KeyModifiers::ALT), false),
            Action::GoToPage(10)
        );
        // Plain digits are search input
        assert_eq!(
            map_event(key(KeyCode::Char('3'), KeyModifiers::NONE), false),
            Action::Type('3')
        );
    }

    #[test]
    fn test_quit_and_reload() {
        assert_eq!(map_event(key(KeyCode::Esc, KeyModifiers::NONE), false), Action::Quit);
        assert_eq!(
            map_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL), false),
            Action::Quit
        );
        assert_eq!(
            map_event(key(KeyCode::Char('r'), KeyModifiers::CONTROL), false),
            Action::Reload
        );
    }

    #[test]
    fn test_detail_keys() {
        for code in [KeyCode::Esc, KeyCode::Enter, KeyCode::Char('q')] {
            assert_eq!(map_event(key(code, KeyModifiers::NONE), true), Action::CloseDetail);
        }
        assert_eq!(
            map_event(key(KeyCode::Char('o'), KeyModifiers::NONE), true),
            Action::OpenImage
        );
        assert_eq!(
            map_event(key(KeyCode::Char('y'), KeyModifiers::NONE), true),
            Action::CopyImageUrl
        );
        // Search input is inactive behind the overlay
        assert_eq!(
            map_event(key(KeyCode::Char('p'), KeyModifiers::NONE), true),
            Action::None
        );
    }

    #[test]
    fn test_release_is_ignored() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('p'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(map_event(release, false), Action::None);
    }

    #[test]
    fn test_mouse() {
        assert_eq!(
            map_event(mouse(MouseEventKind::Down(MouseButton::Left)), false),
            Action::Click { column: 12, row: 7 }
        );
        assert_eq!(
            map_event(mouse(MouseEventKind::ScrollDown), false),
            Action::Cursor(CursorMove::Down)
        );
        assert_eq!(
            map_event(mouse(MouseEventKind::Down(MouseButton::Left)), true),
            Action::CloseDetail
        );
        assert_eq!(map_event(mouse(MouseEventKind::ScrollUp), true), Action::None);
    }
}
