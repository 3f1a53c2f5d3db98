//! Key event translation into the viewer's fixed action set.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// The symbolic input actions the viewer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    CursorUp,
    CursorDown,
    HalfPageUp,
    HalfPageDown,
    ScrollLeft,
    ScrollRight,
    /// Replace the document with the subtree at the configured field path.
    Descend,
}

/// Translate a key event. Releases are ignored so terminals that report
/// event types don't double-act.
pub fn action_for_key(key: &KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::CursorUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::CursorDown),
        KeyCode::PageUp | KeyCode::Char('K') => Some(Action::HalfPageUp),
        KeyCode::PageDown | KeyCode::Char('J') => Some(Action::HalfPageDown),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::ScrollLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::ScrollRight),
        KeyCode::Char('t') => Some(Action::Descend),
        _ => None,
    }
}
