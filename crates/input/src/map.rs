//! Key mapping from terminal events to deck actions.

use crate::types::DeckAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to deck actions.
pub fn handle_key_event(key: KeyEvent) -> Option<DeckAction> {
    match key.code {
        // Keyboard drag
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(DeckAction::NudgeLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(DeckAction::NudgeRight),
        KeyCode::Enter | KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(DeckAction::Release)
        }
        KeyCode::Esc => Some(DeckAction::CancelDrag),
        KeyCode::Char('[') => Some(DeckAction::QuickSwipeLeft),
        KeyCode::Char(']') => Some(DeckAction::QuickSwipeRight),

        // Card
        KeyCode::Char(' ') | KeyCode::Char('f') | KeyCode::Char('F') => Some(DeckAction::Flip),

        // Deck commands
        KeyCode::Char('r') | KeyCode::Char('R') => Some(DeckAction::Reset),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(DeckAction::MorePractice),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('+') => Some(DeckAction::NewCard),

        _ => None,
    }
}

/// Check if key should quit the session.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
