//! Key event handlers

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Convert key events to messages
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),

        // List navigation
        InputKey::Up | InputKey::Char('k') => Some(Message::CursorUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::CursorDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::CursorHome),
        InputKey::End | InputKey::Char('G') => Some(Message::CursorEnd),
        InputKey::Enter | InputKey::Char(' ') => Some(Message::SelectAtCursor),

        // Retry only makes sense after a failed load
        InputKey::Char('r') if state.catalog.is_failed() => Some(Message::RetryCatalog),

        // Display
        InputKey::Char('+' | '=') => Some(Message::CellSizeUp),
        InputKey::Char('-' | '_') => Some(Message::CellSizeDown),
        InputKey::Char('c') => Some(Message::ToggleClues),

        _ => None,
    }
}
