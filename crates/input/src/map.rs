//! Key mapping from terminal events to form edits.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Form-level meaning of a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKey {
    /// A letter typed into the focused coordinate field
    Letter(char),
    /// Clear the focused field
    Backspace,
    /// Move focus between the column and row fields
    NextField,
    /// Switch between horizontal and vertical swaps
    ToggleAxis,
    /// Submit the move
    Submit,
    /// Start a new game
    Restart,
}

/// Map keyboard input to form edits.
///
/// Letters are coordinates, so the usual letter shortcuts are not available:
/// restart is `F5` or `Ctrl-R`.
pub fn handle_key_event(key: KeyEvent) -> Option<FormKey> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') if ctrl => Some(FormKey::Restart),
        KeyCode::F(5) => Some(FormKey::Restart),
        KeyCode::Char(c) if !ctrl && c.is_ascii_alphabetic() => Some(FormKey::Letter(c)),
        KeyCode::Char(' ') => Some(FormKey::ToggleAxis),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
            Some(FormKey::NextField)
        }
        KeyCode::Up | KeyCode::Down => Some(FormKey::ToggleAxis),
        KeyCode::Enter => Some(FormKey::Submit),
        KeyCode::Backspace | KeyCode::Delete => Some(FormKey::Backspace),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
