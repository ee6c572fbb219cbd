//! # Input Commands
//!
//! Translates terminal input into the handful of things a user can do on
//! the lookup screen.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Rows moved by PageUp / PageDown
pub const PAGE_SCROLL_ROWS: isize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputCommand {
    /// Type a character at the end of the input
    Append(char),
    /// Paste text at the end of the input
    Paste(String),
    /// Remove the last character
    Backspace,
    /// Reset the whole screen
    Clear,
    /// Move the result list by this many rows
    Scroll(isize),
    Quit,
}

/// Map a key press to a command; unbound keys yield `None`
pub fn map_key_event(key: KeyEvent) -> Option<InputCommand> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('d') => Some(InputCommand::Quit),
            KeyCode::Char('u') => Some(InputCommand::Clear),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(ch) => Some(InputCommand::Append(ch)),
        KeyCode::Backspace => Some(InputCommand::Backspace),
        KeyCode::Esc => Some(InputCommand::Clear),
        KeyCode::Up => Some(InputCommand::Scroll(-1)),
        KeyCode::Down => Some(InputCommand::Scroll(1)),
        KeyCode::PageUp => Some(InputCommand::Scroll(-PAGE_SCROLL_ROWS)),
        KeyCode::PageDown => Some(InputCommand::Scroll(PAGE_SCROLL_ROWS)),
        _ => None,
    }
}

/// Map any terminal event to a command
pub fn map_event(event: &Event) -> Option<InputCommand> {
    match event {
        Event::Key(key) => map_key_event(*key),
        Event::Paste(text) => Some(InputCommand::Paste(text.clone())),
        _ => None,
    }
}
