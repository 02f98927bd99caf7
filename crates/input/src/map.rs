//! Key mapping from terminal events to accepted input keys.

use crate::types::InputKey;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};

/// Map a key press to an [`InputKey`].
///
/// Only the four arrows and Escape are recognised. Releases and auto-repeats are dropped so
/// that terminals reporting key-up events do not enqueue every key twice.
pub fn map_key_event(key: KeyEvent) -> Option<InputKey> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Esc => Some(InputKey::Quit),
        _ => None,
    }
}

/// Filter any terminal event down to an accepted key.
pub fn accept_event(event: &Event) -> Option<InputKey> {
    match event {
        Event::Key(key) => map_key_event(*key),
        _ => None,
    }
}
