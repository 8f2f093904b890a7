//! Keyboard input handling

use game_core::Key;
use web_sys::KeyboardEvent;

/// Game key for a DOM key event
pub fn key_from_event(event: &KeyboardEvent) -> Key {
    Key::from_key_name(&event.key())
}

/// Arrow keys scroll the page unless the event is swallowed
pub fn should_prevent_default(key: Key) -> bool {
    matches!(key, Key::ArrowUp | Key::ArrowDown)
}
