//! Conversions between crossterm key events and configured keys.
//!
//! Responsibilities:
//! - Turn a pressed `KeyEvent` into the canonical `Key` it would bind.
//! - Turn a configured `Key` back into the `KeyEvent` that triggers it.
//!
//! Does NOT handle:
//! - Parsing key strings (handled by `rebind_config::keybind`).
//! - Deciding what a key does (see `keymap` and `world`).
//!
//! Invariants:
//! - `key_from_event(&key_to_event(k)?) == Some(k)` for every bindable key.
//! - Shift on a non-alphabetic character is folded into the character itself,
//!   since terminals report `!` rather than `Shift+1`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rebind_config::Key;
use rebind_config::keybind::{KeyCodeName, ModifierFlags, ParsedKey};

/// The configured key a pressed event corresponds to.
///
/// Returns `None` for keys the configuration cannot express (media keys,
/// lone modifiers, keypad begin, ...).
pub fn key_from_event(event: &KeyEvent) -> Option<Key> {
    let code = match event.code {
        KeyCode::Char(' ') => KeyCodeName::Space,
        KeyCode::Char(c) => KeyCodeName::Char(c),
        KeyCode::F(n) => KeyCodeName::F(n),
        KeyCode::Esc => KeyCodeName::Esc,
        KeyCode::Enter => KeyCodeName::Enter,
        KeyCode::Tab => KeyCodeName::Tab,
        KeyCode::BackTab => KeyCodeName::BackTab,
        KeyCode::Backspace => KeyCodeName::Backspace,
        KeyCode::Delete => KeyCodeName::Delete,
        KeyCode::Insert => KeyCodeName::Insert,
        KeyCode::Home => KeyCodeName::Home,
        KeyCode::End => KeyCodeName::End,
        KeyCode::PageUp => KeyCodeName::PageUp,
        KeyCode::PageDown => KeyCodeName::PageDown,
        KeyCode::Up => KeyCodeName::Up,
        KeyCode::Down => KeyCodeName::Down,
        KeyCode::Left => KeyCodeName::Left,
        KeyCode::Right => KeyCodeName::Right,
        _ => return None,
    };

    let shift_meaningful = match code {
        KeyCodeName::Char(c) => c.is_alphabetic(),
        KeyCodeName::BackTab => false,
        _ => true,
    };

    let modifiers = ModifierFlags {
        ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
        shift: shift_meaningful && event.modifiers.contains(KeyModifiers::SHIFT),
        alt: event.modifiers.contains(KeyModifiers::ALT),
    };

    Some(Key::new(ParsedKey { code, modifiers }.to_string()))
}

/// The event that triggers a configured key, if the key is parsable.
pub fn key_to_event(key: &Key) -> Option<KeyEvent> {
    key.parsed().map(|parsed| parsed_key_to_crossterm(&parsed))
}

/// Converts a parsed key from config into a crossterm KeyEvent.
pub fn parsed_key_to_crossterm(parsed: &ParsedKey) -> KeyEvent {
    let code = match &parsed.code {
        KeyCodeName::Char(c) => KeyCode::Char(*c),
        KeyCodeName::F(n) => KeyCode::F(*n),
        KeyCodeName::Esc => KeyCode::Esc,
        KeyCodeName::Enter => KeyCode::Enter,
        KeyCodeName::Space => KeyCode::Char(' '),
        KeyCodeName::Tab => KeyCode::Tab,
        KeyCodeName::BackTab => KeyCode::BackTab,
        KeyCodeName::Backspace => KeyCode::Backspace,
        KeyCodeName::Delete => KeyCode::Delete,
        KeyCodeName::Insert => KeyCode::Insert,
        KeyCodeName::Home => KeyCode::Home,
        KeyCodeName::End => KeyCode::End,
        KeyCodeName::PageUp => KeyCode::PageUp,
        KeyCodeName::PageDown => KeyCode::PageDown,
        KeyCodeName::Up => KeyCode::Up,
        KeyCodeName::Down => KeyCode::Down,
        KeyCodeName::Left => KeyCode::Left,
        KeyCodeName::Right => KeyCode::Right,
    };

    KeyEvent::new(code, modifier_flags_to_crossterm(&parsed.modifiers))
}

/// Converts ModifierFlags to crossterm KeyModifiers.
fn modifier_flags_to_crossterm(flags: &ModifierFlags) -> KeyModifiers {
    let mut modifiers = KeyModifiers::NONE;
    if flags.ctrl {
        modifiers |= KeyModifiers::CONTROL;
    }
    if flags.shift {
        modifiers |= KeyModifiers::SHIFT;
    }
    if flags.alt {
        modifiers |= KeyModifiers::ALT;
    }
    modifiers
}
