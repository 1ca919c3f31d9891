//! Key string parsing and binding validation.
//!
//! Responsibilities:
//! - Parse human-readable key strings into structured representations.
//! - Produce the canonical spelling used as a `Key` identifier.
//! - Identify reserved keys and report keys shared by several actions.
//!
//! Does NOT handle:
//! - Integration with crossterm (that's in the TUI crate).
//! - Runtime key event matching.
//!
//! Invariants:
//! - Modifier names are case-insensitive; canonical output orders them Ctrl, Shift, Alt.
//! - Canonical letters are upper-case so `w` and `W` name the same physical key.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use crate::types::Key;

/// Errors that can occur when parsing or validating keybindings.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum KeybindError {
    /// Invalid key syntax
    #[error("Invalid key syntax: '{key}'. Expected format like 'w', 'Ctrl+x', 'Shift+Tab', 'F1'")]
    InvalidSyntax {
        /// The invalid key string
        key: String,
    },

    /// Unknown key name
    #[error("Unknown key name: '{name}'")]
    UnknownKey {
        /// The unknown key name
        name: String,
    },

    /// The same key is bound to two actions
    #[error("Conflicting keybindings: '{key}' is assigned to both {action1} and {action2}")]
    Conflict {
        /// The conflicting key
        key: String,
        /// First action using this key
        action1: String,
        /// Second action using this key
        action2: String,
    },

    /// Reserved keybinding
    #[error("Reserved keybinding: '{key}' cannot be bound")]
    ReservedKey {
        /// The reserved key
        key: String,
    },
}

/// A parsed key combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedKey {
    /// The key code name (for cross-crate compatibility, we use strings)
    pub code: KeyCodeName,
    /// Modifier flags
    pub modifiers: ModifierFlags,
}

/// Key code names that can be parsed from config strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyCodeName {
    /// A character key (e.g., 'a', '1', '?')
    Char(char),
    /// Function key F1-F20
    F(u8),
    /// Escape key
    Esc,
    /// Enter/Return key
    Enter,
    /// Space key
    Space,
    /// Tab key
    Tab,
    /// BackTab (Shift+Tab) key
    BackTab,
    /// Backspace key
    Backspace,
    /// Delete key
    Delete,
    /// Insert key
    Insert,
    /// Home key
    Home,
    /// End key
    End,
    /// Page Up key
    PageUp,
    /// Page Down key
    PageDown,
    /// Up arrow key
    Up,
    /// Down arrow key
    Down,
    /// Left arrow key
    Left,
    /// Right arrow key
    Right,
}

impl fmt::Display for KeyCodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{}", c.to_uppercase()),
            Self::F(n) => write!(f, "F{}", n),
            Self::Esc => write!(f, "Esc"),
            Self::Enter => write!(f, "Enter"),
            Self::Space => write!(f, "Space"),
            Self::Tab => write!(f, "Tab"),
            Self::BackTab => write!(f, "BackTab"),
            Self::Backspace => write!(f, "Backspace"),
            Self::Delete => write!(f, "Delete"),
            Self::Insert => write!(f, "Insert"),
            Self::Home => write!(f, "Home"),
            Self::End => write!(f, "End"),
            Self::PageUp => write!(f, "PageUp"),
            Self::PageDown => write!(f, "PageDown"),
            Self::Up => write!(f, "Up"),
            Self::Down => write!(f, "Down"),
            Self::Left => write!(f, "Left"),
            Self::Right => write!(f, "Right"),
        }
    }
}

/// Modifier flags for key combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct ModifierFlags {
    /// Control key pressed
    pub ctrl: bool,
    /// Shift key pressed
    pub shift: bool,
    /// Alt/Option key pressed
    pub alt: bool,
}

impl ModifierFlags {
    /// Returns true if no modifier is set.
    pub fn is_empty(&self) -> bool {
        !self.ctrl && !self.shift && !self.alt
    }
}

impl fmt::Display for ModifierFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        if self.alt {
            parts.push("Alt");
        }
        if parts.is_empty() {
            write!(f, "None")
        } else {
            write!(f, "{}", parts.join("+"))
        }
    }
}

/// Canonical spelling, e.g. `Ctrl+Shift+X`, `Space`, `F5`.
impl fmt::Display for ParsedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.modifiers.is_empty() {
            write!(f, "{}+", self.modifiers)?;
        }
        match self.code {
            KeyCodeName::Char(' ') => write!(f, "Space"),
            ref code => write!(f, "{}", code),
        }
    }
}

/// Parse a key string like "Ctrl+x", "F1", "Shift+Tab" into structured form.
///
/// A literal plus sign is written as `+` on its own or as the last part
/// (`Ctrl++`).
///
/// # Examples
///
/// ```
/// use rebind_config::keybind::{parse_key, KeyCodeName};
///
/// let key = parse_key("Ctrl+x").unwrap();
/// assert!(matches!(key.code, KeyCodeName::Char('x')));
/// assert!(key.modifiers.ctrl);
/// assert_eq!(key.to_string(), "Ctrl+X");
///
/// let key = parse_key("F1").unwrap();
/// assert!(matches!(key.code, KeyCodeName::F(1)));
/// ```
pub fn parse_key(key_str: &str) -> Result<ParsedKey, KeybindError> {
    let key_str = key_str.trim();

    if key_str.is_empty() {
        return Err(KeybindError::InvalidSyntax {
            key: key_str.to_string(),
        });
    }

    // Split off the key name; everything before it must be modifiers
    let (modifier_part, key_name) = if key_str == "+" {
        ("", "+")
    } else if let Some(prefix) = key_str.strip_suffix("++") {
        (prefix, "+")
    } else {
        match key_str.rsplit_once('+') {
            Some((prefix, name)) => (prefix, name.trim()),
            None => ("", key_str),
        }
    };

    let mut modifiers = ModifierFlags::default();
    if !modifier_part.trim().is_empty() {
        for part in modifier_part.split('+').map(|s| s.trim()) {
            match part.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => modifiers.ctrl = true,
                "shift" => modifiers.shift = true,
                "alt" => modifiers.alt = true,
                _ => {
                    return Err(KeybindError::InvalidSyntax {
                        key: key_str.to_string(),
                    });
                }
            }
        }
    }

    if key_name.is_empty()
        || matches!(
            key_name.to_ascii_lowercase().as_str(),
            "ctrl" | "control" | "shift" | "alt"
        )
    {
        return Err(KeybindError::InvalidSyntax {
            key: key_str.to_string(),
        });
    }

    let code = parse_key_code(key_name)?;

    // Shift+Tab is BackTab; BackTab already implies Shift
    let code = if matches!(code, KeyCodeName::Tab) && modifiers.shift {
        KeyCodeName::BackTab
    } else {
        code
    };
    if matches!(code, KeyCodeName::BackTab) {
        modifiers.shift = false;
    }

    Ok(ParsedKey { code, modifiers })
}

/// Parse a key code name (without modifiers).
fn parse_key_code(name: &str) -> Result<KeyCodeName, KeybindError> {
    let name_lower = name.to_ascii_lowercase();

    // Check for special keys
    match name_lower.as_str() {
        "esc" | "escape" => return Ok(KeyCodeName::Esc),
        "enter" | "return" => return Ok(KeyCodeName::Enter),
        "space" => return Ok(KeyCodeName::Space),
        "tab" => return Ok(KeyCodeName::Tab),
        "backtab" => return Ok(KeyCodeName::BackTab),
        "backspace" => return Ok(KeyCodeName::Backspace),
        "delete" | "del" => return Ok(KeyCodeName::Delete),
        "insert" | "ins" => return Ok(KeyCodeName::Insert),
        "home" => return Ok(KeyCodeName::Home),
        "end" => return Ok(KeyCodeName::End),
        "pageup" | "page_up" | "pgup" => return Ok(KeyCodeName::PageUp),
        "pagedown" | "page_down" | "pgdn" => return Ok(KeyCodeName::PageDown),
        "up" => return Ok(KeyCodeName::Up),
        "down" => return Ok(KeyCodeName::Down),
        "left" => return Ok(KeyCodeName::Left),
        "right" => return Ok(KeyCodeName::Right),
        _ => {}
    }

    // Check for function keys (F1-F20)
    if let Some(num_str) = name_lower.strip_prefix('f')
        && let Ok(num) = num_str.parse::<u8>()
        && (1..=20).contains(&num)
    {
        return Ok(KeyCodeName::F(num));
    }

    // Check for single character
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(if c == ' ' {
            KeyCodeName::Space
        } else {
            KeyCodeName::Char(c)
        });
    }

    // Unknown key
    Err(KeybindError::UnknownKey {
        name: name.to_string(),
    })
}

/// Keys that can never be bound to an action.
///
/// `Esc` is the rebind cancel signal; the control chords belong to the terminal.
pub const RESERVED_KEYS: &[&str] = &["Esc", "Ctrl+C", "Ctrl+Z"];

/// Returns true if the parsed key is reserved.
pub fn is_reserved(key: &ParsedKey) -> bool {
    let canonical = key.to_string();
    RESERVED_KEYS
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(&canonical))
}

/// Report keys that are bound to more than one action.
///
/// Bindings are visited in the given order; each conflict names the first
/// action that holds the key and a later one that shares it. Cross-action
/// sharing is permitted by the store, so this is purely informational.
///
/// # Examples
///
/// ```
/// use rebind_config::keybind::find_conflicts;
/// use rebind_config::Key;
///
/// let jump = vec![Key::new("Space")];
/// let fire = vec![Key::new("space"), Key::new("F")];
/// let conflicts = find_conflicts([("jump", jump.as_slice()), ("fire", fire.as_slice())]);
/// assert_eq!(conflicts.len(), 1);
/// ```
pub fn find_conflicts<'a, I>(bindings: I) -> Vec<KeybindError>
where
    I: IntoIterator<Item = (&'a str, &'a [Key])>,
{
    let mut key_to_action: HashMap<&'a Key, &'a str> = HashMap::new();
    let mut conflicts = Vec::new();

    for (action, keys) in bindings {
        for key in keys {
            match key_to_action.get(key) {
                Some(existing) if *existing != action => {
                    conflicts.push(KeybindError::Conflict {
                        key: key.id().to_string(),
                        action1: existing.to_string(),
                        action2: action.to_string(),
                    });
                }
                Some(_) => {}
                None => {
                    key_to_action.insert(key, action);
                }
            }
        }
    }

    conflicts
}
