//! Physical input identifiers.
//!
//! Responsibilities:
//! - Define `Key`, the identifier + display label pair stored in bindings.
//! - Canonicalize key strings through the key parser where possible.
//!
//! Does NOT handle:
//! - Converting terminal events into keys (see the TUI crate).
//! - Deciding which keys may be bound (see `BindingStore`).
//!
//! Invariants:
//! - Two keys are equal iff their ids are equal ignoring ASCII case.
//! - `Hash` is consistent with that equality.
//! - Serialized form is the bare id string.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::keybind::{ParsedKey, is_reserved, parse_key};

/// A physical input (e.g. a keyboard key) that can be bound to an action.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Key {
    id: String,
    label: String,
}

impl Key {
    /// Create a key from a key string.
    ///
    /// Parsable strings are stored in canonical form (`"ctrl + x"` becomes
    /// `"Ctrl+X"`); anything else is kept verbatim after trimming. The label
    /// is the resulting id.
    pub fn new(id: impl AsRef<str>) -> Self {
        let trimmed = id.as_ref().trim();
        let id = match parse_key(trimmed) {
            Ok(parsed) => parsed.to_string(),
            Err(_) => trimmed.to_string(),
        };
        Self {
            label: id.clone(),
            id,
        }
    }

    /// Create a key with an explicit display label.
    pub fn with_label(id: impl AsRef<str>, label: impl Into<String>) -> Self {
        let mut key = Self::new(id);
        key.label = label.into();
        key
    }

    /// The identifier used for comparison and persistence.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The human-readable label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns true if the identifier is empty.
    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }

    /// Structured form of the key, if the id is a parsable key string.
    pub fn parsed(&self) -> Option<ParsedKey> {
        parse_key(&self.id).ok()
    }

    /// Returns true if this key may never be bound.
    pub fn is_reserved(&self) -> bool {
        self.parsed().is_some_and(|parsed| is_reserved(&parsed))
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.id.eq_ignore_ascii_case(&other.id)
    }
}

impl Eq for Key {}

impl Hash for Key {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for byte in self.id.bytes() {
            state.write_u8(byte.to_ascii_lowercase());
        }
        state.write_usize(self.id.len());
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.id
    }
}
