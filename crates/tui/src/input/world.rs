//! Game-world key resolution.
//!
//! Responsibilities:
//! - Map pressed keys to action ids using the store's current bindings.
//!
//! Does NOT handle:
//! - Menu keys; the event loop only consults this resolver while the
//!   controls menu does not hold the input channel.
//!
//! Invariants:
//! - When a key is bound to several actions, the first action in display
//!   order wins.
//! - The table is a snapshot; rebuild it whenever the store notifies.

use std::collections::HashMap;

use crossterm::event::KeyEvent;
use rebind_config::{ConfigStore, Key};

use super::keys::key_from_event;

/// Lookup table from bound key to action id.
#[derive(Debug, Clone, Default)]
pub struct WorldKeymap {
    bindings: HashMap<Key, String>,
}

impl WorldKeymap {
    pub fn from_store<S: ConfigStore + ?Sized>(store: &S) -> Self {
        let mut bindings = HashMap::new();
        for action in store.actions() {
            for key in store.keys(action.id()) {
                bindings
                    .entry(key)
                    .or_insert_with(|| action.id().to_string());
            }
        }
        tracing::debug!(keys = bindings.len(), "Rebuilt world keymap");
        Self { bindings }
    }

    /// The action bound to the pressed key, if any.
    pub fn resolve(&self, event: &KeyEvent) -> Option<&str> {
        let key = key_from_event(event)?;
        self.bindings.get(&key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
