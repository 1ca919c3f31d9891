//! Bindable actions and the catalog that fixes their set and order.
//!
//! Responsibilities:
//! - Define `Action`, an identifier + display label pair.
//! - Define `ActionCatalog`, the ordered set of actions with their default keys.
//!
//! Does NOT handle:
//! - Current (user-modified) bindings (see `BindingStore`).
//!
//! Invariants:
//! - Action ids are unique within a catalog; a repeated id is ignored.
//! - Catalog order is display order and never changes after construction.

use std::fmt;

use crate::types::Key;

/// A named, bindable command.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Action {
    id: String,
    label: String,
}

impl Action {
    /// Create an action from its identifier and display label.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// The stable identifier (used as the persistence key).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The human-readable label.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[derive(Debug, Clone)]
struct CatalogEntry {
    action: Action,
    defaults: Vec<Key>,
}

/// The fixed, ordered set of actions together with their factory keys.
#[derive(Debug, Clone, Default)]
pub struct ActionCatalog {
    entries: Vec<CatalogEntry>,
}

impl ActionCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an action with its default keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebind_config::ActionCatalog;
    ///
    /// let catalog = ActionCatalog::new()
    ///     .with("move_forward", "Move Forward", &["W"])
    ///     .with("jump", "Jump", &["Space"]);
    /// assert_eq!(catalog.len(), 2);
    /// assert_eq!(catalog.position("jump"), Some(1));
    /// ```
    pub fn with(mut self, id: &str, label: &str, default_keys: &[&str]) -> Self {
        if self.contains(id) {
            tracing::warn!(action = %id, "Duplicate action id in catalog, ignoring");
            return self;
        }
        self.entries.push(CatalogEntry {
            action: Action::new(id, label),
            defaults: default_keys.iter().map(Key::new).collect(),
        });
        self
    }

    /// Actions in display order.
    pub fn actions(&self) -> Vec<Action> {
        self.entries.iter().map(|e| e.action.clone()).collect()
    }

    /// Action at a display position.
    pub fn get(&self, index: usize) -> Option<&Action> {
        self.entries.get(index).map(|e| &e.action)
    }

    /// Display position of an action id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.action.id == id)
    }

    /// Returns true if the catalog contains the action id.
    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Factory keys for the action at `index`.
    pub fn defaults_at(&self, index: usize) -> &[Key] {
        self.entries
            .get(index)
            .map(|e| e.defaults.as_slice())
            .unwrap_or(&[])
    }

    /// Number of actions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog has no actions.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
