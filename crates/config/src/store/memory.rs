//! Catalog-backed `ConfigStore` implementation.
//!
//! Responsibilities:
//! - Hold the live bindings and sensitivity behind interior mutability.
//! - Sanitize loaded or caller-supplied key lists.
//! - Persist through an attached `ConfigManager` after each effective change.
//!
//! Invariants:
//! - The state borrow is always released before saving or notifying, so
//!   listeners may freely read or mutate the store.
//! - Save failures are logged and never surfaced; in-memory state stays
//!   authoritative.

use std::cell::RefCell;
use std::collections::HashSet;
use std::path::Path;

use super::ConfigStore;
use crate::constants::PERSISTED_VERSION;
use crate::defaults::factory_sensitivity;
use crate::listeners::{Listener, ListenerId, Listeners};
use crate::persistence::{ConfigManager, PersistedControls};
use crate::types::{Action, ActionCatalog, Key, SensitivityRange};

/// Live configuration state, index-aligned with the catalog.
#[derive(Debug, Clone, PartialEq)]
struct StoreState {
    bindings: Vec<Vec<Key>>,
    sensitivity: f64,
}

/// The standard `ConfigStore`: a fixed action catalog, its current bindings,
/// and an analog sensitivity value.
#[derive(Debug)]
pub struct BindingStore {
    catalog: ActionCatalog,
    range: SensitivityRange,
    default_sensitivity: f64,
    state: RefCell<StoreState>,
    listeners: Listeners,
    manager: Option<ConfigManager>,
}

impl BindingStore {
    /// A store at factory defaults with no persistence.
    pub fn in_memory(catalog: ActionCatalog) -> Self {
        let range = SensitivityRange::default();
        let default_sensitivity = range.normalize(factory_sensitivity());
        let state = StoreState {
            bindings: default_bindings(&catalog),
            sensitivity: default_sensitivity,
        };
        Self {
            catalog,
            range,
            default_sensitivity,
            state: RefCell::new(state),
            listeners: Listeners::new(),
            manager: None,
        }
    }

    /// A store loaded from the manager's file, saving back to it on change.
    ///
    /// A missing or corrupt file yields factory defaults.
    pub fn open(catalog: ActionCatalog, manager: ConfigManager) -> Self {
        Self::in_memory(catalog).restore(manager)
    }

    /// Replace the sensitivity range and factory value.
    ///
    /// The current value is reset to the new factory value.
    pub fn with_sensitivity_range(mut self, range: SensitivityRange, default: f64) -> Self {
        self.range = range;
        self.default_sensitivity = range.normalize(default);
        self.state.get_mut().sensitivity = self.default_sensitivity;
        self
    }

    /// Attach a manager for saving without reading its file.
    pub fn attach(mut self, manager: ConfigManager) -> Self {
        self.manager = Some(manager);
        self
    }

    /// Load the manager's file into this store and attach the manager.
    pub fn restore(mut self, manager: ConfigManager) -> Self {
        let persisted = manager.load();
        self.apply_persisted(persisted);
        tracing::debug!(
            path = %manager.config_path().display(),
            "Restored controls from disk"
        );
        self.manager = Some(manager);
        self
    }

    /// Replace state with sanitized persisted values. Does not notify.
    pub fn apply_persisted(&mut self, persisted: PersistedControls) {
        if persisted.version > PERSISTED_VERSION {
            tracing::warn!(
                version = persisted.version,
                supported = PERSISTED_VERSION,
                "Controls file is from a newer version; reading known fields only"
            );
        }

        for id in persisted.bindings.keys() {
            if !self.catalog.contains(id) {
                tracing::warn!(action = %id, "Dropping bindings for unknown action");
            }
        }

        let bindings = self
            .catalog
            .actions()
            .iter()
            .enumerate()
            .map(|(index, action)| match persisted.bindings.get(action.id()) {
                Some(keys) => sanitize_keys(action.id(), keys.iter().cloned()),
                None => self.catalog.defaults_at(index).to_vec(),
            })
            .collect();

        let sensitivity = if persisted.sensitivity.is_finite() {
            self.range.normalize(persisted.sensitivity)
        } else {
            tracing::warn!("Persisted sensitivity is not a number, using default");
            self.default_sensitivity
        };

        *self.state.get_mut() = StoreState {
            bindings,
            sensitivity,
        };
    }

    pub fn catalog(&self) -> &ActionCatalog {
        &self.catalog
    }

    /// Factory keys for `action`. Empty for unknown actions.
    pub fn default_keys(&self, action: &str) -> Vec<Key> {
        self.catalog
            .position(action)
            .map(|index| self.catalog.defaults_at(index).to_vec())
            .unwrap_or_default()
    }

    pub fn default_sensitivity(&self) -> f64 {
        self.default_sensitivity
    }

    /// Path the store saves to, if persistence is attached.
    pub fn config_path(&self) -> Option<&Path> {
        self.manager.as_ref().map(ConfigManager::config_path)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Full current state in its on-disk form.
    pub fn snapshot(&self) -> PersistedControls {
        let state = self.state.borrow();
        let bindings = self
            .catalog
            .actions()
            .into_iter()
            .zip(state.bindings.iter())
            .map(|(action, keys)| (action.id().to_string(), keys.clone()))
            .collect();

        PersistedControls {
            version: PERSISTED_VERSION,
            bindings,
            sensitivity: state.sensitivity,
        }
    }

    /// Write the current state to disk if a manager is attached.
    fn persist(&self) {
        let Some(manager) = &self.manager else {
            return;
        };
        if let Err(e) = manager.save(&self.snapshot()) {
            tracing::warn!(
                path = %manager.config_path().display(),
                error = %e,
                "Failed to save controls"
            );
        }
    }

    /// Apply `f` to the state; on change, persist then notify once.
    fn mutate(&self, f: impl FnOnce(&mut StoreState) -> bool) -> bool {
        let changed = {
            let mut state = self.state.borrow_mut();
            f(&mut state)
        };
        if changed {
            self.persist();
            self.listeners.notify();
        }
        changed
    }

    /// Apply `f` to the bindings of `action`, ignoring unknown actions.
    fn mutate_keys(&self, action: &str, f: impl FnOnce(&mut Vec<Key>) -> bool) -> bool {
        let Some(index) = self.catalog.position(action) else {
            tracing::trace!(action = %action, "Ignoring mutation of unknown action");
            return false;
        };
        self.mutate(|state| f(&mut state.bindings[index]))
    }
}

impl ConfigStore for BindingStore {
    fn actions(&self) -> Vec<Action> {
        self.catalog.actions()
    }

    fn keys(&self, action: &str) -> Vec<Key> {
        self.catalog
            .position(action)
            .and_then(|index| self.state.borrow().bindings.get(index).cloned())
            .unwrap_or_default()
    }

    fn set_keys(&self, action: &str, keys: Vec<Key>) -> bool {
        let sanitized = sanitize_keys(action, keys);
        let changed = self.mutate_keys(action, |current| {
            if *current == sanitized {
                return false;
            }
            *current = sanitized;
            true
        });
        if changed {
            tracing::debug!(action = %action, "Replaced key list");
        }
        changed
    }

    fn add_key(&self, action: &str, key: Key) -> bool {
        if !is_bindable(action, &key) {
            return false;
        }
        let id = key.id().to_string();
        let changed = self.mutate_keys(action, |current| {
            if current.contains(&key) {
                return false;
            }
            current.push(key);
            true
        });
        if changed {
            tracing::debug!(action = %action, key = %id, "Added key");
        }
        changed
    }

    fn remove_key(&self, action: &str, key: &Key) -> bool {
        let changed = self.mutate_keys(action, |current| {
            match current.iter().position(|k| k == key) {
                Some(position) => {
                    current.remove(position);
                    true
                }
                None => false,
            }
        });
        if changed {
            tracing::debug!(action = %action, key = %key.id(), "Removed key");
        }
        changed
    }

    fn clear_keys(&self, action: &str) -> bool {
        let changed = self.mutate_keys(action, |current| {
            if current.is_empty() {
                return false;
            }
            current.clear();
            true
        });
        if changed {
            tracing::debug!(action = %action, "Cleared keys");
        }
        changed
    }

    fn sensitivity(&self) -> f64 {
        self.state.borrow().sensitivity
    }

    fn sensitivity_range(&self) -> SensitivityRange {
        self.range
    }

    fn set_sensitivity(&self, value: f64) -> bool {
        if !value.is_finite() {
            tracing::warn!(value, "Ignoring non-finite sensitivity");
            return false;
        }
        let target = self.range.normalize(value);
        self.mutate(|state| {
            if state.sensitivity == target {
                return false;
            }
            state.sensitivity = target;
            true
        })
    }

    fn adjust_sensitivity(&self, direction: i32) -> bool {
        if direction == 0 {
            return false;
        }
        let range = self.range;
        self.mutate(|state| {
            let target = range.adjusted(state.sensitivity, direction);
            if state.sensitivity == target {
                return false;
            }
            state.sensitivity = target;
            true
        })
    }

    fn reset_to_defaults(&self) {
        {
            let mut state = self.state.borrow_mut();
            state.bindings = default_bindings(&self.catalog);
            state.sensitivity = self.default_sensitivity;
        }
        tracing::info!("Controls reset to factory defaults");
        self.persist();
        self.listeners.notify();
    }

    fn add_listener(&self, listener: Listener) -> ListenerId {
        self.listeners.subscribe_rc(listener)
    }

    fn remove_listener(&self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }
}

fn default_bindings(catalog: &ActionCatalog) -> Vec<Vec<Key>> {
    (0..catalog.len())
        .map(|index| catalog.defaults_at(index).to_vec())
        .collect()
}

/// Returns true if `key` may be bound at all.
fn is_bindable(action: &str, key: &Key) -> bool {
    if key.is_empty() {
        tracing::trace!(action = %action, "Ignoring empty key");
        return false;
    }
    if key.is_reserved() {
        tracing::warn!(action = %action, key = %key.id(), "Refusing to bind reserved key");
        return false;
    }
    true
}

/// Drop unbindable keys and duplicates, keeping the first occurrence.
fn sanitize_keys(action: &str, keys: impl IntoIterator<Item = Key>) -> Vec<Key> {
    let mut seen = HashSet::new();
    keys.into_iter()
        .filter(|key| is_bindable(action, key))
        .filter(|key| seen.insert(key.clone()))
        .collect()
}
