//! The controls configuration store.
//!
//! Responsibilities:
//! - Define the `ConfigStore` contract consumed by controllers and views.
//! - Provide `BindingStore`, the catalog-backed implementation with optional
//!   file persistence.
//!
//! Does NOT handle:
//! - Transient UI state such as selection or pending rebinds.
//! - Parsing key strings (see `keybind`).
//!
//! Invariants:
//! - All operations are total: unknown actions and no-op mutations are
//!   silently ignored rather than reported as errors.
//! - A mutation that changes state notifies listeners exactly once; a
//!   mutation that changes nothing does not notify.
//! - A binding's key list never contains duplicate keys.
//! - Sensitivity is always within the store's range.

mod memory;

pub use memory::BindingStore;

use crate::keybind::{KeybindError, find_conflicts};
use crate::listeners::{Listener, ListenerId};
use crate::types::{Action, Key, SensitivityRange};

/// Shared access to the action bindings and sensitivity.
///
/// Methods take `&self` so that listeners can read the store while being
/// notified. Mutators return `true` when state actually changed.
pub trait ConfigStore {
    /// All actions in stable display order.
    fn actions(&self) -> Vec<Action>;

    /// Keys bound to `action`, in display order. Empty for unknown actions.
    fn keys(&self, action: &str) -> Vec<Key>;

    /// Replace the full key list of `action`.
    fn set_keys(&self, action: &str, keys: Vec<Key>) -> bool;

    /// Append `key` to `action` unless it is already present.
    fn add_key(&self, action: &str, key: Key) -> bool;

    /// Remove the first occurrence of `key` from `action`.
    fn remove_key(&self, action: &str, key: &Key) -> bool;

    /// Remove every key bound to `action`.
    fn clear_keys(&self, action: &str) -> bool;

    fn sensitivity(&self) -> f64;

    fn sensitivity_range(&self) -> SensitivityRange;

    /// Set the sensitivity, snapped to the step grid and clamped to the range.
    fn set_sensitivity(&self, value: f64) -> bool;

    /// Move the sensitivity one step in the direction of `direction`'s sign.
    fn adjust_sensitivity(&self, direction: i32) -> bool;

    /// Restore every binding and the sensitivity to factory values.
    ///
    /// Always notifies exactly once, even when already at defaults.
    fn reset_to_defaults(&self);

    fn add_listener(&self, listener: Listener) -> ListenerId;

    fn remove_listener(&self, id: ListenerId) -> bool;

    /// Keys currently shared between actions, in display order.
    fn conflicts(&self) -> Vec<KeybindError> {
        let bindings: Vec<(Action, Vec<Key>)> = self
            .actions()
            .into_iter()
            .map(|action| {
                let keys = self.keys(action.id());
                (action, keys)
            })
            .collect();

        find_conflicts(
            bindings
                .iter()
                .map(|(action, keys)| (action.id(), keys.as_slice())),
        )
    }
}
