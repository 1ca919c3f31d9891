//! The rebind state machine.
//!
//! `Idle` moves to `AwaitingInput(action, slot)` through `begin_replace` or
//! `begin_append`; the next `InputSignal` resolves it back to `Idle`:
//!
//! | slot    | Cancel  | Delete            | Key(k)             |
//! |---------|---------|-------------------|--------------------|
//! | `i`     | no-op   | remove key `i`    | replace key `i`    |
//! | append  | no-op   | ignored, stays    | append `k`         |
//!
//! A slot that no longer exists when the signal arrives resolves to `Idle`
//! without mutation, as does replacing a slot with a key the action already
//! holds at another slot. Replacement therefore never changes the key count.

use rebind_config::{ConfigStore, Key};

use super::{BindingController, InputSignal, RebindState, Slot};

impl<S: ConfigStore> BindingController<S> {
    /// Await a key that replaces `action`'s key at `index`.
    ///
    /// An unknown action or out-of-range index leaves the controller idle.
    pub fn begin_replace(&mut self, action: &str, index: usize) {
        if !self.ensure_active("begin_replace") {
            return;
        }
        self.cancel_pending("begin_replace");

        if !self.knows_action(action) {
            tracing::trace!(action = %action, "Ignoring rebind of unknown action");
            return;
        }
        let count = self.store.keys(action).len();
        if index >= count {
            tracing::trace!(action = %action, index, count, "Ignoring rebind of missing slot");
            return;
        }

        self.set_rebind(RebindState::AwaitingInput {
            action: action.to_string(),
            slot: Slot::Index(index),
        });
    }

    /// Await a key to add to `action`.
    pub fn begin_append(&mut self, action: &str) {
        if !self.ensure_active("begin_append") {
            return;
        }
        self.cancel_pending("begin_append");

        if !self.knows_action(action) {
            tracing::trace!(action = %action, "Ignoring rebind of unknown action");
            return;
        }

        self.set_rebind(RebindState::AwaitingInput {
            action: action.to_string(),
            slot: Slot::Append,
        });
    }

    /// Resolve a pending rebind with `signal`.
    pub fn handle_signal(&mut self, signal: InputSignal) {
        if !self.ensure_active("handle_signal") {
            return;
        }
        let RebindState::AwaitingInput { action, slot } = self.rebind.clone() else {
            tracing::trace!(signal = ?signal, "Ignoring input signal while idle");
            return;
        };

        match (signal, slot) {
            (InputSignal::Cancel, _) => {
                tracing::debug!(action = %action, slot = %slot, "Rebind cancelled");
                self.set_rebind(RebindState::Idle);
            }
            (InputSignal::Delete, Slot::Append) => {
                tracing::trace!(action = %action, "Ignoring delete while appending");
            }
            (InputSignal::Delete, Slot::Index(index)) => {
                self.set_rebind(RebindState::Idle);
                let mut keys = self.store.keys(&action);
                if index < keys.len() {
                    keys.remove(index);
                    self.store.set_keys(&action, keys);
                } else {
                    tracing::debug!(action = %action, index, "Slot vanished before delete");
                }
            }
            (InputSignal::Key(key), _) if !is_capturable(&key) => {
                tracing::warn!(action = %action, key = %key.id(), "Ignoring unbindable key");
            }
            (InputSignal::Key(key), Slot::Append) => {
                self.set_rebind(RebindState::Idle);
                self.store.add_key(&action, key);
            }
            (InputSignal::Key(key), Slot::Index(index)) => {
                self.set_rebind(RebindState::Idle);
                let mut keys = self.store.keys(&action);
                if index >= keys.len() {
                    tracing::debug!(action = %action, index, "Slot vanished before replace");
                    return;
                }
                if keys.iter().enumerate().any(|(i, k)| i != index && *k == key) {
                    tracing::debug!(
                        action = %action,
                        index,
                        key = %key.id(),
                        "Key already bound at another slot, replace skipped"
                    );
                    return;
                }
                keys[index] = key;
                self.store.set_keys(&action, keys);
            }
        }
    }

    /// Implicitly cancel a pending rebind before starting another.
    fn cancel_pending(&mut self, operation: &'static str) {
        if let Some((action, slot)) = self.rebind.pending() {
            tracing::debug!(
                operation,
                action = %action,
                slot = %slot,
                "Pending rebind superseded"
            );
            self.set_rebind(RebindState::Idle);
        }
    }

    fn knows_action(&self, action: &str) -> bool {
        self.actions.iter().any(|a| a.id() == action)
    }
}

fn is_capturable(key: &Key) -> bool {
    !key.is_empty() && !key.is_reserved()
}
