//! Read-only projection of the menu for rendering.
//!
//! Responsibilities:
//! - Capture everything the view needs from the controller and store in one
//!   consistent pass.
//!
//! Does NOT handle:
//! - Drawing (see `render`).
//!
//! Invariants:
//! - Capturing never mutates controller or store.
//! - Keys and sensitivity are read from the store at capture time, so a
//!   snapshot taken after any notification reflects the source of truth.

use rebind_config::{ConfigStore, KeybindError, SensitivityRange};

use crate::controller::{BindingController, Slot, Tab};
use crate::input::keymap::footer_hints;

/// One action row on the controls tab.
#[derive(Debug, Clone, PartialEq)]
pub struct BindingRow {
    pub action_id: String,
    pub label: String,
    /// Key labels in display order.
    pub keys: Vec<String>,
    pub selected: bool,
    /// Slot awaiting input on this row, if any.
    pub pending_slot: Option<Slot>,
    /// Whether one of this row's keys is shared with another action.
    pub conflicted: bool,
}

/// Everything the menu view draws.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuSnapshot {
    pub active: bool,
    pub tab: Tab,
    pub rows: Vec<BindingRow>,
    pub selected_index: usize,
    pub sensitivity: f64,
    pub range: SensitivityRange,
    /// Instructions shown while a rebind awaits input.
    pub prompt: Option<String>,
    /// Human-readable shared-key warnings.
    pub conflicts: Vec<String>,
    /// `(keys, description)` pairs for the footer.
    pub hints: Vec<(&'static str, &'static str)>,
}

impl MenuSnapshot {
    pub fn capture<S: ConfigStore>(controller: &BindingController<S>) -> Self {
        let store = controller.store();
        let pending = controller.rebind_state().pending();
        let conflict_errors = store.conflicts();

        let label_of = |id: &str| {
            controller
                .actions()
                .iter()
                .find(|a| a.id() == id)
                .map(|a| a.label().to_string())
                .unwrap_or_else(|| id.to_string())
        };

        let rows = controller
            .actions()
            .iter()
            .enumerate()
            .map(|(index, action)| BindingRow {
                action_id: action.id().to_string(),
                label: action.label().to_string(),
                keys: store
                    .keys(action.id())
                    .iter()
                    .map(|k| k.label().to_string())
                    .collect(),
                selected: index == controller.selected_index(),
                pending_slot: pending
                    .filter(|(id, _)| *id == action.id())
                    .map(|(_, slot)| slot),
                conflicted: conflict_errors.iter().any(|e| names_action(e, action.id())),
            })
            .collect::<Vec<_>>();

        let prompt = pending.map(|(id, slot)| {
            let label = label_of(id);
            match slot {
                Slot::Append => format!("Press a key to add to {label}  (Esc cancels)"),
                Slot::Index(index) => {
                    let current = store
                        .keys(id)
                        .get(index)
                        .map(|k| k.label().to_string())
                        .unwrap_or_else(|| "?".to_string());
                    format!("Press a key to replace {current} on {label}  (Esc cancels, Del removes)")
                }
            }
        });

        let conflicts = conflict_errors
            .iter()
            .filter_map(|e| match e {
                KeybindError::Conflict {
                    key,
                    action1,
                    action2,
                } => Some(format!(
                    "{key} is shared by {} and {}",
                    label_of(action1),
                    label_of(action2)
                )),
                _ => None,
            })
            .collect();

        let hints = match pending {
            Some((_, Slot::Append)) => vec![("Esc", "Cancel")],
            Some((_, Slot::Index(_))) => vec![("Esc", "Cancel"), ("Del", "Remove")],
            None => footer_hints(controller.current_tab()),
        };

        Self {
            active: controller.is_active(),
            tab: controller.current_tab(),
            rows,
            selected_index: controller.selected_index(),
            sensitivity: store.sensitivity(),
            range: store.sensitivity_range(),
            prompt,
            conflicts,
            hints,
        }
    }

    pub fn is_rebinding(&self) -> bool {
        self.prompt.is_some()
    }

    pub fn on_sensitivity_tab(&self) -> bool {
        self.tab == Tab::Sensitivity
    }
}

fn names_action(error: &KeybindError, action: &str) -> bool {
    matches!(
        error,
        KeybindError::Conflict { action1, action2, .. } if action1 == action || action2 == action
    )
}
