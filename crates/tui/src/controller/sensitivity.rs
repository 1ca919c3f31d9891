//! Sensitivity, reset and clearing operations.
//!
//! These forward straight to the store; the displayed sensitivity is always
//! read back from it.

use rebind_config::ConfigStore;

use super::{BindingController, Tab};

impl<S: ConfigStore> BindingController<S> {
    /// Step the sensitivity toward `direction`'s sign.
    ///
    /// Only meaningful on the sensitivity tab; ignored elsewhere.
    pub fn adjust_sensitivity(&mut self, direction: i32) {
        if !self.ensure_active("adjust_sensitivity") {
            return;
        }
        if self.tab != Tab::Sensitivity {
            tracing::trace!(direction, "Ignoring sensitivity adjustment off its tab");
            return;
        }
        self.store.adjust_sensitivity(direction);
    }

    /// Restore factory bindings and sensitivity.
    ///
    /// A pending rebind stays pending; its slot is re-checked when input
    /// arrives.
    pub fn reset_to_defaults(&mut self) {
        if !self.ensure_active("reset_to_defaults") {
            return;
        }
        self.store.reset_to_defaults();
    }

    /// Remove every key from the selected action.
    pub fn clear_selected(&mut self) {
        if !self.ensure_active("clear_selected") || !self.on_controls_tab("clear_selected") {
            return;
        }
        if let Some(action) = self.selected_action().map(|a| a.id().to_string()) {
            self.store.clear_keys(&action);
        }
    }
}
