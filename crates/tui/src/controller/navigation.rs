//! Action selection and tab switching.
//!
//! Selection clamps at both ends rather than wrapping, so held-down arrow
//! keys stop at the boundary.

use rebind_config::ConfigStore;

use super::{BindingController, Tab};

impl<S: ConfigStore> BindingController<S> {
    pub fn select_previous(&mut self) {
        if !self.ensure_active("select_previous") || !self.on_controls_tab("select_previous") {
            return;
        }
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.notify();
        }
    }

    pub fn select_next(&mut self) {
        if !self.ensure_active("select_next") || !self.on_controls_tab("select_next") {
            return;
        }
        if self.selected_index + 1 < self.actions.len() {
            self.selected_index += 1;
            self.notify();
        }
    }

    /// Toggle between the two tabs.
    pub fn switch_tab(&mut self) {
        let next = self.tab.toggled();
        self.set_tab(next);
    }

    /// Show `tab`. Entering the controls tab refreshes the action list and
    /// keeps the selection index.
    pub fn set_tab(&mut self, tab: Tab) {
        if !self.ensure_active("set_tab") || self.tab == tab {
            return;
        }
        self.tab = tab;
        if tab == Tab::Controls {
            self.refresh_actions();
        }
        tracing::debug!(tab = ?tab, "Switched tab");
        self.notify();
    }

    /// Activate the current selection: begin appending a key to it.
    ///
    /// No-op on the sensitivity tab.
    pub fn confirm(&mut self) {
        if !self.ensure_active("confirm") || !self.on_controls_tab("confirm") {
            return;
        }
        let Some(action) = self.selected_action().map(|a| a.id().to_string()) else {
            tracing::trace!("Ignoring confirm with no actions");
            return;
        };
        self.begin_append(&action);
    }

    /// Returns true on the controls tab; logs the ignored operation otherwise.
    pub(super) fn on_controls_tab(&self, operation: &'static str) -> bool {
        let on_tab = self.tab == Tab::Controls;
        if !on_tab {
            tracing::trace!(operation, "Ignoring controls-tab operation");
        }
        on_tab
    }
}
