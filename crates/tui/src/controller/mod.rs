//! The controls menu controller.
//!
//! Responsibilities:
//! - Own transient menu state: active tab, selected action, pending rebind.
//! - Translate menu operations and captured keys into `ConfigStore` mutations.
//! - Hold the keyboard while active and release it on every exit path.
//!
//! Does NOT handle:
//! - Rendering (see `ui`, a pure function of a `MenuSnapshot`).
//! - Storing bindings or sensitivity; every read goes to the store.
//!
//! Invariants:
//! - `selected_index` is valid whenever the action list is non-empty.
//! - At most one rebind is pending; beginning another cancels the first.
//! - Deactivation always ends any pending rebind without mutation.
//! - Every operation except `activate` is ignored while inactive.
//! - Controller listeners fire after transient state changes only. Store
//!   changes are announced by the store itself.

mod keys;
mod navigation;
mod rebind;
mod sensitivity;
mod state;

use std::fmt;
use std::rc::Rc;

use rebind_config::{Action, ConfigStore, ListenerId, Listeners};

use crate::input::{InputChannel, InputGrant};

pub use state::{InputSignal, KeyOutcome, RebindState, Slot, Tab};

/// Input channel owner name used by the controls menu.
pub const MENU_INPUT_OWNER: &str = "controls-menu";

/// Drives the controls menu on top of a shared `ConfigStore`.
pub struct BindingController<S: ConfigStore> {
    store: Rc<S>,
    channel: Rc<InputChannel>,
    grant: Option<InputGrant>,
    tab: Tab,
    selected_index: usize,
    rebind: RebindState,
    actions: Vec<Action>,
    listeners: Listeners,
    on_close: Option<Box<dyn FnMut()>>,
}

impl<S: ConfigStore> BindingController<S> {
    pub fn new(store: Rc<S>, channel: Rc<InputChannel>) -> Self {
        let actions = store.actions();
        Self {
            store,
            channel,
            grant: None,
            tab: Tab::Controls,
            selected_index: 0,
            rebind: RebindState::Idle,
            actions,
            listeners: Listeners::new(),
            on_close: None,
        }
    }

    /// Register a callback fired when an active menu is closed.
    pub fn set_on_close(&mut self, on_close: impl FnMut() + 'static) {
        self.on_close = Some(Box::new(on_close));
    }

    /// Subscribe to transient state changes.
    ///
    /// Callbacks run while the controller is mutably borrowed, so they must
    /// not call back into it; mark the view dirty and read on the next frame.
    pub fn subscribe(&self, listener: impl Fn() + 'static) -> ListenerId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    pub fn store(&self) -> &Rc<S> {
        &self.store
    }

    pub fn is_active(&self) -> bool {
        self.grant.is_some()
    }

    /// Whether the menu currently receives keyboard input.
    ///
    /// False while inactive or after another consumer preempted the channel.
    pub fn has_input(&self) -> bool {
        self.grant.as_ref().is_some_and(InputGrant::is_current)
    }

    pub fn current_tab(&self) -> Tab {
        self.tab
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// The action under the cursor, if the list is non-empty.
    pub fn selected_action(&self) -> Option<&Action> {
        self.actions.get(self.selected_index)
    }

    pub fn rebind_state(&self) -> &RebindState {
        &self.rebind
    }

    pub fn is_rebinding(&self) -> bool {
        self.rebind.is_awaiting()
    }

    /// The action list as of the last refresh.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Open the menu: take the keyboard and start from a clean state.
    pub fn activate(&mut self) {
        let was_active = self.is_active();
        self.grant = Some(self.channel.acquire(MENU_INPUT_OWNER));
        self.tab = Tab::Controls;
        self.selected_index = 0;
        self.rebind = RebindState::Idle;
        self.refresh_actions();
        tracing::info!(reactivated = was_active, "Controls menu activated");
        self.notify();
    }

    /// Close the menu: cancel any pending rebind and release the keyboard.
    pub fn deactivate(&mut self) {
        if !self.is_active() {
            tracing::trace!("Ignoring deactivate while inactive");
            return;
        }

        if let Some((action, slot)) = self.rebind.pending() {
            tracing::debug!(action = %action, slot = %slot, "Pending rebind cancelled by close");
        }
        self.rebind = RebindState::Idle;
        self.tab = Tab::Controls;
        self.selected_index = 0;
        self.grant = None;
        tracing::info!("Controls menu deactivated");

        self.notify();
        if let Some(on_close) = self.on_close.as_mut() {
            on_close();
        }
    }

    /// Re-read the action list and keep the selection in range.
    fn refresh_actions(&mut self) {
        self.actions = self.store.actions();
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let max = self.actions.len().saturating_sub(1);
        self.selected_index = self.selected_index.min(max);
    }

    /// Returns true if active; logs the ignored operation otherwise.
    fn ensure_active(&self, operation: &'static str) -> bool {
        if !self.is_active() {
            tracing::trace!(operation, "Ignoring operation while inactive");
        }
        self.is_active()
    }

    fn set_rebind(&mut self, next: RebindState) {
        if self.rebind != next {
            tracing::debug!(from = ?self.rebind, to = ?next, "Rebind state changed");
            self.rebind = next;
            self.notify();
        }
    }

    fn notify(&self) {
        self.listeners.notify();
    }
}

impl<S: ConfigStore> fmt::Debug for BindingController<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindingController")
            .field("active", &self.is_active())
            .field("tab", &self.tab)
            .field("selected_index", &self.selected_index)
            .field("rebind", &self.rebind)
            .field("actions", &self.actions.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rebind_config::{ActionCatalog, BindingStore};
    use std::cell::Cell;

    fn controller() -> (BindingController<BindingStore>, Rc<InputChannel>) {
        let store = Rc::new(BindingStore::in_memory(
            ActionCatalog::new()
                .with("move_forward", "Move Forward", &["W"])
                .with("jump", "Jump", &["Space"]),
        ));
        let channel = InputChannel::new();
        (BindingController::new(store, Rc::clone(&channel)), channel)
    }

    #[test]
    fn test_activate_takes_input_and_resets_state() {
        let (mut controller, channel) = controller();
        controller.activate();
        controller.select_next();
        controller.switch_tab();

        controller.activate();

        assert!(channel.is_held_by(MENU_INPUT_OWNER));
        assert_eq!(controller.current_tab(), Tab::Controls);
        assert_eq!(controller.selected_index(), 0);
        assert!(controller.has_input());
    }

    #[test]
    fn test_deactivate_releases_input_and_fires_close_once() {
        let (mut controller, channel) = controller();
        let closed = Rc::new(Cell::new(0));
        {
            let closed = Rc::clone(&closed);
            controller.set_on_close(move || closed.set(closed.get() + 1));
        }

        controller.activate();
        controller.begin_append("jump");
        controller.deactivate();
        controller.deactivate();

        assert!(!channel.is_held());
        assert_eq!(*controller.rebind_state(), RebindState::Idle);
        assert_eq!(closed.get(), 1);
    }

    #[test]
    fn test_drop_releases_input() {
        let (mut controller, channel) = controller();
        controller.activate();
        drop(controller);
        assert!(!channel.is_held());
    }

    #[test]
    fn test_preemption_is_visible() {
        let (mut controller, channel) = controller();
        controller.activate();
        let console = channel.acquire("console");
        assert!(controller.is_active());
        assert!(!controller.has_input());
        drop(console);
        assert!(!channel.is_held());
    }

    #[test]
    fn test_listeners_fire_on_transient_changes() {
        let (mut controller, _channel) = controller();
        let count = Rc::new(Cell::new(0));
        {
            let count = Rc::clone(&count);
            controller.subscribe(move || count.set(count.get() + 1));
        }

        controller.activate();
        controller.select_next();
        controller.select_next();
        controller.switch_tab();

        // activate, one effective select, switch
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn test_operations_ignored_while_inactive() {
        let (mut controller, _channel) = controller();
        controller.select_next();
        controller.switch_tab();
        controller.begin_append("jump");
        controller.adjust_sensitivity(1);

        assert_eq!(controller.selected_index(), 0);
        assert_eq!(controller.current_tab(), Tab::Controls);
        assert!(!controller.is_rebinding());
        assert_eq!(controller.store().sensitivity(), 0.20);
    }
}
