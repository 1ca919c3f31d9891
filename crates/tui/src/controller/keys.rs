//! Keyboard routing for the controls menu.
//!
//! While a rebind awaits input every press is captured as an `InputSignal`,
//! which shadows menu keys such as F5 and Tab. Otherwise keys resolve
//! through the menu keymap. Unmapped keys are swallowed, never forwarded.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use rebind_config::ConfigStore;

use super::{BindingController, InputSignal, KeyOutcome};
use crate::action::MenuAction;
use crate::input::key_from_event;
use crate::input::keymap::resolve_action;

impl<S: ConfigStore> BindingController<S> {
    /// Route one terminal key event.
    pub fn handle_key(&mut self, event: KeyEvent) -> KeyOutcome {
        if !self.is_active() || event.kind != KeyEventKind::Press {
            return KeyOutcome::Ignored;
        }

        if self.is_rebinding() {
            return match capture_signal(&event) {
                Some(signal) => {
                    self.handle_signal(signal);
                    KeyOutcome::Consumed
                }
                None => KeyOutcome::Ignored,
            };
        }

        match resolve_action(self.tab, &event) {
            Some(action) => self.dispatch(action),
            None => KeyOutcome::Ignored,
        }
    }

    /// Apply a resolved menu action.
    pub fn dispatch(&mut self, action: MenuAction) -> KeyOutcome {
        match action {
            MenuAction::SelectPrevious => self.select_previous(),
            MenuAction::SelectNext => self.select_next(),
            MenuAction::SwitchTab => self.switch_tab(),
            MenuAction::Confirm => self.confirm(),
            MenuAction::AdjustSensitivity(direction) => self.adjust_sensitivity(direction),
            MenuAction::ResetDefaults => self.reset_to_defaults(),
            MenuAction::ClearSelected => self.clear_selected(),
            MenuAction::Close => {
                self.deactivate();
                return KeyOutcome::Closed;
            }
        }
        KeyOutcome::Consumed
    }
}

/// The signal a key press delivers to a pending rebind.
///
/// Reserved keys other than Esc, and keys with no configured spelling,
/// deliver nothing.
fn capture_signal(event: &KeyEvent) -> Option<InputSignal> {
    match event.code {
        KeyCode::Esc => Some(InputSignal::Cancel),
        KeyCode::Backspace | KeyCode::Delete => Some(InputSignal::Delete),
        _ => {
            let key = key_from_event(event)?;
            if key.is_reserved() {
                tracing::debug!(key = %key.id(), "Reserved key pressed during rebind");
                return None;
            }
            Some(InputSignal::Key(key))
        }
    }
}
