//! Transient controller state types.
//!
//! None of these are persisted; they live only while the menu is open.

use std::fmt;

use rebind_config::Key;

/// The two menu tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Controls,
    Sensitivity,
}

impl Tab {
    pub fn toggled(self) -> Self {
        match self {
            Tab::Controls => Tab::Sensitivity,
            Tab::Sensitivity => Tab::Controls,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::Controls => "Controls",
            Tab::Sensitivity => "Sensitivity",
        }
    }
}

/// Target position of a pending rebind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Replace the key at this index.
    Index(usize),
    /// Add a new key at the end.
    Append,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Index(i) => write!(f, "#{i}"),
            Slot::Append => f.write_str("append"),
        }
    }
}

/// Rebind state machine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RebindState {
    #[default]
    Idle,
    AwaitingInput { action: String, slot: Slot },
}

impl RebindState {
    pub fn is_awaiting(&self) -> bool {
        matches!(self, RebindState::AwaitingInput { .. })
    }

    /// The pending action and slot, if awaiting input.
    pub fn pending(&self) -> Option<(&str, Slot)> {
        match self {
            RebindState::Idle => None,
            RebindState::AwaitingInput { action, slot } => Some((action.as_str(), *slot)),
        }
    }
}

/// Input delivered to a pending rebind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSignal {
    Cancel,
    Delete,
    Key(Key),
}

/// What `handle_key` did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The event changed or advanced menu state.
    Consumed,
    /// The menu owns the keyboard but the event had no effect.
    Ignored,
    /// The event closed the menu.
    Closed,
}
