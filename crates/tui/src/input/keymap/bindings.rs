//! Menu keybindings.
//!
//! Invariants:
//! - Ordering matches the rendered footer hints.
//! - Esc and Ctrl+C never appear as bindable keys elsewhere, so Close on Esc
//!   cannot shadow a game action.

use crossterm::event::KeyCode;

use crate::action::MenuAction;
use crate::controller::Tab;

use super::{BindingScope, Keybinding, Matcher};

pub(super) fn all() -> Vec<Keybinding> {
    vec![
        // Controls tab
        Keybinding {
            keys: "↑/k",
            description: "Up",
            scope: BindingScope::Tab(Tab::Controls),
            hint: true,
            matchers: vec![Matcher::plain(KeyCode::Up), Matcher::plain(KeyCode::Char('k'))],
            action: MenuAction::SelectPrevious,
        },
        Keybinding {
            keys: "↓/j",
            description: "Down",
            scope: BindingScope::Tab(Tab::Controls),
            hint: true,
            matchers: vec![
                Matcher::plain(KeyCode::Down),
                Matcher::plain(KeyCode::Char('j')),
            ],
            action: MenuAction::SelectNext,
        },
        Keybinding {
            keys: "Enter",
            description: "Add key",
            scope: BindingScope::Tab(Tab::Controls),
            hint: true,
            matchers: vec![Matcher::plain(KeyCode::Enter)],
            action: MenuAction::Confirm,
        },
        Keybinding {
            keys: "Del",
            description: "Clear",
            scope: BindingScope::Tab(Tab::Controls),
            hint: true,
            matchers: vec![
                Matcher::plain(KeyCode::Delete),
                Matcher::plain(KeyCode::Backspace),
            ],
            action: MenuAction::ClearSelected,
        },
        // Sensitivity tab
        Keybinding {
            keys: "←/→",
            description: "Adjust",
            scope: BindingScope::Tab(Tab::Sensitivity),
            hint: true,
            matchers: vec![Matcher::plain(KeyCode::Left)],
            action: MenuAction::AdjustSensitivity(-1),
        },
        Keybinding {
            keys: "-",
            description: "Decrease",
            scope: BindingScope::Tab(Tab::Sensitivity),
            hint: false,
            matchers: vec![Matcher::plain(KeyCode::Char('-'))],
            action: MenuAction::AdjustSensitivity(-1),
        },
        Keybinding {
            keys: "→/+",
            description: "Increase",
            scope: BindingScope::Tab(Tab::Sensitivity),
            hint: false,
            matchers: vec![
                Matcher::plain(KeyCode::Right),
                Matcher::plain(KeyCode::Char('+')),
                Matcher::plain(KeyCode::Char('=')),
            ],
            action: MenuAction::AdjustSensitivity(1),
        },
        // Global
        Keybinding {
            keys: "Tab",
            description: "Switch tab",
            scope: BindingScope::Global,
            hint: true,
            matchers: vec![
                Matcher::plain(KeyCode::Tab),
                Matcher::plain(KeyCode::BackTab),
            ],
            action: MenuAction::SwitchTab,
        },
        Keybinding {
            keys: "F5",
            description: "Reset",
            scope: BindingScope::Global,
            hint: true,
            matchers: vec![Matcher::plain(KeyCode::F(5))],
            action: MenuAction::ResetDefaults,
        },
        Keybinding {
            keys: "Esc/q",
            description: "Close",
            scope: BindingScope::Global,
            hint: true,
            matchers: vec![Matcher::plain(KeyCode::Esc), Matcher::plain(KeyCode::Char('q'))],
            action: MenuAction::Close,
        },
    ]
}
