//! Centralized menu keybinding catalog and input resolver.
//!
//! Responsibilities:
//! - Define a single source of truth for menu keys and their descriptions.
//! - Resolve KeyEvents into MenuActions without mutating controller state.
//!
//! Non-responsibilities:
//! - Rebind capture (handled by the controller while awaiting input).
//! - Game-world keys (see `input::world`).
//!
//! Invariants:
//! - Bindings are deterministic and stable for footer hint rendering.
//! - Resolver never mutates state and returns at most one MenuAction.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::MenuAction;
use crate::controller::Tab;

mod bindings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingScope {
    Global,
    Tab(Tab),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Matcher {
    code: KeyCode,
    modifiers: KeyModifiers,
}

impl Matcher {
    const fn plain(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// Characters ignore Shift, which terminals already fold into the char.
    fn matches(&self, key: &KeyEvent) -> bool {
        let modifiers = match key.code {
            KeyCode::Char(_) | KeyCode::BackTab => key.modifiers.difference(KeyModifiers::SHIFT),
            _ => key.modifiers,
        };
        key.code == self.code && modifiers == self.modifiers
    }
}

/// One menu key and what it does.
#[derive(Debug, Clone)]
pub struct Keybinding {
    /// Display spelling, e.g. "↑/k".
    pub keys: &'static str,
    pub description: &'static str,
    pub scope: BindingScope,
    /// Whether the footer shows this binding.
    pub hint: bool,
    pub(crate) matchers: Vec<Matcher>,
    pub action: MenuAction,
}

impl Keybinding {
    fn scope_applies(&self, tab: Tab) -> bool {
        match self.scope {
            BindingScope::Global => true,
            BindingScope::Tab(t) => t == tab,
        }
    }

    fn matches(&self, key: &KeyEvent, tab: Tab) -> bool {
        self.scope_applies(tab) && self.matchers.iter().any(|m| m.matches(key))
    }
}

pub fn keybindings() -> Vec<Keybinding> {
    bindings::all()
}

/// The menu action a key triggers on `tab`, if any.
pub fn resolve_action(tab: Tab, key: &KeyEvent) -> Option<MenuAction> {
    keybindings()
        .into_iter()
        .find(|binding| binding.matches(key, tab))
        .map(|binding| binding.action)
}

/// Footer hints for `tab`, in catalog order.
pub fn footer_hints(tab: Tab) -> Vec<(&'static str, &'static str)> {
    keybindings()
        .into_iter()
        .filter(|binding| binding.hint && binding.scope_applies(tab))
        .map(|binding| (binding.keys, binding.description))
        .collect()
}
