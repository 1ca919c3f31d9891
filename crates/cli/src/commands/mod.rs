//! Command implementations.
//!
//! Every command receives an already-opened store; mutations persist through
//! the store's attached `ConfigManager`.

pub mod bindings;
pub mod listing;
pub mod maintenance;
pub mod sensitivity;

use rebind_config::keybind::{is_reserved, parse_key};
use rebind_config::{BindingStore, KeybindError, Key};

use crate::error::CliError;

/// Fail with `UnknownAction` unless the catalog defines `action`.
pub(crate) fn require_action(store: &BindingStore, action: &str) -> Result<(), CliError> {
    if store.catalog().contains(action) {
        Ok(())
    } else {
        Err(CliError::UnknownAction {
            action: action.to_string(),
        })
    }
}

/// Parse a key string that a user wants to bind.
pub(crate) fn parse_bindable_key(raw: &str) -> Result<Key, CliError> {
    let parsed = parse_key(raw)?;
    if is_reserved(&parsed) {
        return Err(KeybindError::ReservedKey {
            key: parsed.to_string(),
        }
        .into());
    }
    Ok(Key::new(parsed.to_string()))
}
