//! Controls configuration for rebind.
//!
//! This crate provides the binding data model, the `ConfigStore` contract
//! and its persistent implementation, and helpers for locating the
//! controls file from the environment.

pub mod constants;
pub mod defaults;
pub mod keybind;
pub mod listeners;
mod loader;
pub mod persistence;
pub mod store;
pub mod types;

pub use defaults::{factory_catalog, factory_sensitivity};
pub use keybind::KeybindError;
pub use listeners::{Listener, ListenerId, Listeners};
pub use loader::{ConfigError, env_var_or_none, load_dotenv, resolve_config_path};
pub use persistence::{ConfigManager, PersistedControls};
pub use store::{BindingStore, ConfigStore};
pub use types::{Action, ActionCatalog, Key, SensitivityRange};
