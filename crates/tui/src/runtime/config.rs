//! Store construction for the TUI.
//!
//! Responsibilities:
//! - Load `.env` and resolve the controls file path from CLI and environment.
//! - Open the persistent store, or start fresh with `--fresh`.
//!
//! Does NOT handle:
//! - Reading or writing the file itself (see `rebind_config::persistence`).
//!
//! Invariants:
//! - Path precedence: `--config-path` > `REBIND_CONFIG_PATH` > platform default.
//! - A `.env` problem is logged and never prevents startup.
//! - `--fresh` never reads the file but still saves to it.

use anyhow::{Context, Result};
use rebind_config::{
    BindingStore, ConfigManager, factory_catalog, load_dotenv, resolve_config_path,
};

use crate::cli::Cli;

/// Build the store the session runs against.
///
/// # Errors
/// Returns an error if no config path can be determined.
pub fn open_store(cli: &Cli) -> Result<BindingStore> {
    if let Err(e) = load_dotenv() {
        tracing::warn!(error = %e, "Ignoring .env file");
    }

    let path = resolve_config_path(cli.config_path.clone())
        .context("Failed to determine controls file path")?;
    let manager = ConfigManager::new_with_path(path);

    let store = if cli.fresh {
        tracing::info!(
            path = %manager.config_path().display(),
            "Starting from factory defaults"
        );
        BindingStore::in_memory(factory_catalog()).attach(manager)
    } else {
        BindingStore::open(factory_catalog(), manager)
    };

    Ok(store)
}
