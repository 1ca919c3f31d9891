//! Command dispatch logic.
//!
//! Responsibilities:
//! - Open the controls store at the resolved path.
//! - Route parsed CLI arguments to the matching command handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//!
//! Invariants:
//! - `path` never reads the controls file.
//! - Every other command opens the store once and lets it persist its own changes.

use std::path::PathBuf;

use anyhow::{Context, Result};
use rebind_config::{BindingStore, ConfigManager, factory_catalog, resolve_config_path};

use crate::args::{Cli, Commands};
use crate::commands;

fn config_path(cli: &Cli) -> Result<PathBuf> {
    // Blank values fall back to the environment and platform default
    let explicit = cli
        .config_path
        .clone()
        .filter(|p| !p.to_string_lossy().trim().is_empty());
    resolve_config_path(explicit).context("Failed to resolve the controls file path")
}

/// Open the store backed by the controls file at `path`.
pub(crate) fn open_store(path: PathBuf) -> BindingStore {
    tracing::debug!(path = %path.display(), "Opening controls file");
    BindingStore::open(factory_catalog(), ConfigManager::new_with_path(path))
}

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli) -> Result<()> {
    let path = config_path(&cli)?;

    if let Commands::Path = cli.command {
        return commands::maintenance::run_path(&path);
    }

    let store = open_store(path);
    match cli.command {
        Commands::List { output } => commands::listing::run_list(&store, &output),
        Commands::Conflicts { output } => commands::listing::run_conflicts(&store, &output),
        Commands::Bind { action, key } => commands::bindings::run_bind(&store, &action, &key),
        Commands::Unbind { action, key } => commands::bindings::run_unbind(&store, &action, &key),
        Commands::Set { action, keys } => commands::bindings::run_set(&store, &action, &keys),
        Commands::Clear { action } => commands::bindings::run_clear(&store, &action),
        Commands::Sensitivity { command } => commands::sensitivity::run(&store, command),
        Commands::Reset => commands::maintenance::run_reset(&store),
        Commands::Path => Ok(()),
    }
}
