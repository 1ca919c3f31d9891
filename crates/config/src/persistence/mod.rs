//! Configuration persistence for control bindings.
//!
//! Responsibilities:
//! - Resolve the standard configuration file path.
//! - Read and write the persisted controls (`PersistedControls`) to disk.
//! - Backup corrupt config files before they are replaced.
//!
//! Does NOT handle:
//! - Loading environment variables (see `loader`).
//! - Validating bindings against the action catalog (see `store`).
//! - Change notification (see `listeners`).
//!
//! Invariants:
//! - Writes are atomic (temp file + rename).
//! - Corrupt config files are backed up before being overwritten.
//! - A missing or unreadable file never prevents startup.

use std::path::{Path, PathBuf};

mod manager;
mod path;
mod state;

pub use manager::ConfigManager;
pub use state::{ConfigFileError, PersistedControls};

pub(crate) use path::default_config_path;
pub(crate) use state::read_controls_file;

/// Creates a backup of a corrupt config file before it is overwritten.
///
/// The backup is created by renaming the original file to a path with a
/// `.corrupt.{timestamp}` extension, preserving its contents for recovery.
///
/// # Returns
///
/// Returns the path to the backup file on success, or an IO error if the
/// backup could not be created.
pub(crate) fn create_corrupt_backup(path: &Path) -> Result<PathBuf, std::io::Error> {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    // with_extension replaces the last extension
    let backup_path = path.with_extension(format!("corrupt.{}", timestamp));

    std::fs::rename(path, &backup_path)?;

    Ok(backup_path)
}
