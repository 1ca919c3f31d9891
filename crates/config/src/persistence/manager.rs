//! Loading and saving the controls file.
//!
//! Responsibilities:
//! - Own the resolved configuration file path.
//! - Load `PersistedControls`, falling back to defaults on any failure.
//! - Atomic save operations.
//!
//! Does NOT handle:
//! - Path determination (uses the path module and `loader`).
//! - Deciding when to save (the store saves after every effective mutation).
//!
//! Invariants:
//! - Writes are atomic (temp file + rename).
//! - A corrupt file is backed up, never silently overwritten.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::create_corrupt_backup;
use super::state::{PersistedControls, read_controls_file};
use crate::loader::resolve_config_path;

/// Manages loading and saving the controls configuration to disk.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    /// Path to the configuration file.
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new `ConfigManager` using platform-standard config directories.
    ///
    /// If the `REBIND_CONFIG_PATH` environment variable is set (and not
    /// empty/whitespace), it will be used instead of the default path.
    ///
    /// # Errors
    /// Returns an error if the platform config directory cannot be determined.
    pub fn new() -> Result<Self> {
        let config_path = resolve_config_path(None)?;
        Ok(Self::new_with_path(config_path))
    }

    /// Creates a new `ConfigManager` with a specific config file path.
    pub fn new_with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    /// Returns the path to the configuration file.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Loads persisted controls from disk.
    ///
    /// Returns defaults if the file doesn't exist. If the file exists but
    /// cannot be read or parsed, it is backed up with a `.corrupt.{timestamp}`
    /// extension and defaults are returned.
    pub fn load(&self) -> PersistedControls {
        match read_controls_file(&self.config_path) {
            Ok(controls) => {
                tracing::debug!(
                    path = %self.config_path.display(),
                    actions = controls.bindings.len(),
                    "Loaded controls configuration"
                );
                controls
            }
            Err(e) if e.is_not_found() => {
                tracing::debug!(
                    path = %self.config_path.display(),
                    "Controls file not found, using defaults"
                );
                PersistedControls::default()
            }
            Err(e) => {
                match create_corrupt_backup(&self.config_path) {
                    Ok(backup_path) => {
                        tracing::warn!(
                            path = %self.config_path.display(),
                            backup_path = %backup_path.display(),
                            error = %e,
                            "Controls file is corrupt, backed up and using defaults"
                        );
                    }
                    Err(backup_err) => {
                        tracing::error!(
                            path = %self.config_path.display(),
                            error = %e,
                            backup_error = %backup_err,
                            "Controls file is corrupt and backup failed, using defaults"
                        );
                    }
                }
                PersistedControls::default()
            }
        }
    }

    /// Saves persisted controls to disk.
    ///
    /// # Errors
    /// Returns an error if the parent directory cannot be created
    /// or the file cannot be written.
    pub fn save(&self, controls: &PersistedControls) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = self.config_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        // Write to a temporary file first
        let temp_path = self.config_path.with_extension("tmp");
        let content = serde_json::to_string_pretty(controls)?;
        std::fs::write(&temp_path, content).context("Failed to write temporary config file")?;

        // Atomically rename the temporary file to the target path
        std::fs::rename(&temp_path, &self.config_path)
            .context("Failed to rename temporary config file")?;

        tracing::debug!(
            path = %self.config_path.display(),
            "Controls saved atomically"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Key;
    use tempfile::TempDir;

    fn manager_in(dir: &TempDir) -> ConfigManager {
        ConfigManager::new_with_path(dir.path().join("nested").join("controls.json"))
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let manager = manager_in(&dir);
        assert_eq!(manager.load(), PersistedControls::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let manager = manager_in(&dir);

        let mut controls = PersistedControls {
            sensitivity: 1.25,
            ..Default::default()
        };
        controls
            .bindings
            .insert("interact".to_string(), vec![Key::new("F")]);

        manager.save(&controls).unwrap();
        assert!(manager.config_path().exists());
        assert!(!manager.config_path().with_extension("tmp").exists());

        assert_eq!(manager.load(), controls);
    }

    #[test]
    fn test_corrupt_file_is_backed_up() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("controls.json");
        std::fs::write(&path, "{ definitely not json").unwrap();

        let manager = ConfigManager::new_with_path(&path);
        assert_eq!(manager.load(), PersistedControls::default());

        assert!(!path.exists(), "corrupt file should have been moved");
        let backups: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().contains(".corrupt."))
            .collect();
        assert_eq!(backups.len(), 1);
    }
}
