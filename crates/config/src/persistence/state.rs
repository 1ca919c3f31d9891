//! Persisted controls representation and file reading.
//!
//! Responsibilities:
//! - Define the on-disk controls format (`PersistedControls`).
//! - Define config file errors (`ConfigFileError`).
//! - Read and parse controls files.
//!
//! Does NOT handle:
//! - Writing config files (handled by `ConfigManager` via atomic save).
//! - Sanitizing values against the action catalog (handled by `BindingStore`).
//!
//! Invariants:
//! - Missing fields deserialize to their defaults, so older or hand-edited
//!   files still load.
//! - Bindings use `BTreeMap` for deterministic serialization.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SENSITIVITY, PERSISTED_VERSION};
use crate::types::Key;

/// Controls configuration that persists across application runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedControls {
    /// On-disk format version.
    pub version: u32,
    /// Map of action id -> ordered key list.
    pub bindings: BTreeMap<String, Vec<Key>>,
    /// Analog sensitivity scalar.
    pub sensitivity: f64,
}

impl Default for PersistedControls {
    fn default() -> Self {
        Self {
            version: PERSISTED_VERSION,
            bindings: BTreeMap::new(),
            sensitivity: DEFAULT_SENSITIVITY,
        }
    }
}

/// Errors that can occur when reading the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl ConfigFileError {
    /// Returns true if the file simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ConfigFileError::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

/// Reads and parses a controls file from disk.
pub(crate) fn read_controls_file(path: &Path) -> Result<PersistedControls, ConfigFileError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigFileError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str::<PersistedControls>(&content).map_err(|e| ConfigFileError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}
