//! Path helpers for configuration file locations.
//!
//! Responsibilities:
//! - Determine the standard configuration file path.
//! - Use `directories` crate for platform-appropriate paths.
//!
//! Does NOT handle:
//! - File I/O operations.
//! - Environment overrides (see `loader::resolve_config_path`).

use std::path::PathBuf;

use anyhow::Context;

use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME};

/// Returns the default path to the configuration file.
///
/// - Linux: `~/.config/rebind/controls.json`
/// - macOS: `~/Library/Application Support/rebind/controls.json`
/// - Windows: `%AppData%\rebind\config\controls.json`
pub(crate) fn default_config_path() -> Result<PathBuf, anyhow::Error> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_DIR_NAME)
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.config_dir().join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_path_matches_expected_project_dirs() {
        let expected = directories::ProjectDirs::from("", "", APP_DIR_NAME)
            .unwrap()
            .config_dir()
            .join(CONFIG_FILE_NAME);

        let actual = default_config_path().unwrap();
        assert_eq!(actual, expected);
        assert!(actual.ends_with(CONFIG_FILE_NAME));
    }
}
