//! Environment and `.env` loading for configuration.
//!
//! Responsibilities:
//! - Load `.env` files, gated by `DOTENV_DISABLED`.
//! - Resolve the controls file path from CLI input, environment, or platform default.
//!
//! Does NOT handle:
//! - Reading or writing the controls file (see `persistence`).
//!
//! Invariants / Assumptions:
//! - Path precedence: explicit path > `REBIND_CONFIG_PATH` > platform default.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::path::PathBuf;

mod env;
mod error;

pub use env::env_var_or_none;
pub use error::ConfigError;

use crate::constants::CONFIG_PATH_ENV;
use crate::persistence::default_config_path;

/// Returns true if `.env` loading has been disabled for this process.
fn dotenv_disabled() -> bool {
    matches!(
        std::env::var("DOTENV_DISABLED").ok().as_deref(),
        Some("true") | Some("1")
    )
}

/// Check if a dotenv error indicates the file was not found.
fn is_not_found(err: &dotenvy::Error) -> bool {
    matches!(
        err,
        dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
    )
}

/// Load environment variables from a `.env` file if present.
///
/// If `DOTENV_DISABLED` is set to "true" or "1", the `.env` file will not be
/// loaded (useful for testing). A missing file is not an error.
///
/// # Errors
/// Returns `ConfigError::DotenvParse` or `ConfigError::DotenvIo` when the file
/// exists but cannot be used. Errors never include raw file contents.
pub fn load_dotenv() -> Result<(), ConfigError> {
    if dotenv_disabled() {
        return Ok(());
    }

    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "Loaded .env file");
            Ok(())
        }
        Err(e) if is_not_found(&e) => Ok(()),
        Err(dotenvy::Error::LineParse(_, idx)) => {
            Err(ConfigError::DotenvParse { error_index: idx })
        }
        Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
            kind: io_err.kind(),
        }),
        Err(_) => Err(ConfigError::DotenvUnknown),
    }
}

/// Resolve the controls file path.
///
/// # Errors
/// Returns `ConfigError::ConfigDirUnavailable` if neither an explicit path nor
/// the environment override is given and the platform directory is unknown.
pub fn resolve_config_path(explicit: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    if let Some(path) = env_var_or_none(CONFIG_PATH_ENV) {
        return Ok(PathBuf::from(path));
    }
    default_config_path().map_err(|e| ConfigError::ConfigDirUnavailable(e.to_string()))
}

#[cfg(test)]
mod tests;
