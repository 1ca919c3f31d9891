//! CLI errors and exit codes for scripting.
//!
//! Responsibilities:
//! - Define the failures a command can report about its input.
//! - Map those failures to structured exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.
//! - Anything that is not a `CliError` exits with `GeneralError`.

use rebind_config::KeybindError;
use thiserror::Error;

/// Input problems detected before the store is touched.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Unknown action '{action}'. Run 'rebind list' to see available actions")]
    UnknownAction { action: String },

    #[error(transparent)]
    InvalidKey(#[from] KeybindError),

    #[error("Invalid sensitivity value: {value}")]
    InvalidSensitivity { value: f64 },

    #[error("Invalid output format '{format}'. Valid values are 'json' or 'table'")]
    InvalidOutputFormat { format: String },
}

/// Structured exit codes for rebind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// The named action does not exist.
    NotFound = 4,

    /// Validation error - bad key string, reserved key, bad value.
    ///
    /// Scripts should fix the input and not retry the same request.
    ValidationError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&CliError> for ExitCode {
    fn from(err: &CliError) -> Self {
        match err {
            CliError::UnknownAction { .. } => ExitCode::NotFound,
            CliError::InvalidKey(_)
            | CliError::InvalidSensitivity { .. }
            | CliError::InvalidOutputFormat { .. } => ExitCode::ValidationError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if the error is not a CliError.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<CliError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
