//! Centralized constants for the rebind workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Sensitivity
// =============================================================================

/// Lowest sensitivity value a store will hold.
pub const SENSITIVITY_MIN: f64 = 0.01;

/// Highest sensitivity value a store will hold.
pub const SENSITIVITY_MAX: f64 = 2.00;

/// Fixed increment applied by a single relative adjustment.
pub const SENSITIVITY_STEP: f64 = 0.01;

/// Factory sensitivity value restored by a reset.
pub const DEFAULT_SENSITIVITY: f64 = 0.20;

// =============================================================================
// Notification
// =============================================================================

/// Maximum nesting of listener notifications.
///
/// The top-level notification counts as depth 1; a mutation performed by a
/// listener while it is being notified produces depth 2. Anything deeper is
/// suppressed so notify -> mutate -> notify cycles terminate.
///
/// A suppressed notification is dropped, not deferred: the mutation behind it
/// is applied and persisted, but listeners only see it on the next change.
pub const MAX_NOTIFY_DEPTH: usize = 2;

// =============================================================================
// Persistence
// =============================================================================

/// Directory name used under the platform configuration root.
pub const APP_DIR_NAME: &str = "rebind";

/// File name of the persisted controls configuration.
pub const CONFIG_FILE_NAME: &str = "controls.json";

/// Environment variable that overrides the configuration file location.
pub const CONFIG_PATH_ENV: &str = "REBIND_CONFIG_PATH";

/// Current on-disk format version.
pub const PERSISTED_VERSION: u32 = 1;

// =============================================================================
// TUI Defaults
// =============================================================================

/// Maximum number of lines retained in the interactive world log.
pub const DEFAULT_WORLD_LOG_LINES: usize = 8;
