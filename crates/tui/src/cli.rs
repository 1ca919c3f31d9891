//! Command-line argument parsing for rebind-tui.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//! - Provide parsed CLI arguments to the main application.
//!
//! Does NOT handle:
//! - Store construction (see `runtime::config`).
//! - Terminal state management (see `runtime::terminal`).
//!
//! Invariants:
//! - CLI arguments are parsed once at startup via `Cli::parse()`.
//! - All path arguments are resolved relative to the current working directory.

use clap::Parser;
use rebind_config::constants::{CONFIG_PATH_ENV, DEFAULT_WORLD_LOG_LINES};
use std::path::PathBuf;

/// Command-line arguments for rebind-tui.
///
/// Path precedence (highest to lowest):
/// 1. `--config-path`
/// 2. `REBIND_CONFIG_PATH`
/// 3. Platform config directory
#[derive(Debug, Parser)]
#[command(
    name = "rebind-tui",
    about = "Interactive control bindings menu",
    version,
    after_help = "Examples:\n  rebind-tui\n  rebind-tui --config-path ./controls.json\n  rebind-tui --log-dir /tmp/rebind-logs\n  rebind-tui --fresh\n"
)]
pub struct Cli {
    /// Path to a custom controls file
    #[arg(long, env = CONFIG_PATH_ENV)]
    pub config_path: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Start from factory defaults, ignoring the saved file (changes are still saved)
    #[arg(long)]
    pub fresh: bool,

    /// Number of world actions kept on screen
    #[arg(long, default_value_t = DEFAULT_WORLD_LOG_LINES)]
    pub log_lines: usize,
}
