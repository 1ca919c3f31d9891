//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not open the controls file (see `dispatch::open_store`).

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rebind_config::constants::CONFIG_PATH_ENV;

#[derive(Parser, Debug)]
#[command(name = "rebind")]
#[command(about = "Rebind - inspect and edit control bindings from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  rebind list\n  rebind bind jump J\n  rebind set move_forward W Up\n  rebind sensitivity up --steps 5\n  rebind reset\n"
)]
pub struct Cli {
    /// Path to the controls file (overrides the default location).
    ///
    /// Can also be set via REBIND_CONFIG_PATH environment variable.
    #[arg(long, global = true, env = CONFIG_PATH_ENV, value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every action with its keys, plus the sensitivity
    List {
        /// Output format (json, table)
        #[arg(short, long, default_value = "table")]
        output: String,
    },

    /// Add a key to an action
    Bind {
        /// Action id (e.g. jump)
        action: String,
        /// Key string (e.g. J, Ctrl+X, F5)
        key: String,
    },

    /// Remove a key from an action
    Unbind {
        /// Action id
        action: String,
        /// Key string
        key: String,
    },

    /// Replace every key of an action
    Set {
        /// Action id
        action: String,
        /// New keys, in order
        #[arg(required = true, num_args = 1..)]
        keys: Vec<String>,
    },

    /// Remove every key from an action
    Clear {
        /// Action id
        action: String,
    },

    /// Show or change the sensitivity
    Sensitivity {
        #[command(subcommand)]
        command: Option<SensitivityCommand>,
    },

    /// Restore factory bindings and sensitivity
    Reset,

    /// List keys shared by more than one action
    Conflicts {
        /// Output format (json, table)
        #[arg(short, long, default_value = "table")]
        output: String,
    },

    /// Print the resolved controls file path
    Path,
}

#[derive(Subcommand, Debug)]
pub enum SensitivityCommand {
    /// Set an absolute value (clamped to the allowed range)
    Set {
        #[arg(allow_hyphen_values = true)]
        value: f64,
    },

    /// Increase by whole steps
    Up {
        #[arg(long, default_value_t = 1)]
        steps: u32,
    },

    /// Decrease by whole steps
    Down {
        #[arg(long, default_value_t = 1)]
        steps: u32,
    },
}
