//! Shared test utilities for rebind CLI integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Point every command at a controls file inside a temporary directory.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - The returned `TempDir` must outlive the command.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Returns a hermetic `rebind` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `REBIND_CONFIG_PATH` points at `config_path`.
pub fn rebind_cmd(config_path: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("rebind");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");
    cmd.env("REBIND_CONFIG_PATH", config_path);
    cmd.env_remove("RUST_LOG");

    cmd
}

/// A fresh temporary directory and the controls file path inside it.
pub fn temp_config() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("controls.json");
    (dir, path)
}

/// Run `rebind list -o json` and parse the result.
pub fn listing(config_path: &Path) -> serde_json::Value {
    let output = rebind_cmd(config_path)
        .args(["list", "-o", "json"])
        .output()
        .expect("run rebind list");
    assert!(output.status.success(), "list failed: {output:?}");
    serde_json::from_slice(&output.stdout).expect("list emits JSON")
}

/// Key ids bound to `action` according to `rebind list`.
pub fn keys_of(config_path: &Path, action: &str) -> Vec<String> {
    let listing = listing(config_path);
    listing["actions"]
        .as_array()
        .expect("actions array")
        .iter()
        .find(|a| a["id"] == action)
        .map(|a| {
            a["keys"]
                .as_array()
                .expect("keys array")
                .iter()
                .map(|k| k.as_str().unwrap_or_default().to_string())
                .collect()
        })
        .unwrap_or_default()
}
