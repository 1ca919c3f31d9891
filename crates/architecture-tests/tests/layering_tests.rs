//! Architecture tests for crate and module layering.
//!
//! Invariants:
//! - `rebind-config` has no terminal, rendering, CLI or async dependencies.
//! - The controller never renders; the view never mutates the store.
//! - Library code propagates errors instead of panicking.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Crates the data model must never depend on.
const PRESENTATION_CRATES: &[&str] = &["ratatui", "crossterm", "clap", "tokio", "rebind-tui"];

/// Store mutators; only controller and command code may call these.
const STORE_MUTATORS: &[&str] = &[
    ".set_keys(",
    ".add_key(",
    ".remove_key(",
    ".clear_keys(",
    ".set_sensitivity(",
    ".adjust_sensitivity(",
    ".reset_to_defaults(",
];

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .expect("architecture-tests lives at crates/architecture-tests")
        .to_path_buf()
}

fn rust_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .map(|e| e.into_path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "rs"))
        .collect()
}

/// Source text before the first inline test module, without comment lines.
fn production_lines(path: &Path) -> Vec<(usize, String)> {
    let content = fs::read_to_string(path).expect("read source file");
    content
        .lines()
        .enumerate()
        .take_while(|(_, line)| line.trim() != "#[cfg(test)]")
        .filter(|(_, line)| !line.trim_start().starts_with("//"))
        .map(|(i, line)| (i + 1, line.to_string()))
        .collect()
}

fn is_test_path(path: &Path) -> bool {
    path.components().any(|c| c.as_os_str() == "tests")
        || path.file_name().is_some_and(|n| n == "tests.rs")
}

fn dependency_section(manifest: &str) -> String {
    let mut out = String::new();
    let mut in_deps = false;
    for line in manifest.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with('[') {
            in_deps = trimmed == "[dependencies]";
            continue;
        }
        if in_deps {
            out.push_str(trimmed);
            out.push('\n');
        }
    }
    out
}

#[test]
fn config_crate_has_no_presentation_dependencies() {
    let manifest = fs::read_to_string(workspace_root().join("crates/config/Cargo.toml"))
        .expect("read config manifest");
    let deps = dependency_section(&manifest);

    for name in PRESENTATION_CRATES {
        assert!(
            !deps
                .lines()
                .any(|line| line.starts_with(&format!("{name} ")) || line.starts_with(&format!("{name}="))),
            "rebind-config must not depend on {name}"
        );
    }
}

#[test]
fn config_sources_do_not_import_presentation_crates() {
    let mut violations = Vec::new();
    for path in rust_files(&workspace_root().join("crates/config/src")) {
        let content = fs::read_to_string(&path).expect("read source file");
        for name in ["ratatui", "crossterm", "rebind_tui", "tokio"] {
            if content.contains(&format!("{name}::")) {
                violations.push(format!("{}: references {name}", path.display()));
            }
        }
    }
    assert!(violations.is_empty(), "{}", violations.join("\n"));
}

#[test]
fn controller_does_not_render() {
    let mut violations = Vec::new();
    for path in rust_files(&workspace_root().join("crates/tui/src/controller")) {
        for (line_no, line) in production_lines(&path) {
            if line.contains("ratatui") {
                violations.push(format!("{}:{line_no}: {}", path.display(), line.trim()));
            }
        }
    }
    assert!(violations.is_empty(), "{}", violations.join("\n"));
}

#[test]
fn view_does_not_mutate_store() {
    let mut violations = Vec::new();
    for path in rust_files(&workspace_root().join("crates/tui/src/ui")) {
        for (line_no, line) in production_lines(&path) {
            if STORE_MUTATORS.iter().any(|m| line.contains(m)) {
                violations.push(format!("{}:{line_no}: {}", path.display(), line.trim()));
            }
        }
    }
    assert!(violations.is_empty(), "{}", violations.join("\n"));
}

#[test]
fn library_code_does_not_panic_on_errors() {
    let root = workspace_root();
    let mut violations = Vec::new();

    for dir in ["crates/config/src", "crates/tui/src", "crates/cli/src"] {
        for path in rust_files(&root.join(dir)) {
            if is_test_path(&path) {
                continue;
            }
            for (line_no, line) in production_lines(&path) {
                if line.contains(".unwrap()") || line.contains(".expect(") {
                    violations.push(format!("{}:{line_no}: {}", path.display(), line.trim()));
                }
            }
        }
    }

    assert!(
        violations.is_empty(),
        "Propagate errors with `?` instead of unwrap/expect:\n{}",
        violations.join("\n")
    );
}

#[test]
fn test_dependency_section_ignores_dev_dependencies() {
    let manifest = "[package]\nname = \"x\"\n\n[dependencies]\nserde = \"1\"\n\n[dev-dependencies]\ntokio = \"1\"\n";
    let deps = dependency_section(manifest);
    assert!(deps.contains("serde"));
    assert!(!deps.contains("tokio"));
}
