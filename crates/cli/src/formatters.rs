//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Project store state into serializable output structures.
//! - Render those structures as JSON or as aligned tables.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings).
//!
//! Invariants:
//! - JSON output is always a valid document, even when empty (`[]`).
//! - Table output prints a human message instead of an empty table.

use anyhow::Result;
use rebind_config::{ConfigStore, KeybindError};
use serde::Serialize;

use crate::error::CliError;

/// Placeholder for an action with no keys in table output.
const UNBOUND: &str = "-";

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self, CliError> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            _ => Err(CliError::InvalidOutputFormat {
                format: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ActionOutput {
    pub id: String,
    pub label: String,
    pub keys: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SensitivityOutput {
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

#[derive(Debug, Serialize)]
pub struct ListingOutput {
    pub actions: Vec<ActionOutput>,
    pub sensitivity: SensitivityOutput,
}

#[derive(Debug, Serialize)]
pub struct ConflictOutput {
    pub key: String,
    pub first: String,
    pub second: String,
}

impl ListingOutput {
    pub fn capture<S: ConfigStore + ?Sized>(store: &S) -> Self {
        let actions = store
            .actions()
            .into_iter()
            .map(|action| ActionOutput {
                keys: store
                    .keys(action.id())
                    .iter()
                    .map(|k| k.id().to_string())
                    .collect(),
                id: action.id().to_string(),
                label: action.label().to_string(),
            })
            .collect();
        Self {
            actions,
            sensitivity: SensitivityOutput::capture(store),
        }
    }
}

impl SensitivityOutput {
    pub fn capture<S: ConfigStore + ?Sized>(store: &S) -> Self {
        let range = store.sensitivity_range();
        Self {
            value: store.sensitivity(),
            min: range.min(),
            max: range.max(),
            step: range.step(),
        }
    }
}

impl ConflictOutput {
    pub fn from_errors(errors: &[KeybindError]) -> Vec<Self> {
        errors
            .iter()
            .filter_map(|err| match err {
                KeybindError::Conflict {
                    key,
                    action1,
                    action2,
                } => Some(Self {
                    key: key.clone(),
                    first: action1.clone(),
                    second: action2.clone(),
                }),
                _ => None,
            })
            .collect()
    }
}

pub fn format_listing(listing: &ListingOutput, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(listing)?),
        OutputFormat::Table => {
            let id_width = column_width(listing.actions.iter().map(|a| a.id.as_str()), "Action");
            let label_width =
                column_width(listing.actions.iter().map(|a| a.label.as_str()), "Label");

            let mut out = format!(
                "{:<id_width$}  {:<label_width$}  Keys\n",
                "Action", "Label"
            );
            out.push_str(&"-".repeat(id_width + label_width + 10));
            out.push('\n');
            for action in &listing.actions {
                let keys = if action.keys.is_empty() {
                    UNBOUND.to_string()
                } else {
                    action.keys.join(", ")
                };
                out.push_str(&format!(
                    "{:<id_width$}  {:<label_width$}  {}\n",
                    action.id, action.label, keys
                ));
            }
            out.push('\n');
            out.push_str(&format_sensitivity_line(&listing.sensitivity));
            Ok(out)
        }
    }
}

pub fn format_sensitivity_line(sensitivity: &SensitivityOutput) -> String {
    format!(
        "Sensitivity: {:.2} (min {:.2}, max {:.2}, step {:.2})",
        sensitivity.value, sensitivity.min, sensitivity.max, sensitivity.step
    )
}

pub fn format_conflicts(conflicts: &[ConflictOutput], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(conflicts)?),
        OutputFormat::Table => {
            if conflicts.is_empty() {
                return Ok("No conflicts found.".to_string());
            }
            let lines: Vec<String> = conflicts
                .iter()
                .map(|c| format!("{} is bound to both {} and {}", c.key, c.first, c.second))
                .collect();
            Ok(lines.join("\n"))
        }
    }
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>, header: &str) -> usize {
    values
        .map(|v| v.chars().count())
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(header.len())
}
