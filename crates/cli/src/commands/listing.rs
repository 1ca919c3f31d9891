//! Read-only listing commands.

use anyhow::Result;
use rebind_config::{BindingStore, ConfigStore};

use crate::formatters::{
    ConflictOutput, ListingOutput, OutputFormat, format_conflicts, format_listing,
};

pub fn run_list(store: &BindingStore, output: &str) -> Result<()> {
    let format = OutputFormat::from_str(output)?;
    println!("{}", format_listing(&ListingOutput::capture(store), format)?);
    Ok(())
}

/// Print keys shared between actions. Sharing is allowed, so this never fails.
pub fn run_conflicts(store: &BindingStore, output: &str) -> Result<()> {
    let format = OutputFormat::from_str(output)?;
    let conflicts = ConflictOutput::from_errors(&store.conflicts());
    println!("{}", format_conflicts(&conflicts, format)?);
    Ok(())
}
