//! Whole-file commands: reset and path.

use std::path::Path;

use anyhow::Result;
use rebind_config::{BindingStore, ConfigStore};

pub fn run_reset(store: &BindingStore) -> Result<()> {
    store.reset_to_defaults();
    println!("Restored factory controls");
    Ok(())
}

pub fn run_path(path: &Path) -> Result<()> {
    println!("{}", path.display());
    Ok(())
}
