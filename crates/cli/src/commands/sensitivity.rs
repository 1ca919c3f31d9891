//! Sensitivity commands.

use anyhow::Result;
use rebind_config::{BindingStore, ConfigStore};

use crate::args::SensitivityCommand;
use crate::error::CliError;
use crate::formatters::{SensitivityOutput, format_sensitivity_line};

pub fn run(store: &BindingStore, command: Option<SensitivityCommand>) -> Result<()> {
    match command {
        None => {}
        Some(SensitivityCommand::Set { value }) => {
            if !value.is_finite() {
                return Err(CliError::InvalidSensitivity { value }.into());
            }
            store.set_sensitivity(value);
        }
        Some(SensitivityCommand::Up { steps }) => step(store, steps, 1),
        Some(SensitivityCommand::Down { steps }) => step(store, steps, -1),
    }

    println!(
        "{}",
        format_sensitivity_line(&SensitivityOutput::capture(store))
    );
    Ok(())
}

/// Move `steps` whole steps in `direction`, saving once.
fn step(store: &BindingStore, steps: u32, direction: i32) {
    match steps {
        0 => {}
        1 => {
            store.adjust_sensitivity(direction);
        }
        n => {
            let range = store.sensitivity_range();
            let target = store.sensitivity() + f64::from(direction) * f64::from(n) * range.step();
            store.set_sensitivity(target);
        }
    }
}
