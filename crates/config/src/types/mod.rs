//! Configuration types for rebind.
//!
//! Responsibilities:
//! - Define the binding data model: actions, keys, and the sensitivity range.
//!
//! Does NOT handle:
//! - Key string parsing (see `keybind` module at crate root).
//! - Mutation or notification (see `store`).
//! - Persistence (see `persistence`).

mod action;
mod key;
mod sensitivity;

pub use action::{Action, ActionCatalog};
pub use key::Key;
pub use sensitivity::SensitivityRange;
