//! Factory controls configuration.
//!
//! The catalog below is the single source of truth for which actions exist,
//! their display order, and the keys a reset restores.

use crate::constants::DEFAULT_SENSITIVITY;
use crate::types::ActionCatalog;

/// The built-in action catalog with factory key assignments.
pub fn factory_catalog() -> ActionCatalog {
    ActionCatalog::new()
        .with("move_forward", "Move Forward", &["W", "Up"])
        .with("move_backward", "Move Backward", &["S", "Down"])
        .with("move_left", "Strafe Left", &["A", "Left"])
        .with("move_right", "Strafe Right", &["D", "Right"])
        .with("jump", "Jump", &["Space"])
        .with("crouch", "Crouch", &["C"])
        .with("sprint", "Sprint", &["X"])
        .with("interact", "Interact", &["E"])
        .with("reload", "Reload", &["R"])
        .with("toggle_map", "Toggle Map", &["M"])
        .with("pause", "Pause Menu", &["P"])
}

/// Factory sensitivity value.
pub fn factory_sensitivity() -> f64 {
    DEFAULT_SENSITIVITY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keybind::find_conflicts;

    #[test]
    fn test_factory_catalog_has_no_conflicts() {
        let catalog = factory_catalog();
        let actions = catalog.actions();
        let conflicts = find_conflicts(
            actions
                .iter()
                .enumerate()
                .map(|(i, a)| (a.id(), catalog.defaults_at(i))),
        );
        assert!(conflicts.is_empty(), "unexpected conflicts: {conflicts:?}");
    }

    #[test]
    fn test_factory_catalog_has_no_reserved_keys() {
        let catalog = factory_catalog();
        for i in 0..catalog.len() {
            assert!(catalog.defaults_at(i).iter().all(|k| !k.is_reserved()));
        }
    }
}
