//! End-to-end rebind scenarios driven through the keyboard.
//!
//! Test coverage:
//! - Append, replace-delete and cancel flows
//! - Sensitivity stepping and clamping from the sensitivity tab
//! - Reset shadowing while a rebind awaits input
//! - Close behavior and key event filtering

mod helpers;

use helpers::*;
use rebind_config::{ConfigStore, Key};
use rebind_tui::controller::{KeyOutcome, RebindState, Slot, Tab};

#[test]
fn test_append_new_key_to_selected_action() {
    let store = scenario_store();
    let mut controller = active_controller(&store);

    assert_eq!(controller.handle_key(enter_key()), KeyOutcome::Consumed);
    assert_eq!(
        *controller.rebind_state(),
        RebindState::AwaitingInput {
            action: "move_forward".to_string(),
            slot: Slot::Append,
        }
    );

    assert_eq!(controller.handle_key(key('e')), KeyOutcome::Consumed);
    assert_eq!(key_ids(&store, "move_forward"), vec!["W", "E"]);
    assert_eq!(*controller.rebind_state(), RebindState::Idle);
}

#[test]
fn test_replace_slot_then_delete() {
    let store = scenario_store();
    let mut controller = active_controller(&store);
    controller.handle_key(enter_key());
    controller.handle_key(key('e'));

    controller.begin_replace("move_forward", 1);
    assert_eq!(
        controller.rebind_state().pending(),
        Some(("move_forward", Slot::Index(1)))
    );

    controller.handle_key(delete_key());
    assert_eq!(key_ids(&store, "move_forward"), vec!["W"]);
    assert!(!controller.is_rebinding());
}

#[test]
fn test_cancel_leaves_binding_unchanged() {
    let store = scenario_store();
    let mut controller = active_controller(&store);

    controller.begin_append("jump");
    assert_eq!(controller.handle_key(esc_key()), KeyOutcome::Consumed);

    assert_eq!(*controller.rebind_state(), RebindState::Idle);
    assert_eq!(key_ids(&store, "jump"), vec!["Space"]);
    assert!(controller.is_active(), "Esc during rebind must not close the menu");
}

#[test]
fn test_sensitivity_steps_and_clamps() {
    let store = scenario_store();
    let mut controller = active_controller(&store);
    controller.handle_key(tab_key());
    assert_eq!(controller.current_tab(), Tab::Sensitivity);

    for _ in 0..5 {
        controller.handle_key(right_key());
    }
    assert_eq!(store.sensitivity(), 0.25);

    for _ in 0..100 {
        controller.handle_key(left_key());
    }
    assert_eq!(store.sensitivity(), 0.01);
}

#[test]
fn test_backspace_replaces_nothing_while_appending() {
    let store = scenario_store();
    let mut controller = active_controller(&store);
    controller.begin_append("jump");

    controller.handle_key(backspace_key());

    assert!(controller.is_rebinding());
    assert_eq!(key_ids(&store, "jump"), vec!["Space"]);
}

#[test]
fn test_reset_key_is_captured_during_rebind() {
    let store = scenario_store();
    let mut controller = active_controller(&store);
    store.add_key("jump", Key::new("J"));

    controller.begin_append("jump");
    controller.handle_key(f_key(5));

    assert_eq!(key_ids(&store, "jump"), vec!["Space", "J", "F5"]);
    assert!(!controller.is_rebinding());
}

#[test]
fn test_reset_key_restores_defaults_when_idle() {
    let store = scenario_store();
    let mut controller = active_controller(&store);
    store.add_key("jump", Key::new("J"));
    store.set_sensitivity(1.0);

    assert_eq!(controller.handle_key(f_key(5)), KeyOutcome::Consumed);

    assert_eq!(key_ids(&store, "jump"), vec!["Space"]);
    assert_eq!(store.sensitivity(), 0.20);
}

#[test]
fn test_reserved_key_during_rebind_keeps_waiting() {
    let store = scenario_store();
    let mut controller = active_controller(&store);
    controller.begin_append("jump");

    assert_eq!(controller.handle_key(ctrl_key('z')), KeyOutcome::Ignored);
    assert!(controller.is_rebinding());

    controller.handle_key(key('k'));
    assert_eq!(key_ids(&store, "jump"), vec!["Space", "K"]);
}

#[test]
fn test_release_events_are_ignored() {
    let store = scenario_store();
    let mut controller = active_controller(&store);
    controller.begin_append("jump");

    assert_eq!(controller.handle_key(released(key('k'))), KeyOutcome::Ignored);
    assert!(controller.is_rebinding());
    assert_eq!(key_ids(&store, "jump"), vec!["Space"]);
}

#[test]
fn test_escape_when_idle_closes_menu() {
    let store = scenario_store();
    let mut controller = active_controller(&store);
    controller.handle_key(down_key());

    assert_eq!(controller.handle_key(esc_key()), KeyOutcome::Closed);
    assert!(!controller.is_active());

    // Closed menus ignore further keys
    assert_eq!(controller.handle_key(enter_key()), KeyOutcome::Ignored);
    assert!(!controller.is_rebinding());
}

#[test]
fn test_delete_clears_selected_action_when_idle() {
    let store = scenario_store();
    let mut controller = active_controller(&store);
    controller.handle_key(down_key());
    controller.handle_key(delete_key());

    assert!(key_ids(&store, "jump").is_empty());
    assert_eq!(key_ids(&store, "move_forward"), vec!["W"]);
}

#[test]
fn test_unmapped_keys_are_swallowed() {
    let store = scenario_store();
    let mut controller = active_controller(&store);

    assert_eq!(controller.handle_key(key('x')), KeyOutcome::Ignored);
    assert_eq!(controller.handle_key(up_key()), KeyOutcome::Consumed);
    assert_eq!(controller.selected_index(), 0);
}

#[test]
fn test_shifted_letter_binds_as_chord() {
    let store = scenario_store();
    let mut controller = active_controller(&store);
    controller.begin_append("jump");

    let shift_j = crossterm::event::KeyEvent::new(
        crossterm::event::KeyCode::Char('J'),
        crossterm::event::KeyModifiers::SHIFT,
    );
    controller.handle_key(shift_j);

    assert_eq!(key_ids(&store, "jump"), vec!["Space", "Shift+J"]);
}
