//! Routing tests for the interactive session.
//!
//! Test coverage:
//! - World keys resolve through the store's bindings
//! - The menu owns the keyboard while open
//! - Rebinding in the menu changes what world keys do
//! - Ctrl+C quits from anywhere
//! - Redraw tracking

mod helpers;

use std::rc::Rc;

use crossterm::event::Event;
use helpers::*;
use rebind_config::{BindingStore, ConfigStore, factory_catalog};
use rebind_tui::App;
use rebind_tui::controller::Tab;

fn factory_app() -> (Rc<BindingStore>, App<BindingStore>) {
    let store = Rc::new(BindingStore::in_memory(factory_catalog()));
    let app = App::new(Rc::clone(&store), 8);
    (store, app)
}

fn press(app: &mut App<BindingStore>, event: crossterm::event::KeyEvent) {
    app.handle_event(Event::Key(event));
}

#[test]
fn test_world_keys_trigger_bound_actions() {
    let (_store, mut app) = factory_app();

    press(&mut app, key('w'));
    press(&mut app, key(' '));
    press(&mut app, key('z'));

    let log: Vec<&str> = app.world_log().collect();
    assert_eq!(log, vec!["move_forward (W)", "jump (Space)"]);
}

#[test]
fn test_escape_opens_menu_and_holds_keyboard() {
    let (_store, mut app) = factory_app();

    press(&mut app, esc_key());
    assert!(app.controller().is_active());
    assert!(app.controller().has_input());

    press(&mut app, key('w'));
    assert_eq!(app.world_log().count(), 0, "world must not see menu keys");
}

#[test]
fn test_rebind_in_menu_updates_world_keys() {
    let (store, mut app) = factory_app();

    press(&mut app, esc_key());
    press(&mut app, enter_key());
    press(&mut app, key('k'));
    assert_eq!(key_ids(&store, "move_forward"), vec!["W", "Up", "K"]);

    press(&mut app, esc_key());
    assert!(!app.controller().is_active());

    press(&mut app, key('k'));
    let log: Vec<&str> = app.world_log().collect();
    assert_eq!(log, vec!["move_forward (K)"]);
}

#[test]
fn test_external_store_change_updates_world_keys() {
    let (store, mut app) = factory_app();
    store.clear_keys("jump");

    press(&mut app, key(' '));
    assert_eq!(app.world_log().count(), 0);
}

#[test]
fn test_escape_cancels_rebind_before_closing() {
    let (_store, mut app) = factory_app();

    press(&mut app, esc_key());
    press(&mut app, enter_key());
    assert!(app.controller().is_rebinding());

    press(&mut app, esc_key());
    assert!(app.controller().is_active());
    assert!(!app.controller().is_rebinding());

    press(&mut app, esc_key());
    assert!(!app.controller().is_active());
}

#[test]
fn test_ctrl_c_quits_even_while_rebinding() {
    let (store, mut app) = factory_app();
    press(&mut app, esc_key());
    press(&mut app, enter_key());

    press(&mut app, ctrl_key('c'));

    assert!(app.should_quit());
    assert_eq!(key_ids(&store, "move_forward"), vec!["W", "Up"]);
}

#[test]
fn test_menu_tab_switch_through_app() {
    let (store, mut app) = factory_app();
    press(&mut app, esc_key());
    press(&mut app, tab_key());
    assert_eq!(app.controller().current_tab(), Tab::Sensitivity);

    press(&mut app, right_key());
    assert_eq!(store.sensitivity(), 0.21);
}

#[test]
fn test_dirty_tracking() {
    let (store, mut app) = factory_app();
    assert!(app.take_dirty(), "first frame must draw");
    assert!(!app.take_dirty());

    store.set_sensitivity(0.5);
    assert!(app.take_dirty());

    app.handle_event(Event::Resize(100, 40));
    assert!(app.take_dirty());

    press(&mut app, key('z'));
    assert!(!app.take_dirty(), "unbound world key changes nothing");
}

#[test]
fn test_world_log_is_bounded() {
    let store = Rc::new(BindingStore::in_memory(factory_catalog()));
    let mut app = App::new(Rc::clone(&store), 2);

    for c in ['w', 's', 'a'] {
        press(&mut app, key(c));
    }

    let log: Vec<&str> = app.world_log().collect();
    assert_eq!(log, vec!["move_backward (S)", "move_left (A)"]);
}

#[test]
fn test_dropping_app_removes_store_listener() {
    let (store, app) = factory_app();
    let before = store.listener_count();
    drop(app);
    assert_eq!(store.listener_count(), before - 1);
}
