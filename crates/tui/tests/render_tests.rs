//! Rendering tests for the full session view.
//!
//! Test coverage:
//! - World view and footer when the menu is closed
//! - Menu overlay contents for both tabs
//! - Rebind prompt and conflict warnings

mod helpers;

use std::rc::Rc;

use crossterm::event::Event;
use helpers::*;
use ratatui::{Terminal, backend::TestBackend};
use rebind_config::{BindingStore, ConfigStore, Key, factory_catalog};
use rebind_tui::App;

fn draw(app: &App<BindingStore>) -> String {
    let mut terminal = Terminal::new(TestBackend::new(140, 32)).expect("terminal");
    terminal.draw(|f| app.render(f)).expect("draw");
    buffer_to_string(terminal.backend().buffer())
}

fn open_app() -> (Rc<BindingStore>, App<BindingStore>) {
    let store = Rc::new(BindingStore::in_memory(factory_catalog()));
    let mut app = App::new(Rc::clone(&store), 8);
    app.handle_event(Event::Key(esc_key()));
    (store, app)
}

#[test]
fn test_closed_menu_shows_world_and_footer() {
    let store = Rc::new(BindingStore::in_memory(factory_catalog()));
    let mut app = App::new(Rc::clone(&store), 8);
    app.handle_event(Event::Key(key('e')));

    let out = draw(&app);
    assert!(out.contains("World"), "{out}");
    assert!(out.contains("interact (E)"), "{out}");
    assert!(out.contains("Esc:controls"), "{out}");
    assert!(!out.contains("Key Bindings"));
}

#[test]
fn test_open_menu_lists_bindings() {
    let (_store, app) = open_app();

    let out = draw(&app);
    assert!(out.contains("Key Bindings"), "{out}");
    assert!(out.contains("Move Forward"), "{out}");
    assert!(out.contains("W / Up"), "{out}");
    assert!(out.contains("Esc/q:Close"), "{out}");
}

#[test]
fn test_pending_rebind_shows_prompt() {
    let (_store, mut app) = open_app();
    app.handle_event(Event::Key(enter_key()));

    let out = draw(&app);
    assert!(out.contains("Press a key to add to Move Forward"), "{out}");
    assert!(out.contains("[+?]"), "{out}");
}

#[test]
fn test_shared_key_shows_warning() {
    let (store, app) = open_app();
    store.add_key("jump", Key::new("W"));

    let out = draw(&app);
    assert!(out.contains("(shared)"), "{out}");
    assert!(out.contains("W is shared by Move Forward and Jump"), "{out}");
}

#[test]
fn test_sensitivity_tab_shows_value() {
    let (_store, mut app) = open_app();
    app.handle_event(Event::Key(tab_key()));
    app.handle_event(Event::Key(right_key()));

    let out = draw(&app);
    assert!(out.contains("0.21"), "{out}");
    assert!(out.contains("max 2.00"), "{out}");
}
