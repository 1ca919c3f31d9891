//! Test helpers for TUI testing.
//!
//! Provides utility functions for simulating keyboard input and creating
//! test fixtures for the controls menu.

#![allow(dead_code)]

use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rebind_config::{ActionCatalog, BindingStore, ConfigStore};
use rebind_tui::controller::BindingController;
use rebind_tui::input::InputChannel;

/// Create a character key event.
pub fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

/// Create an Enter key event.
pub fn enter_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)
}

/// Create an Escape key event.
pub fn esc_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)
}

/// Create a Down arrow key event.
pub fn down_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)
}

/// Create an Up arrow key event.
pub fn up_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)
}

/// Create a Left arrow key event.
pub fn left_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Left, KeyModifiers::NONE)
}

/// Create a Right arrow key event.
pub fn right_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Right, KeyModifiers::NONE)
}

/// Create a Tab key event.
pub fn tab_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)
}

/// Create a Backspace key event.
pub fn backspace_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)
}

/// Create a Delete key event.
pub fn delete_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Delete, KeyModifiers::NONE)
}

/// Create a function key event.
pub fn f_key(n: u8) -> KeyEvent {
    KeyEvent::new(KeyCode::F(n), KeyModifiers::NONE)
}

/// Create a Ctrl+char key event.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Turn a press into the matching release event.
pub fn released(mut event: KeyEvent) -> KeyEvent {
    event.kind = KeyEventKind::Release;
    event
}

/// Store with `move_forward: [W]` and `jump: [Space]`.
pub fn scenario_store() -> Rc<BindingStore> {
    Rc::new(BindingStore::in_memory(
        ActionCatalog::new()
            .with("move_forward", "Move Forward", &["W"])
            .with("jump", "Jump", &["Space"]),
    ))
}

/// An activated controller over `store` with its own input channel.
pub fn active_controller(store: &Rc<BindingStore>) -> BindingController<BindingStore> {
    let mut controller = BindingController::new(Rc::clone(store), InputChannel::new());
    controller.activate();
    controller
}

/// Key ids bound to `action`, for compact assertions.
pub fn key_ids(store: &BindingStore, action: &str) -> Vec<String> {
    store
        .keys(action)
        .iter()
        .map(|k| k.id().to_string())
        .collect()
}

/// Convert a ratatui Buffer to a string for content assertions.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut output = String::new();

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            output.push_str(cell.symbol());
        }
        if y < area.bottom() - 1 {
            output.push('\n');
        }
    }

    output
}
