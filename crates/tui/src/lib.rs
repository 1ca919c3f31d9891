//! Rebind TUI Library
//!
//! This library provides the controls menu controller, its input handling,
//! and the ratatui view for the rebind terminal interface.
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use rebind_config::{BindingStore, ConfigStore, factory_catalog};
//! use rebind_tui::controller::{BindingController, InputSignal};
//! use rebind_tui::input::InputChannel;
//! use rebind_config::Key;
//!
//! let store = Rc::new(BindingStore::in_memory(factory_catalog()));
//! let mut controller = BindingController::new(Rc::clone(&store), InputChannel::new());
//! controller.activate();
//! controller.begin_append("jump");
//! controller.handle_signal(InputSignal::Key(Key::new("J")));
//! assert_eq!(store.keys("jump").len(), 2);
//! ```

pub mod action;
pub mod cli;
pub mod controller;
pub mod input;
pub mod runtime;
pub mod ui;

// Re-export commonly used types at the crate root
pub use action::MenuAction;
pub use controller::{BindingController, InputSignal, KeyOutcome, RebindState, Slot, Tab};
pub use input::{InputChannel, InputGrant, WorldKeymap};
pub use runtime::App;
pub use ui::{MenuSnapshot, render_menu};
