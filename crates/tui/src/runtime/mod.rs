//! Runtime components for the TUI application.
//!
//! This module contains the runtime infrastructure for the TUI:
//! - Store construction from CLI and environment (`config`)
//! - Event routing and the top-level view (`app`)
//! - Terminal restoration (`terminal`)
//!
//! Does NOT handle:
//! - Menu state or rendering details (see `controller` and `ui`).
//!
//! Invariants:
//! - Everything runs on one thread; shared state uses `Rc` and `Cell`.

pub mod app;
pub mod config;
pub mod terminal;

pub use app::App;
