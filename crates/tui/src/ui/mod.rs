//! Rendering for the controls menu.
//!
//! Responsibilities:
//! - Project controller and store state into a `MenuSnapshot`.
//! - Draw a snapshot with ratatui.
//!
//! Does NOT handle:
//! - Input or state mutation.
//!
//! Invariants:
//! - The renderer sees only snapshots, never live state.

pub mod render;
pub mod snapshot;
pub mod theme;

pub use render::render_menu;
pub use snapshot::{BindingRow, MenuSnapshot};
pub use theme::MenuTheme;
