//! Keyboard input for the controls menu and the game world.
//!
//! Responsibilities:
//! - Arbitrate keyboard ownership between the menu and the world.
//! - Resolve menu keys into `MenuAction`s and world keys into action ids.
//! - Convert between crossterm events and configured keys.
//!
//! Non-responsibilities:
//! - Mutating controller or store state (callers act on resolved values).
//!
//! Invariants:
//! - Resolution is pure: the same event and state always resolve the same way.

pub mod channel;
pub mod keymap;
pub mod keys;
pub mod world;

pub use channel::{InputChannel, InputGrant};
pub use keys::{key_from_event, key_to_event};
pub use world::WorldKeymap;
