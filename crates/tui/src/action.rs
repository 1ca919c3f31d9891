//! Menu actions produced by the keymap.
//!
//! Responsibilities:
//! - Name every operation a key can trigger while the controls menu is idle.
//!
//! Does NOT handle:
//! - Rebind capture: while a rebind awaits input, keys become
//!   `InputSignal`s instead (see `controller`).

/// An operation requested from the controls menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    SelectPrevious,
    SelectNext,
    SwitchTab,
    /// Begin appending a key to the selected action.
    Confirm,
    /// Move sensitivity one step; the sign gives the direction.
    AdjustSensitivity(i32),
    ResetDefaults,
    /// Remove every key from the selected action.
    ClearSelected,
    Close,
}
