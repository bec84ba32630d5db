//! Input model: pointer buttons and persistent UI state.
//!
//! The chart has a single gesture, a click. There is no drag state machine;
//! `UiState` only carries what the host last told the engine (selection and
//! read-only flag) plus the hover the engine tracks itself.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::tooth::ToothId;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` code.
    #[must_use]
    pub fn from_dom(code: i16) -> Self {
        match code {
            1 => Self::Middle,
            2 => Self::Secondary,
            _ => Self::Primary,
        }
    }
}

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiState {
    /// The selected tooth, as supplied by the host. At most one.
    pub selected: Option<ToothId>,
    /// The tooth under the pointer, if any.
    pub hovered: Option<ToothId>,
    /// When set, clicks are swallowed and never reported.
    pub read_only: bool,
}

impl UiState {
    /// Whether a click on a tooth should be reported to the host.
    #[must_use]
    pub fn accepts_clicks(&self) -> bool {
        !self.read_only
    }
}
