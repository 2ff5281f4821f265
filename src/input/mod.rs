//! Input types: pointer gestures, key events and focus changes, in a
//! platform-agnostic form the navigation controller consumes.

/// Pointer, touch and wheel gestures.
pub mod event;
/// Key events and navigation key directions.
pub mod keyboard;

pub use event::{
    GestureEvent, GestureKind, Modifiers, MouseButtons, PointerDevice,
};
pub use keyboard::{EventTarget, KeyEvent, KeyEventKind, NavKey};

/// Whether an input event was consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The event changed navigation state.
    Handled,
    /// The event was not meant for navigation, or changed nothing.
    Ignored,
}

impl EventResult {
    /// `true` for [`EventResult::Handled`].
    #[must_use]
    pub fn is_handled(self) -> bool {
        self == Self::Handled
    }
}

/// Window-level focus changes that release held input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusEvent {
    /// The window lost focus.
    WindowBlur,
    /// The page/tab visibility changed.
    VisibilityChanged {
        /// Whether the page is now hidden.
        hidden: bool,
    },
}
