use serde::{Deserialize, Serialize};

use super::event::Modifiers;

/// Direction a held navigation key moves the camera in.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// KeyW = "forward"
/// KeyE = "up"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavKey {
    /// Move forward.
    Forward,
    /// Move backward.
    Back,
    /// Strafe left.
    Left,
    /// Strafe right.
    Right,
    /// Rise.
    Up,
    /// Descend.
    Down,
}

/// Key transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventKind {
    /// Key pressed (including auto-repeat).
    Down,
    /// Key released.
    Up,
}

/// Element a key event was aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventTarget {
    /// The 3D view or anything that is not a text field.
    #[default]
    View,
    /// A text input or text area; never treated as navigation.
    TextInput,
}

/// Platform-agnostic key event.
///
/// `code` is the physical key in the `winit::keyboard::KeyCode` debug format
/// (`"KeyW"`, `"ArrowUp"`, `"Space"`), so bindings follow key position
/// rather than the printed character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// Physical key code.
    pub code: String,
    /// Press or release.
    pub kind: KeyEventKind,
    /// Modifiers held during the event.
    pub modifiers: Modifiers,
    /// Element the event was aimed at.
    pub target: EventTarget,
}

impl KeyEvent {
    /// Key press on the view.
    #[must_use]
    pub fn down(code: &str) -> Self {
        Self {
            code: code.to_owned(),
            kind: KeyEventKind::Down,
            modifiers: Modifiers::default(),
            target: EventTarget::View,
        }
    }

    /// Key release on the view.
    #[must_use]
    pub fn up(code: &str) -> Self {
        Self {
            kind: KeyEventKind::Up,
            ..Self::down(code)
        }
    }

    /// Same event with the given modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Same event aimed at a text field.
    #[must_use]
    pub fn on_text_input(mut self) -> Self {
        self.target = EventTarget::TextInput;
        self
    }
}

/// Name of a winit physical key in the format [`KeyEvent::code`] expects.
#[cfg(feature = "viewer")]
#[must_use]
pub fn key_code_name(code: winit::keyboard::KeyCode) -> String {
    format!("{code:?}")
}
