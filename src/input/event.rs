use glam::DVec2;

/// Platform-agnostic pointer gesture.
///
/// Hosts translate their raw mouse/touch/wheel events into these and feed
/// them to
/// [`SceneNavigationController::on_gesture_event`](crate::navigation::SceneNavigationController::on_gesture_event).
///
/// # Example
///
/// ```
/// use glam::DVec2;
/// use scene_nav::input::{GestureEvent, MouseButtons};
///
/// let drag = GestureEvent::drag(DVec2::new(100.0, 200.0), MouseButtons::RIGHT);
/// let wheel = GestureEvent::scroll(DVec2::new(100.0, 200.0), 1.0);
/// assert!(wheel.kind.is_zoom());
/// assert!(!drag.kind.is_zoom());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureEvent {
    /// What happened.
    pub kind: GestureKind,
    /// Pointer position in viewport pixels (origin top-left, y down).
    pub view_point: DVec2,
    /// Buttons or touch contacts active during the event.
    pub device: PointerDevice,
    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

/// Gesture event types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureKind {
    /// Button press or first touch.
    Down,
    /// Pointer moved without a drag in progress.
    Move,
    /// Drag in progress.
    Drag,
    /// Drag finished.
    DragEnd,
    /// Two-finger touch drag in progress.
    TwoFingerDrag,
    /// Two-finger touch drag finished.
    TwoFingerDragEnd,
    /// Wheel scroll (positive = zoom in).
    Scroll {
        /// Scroll amount in wheel notches.
        amount: f64,
    },
    /// Touch pinch.
    Pinch {
        /// Relative scale since the previous pinch event (1 = unchanged).
        scale_factor: f64,
    },
    /// Button released without dragging.
    SingleClickUp,
    /// Double click.
    DoubleClick,
}

impl GestureKind {
    /// Scroll or pinch: the only event types a zoom may continue across.
    #[must_use]
    pub fn is_zoom(&self) -> bool {
        matches!(self, Self::Scroll { .. } | Self::Pinch { .. })
    }

    /// A drag (one- or two-finger) in progress.
    #[must_use]
    pub fn is_drag(&self) -> bool {
        matches!(self, Self::Drag | Self::TwoFingerDrag)
    }

    /// The end of a drag.
    #[must_use]
    pub fn is_drag_end(&self) -> bool {
        matches!(self, Self::DragEnd | Self::TwoFingerDragEnd)
    }
}

/// Input device state attached to a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerDevice {
    /// Mouse with the currently pressed buttons.
    Mouse {
        /// Pressed buttons.
        buttons: MouseButtons,
    },
    /// Touch screen with the number of active contacts.
    Touch {
        /// Number of fingers on the screen.
        contacts: u8,
    },
}

impl Default for PointerDevice {
    fn default() -> Self {
        Self::Mouse {
            buttons: MouseButtons::NONE,
        }
    }
}

/// Bit set of pressed mouse buttons, using the DOM `buttons` encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MouseButtons(u8);

impl MouseButtons {
    /// No buttons.
    pub const NONE: Self = Self(0);
    /// Primary (left) button.
    pub const LEFT: Self = Self(1);
    /// Secondary (right) button.
    pub const RIGHT: Self = Self(2);
    /// Middle button (wheel click).
    pub const MIDDLE: Self = Self(4);
    /// Left and right together.
    pub const BOTH: Self = Self(3);

    /// Raw bit mask.
    #[must_use]
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Whether every button in `other` is pressed.
    #[must_use]
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Both sets combined.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// This set without `other`.
    #[must_use]
    pub fn without(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }
}

/// Modifier keys held during an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    /// Shift ("faster").
    pub shift: bool,
    /// Control (first-person rotation, ghost zoom).
    pub ctrl: bool,
    /// Alt ("slower").
    pub alt: bool,
}

impl Modifiers {
    /// Only shift held.
    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
        alt: false,
    };
    /// Only control held.
    pub const CTRL: Self = Self {
        shift: false,
        ctrl: true,
        alt: false,
    };
    /// Only alt held.
    pub const ALT: Self = Self {
        shift: false,
        ctrl: false,
        alt: true,
    };
}

impl GestureEvent {
    /// Generic constructor with no modifiers.
    #[must_use]
    pub fn new(kind: GestureKind, view_point: DVec2, device: PointerDevice) -> Self {
        Self {
            kind,
            view_point,
            device,
            modifiers: Modifiers::default(),
        }
    }

    /// Mouse drag with the given buttons held.
    #[must_use]
    pub fn drag(view_point: DVec2, buttons: MouseButtons) -> Self {
        Self::new(
            GestureKind::Drag,
            view_point,
            PointerDevice::Mouse { buttons },
        )
    }

    /// Touch drag with the given number of contacts.
    #[must_use]
    pub fn touch_drag(view_point: DVec2, contacts: u8) -> Self {
        let kind = if contacts >= 2 {
            GestureKind::TwoFingerDrag
        } else {
            GestureKind::Drag
        };
        Self::new(kind, view_point, PointerDevice::Touch { contacts })
    }

    /// End of a mouse drag.
    #[must_use]
    pub fn drag_end(view_point: DVec2) -> Self {
        Self::new(GestureKind::DragEnd, view_point, PointerDevice::default())
    }

    /// Wheel scroll.
    #[must_use]
    pub fn scroll(view_point: DVec2, amount: f64) -> Self {
        Self::new(
            GestureKind::Scroll { amount },
            view_point,
            PointerDevice::default(),
        )
    }

    /// Touch pinch.
    #[must_use]
    pub fn pinch(view_point: DVec2, scale_factor: f64) -> Self {
        Self::new(
            GestureKind::Pinch { scale_factor },
            view_point,
            PointerDevice::Touch { contacts: 2 },
        )
    }

    /// Click release without drag.
    #[must_use]
    pub fn click_up(view_point: DVec2) -> Self {
        Self::new(
            GestureKind::SingleClickUp,
            view_point,
            PointerDevice::default(),
        )
    }

    /// Pointer move without buttons.
    #[must_use]
    pub fn pointer_move(view_point: DVec2) -> Self {
        Self::new(GestureKind::Move, view_point, PointerDevice::default())
    }

    /// Same event with the given modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButtons {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => Self::LEFT,
            winit::event::MouseButton::Right => Self::RIGHT,
            winit::event::MouseButton::Middle => Self::MIDDLE,
            _ => Self::NONE,
        }
    }
}

#[cfg(feature = "viewer")]
impl From<winit::keyboard::ModifiersState> for Modifiers {
    fn from(state: winit::keyboard::ModifiersState) -> Self {
        Self {
            shift: state.shift_key(),
            ctrl: state.control_key(),
            alt: state.alt_key(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_set_operations() {
        let both = MouseButtons::LEFT.union(MouseButtons::RIGHT);
        assert_eq!(both, MouseButtons::BOTH);
        assert!(both.contains(MouseButtons::LEFT));
        assert_eq!(both.without(MouseButtons::LEFT), MouseButtons::RIGHT);
        assert_eq!(MouseButtons::NONE.bits(), 0);
    }

    #[test]
    fn touch_drag_kind_follows_contacts() {
        let one = GestureEvent::touch_drag(DVec2::ZERO, 1);
        let two = GestureEvent::touch_drag(DVec2::ZERO, 2);
        assert_eq!(one.kind, GestureKind::Drag);
        assert_eq!(two.kind, GestureKind::TwoFingerDrag);
        assert!(two.kind.is_drag());
        assert!(GestureKind::TwoFingerDragEnd.is_drag_end());
    }
}
