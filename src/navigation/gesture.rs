//! Gesture classification: raw pointer event + previous mode → next mode.

use super::mode::{AllowedModes, NavigationMode};
use crate::input::{GestureEvent, GestureKind, MouseButtons, PointerDevice};

/// Which buttons or how many fingers drive a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonCategory {
    /// Primary button or one finger.
    Left,
    /// Secondary button.
    Right,
    /// Primary and secondary together, or two fingers.
    Both,
    /// Anything else.
    None,
}

impl ButtonCategory {
    /// Categorize the device state of a drag.
    #[must_use]
    pub fn of(device: PointerDevice) -> Self {
        match device {
            PointerDevice::Mouse { buttons } => match buttons {
                MouseButtons::LEFT => Self::Left,
                MouseButtons::RIGHT => Self::Right,
                MouseButtons::BOTH => Self::Both,
                _ => Self::None,
            },
            PointerDevice::Touch { contacts } => match contacts {
                1 => Self::Left,
                2 => Self::Both,
                _ => Self::None,
            },
        }
    }
}

/// Decide which navigation mode should be active after `event`.
///
/// Rules, first match wins:
/// 1. a zoom only continues across scroll/pinch events;
/// 2. a drag end returns to [`NavigationMode::None`];
/// 3. a drag maps its button category to rotate/pan (swapped by
///    `invert_buttons`); ctrl, or no modifier at all when
///    `requires_modifier_for_first_person` is false, turns rotation into
///    first-person rotation if that is allowed; two buttons or two fingers
///    always mean first-person rotation;
/// 4. scroll/pinch zooms;
/// 5. a click release zooms on click;
/// 6. anything else is [`NavigationMode::None`].
///
/// A mode outside `allowed` degrades to [`NavigationMode::None`].
#[must_use]
pub fn classify(
    event: &GestureEvent,
    previous: NavigationMode,
    allowed: AllowedModes,
    requires_modifier_for_first_person: bool,
    invert_buttons: bool,
) -> NavigationMode {
    let kind = event.kind;

    if previous == NavigationMode::Zoom && !kind.is_zoom() {
        return NavigationMode::None;
    }

    if kind.is_drag_end() {
        return NavigationMode::None;
    }

    if kind.is_drag() {
        let prioritise_first_person = allowed
            .contains(NavigationMode::FirstPersonRotation)
            && (!requires_modifier_for_first_person || event.modifiers.ctrl);
        let rotation = if prioritise_first_person {
            NavigationMode::FirstPersonRotation
        } else {
            NavigationMode::Rotation
        };

        let mode = match (ButtonCategory::of(event.device), invert_buttons) {
            (ButtonCategory::Left, false) | (ButtonCategory::Right, true) => {
                rotation
            }
            (ButtonCategory::Right, false) | (ButtonCategory::Left, true) => {
                NavigationMode::Pan
            }
            (ButtonCategory::Both, _) => NavigationMode::FirstPersonRotation,
            (ButtonCategory::None, _) => NavigationMode::None,
        };

        return if allowed.contains(mode) {
            mode
        } else {
            NavigationMode::None
        };
    }

    if kind.is_zoom() {
        return if allowed.contains(NavigationMode::Zoom) {
            NavigationMode::Zoom
        } else {
            NavigationMode::None
        };
    }

    if kind == GestureKind::SingleClickUp
        && allowed.contains(NavigationMode::ZoomOnClick)
    {
        return NavigationMode::ZoomOnClick;
    }

    NavigationMode::None
}

/// Speed multiplier from the event's modifiers: 2 with shift, 0.5 with alt,
/// 1 with neither or both.
#[must_use]
pub fn speed_multiplier(event: &GestureEvent) -> f64 {
    match (event.modifiers.shift, event.modifiers.alt) {
        (true, false) => 2.0,
        (false, true) => 0.5,
        _ => 1.0,
    }
}

/// Zoom amount for the event: positive zooms in, negative zooms out.
///
/// Wheel notches are scaled by `scroll_multiplier`; a pinch contributes
/// `scale_factor − 1` regardless of it. Other events yield 0.
#[must_use]
pub fn zoom_factor(event: &GestureEvent, scroll_multiplier: f64) -> f64 {
    match event.kind {
        GestureKind::Scroll { amount } => amount * scroll_multiplier,
        GestureKind::Pinch { scale_factor } => scale_factor - 1.0,
        _ => 0.0,
    }
}
