//! View presets for toolbar buttons: top-down, horizon, quarter turns and
//! framing the whole navigation volume.
//!
//! All presets orbit the bounds center and keep the current distance to it,
//! except [`fit_bounds`] which picks a distance that frames the bounds.

use std::time::Duration;

use super::animation::LookAnimation;
use crate::camera::{Camera, LookAt, NavigationBounds, Projection};

/// Pitch of the top-down view; not exactly −90° so yaw stays defined.
pub const TOP_VIEW_PITCH: f64 = -89.0;
/// Pitch of the horizon view.
pub const HORIZON_VIEW_PITCH: f64 = 0.01;

/// Padding applied to the fitted distance.
const FIT_PADDING: f64 = 1.5;

fn orbit(
    camera: &Camera,
    bounds: &NavigationBounds,
    duration: Duration,
    angles: impl FnOnce(&LookAt) -> (f64, f64),
) -> LookAnimation {
    let reference = bounds.center();
    let distance = camera.eye.distance(reference);
    let current = camera.as_look_at(distance);
    let (yaw, pitch) = angles(&current);
    LookAnimation::new(
        LookAt {
            reference,
            yaw,
            pitch,
            distance,
        },
        distance,
        duration,
    )
}

/// Look straight down at the bounds center.
#[must_use]
pub fn top_view(
    camera: &Camera,
    bounds: &NavigationBounds,
    duration: Duration,
) -> LookAnimation {
    orbit(camera, bounds, duration, |look| (look.yaw, TOP_VIEW_PITCH))
}

/// Level the view at the bounds center.
#[must_use]
pub fn horizon_view(
    camera: &Camera,
    bounds: &NavigationBounds,
    duration: Duration,
) -> LookAnimation {
    orbit(camera, bounds, duration, |look| (look.yaw, HORIZON_VIEW_PITCH))
}

/// Snap the heading to the nearest quadrant and turn by `quadrants × 90°`
/// (positive is clockwise).
#[must_use]
pub fn turn(
    camera: &Camera,
    bounds: &NavigationBounds,
    quadrants: i32,
    duration: Duration,
) -> LookAnimation {
    orbit(camera, bounds, duration, |look| {
        let yaw = ((look.yaw / 90.0).round() + f64::from(quadrants)) * 90.0;
        (yaw, look.pitch)
    })
}

/// Look at the bounds center from far enough to see all of it, keeping the
/// current heading and tilt.
#[must_use]
pub fn fit_bounds(
    camera: &Camera,
    bounds: &NavigationBounds,
    duration: Duration,
) -> LookAnimation {
    let reference = bounds.center();
    let start_distance = camera.eye.distance(reference);
    let current = camera.as_look_at(start_distance);
    let half_fov = match camera.projection {
        Projection::Perspective { fovy, .. } => (fovy * 0.5).to_radians(),
        Projection::Orthographic { .. } => std::f64::consts::FRAC_PI_4,
    };
    let distance = bounds.bounding_radius() / half_fov.tan() * FIT_PADDING;
    LookAnimation::new(
        LookAt {
            reference,
            yaw: current.yaw,
            pitch: current.pitch,
            distance,
        },
        start_distance,
        duration,
    )
}
