//! Bounded camera motion primitives.
//!
//! Every eye translation in the crate goes through [`move_eye`], so bounds
//! enforcement lives in exactly one place. Rotations change orientation
//! around the eye or around a pivot; a pivot rotation that would carry the
//! eye outside the bounds is dropped as a whole.

use std::time::Duration;

use glam::{DQuat, DVec2, DVec3};

use super::animation::MoveAnimation;
use crate::camera::{Camera, NavigationBounds};
use crate::util::angle::{clamp_pitch, wrap_degrees};

/// Minimum length below which a direction is considered degenerate.
const EPSILON: f64 = 1e-9;

/// What [`move_eye`] does with a candidate eye outside the bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EyePolicy {
    /// Keep the current eye.
    Reject,
    /// Move to the closest point inside the bounds.
    Clamp,
}

/// Move the camera eye to `candidate`, honoring `bounds`.
///
/// Returns `true` when the eye actually changed.
pub fn move_eye(
    camera: &mut Camera,
    bounds: &NavigationBounds,
    candidate: DVec3,
    policy: EyePolicy,
) -> bool {
    let target = match policy {
        EyePolicy::Reject if !bounds.contains(candidate) => return false,
        EyePolicy::Reject => candidate,
        EyePolicy::Clamp => bounds.clamp(candidate),
    };
    if target == camera.eye {
        return false;
    }
    camera.eye = target;
    true
}

/// Forward and right directions projected onto the local horizontal plane.
///
/// When the camera looks straight up or down, the screen-up vector stands
/// in for the forward direction. Returns `None` if both are vertical.
#[must_use]
pub fn horizontal_axes(camera: &Camera) -> Option<(DVec3, DVec3)> {
    let vertical = camera.vertical_up();
    let right = camera
        .forward
        .cross(vertical)
        .try_normalize()
        .or_else(|| camera.up.cross(vertical).try_normalize())?;
    let forward = vertical.cross(right).try_normalize()?;
    Some((forward, right))
}

/// Turns pointer drags into camera rotations.
#[derive(Debug, Clone)]
pub struct RotationSupport {
    /// Rotation per dragged pixel, in degrees.
    pub degrees_per_pixel: f64,
    last: Option<DVec2>,
}

impl RotationSupport {
    /// Rotation support with the given drag sensitivity.
    #[must_use]
    pub fn new(degrees_per_pixel: f64) -> Self {
        Self {
            degrees_per_pixel,
            last: None,
        }
    }

    /// Forget the previous pointer position; the next drag starts afresh.
    pub fn reset(&mut self) {
        self.last = None;
    }

    fn drag_delta(&mut self, view_point: DVec2) -> Option<DVec2> {
        let previous = self.last.replace(view_point)?;
        let delta = view_point - previous;
        (delta != DVec2::ZERO).then_some(delta)
    }

    /// Look around from the eye: horizontal drags turn, vertical drags tilt.
    ///
    /// The scene follows the pointer, so dragging right turns left.
    pub fn rotate_around_eye(
        &mut self,
        camera: &mut Camera,
        view_point: DVec2,
    ) -> bool {
        let Some(delta) = self.drag_delta(view_point) else {
            return false;
        };
        let mut look = camera.as_look_from();
        look.yaw = wrap_degrees(look.yaw - delta.x * self.degrees_per_pixel);
        look.pitch = clamp_pitch(look.pitch + delta.y * self.degrees_per_pixel);
        camera.look_from(&look);
        true
    }

    /// Orbit the camera around `pivot`.
    ///
    /// Yaw turns about the local vertical at the pivot, pitch about the
    /// camera's right axis. The result is discarded if the eye would leave
    /// `bounds`.
    pub fn rotate_around_pivot(
        &mut self,
        camera: &mut Camera,
        bounds: &NavigationBounds,
        pivot: DVec3,
        view_point: DVec2,
    ) -> bool {
        let Some(delta) = self.drag_delta(view_point) else {
            return false;
        };
        if camera.eye.distance(pivot) < EPSILON {
            let mut look = camera.as_look_from();
            look.yaw = wrap_degrees(look.yaw - delta.x * self.degrees_per_pixel);
            look.pitch =
                clamp_pitch(look.pitch - delta.y * self.degrees_per_pixel);
            camera.look_from(&look);
            return true;
        }

        let yaw_delta = -delta.x * self.degrees_per_pixel;
        let current_pitch = camera.as_look_from().pitch;
        let pitch_delta = clamp_pitch(
            current_pitch - delta.y * self.degrees_per_pixel,
        ) - current_pitch;

        // Positive yaw is clockwise seen from above.
        let vertical = camera.world.vertical_up(pivot);
        let yaw = DQuat::from_axis_angle(vertical, -yaw_delta.to_radians());
        let mut forward = yaw * camera.forward;
        let mut up = yaw * camera.up;
        let mut offset = yaw * (camera.eye - pivot);

        if let Some(right) = forward.cross(up).try_normalize() {
            let pitch = DQuat::from_axis_angle(right, pitch_delta.to_radians());
            forward = pitch * forward;
            up = pitch * up;
            offset = pitch * offset;
        }

        let eye = pivot + offset;
        if !bounds.contains(eye) {
            return false;
        }
        camera.eye = eye;
        camera.set_orientation(forward, up);
        true
    }
}

/// Translates the camera so the grabbed point follows the pointer.
#[derive(Debug, Clone, Default)]
pub struct PanSupport {
    last: Option<DVec2>,
}

impl PanSupport {
    /// Fresh pan support.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous pointer position.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Pan over the plane through `anchor` orthogonal to the view direction.
    ///
    /// The eye is clamped to `bounds`.
    pub fn pan_over_orthogonal_plane(
        &mut self,
        camera: &mut Camera,
        bounds: &NavigationBounds,
        anchor: DVec3,
        view_point: DVec2,
    ) -> bool {
        let Some(previous) = self.last.replace(view_point) else {
            return false;
        };
        if previous == view_point {
            return false;
        }
        let normal = camera.forward;
        let (Some(from), Some(to)) = (
            intersect_plane(camera, previous, anchor, normal),
            intersect_plane(camera, view_point, anchor, normal),
        ) else {
            return false;
        };
        let candidate = camera.eye + (from - to);
        move_eye(camera, bounds, candidate, EyePolicy::Clamp)
    }
}

fn intersect_plane(
    camera: &Camera,
    view_point: DVec2,
    origin: DVec3,
    normal: DVec3,
) -> Option<DVec3> {
    let ray = camera.view_ray(view_point);
    let denom = ray.direction.dot(normal);
    if denom.abs() < EPSILON {
        return None;
    }
    let t = (origin - ray.origin).dot(normal) / denom;
    Some(ray.at(t))
}

/// Parameters of a single zoom step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomRequest {
    /// Return the step as an animation instead of applying it.
    pub flying: bool,
    /// Multiplier on the zoom factor (modifier keys).
    pub speed_rate: f64,
    /// Allow passing through the anchor.
    pub ghost_mode: bool,
    /// Duration of the animation when `flying`.
    pub duration: Duration,
}

impl Default for ZoomRequest {
    fn default() -> Self {
        Self {
            flying: false,
            speed_rate: 1.0,
            ghost_mode: false,
            duration: Duration::from_millis(400),
        }
    }
}

/// Result of a zoom step.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ZoomOutcome {
    /// The eye was applied to the camera and changed.
    pub moved: bool,
    /// The step carried the eye through the anchor (ghost mode only).
    pub surface_crossed: bool,
    /// The eye translation to animate, for flying zooms.
    pub animation: Option<MoveAnimation>,
}

/// Moves the eye toward or away from an anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomSupport {
    /// Closest the eye may get to the anchor outside ghost mode.
    pub min_distance: f64,
}

impl Default for ZoomSupport {
    fn default() -> Self {
        Self { min_distance: 0.5 }
    }
}

impl ZoomSupport {
    /// Move toward `anchor` by `factor × speed_rate` of the current distance
    /// (away from it for negative factors). The eye is clamped to `bounds`.
    pub fn zoom_to_anchor(
        &self,
        camera: &mut Camera,
        bounds: &NavigationBounds,
        anchor: DVec3,
        factor: f64,
        request: ZoomRequest,
    ) -> ZoomOutcome {
        let to_anchor = anchor - camera.eye;
        let distance = to_anchor.length();
        let direction = to_anchor.try_normalize().unwrap_or(camera.forward);

        let mut step = factor * request.speed_rate * distance.max(self.min_distance);
        let mut surface_crossed = false;
        if step > 0.0 {
            if request.ghost_mode {
                surface_crossed = step >= distance;
            } else {
                step = step.min(distance - self.min_distance).max(0.0);
            }
        }
        if step == 0.0 {
            return ZoomOutcome::default();
        }

        let target = bounds.clamp(camera.eye + direction * step);
        if request.flying {
            log::debug!("animated zoom to {target}");
            return ZoomOutcome {
                moved: false,
                surface_crossed,
                animation: Some(MoveAnimation::new(
                    camera.eye,
                    target,
                    request.duration,
                )),
            };
        }
        ZoomOutcome {
            moved: move_eye(camera, bounds, target, EyePolicy::Clamp),
            surface_crossed,
            animation: None,
        }
    }
}
