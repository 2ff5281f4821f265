use glam::{DVec2, DVec3};

use super::frame::{LocalFrame, WorldFrame};
use super::near_plane::near_plane_for_height;
use crate::util::angle::wrap_degrees;

/// Projection parameters of a camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Perspective projection; the only kind navigation accepts.
    Perspective {
        /// Vertical field of view in degrees.
        fovy: f64,
        /// Near clipping plane distance.
        near: f64,
        /// Far clipping plane distance.
        far: f64,
    },
    /// Orthographic projection.
    Orthographic {
        /// Visible world height.
        height: f64,
        /// Near clipping plane distance.
        near: f64,
        /// Far clipping plane distance.
        far: f64,
    },
}

impl Projection {
    /// Whether the projection has yaw/pitch/distance look-at semantics.
    #[must_use]
    pub fn is_perspective(&self) -> bool {
        matches!(self, Self::Perspective { .. })
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::Perspective {
            fovy: 60.0,
            near: 0.1,
            far: 100_000.0,
        }
    }
}

/// A world-space ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ray origin.
    pub origin: DVec3,
    /// Unit direction.
    pub direction: DVec3,
}

impl Ray {
    /// Point at parameter `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }
}

/// Camera orientation as seen from a reference point: yaw and pitch of the
/// view direction plus the distance from the eye to `reference`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookAt {
    /// The point being looked at.
    pub reference: DVec3,
    /// Heading in degrees, clockwise from north.
    pub yaw: f64,
    /// Elevation in degrees, positive upwards.
    pub pitch: f64,
    /// Eye-to-reference distance.
    pub distance: f64,
}

/// Camera orientation anchored at the eye: yaw, pitch and roll in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookFrom {
    /// Eye position.
    pub eye: DVec3,
    /// Heading in degrees, clockwise from north.
    pub yaw: f64,
    /// Elevation in degrees, positive upwards.
    pub pitch: f64,
    /// Rotation about the view direction in degrees.
    pub roll: f64,
}

/// Perspective camera defined by eye position, view direction and up vector.
///
/// `forward` and `up` are kept unit length and orthogonal.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: DVec3,
    /// Unit view direction.
    pub forward: DVec3,
    /// Unit up vector, orthogonal to `forward`.
    pub up: DVec3,
    /// Projection parameters.
    pub projection: Projection,
    /// Viewport size in pixels.
    pub viewport: DVec2,
    /// World shape the camera lives in.
    pub world: WorldFrame,
}

impl Camera {
    /// Create a perspective camera with a 60° field of view and a 1280×720
    /// viewport in a flat world.
    #[must_use]
    pub fn new(eye: DVec3, forward: DVec3, up: DVec3) -> Self {
        let mut camera = Self {
            eye,
            forward: DVec3::Y,
            up: DVec3::Z,
            projection: Projection::default(),
            viewport: DVec2::new(1280.0, 720.0),
            world: WorldFrame::Flat,
        };
        camera.set_orientation(forward, up);
        camera
    }

    /// Replace the projection.
    #[must_use]
    pub fn with_projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }

    /// Replace the viewport size.
    #[must_use]
    pub fn with_viewport(mut self, width: f64, height: f64) -> Self {
        self.viewport = DVec2::new(width, height);
        self
    }

    /// Replace the world frame.
    #[must_use]
    pub fn with_world(mut self, world: WorldFrame) -> Self {
        self.world = world;
        self
    }

    /// Set forward/up, re-orthogonalizing `up` against `forward`.
    ///
    /// Degenerate input (zero or parallel vectors) leaves the orientation
    /// unchanged.
    pub fn set_orientation(&mut self, forward: DVec3, up: DVec3) {
        let Some(forward) = forward.try_normalize() else {
            return;
        };
        let Some(right) = forward.cross(up).try_normalize() else {
            return;
        };
        self.forward = forward;
        self.up = right.cross(forward);
    }

    /// Unit right vector (`forward × up`).
    #[must_use]
    pub fn right(&self) -> DVec3 {
        self.forward.cross(self.up).normalize_or_zero()
    }

    /// True local vertical at the eye.
    #[must_use]
    pub fn vertical_up(&self) -> DVec3 {
        self.world.vertical_up(self.eye)
    }

    /// Height of the eye above the ground.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.world.height(self.eye)
    }

    /// World-space ray through the given pixel (origin top-left, y down).
    #[must_use]
    pub fn view_ray(&self, view_point: DVec2) -> Ray {
        let width = self.viewport.x.max(1.0);
        let height = self.viewport.y.max(1.0);
        let ndc_x = 2.0 * view_point.x / width - 1.0;
        let ndc_y = 1.0 - 2.0 * view_point.y / height;
        let right = self.right();

        match self.projection {
            Projection::Perspective { fovy, .. } => {
                let tan_half = (fovy.to_radians() * 0.5).tan();
                let aspect = width / height;
                let direction = (self.forward
                    + right * (ndc_x * tan_half * aspect)
                    + self.up * (ndc_y * tan_half))
                    .normalize();
                Ray {
                    origin: self.eye,
                    direction,
                }
            }
            Projection::Orthographic {
                height: view_height,
                ..
            } => {
                let half_h = view_height * 0.5;
                let half_w = half_h * width / height;
                Ray {
                    origin: self.eye
                        + right * (ndc_x * half_w)
                        + self.up * (ndc_y * half_h),
                    direction: self.forward,
                }
            }
        }
    }

    /// Describe the camera as looking at the point `distance` ahead.
    ///
    /// Angles are measured in the local frame of that reference point.
    #[must_use]
    pub fn as_look_at(&self, distance: f64) -> LookAt {
        let reference = self.eye + self.forward * distance;
        let frame = self.world.local_frame(reference);
        let (yaw, pitch) = yaw_pitch(&frame, self.forward);
        LookAt {
            reference,
            yaw,
            pitch,
            distance,
        }
    }

    /// Position and orient the camera according to `look_at` (roll 0).
    pub fn look_at(&mut self, look_at: &LookAt) {
        let frame = self.world.local_frame(look_at.reference);
        let (forward, up) =
            orientation_from_angles(&frame, look_at.yaw, look_at.pitch, 0.0);
        self.eye = look_at.reference - forward * look_at.distance;
        self.forward = forward;
        self.up = up;
    }

    /// Describe the camera by its eye and yaw/pitch/roll angles, measured in
    /// the local frame of the eye.
    #[must_use]
    pub fn as_look_from(&self) -> LookFrom {
        let frame = self.world.local_frame(self.eye);
        let (yaw, pitch) = yaw_pitch(&frame, self.forward);
        let (_, level_up) = orientation_from_angles(&frame, yaw, pitch, 0.0);
        let level_right = self.forward.cross(level_up);
        let roll = self
            .up
            .dot(level_right)
            .atan2(self.up.dot(level_up))
            .to_degrees();
        LookFrom {
            eye: self.eye,
            yaw,
            pitch,
            roll,
        }
    }

    /// Position and orient the camera according to `look_from`.
    pub fn look_from(&mut self, look_from: &LookFrom) {
        let frame = self.world.local_frame(look_from.eye);
        let (forward, up) = orientation_from_angles(
            &frame,
            look_from.yaw,
            look_from.pitch,
            look_from.roll,
        );
        self.eye = look_from.eye;
        self.forward = forward;
        self.up = up;
    }

    /// Near plane distance currently in use, if any.
    #[must_use]
    pub fn near(&self) -> f64 {
        match self.projection {
            Projection::Perspective { near, .. }
            | Projection::Orthographic { near, .. } => near,
        }
    }

    /// Re-derive the near plane from the eye height. Returns `true` when the
    /// value changed.
    pub fn adjust_near_plane(&mut self) -> bool {
        let target = near_plane_for_height(self.height());
        match &mut self.projection {
            Projection::Perspective { near, .. }
            | Projection::Orthographic { near, .. } => {
                if *near == target {
                    false
                } else {
                    *near = target;
                    true
                }
            }
        }
    }
}

/// Yaw (clockwise from north, `[0, 360)`) and pitch of `direction` in `frame`.
fn yaw_pitch(frame: &LocalFrame, direction: DVec3) -> (f64, f64) {
    let local = frame.direction_to_local(direction.normalize_or_zero());
    let pitch = local.z.clamp(-1.0, 1.0).asin().to_degrees();
    let yaw = if local.x.abs() < 1e-12 && local.y.abs() < 1e-12 {
        0.0
    } else {
        wrap_degrees(local.x.atan2(local.y).to_degrees())
    };
    (yaw, pitch)
}

/// Forward and up vectors for the given angles in `frame`.
fn orientation_from_angles(
    frame: &LocalFrame,
    yaw: f64,
    pitch: f64,
    roll: f64,
) -> (DVec3, DVec3) {
    let (sin_y, cos_y) = yaw.to_radians().sin_cos();
    let (sin_p, cos_p) = pitch.to_radians().sin_cos();
    let forward = frame.direction_to_world(DVec3::new(
        cos_p * sin_y,
        cos_p * cos_y,
        sin_p,
    ));
    let level_up = frame.direction_to_world(DVec3::new(
        -sin_p * sin_y,
        -sin_p * cos_y,
        cos_p,
    ));
    if roll == 0.0 {
        return (forward, level_up);
    }
    let (sin_r, cos_r) = roll.to_radians().sin_cos();
    let level_right = forward.cross(level_up);
    (forward, level_up * cos_r + level_right * sin_r)
}
