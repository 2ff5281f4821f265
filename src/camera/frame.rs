//! Reference-frame service: where "up" points and how to build a locally
//! flat east/north/up basis at any world point.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Shape of the world the camera moves in.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorldFrame {
    /// Cartesian world; "up" is the fixed +Z axis.
    #[default]
    Flat,
    /// Geocentric-style world; "up" at a point is the direction away from
    /// `center`.
    Spherical {
        /// Center of the sphere in world coordinates.
        center: DVec3,
        /// Sphere radius, used to express heights above the surface.
        radius: f64,
    },
}

impl WorldFrame {
    /// A spherical frame centered on the origin.
    #[must_use]
    pub fn spherical(radius: f64) -> Self {
        Self::Spherical {
            center: DVec3::ZERO,
            radius,
        }
    }

    /// Whether "up" depends on the point.
    #[must_use]
    pub fn is_spherical(&self) -> bool {
        matches!(self, Self::Spherical { .. })
    }

    /// True local vertical at `point`.
    #[must_use]
    pub fn vertical_up(&self, point: DVec3) -> DVec3 {
        match *self {
            Self::Flat => DVec3::Z,
            Self::Spherical { center, .. } => {
                (point - center).try_normalize().unwrap_or(DVec3::Z)
            }
        }
    }

    /// Height of `point` above the ground (z = 0, or the sphere surface).
    #[must_use]
    pub fn height(&self, point: DVec3) -> f64 {
        match *self {
            Self::Flat => point.z,
            Self::Spherical { center, radius } => {
                (point - center).length() - radius
            }
        }
    }

    /// East/north/up basis anchored at `origin`.
    #[must_use]
    pub fn local_frame(&self, origin: DVec3) -> LocalFrame {
        let up = self.vertical_up(origin);
        // At the poles Z is parallel to up; any horizontal east will do.
        let east = DVec3::Z.cross(up).try_normalize().unwrap_or(DVec3::X);
        let north = up.cross(east);
        LocalFrame {
            origin,
            east,
            north,
            up,
        }
    }
}

/// Orthonormal east/north/up basis anchored at a world point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalFrame {
    /// Frame origin in world coordinates.
    pub origin: DVec3,
    /// Local +X.
    pub east: DVec3,
    /// Local +Y.
    pub north: DVec3,
    /// Local +Z.
    pub up: DVec3,
}

impl LocalFrame {
    /// Express a world point in this frame.
    #[must_use]
    pub fn to_local(&self, point: DVec3) -> DVec3 {
        self.direction_to_local(point - self.origin)
    }

    /// Express a local point in world coordinates.
    #[must_use]
    pub fn to_world(&self, local: DVec3) -> DVec3 {
        self.origin + self.direction_to_world(local)
    }

    /// Rotate a world direction into this frame.
    #[must_use]
    pub fn direction_to_local(&self, v: DVec3) -> DVec3 {
        DVec3::new(v.dot(self.east), v.dot(self.north), v.dot(self.up))
    }

    /// Rotate a local direction into world coordinates.
    #[must_use]
    pub fn direction_to_world(&self, v: DVec3) -> DVec3 {
        self.east * v.x + self.north * v.y + self.up * v.z
    }
}
