//! Axis-aligned navigation volume the camera eye must stay inside.

use glam::DVec3;

use super::frame::{LocalFrame, WorldFrame};

/// Axis-aligned box in either world space or a local east/north/up frame.
///
/// Bounds supplied in a spherical world are not aligned with the surface
/// (their box sticks slanted through the ground). [`localized`](Self::localized)
/// re-expresses them in a flat frame anchored at their center so that
/// width, height and depth keep their meaning for clamping.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationBounds {
    min: DVec3,
    max: DVec3,
    reference: WorldFrame,
    /// `None`: `min`/`max` are world coordinates.
    frame: Option<LocalFrame>,
}

impl NavigationBounds {
    /// Bounds spanning `a` and `b` (any two opposite corners) in the world
    /// coordinates of `reference`.
    #[must_use]
    pub fn new(a: DVec3, b: DVec3, reference: WorldFrame) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
            reference,
            frame: None,
        }
    }

    /// World the bounds were expressed in.
    #[must_use]
    pub fn reference(&self) -> WorldFrame {
        self.reference
    }

    /// The local frame the box is aligned with, if it was localized.
    #[must_use]
    pub fn frame(&self) -> Option<&LocalFrame> {
        self.frame.as_ref()
    }

    /// Lower corner in bounds space.
    #[must_use]
    pub fn min(&self) -> DVec3 {
        self.min
    }

    /// Upper corner in bounds space.
    #[must_use]
    pub fn max(&self) -> DVec3 {
        self.max
    }

    /// Width, height and depth.
    #[must_use]
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Re-express spherical bounds in a locally flat frame at their center.
    ///
    /// The eight world corners are transformed into the new frame and the
    /// result is their axis-aligned box, so the localized bounds always
    /// contain the original volume. Flat or already localized bounds are
    /// returned unchanged.
    #[must_use]
    pub fn localized(self) -> Self {
        if !self.reference.is_spherical() || self.frame.is_some() {
            return self;
        }
        let frame = self.reference.local_frame(self.center());
        let mut corners = self.corners().into_iter().map(|c| frame.to_local(c));
        let first = corners.next().unwrap_or(DVec3::ZERO);
        let (min, max) = corners.fold((first, first), |(lo, hi), c| {
            (lo.min(c), hi.max(c))
        });
        log::debug!(
            "localized spherical bounds: size {} at {}",
            max - min,
            frame.origin
        );
        Self {
            min,
            max,
            reference: self.reference,
            frame: Some(frame),
        }
    }

    /// Whether the world point lies inside (boundary inclusive).
    #[must_use]
    pub fn contains(&self, point: DVec3) -> bool {
        let p = self.to_bounds_space(point);
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// Closest point inside the bounds to the world point.
    #[must_use]
    pub fn clamp(&self, point: DVec3) -> DVec3 {
        let p = self.to_bounds_space(point).clamp(self.min, self.max);
        self.to_world(p)
    }

    /// Center of the box in world coordinates.
    #[must_use]
    pub fn center(&self) -> DVec3 {
        self.to_world((self.min + self.max) * 0.5)
    }

    /// The eight corners in world coordinates.
    #[must_use]
    pub fn corners(&self) -> [DVec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            DVec3::new(lo.x, lo.y, lo.z),
            DVec3::new(hi.x, lo.y, lo.z),
            DVec3::new(hi.x, hi.y, lo.z),
            DVec3::new(hi.x, hi.y, hi.z),
            DVec3::new(lo.x, hi.y, hi.z),
            DVec3::new(lo.x, hi.y, lo.z),
            DVec3::new(hi.x, lo.y, hi.z),
            DVec3::new(lo.x, lo.y, hi.z),
        ]
        .map(|c| self.to_world(c))
    }

    /// Radius of the sphere around [`center`](Self::center) enclosing the box.
    #[must_use]
    pub fn bounding_radius(&self) -> f64 {
        self.size().length() * 0.5
    }

    /// Navigation bounds suited to exploring a data set with the given
    /// bounds: five times its horizontal footprint, centered on it.
    ///
    /// Data without depth (a flat layer) gets a fixed vertical span of
    /// ±10 km; otherwise the depth is scaled by five from the data floor.
    #[must_use]
    pub fn recommended_for(data: &Self) -> Self {
        const SCALE: f64 = 5.0;
        const FLAT_DEPTH_HALF_SPAN: f64 = 10_000.0;
        let size = data.size();
        let min_x = data.min.x - (SCALE - 1.0) * size.x / 2.0;
        let min_y = data.min.y - (SCALE - 1.0) * size.y / 2.0;
        let (min_z, depth) = if size.z == 0.0 {
            (-FLAT_DEPTH_HALF_SPAN, 2.0 * FLAT_DEPTH_HALF_SPAN)
        } else {
            (data.min.z, size.z * SCALE)
        };
        let min = DVec3::new(min_x, min_y, min_z);
        let span = DVec3::new(size.x * SCALE, size.y * SCALE, depth);
        Self {
            min,
            max: min + span,
            reference: data.reference,
            frame: data.frame,
        }
    }

    fn to_bounds_space(&self, point: DVec3) -> DVec3 {
        self.frame.map_or(point, |f| f.to_local(point))
    }

    fn to_world(&self, p: DVec3) -> DVec3 {
        self.frame.map_or(p, |f| f.to_world(p))
    }
}
