//! Height-dependent near plane.
//!
//! Close to the ground a tiny near plane keeps nearby geometry from being
//! clipped while walking through a scene; high up it is pushed out to keep
//! depth precision.

/// Near plane used at or below [`HEIGHT_THRESHOLD`].
pub const DEFAULT_NEAR_PLANE: f64 = 0.1;

/// Eye height above which the near plane scales with height.
pub const HEIGHT_THRESHOLD: f64 = 100.0;

/// Near plane distance for an eye at `height` above the ground, rounded to
/// centimetres.
#[must_use]
pub fn near_plane_for_height(height: f64) -> f64 {
    let raw = if height > HEIGHT_THRESHOLD {
        height * 0.01
    } else {
        DEFAULT_NEAR_PLANE
    };
    (raw * 100.0).round() / 100.0
}
