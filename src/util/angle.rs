//! Degree-based angle helpers shared by the integrators and animations.

/// Largest pitch magnitude, in degrees, the camera may reach. Keeps the
/// forward vector away from the vertical so yaw stays well defined.
pub const MAX_PITCH: f64 = 89.0;

/// Wrap an angle in degrees into `[0, 360)`.
#[must_use]
pub fn wrap_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Clamp a pitch in degrees to `[-MAX_PITCH, MAX_PITCH]`.
#[must_use]
pub fn clamp_pitch(pitch: f64) -> f64 {
    pitch.clamp(-MAX_PITCH, MAX_PITCH)
}

/// Adjust `target` by a full turn so that interpolating from `start` takes
/// the shorter way around the circle.
///
/// `350 → 10` becomes `350 → 370`; `10 → 350` becomes `10 → -10`.
#[must_use]
pub fn shortest_yaw_target(start: f64, target: f64) -> f64 {
    let delta = target - start;
    if delta > 180.0 {
        target - 360.0
    } else if delta < -180.0 {
        target + 360.0
    } else {
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_keeps_range() {
        assert_eq!(wrap_degrees(370.0), 10.0);
        assert_eq!(wrap_degrees(-90.0), 270.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert_eq!(wrap_degrees(0.0), 0.0);
        let tiny = wrap_degrees(-1e-15);
        assert!((0.0..360.0).contains(&tiny));
    }

    #[test]
    fn pitch_is_clamped() {
        assert_eq!(clamp_pitch(95.0), 89.0);
        assert_eq!(clamp_pitch(-120.0), -89.0);
        assert_eq!(clamp_pitch(45.0), 45.0);
    }

    #[test]
    fn shortest_path_crosses_north() {
        assert_eq!(shortest_yaw_target(350.0, 10.0), 370.0);
        assert_eq!(shortest_yaw_target(10.0, 350.0), -10.0);
        assert_eq!(shortest_yaw_target(90.0, 180.0), 180.0);
        // Exactly half a turn stays as-is.
        assert_eq!(shortest_yaw_target(0.0, 180.0), 180.0);
    }
}
