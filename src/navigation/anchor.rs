//! Anchor selection: the world point pan/rotate/zoom operate around.

use glam::{DVec2, DVec3};

use super::mode::NavigationMode;
use crate::camera::{Camera, NavigationBounds, Ray};

/// Scene geometry the navigation can query for what lies under the pointer.
///
/// Implemented for any `Fn(&Ray) -> Option<DVec3>`, so a host can pass a
/// closure over its own picking code.
pub trait ScenePicker {
    /// Closest scene hit along `ray`, in world coordinates.
    fn pick(&self, ray: &Ray) -> Option<DVec3>;
}

impl<F> ScenePicker for F
where
    F: Fn(&Ray) -> Option<DVec3>,
{
    fn pick(&self, ray: &Ray) -> Option<DVec3> {
        self(ray)
    }
}

/// A picker that never hits anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoScene;

impl ScenePicker for NoScene {
    fn pick(&self, _ray: &Ray) -> Option<DVec3> {
        None
    }
}

/// Anchor for a newly entered `mode` with the pointer at `view_point`.
///
/// First-person rotation turns around the eye. Other modes use the scene
/// point under the pointer when it lies inside `bounds`, and the bounds
/// center otherwise.
#[must_use]
pub fn compute_anchor(
    mode: NavigationMode,
    camera: &Camera,
    bounds: &NavigationBounds,
    picker: &dyn ScenePicker,
    view_point: DVec2,
) -> DVec3 {
    if mode == NavigationMode::FirstPersonRotation {
        return camera.eye;
    }
    let ray = camera.view_ray(view_point);
    match picker.pick(&ray) {
        Some(hit) if bounds.contains(hit) => hit,
        Some(hit) => {
            log::debug!("ignoring pick {hit} outside navigation bounds");
            bounds.center()
        }
        None => bounds.center(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::WorldFrame;

    fn setup() -> (Camera, NavigationBounds) {
        let camera = Camera::new(DVec3::new(0.0, -50.0, 10.0), DVec3::Y, DVec3::Z);
        let bounds = NavigationBounds::new(
            DVec3::new(-100.0, -100.0, 0.0),
            DVec3::new(100.0, 100.0, 100.0),
            WorldFrame::Flat,
        );
        (camera, bounds)
    }

    /// Hits the plane y = 0.
    fn wall(ray: &Ray) -> Option<DVec3> {
        (ray.direction.y > 0.0).then(|| ray.at(-ray.origin.y / ray.direction.y))
    }

    #[test]
    fn picks_scene_under_pointer() {
        let (camera, bounds) = setup();
        let anchor = compute_anchor(
            NavigationMode::Rotation,
            &camera,
            &bounds,
            &wall,
            DVec2::new(640.0, 360.0),
        );
        assert!(anchor.abs_diff_eq(DVec3::new(0.0, 0.0, 10.0), 1e-9));
    }

    #[test]
    fn falls_back_to_bounds_center() {
        let (camera, bounds) = setup();
        let anchor = compute_anchor(
            NavigationMode::Pan,
            &camera,
            &bounds,
            &NoScene,
            DVec2::new(10.0, 10.0),
        );
        assert_eq!(anchor, bounds.center());
    }

    #[test]
    fn ignores_hits_outside_bounds() {
        let (camera, bounds) = setup();
        let far = |_: &Ray| Some(DVec3::new(0.0, 500.0, 0.0));
        let anchor = compute_anchor(
            NavigationMode::Zoom,
            &camera,
            &bounds,
            &far,
            DVec2::ZERO,
        );
        assert_eq!(anchor, bounds.center());
    }

    #[test]
    fn first_person_rotation_anchors_on_eye() {
        let (camera, bounds) = setup();
        let anchor = compute_anchor(
            NavigationMode::FirstPersonRotation,
            &camera,
            &bounds,
            &wall,
            DVec2::ZERO,
        );
        assert_eq!(anchor, camera.eye);
    }
}
