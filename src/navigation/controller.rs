//! The scene navigation controller: one camera, one active navigation mode,
//! and every input source funnelled through the same bounded primitives.

use std::time::Duration;

use glam::DVec3;

use super::anchor::{compute_anchor, NoScene, ScenePicker};
use super::animation::{AnimationStatus, CameraAnimation, LookAnimation};
use super::gesture::{classify, speed_multiplier, zoom_factor};
use super::joystick::{JoystickNavigation, JoystickVector, Orientation};
use super::keys::KeyNavigation;
use super::mode::{AllowedModes, NavigationMode};
use super::motion::{
    move_eye, EyePolicy, PanSupport, RotationSupport, ZoomRequest, ZoomSupport,
};
use super::presets;
use crate::camera::{Camera, NavigationBounds};
use crate::error::NavError;
use crate::input::{EventResult, EventTarget, FocusEvent, GestureEvent, KeyEvent};
use crate::options::{NavigationKeysMode, NavigationOptions};

/// Split borrows of the controller handed to a mode handler.
struct MotionContext<'a> {
    camera: &'a mut Camera,
    bounds: &'a NavigationBounds,
    anchor: DVec3,
    pan: &'a mut PanSupport,
    rotation: &'a mut RotationSupport,
    zoom: &'a ZoomSupport,
    options: &'a NavigationOptions,
}

/// What a mode handler asks the controller to do next.
#[derive(Default)]
struct MotionOutcome {
    /// The camera pose changed.
    moved: bool,
    /// Drop back to [`NavigationMode::None`] so the next gesture picks a
    /// fresh anchor.
    end_mode: bool,
    /// Animation to run instead of an immediate move.
    animation: Option<CameraAnimation>,
}

impl MotionOutcome {
    fn moved(moved: bool) -> Self {
        Self {
            moved,
            ..Self::default()
        }
    }
}

type ModeHandler = fn(&mut MotionContext<'_>, &GestureEvent) -> MotionOutcome;

fn mode_handler(mode: NavigationMode) -> Option<ModeHandler> {
    match mode {
        NavigationMode::None => None,
        NavigationMode::FirstPersonRotation => Some(look_around),
        NavigationMode::Rotation => Some(orbit_anchor),
        NavigationMode::Pan => Some(pan),
        NavigationMode::Zoom | NavigationMode::ZoomOnClick => Some(zoom),
    }
}

fn look_around(ctx: &mut MotionContext<'_>, event: &GestureEvent) -> MotionOutcome {
    MotionOutcome::moved(ctx.rotation.rotate_around_eye(ctx.camera, event.view_point))
}

fn orbit_anchor(ctx: &mut MotionContext<'_>, event: &GestureEvent) -> MotionOutcome {
    MotionOutcome::moved(ctx.rotation.rotate_around_pivot(
        ctx.camera,
        ctx.bounds,
        ctx.anchor,
        event.view_point,
    ))
}

fn pan(ctx: &mut MotionContext<'_>, event: &GestureEvent) -> MotionOutcome {
    MotionOutcome::moved(ctx.pan.pan_over_orthogonal_plane(
        ctx.camera,
        ctx.bounds,
        ctx.anchor,
        event.view_point,
    ))
}

fn zoom(ctx: &mut MotionContext<'_>, event: &GestureEvent) -> MotionOutcome {
    let gestures = &ctx.options.gestures;
    let raw = zoom_factor(event, gestures.scroll_zoom_multiplier);
    let factor = match (gestures.use_zoom_animations, raw < 0.0) {
        (false, _) => raw,
        (true, true) => gestures.fly_back_fraction,
        (true, false) => gestures.fly_forward_fraction,
    };
    let request = ZoomRequest {
        flying: gestures.use_zoom_animations,
        speed_rate: speed_multiplier(event),
        ghost_mode: event.modifiers.ctrl,
        duration: ctx.options.zoom_animation_duration(),
    };
    let outcome =
        ctx.zoom
            .zoom_to_anchor(ctx.camera, ctx.bounds, ctx.anchor, factor, request);
    MotionOutcome {
        moved: outcome.moved,
        end_mode: factor < 0.0 || outcome.surface_crossed,
        animation: outcome.animation.map(CameraAnimation::from),
    }
}

/// Reports yaw/pitch/roll changes for compass and horizon widgets.
#[derive(Debug, Clone, Default)]
struct OrientationTracker {
    last: Option<Orientation>,
    pending: Option<Orientation>,
}

impl OrientationTracker {
    fn observe(&mut self, camera: &Camera) {
        let look = camera.as_look_from();
        let now = Orientation {
            yaw: look.yaw,
            pitch: look.pitch,
            roll: look.roll,
        };
        if self.last != Some(now) {
            self.pending = Some(now);
            self.last = Some(now);
        }
    }
}

/// Navigation controller for looking at 3D content from close by.
///
/// - left drag (one finger) orbits the anchor under the pointer, right drag
///   pans, both buttons (two fingers) or ctrl + left drag look around from
///   the eye;
/// - wheel and pinch zoom toward the anchor, ctrl zooms through it;
/// - held keys fly, the on-screen joystick pans and turns;
/// - the eye never leaves the navigation bounds.
///
/// The host feeds events as they arrive and calls [`tick`](Self::tick)
/// once per frame.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use glam::{DVec2, DVec3};
/// use scene_nav::camera::{Camera, NavigationBounds, WorldFrame};
/// use scene_nav::input::{GestureEvent, KeyEvent, MouseButtons};
/// use scene_nav::navigation::{NavigationMode, SceneNavigationController};
/// use scene_nav::options::NavigationOptions;
///
/// let bounds = NavigationBounds::new(
///     DVec3::splat(-100.0),
///     DVec3::splat(100.0),
///     WorldFrame::Flat,
/// );
/// let mut nav = SceneNavigationController::new(bounds, NavigationOptions::default());
/// nav.activate(Camera::new(DVec3::ZERO, DVec3::Y, DVec3::Z)).unwrap();
///
/// let drag = GestureEvent::drag(DVec2::new(640.0, 360.0), MouseButtons::RIGHT);
/// assert!(nav.on_gesture_event(&drag).is_handled());
/// assert_eq!(nav.navigation_mode(), NavigationMode::Pan);
///
/// assert!(nav.on_key_event(&KeyEvent::down("KeyW")).is_handled());
/// assert!(nav.tick(Duration::from_millis(16)));
/// ```
pub struct SceneNavigationController {
    bounds: NavigationBounds,
    options: NavigationOptions,
    allowed: AllowedModes,
    picker: Box<dyn ScenePicker>,

    camera: Option<Camera>,
    mode: NavigationMode,
    anchor: Option<DVec3>,
    animation: Option<CameraAnimation>,

    pan: PanSupport,
    rotation: RotationSupport,
    zoom: ZoomSupport,
    keys: KeyNavigation,
    joystick: JoystickNavigation,
    key_navigation_enabled: bool,
    orientation: OrientationTracker,
}

impl SceneNavigationController {
    /// Controller confined to `bounds`.
    ///
    /// Spherical bounds are re-expressed in a surface-aligned frame at their
    /// center. Without a picker, anchors fall back to the bounds center.
    #[must_use]
    pub fn new(bounds: NavigationBounds, options: NavigationOptions) -> Self {
        let mut allowed = AllowedModes::standard();
        if options.gestures.allow_zoom_on_click
            && options.gestures.use_zoom_animations
        {
            allowed = allowed.with(NavigationMode::ZoomOnClick);
        }
        let keys = KeyNavigation::new(options.keys.clone(), options.keybindings.clone());
        let joystick = JoystickNavigation::new(
            options.joystick.clone(),
            options.keys.navigation_mode,
        );
        Self {
            bounds: bounds.localized(),
            allowed,
            picker: Box::new(NoScene),
            camera: None,
            mode: NavigationMode::None,
            anchor: None,
            animation: None,
            pan: PanSupport::new(),
            rotation: RotationSupport::new(options.gestures.degrees_per_pixel),
            zoom: ZoomSupport::default(),
            keys,
            joystick,
            key_navigation_enabled: true,
            orientation: OrientationTracker::default(),
            options,
        }
    }

    /// Use `picker` to find anchors under the pointer.
    #[must_use]
    pub fn with_picker(mut self, picker: impl ScenePicker + 'static) -> Self {
        self.picker = Box::new(picker);
        self
    }

    /// Start driving `camera`.
    ///
    /// Only perspective cameras have the yaw/pitch/distance semantics the
    /// controller relies on; anything else is rejected. Activating an
    /// already active controller replaces its camera and drops all held
    /// input.
    ///
    /// # Errors
    ///
    /// [`NavError::UnsupportedCamera`] for orthographic cameras.
    pub fn activate(&mut self, camera: Camera) -> Result<(), NavError> {
        if !camera.projection.is_perspective() {
            log::warn!("refusing to navigate a non-perspective camera");
            return Err(NavError::UnsupportedCamera(
                "scene navigation requires a perspective projection".to_owned(),
            ));
        }
        self.release_input();
        self.animation = None;
        self.orientation = OrientationTracker::default();
        self.camera = Some(camera);
        self.observe_camera();
        log::info!(
            "scene navigation activated (bounds {} .. {})",
            self.bounds.min(),
            self.bounds.max()
        );
        Ok(())
    }

    /// Stop navigating and hand back the camera. Held keys, joystick input
    /// and running animations are dropped.
    pub fn deactivate(&mut self) -> Option<Camera> {
        self.release_input();
        self.animation = None;
        let camera = self.camera.take();
        if camera.is_some() {
            log::info!("scene navigation deactivated");
        }
        camera
    }

    /// Whether a camera is attached.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.camera.is_some()
    }

    /// Interpret a pointer gesture.
    ///
    /// Returns [`EventResult::Ignored`] while inactive and for events that
    /// leave the controller in [`NavigationMode::None`].
    pub fn on_gesture_event(&mut self, event: &GestureEvent) -> EventResult {
        let Some(camera) = self.camera.as_mut() else {
            return EventResult::Ignored;
        };

        let requires_modifier = self.keys.mode() == NavigationKeysMode::TangentForward;
        let mode = classify(
            event,
            self.mode,
            self.allowed,
            requires_modifier,
            self.options.gestures.invert_buttons,
        );
        if mode != self.mode {
            log::debug!("navigation mode {:?} -> {:?}", self.mode, mode);
            self.pan.reset();
            self.rotation.reset();
            self.anchor = if mode.is_motion() {
                let anchor = compute_anchor(
                    mode,
                    camera,
                    &self.bounds,
                    self.picker.as_ref(),
                    event.view_point,
                );
                log::debug!("anchor at {anchor}");
                Some(anchor)
            } else {
                None
            };
        }
        self.mode = mode;

        let Some(handler) = mode_handler(mode) else {
            return EventResult::Ignored;
        };
        if self.animation.take().is_some() {
            log::debug!("camera animation cancelled by {mode:?}");
        }

        let mut ctx = MotionContext {
            camera,
            bounds: &self.bounds,
            anchor: self.anchor.unwrap_or_else(|| self.bounds.center()),
            pan: &mut self.pan,
            rotation: &mut self.rotation,
            zoom: &self.zoom,
            options: &self.options,
        };
        let outcome = handler(&mut ctx, event);

        if outcome.end_mode {
            log::debug!("{mode:?} ended; next gesture picks a new anchor");
            self.mode = NavigationMode::None;
            self.anchor = None;
            self.pan.reset();
            self.rotation.reset();
        }
        if let Some(animation) = outcome.animation {
            self.animation = Some(animation);
        }
        if outcome.moved {
            self.observe_camera();
        }
        EventResult::Handled
    }

    /// Interpret a key event.
    ///
    /// Events aimed at text fields are never navigation. A handled key
    /// cancels the running animation.
    pub fn on_key_event(&mut self, event: &KeyEvent) -> EventResult {
        if self.camera.is_none()
            || !self.key_navigation_enabled
            || event.target == EventTarget::TextInput
        {
            return EventResult::Ignored;
        }
        let result = self.keys.on_key_event(event);
        if result.is_handled() {
            self.cancel_animation();
        }
        result
    }

    /// Release held input when the window loses focus or the page is hidden.
    pub fn on_focus_event(&mut self, event: FocusEvent) {
        match event {
            FocusEvent::WindowBlur
            | FocusEvent::VisibilityChanged { hidden: true } => {
                self.release_input();
            }
            FocusEvent::VisibilityChanged { hidden: false } => {}
        }
    }

    /// Advance one frame: step the running animation, fly with held keys
    /// and sample held joystick input. Returns whether the camera changed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let Some(camera) = self.camera.as_mut() else {
            return false;
        };
        let mut changed = false;

        if let Some(animation) = self.animation.as_mut() {
            let status = animation.step(camera, dt);
            let eye = camera.eye;
            if move_eye(camera, &self.bounds, eye, EyePolicy::Clamp) {
                log::debug!("animated eye clamped to the navigation bounds");
            }
            changed = true;
            if status == AnimationStatus::Finished {
                log::debug!("camera animation finished");
                self.animation = None;
            }
        }

        let mut user_motion = false;
        if self.key_navigation_enabled {
            user_motion |= self.keys.update(camera, &self.bounds, dt);
        }
        user_motion |= self.joystick.tick(camera, &self.bounds, dt);
        if user_motion {
            changed = true;
            self.cancel_animation();
        }

        if changed {
            self.observe_camera();
        }
        changed
    }

    /// Turn keyboard flight on or off. Disabling drops held keys.
    pub fn set_key_navigation_enabled(&mut self, enabled: bool) {
        if !enabled {
            self.keys.release_all();
        }
        self.key_navigation_enabled = enabled;
    }

    /// Whether keyboard flight is on.
    #[must_use]
    pub fn key_navigation_enabled(&self) -> bool {
        self.key_navigation_enabled
    }

    /// Joystick: strafe by `dx`.
    pub fn move_horizontally(&mut self, dx: f64) -> bool {
        self.joystick_motion(|js, camera, bounds| js.move_horizontally(camera, bounds, dx))
    }

    /// Joystick: move forward by `dy`.
    pub fn move_vertically(&mut self, dy: f64) -> bool {
        self.joystick_motion(|js, camera, bounds| js.move_vertically(camera, bounds, dy))
    }

    /// Joystick: hold or release the "up" button.
    pub fn set_move_up(&mut self, active: bool) {
        self.joystick.set_move_up(active);
    }

    /// Joystick: hold or release the "down" button.
    pub fn set_move_down(&mut self, active: bool) {
        self.joystick.set_move_down(active);
    }

    /// Joystick: turn by `dx`.
    pub fn rotate_yaw(&mut self, dx: f64) -> bool {
        self.joystick_motion(|js, camera, _| js.rotate_yaw(camera, dx))
    }

    /// Joystick: tilt by `dy`.
    pub fn rotate_pitch(&mut self, dy: f64) -> bool {
        self.joystick_motion(|js, camera, _| js.rotate_pitch(camera, dy))
    }

    /// Override the camera angles, e.g. from a device-orientation sensor.
    pub fn set_orientation(&mut self, orientation: Orientation) -> bool {
        self.joystick_motion(|_, camera, _| {
            JoystickNavigation::set_orientation(camera, orientation);
            true
        })
    }

    /// Joystick: set the held pan stick, sampled every joystick tick.
    pub fn set_pan_stick(&mut self, stick: JoystickVector) {
        self.joystick.set_pan_stick(stick);
    }

    /// Joystick: set the held rotation stick, sampled every joystick tick.
    pub fn set_rotation_stick(&mut self, stick: JoystickVector) {
        self.joystick.set_rotation_stick(stick);
    }

    /// Replace any running animation with `animation`.
    pub fn start_animation(&mut self, animation: impl Into<CameraAnimation>) -> bool {
        if self.camera.is_none() {
            return false;
        }
        let animation = animation.into();
        log::debug!("camera animation started ({:?})", animation.duration());
        self.animation = Some(animation);
        true
    }

    /// Animate to a top-down view of the bounds center.
    pub fn show_top_view(&mut self) -> bool {
        self.start_preset(presets::top_view)
    }

    /// Animate to a level view of the bounds center.
    pub fn show_horizon_view(&mut self) -> bool {
        self.start_preset(presets::horizon_view)
    }

    /// Animate a turn of `quadrants × 90°` around the bounds center.
    pub fn turn(&mut self, quadrants: i32) -> bool {
        self.start_preset(|camera, bounds, duration| {
            presets::turn(camera, bounds, quadrants, duration)
        })
    }

    /// Animate to a view framing the whole bounds.
    pub fn fit_bounds(&mut self) -> bool {
        self.start_preset(presets::fit_bounds)
    }

    /// Drop the running animation, leaving the camera where it is.
    pub fn cancel_animation(&mut self) {
        if self.animation.take().is_some() {
            log::debug!("camera animation cancelled");
        }
    }

    /// The navigated camera, if active.
    #[must_use]
    pub fn camera(&self) -> Option<&Camera> {
        self.camera.as_ref()
    }

    /// The active navigation mode.
    #[must_use]
    pub fn navigation_mode(&self) -> NavigationMode {
        self.mode
    }

    /// The anchor of the active mode, for gizmo overlays.
    #[must_use]
    pub fn anchor(&self) -> Option<DVec3> {
        self.anchor
    }

    /// Modes the gesture classifier may enter.
    #[must_use]
    pub fn allowed_modes(&self) -> AllowedModes {
        self.allowed
    }

    /// The (localized) navigation bounds.
    #[must_use]
    pub fn bounds(&self) -> &NavigationBounds {
        &self.bounds
    }

    /// Options the controller was built with.
    #[must_use]
    pub fn options(&self) -> &NavigationOptions {
        &self.options
    }

    /// Whether a camera animation is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// The camera angles, if they changed since the last call.
    pub fn take_orientation_change(&mut self) -> Option<Orientation> {
        self.orientation.pending.take()
    }

    fn joystick_motion(
        &mut self,
        apply: impl FnOnce(&JoystickNavigation, &mut Camera, &NavigationBounds) -> bool,
    ) -> bool {
        let Some(camera) = self.camera.as_mut() else {
            return false;
        };
        let changed = apply(&self.joystick, camera, &self.bounds);
        if changed {
            self.cancel_animation();
            self.observe_camera();
        }
        changed
    }

    fn start_preset(
        &mut self,
        build: impl FnOnce(&Camera, &NavigationBounds, Duration) -> LookAnimation,
    ) -> bool {
        let Some(camera) = self.camera.as_ref() else {
            return false;
        };
        let animation = build(camera, &self.bounds, self.options.animation_duration());
        self.start_animation(animation)
    }

    fn release_input(&mut self) {
        self.keys.release_all();
        self.joystick.release_all();
        self.pan.reset();
        self.rotation.reset();
        self.mode = NavigationMode::None;
        self.anchor = None;
    }

    fn observe_camera(&mut self) {
        if let Some(camera) = self.camera.as_mut() {
            let _ = camera.adjust_near_plane();
            self.orientation.observe(camera);
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec2;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::camera::{LookAt, Projection, Ray, WorldFrame};
    use crate::input::{GestureKind, Modifiers, MouseButtons};

    const FRAME: Duration = Duration::from_millis(16);
    const CENTER: DVec2 = DVec2::new(640.0, 360.0);

    fn bounds() -> NavigationBounds {
        NavigationBounds::new(
            DVec3::new(-100.0, -100.0, 0.0),
            DVec3::new(100.0, 100.0, 100.0),
            WorldFrame::Flat,
        )
    }

    fn camera() -> Camera {
        Camera::new(DVec3::new(0.0, -50.0, 20.0), DVec3::Y, DVec3::Z)
    }

    fn active(options: NavigationOptions) -> SceneNavigationController {
        let mut nav = SceneNavigationController::new(bounds(), options);
        nav.activate(camera()).unwrap();
        nav
    }

    fn eye(nav: &SceneNavigationController) -> DVec3 {
        nav.camera().unwrap().eye
    }

    #[test]
    fn rejects_orthographic_camera() {
        let mut nav = SceneNavigationController::new(bounds(), NavigationOptions::default());
        let ortho = camera().with_projection(Projection::Orthographic {
            height: 10.0,
            near: 0.1,
            far: 100.0,
        });
        assert!(matches!(nav.activate(ortho), Err(NavError::UnsupportedCamera(_))));
        assert!(!nav.is_active());
    }

    #[test]
    fn inactive_controller_ignores_input() {
        let mut nav = SceneNavigationController::new(bounds(), NavigationOptions::default());
        let drag = GestureEvent::drag(CENTER, MouseButtons::LEFT);
        assert_eq!(nav.on_gesture_event(&drag), EventResult::Ignored);
        assert_eq!(nav.on_key_event(&KeyEvent::down("KeyW")), EventResult::Ignored);
        assert!(!nav.tick(FRAME));
        assert!(!nav.move_horizontally(1.0));
    }

    #[test]
    fn drag_enters_mode_and_computes_anchor() {
        let mut nav = active(NavigationOptions::default());
        let drag = GestureEvent::drag(CENTER, MouseButtons::LEFT);
        assert!(nav.on_gesture_event(&drag).is_handled());
        assert_eq!(nav.navigation_mode(), NavigationMode::Rotation);
        assert_eq!(nav.anchor(), Some(bounds().center()));

        let end = GestureEvent::drag_end(CENTER);
        assert_eq!(nav.on_gesture_event(&end), EventResult::Ignored);
        assert_eq!(nav.navigation_mode(), NavigationMode::None);
        assert_eq!(nav.anchor(), None);
    }

    #[test]
    fn picker_supplies_anchor() {
        let hit = DVec3::new(0.0, 10.0, 20.0);
        let mut nav = SceneNavigationController::new(bounds(), NavigationOptions::default())
            .with_picker(move |_: &Ray| Some(hit));
        nav.activate(camera()).unwrap();
        let _ = nav.on_gesture_event(&GestureEvent::drag(CENTER, MouseButtons::RIGHT));
        assert_eq!(nav.navigation_mode(), NavigationMode::Pan);
        assert_eq!(nav.anchor(), Some(hit));
    }

    #[test]
    fn first_person_rotation_keeps_eye() {
        let mut nav = active(NavigationOptions::default());
        let start = eye(&nav);
        let drag = GestureEvent::drag(CENTER, MouseButtons::LEFT).with_modifiers(Modifiers::CTRL);
        let _ = nav.on_gesture_event(&drag);
        let mut next = drag;
        next.view_point += DVec2::new(40.0, 0.0);
        let _ = nav.on_gesture_event(&next);
        assert_eq!(nav.navigation_mode(), NavigationMode::FirstPersonRotation);
        assert_eq!(nav.anchor(), Some(start));
        assert_eq!(eye(&nav), start);
        assert!((nav.camera().unwrap().as_look_from().yaw - 350.0).abs() < 1e-9);
    }

    #[test]
    fn scroll_zooms_toward_anchor() {
        let mut nav = active(NavigationOptions::default());
        let before = eye(&nav).distance(bounds().center());
        assert!(nav.on_gesture_event(&GestureEvent::scroll(CENTER, 1.0)).is_handled());
        assert_eq!(nav.navigation_mode(), NavigationMode::Zoom);
        let after = eye(&nav).distance(bounds().center());
        assert!((after - before * 0.88).abs() < 1e-9);
    }

    #[test]
    fn zooming_out_ends_the_mode() {
        let mut nav = active(NavigationOptions::default());
        assert!(nav.on_gesture_event(&GestureEvent::scroll(CENTER, -1.0)).is_handled());
        assert_eq!(nav.navigation_mode(), NavigationMode::None);
        assert_eq!(nav.anchor(), None);
    }

    #[test]
    fn ghost_zoom_through_anchor_ends_the_mode() {
        let mut nav = active(NavigationOptions::default());
        let scroll = GestureEvent::scroll(CENTER, 10.0).with_modifiers(Modifiers::CTRL);
        assert!(nav.on_gesture_event(&scroll).is_handled());
        assert_eq!(nav.navigation_mode(), NavigationMode::None);
        assert!(bounds().contains(eye(&nav)));
    }

    #[test]
    fn zoom_does_not_survive_other_events() {
        let mut nav = active(NavigationOptions::default());
        let _ = nav.on_gesture_event(&GestureEvent::scroll(CENTER, 1.0));
        assert_eq!(nav.navigation_mode(), NavigationMode::Zoom);
        let _ = nav.on_gesture_event(&GestureEvent::drag(CENTER, MouseButtons::RIGHT));
        assert_eq!(nav.navigation_mode(), NavigationMode::None);
    }

    #[test]
    fn animated_zoom_and_zoom_on_click() {
        let mut options = NavigationOptions::default();
        options.gestures.use_zoom_animations = true;
        options.gestures.allow_zoom_on_click = true;
        let mut nav = active(options);
        let start = eye(&nav);
        let distance = start.distance(bounds().center());

        assert!(nav.on_gesture_event(&GestureEvent::click_up(CENTER)).is_handled());
        assert_eq!(nav.navigation_mode(), NavigationMode::ZoomOnClick);
        assert!(nav.is_animating());
        assert_eq!(eye(&nav), start);

        let _ = nav.tick(Duration::from_millis(400));
        assert!(!nav.is_animating());
        let remaining = eye(&nav).distance(bounds().center());
        assert!((remaining - distance * 0.25).abs() < 1e-9);
    }

    #[test]
    fn zoom_on_click_needs_zoom_animations() {
        let mut options = NavigationOptions::default();
        options.gestures.allow_zoom_on_click = true;
        let mut nav = active(options);
        assert!(!nav.allowed_modes().contains(NavigationMode::ZoomOnClick));
        let start = eye(&nav);

        assert_eq!(nav.on_gesture_event(&GestureEvent::click_up(CENTER)), EventResult::Ignored);
        assert_eq!(nav.navigation_mode(), NavigationMode::None);
        assert!(!nav.is_animating());
        assert_eq!(eye(&nav), start);
    }

    #[test]
    fn inverted_buttons_swap_rotate_and_pan() {
        let mut options = NavigationOptions::default();
        options.gestures.invert_buttons = true;
        let mut nav = active(options);
        let start = eye(&nav);

        let drag = GestureEvent::drag(CENTER, MouseButtons::LEFT);
        assert!(nav.on_gesture_event(&drag).is_handled());
        assert_eq!(nav.navigation_mode(), NavigationMode::Pan);
        let mut next = drag;
        next.view_point += DVec2::new(40.0, 0.0);
        assert!(nav.on_gesture_event(&next).is_handled());
        assert_eq!(nav.navigation_mode(), NavigationMode::Pan);
        let panned = eye(&nav);
        assert!(panned.distance(start) > 1e-6);
        assert!((panned.z - start.z).abs() < 1e-9);
        let look = nav.camera().unwrap().as_look_from();
        assert!(look.yaw.abs() < 1e-9 || (look.yaw - 360.0).abs() < 1e-9);

        let _ = nav.on_gesture_event(&GestureEvent::drag_end(next.view_point));
        let _ = nav.on_gesture_event(&GestureEvent::drag(CENTER, MouseButtons::RIGHT));
        assert_eq!(nav.navigation_mode(), NavigationMode::Rotation);
    }

    #[test]
    fn stationary_drag_reports_no_orientation_change() {
        let mut nav = active(NavigationOptions::default());
        let _ = nav.take_orientation_change();

        let drag = GestureEvent::drag(CENTER, MouseButtons::LEFT).with_modifiers(Modifiers::CTRL);
        assert!(nav.on_gesture_event(&drag).is_handled());
        assert!(nav.take_orientation_change().is_none());

        let mut next = drag;
        next.view_point += DVec2::new(40.0, 0.0);
        assert!(nav.on_gesture_event(&next).is_handled());
        assert!(nav.take_orientation_change().is_some());
    }

    #[test]
    fn text_input_keys_are_ignored() {
        let mut nav = active(NavigationOptions::default());
        let key = KeyEvent::down("KeyW").on_text_input();
        assert_eq!(nav.on_key_event(&key), EventResult::Ignored);
        assert!(!nav.tick(FRAME));
    }

    #[test]
    fn held_key_flies_each_tick() {
        let mut nav = active(NavigationOptions::default());
        assert!(nav.on_key_event(&KeyEvent::down("KeyW")).is_handled());
        assert_eq!(nav.on_key_event(&KeyEvent::down("KeyW")), EventResult::Ignored);
        assert!(nav.tick(Duration::from_millis(200)));
        assert!(eye(&nav).abs_diff_eq(DVec3::new(0.0, -49.0, 20.0), 1e-9));
        assert!(nav.on_key_event(&KeyEvent::up("KeyW")).is_handled());
        assert!(!nav.tick(Duration::from_millis(200)));
    }

    #[test]
    fn focus_loss_releases_keys() {
        let mut nav = active(NavigationOptions::default());
        let _ = nav.on_key_event(&KeyEvent::down("KeyW"));
        let _ = nav.on_key_event(&KeyEvent::down("KeyD"));
        nav.on_focus_event(FocusEvent::WindowBlur);
        let before = eye(&nav);
        assert!(!nav.tick(Duration::from_secs(1)));
        assert_eq!(eye(&nav), before);
    }

    #[test]
    fn hidden_page_releases_input_visible_does_not() {
        let mut nav = active(NavigationOptions::default());
        let _ = nav.on_key_event(&KeyEvent::down("KeyW"));
        nav.on_focus_event(FocusEvent::VisibilityChanged { hidden: false });
        assert!(nav.tick(FRAME));

        nav.set_move_up(true);
        nav.on_focus_event(FocusEvent::VisibilityChanged { hidden: true });
        assert!(!nav.tick(Duration::from_secs(1)));
    }

    #[test]
    fn disabled_key_navigation_ignores_keys() {
        let mut nav = active(NavigationOptions::default());
        let _ = nav.on_key_event(&KeyEvent::down("KeyW"));
        nav.set_key_navigation_enabled(false);
        assert!(!nav.key_navigation_enabled());
        assert!(!nav.tick(FRAME));
        assert_eq!(nav.on_key_event(&KeyEvent::down("KeyS")), EventResult::Ignored);
        nav.set_key_navigation_enabled(true);
        assert!(nav.on_key_event(&KeyEvent::down("KeyS")).is_handled());
    }

    #[test]
    fn animation_lands_exactly_on_target() {
        let mut nav = active(NavigationOptions::default());
        let target = LookAt {
            reference: DVec3::new(10.0, 20.0, 5.0),
            yaw: 135.0,
            pitch: -30.0,
            distance: 40.0,
        };
        assert!(nav.start_animation(LookAnimation::new(target, 50.0, Duration::from_millis(500))));
        for _ in 0..4 {
            assert!(nav.tick(Duration::from_millis(100)));
            assert!(nav.is_animating());
        }
        assert!(nav.tick(Duration::from_millis(100)));
        assert!(!nav.is_animating());

        let end = nav.camera().unwrap().as_look_at(40.0);
        assert!(end.reference.abs_diff_eq(target.reference, 1e-9));
        assert!((end.yaw - 135.0).abs() < 1e-9);
        assert!((end.pitch + 30.0).abs() < 1e-9);
    }

    #[test]
    fn user_input_cancels_animation() {
        let mut nav = active(NavigationOptions::default());
        assert!(nav.show_top_view());
        let _ = nav.tick(FRAME);
        assert!(nav.is_animating());
        let _ = nav.on_gesture_event(&GestureEvent::drag(CENTER, MouseButtons::RIGHT));
        assert!(!nav.is_animating());

        assert!(nav.turn(1));
        assert!(nav.on_key_event(&KeyEvent::down("KeyA")).is_handled());
        assert!(!nav.is_animating());

        assert!(nav.fit_bounds());
        assert!(nav.rotate_yaw(1.0));
        assert!(!nav.is_animating());
    }

    #[test]
    fn pointer_move_does_not_cancel_animation() {
        let mut nav = active(NavigationOptions::default());
        assert!(nav.show_horizon_view());
        assert_eq!(
            nav.on_gesture_event(&GestureEvent::pointer_move(CENTER)),
            EventResult::Ignored
        );
        assert!(nav.is_animating());
    }

    #[test]
    fn joystick_operations_stay_in_bounds() {
        let mut nav = active(NavigationOptions::default());
        assert!(nav.move_horizontally(5_000.0));
        assert_eq!(eye(&nav).x, 100.0);
        assert!(nav.move_vertically(-5_000.0));
        assert_eq!(eye(&nav).y, -100.0);
        nav.set_move_down(true);
        for _ in 0..1_000 {
            let _ = nav.tick(Duration::from_millis(50));
        }
        assert_eq!(eye(&nav).z, 0.0);
    }

    #[test]
    fn orientation_changes_are_reported_once() {
        let mut nav = active(NavigationOptions::default());
        assert!(nav.take_orientation_change().is_some());
        assert!(nav.take_orientation_change().is_none());

        assert!(nav.set_orientation(Orientation {
            yaw: 90.0,
            pitch: 120.0,
            roll: 0.0,
        }));
        let change = nav.take_orientation_change().unwrap();
        assert!((change.yaw - 90.0).abs() < 1e-9);
        assert!((change.pitch - 89.0).abs() < 1e-9);

        // Pure translation keeps the angles.
        let _ = nav.move_horizontally(1.0);
        assert!(nav.take_orientation_change().is_none());
    }

    #[test]
    fn near_plane_follows_eye_height() {
        let mut nav = SceneNavigationController::new(
            NavigationBounds::new(DVec3::ZERO, DVec3::splat(1_000.0), WorldFrame::Flat),
            NavigationOptions::default(),
        );
        nav.activate(Camera::new(DVec3::new(0.0, 0.0, 500.0), DVec3::Y, DVec3::Z))
            .unwrap();
        assert_eq!(nav.camera().unwrap().near(), 5.0);
    }

    #[test]
    fn deactivate_and_reactivate() {
        let mut nav = active(NavigationOptions::default());
        let _ = nav.on_key_event(&KeyEvent::down("KeyW"));
        let _ = nav.on_gesture_event(&GestureEvent::drag(CENTER, MouseButtons::LEFT));
        let cam = nav.deactivate().unwrap();
        assert!(nav.deactivate().is_none());
        assert_eq!(nav.navigation_mode(), NavigationMode::None);
        assert!(!nav.tick(FRAME));

        nav.activate(cam).unwrap();
        // Held keys did not survive the deactivation.
        assert!(!nav.tick(FRAME));
        assert!(nav.on_key_event(&KeyEvent::down("KeyW")).is_handled());
    }

    #[test]
    fn spherical_bounds_are_localized() {
        let radius = 6_371_000.0;
        let world = WorldFrame::spherical(radius);
        let raw = NavigationBounds::new(
            DVec3::new(radius - 50.0, -100.0, -100.0),
            DVec3::new(radius + 50.0, 100.0, 100.0),
            world,
        );
        let nav = SceneNavigationController::new(raw, NavigationOptions::default());
        assert!(nav.bounds().frame().is_some());
    }

    fn random_event(rng: &mut StdRng) -> GestureEvent {
        let point = DVec2::new(rng.random_range(0.0..1280.0), rng.random_range(0.0..720.0));
        let buttons = [
            MouseButtons::LEFT,
            MouseButtons::RIGHT,
            MouseButtons::BOTH,
            MouseButtons::MIDDLE,
        ][rng.random_range(0..4)];
        let modifiers = Modifiers {
            shift: rng.random_bool(0.2),
            ctrl: rng.random_bool(0.2),
            alt: rng.random_bool(0.2),
        };
        let event = match rng.random_range(0..8) {
            0 | 1 => GestureEvent::drag(point, buttons),
            2 => GestureEvent::touch_drag(point, rng.random_range(1..4)),
            3 => GestureEvent::drag_end(point),
            4 => GestureEvent::scroll(point, rng.random_range(-3.0..3.0)),
            5 => GestureEvent::pinch(point, rng.random_range(0.5..1.5)),
            6 => GestureEvent::click_up(point),
            _ => GestureEvent::pointer_move(point),
        };
        event.with_modifiers(modifiers)
    }

    #[test]
    fn random_sessions_keep_invariants() {
        let mut options = NavigationOptions::default();
        options.gestures.allow_zoom_on_click = true;
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for round in 0..8 {
            options.gestures.use_zoom_animations = round % 2 == 1;
            let mut nav = active(options.clone());
            let keys = ["KeyW", "KeyA", "KeyS", "KeyD", "KeyE", "KeyQ"];

            for _ in 0..500 {
                let previous = nav.navigation_mode();
                match rng.random_range(0..10) {
                    0..=5 => {
                        let event = random_event(&mut rng);
                        let _ = nav.on_gesture_event(&event);
                        if previous == NavigationMode::Zoom && !event.kind.is_zoom() {
                            assert_eq!(nav.navigation_mode(), NavigationMode::None);
                        }
                        if event.kind == GestureKind::DragEnd {
                            assert_eq!(nav.navigation_mode(), NavigationMode::None);
                        }
                    }
                    6 => {
                        let code = keys[rng.random_range(0..keys.len())];
                        let event = if rng.random_bool(0.6) {
                            KeyEvent::down(code)
                        } else {
                            KeyEvent::up(code)
                        };
                        let _ = nav.on_key_event(&event);
                    }
                    7 => {
                        let _ = nav.move_horizontally(rng.random_range(-50.0..50.0));
                        let _ = nav.move_vertically(rng.random_range(-50.0..50.0));
                        nav.set_move_up(rng.random_bool(0.3));
                        nav.set_pan_stick(JoystickVector::new(
                            rng.random_range(-1.0..1.0),
                            rng.random_range(-1.0..1.0),
                        ));
                    }
                    _ => {
                        let _ = nav.tick(Duration::from_millis(rng.random_range(1..120)));
                    }
                }
                let position = eye(&nav);
                assert!(nav.bounds().contains(position), "eye {position} escaped the bounds");
                let cam = nav.camera().unwrap();
                assert!((cam.forward.length() - 1.0).abs() < 1e-9);
                assert!(cam.forward.dot(cam.up).abs() < 1e-9);
            }
        }
    }
}
