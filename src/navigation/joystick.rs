//! On-screen joystick integration: a pan stick, a rotation stick, two
//! momentary up/down buttons and an absolute orientation channel for
//! device-orientation sensors.

use std::time::Duration;

use glam::{DVec2, DVec3};

use super::motion::{horizontal_axes, move_eye, EyePolicy};
use crate::camera::{Camera, LookFrom, NavigationBounds};
use crate::options::{JoystickOptions, NavigationKeysMode};
use crate::util::angle::{clamp_pitch, wrap_degrees};

/// Most held-input samples one [`JoystickNavigation::tick`] replays after a
/// long frame; older missed ticks are dropped.
const MAX_CATCH_UP_TICKS: u32 = 4;

/// Analog stick deflection in `[-1, 1]²`, magnitude at most 1.
///
/// `x` is positive to the right, `y` positive away from the user.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct JoystickVector {
    /// Horizontal deflection.
    pub x: f64,
    /// Vertical deflection.
    pub y: f64,
}

impl JoystickVector {
    /// Stick at rest.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Deflection limited to the unit circle. Non-finite input is treated
    /// as rest.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        let v = DVec2::new(x, y);
        if !v.is_finite() {
            return Self::ZERO;
        }
        let v = v.clamp_length_max(1.0);
        Self { x: v.x, y: v.y }
    }

    /// Deflection magnitude.
    #[must_use]
    pub fn length(self) -> f64 {
        DVec2::new(self.x, self.y).length()
    }

    /// Whether the stick is exactly at rest.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// The vector, or exactly zero if its magnitude is below `dead_zone`.
    #[must_use]
    pub fn with_dead_zone(self, dead_zone: f64) -> Self {
        if self.length() < dead_zone {
            Self::ZERO
        } else {
            self
        }
    }
}

/// Absolute camera angles in degrees, e.g. from a device-orientation
/// sensor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    /// Heading, clockwise from north.
    pub yaw: f64,
    /// Elevation, positive upwards.
    pub pitch: f64,
    /// Rotation about the view direction.
    pub roll: f64,
}

/// Joystick state and the motions it drives.
///
/// The direct operations (`move_*`, `rotate_*`, `set_orientation`) apply
/// immediately. Held buttons and sticks are sampled by [`tick`](Self::tick)
/// once per tick interval.
#[derive(Debug, Clone)]
pub struct JoystickNavigation {
    options: JoystickOptions,
    mode: NavigationKeysMode,
    move_up: bool,
    move_down: bool,
    pan_stick: JoystickVector,
    rotation_stick: JoystickVector,
    since_tick: Duration,
}

impl JoystickNavigation {
    /// Joystick navigation; `mode` decides whether forward stick motion
    /// follows the camera or stays level.
    #[must_use]
    pub fn new(options: JoystickOptions, mode: NavigationKeysMode) -> Self {
        Self {
            options,
            mode,
            move_up: false,
            move_down: false,
            pan_stick: JoystickVector::ZERO,
            rotation_stick: JoystickVector::ZERO,
            since_tick: Duration::ZERO,
        }
    }

    /// Whether any button or stick is engaged.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.move_up
            || self.move_down
            || !self.pan_stick.is_zero()
            || !self.rotation_stick.is_zero()
    }

    /// Strafe along the camera's right vector by `dx × sensitivity`.
    pub fn move_horizontally(
        &self,
        camera: &mut Camera,
        bounds: &NavigationBounds,
        dx: f64,
    ) -> bool {
        let right = camera.right();
        translate(camera, bounds, right, dx * self.options.sensitivity)
    }

    /// Move forward by `dy × sensitivity`, along the camera's forward vector
    /// or its level projection in tangent-forward mode.
    pub fn move_vertically(
        &self,
        camera: &mut Camera,
        bounds: &NavigationBounds,
        dy: f64,
    ) -> bool {
        let forward = match self.mode {
            NavigationKeysMode::CameraForward => Some(camera.forward),
            NavigationKeysMode::TangentForward => {
                horizontal_axes(camera).map(|(forward, _)| forward)
            }
        };
        let Some(forward) = forward else {
            return false;
        };
        translate(camera, bounds, forward, dy * self.options.sensitivity)
    }

    /// Hold or release the "up" button.
    pub fn set_move_up(&mut self, active: bool) {
        self.move_up = active;
    }

    /// Hold or release the "down" button.
    pub fn set_move_down(&mut self, active: bool) {
        self.move_down = active;
    }

    /// Set the continuously held pan stick.
    pub fn set_pan_stick(&mut self, stick: JoystickVector) {
        self.pan_stick = stick;
    }

    /// Set the continuously held rotation stick.
    pub fn set_rotation_stick(&mut self, stick: JoystickVector) {
        self.rotation_stick = stick;
    }

    /// Turn by `dx × rotation_speed` degrees; yaw wraps.
    pub fn rotate_yaw(&self, camera: &mut Camera, dx: f64) -> bool {
        rotate(camera, dx * self.options.rotation_speed, 0.0)
    }

    /// Tilt by `dy × rotation_speed` degrees; pitch is clamped.
    pub fn rotate_pitch(&self, camera: &mut Camera, dy: f64) -> bool {
        rotate(camera, 0.0, dy * self.options.rotation_speed)
    }

    /// Override the camera angles. Pitch is clamped like incremental tilts.
    pub fn set_orientation(camera: &mut Camera, orientation: Orientation) {
        let look = LookFrom {
            eye: camera.eye,
            yaw: wrap_degrees(orientation.yaw),
            pitch: clamp_pitch(orientation.pitch),
            roll: orientation.roll,
        };
        camera.look_from(&look);
    }

    /// Release buttons and sticks.
    pub fn release_all(&mut self) {
        self.move_up = false;
        self.move_down = false;
        self.pan_stick = JoystickVector::ZERO;
        self.rotation_stick = JoystickVector::ZERO;
        self.since_tick = Duration::ZERO;
    }

    /// Advance the tick clock by `dt` and apply held input once per elapsed
    /// tick interval (every call when the interval is zero), replaying at
    /// most a few missed intervals. Returns whether the camera changed.
    pub fn tick(
        &mut self,
        camera: &mut Camera,
        bounds: &NavigationBounds,
        dt: Duration,
    ) -> bool {
        if !self.is_active() {
            self.since_tick = Duration::ZERO;
            return false;
        }
        let interval = Duration::from_millis(self.options.tick_ms);
        if interval.is_zero() {
            return self.sample(camera, bounds);
        }
        self.since_tick = self.since_tick.saturating_add(dt);
        let mut changed = false;
        let mut samples = 0;
        while self.since_tick >= interval {
            if samples == MAX_CATCH_UP_TICKS {
                log::debug!("joystick fell behind by {:?}; dropping", self.since_tick);
                self.since_tick = Duration::ZERO;
                break;
            }
            self.since_tick -= interval;
            samples += 1;
            changed |= self.sample(camera, bounds);
        }
        changed
    }

    fn sample(&self, camera: &mut Camera, bounds: &NavigationBounds) -> bool {
        let mut changed = false;
        let step = self.options.up_down_step;
        if self.move_up {
            let up = camera.vertical_up();
            changed |= translate(camera, bounds, up, step);
        }
        if self.move_down {
            let up = camera.vertical_up();
            changed |= translate(camera, bounds, up, -step);
        }

        let pan = self.pan_stick.with_dead_zone(self.options.dead_zone);
        if !pan.is_zero() {
            changed |= self.move_horizontally(camera, bounds, pan.x);
            changed |= self.move_vertically(camera, bounds, pan.y);
        }
        let rotation = self.rotation_stick.with_dead_zone(self.options.dead_zone);
        if !rotation.is_zero() {
            let speed = self.options.rotation_speed;
            changed |= rotate(camera, rotation.x * speed, rotation.y * speed);
        }
        changed
    }
}

fn translate(
    camera: &mut Camera,
    bounds: &NavigationBounds,
    direction: DVec3,
    distance: f64,
) -> bool {
    if distance == 0.0 {
        return false;
    }
    let candidate = camera.eye + direction * distance;
    move_eye(camera, bounds, candidate, EyePolicy::Clamp)
}

fn rotate(camera: &mut Camera, yaw_delta: f64, pitch_delta: f64) -> bool {
    if yaw_delta == 0.0 && pitch_delta == 0.0 {
        return false;
    }
    let mut look = camera.as_look_from();
    look.yaw = wrap_degrees(look.yaw + yaw_delta);
    look.pitch = clamp_pitch(look.pitch + pitch_delta);
    camera.look_from(&look);
    true
}
