//! Time-driven camera animations.
//!
//! Animations are advanced by the host's frame loop through
//! [`CameraAnimation::step`]; there are no timers. A finished animation
//! leaves the camera exactly on its target.

use std::time::Duration;

use glam::DVec3;

use crate::camera::{Camera, LookAt};
use crate::util::angle::shortest_yaw_target;
use crate::util::easing::{lerp, EasingFunction};

/// Whether an animation wants more frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationStatus {
    /// More frames to go.
    Running,
    /// The target was reached; drop the animation.
    Finished,
}

/// Elapsed time over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Progress {
    duration: Duration,
    elapsed: Duration,
}

impl Progress {
    fn new(duration: Duration) -> Self {
        Self {
            duration,
            elapsed: Duration::ZERO,
        }
    }

    /// Advance and return the raw fraction in `[0, 1]`.
    fn advance(&mut self, dt: Duration) -> f64 {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        if self.duration.is_zero() {
            1.0
        } else {
            self.elapsed.as_secs_f64() / self.duration.as_secs_f64()
        }
    }

    fn status(&self) -> AnimationStatus {
        if self.elapsed >= self.duration {
            AnimationStatus::Finished
        } else {
            AnimationStatus::Running
        }
    }
}

/// Interpolation source captured from the camera on the first frame.
#[derive(Debug, Clone, Copy, PartialEq)]
struct LookStart {
    reference: DVec3,
    yaw: f64,
    pitch: f64,
    /// Target yaw shifted by a full turn if that is the shorter way.
    target_yaw: f64,
}

/// Cartesian fly-to between two look-at states.
///
/// Reference point, pitch, yaw and distance are interpolated independently
/// with a quadratic ease-in-out; yaw takes the shorter way around.
#[derive(Debug, Clone, PartialEq)]
pub struct LookAnimation {
    target: LookAt,
    start_distance: f64,
    start: Option<LookStart>,
    progress: Progress,
    easing: EasingFunction,
}

impl LookAnimation {
    /// Animate toward `target`. The camera's look-at at `start_distance` is
    /// captured as the source when the animation first steps.
    #[must_use]
    pub fn new(target: LookAt, start_distance: f64, duration: Duration) -> Self {
        Self {
            target,
            start_distance,
            start: None,
            progress: Progress::new(duration),
            easing: EasingFunction::QuadraticInOut,
        }
    }

    /// Same animation with a different easing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// The look-at the animation ends on.
    #[must_use]
    pub fn target(&self) -> &LookAt {
        &self.target
    }

    /// Capture the interpolation source from `camera`. Called implicitly by
    /// the first [`step`](Self::step).
    pub fn start(&mut self, camera: &Camera) {
        let from = camera.as_look_at(self.start_distance);
        self.start = Some(LookStart {
            reference: from.reference,
            yaw: from.yaw,
            pitch: from.pitch,
            target_yaw: shortest_yaw_target(from.yaw, self.target.yaw),
        });
    }

    /// Advance by `dt` and pose the camera.
    pub fn step(&mut self, camera: &mut Camera, dt: Duration) -> AnimationStatus {
        if self.start.is_none() {
            self.start(camera);
        }
        let Some(start) = self.start else {
            return AnimationStatus::Finished;
        };
        let t = self.easing.evaluate(self.progress.advance(dt));
        let look = if t >= 1.0 {
            self.target
        } else {
            LookAt {
                reference: start.reference.lerp(self.target.reference, t),
                yaw: lerp(start.yaw, start.target_yaw, t),
                pitch: lerp(start.pitch, self.target.pitch, t),
                distance: lerp(self.start_distance, self.target.distance, t),
            }
        };
        camera.look_at(&look);
        self.progress.status()
    }
}

/// Eased eye translation with a fixed orientation.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveAnimation {
    from: DVec3,
    to: DVec3,
    progress: Progress,
    easing: EasingFunction,
}

impl MoveAnimation {
    /// Move the eye from `from` to `to` over `duration`.
    #[must_use]
    pub fn new(from: DVec3, to: DVec3, duration: Duration) -> Self {
        Self {
            from,
            to,
            progress: Progress::new(duration),
            easing: EasingFunction::QuadraticInOut,
        }
    }

    /// Final eye position.
    #[must_use]
    pub fn target(&self) -> DVec3 {
        self.to
    }

    /// Advance by `dt` and move the eye.
    pub fn step(&mut self, camera: &mut Camera, dt: Duration) -> AnimationStatus {
        let t = self.easing.evaluate(self.progress.advance(dt));
        camera.eye = if t >= 1.0 {
            self.to
        } else {
            self.from.lerp(self.to, t)
        };
        self.progress.status()
    }
}

/// Any animation the controller can run on its camera.
#[derive(Debug, Clone, PartialEq)]
pub enum CameraAnimation {
    /// Look-at fly-to.
    Look(LookAnimation),
    /// Eye translation.
    Move(MoveAnimation),
}

impl CameraAnimation {
    /// Advance by `dt` and update `camera`.
    pub fn step(&mut self, camera: &mut Camera, dt: Duration) -> AnimationStatus {
        match self {
            Self::Look(anim) => anim.step(camera, dt),
            Self::Move(anim) => anim.step(camera, dt),
        }
    }

    /// Total duration.
    #[must_use]
    pub fn duration(&self) -> Duration {
        match self {
            Self::Look(anim) => anim.progress.duration,
            Self::Move(anim) => anim.progress.duration,
        }
    }
}

impl From<LookAnimation> for CameraAnimation {
    fn from(anim: LookAnimation) -> Self {
        Self::Look(anim)
    }
}

impl From<MoveAnimation> for CameraAnimation {
    fn from(anim: MoveAnimation) -> Self {
        Self::Move(anim)
    }
}
