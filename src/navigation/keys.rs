//! Held-key flight: integrates the currently pressed navigation keys into
//! a per-frame eye translation.

use std::time::Duration;

use glam::DVec3;

use super::motion::{horizontal_axes, move_eye, EyePolicy};
use crate::camera::{Camera, NavigationBounds};
use crate::input::{EventResult, KeyEvent, KeyEventKind, NavKey};
use crate::options::{KeybindingOptions, KeyNavigationOptions, NavigationKeysMode};

/// Unit direction `key` moves the camera in under `mode`.
///
/// Camera-forward follows the camera's own axes. Tangent-forward projects
/// forward and right onto the local horizontal plane and moves up/down
/// along the true vertical, so pitch never tilts the motion.
#[must_use]
pub fn key_direction(
    key: NavKey,
    camera: &Camera,
    mode: NavigationKeysMode,
) -> Option<DVec3> {
    let (forward, right, up) = match mode {
        NavigationKeysMode::CameraForward => {
            (camera.forward, camera.right(), camera.up)
        }
        NavigationKeysMode::TangentForward => {
            let vertical = camera.vertical_up();
            match key {
                NavKey::Up | NavKey::Down => (DVec3::ZERO, DVec3::ZERO, vertical),
                _ => {
                    let (forward, right) = horizontal_axes(camera)?;
                    (forward, right, vertical)
                }
            }
        }
    };
    let direction = match key {
        NavKey::Forward => forward,
        NavKey::Back => -forward,
        NavKey::Right => right,
        NavKey::Left => -right,
        NavKey::Up => up,
        NavKey::Down => -up,
    };
    direction.try_normalize()
}

/// Keyboard flight state: held keys and the current speed multiplier.
#[derive(Debug, Clone)]
pub struct KeyNavigation {
    options: KeyNavigationOptions,
    bindings: KeybindingOptions,
    /// Held key codes in press order; each code is present at most once.
    held: Vec<String>,
    speed_multiplier: f64,
}

impl KeyNavigation {
    /// Key navigation with the given speeds and bindings.
    #[must_use]
    pub fn new(options: KeyNavigationOptions, bindings: KeybindingOptions) -> Self {
        Self {
            options,
            bindings,
            held: Vec::new(),
            speed_multiplier: 1.0,
        }
    }

    /// Direction table in use.
    #[must_use]
    pub fn mode(&self) -> NavigationKeysMode {
        self.options.navigation_mode
    }

    /// Codes of the held navigation keys, in press order.
    #[must_use]
    pub fn held(&self) -> &[String] {
        &self.held
    }

    /// Multiplier applied to the default speed.
    #[must_use]
    pub fn speed_multiplier(&self) -> f64 {
        self.speed_multiplier
    }

    /// Track a key transition.
    ///
    /// Every event refreshes the speed multiplier: shift flies faster, a
    /// pressed slow key flies slower, both or neither leave it at 1.
    /// Returns [`EventResult::Handled`] only when the held set changed, so a
    /// repeated key-down is ignored.
    pub fn on_key_event(&mut self, event: &KeyEvent) -> EventResult {
        let faster = event.modifiers.shift;
        let slower =
            event.kind == KeyEventKind::Down && self.bindings.is_slower(&event.code);
        self.speed_multiplier = match (faster, slower) {
            (true, false) => self.options.faster_multiplier,
            (false, true) => self.options.slower_multiplier,
            _ => 1.0,
        };

        if self.bindings.lookup(&event.code).is_none() {
            return EventResult::Ignored;
        }
        let position = self.held.iter().position(|code| *code == event.code);
        match (event.kind, position) {
            (KeyEventKind::Down, None) => {
                self.held.push(event.code.clone());
                EventResult::Handled
            }
            (KeyEventKind::Up, Some(index)) => {
                let _ = self.held.remove(index);
                EventResult::Handled
            }
            _ => EventResult::Ignored,
        }
    }

    /// Drop every held key and reset the speed.
    pub fn release_all(&mut self) {
        if !self.held.is_empty() {
            log::debug!("releasing {} held navigation keys", self.held.len());
        }
        self.held.clear();
        self.speed_multiplier = 1.0;
    }

    /// Apply one frame of motion.
    ///
    /// Each held key moves the eye by `speed × multiplier × dt` in its own
    /// direction, one after another; a step that would leave `bounds` is
    /// skipped on its own. Returns whether the eye moved.
    pub fn update(
        &self,
        camera: &mut Camera,
        bounds: &NavigationBounds,
        dt: Duration,
    ) -> bool {
        if self.held.is_empty() {
            return false;
        }
        let distance =
            self.options.default_speed * self.speed_multiplier * dt.as_secs_f64();
        let mut moved = false;
        for code in &self.held {
            let Some(direction) = self
                .bindings
                .lookup(code)
                .and_then(|key| key_direction(key, camera, self.mode()))
            else {
                continue;
            };
            let candidate = camera.eye + direction * distance;
            moved |= move_eye(camera, bounds, candidate, EyePolicy::Reject);
        }
        moved
    }
}
