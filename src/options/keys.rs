use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How navigation keys map to camera translations.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum NavigationKeysMode {
    /// Keys follow the camera's own forward/right/up axes.
    CameraForward,
    /// Forward/right are projected onto the local horizontal plane and
    /// up/down follow the true vertical, so pitch never tilts the motion.
    #[default]
    TangentForward,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Keyboard", inline)]
#[serde(default)]
/// Held-key flight parameters.
pub struct KeyNavigationOptions {
    /// Key-to-direction mapping mode.
    #[schemars(title = "Navigation Mode")]
    pub navigation_mode: NavigationKeysMode,
    /// Movement speed in metres per second.
    #[schemars(title = "Speed", range(min = 0.1, max = 1000.0), extend("step" = 0.1))]
    pub default_speed: f64,
    /// Speed multiplier while the slow-down key is held.
    #[schemars(title = "Slower Multiplier", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub slower_multiplier: f64,
    /// Speed multiplier while shift is held.
    #[schemars(title = "Faster Multiplier", range(min = 1.0, max = 20.0), extend("step" = 0.5))]
    pub faster_multiplier: f64,
}

impl Default for KeyNavigationOptions {
    fn default() -> Self {
        Self {
            navigation_mode: NavigationKeysMode::TangentForward,
            default_speed: 5.0,
            slower_multiplier: 0.25,
            faster_multiplier: 3.0,
        }
    }
}
