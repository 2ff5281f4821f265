use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Joystick", inline)]
#[serde(default)]
/// On-screen or gamepad stick parameters.
pub struct JoystickOptions {
    /// Metres moved per unit of stick deflection per sample.
    #[schemars(title = "Sensitivity", range(min = 0.01, max = 10.0), extend("step" = 0.01))]
    pub sensitivity: f64,
    /// Metres risen or descended per tick while up/down is held.
    #[schemars(title = "Up/Down Step", range(min = 0.01, max = 10.0), extend("step" = 0.01))]
    pub up_down_step: f64,
    /// Sampling interval in milliseconds; 0 samples on every frame.
    #[schemars(title = "Tick", range(min = 0, max = 500))]
    pub tick_ms: u64,
    /// Stick deflection below which input is treated as zero.
    #[schemars(title = "Dead Zone", range(min = 0.0, max = 0.9), extend("step" = 0.01))]
    pub dead_zone: f64,
    /// Degrees turned per unit of rotation-stick deflection per sample.
    #[schemars(title = "Rotation Speed", range(min = 0.1, max = 20.0), extend("step" = 0.1))]
    pub rotation_speed: f64,
}

impl Default for JoystickOptions {
    fn default() -> Self {
        Self {
            sensitivity: 0.1,
            up_down_step: 0.05,
            tick_ms: 50,
            dead_zone: 0.1,
            rotation_speed: 2.0,
        }
    }
}
