use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Pointer", inline)]
#[serde(default)]
/// Pointer drag, wheel and pinch behaviour.
pub struct GestureOptions {
    /// Zoom toward a clicked point. Only effective with animated zoom.
    #[schemars(title = "Zoom On Click")]
    pub allow_zoom_on_click: bool,
    /// Animate zoom steps by a fixed fraction instead of moving per notch.
    #[schemars(title = "Animated Zoom")]
    pub use_zoom_animations: bool,
    /// Swap the pan and rotate buttons.
    #[schemars(title = "Invert Buttons")]
    pub invert_buttons: bool,
    /// Factor applied to wheel notches when zooming.
    #[schemars(title = "Scroll Zoom", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub scroll_zoom_multiplier: f64,
    /// Fraction of the anchor distance flown per animated zoom-in step.
    #[schemars(skip)]
    pub fly_forward_fraction: f64,
    /// Fraction of the anchor distance flown per animated zoom-out step
    /// (negative).
    #[schemars(skip)]
    pub fly_back_fraction: f64,
    /// Duration of one animated zoom step in milliseconds.
    #[schemars(title = "Zoom Duration", range(min = 50, max = 2000))]
    pub zoom_animation_ms: u64,
    /// Rotation per dragged pixel in degrees.
    #[schemars(title = "Rotate Speed", range(min = 0.05, max = 2.0), extend("step" = 0.05))]
    pub degrees_per_pixel: f64,
}

impl Default for GestureOptions {
    fn default() -> Self {
        Self {
            allow_zoom_on_click: false,
            use_zoom_animations: false,
            invert_buttons: false,
            scroll_zoom_multiplier: 0.12,
            fly_forward_fraction: 0.75,
            fly_back_fraction: -0.9,
            zoom_animation_ms: 400,
            degrees_per_pixel: 0.25,
        }
    }
}
