use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
/// View-preset animation parameters.
pub struct AnimationOptions {
    /// Duration of view-preset fly animations in milliseconds.
    #[schemars(title = "Duration", range(min = 0, max = 5000))]
    pub duration_ms: u64,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self { duration_ms: 500 }
    }
}
