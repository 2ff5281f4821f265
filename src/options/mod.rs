//! Centralized navigation options with TOML preset support.
//!
//! All tweakable settings (keyboard flight, pointer gestures, joystick,
//! animations, key bindings) are consolidated here. Options serialize
//! to/from TOML so hosts can ship navigation presets.

mod animation;
mod gestures;
mod joystick;
mod keybindings;
mod keys;

use std::path::Path;
use std::time::Duration;

pub use animation::AnimationOptions;
pub use gestures::GestureOptions;
pub use joystick::JoystickOptions;
pub use keybindings::KeybindingOptions;
pub use keys::{KeyNavigationOptions, NavigationKeysMode};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::NavError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[keys]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct NavigationOptions {
    /// Held-key flight parameters.
    pub keys: KeyNavigationOptions,
    /// Pointer gesture parameters.
    pub gestures: GestureOptions,
    /// Joystick parameters.
    pub joystick: JoystickOptions,
    /// View-preset animation parameters.
    pub animation: AnimationOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl NavigationOptions {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(NavigationOptions)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`NavError::Io`] if the file cannot be read, [`NavError::OptionsParse`]
    /// if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, NavError> {
        let content = std::fs::read_to_string(path).map_err(NavError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`NavError::OptionsParse`] on malformed TOML or mistyped fields.
    pub fn from_toml(content: &str) -> Result<Self, NavError> {
        toml::from_str(content)
            .map_err(|e| NavError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// [`NavError::Io`] if the file or its directory cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), NavError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| NavError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(NavError::Io)?;
        }
        std::fs::write(path, content).map_err(NavError::Io)
    }

    /// Duration of one animated zoom step.
    #[must_use]
    pub fn zoom_animation_duration(&self) -> Duration {
        Duration::from_millis(self.gestures.zoom_animation_ms)
    }

    /// Duration of view-preset animations.
    #[must_use]
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation.duration_ms)
    }

    /// Joystick sampling interval.
    #[must_use]
    pub fn joystick_tick(&self) -> Duration {
        Duration::from_millis(self.joystick.tick_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::NavKey;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = NavigationOptions::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: NavigationOptions = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[keys]
navigation_mode = "camera_forward"
default_speed = 12.5
"#;
        let opts = NavigationOptions::from_toml(toml_str).unwrap();
        assert_eq!(opts.keys.navigation_mode, NavigationKeysMode::CameraForward);
        assert_eq!(opts.keys.default_speed, 12.5);
        // Everything else should be default
        assert_eq!(opts.keys.faster_multiplier, 3.0);
        assert_eq!(opts.gestures.scroll_zoom_multiplier, 0.12);
        assert_eq!(opts.joystick.tick_ms, 50);
    }

    #[test]
    fn invalid_toml_is_an_options_error() {
        let err = NavigationOptions::from_toml("[keys\n").unwrap_err();
        assert!(matches!(err, NavError::OptionsParse(_)));
    }

    #[test]
    fn keybinding_lookup() {
        let opts = NavigationOptions::default();
        assert_eq!(opts.keybindings.lookup("KeyW"), Some(NavKey::Forward));
        assert_eq!(opts.keybindings.lookup("ArrowLeft"), Some(NavKey::Left));
        assert_eq!(opts.keybindings.lookup("KeyQ"), Some(NavKey::Down));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
        assert!(opts.keybindings.is_slower("Space"));
    }

    #[test]
    fn custom_bindings_from_toml() {
        let toml_str = r#"
[keybindings]
slower = "ControlLeft"

[keybindings.bindings]
KeyI = "forward"
KeyK = "back"
"#;
        let opts = NavigationOptions::from_toml(toml_str).unwrap();
        assert_eq!(opts.keybindings.lookup("KeyI"), Some(NavKey::Forward));
        assert_eq!(opts.keybindings.lookup("KeyW"), None);
        assert!(opts.keybindings.is_slower("ControlLeft"));
    }

    #[test]
    fn durations() {
        let opts = NavigationOptions::default();
        assert_eq!(opts.animation_duration(), Duration::from_millis(500));
        assert_eq!(opts.joystick_tick(), Duration::from_millis(50));
        assert_eq!(opts.zoom_animation_duration(), Duration::from_millis(400));
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = std::env::temp_dir().join("scene-nav-options-test");
        let path = dir.join("preset.toml");
        let mut opts = NavigationOptions::default();
        opts.gestures.invert_buttons = true;
        opts.save(&path).unwrap();
        let loaded = NavigationOptions::load(&path).unwrap();
        assert_eq!(loaded, opts);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(NavigationOptions::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("keys"));
        assert!(props.contains_key("gestures"));
        assert!(props.contains_key("joystick"));
        assert!(props.contains_key("animation"));
        assert!(!props.contains_key("keybindings"));

        let gestures = &props["gestures"]["properties"];
        assert!(gestures.get("invert_buttons").is_some());
        assert!(gestures.get("fly_forward_fraction").is_none());
    }
}
