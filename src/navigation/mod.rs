//! Scene navigation: gesture classification, bounded motion, keyboard and
//! joystick flight, camera animations and the controller tying them
//! together.

/// Anchor selection and the scene picking seam.
pub mod anchor;
/// Look-at and eye-translation animations.
pub mod animation;
/// The scene navigation controller.
pub mod controller;
/// Pointer gesture to navigation mode classification.
pub mod gesture;
/// On-screen joystick integration.
pub mod joystick;
/// Held-key flight.
pub mod keys;
/// Navigation modes and allowed-mode sets.
pub mod mode;
/// Bounded rotate/pan/zoom primitives.
pub mod motion;
/// Top, horizon, turn and fit view presets.
pub mod presets;

pub use anchor::{compute_anchor, NoScene, ScenePicker};
pub use animation::{
    AnimationStatus, CameraAnimation, LookAnimation, MoveAnimation,
};
pub use controller::SceneNavigationController;
pub use gesture::{classify, ButtonCategory};
pub use joystick::{JoystickNavigation, JoystickVector, Orientation};
pub use keys::KeyNavigation;
pub use mode::{AllowedModes, NavigationMode};
pub use motion::{
    EyePolicy, PanSupport, RotationSupport, ZoomOutcome, ZoomRequest,
    ZoomSupport,
};
