// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Bounded free-flight camera navigation for 3D scenes.
//!
//! Scene-nav turns pointer gestures, held keys and on-screen joystick input
//! into camera motion that never leaves a navigation volume, and runs the
//! smooth look-at animations used by view presets and animated zooms.
//!
//! # Key entry points
//!
//! - [`navigation::SceneNavigationController`] - the controller hosts feed
//!   events and frame ticks into
//! - [`camera::Camera`] - the perspective camera it drives
//! - [`camera::NavigationBounds`] - the volume the eye is confined to
//! - [`options::NavigationOptions`] - runtime configuration (key flight,
//!   gestures, joystick, animations, key bindings), loadable from TOML
//!
//! # Architecture
//!
//! Every event is classified into exactly one [`navigation::NavigationMode`]
//! and dispatched to that mode's handler. All eye translations go through
//! [`navigation::motion::move_eye`], which rejects or clamps positions
//! outside the bounds. Animations are stepped by the host's frame loop;
//! there are no internal timers or threads.

pub mod camera;
pub mod error;
pub mod input;
pub mod navigation;
pub mod options;
pub mod util;

pub use error::NavError;
pub use navigation::SceneNavigationController;
