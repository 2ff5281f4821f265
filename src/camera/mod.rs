//! Camera model for navigation.
//!
//! Provides the perspective camera, its look-at/look-from angle views, the
//! flat/spherical reference-frame service and the bounded navigation volume.

/// Axis-aligned navigation volume.
pub mod bounds;
/// Camera struct, projection and angle representations.
pub mod core;
/// Flat vs spherical "up" and local east/north/up frames.
pub mod frame;
/// Height-dependent near plane policy.
pub mod near_plane;

pub use self::core::{Camera, LookAt, LookFrom, Projection, Ray};
pub use bounds::NavigationBounds;
pub use frame::{LocalFrame, WorldFrame};
