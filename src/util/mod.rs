//! Shared utilities: easing curves, angle helpers and the host frame clock.

pub mod angle;
pub mod easing;
pub mod frame_timing;
