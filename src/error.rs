//! Crate-level error types.

use std::fmt;

/// Errors produced by the scene-nav crate.
///
/// Only setup and configuration can fail. Runtime navigation never returns
/// an error: out-of-bounds motion is dropped or clamped and unrecognized
/// events come back as [`EventResult::Ignored`](crate::input::EventResult).
#[derive(Debug)]
pub enum NavError {
    /// The camera handed to `activate` has no perspective (yaw/pitch/distance)
    /// semantics.
    UnsupportedCamera(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedCamera(msg) => {
                write!(f, "unsupported camera: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for NavError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for NavError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
