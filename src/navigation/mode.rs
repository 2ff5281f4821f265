//! The single active interaction type and the set of permitted ones.

/// The interaction currently driving the camera. Exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NavigationMode {
    /// No pointer interaction in progress.
    #[default]
    None,
    /// Orbit around the anchor.
    Rotation,
    /// Look around from the eye.
    FirstPersonRotation,
    /// Translate orthogonally to the view direction.
    Pan,
    /// Move toward/away from the anchor (wheel or pinch).
    Zoom,
    /// Fly toward a clicked point.
    ZoomOnClick,
}

impl NavigationMode {
    /// All modes, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::None,
        Self::Rotation,
        Self::FirstPersonRotation,
        Self::Pan,
        Self::Zoom,
        Self::ZoomOnClick,
    ];

    /// Whether this mode moves the camera.
    #[must_use]
    pub fn is_motion(self) -> bool {
        self != Self::None
    }

    /// Zoom or zoom-on-click.
    #[must_use]
    pub fn is_zoom(self) -> bool {
        matches!(self, Self::Zoom | Self::ZoomOnClick)
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Set of navigation modes a controller may enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AllowedModes(u8);

impl AllowedModes {
    /// Nothing allowed.
    pub const EMPTY: Self = Self(0);

    /// Rotation, first-person rotation, pan and zoom.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_modes(&[
            NavigationMode::Rotation,
            NavigationMode::FirstPersonRotation,
            NavigationMode::Pan,
            NavigationMode::Zoom,
        ])
    }

    /// Set from a list of modes.
    #[must_use]
    pub fn from_modes(modes: &[NavigationMode]) -> Self {
        modes.iter().fold(Self::EMPTY, |set, &m| set.with(m))
    }

    /// This set plus `mode`.
    #[must_use]
    pub fn with(self, mode: NavigationMode) -> Self {
        Self(self.0 | mode.bit())
    }

    /// This set minus `mode`.
    #[must_use]
    pub fn without(self, mode: NavigationMode) -> Self {
        Self(self.0 & !mode.bit())
    }

    /// Whether `mode` is allowed. [`NavigationMode::None`] always is.
    #[must_use]
    pub fn contains(self, mode: NavigationMode) -> bool {
        mode == NavigationMode::None || self.0 & mode.bit() != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_set() {
        let set = AllowedModes::standard();
        assert!(set.contains(NavigationMode::Rotation));
        assert!(set.contains(NavigationMode::Zoom));
        assert!(!set.contains(NavigationMode::ZoomOnClick));
        assert!(set.contains(NavigationMode::None));
    }

    #[test]
    fn with_and_without() {
        let set = AllowedModes::EMPTY
            .with(NavigationMode::Pan)
            .with(NavigationMode::ZoomOnClick)
            .without(NavigationMode::Pan);
        assert!(!set.contains(NavigationMode::Pan));
        assert!(set.contains(NavigationMode::ZoomOnClick));
        for mode in NavigationMode::ALL {
            assert_eq!(
                AllowedModes::EMPTY.contains(mode),
                mode == NavigationMode::None
            );
        }
    }
}
