//! Discrete view modes.

/// Which camera behavior and interaction handler is live.
///
/// Exactly one mode is authoritative over the camera target each frame.
/// Hyperdrive is *not* a mode: it is an orthogonal flag layered over
/// [`ViewMode::Orbit`] that overrides the target while set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    /// Drifting around the active body; planet clicks begin landing.
    #[default]
    Orbit,
    /// Descending; transitions to Surface when close enough.
    Landing,
    /// On the surface; structure placement is live.
    Surface,
    /// Climbing back out; transitions to Orbit when far enough.
    Ascending,
}

impl ViewMode {
    /// Whether surface interaction (ghost preview, placement) is active.
    pub fn is_surface(&self) -> bool {
        matches!(self, Self::Surface)
    }
}
