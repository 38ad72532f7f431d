//! Frame inputs and outputs exchanged between the session and the scene.

use glam::{Vec2, Vec3};

use frontier_camera::ViewMode;
use frontier_world::{Building, StructureType};

use crate::pointer::PointerSample;

/// Immutable view of the session state the scene needs for one tick.
///
/// The scene never mutates game state; everything it wants changed comes
/// back as a [`SceneEvent`] for the session to apply.
#[derive(Debug, Clone, Copy)]
pub struct FrameSnapshot<'a> {
    pub mode: ViewMode,
    pub hyperdrive: bool,
    /// Accumulated pan offset, already decayed by the session.
    pub pan: Vec2,
    /// Window size in pixels.
    pub viewport: Vec2,
    /// Pointer samples received since the last tick, in order.
    pub pointer: &'a [PointerSample],
    /// Structure armed in the build palette, if any.
    pub selected_structure: Option<StructureType>,
    /// Authoritative building list from the ledger.
    pub buildings: &'a [Building],
}

/// Something that happened in the scene this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneEvent {
    /// The player clicked the planet while in orbit.
    LandingRequested,
    /// The player clicked a valid surface point with a structure armed.
    PlacementRequested {
        structure: StructureType,
        local_unit: Vec3,
    },
    /// Pointer drag delta in pixels, for pan accumulation.
    PanDragged(Vec2),
    /// The descent camera reached the surface.
    LandComplete,
    /// The ascent camera cleared the planet.
    AscendComplete,
}
