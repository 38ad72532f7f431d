//! Placed structures. A [`Building`] records *where on the unit sphere* a
//! structure sits; the rendered mesh is derived from it each frame and is
//! never the source of truth.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::structure::StructureType;

/// Stable identity for a placed building, unique within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BuildingId(pub u64);

/// One placed structure.
///
/// `position` is a planet-local *unit* vector: the surface point divided by
/// the live visual radius at hit time. Scaling the planet re-derives the
/// world position as `position * visual_radius + altitude * position`, so
/// placement survives any change of visual scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub id: BuildingId,
    pub structure: StructureType,
    /// Unit vector in the planet's local frame.
    pub position: Vec3,
    /// Simulation time at placement, in seconds.
    pub placed_at: f64,
    /// Which catalog body this building belongs to.
    pub planet_index: usize,
}

/// Tolerance for the unit-vector invariant on `position`.
pub(crate) const UNIT_TOLERANCE: f32 = 1e-4;

impl Building {
    /// Whether `position` satisfies the unit-sphere invariant.
    pub fn position_is_unit(&self) -> bool {
        (self.position.length() - 1.0).abs() <= UNIT_TOLERANCE
    }
}
