//! The resource and building ledger: the single mutable record of the
//! colony. Three things mutate it (the fixed-period resource tick,
//! validated placement, and travel reset) and each is atomic: a rejected
//! placement leaves every field untouched.

use glam::Vec3;
use thiserror::Error;

use crate::building::{Building, BuildingId, UNIT_TOLERANCE};
use crate::planet::ResourceProfile;
use crate::structure::{StructureType, YieldKind};

/// Base per-tick trickle, credited regardless of structures.
const BASE_MINERALS_PER_TICK: f64 = 0.5;
const BASE_ENERGY_PER_TICK: f64 = 0.2;

/// Why a placement was rejected. Rejections are silent at the game level
/// (no partial mutation, optionally surfaced as a UI cue).
#[derive(Debug, Error, PartialEq)]
pub enum PlacementError {
    /// Not enough minerals banked for this structure's cost.
    #[error("cannot afford {structure:?}: need {cost}, have {available}")]
    NotAffordable {
        structure: StructureType,
        cost: f64,
        available: f64,
    },

    /// The surface point is not a unit vector; the hit resolver is expected
    /// to normalize before requesting placement.
    #[error("placement position is not on the unit sphere (length {length})")]
    NotUnitVector { length: f32 },
}

/// Accumulated resources plus the list of placed structures.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceLedger {
    pub minerals: f64,
    pub energy: f64,
    pub tech: f64,
    buildings: Vec<Building>,
    next_id: u64,
}

impl ResourceLedger {
    /// New ledger with the given starting stockpile.
    pub fn new(minerals: f64, energy: f64, tech: f64) -> Self {
        Self {
            minerals,
            energy,
            tech,
            buildings: Vec::new(),
            next_id: 1,
        }
    }

    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    /// Count of placed buildings of one structure type.
    pub fn count_of(&self, structure: StructureType) -> usize {
        self.buildings
            .iter()
            .filter(|b| b.structure == structure)
            .count()
    }

    /// Apply one resource tick: base trickle plus per-structure yields
    /// scaled by the active planet's resource profile.
    pub fn tick(&mut self, profile: &ResourceProfile) {
        let mut minerals = BASE_MINERALS_PER_TICK;
        let mut energy = BASE_ENERGY_PER_TICK;
        let mut tech = 0.0;

        for building in &self.buildings {
            let (kind, rate) = building.structure.yield_rate();
            match kind {
                YieldKind::Minerals => minerals += profile.minerals * rate,
                YieldKind::Energy => energy += profile.energy * rate,
                YieldKind::Tech => tech += profile.tech * rate,
                YieldKind::None => {}
            }
        }

        self.minerals += minerals;
        self.energy += energy;
        self.tech += tech;
    }

    /// Place a structure at a planet-local unit position.
    ///
    /// Atomic: on any rejection nothing changes. On success the cost is
    /// subtracted, the building appended, and a reference to it returned.
    pub fn place(
        &mut self,
        structure: StructureType,
        position: Vec3,
        planet_index: usize,
        sim_time: f64,
    ) -> Result<&Building, PlacementError> {
        let length = position.length();
        if (length - 1.0).abs() > UNIT_TOLERANCE {
            return Err(PlacementError::NotUnitVector { length });
        }

        let cost = structure.cost();
        if self.minerals < cost {
            return Err(PlacementError::NotAffordable {
                structure,
                cost,
                available: self.minerals,
            });
        }

        self.minerals -= cost;
        let id = BuildingId(self.next_id);
        self.next_id += 1;
        self.buildings.push(Building {
            id,
            structure,
            position,
            placed_at: sim_time,
            planet_index,
        });
        let last = self.buildings.len() - 1;
        Ok(&self.buildings[last])
    }

    /// Travel to a new body: buildings are abandoned, resource counters
    /// carry over unchanged.
    pub fn travel_reset(&mut self) {
        self.buildings.clear();
    }
}

impl Default for ResourceLedger {
    fn default() -> Self {
        // Original starting stockpile.
        Self::new(250.0, 150.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_up() -> Vec3 {
        Vec3::new(0.0, 1.0, 0.0)
    }

    #[test]
    fn test_scenario_place_affordable_structure() {
        // {minerals: 100}, cost-50 structure, valid surface hit.
        let mut ledger = ResourceLedger::new(100.0, 0.0, 0.0);
        let placed = ledger
            .place(StructureType::Extractor, unit_up(), 0, 12.0)
            .unwrap();
        assert_eq!(placed.id, BuildingId(1));
        assert!((ledger.minerals - 50.0).abs() < 1e-9);
        assert_eq!(ledger.buildings().len(), 1);
    }

    #[test]
    fn test_unaffordable_placement_mutates_nothing() {
        let mut ledger = ResourceLedger::new(20.0, 5.0, 1.0);
        let before = ledger.clone();
        let err = ledger
            .place(StructureType::Lab, unit_up(), 0, 0.0)
            .unwrap_err();
        assert!(matches!(err, PlacementError::NotAffordable { .. }));
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_non_unit_position_rejected_without_charge() {
        let mut ledger = ResourceLedger::new(500.0, 0.0, 0.0);
        let err = ledger
            .place(StructureType::Solar, Vec3::new(0.0, 140.0, 0.0), 0, 0.0)
            .unwrap_err();
        assert!(matches!(err, PlacementError::NotUnitVector { .. }));
        assert!((ledger.minerals - 500.0).abs() < 1e-9);
        assert!(ledger.buildings().is_empty());
    }

    #[test]
    fn test_placed_positions_stay_unit_for_any_visual_radius() {
        let mut ledger = ResourceLedger::new(10_000.0, 0.0, 0.0);
        // Hits computed against wildly different visual radii all normalize
        // to the same unit sphere before reaching the ledger.
        for (i, radius) in [40.0_f32, 1400.0, 16_000.0].iter().enumerate() {
            let world_hit = Vec3::new(0.3, 0.8, -0.52).normalize() * radius;
            let local_unit = world_hit / radius;
            ledger
                .place(StructureType::Habitat, local_unit.normalize(), i, 0.0)
                .unwrap();
        }
        for b in ledger.buildings() {
            assert!(b.position_is_unit(), "{:?}", b.position);
        }
    }

    #[test]
    fn test_ids_unique_and_monotonic() {
        let mut ledger = ResourceLedger::new(1000.0, 0.0, 0.0);
        for _ in 0..4 {
            ledger
                .place(StructureType::Flag, unit_up(), 0, 0.0)
                .unwrap();
        }
        let ids: Vec<u64> = ledger.buildings().iter().map(|b| b.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_tick_applies_profile_scaled_yields() {
        let mut ledger = ResourceLedger::new(1000.0, 0.0, 0.0);
        ledger
            .place(StructureType::Extractor, unit_up(), 0, 0.0)
            .unwrap();
        ledger.place(StructureType::Lab, unit_up(), 0, 0.0).unwrap();

        let profile = ResourceProfile::new(12.0, 15.0, 18.0);
        let minerals_before = ledger.minerals;
        ledger.tick(&profile);

        // extractor: 12 * 0.5 = 6, plus 0.5 base trickle.
        assert!((ledger.minerals - (minerals_before + 6.5)).abs() < 1e-9);
        // no solar: only the 0.2 base energy trickle.
        assert!((ledger.energy - 0.2).abs() < 1e-9);
        // lab: 18 * 0.2 = 3.6.
        assert!((ledger.tech - 3.6).abs() < 1e-9);
    }

    #[test]
    fn test_travel_reset_keeps_counters_drops_buildings() {
        let mut ledger = ResourceLedger::new(300.0, 80.0, 12.0);
        ledger
            .place(StructureType::Solar, unit_up(), 0, 0.0)
            .unwrap();
        ledger.travel_reset();
        assert!(ledger.buildings().is_empty());
        assert!((ledger.minerals - 270.0).abs() < 1e-9);
        assert!((ledger.energy - 80.0).abs() < 1e-9);
        assert!((ledger.tech - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_ids_not_reused_after_travel() {
        let mut ledger = ResourceLedger::new(1000.0, 0.0, 0.0);
        ledger
            .place(StructureType::Flag, unit_up(), 0, 0.0)
            .unwrap();
        ledger.travel_reset();
        let placed = ledger
            .place(StructureType::Flag, unit_up(), 1, 0.0)
            .unwrap();
        assert_eq!(placed.id, BuildingId(2));
    }
}
