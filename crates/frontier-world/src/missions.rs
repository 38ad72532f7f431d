//! Per-planet build missions: pure predicate counting over the ledger,
//! re-evaluated on state change.

use serde::{Deserialize, Serialize};

use crate::ledger::ResourceLedger;
use crate::structure::StructureType;

/// A "build N of X" objective attached to a catalog body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Required count of the target structure.
    pub target: u32,
    /// Current count, updated by [`evaluate_missions`].
    pub current: u32,
    /// Structure type this mission counts.
    pub building: StructureType,
    pub completed: bool,
}

impl Mission {
    pub fn new(
        id: &str,
        title: &str,
        description: &str,
        target: u32,
        building: StructureType,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            target,
            current: 0,
            building,
            completed: false,
        }
    }
}

/// Recount every mission against the ledger. Returns the ids of missions
/// that completed during this evaluation (fire-once: already-completed
/// missions never re-report).
pub fn evaluate_missions(missions: &mut [Mission], ledger: &ResourceLedger) -> Vec<String> {
    let mut newly_completed = Vec::new();
    for mission in missions.iter_mut() {
        mission.current = ledger.count_of(mission.building).min(u32::MAX as usize) as u32;
        if !mission.completed && mission.current >= mission.target {
            mission.completed = true;
            newly_completed.push(mission.id.clone());
        }
    }
    newly_completed
}
