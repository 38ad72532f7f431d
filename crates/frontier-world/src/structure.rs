//! The closed structure-type catalog: categories, display names, mineral
//! costs, and per-tick yields. Table-driven so the model factory, ledger,
//! and mission evaluator all dispatch off the same enum instead of string
//! tags.

use serde::{Deserialize, Serialize};

/// Hotbar grouping for placeable structures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructureCategory {
    Colony,
    Station,
    Science,
}

/// Which ledger counter a structure's yield feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YieldKind {
    Minerals,
    Energy,
    Tech,
    None,
}

/// Every placeable structure in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructureType {
    Extractor,
    Solar,
    Habitat,
    Lab,
    Drone,
    Rover,
    Flag,
    Plants,
    StationCore,
    StationWing,
    StationDock,
    Shuttle,
    Satellite,
    Telescope,
    CommDish,
}

impl StructureType {
    /// All structure types, in hotbar order.
    pub const ALL: [StructureType; 15] = [
        Self::Extractor,
        Self::Solar,
        Self::Habitat,
        Self::Lab,
        Self::Drone,
        Self::Rover,
        Self::Flag,
        Self::Plants,
        Self::StationCore,
        Self::StationWing,
        Self::StationDock,
        Self::Shuttle,
        Self::Satellite,
        Self::Telescope,
        Self::CommDish,
    ];

    pub fn category(&self) -> StructureCategory {
        match self {
            Self::Extractor
            | Self::Solar
            | Self::Habitat
            | Self::Lab
            | Self::Drone
            | Self::Rover
            | Self::Flag
            | Self::Plants => StructureCategory::Colony,
            Self::StationCore | Self::StationWing | Self::StationDock | Self::Shuttle => {
                StructureCategory::Station
            }
            Self::Satellite | Self::Telescope | Self::CommDish => StructureCategory::Science,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Extractor => "Extractor",
            Self::Solar => "Solar Array",
            Self::Habitat => "Habitat Pod",
            Self::Lab => "Research Lab",
            Self::Drone => "Maintenance Drone",
            Self::Rover => "Surface Rover",
            Self::Flag => "Flag",
            Self::Plants => "Bio-Dome",
            Self::StationCore => "Station Core",
            Self::StationWing => "Station Wing",
            Self::StationDock => "Docking Bay",
            Self::Shuttle => "Shuttle",
            Self::Satellite => "Comms Satellite",
            Self::Telescope => "Array Telescope",
            Self::CommDish => "Signal Dish",
        }
    }

    /// Mineral cost to place one.
    pub fn cost(&self) -> f64 {
        match self {
            Self::Extractor => 50.0,
            Self::Solar => 30.0,
            Self::Habitat => 60.0,
            Self::Lab => 100.0,
            Self::Drone => 40.0,
            Self::Rover => 45.0,
            Self::Flag => 10.0,
            Self::Plants => 35.0,
            Self::StationCore => 150.0,
            Self::StationWing => 80.0,
            Self::StationDock => 120.0,
            Self::Shuttle => 90.0,
            Self::Satellite => 70.0,
            Self::Telescope => 110.0,
            Self::CommDish => 85.0,
        }
    }

    /// Which counter this structure feeds each resource tick, and the
    /// multiplier applied to the planet's resource profile.
    pub fn yield_rate(&self) -> (YieldKind, f64) {
        match self {
            Self::Extractor => (YieldKind::Minerals, 0.5),
            Self::Solar => (YieldKind::Energy, 0.5),
            Self::Lab => (YieldKind::Tech, 0.2),
            _ => (YieldKind::None, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_every_type_once() {
        assert_eq!(StructureType::ALL.len(), 15);
        for (i, a) in StructureType::ALL.iter().enumerate() {
            for b in &StructureType::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_costs_are_positive() {
        for s in StructureType::ALL {
            assert!(s.cost() > 0.0, "{s:?} has non-positive cost");
        }
    }

    #[test]
    fn test_producers_have_yields() {
        assert_eq!(
            StructureType::Extractor.yield_rate(),
            (YieldKind::Minerals, 0.5)
        );
        assert_eq!(StructureType::Solar.yield_rate(), (YieldKind::Energy, 0.5));
        assert_eq!(StructureType::Lab.yield_rate(), (YieldKind::Tech, 0.2));
        assert_eq!(StructureType::Flag.yield_rate(), (YieldKind::None, 0.0));
    }

    #[test]
    fn test_station_category_grouping() {
        assert_eq!(
            StructureType::StationDock.category(),
            StructureCategory::Station
        );
        assert_eq!(
            StructureType::Telescope.category(),
            StructureCategory::Science
        );
        assert_eq!(StructureType::Rover.category(), StructureCategory::Colony);
    }
}
