//! World-state data model for Frontier.
//!
//! Planet descriptors, the structure catalog, the resource/building ledger,
//! and mission/achievement evaluation. Everything here is plain in-memory
//! state: descriptors are immutable once constructed, buildings are created
//! by validated placement and removed only on travel, and the ledger is the
//! single affordability authority for placement.

mod achievements;
mod building;
mod color;
mod ledger;
mod missions;
mod planet;
mod structure;

pub use achievements::{Achievement, AchievementState, evaluate_achievements};
pub use building::{Building, BuildingId};
pub use color::{ColorError, format_hex, parse_hex};
pub use ledger::{PlacementError, ResourceLedger};
pub use missions::{Mission, evaluate_missions};
pub use planet::{BiomeType, DescriptorError, PlanetDescriptor, ResourceProfile, RingSpec};
pub use structure::{StructureCategory, StructureType, YieldKind};
