//! Scene graph management and the per-frame tick.
//!
//! [`SceneContext`] owns everything visual: the active planet's node tree,
//! the starfield, building visuals reconciled against the ledger, the ghost
//! preview, and the camera. Game state lives in the session; each frame the
//! session hands the scene an immutable [`FrameSnapshot`] and receives a
//! list of [`SceneEvent`]s describing what the player did to the world.

mod context;
mod picking;
mod pointer;
mod snapshot;

pub use context::{BuildingVisual, GhostPreview, SceneContext};
pub use picking::{pick_sphere, pointer_ray, PickRay, SurfaceHit};
pub use pointer::{PointerOutcome, PointerSample, PointerTracker};
pub use snapshot::{FrameSnapshot, SceneEvent};
