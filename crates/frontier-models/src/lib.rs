//! Procedural model factory for Frontier.
//!
//! Synthesizes renderable node trees from parametric rules: structure models
//! keyed by [`StructureType`](frontier_world::StructureType) (with ghost
//! preview variants), planet bodies with atmosphere shells, cloud layers and
//! rings, the starfield point shell, and the placement ring indicator.
//!
//! Every function here is pure: the same inputs produce the same graph, each
//! call owns its result outright, and nothing renders; a renderer (real or
//! headless) walks the trees afterwards.

mod material;
mod node;
mod planet;
mod registry;
mod starfield;

pub use material::Material;
pub use node::{AnimationHook, ModelGroup, ModelNode, Primitive, Transform};
pub use planet::{PlanetModel, placement_ring, planet_model, surface_palette};
pub use registry::{structure_altitude, structure_model};
pub use starfield::{StarParticle, starfield_points};
