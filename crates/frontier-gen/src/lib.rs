//! Planet-generation boundary for Frontier.
//!
//! The generation service is the one true asynchronous edge of the game:
//! everything else runs on the frame loop. This crate owns the client seam
//! ([`PlanetSource`]), the JSON wire format with its validation, the
//! never-fail fallback policy ([`GenerationOutcome`]), a deterministic
//! offline generator, the built-in solar-system catalog, and the worker
//! thread that keeps the blocking call off the frame loop.

mod catalog;
mod outcome;
mod procedural;
mod wire;
mod worker;

pub use catalog::{CatalogLevel, builtin_catalog, default_planet};
pub use outcome::{GenError, GeneratedLevel, GenerationOutcome, PlanetSource, generate_or_fallback};
pub use procedural::ProceduralSource;
pub use wire::parse_response;
pub use worker::{PendingGeneration, spawn_generation};
