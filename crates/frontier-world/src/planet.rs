//! Planet descriptors: the immutable per-body data the whole simulation
//! hangs off. A descriptor is validated once at its boundary (service or
//! catalog) and then replaced wholesale on travel, never mutated.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Broad surface/appearance class of a celestial body.
///
/// Drives procedural surface palettes and mesh tessellation in the model
/// factory. The set matches the generation service's vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BiomeType {
    Terrestrial,
    GasGiant,
    IceGiant,
    Lava,
    Toxic,
    Crystal,
    #[default]
    Arid,
    Cyber,
    Ancient,
}

impl BiomeType {
    /// Parse the service's display string (e.g. `"Gas Giant"`). Unknown
    /// strings fall back to [`BiomeType::Arid`] rather than failing; a
    /// misclassified biome only costs cosmetics.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Terrestrial" => Self::Terrestrial,
            "Gas Giant" => Self::GasGiant,
            "Ice Giant" => Self::IceGiant,
            "Lava" => Self::Lava,
            "Toxic" => Self::Toxic,
            "Crystal" => Self::Crystal,
            "Arid" => Self::Arid,
            "Cyber" => Self::Cyber,
            "Ancient" => Self::Ancient,
            _ => Self::default(),
        }
    }

    /// Display label matching the service vocabulary.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Terrestrial => "Terrestrial",
            Self::GasGiant => "Gas Giant",
            Self::IceGiant => "Ice Giant",
            Self::Lava => "Lava",
            Self::Toxic => "Toxic",
            Self::Crystal => "Crystal",
            Self::Arid => "Arid",
            Self::Cyber => "Cyber",
            Self::Ancient => "Ancient",
        }
    }
}

/// Per-planet resource richness, scaled into per-tick yields by the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ResourceProfile {
    pub minerals: f64,
    pub energy: f64,
    pub tech: f64,
}

impl ResourceProfile {
    pub const fn new(minerals: f64, energy: f64, tech: f64) -> Self {
        Self {
            minerals,
            energy,
            tech,
        }
    }
}

/// Ring geometry, in multiples of the planet radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingSpec {
    /// Ring tint, normalized RGB.
    pub color: [f32; 3],
    /// Inner edge, > 1.0 (multiple of planet radius).
    pub inner: f32,
    /// Outer edge, > inner.
    pub outer: f32,
}

/// Validation failures for a [`PlanetDescriptor`].
#[derive(Debug, Error, PartialEq)]
pub enum DescriptorError {
    /// Radius must be strictly positive.
    #[error("planet {name:?} has non-positive radius {radius}")]
    NonPositiveRadius { name: String, radius: f32 },

    /// Ring radii must satisfy `outer > inner > 1.0`.
    #[error("planet {name:?} has invalid ring radii inner={inner} outer={outer}")]
    InvalidRings {
        name: String,
        inner: f32,
        outer: f32,
    },
}

/// Everything the simulation knows about one celestial body.
///
/// Immutable once generated: travel swaps the whole descriptor, and the
/// scene rebuilds its planet subtree from scratch on swap so no residual
/// state (e.g. a stale ring mesh) survives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetDescriptor {
    pub name: String,
    pub biome: BiomeType,
    /// Main body tint, normalized RGB.
    pub base_color: [f32; 3],
    /// Atmosphere shell tint, normalized RGB.
    pub atmosphere_color: [f32; 3],
    /// Nominal radius in catalog units (the scene applies a visual scale).
    pub radius: f32,
    /// Self-rotation in radians per frame at the 60 Hz reference rate.
    /// Negative values are retrograde.
    pub rotation_speed: f32,
    pub description: String,
    /// Named surface/orbital anomalies, display-only.
    pub anomalies: Vec<String>,
    /// Ring system, if any.
    pub rings: Option<RingSpec>,
    pub resources: ResourceProfile,
}

impl PlanetDescriptor {
    /// Check the structural invariants: `radius > 0` and, when rings are
    /// present, `outer > inner > 1.0`.
    pub fn validate(&self) -> Result<(), DescriptorError> {
        if self.radius <= 0.0 {
            return Err(DescriptorError::NonPositiveRadius {
                name: self.name.clone(),
                radius: self.radius,
            });
        }
        if let Some(rings) = &self.rings
            && !(rings.outer > rings.inner && rings.inner > 1.0)
        {
            return Err(DescriptorError::InvalidRings {
                name: self.name.clone(),
                inner: rings.inner,
                outer: rings.outer,
            });
        }
        Ok(())
    }

    pub fn has_rings(&self) -> bool {
        self.rings.is_some()
    }
}
