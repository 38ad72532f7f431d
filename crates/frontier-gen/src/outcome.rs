//! The source seam and the explicit fallback policy.
//!
//! Generation failures never reach the render loop as errors: any failure
//! substitutes the built-in default destination set and records *why*, so
//! tests can assert on which path was taken.

use thiserror::Error;
use tracing::warn;

use frontier_world::{Mission, PlanetDescriptor};

use crate::catalog::fallback_levels;

/// One generated destination: a planet plus its build missions.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedLevel {
    pub planet: PlanetDescriptor,
    pub missions: Vec<Mission>,
}

/// Failures at the generation boundary.
#[derive(Debug, Error)]
pub enum GenError {
    /// The service call itself failed (network, timeout, service error).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The response body was not valid JSON for the expected schema.
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The response parsed but contained no usable destinations.
    #[error("service returned no valid destinations")]
    Empty,

    /// A descriptor failed structural validation.
    #[error(transparent)]
    Descriptor(#[from] frontier_world::DescriptorError),
}

/// How a destination set was obtained.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationOutcome {
    /// The service produced a valid destination set.
    Generated(Vec<GeneratedLevel>),
    /// The service failed; these are the built-in defaults.
    FellBack {
        levels: Vec<GeneratedLevel>,
        reason: String,
    },
}

impl GenerationOutcome {
    /// The destination set, regardless of which path produced it.
    pub fn levels(&self) -> &[GeneratedLevel] {
        match self {
            Self::Generated(levels) => levels,
            Self::FellBack { levels, .. } => levels,
        }
    }

    pub fn into_levels(self) -> Vec<GeneratedLevel> {
        match self {
            Self::Generated(levels) => levels,
            Self::FellBack { levels, .. } => levels,
        }
    }

    pub fn fell_back(&self) -> bool {
        matches!(self, Self::FellBack { .. })
    }
}

/// Anything that can produce destinations: the remote service client, the
/// deterministic offline generator, or a test stub.
pub trait PlanetSource: Send {
    /// Produce `count` destinations. Blocking; run off the frame loop.
    fn generate(&self, count: usize) -> Result<Vec<GeneratedLevel>, GenError>;
}

/// Run a source and apply the fallback policy: a failed or empty result
/// substitutes `count` built-in destinations instead of propagating.
pub fn generate_or_fallback(source: &dyn PlanetSource, count: usize) -> GenerationOutcome {
    match source.generate(count) {
        Ok(levels) if !levels.is_empty() => GenerationOutcome::Generated(levels),
        Ok(_) => fell_back(count, GenError::Empty),
        Err(err) => fell_back(count, err),
    }
}

fn fell_back(count: usize, err: GenError) -> GenerationOutcome {
    warn!(error = %err, "planet generation failed, using built-in destinations");
    GenerationOutcome::FellBack {
        levels: fallback_levels(count),
        reason: err.to_string(),
    }
}
