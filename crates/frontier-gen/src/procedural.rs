//! Deterministic offline planet generator.
//!
//! Stands in for the remote service when running without network access and
//! doubles as the reproducible content source for tests and the headless
//! demo. Output ranges follow the service schema: radius 80–200, ring inner
//! 1.2–1.5, ring outer 1.8–2.5, resources 1–10.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use frontier_world::{
    BiomeType, Mission, PlanetDescriptor, ResourceProfile, RingSpec, StructureType,
};

use crate::outcome::{GenError, GeneratedLevel, PlanetSource};

const BIOMES: [BiomeType; 7] = [
    BiomeType::Terrestrial,
    BiomeType::GasGiant,
    BiomeType::IceGiant,
    BiomeType::Lava,
    BiomeType::Toxic,
    BiomeType::Crystal,
    BiomeType::Arid,
];

const NAME_PREFIXES: [&str; 8] = [
    "Kep", "Vey", "Thal", "Nyx", "Orin", "Zeph", "Cal", "Ereb",
];
const NAME_SUFFIXES: [&str; 8] = ["ara", "ion", "os", "una", "eth", "ix", "ora", "is"];

/// Base color pool per biome, hand-picked to match the service's palette.
fn biome_colors(biome: BiomeType, rng: &mut ChaCha8Rng) -> ([f32; 3], [f32; 3]) {
    let jitter = |c: f32, rng: &mut ChaCha8Rng| (c + rng.random_range(-0.08..0.08)).clamp(0.0, 1.0);
    let (base, atmo): ([f32; 3], [f32; 3]) = match biome {
        BiomeType::Terrestrial => ([0.12, 0.25, 0.69], [0.38, 0.65, 0.98]),
        BiomeType::GasGiant => ([0.57, 0.25, 0.05], [0.96, 0.62, 0.04]),
        BiomeType::IceGiant => ([0.05, 0.65, 0.91], [0.73, 0.9, 0.99]),
        BiomeType::Lava => ([0.55, 0.1, 0.05], [1.0, 0.4, 0.1]),
        BiomeType::Toxic => ([0.6, 0.73, 0.2], [0.85, 0.95, 0.3]),
        BiomeType::Crystal => ([0.75, 0.2, 0.82], [0.95, 0.55, 1.0]),
        _ => ([0.29, 0.29, 0.29], [0.9, 0.9, 0.9]),
    };
    (
        [
            jitter(base[0], rng),
            jitter(base[1], rng),
            jitter(base[2], rng),
        ],
        [
            jitter(atmo[0], rng),
            jitter(atmo[1], rng),
            jitter(atmo[2], rng),
        ],
    )
}

/// Deterministic [`PlanetSource`]: the same seed always yields the same
/// destination sequence.
pub struct ProceduralSource {
    seed: u64,
}

impl ProceduralSource {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    fn generate_one(&self, rng: &mut ChaCha8Rng, ordinal: usize) -> GeneratedLevel {
        let biome = BIOMES[rng.random_range(0..BIOMES.len())];
        let (base_color, atmosphere_color) = biome_colors(biome, rng);

        let name = format!(
            "{}{} {}",
            NAME_PREFIXES[rng.random_range(0..NAME_PREFIXES.len())],
            NAME_SUFFIXES[rng.random_range(0..NAME_SUFFIXES.len())],
            ["I", "II", "III", "IV", "V"][ordinal.min(4)],
        );

        let rings = if rng.random::<f32>() < 0.3 {
            Some(RingSpec {
                color: atmosphere_color,
                inner: rng.random_range(1.2..1.5),
                outer: rng.random_range(1.8..2.5),
            })
        } else {
            None
        };

        let planet = PlanetDescriptor {
            name: name.clone(),
            biome,
            base_color,
            atmosphere_color,
            radius: rng.random_range(80.0..200.0),
            rotation_speed: rng.random_range(0.001..0.01)
                * if rng.random::<f32>() < 0.15 { -1.0 } else { 1.0 },
            description: format!(
                "An uncharted {} world logged by the deep survey net.",
                biome.label().to_lowercase()
            ),
            anomalies: vec!["Unmapped Terrain".into(), "Sensor Echoes".into()],
            rings,
            resources: ResourceProfile::new(
                rng.random_range(1..=10) as f64,
                rng.random_range(1..=10) as f64,
                rng.random_range(1..=10) as f64,
            ),
        };

        let missions = vec![
            Mission::new(
                &format!("p{ordinal}a"),
                "Foothold",
                &format!("Raise a habitat on {name}."),
                1,
                StructureType::Habitat,
            ),
            Mission::new(
                &format!("p{ordinal}b"),
                "Prospecting",
                "Bring extractors online.",
                2,
                StructureType::Extractor,
            ),
        ];

        GeneratedLevel { planet, missions }
    }
}

impl PlanetSource for ProceduralSource {
    fn generate(&self, count: usize) -> Result<Vec<GeneratedLevel>, GenError> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let levels: Vec<GeneratedLevel> = (0..count)
            .map(|i| self.generate_one(&mut rng, i))
            .collect();
        if levels.is_empty() {
            return Err(GenError::Empty);
        }
        Ok(levels)
    }
}
