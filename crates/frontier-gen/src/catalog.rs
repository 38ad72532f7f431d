//! The built-in destination catalog: nine solar-system bodies with their
//! appearance, resource profiles, and build missions, plus the default
//! planet used whenever generation falls back.

use frontier_world::{
    BiomeType, Mission, PlanetDescriptor, ResourceProfile, RingSpec, StructureType,
};

use crate::outcome::GeneratedLevel;

/// One catalog entry: a body plus its position in the system.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogLevel {
    pub index: usize,
    pub planet: PlanetDescriptor,
    pub missions: Vec<Mission>,
}

fn rgb(hex: &str) -> [f32; 3] {
    // Catalog colors are compile-time constants; a bad literal is a bug.
    frontier_world::parse_hex(hex).unwrap_or([1.0, 0.0, 1.0])
}

#[allow(clippy::too_many_arguments)]
fn body(
    name: &str,
    biome: BiomeType,
    base: &str,
    atmosphere: &str,
    radius: f32,
    rotation_speed: f32,
    description: &str,
    anomalies: [&str; 3],
    rings: Option<(&str, f32, f32)>,
    resources: (f64, f64, f64),
) -> PlanetDescriptor {
    PlanetDescriptor {
        name: name.to_string(),
        biome,
        base_color: rgb(base),
        atmosphere_color: rgb(atmosphere),
        radius,
        rotation_speed,
        description: description.to_string(),
        anomalies: anomalies.iter().map(|a| a.to_string()).collect(),
        rings: rings.map(|(color, inner, outer)| RingSpec {
            color: rgb(color),
            inner,
            outer,
        }),
        resources: ResourceProfile::new(resources.0, resources.1, resources.2),
    }
}

/// The planet substituted when generation fails: a quiet terrestrial world.
pub fn default_planet() -> PlanetDescriptor {
    body(
        "Gaia Prime",
        BiomeType::Terrestrial,
        "#1e40af",
        "#60a5fa",
        120.0,
        0.002,
        "A temperate ocean world flagged by long-range survey as a viable \
         fallback colony site.",
        ["Stable Biosphere", "Shallow Seas", "Mild Axial Tilt"],
        None,
        (10.0, 10.0, 12.0),
    )
}

/// Default destinations for the fallback path: the default planet plus
/// numbered siblings, as many as requested.
pub fn fallback_levels(count: usize) -> Vec<GeneratedLevel> {
    const SUFFIXES: [&str; 6] = ["Prime", "Beta", "Gamma", "Delta", "Epsilon", "Zeta"];
    (0..count.max(1))
        .map(|i| {
            let mut planet = default_planet();
            if i > 0 {
                planet.name = format!("Gaia {}", SUFFIXES[i.min(SUFFIXES.len() - 1)]);
            }
            GeneratedLevel {
                planet,
                missions: vec![
                    Mission::new(
                        "fb1",
                        "Beachhead",
                        "Establish a habitat node on the fallback world.",
                        1,
                        StructureType::Habitat,
                    ),
                    Mission::new(
                        "fb2",
                        "Power Up",
                        "Bring two solar arrays online.",
                        2,
                        StructureType::Solar,
                    ),
                ],
            }
        })
        .collect()
}

/// The nine major bodies, Sun first, in orbit order.
pub fn builtin_catalog() -> Vec<CatalogLevel> {
    let mut levels = Vec::with_capacity(9);
    let mut push = |planet: PlanetDescriptor, missions: Vec<Mission>| {
        let index = levels.len();
        levels.push(CatalogLevel {
            index,
            planet,
            missions,
        });
    };

    push(
        body(
            "The Sun",
            BiomeType::Ancient,
            "#ffcc00",
            "#ffaa00",
            1000.0,
            0.0005,
            "A G-type main-sequence star. It contains 99.86% of the mass in \
             the Solar System and generates energy through nuclear fusion.",
            ["Solar Flare Activity", "Neutrino Emission", "Convection Zone"],
            None,
            (0.0, 100.0, 50.0),
        ),
        vec![
            Mission::new(
                "s1",
                "Helio-Station",
                "Deploy a station in high orbit to monitor flares.",
                1,
                StructureType::StationCore,
            ),
            Mission::new(
                "s2",
                "Solar Array Alpha",
                "Capture massive energy output.",
                3,
                StructureType::Solar,
            ),
        ],
    );

    push(
        body(
            "Mercury",
            BiomeType::Arid,
            "#4a4a4a",
            "#ffffff",
            40.0,
            0.001,
            "The smallest planet. Heavily cratered and scorched by the Sun, \
             it has a massive iron core.",
            ["Caloris Basin", "Magnetic Reconnection", "Ice in Shadows"],
            None,
            (15.0, 20.0, 5.0),
        ),
        vec![
            Mission::new(
                "m1",
                "Iron Extraction",
                "Establish mineral mining operations.",
                2,
                StructureType::Extractor,
            ),
            Mission::new(
                "m2",
                "Surface Survey",
                "Deploy rovers to scan craters.",
                3,
                StructureType::Rover,
            ),
        ],
    );

    push(
        body(
            "Venus",
            BiomeType::Toxic,
            "#e3bb76",
            "#ffcc00",
            95.0,
            -0.0005,
            "Earth's twin in size, but a hellscape of thick sulfuric acid \
             clouds and extreme surface pressure.",
            ["Retrograde Rotation", "Lightning Storms", "Maat Mons Volcano"],
            None,
            (8.0, 30.0, 8.0),
        ),
        vec![
            Mission::new(
                "v1",
                "Atmosphere Lab",
                "Study the runaway greenhouse effect.",
                1,
                StructureType::Lab,
            ),
            Mission::new(
                "v2",
                "Hardened Drones",
                "Monitor the crushing surface pressure.",
                4,
                StructureType::Drone,
            ),
        ],
    );

    push(
        body(
            "Earth",
            BiomeType::Terrestrial,
            "#1e40af",
            "#60a5fa",
            100.0,
            0.001,
            "Our cradle. A vibrant world of liquid water, oxygen, and life \
             protected by a magnetosphere.",
            ["Technosphere", "Dynamic Biosphere", "Tidal Lock"],
            None,
            (10.0, 10.0, 15.0),
        ),
        vec![
            Mission::new(
                "e1",
                "Orbital Relay",
                "Ensure global communication coverage.",
                3,
                StructureType::Satellite,
            ),
            Mission::new(
                "e2",
                "Coastal Colony",
                "Establish a new habitat node.",
                2,
                StructureType::Habitat,
            ),
        ],
    );

    push(
        body(
            "Mars",
            BiomeType::Arid,
            "#991b1b",
            "#f87171",
            53.0,
            0.002,
            "The Red Planet. Host to Olympus Mons, the largest volcano in \
             the Solar System.",
            ["Olympus Mons", "Valles Marineris", "Subsurface Water"],
            None,
            (12.0, 15.0, 18.0),
        ),
        vec![
            Mission::new(
                "ma1",
                "Bio-Dome Beta",
                "Start the terraforming process with plants.",
                3,
                StructureType::Plants,
            ),
            Mission::new(
                "ma2",
                "Rover Fleet",
                "Map the Valles Marineris canyon.",
                5,
                StructureType::Rover,
            ),
        ],
    );

    push(
        body(
            "Jupiter",
            BiomeType::GasGiant,
            "#92400e",
            "#f59e0b",
            220.0,
            0.005,
            "King of planets. A gas giant with 79 moons and a storm twice \
             the size of Earth.",
            ["Great Red Spot", "Strong Magnetosphere", "Metallic Core"],
            None,
            (5.0, 40.0, 25.0),
        ),
        vec![
            Mission::new(
                "j1",
                "Storm Watch",
                "Deploy labs to monitor the Great Red Spot.",
                2,
                StructureType::Lab,
            ),
            Mission::new(
                "j2",
                "Gas Harvester",
                "Extract hydrogen from the upper atmosphere.",
                3,
                StructureType::Extractor,
            ),
        ],
    );

    push(
        body(
            "Saturn",
            BiomeType::GasGiant,
            "#d97706",
            "#fbbf24",
            190.0,
            0.004,
            "Famous for its stunning ring system, composed of ice and rock \
             particles spanning 282,000 km.",
            ["Hexagonal Storm", "Enceladus Plumes", "Ring Gaps"],
            Some(("#d97706", 1.8, 4.5)),
            (8.0, 35.0, 22.0),
        ),
        vec![
            Mission::new(
                "sa1",
                "Ring Station",
                "Build a dock for deep space transit.",
                1,
                StructureType::StationDock,
            ),
            Mission::new(
                "sa2",
                "Debris Collector",
                "Study the composition of the rings.",
                4,
                StructureType::Drone,
            ),
        ],
    );

    push(
        body(
            "Uranus",
            BiomeType::IceGiant,
            "#0ea5e9",
            "#bae6fd",
            120.0,
            -0.003,
            "An ice giant tilted on its side, likely due to a massive \
             ancient collision.",
            ["Extreme Tilt", "Diamond Rain", "Faint Rings"],
            Some(("#ffffff", 1.5, 2.2)),
            (15.0, 15.0, 30.0),
        ),
        vec![
            Mission::new(
                "u1",
                "Deep Probe",
                "Search for liquid diamond oceans.",
                2,
                StructureType::Extractor,
            ),
            Mission::new(
                "u2",
                "Telescope Array",
                "Use the dark sky for deep space imaging.",
                2,
                StructureType::Telescope,
            ),
        ],
    );

    push(
        body(
            "Neptune",
            BiomeType::IceGiant,
            "#1e3a8a",
            "#3b82f6",
            115.0,
            0.0035,
            "The windy planet. Farthest from the Sun, with supersonic winds \
             reaching 2,100 km/h.",
            ["Supersonic Winds", "Great Dark Spot", "Triton Capture"],
            Some(("#3b82f6", 1.4, 1.8)),
            (12.0, 10.0, 35.0),
        ),
        vec![
            Mission::new(
                "n1",
                "Wind Farm",
                "Harness supersonic energy.",
                4,
                StructureType::Solar,
            ),
            Mission::new(
                "n2",
                "Comms Hub",
                "Relay signals from beyond the heliopause.",
                1,
                StructureType::CommDish,
            ),
        ],
    );

    levels
}
