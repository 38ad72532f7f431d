//! JSON wire format for the generation service.
//!
//! The service returns an array of camelCase planet records. Parsing is
//! strict about structure (bad JSON is a [`GenError::Malformed`]) but
//! lenient about content: unknown biome labels and unparsable colors take
//! defaults, while violations of the hard invariants (radius, ring radii)
//! reject the whole response so the fallback path runs.

use serde::Deserialize;

use frontier_world::{
    BiomeType, Mission, PlanetDescriptor, ResourceProfile, RingSpec, StructureType, parse_hex,
};

use crate::outcome::{GenError, GeneratedLevel};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WirePlanet {
    name: String,
    #[serde(rename = "type")]
    biome: String,
    base_color: String,
    atmosphere_color: String,
    radius: f32,
    rotation_speed: f32,
    #[serde(default)]
    description: String,
    #[serde(default)]
    anomalies: Vec<String>,
    #[serde(default)]
    has_rings: bool,
    ring_color: Option<String>,
    ring_radius_inner: Option<f32>,
    ring_radius_outer: Option<f32>,
    resources: WireResources,
}

#[derive(Debug, Deserialize)]
struct WireResources {
    minerals: f64,
    energy: f64,
    tech: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireLevel {
    planet: WirePlanet,
    #[serde(default)]
    missions: Vec<WireMission>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireMission {
    id: String,
    title: String,
    #[serde(default)]
    description: String,
    target: u32,
    building_type: StructureType,
}

const FALLBACK_GREY: [f32; 3] = [0.6, 0.6, 0.6];

impl WirePlanet {
    fn into_descriptor(self) -> Result<PlanetDescriptor, GenError> {
        let rings = if self.has_rings {
            match (self.ring_radius_inner, self.ring_radius_outer) {
                (Some(inner), Some(outer)) => Some(RingSpec {
                    color: self
                        .ring_color
                        .as_deref()
                        .and_then(|c| parse_hex(c).ok())
                        .unwrap_or([1.0, 1.0, 1.0]),
                    inner,
                    outer,
                }),
                // hasRings without radii: treat as ring-less rather than guess.
                _ => None,
            }
        } else {
            None
        };

        let descriptor = PlanetDescriptor {
            biome: BiomeType::from_label(&self.biome),
            base_color: parse_hex(&self.base_color).unwrap_or(FALLBACK_GREY),
            atmosphere_color: parse_hex(&self.atmosphere_color).unwrap_or(FALLBACK_GREY),
            name: self.name,
            radius: self.radius,
            rotation_speed: self.rotation_speed,
            description: self.description,
            anomalies: self.anomalies,
            rings,
            resources: ResourceProfile::new(
                self.resources.minerals,
                self.resources.energy,
                self.resources.tech,
            ),
        };
        descriptor.validate()?;
        Ok(descriptor)
    }
}

/// Parse a raw service response body into destination levels.
pub fn parse_response(body: &str) -> Result<Vec<GeneratedLevel>, GenError> {
    let wire: Vec<WireLevel> = serde_json::from_str(body)?;
    if wire.is_empty() {
        return Err(GenError::Empty);
    }

    wire.into_iter()
        .map(|level| {
            let missions = level
                .missions
                .iter()
                .map(|m| {
                    Mission::new(&m.id, &m.title, &m.description, m.target, m.building_type)
                })
                .collect();
            Ok(GeneratedLevel {
                planet: level.planet.into_descriptor()?,
                missions,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planet_json(radius: f32, rings: &str) -> String {
        format!(
            r##"[{{
                "planet": {{
                    "name": "Veyra",
                    "type": "Ice Giant",
                    "baseColor": "#0ea5e9",
                    "atmosphereColor": "#bae6fd",
                    "radius": {radius},
                    "rotationSpeed": 0.004,
                    "description": "A cold survey target.",
                    "anomalies": ["Diamond Rain"],
                    {rings}
                    "resources": {{ "minerals": 6, "energy": 4, "tech": 9 }}
                }},
                "missions": [
                    {{ "id": "w1", "title": "Sounding Run", "target": 2,
                       "buildingType": "extractor" }}
                ]
            }}]"##
        )
    }

    #[test]
    fn test_parse_valid_response() {
        let levels = parse_response(&planet_json(140.0, r##""hasRings": false,"##)).unwrap();
        assert_eq!(levels.len(), 1);
        let planet = &levels[0].planet;
        assert_eq!(planet.name, "Veyra");
        assert_eq!(planet.biome, BiomeType::IceGiant);
        assert!(planet.rings.is_none());
        assert_eq!(levels[0].missions[0].building, StructureType::Extractor);
    }

    #[test]
    fn test_rings_parsed_when_present() {
        let rings = r##""hasRings": true, "ringColor": "#ffffff",
                        "ringRadiusInner": 1.5, "ringRadiusOuter": 2.2,"##;
        let levels = parse_response(&planet_json(140.0, rings)).unwrap();
        let rings = levels[0].planet.rings.unwrap();
        assert!((rings.inner - 1.5).abs() < 1e-6);
        assert!((rings.outer - 2.2).abs() < 1e-6);
    }

    #[test]
    fn test_has_rings_without_radii_drops_rings() {
        let levels = parse_response(&planet_json(140.0, r##""hasRings": true,"##)).unwrap();
        assert!(levels[0].planet.rings.is_none());
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(matches!(
            parse_response("{not json"),
            Err(GenError::Malformed(_))
        ));
    }

    #[test]
    fn test_empty_array_is_error() {
        assert!(matches!(parse_response("[]"), Err(GenError::Empty)));
    }

    #[test]
    fn test_invalid_radius_rejects_response() {
        assert!(matches!(
            parse_response(&planet_json(-5.0, r##""hasRings": false,"##)),
            Err(GenError::Descriptor(_))
        ));
    }

    #[test]
    fn test_inverted_ring_radii_reject_response() {
        let rings = r##""hasRings": true, "ringColor": "#ffffff",
                        "ringRadiusInner": 2.5, "ringRadiusOuter": 1.2,"##;
        assert!(matches!(
            parse_response(&planet_json(140.0, rings)),
            Err(GenError::Descriptor(_))
        ));
    }

    #[test]
    fn test_unknown_biome_and_bad_color_take_defaults() {
        let body = planet_json(120.0, r##""hasRings": false,"##)
            .replace("Ice Giant", "Bubblegum")
            .replace("#0ea5e9", "not-a-color");
        let levels = parse_response(&body).unwrap();
        assert_eq!(levels[0].planet.biome, BiomeType::Arid);
        assert_eq!(levels[0].planet.base_color, FALLBACK_GREY);
    }
}
