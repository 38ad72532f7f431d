//! Planet model synthesis: body sphere with a biome-keyed surface palette,
//! additive atmosphere shell, optional cloud layer and ring mesh.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use frontier_world::{BiomeType, PlanetDescriptor};

use crate::material::Material;
use crate::node::{AnimationHook, ModelNode, Primitive, Transform};

/// Atmosphere shell radius, as a multiple of the body radius.
const ATMOSPHERE_SCALE: f32 = 1.06;
/// Cloud layer radius for terrestrial worlds.
const CLOUD_SCALE: f32 = 1.015;
/// Cloud layer self-rotation, radians/second.
const CLOUD_SPIN: f32 = 0.0002 * 60.0;

/// The assembled renderable parts of one celestial body. Kept as named
/// fields (not an opaque group) so the scene can rebuild or test each part
/// on descriptor swap, in particular that no stale ring survives a swap to
/// a ring-less body.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetModel {
    pub body: ModelNode,
    pub atmosphere: ModelNode,
    /// Terrestrial worlds only.
    pub clouds: Option<ModelNode>,
    /// Present exactly when the descriptor has rings.
    pub rings: Option<ModelNode>,
    /// Banded/freckled surface colors derived from the biome, for renderers
    /// that paint the body procedurally.
    pub palette: Vec<[f32; 3]>,
}

fn lerp3(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

/// Deterministic per-seed surface color bands for a biome.
///
/// Gas and ice giants get latitude bands blending base toward atmosphere
/// color; arid worlds get dark regolith greys; terrestrial worlds get an
/// ocean base with continental greens; everything else gets a two-tone
/// speckle around the base color.
pub fn surface_palette(
    biome: BiomeType,
    base: [f32; 3],
    atmosphere: [f32; 3],
    seed: u64,
) -> Vec<[f32; 3]> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    match biome {
        BiomeType::GasGiant | BiomeType::IceGiant => (0..80)
            .map(|_| lerp3(base, atmosphere, rng.random::<f32>() * 0.45))
            .collect(),
        BiomeType::Arid => (0..32)
            .map(|_| {
                let v = 0.08 + rng.random::<f32>() * 0.3;
                [v, v, v]
            })
            .collect(),
        BiomeType::Terrestrial => {
            let mut palette = vec![[0.04, 0.13, 0.3]]; // deep ocean
            palette.extend([[0.08, 0.33, 0.18], [0.09, 0.4, 0.2], [0.25, 0.38, 0.07]]);
            palette.push([0.97, 0.98, 0.99]); // polar caps
            palette
        }
        _ => (0..16)
            .map(|_| {
                let t = rng.random::<f32>() * 0.4 - 0.2;
                [
                    (base[0] + t).clamp(0.0, 1.0),
                    (base[1] + t).clamp(0.0, 1.0),
                    (base[2] + t).clamp(0.0, 1.0),
                ]
            })
            .collect(),
    }
}

/// Assemble the full model for one body at a given visual radius.
pub fn planet_model(descriptor: &PlanetDescriptor, visual_radius: f32, seed: u64) -> PlanetModel {
    let terrestrial = descriptor.biome == BiomeType::Terrestrial;
    let segments = if terrestrial || descriptor.biome == BiomeType::Arid {
        128
    } else {
        64
    };

    let body = ModelNode::new(
        Primitive::Sphere {
            radius: visual_radius,
            segments,
        },
        Material {
            color: descriptor.base_color,
            roughness: if descriptor.biome == BiomeType::Arid {
                0.95
            } else {
                0.8
            },
            metalness: 0.1,
            ..Material::unlit(descriptor.base_color, 1.0)
        },
    );

    let atmosphere_opacity = if descriptor.biome == BiomeType::Arid {
        0.03
    } else {
        0.25
    };
    let atmosphere = ModelNode::new(
        Primitive::Sphere {
            radius: visual_radius * ATMOSPHERE_SCALE,
            segments,
        },
        Material::shell(descriptor.atmosphere_color, atmosphere_opacity),
    );

    let clouds = terrestrial.then(|| {
        ModelNode::new(
            Primitive::Sphere {
                radius: visual_radius * CLOUD_SCALE,
                segments,
            },
            Material {
                roughness: 1.0,
                ..Material::unlit([1.0, 1.0, 1.0], 0.8)
            },
        )
        .with_animation(AnimationHook::RotateY { speed: CLOUD_SPIN })
    });

    let rings = descriptor.rings.as_ref().map(|ring_spec| {
        ModelNode::new(
            Primitive::Ring {
                inner: visual_radius * ring_spec.inner,
                outer: visual_radius * ring_spec.outer,
                segments: 128,
            },
            Material {
                double_sided: true,
                ..Material::unlit(ring_spec.color, 0.6)
            },
        )
        .with_transform(Transform::IDENTITY)
    });

    PlanetModel {
        body,
        atmosphere,
        clouds,
        rings,
        palette: surface_palette(
            descriptor.biome,
            descriptor.base_color,
            descriptor.atmosphere_color,
            seed,
        ),
    }
}

/// Cyan placement indicator ring, sized to the planet's visual radius.
pub fn placement_ring(visual_radius: f32) -> ModelNode {
    let s = visual_radius * 0.1;
    ModelNode::new(
        Primitive::Ring {
            inner: s * 0.9,
            outer: s * 1.1,
            segments: 64,
        },
        Material {
            double_sided: true,
            ..Material::unlit([0.0, 1.0, 1.0], 0.5)
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontier_world::{ResourceProfile, RingSpec};

    fn descriptor(biome: BiomeType, rings: Option<RingSpec>) -> PlanetDescriptor {
        PlanetDescriptor {
            name: "Test".into(),
            biome,
            base_color: [0.3, 0.2, 0.1],
            atmosphere_color: [0.9, 0.6, 0.1],
            radius: 190.0,
            rotation_speed: 0.004,
            description: String::new(),
            anomalies: vec![],
            rings,
            resources: ResourceProfile::default(),
        }
    }

    #[test]
    fn test_rings_present_exactly_when_descriptor_has_them() {
        let ringed = descriptor(
            BiomeType::GasGiant,
            Some(RingSpec {
                color: [0.8, 0.6, 0.1],
                inner: 1.8,
                outer: 4.5,
            }),
        );
        assert!(planet_model(&ringed, 200.0, 1).rings.is_some());

        let bare = descriptor(BiomeType::GasGiant, None);
        assert!(planet_model(&bare, 200.0, 1).rings.is_none());
    }

    #[test]
    fn test_ring_mesh_scales_with_visual_radius() {
        let ringed = descriptor(
            BiomeType::GasGiant,
            Some(RingSpec {
                color: [1.0; 3],
                inner: 2.0,
                outer: 3.0,
            }),
        );
        let model = planet_model(&ringed, 100.0, 1);
        match model.rings.unwrap().primitive {
            Primitive::Ring { inner, outer, .. } => {
                assert!((inner - 200.0).abs() < 1e-4);
                assert!((outer - 300.0).abs() < 1e-4);
            }
            other => panic!("unexpected primitive {other:?}"),
        }
    }

    #[test]
    fn test_only_terrestrial_gets_clouds() {
        assert!(
            planet_model(&descriptor(BiomeType::Terrestrial, None), 100.0, 1)
                .clouds
                .is_some()
        );
        assert!(
            planet_model(&descriptor(BiomeType::Lava, None), 100.0, 1)
                .clouds
                .is_none()
        );
    }

    #[test]
    fn test_atmosphere_shell_sits_outside_body() {
        let model = planet_model(&descriptor(BiomeType::Toxic, None), 100.0, 1);
        let radius_of = |node: &ModelNode| match node.primitive {
            Primitive::Sphere { radius, .. } => radius,
            _ => panic!("expected sphere"),
        };
        assert!(radius_of(&model.atmosphere) > radius_of(&model.body));
    }

    #[test]
    fn test_palette_deterministic_per_seed() {
        let a = surface_palette(BiomeType::GasGiant, [0.5, 0.3, 0.1], [0.9, 0.6, 0.1], 7);
        let b = surface_palette(BiomeType::GasGiant, [0.5, 0.3, 0.1], [0.9, 0.6, 0.1], 7);
        assert_eq!(a, b);
        let c = surface_palette(BiomeType::GasGiant, [0.5, 0.3, 0.1], [0.9, 0.6, 0.1], 8);
        assert_ne!(a, c);
    }

    #[test]
    fn test_placement_ring_tracks_radius() {
        match placement_ring(200.0).primitive {
            Primitive::Ring { inner, outer, .. } => {
                assert!((inner - 18.0).abs() < 1e-4);
                assert!((outer - 22.0).abs() < 1e-4);
            }
            other => panic!("unexpected primitive {other:?}"),
        }
    }
}
