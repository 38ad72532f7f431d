//! Table-driven structure model registry.
//!
//! Each [`StructureType`] resolves to a recipe: a hover altitude rule and a
//! geometry builder with fixed per-type proportions. Types without a bespoke
//! builder degrade to a minimal fallback solid; looking generic is
//! acceptable, failing to build is not.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_8, PI};

use glam::{Quat, Vec3};

use frontier_world::StructureType;

use crate::material::Material;
use crate::node::{AnimationHook, ModelGroup, ModelNode, Primitive, Transform};

/// Per-type recipe resolved once per placement or preview.
struct StructureRecipe {
    /// Hover altitude as a fraction of the planet's visual radius.
    /// Zero means grounded (gets a foundation pad).
    altitude_frac: f32,
    builder: fn(f32) -> Vec<ModelNode>,
}

fn recipe(structure: StructureType) -> StructureRecipe {
    use StructureType::*;
    match structure {
        Extractor => StructureRecipe {
            altitude_frac: 0.0,
            builder: build_extractor,
        },
        Solar => StructureRecipe {
            altitude_frac: 0.0,
            builder: build_solar,
        },
        Habitat => StructureRecipe {
            altitude_frac: 0.0,
            builder: build_habitat,
        },
        Drone => StructureRecipe {
            altitude_frac: 0.2,
            builder: build_drone,
        },
        Shuttle => StructureRecipe {
            altitude_frac: 0.4,
            builder: build_shuttle,
        },
        Satellite => StructureRecipe {
            altitude_frac: 0.8,
            builder: build_satellite,
        },
        StationCore => StructureRecipe {
            altitude_frac: 0.6,
            builder: build_station_core,
        },
        StationWing | StationDock => StructureRecipe {
            altitude_frac: 0.6,
            builder: build_fallback,
        },
        Flag => StructureRecipe {
            altitude_frac: 0.0,
            builder: build_flag,
        },
        Rover => StructureRecipe {
            altitude_frac: 0.0,
            builder: build_rover,
        },
        // No bespoke geometry yet: grounded fallback solid.
        Lab | Plants | Telescope | CommDish => StructureRecipe {
            altitude_frac: 0.0,
            builder: build_fallback,
        },
    }
}

/// Hover altitude in world units for a structure over a planet of the given
/// visual radius. Grounded structures return zero.
pub fn structure_altitude(structure: StructureType, visual_radius: f32) -> f32 {
    recipe(structure).altitude_frac * visual_radius
}

/// Build the model for a structure, scaled to the planet's visual radius.
/// `ghost` swaps every material for its semi-transparent preview variant.
pub fn structure_model(structure: StructureType, visual_radius: f32, ghost: bool) -> ModelGroup {
    let recipe = recipe(structure);
    // All proportions hang off this per-planet scale unit.
    let s = visual_radius * 0.15;

    let mut nodes = Vec::new();
    if recipe.altitude_frac == 0.0 {
        nodes.push(foundation(s));
    }
    nodes.extend((recipe.builder)(s));

    let group = ModelGroup::new(nodes);
    if ghost {
        group.map_materials(Material::ghosted)
    } else {
        group
    }
}

/// Flat pad under every grounded structure.
fn foundation(s: f32) -> ModelNode {
    ModelNode::new(
        Primitive::Cylinder {
            top_radius: s * 0.45,
            bottom_radius: s * 0.5,
            height: s * 0.1,
            segments: 32,
        },
        Material::hull(),
    )
    .with_transform(Transform::at(Vec3::new(0.0, -s * 0.05, 0.0)))
}

fn build_extractor(s: f32) -> Vec<ModelNode> {
    let body = ModelNode::new(
        Primitive::Cylinder {
            top_radius: s * 0.2,
            bottom_radius: s * 0.25,
            height: s * 0.7,
            segments: 8,
        },
        Material::hull(),
    )
    .with_transform(Transform::at(Vec3::new(0.0, s * 0.35, 0.0)));

    // Downward drill cone, spun by the animation hook.
    let drill = ModelNode::new(
        Primitive::Cone {
            radius: s * 0.12,
            height: s * 0.4,
            segments: 8,
        },
        Material::hull(),
    )
    .with_transform(Transform::at_rotated(
        Vec3::new(0.0, -s * 0.2, 0.0),
        Quat::from_rotation_x(PI),
    ))
    .with_animation(AnimationHook::RotateY { speed: 0.25 * 60.0 });

    vec![body, drill]
}

fn build_solar(s: f32) -> Vec<ModelNode> {
    let pillar = ModelNode::new(
        Primitive::Cylinder {
            top_radius: s * 0.05,
            bottom_radius: s * 0.08,
            height: s * 0.5,
            segments: 16,
        },
        Material::hull(),
    )
    .with_transform(Transform::at(Vec3::new(0.0, s * 0.25, 0.0)));

    let wing = ModelNode::new(
        Primitive::Cuboid {
            x: s * 1.2,
            y: s * 0.02,
            z: s * 0.6,
        },
        Material::hull(),
    )
    .with_transform(Transform::at_rotated(
        Vec3::new(0.0, s * 0.5, 0.0),
        Quat::from_rotation_z(FRAC_PI_8),
    ));

    vec![pillar, wing]
}

fn build_habitat(s: f32) -> Vec<ModelNode> {
    let dome = ModelNode::new(
        Primitive::Hemisphere {
            radius: s * 0.5,
            segments: 32,
        },
        Material::hull(),
    );
    let ring = ModelNode::new(
        Primitive::Torus {
            radius: s * 0.5,
            tube_radius: s * 0.05,
            segments: 48,
        },
        Material::hull(),
    )
    .with_transform(Transform::rotated(Quat::from_rotation_x(FRAC_PI_2)));
    vec![dome, ring]
}

fn build_drone(s: f32) -> Vec<ModelNode> {
    let eye = ModelNode::new(
        Primitive::Sphere {
            radius: s * 0.08,
            segments: 8,
        },
        Material::glow(),
    )
    .with_transform(Transform::at(Vec3::new(0.0, 0.0, s * 0.2)));

    let body = ModelNode::new(
        Primitive::Sphere {
            radius: s * 0.25,
            segments: 16,
        },
        Material::hull(),
    )
    .with_child(eye);

    let rotor = ModelNode::new(
        Primitive::Cuboid {
            x: s * 0.6,
            y: s * 0.02,
            z: s * 0.08,
        },
        Material::hull(),
    )
    .with_transform(Transform::at(Vec3::new(0.0, s * 0.25, 0.0)))
    .with_animation(AnimationHook::RotateY { speed: 0.4 * 60.0 });

    vec![body, rotor]
}

fn build_shuttle(s: f32) -> Vec<ModelNode> {
    let exhaust = ModelNode::new(
        Primitive::Cylinder {
            top_radius: s * 0.2,
            bottom_radius: s * 0.1,
            height: s * 0.2,
            segments: 16,
        },
        Material::glow(),
    )
    .with_transform(Transform::at_rotated(
        Vec3::new(0.0, 0.0, -s * 0.6),
        Quat::from_rotation_x(FRAC_PI_2),
    ))
    .with_animation(AnimationHook::Flicker { rate: 8.0 });

    let hull = ModelNode::new(
        Primitive::Capsule {
            radius: s * 0.3,
            length: s * 0.8,
        },
        Material::hull(),
    )
    .with_transform(Transform::rotated(Quat::from_rotation_x(FRAC_PI_2)))
    .with_child(exhaust);

    vec![hull]
}

fn build_satellite(s: f32) -> Vec<ModelNode> {
    let core = ModelNode::new(
        Primitive::Cuboid {
            x: s * 0.4,
            y: s * 0.4,
            z: s * 0.4,
        },
        Material::hull(),
    );
    let wing = |x: f32| {
        ModelNode::new(
            Primitive::Cuboid {
                x: s * 1.5,
                y: s * 0.4,
                z: s * 0.02,
            },
            Material::hull(),
        )
        .with_transform(Transform::at(Vec3::new(x, 0.0, 0.0)))
    };
    let dish = ModelNode::new(
        Primitive::Hemisphere {
            radius: s * 0.3,
            segments: 16,
        },
        Material::hull(),
    )
    .with_transform(Transform::at(Vec3::new(0.0, s * 0.3, 0.0)));

    vec![core, wing(s * 0.95), wing(-s * 0.95), dish]
}

fn build_station_core(s: f32) -> Vec<ModelNode> {
    let core = ModelNode::new(
        Primitive::Cylinder {
            top_radius: s * 0.4,
            bottom_radius: s * 0.4,
            height: s * 1.5,
            segments: 8,
        },
        Material::hull(),
    );
    let orbit_ring = ModelNode::new(
        Primitive::Torus {
            radius: s * 0.9,
            tube_radius: s * 0.1,
            segments: 48,
        },
        Material::hull(),
    )
    .with_transform(Transform::rotated(Quat::from_rotation_x(FRAC_PI_2)))
    .with_animation(AnimationHook::RotateZ { speed: 0.05 * 60.0 });

    vec![core, orbit_ring]
}

fn build_flag(s: f32) -> Vec<ModelNode> {
    let pole = ModelNode::new(
        Primitive::Cylinder {
            top_radius: s * 0.02,
            bottom_radius: s * 0.02,
            height: s * 1.0,
            segments: 8,
        },
        Material::hull(),
    )
    .with_transform(Transform::at(Vec3::new(0.0, s * 0.5, 0.0)));

    let fabric = ModelNode::new(
        Primitive::Plane {
            width: s * 0.6,
            height: s * 0.4,
        },
        Material::glow(),
    )
    .with_transform(Transform::at_rotated(
        Vec3::new(s * 0.3, s * 0.7, 0.0),
        Quat::from_rotation_y(FRAC_PI_2),
    ));

    vec![pole, fabric]
}

fn build_rover(s: f32) -> Vec<ModelNode> {
    let mut nodes = Vec::with_capacity(7);
    for i in 0..6 {
        let x = if i < 3 { s * 0.3 } else { -s * 0.3 };
        let z = ((i % 3) as f32 - 1.0) * s * 0.2;
        nodes.push(
            ModelNode::new(
                Primitive::Cylinder {
                    top_radius: s * 0.15,
                    bottom_radius: s * 0.15,
                    height: s * 0.1,
                    segments: 12,
                },
                Material::hull(),
            )
            .with_transform(Transform::at_rotated(
                Vec3::new(x, s * 0.15, z),
                Quat::from_rotation_z(FRAC_PI_2),
            )),
        );
    }
    nodes.push(
        ModelNode::new(
            Primitive::Cuboid {
                x: s * 0.7,
                y: s * 0.4,
                z: s * 0.5,
            },
            Material::hull(),
        )
        .with_transform(Transform::at(Vec3::new(0.0, s * 0.3, 0.0))),
    );
    nodes
}

/// Minimal degenerate shape for types without bespoke geometry.
fn build_fallback(s: f32) -> Vec<ModelNode> {
    vec![
        ModelNode::new(Primitive::Icosahedron { radius: s * 0.4 }, Material::hull())
            .with_transform(Transform::at(Vec3::new(0.0, s * 0.4, 0.0))),
    ]
}
