//! Renderer-agnostic model node trees.
//!
//! A [`ModelGroup`] is a fresh, independently-owned graph of primitive
//! solids with local transforms, materials, and optional per-node animation
//! hooks. The scene crate owns instances and drives the hooks; a renderer
//! walks the tree to draw it.

use glam::{Quat, Vec3};

use crate::material::Material;

/// Parametric solid primitives, mirroring the shapes the model builders
/// compose: cylinders, cones, spheres, capsules, boxes, tori, flat rings
/// and planes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Sphere {
        radius: f32,
        segments: u32,
    },
    /// Upper half of a sphere (domes, dishes).
    Hemisphere {
        radius: f32,
        segments: u32,
    },
    Cylinder {
        top_radius: f32,
        bottom_radius: f32,
        height: f32,
        segments: u32,
    },
    Cone {
        radius: f32,
        height: f32,
        segments: u32,
    },
    Capsule {
        radius: f32,
        length: f32,
    },
    Cuboid {
        x: f32,
        y: f32,
        z: f32,
    },
    Torus {
        radius: f32,
        tube_radius: f32,
        segments: u32,
    },
    /// Flat annulus in the local XZ plane.
    Ring {
        inner: f32,
        outer: f32,
        segments: u32,
    },
    Plane {
        width: f32,
        height: f32,
    },
    /// Low-poly fallback solid.
    Icosahedron {
        radius: f32,
    },
}

/// Local TRS transform of a node relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn at(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    pub fn rotated(rotation: Quat) -> Self {
        Self {
            rotation,
            ..Self::IDENTITY
        }
    }

    pub fn at_rotated(translation: Vec3, rotation: Quat) -> Self {
        Self {
            translation,
            rotation,
            scale: Vec3::ONE,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Continuous animation applied to one node, keyed by elapsed seconds so
/// speed is frame-rate independent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationHook {
    /// Spin around the local Y axis, radians/second.
    RotateY { speed: f32 },
    /// Spin around the local Z axis, radians/second.
    RotateZ { speed: f32 },
    /// Emissive intensity flicker, cycles/second.
    Flicker { rate: f32 },
}

/// One solid in a model tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelNode {
    pub primitive: Primitive,
    pub material: Material,
    pub transform: Transform,
    pub animation: Option<AnimationHook>,
    pub children: Vec<ModelNode>,
}

impl ModelNode {
    pub fn new(primitive: Primitive, material: Material) -> Self {
        Self {
            primitive,
            material,
            transform: Transform::IDENTITY,
            animation: None,
            children: Vec::new(),
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_animation(mut self, animation: AnimationHook) -> Self {
        self.animation = Some(animation);
        self
    }

    pub fn with_child(mut self, child: ModelNode) -> Self {
        self.children.push(child);
        self
    }

    /// Count of nodes in this subtree, including self.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(ModelNode::node_count).sum::<usize>()
    }
}

/// Root of a synthesized model: a list of sibling nodes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModelGroup {
    pub nodes: Vec<ModelNode>,
}

impl ModelGroup {
    pub fn new(nodes: Vec<ModelNode>) -> Self {
        Self { nodes }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.iter().map(ModelNode::node_count).sum()
    }

    /// Depth-first visit over every node in the group.
    pub fn visit(&self, mut f: impl FnMut(&ModelNode)) {
        fn walk(node: &ModelNode, f: &mut impl FnMut(&ModelNode)) {
            f(node);
            for child in &node.children {
                walk(child, f);
            }
        }
        for node in &self.nodes {
            walk(node, &mut f);
        }
    }

    /// Apply a material mapping to every node (used for ghost previews).
    pub fn map_materials(mut self, f: impl Fn(Material) -> Material + Copy) -> Self {
        fn walk(node: &mut ModelNode, f: impl Fn(Material) -> Material + Copy) {
            node.material = f(node.material);
            for child in &mut node.children {
                walk(child, f);
            }
        }
        for node in &mut self.nodes {
            walk(node, f);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf() -> ModelNode {
        ModelNode::new(
            Primitive::Sphere {
                radius: 1.0,
                segments: 8,
            },
            Material::hull(),
        )
    }

    #[test]
    fn test_node_count_includes_children() {
        let tree = leaf().with_child(leaf().with_child(leaf())).with_child(leaf());
        assert_eq!(tree.node_count(), 4);
    }

    #[test]
    fn test_visit_reaches_every_node() {
        let group = ModelGroup::new(vec![leaf().with_child(leaf()), leaf()]);
        let mut seen = 0;
        group.visit(|_| seen += 1);
        assert_eq!(seen, group.node_count());
    }

    #[test]
    fn test_map_materials_applies_everywhere() {
        let group = ModelGroup::new(vec![leaf().with_child(leaf())]);
        let ghosted = group.map_materials(Material::ghosted);
        ghosted.visit(|node| assert!(node.material.transparent));
    }
}
