//! Surface appearance parameters attached to every model node.

/// PBR-ish material parameters, renderer-agnostic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Base color, normalized RGB.
    pub color: [f32; 3],
    /// Emissive color, normalized RGB.
    pub emissive: [f32; 3],
    pub emissive_intensity: f32,
    /// 0.0 fully transparent, 1.0 opaque.
    pub opacity: f32,
    pub transparent: bool,
    pub metalness: f32,
    pub roughness: f32,
    /// Additive blending (glow shells, atmospheres).
    pub additive: bool,
    pub double_sided: bool,
}

impl Material {
    /// Bright structural metal, the default hull material.
    pub fn hull() -> Self {
        Self {
            color: [0.867, 0.867, 0.867],
            emissive: [0.0; 3],
            emissive_intensity: 0.0,
            opacity: 1.0,
            transparent: false,
            metalness: 1.0,
            roughness: 0.1,
            additive: false,
            double_sided: false,
        }
    }

    /// Cyan engine/eye glow.
    pub fn glow() -> Self {
        Self {
            color: [0.0, 0.953, 1.0],
            emissive: [0.0, 0.953, 1.0],
            emissive_intensity: 3.0,
            opacity: 1.0,
            transparent: false,
            metalness: 0.0,
            roughness: 0.5,
            additive: false,
            double_sided: false,
        }
    }

    /// Semi-transparent cyan preview variant used for ghost placement.
    pub fn ghost() -> Self {
        Self {
            color: [0.0, 1.0, 1.0],
            emissive: [0.0, 1.0, 1.0],
            emissive_intensity: 0.6,
            opacity: 0.4,
            transparent: true,
            metalness: 1.0,
            roughness: 0.1,
            additive: false,
            double_sided: false,
        }
    }

    /// Flat color with no lighting response; used for atmosphere shells.
    pub fn unlit(color: [f32; 3], opacity: f32) -> Self {
        Self {
            color,
            emissive: [0.0; 3],
            emissive_intensity: 0.0,
            opacity,
            transparent: opacity < 1.0,
            metalness: 0.0,
            roughness: 1.0,
            additive: false,
            double_sided: false,
        }
    }

    /// Back-side additive shell variant for atmospheres and glow halos.
    pub fn shell(color: [f32; 3], opacity: f32) -> Self {
        Self {
            additive: true,
            double_sided: true,
            ..Self::unlit(color, opacity)
        }
    }

    /// Map a material to its ghost-preview counterpart: the ghost tint for
    /// hull parts, a faded copy for everything else.
    pub fn ghosted(self) -> Self {
        Self {
            opacity: (self.opacity * 0.4).min(0.4),
            transparent: true,
            emissive: [0.0, 1.0, 1.0],
            emissive_intensity: 0.6,
            color: [0.0, 1.0, 1.0],
            ..self
        }
    }
}
