//! Pointer raycasting against the active body.
//!
//! Screen pixels go to normalized device coordinates, through the inverse
//! projection and view matrices into a world-space ray, then into an
//! analytic ray-sphere test. Only the active planet is pickable; misses
//! return `None` rather than a sentinel.

use glam::{Mat4, Vec2, Vec3, Vec4Swizzles};

/// A world-space ray with unit direction.
#[derive(Debug, Clone, Copy)]
pub struct PickRay {
    pub origin: Vec3,
    pub dir: Vec3,
}

/// Result of a successful surface pick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    /// Intersection point in world space.
    pub world_point: Vec3,
    /// Outward surface normal at the hit.
    pub world_normal: Vec3,
    /// Hit direction in the planet's local frame, unit length. This is the
    /// rotation-independent coordinate buildings are stored in.
    pub local_unit: Vec3,
}

/// Unproject a pixel position into a world-space ray.
///
/// `pixel` is in window coordinates with the origin at the top-left;
/// `viewport` is the window size in pixels. Degenerate viewports yield no
/// ray.
pub fn pointer_ray(pixel: Vec2, viewport: Vec2, view: Mat4, proj: Mat4) -> Option<PickRay> {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return None;
    }
    let ndc = Vec2::new(
        (pixel.x / viewport.x) * 2.0 - 1.0,
        1.0 - (pixel.y / viewport.y) * 2.0,
    );

    let inv = (proj * view).inverse();
    let near = inv * ndc.extend(-1.0).extend(1.0);
    let far = inv * ndc.extend(1.0).extend(1.0);
    if near.w.abs() < f32::EPSILON || far.w.abs() < f32::EPSILON {
        return None;
    }
    let near = near.xyz() / near.w;
    let far = far.xyz() / far.w;

    let dir = (far - near).try_normalize()?;
    Some(PickRay { origin: near, dir })
}

/// Intersect a ray with a sphere, returning the nearest hit in front of the
/// ray origin. The planet's rotation (about Y, by `rotation_angle` radians)
/// is inverted to produce the stored local-frame coordinate.
pub fn pick_sphere(
    ray: PickRay,
    center: Vec3,
    radius: f32,
    rotation_angle: f32,
) -> Option<SurfaceHit> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.dir);
    let c = oc.length_squared() - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sqrt_disc = disc.sqrt();
    // Nearest root in front of the origin; inside the sphere counts too.
    let t = if -b - sqrt_disc > 0.0 {
        -b - sqrt_disc
    } else {
        -b + sqrt_disc
    };
    if t <= 0.0 {
        return None;
    }

    let world_point = ray.origin + ray.dir * t;
    let world_normal = (world_point - center).normalize_or(Vec3::Y);
    let local_unit = glam::Quat::from_rotation_y(-rotation_angle) * world_normal;
    Some(SurfaceHit {
        world_point,
        world_normal,
        local_unit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight_ray() -> PickRay {
        PickRay {
            origin: Vec3::new(0.0, 0.0, 100.0),
            dir: Vec3::NEG_Z,
        }
    }

    #[test]
    fn test_ray_hits_sphere_front_face() {
        let hit = pick_sphere(straight_ray(), Vec3::ZERO, 10.0, 0.0).unwrap();
        assert!((hit.world_point.z - 10.0).abs() < 1e-4);
        assert!((hit.world_normal - Vec3::Z).length() < 1e-4);
        assert!((hit.local_unit.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_ray_misses_sphere() {
        let ray = PickRay {
            origin: Vec3::new(50.0, 0.0, 100.0),
            dir: Vec3::NEG_Z,
        };
        assert!(pick_sphere(ray, Vec3::ZERO, 10.0, 0.0).is_none());
    }

    #[test]
    fn test_sphere_behind_origin_is_ignored() {
        let ray = PickRay {
            origin: Vec3::new(0.0, 0.0, -100.0),
            dir: Vec3::NEG_Z,
        };
        assert!(pick_sphere(ray, Vec3::ZERO, 10.0, 0.0).is_none());
    }

    #[test]
    fn test_rotation_unwinds_into_local_frame() {
        // Quarter turn: the +Z surface point maps back to the local frame.
        let angle = std::f32::consts::FRAC_PI_2;
        let hit = pick_sphere(straight_ray(), Vec3::ZERO, 10.0, angle).unwrap();
        let expected = glam::Quat::from_rotation_y(-angle) * Vec3::Z;
        assert!((hit.local_unit - expected).length() < 1e-4);
    }

    #[test]
    fn test_pointer_ray_through_viewport_center() {
        let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 100.0), Vec3::ZERO, Vec3::Y);
        let proj = Mat4::perspective_rh(1.0, 16.0 / 9.0, 0.1, 10_000.0);
        let ray = pointer_ray(Vec2::new(640.0, 360.0), Vec2::new(1280.0, 720.0), view, proj)
            .unwrap();
        assert!((ray.dir - Vec3::NEG_Z).length() < 1e-3);
    }

    #[test]
    fn test_degenerate_viewport_yields_no_ray() {
        let view = Mat4::IDENTITY;
        let proj = Mat4::perspective_rh(1.0, 1.0, 0.1, 100.0);
        assert!(pointer_ray(Vec2::ZERO, Vec2::ZERO, view, proj).is_none());
    }
}
