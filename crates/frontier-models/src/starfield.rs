//! Procedural starfield: a deterministic point shell around the system.
//!
//! Stars are placed uniformly on a thick spherical shell; per-star
//! brightness follows a power law so most stars are dim. The scene crate
//! owns drift and hyperdrive streaking; this module only generates the
//! catalog.

use glam::Vec3;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// One star in the point cloud.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarParticle {
    pub position: Vec3,
    /// Brightness in [0.0, 1.0]; power-law distributed.
    pub brightness: f32,
    /// Per-star drift speed multiplier, used for hyperdrive streaking.
    pub speed: f32,
}

/// Generate `count` stars on a shell between `radius_min` and `radius_max`.
/// Deterministic for a given seed.
pub fn starfield_points(seed: u64, count: u32, radius_min: f32, radius_max: f32) -> Vec<StarParticle> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut stars = Vec::with_capacity(count as usize);

    for _ in 0..count {
        let r = radius_min + rng.random::<f32>() * (radius_max - radius_min);
        let theta = rng.random::<f32>() * std::f32::consts::TAU;
        // acos of a uniform variate gives uniform density on the sphere.
        let phi = (1.0 - 2.0 * rng.random::<f32>()).acos();

        let position = Vec3::new(
            r * phi.sin() * theta.cos(),
            r * phi.sin() * theta.sin(),
            r * phi.cos(),
        );

        let brightness = rng.random::<f32>().powf(4.0).clamp(0.0, 1.0);
        let speed = 0.5 + rng.random::<f32>();

        stars.push(StarParticle {
            position,
            brightness,
            speed,
        });
    }

    stars
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_per_seed() {
        let a = starfield_points(3, 256, 4000.0, 9500.0);
        let b = starfield_points(3, 256, 4000.0, 9500.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_all_stars_within_shell() {
        for star in starfield_points(11, 2048, 4000.0, 9500.0) {
            let r = star.position.length();
            assert!(r >= 4000.0 - 1.0 && r <= 9500.0 + 1.0, "r = {r}");
        }
    }

    #[test]
    fn test_brightness_power_law_skews_dim() {
        let stars = starfield_points(5, 4096, 1000.0, 2000.0);
        let dim = stars.iter().filter(|s| s.brightness < 0.1).count();
        // With brightness = u^4, ~75% of stars fall below 0.1.
        assert!(dim > stars.len() / 2, "only {dim} dim stars");
    }

    #[test]
    fn test_requested_count_respected() {
        assert_eq!(starfield_points(1, 8000, 10.0, 20.0).len(), 8000);
    }
}
