//! Exponential smoothing toward a target.
//!
//! The convergence law is `pos += (target - pos) * rate` per reference
//! frame, with the effective rate rescaled for the actual `dt` so behavior
//! is identical at any frame rate. For a stationary target the distance to
//! the target shrinks by a constant factor every frame: monotone, never
//! overshooting.

use glam::Vec3;

/// Reference frame rate the per-frame rates are specified against.
pub const REFERENCE_HZ: f32 = 60.0;

/// Convert a per-reference-frame smoothing rate into the equivalent factor
/// for an arbitrary `dt`. Clamped below 1 so a huge `dt` snaps close to the
/// target but never past it.
pub fn rate_for_dt(rate_per_frame: f32, dt: f32) -> f32 {
    let rate = rate_per_frame.clamp(0.0, 0.999);
    let frames = dt * REFERENCE_HZ;
    1.0 - (1.0 - rate).powf(frames)
}

/// One smoothing step for a scalar.
pub fn approach(current: f32, target: f32, rate_per_frame: f32, dt: f32) -> f32 {
    current + (target - current) * rate_for_dt(rate_per_frame, dt)
}

/// One smoothing step for a vector.
pub fn approach_vec3(current: Vec3, target: Vec3, rate_per_frame: f32, dt: f32) -> Vec3 {
    current + (target - current) * rate_for_dt(rate_per_frame, dt)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_monotone_convergence_no_overshoot() {
        // Once within f32 resolution of the target the step can round to
        // zero, so only demand strict shrinkage above that floor.
        const SETTLED: f32 = 1e-3;
        let target = Vec3::new(100.0, -40.0, 7.0);
        let mut pos = Vec3::ZERO;
        let mut prev_dist = pos.distance(target);
        for _ in 0..600 {
            pos = approach_vec3(pos, target, 0.07, DT);
            let dist = pos.distance(target);
            if dist < SETTLED {
                break;
            }
            assert!(dist < prev_dist, "distance grew: {dist} >= {prev_dist}");
            // Never crosses to the far side.
            assert!((target - pos).dot(target - Vec3::ZERO) >= 0.0);
            prev_dist = dist;
        }
        assert!(pos.distance(target) < 1.0);
    }

    #[test]
    fn test_rate_is_frame_rate_independent() {
        // One 30 Hz step must equal two 60 Hz steps.
        let mut at_30 = 0.0_f32;
        at_30 = approach(at_30, 10.0, 0.1, 1.0 / 30.0);

        let mut at_60 = 0.0_f32;
        at_60 = approach(at_60, 10.0, 0.1, DT);
        at_60 = approach(at_60, 10.0, 0.1, DT);

        assert!((at_30 - at_60).abs() < 1e-4, "{at_30} vs {at_60}");
    }

    #[test]
    fn test_huge_dt_clamps_at_target() {
        let pos = approach(0.0, 10.0, 0.5, 10.0);
        assert!(pos <= 10.0);
        assert!(pos > 9.99);
    }

    #[test]
    fn test_zero_rate_never_moves() {
        assert_eq!(approach(3.0, 10.0, 0.0, DT), 3.0);
    }
}
