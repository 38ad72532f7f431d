//! The camera rig: per-mode targets, chase smoothing, and transition events.

use glam::{Mat4, Vec2, Vec3};

use crate::mode::ViewMode;
use crate::smoothing::approach_vec3;

/// Tuning table for the rig. All rates are per reference frame (60 Hz).
#[derive(Debug, Clone, Copy)]
pub struct CameraParams {
    pub orbit_rate: f32,
    pub landing_rate: f32,
    pub surface_rate: f32,
    pub ascending_rate: f32,
    pub hyperdrive_rate: f32,
    /// Orbit vantage distance as a multiple of the visual radius.
    pub orbit_distance: f32,
    /// Camera altitude while descending, as a multiple of the visual radius.
    pub landing_altitude: f32,
    /// Camera altitude once landed, as a multiple of the visual radius.
    pub surface_altitude: f32,
    /// Target altitude while climbing out, as a multiple of the visual radius.
    pub ascend_altitude: f32,
    /// Distance below which a landing completes, × visual radius.
    pub land_threshold: f32,
    /// Distance above which an ascent completes, × visual radius.
    pub ascend_threshold: f32,
    /// Far vantage point the camera retreats to during hyperdrive.
    pub hyperdrive_vantage: Vec3,
    /// How strongly pan offsets displace the orbit vantage, × visual radius.
    pub pan_scale: f32,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            orbit_rate: 0.07,
            landing_rate: 0.08,
            surface_rate: 0.10,
            ascending_rate: 0.06,
            hyperdrive_rate: 0.03,
            orbit_distance: 4.8,
            landing_altitude: 1.1,
            surface_altitude: 1.25,
            ascend_altitude: 6.0,
            land_threshold: 1.6,
            ascend_threshold: 4.5,
            hyperdrive_vantage: Vec3::new(0.0, 200_000.0, 400_000.0),
            pan_scale: 1.0,
        }
    }
}

/// Per-frame inputs sampled from the session.
#[derive(Debug, Clone, Copy)]
pub struct CameraInputs {
    pub mode: ViewMode,
    /// Overrides the mode's target while set; only meaningful in orbit.
    pub hyperdrive: bool,
    /// World-space center of the active body.
    pub planet_center: Vec3,
    /// Visual radius of the active body.
    pub visual_radius: f32,
    /// Accumulated pan offset, decayed by the session.
    pub pan: Vec2,
}

/// Fire-once transitions reported by [`CameraRig::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraEvent {
    /// Descent reached the land threshold; session should enter Surface.
    LandComplete,
    /// Climb passed the ascend threshold; session should enter Orbit.
    AscendComplete,
}

/// Smoothed chase camera with mode-dependent targets.
///
/// The rig never mutates the view mode. It chases the target the sampled
/// mode implies and reports threshold crossings exactly once per mode
/// entry; the session reacts by switching modes, which re-arms the latch.
#[derive(Debug, Clone)]
pub struct CameraRig {
    params: CameraParams,
    position: Vec3,
    look_target: Vec3,
    last_mode: ViewMode,
    event_fired: bool,
}

impl CameraRig {
    pub fn new(params: CameraParams, position: Vec3) -> Self {
        Self {
            params,
            position,
            look_target: Vec3::ZERO,
            last_mode: ViewMode::Orbit,
            event_fired: false,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn look_target(&self) -> Vec3 {
        self.look_target
    }

    pub fn params(&self) -> &CameraParams {
        &self.params
    }

    /// Snap instantly to a pose. Used after warps so the camera does not
    /// chase across interplanetary distances.
    pub fn snap_to(&mut self, position: Vec3, look_target: Vec3) {
        self.position = position;
        self.look_target = look_target;
    }

    /// The canonical orbit vantage for a body, before pan displacement.
    pub fn orbit_vantage(&self, center: Vec3, visual_radius: f32) -> Vec3 {
        let d = visual_radius * self.params.orbit_distance;
        center + Vec3::new(d * 0.25, d * 0.35, d)
    }

    /// Advance the rig one frame. Returns a transition event at most once
    /// per mode entry.
    pub fn advance(&mut self, inputs: &CameraInputs, dt: f32) -> Option<CameraEvent> {
        if inputs.mode != self.last_mode {
            self.last_mode = inputs.mode;
            self.event_fired = false;
        }

        let p = self.params;
        let center = inputs.planet_center;
        let radius = inputs.visual_radius;
        let surface_dir = (self.position - center).normalize_or(Vec3::Y);

        let (target, rate, look) = if inputs.hyperdrive {
            (p.hyperdrive_vantage, p.hyperdrive_rate, Vec3::ZERO)
        } else {
            match inputs.mode {
                ViewMode::Orbit => {
                    let pan = Vec3::new(inputs.pan.x, inputs.pan.y, 0.0)
                        * radius
                        * p.pan_scale;
                    (
                        self.orbit_vantage(center, radius) + pan,
                        p.orbit_rate,
                        center,
                    )
                }
                ViewMode::Landing => (
                    center + surface_dir * radius * p.landing_altitude,
                    p.landing_rate,
                    center,
                ),
                ViewMode::Surface => (
                    center + surface_dir * radius * p.surface_altitude,
                    p.surface_rate,
                    center,
                ),
                ViewMode::Ascending => (
                    center + surface_dir * radius * p.ascend_altitude,
                    p.ascending_rate,
                    center,
                ),
            }
        };

        self.position = approach_vec3(self.position, target, rate, dt);
        self.look_target = approach_vec3(self.look_target, look, rate, dt);

        if self.event_fired || inputs.hyperdrive {
            return None;
        }
        let dist = self.position.distance(center);
        let event = match inputs.mode {
            ViewMode::Landing if dist < radius * p.land_threshold => {
                Some(CameraEvent::LandComplete)
            }
            ViewMode::Ascending if dist > radius * p.ascend_threshold => {
                Some(CameraEvent::AscendComplete)
            }
            _ => None,
        };
        if event.is_some() {
            self.event_fired = true;
        }
        event
    }
}

/// Full camera: a rig plus the projection used for rendering and picking.
#[derive(Debug, Clone)]
pub struct Camera {
    pub rig: CameraRig,
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn new(rig: CameraRig, aspect: f32) -> Self {
        Self {
            rig,
            fov_y: 60f32.to_radians(),
            aspect,
            near: 0.1,
            far: 1_000_000.0,
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.rig.position(), self.rig.look_target(), Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn inputs(mode: ViewMode) -> CameraInputs {
        CameraInputs {
            mode,
            hyperdrive: false,
            planet_center: Vec3::ZERO,
            visual_radius: 10.0,
            pan: Vec2::ZERO,
        }
    }

    #[test]
    fn test_orbit_converges_to_vantage() {
        let mut rig = CameraRig::new(CameraParams::default(), Vec3::new(0.0, 0.0, 200.0));
        let vantage = rig.orbit_vantage(Vec3::ZERO, 10.0);
        for _ in 0..2000 {
            rig.advance(&inputs(ViewMode::Orbit), DT);
        }
        assert!(rig.position().distance(vantage) < 0.5);
    }

    #[test]
    fn test_landing_fires_land_complete_once() {
        let mut rig = CameraRig::new(CameraParams::default(), Vec3::new(0.0, 0.0, 48.0));
        let mut events = Vec::new();
        for _ in 0..2000 {
            if let Some(e) = rig.advance(&inputs(ViewMode::Landing), DT) {
                events.push(e);
            }
        }
        assert_eq!(events, vec![CameraEvent::LandComplete]);
        // Landing target sits inside the threshold.
        assert!(rig.position().length() < 16.0);
    }

    #[test]
    fn test_ascending_fires_ascend_complete_once() {
        let mut rig = CameraRig::new(CameraParams::default(), Vec3::new(0.0, 0.0, 12.5));
        let mut events = Vec::new();
        for _ in 0..2000 {
            if let Some(e) = rig.advance(&inputs(ViewMode::Ascending), DT) {
                events.push(e);
            }
        }
        assert_eq!(events, vec![CameraEvent::AscendComplete]);
        assert!(rig.position().length() > 45.0);
    }

    #[test]
    fn test_mode_change_rearms_event_latch() {
        let mut rig = CameraRig::new(CameraParams::default(), Vec3::new(0.0, 0.0, 48.0));
        let mut landings = 0;
        for _ in 0..2000 {
            if rig.advance(&inputs(ViewMode::Landing), DT).is_some() {
                landings += 1;
            }
        }
        // Climb back out, then land again: a second event must fire.
        for _ in 0..4000 {
            if rig.advance(&inputs(ViewMode::Ascending), DT).is_some() {
                break;
            }
        }
        for _ in 0..4000 {
            if rig.advance(&inputs(ViewMode::Landing), DT).is_some() {
                landings += 1;
            }
        }
        assert_eq!(landings, 2);
    }

    #[test]
    fn test_hyperdrive_overrides_target_and_suppresses_events() {
        let mut rig = CameraRig::new(CameraParams::default(), Vec3::new(0.0, 0.0, 48.0));
        let mut input = inputs(ViewMode::Landing);
        input.hyperdrive = true;
        let start = rig.position();
        for _ in 0..60 {
            assert_eq!(rig.advance(&input, DT), None);
        }
        let vantage = CameraParams::default().hyperdrive_vantage;
        assert!(rig.position().distance(vantage) < start.distance(vantage));
    }

    #[test]
    fn test_pan_displaces_orbit_vantage() {
        let params = CameraParams::default();
        let mut rig = CameraRig::new(params, Vec3::new(0.0, 0.0, 48.0));
        let mut input = inputs(ViewMode::Orbit);
        input.pan = Vec2::new(2.0, 0.0);
        for _ in 0..2000 {
            rig.advance(&input, DT);
        }
        let base = rig.orbit_vantage(Vec3::ZERO, 10.0);
        assert!(rig.position().x > base.x + 10.0);
    }

    #[test]
    fn test_snap_to_teleports() {
        let mut rig = CameraRig::new(CameraParams::default(), Vec3::ZERO);
        rig.snap_to(Vec3::new(5000.0, 0.0, 0.0), Vec3::new(5000.0, 0.0, -1.0));
        assert_eq!(rig.position(), Vec3::new(5000.0, 0.0, 0.0));
    }

    #[test]
    fn test_view_matrix_looks_at_target() {
        let mut rig = CameraRig::new(CameraParams::default(), Vec3::new(0.0, 0.0, 100.0));
        rig.snap_to(Vec3::new(0.0, 0.0, 100.0), Vec3::ZERO);
        let cam = Camera::new(rig, 16.0 / 9.0);
        let view = cam.view_matrix();
        // The origin projects onto the -Z axis in view space.
        let origin_view = view.transform_point3(Vec3::ZERO);
        assert!(origin_view.z < 0.0);
        assert!(origin_view.x.abs() < 1e-4 && origin_view.y.abs() < 1e-4);
    }
}
