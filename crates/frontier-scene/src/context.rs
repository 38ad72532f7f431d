//! The scene context: owned visual state plus the per-frame tick.

use glam::{Quat, Vec2, Vec3};
use tracing::{debug, info};

use frontier_camera::{Camera, CameraEvent, CameraInputs, CameraParams, CameraRig, ViewMode};
use frontier_models::{
    ModelGroup, ModelNode, PlanetModel, StarParticle, placement_ring, planet_model,
    starfield_points, structure_altitude, structure_model,
};
use frontier_world::{BuildingId, PlanetDescriptor, StructureType};

use crate::picking::{SurfaceHit, pick_sphere, pointer_ray};
use crate::pointer::{PointerOutcome, PointerTracker};
use crate::snapshot::{FrameSnapshot, SceneEvent};

/// Catalog radii are in abstract units; this maps them into world units.
const VISUAL_SCALE: f32 = 0.1;

/// Base drift speed of the star shell, world units per second.
const STAR_DRIFT: f32 = 1.5;

/// Star speed multiplier while the hyperdrive is charging.
const HYPERDRIVE_STREAK: f32 = 40.0;

/// Per-tick scale increment for newly placed buildings.
const SPAWN_GROW_STEP: f32 = 0.05;

/// Lift of the placement ring above the surface, world units, against
/// z-fighting with the terrain.
const RING_LIFT: f32 = 5.0;

/// Catalog speeds are per frame at this reference rate.
const REFERENCE_HZ: f32 = 60.0;

/// One placed structure's visual state.
#[derive(Debug, Clone)]
pub struct BuildingVisual {
    pub id: BuildingId,
    pub structure: StructureType,
    /// Unit vector in the planet's local frame, copied from the ledger.
    pub local_unit: Vec3,
    /// Grows from near zero to 1.0 after placement.
    pub scale: f32,
    pub group: ModelGroup,
}

impl BuildingVisual {
    /// World-space pose, following the planet's spin.
    pub fn world_pose(&self, rotation_angle: f32, visual_radius: f32) -> (Vec3, Quat) {
        let spin = Quat::from_rotation_y(rotation_angle);
        let normal = spin * self.local_unit;
        let altitude = structure_altitude(self.structure, visual_radius);
        let position = normal * (visual_radius + altitude);
        let orientation = Quat::from_rotation_arc(Vec3::Y, normal);
        (position, orientation)
    }
}

/// Translucent preview of the armed structure under the pointer.
#[derive(Debug, Clone)]
pub struct GhostPreview {
    pub structure: StructureType,
    pub hit: SurfaceHit,
    pub orientation: Quat,
    pub group: ModelGroup,
    pub ring: ModelNode,
    /// World position of the ring, lifted off the surface.
    pub ring_position: Vec3,
}

/// Owns the visual state of the active system and advances it each frame.
pub struct SceneContext {
    camera: Camera,
    descriptor: PlanetDescriptor,
    planet: PlanetModel,
    rotation_angle: f32,
    stars: Vec<StarParticle>,
    /// Outer radius of the star shell; stars wrap at this depth.
    starfield_max: f32,
    buildings: Vec<BuildingVisual>,
    ghost: Option<GhostPreview>,
    pointer: PointerTracker,
    elapsed: f64,
    seed: u64,
}

impl SceneContext {
    pub fn new(
        descriptor: PlanetDescriptor,
        star_count: u32,
        starfield_min: f32,
        starfield_max: f32,
        drag_threshold_px: f32,
        seed: u64,
        aspect: f32,
    ) -> Self {
        let visual_radius = descriptor.radius * VISUAL_SCALE;
        let planet = planet_model(&descriptor, visual_radius, seed);
        let mut rig = CameraRig::new(CameraParams::default(), Vec3::ZERO);
        let vantage = rig.orbit_vantage(Vec3::ZERO, visual_radius);
        rig.snap_to(vantage, Vec3::ZERO);
        info!(planet = %descriptor.name, stars = star_count, "scene built");
        Self {
            camera: Camera::new(rig, aspect),
            descriptor,
            planet,
            rotation_angle: 0.0,
            stars: starfield_points(seed, star_count, starfield_min, starfield_max),
            starfield_max,
            buildings: Vec::new(),
            ghost: None,
            pointer: PointerTracker::new(drag_threshold_px),
            elapsed: 0.0,
            seed,
        }
    }

    pub fn descriptor(&self) -> &PlanetDescriptor {
        &self.descriptor
    }

    pub fn visual_radius(&self) -> f32 {
        self.descriptor.radius * VISUAL_SCALE
    }

    pub fn planet(&self) -> &PlanetModel {
        &self.planet
    }

    pub fn rotation_angle(&self) -> f32 {
        self.rotation_angle
    }

    pub fn stars(&self) -> &[StarParticle] {
        &self.stars
    }

    pub fn buildings(&self) -> &[BuildingVisual] {
        &self.buildings
    }

    pub fn ghost(&self) -> Option<&GhostPreview> {
        self.ghost.as_ref()
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Seconds of scene time, the key for animation hooks.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Swap in a new body after a warp.
    ///
    /// The whole planet subtree is rebuilt from the descriptor, so parts of
    /// the previous body (rings in particular) cannot leak into the new
    /// one. Building visuals are dropped; the ledger's post-warp reconcile
    /// repopulates them.
    pub fn set_planet(&mut self, descriptor: PlanetDescriptor) {
        let visual_radius = descriptor.radius * VISUAL_SCALE;
        self.planet = planet_model(&descriptor, visual_radius, self.seed);
        self.rotation_angle = 0.0;
        self.buildings.clear();
        self.ghost = None;
        let vantage = self.camera.rig.orbit_vantage(Vec3::ZERO, visual_radius);
        self.camera.rig.snap_to(vantage, Vec3::ZERO);
        info!(planet = %descriptor.name, "planet swapped");
        self.descriptor = descriptor;
    }

    /// Advance the scene one frame and report what the player did.
    pub fn tick(&mut self, snapshot: &FrameSnapshot<'_>, dt: f32) -> Vec<SceneEvent> {
        let mut events = Vec::new();
        self.elapsed += f64::from(dt);

        // Planet spin. Catalog speeds are per reference frame.
        self.rotation_angle += self.descriptor.rotation_speed * dt * REFERENCE_HZ;

        self.advance_stars(snapshot.hyperdrive, dt);
        self.reconcile_buildings(snapshot.buildings);
        self.handle_pointer(snapshot, &mut events);
        self.update_ghost(snapshot);

        let inputs = CameraInputs {
            mode: snapshot.mode,
            hyperdrive: snapshot.hyperdrive,
            planet_center: Vec3::ZERO,
            visual_radius: self.visual_radius(),
            pan: snapshot.pan,
        };
        match self.camera.rig.advance(&inputs, dt) {
            Some(CameraEvent::LandComplete) => events.push(SceneEvent::LandComplete),
            Some(CameraEvent::AscendComplete) => events.push(SceneEvent::AscendComplete),
            None => {}
        }

        events
    }

    fn advance_stars(&mut self, hyperdrive: bool, dt: f32) {
        let mult = if hyperdrive { HYPERDRIVE_STREAK } else { 1.0 };
        let step = STAR_DRIFT * mult * dt;
        for star in &mut self.stars {
            star.position.z += star.speed * step;
            // Recycle stars that drift out of the shell.
            if star.position.z > self.starfield_max {
                star.position.z -= 2.0 * self.starfield_max;
            }
        }
    }

    /// Diff the ledger's building list against the visuals by id.
    fn reconcile_buildings(&mut self, authoritative: &[frontier_world::Building]) {
        let visual_radius = self.visual_radius();
        self.buildings.retain(|visual| {
            authoritative.iter().any(|b| b.id == visual.id)
        });
        for building in authoritative {
            if self.buildings.iter().any(|v| v.id == building.id) {
                continue;
            }
            debug!(id = building.id.0, structure = ?building.structure, "building visual spawned");
            self.buildings.push(BuildingVisual {
                id: building.id,
                structure: building.structure,
                local_unit: building.position,
                scale: SPAWN_GROW_STEP,
                group: structure_model(building.structure, visual_radius, false),
            });
        }
        for visual in &mut self.buildings {
            if visual.scale < 1.0 {
                visual.scale = (visual.scale + SPAWN_GROW_STEP).min(1.0);
            }
        }
    }

    fn handle_pointer(&mut self, snapshot: &FrameSnapshot<'_>, events: &mut Vec<SceneEvent>) {
        for sample in snapshot.pointer {
            match self.pointer.feed(*sample) {
                PointerOutcome::Drag(delta) => {
                    events.push(SceneEvent::PanDragged(delta));
                }
                PointerOutcome::Click(at) => {
                    let Some(hit) = self.raycast(at, snapshot.viewport) else {
                        continue;
                    };
                    match snapshot.mode {
                        ViewMode::Orbit if !snapshot.hyperdrive => {
                            events.push(SceneEvent::LandingRequested);
                        }
                        ViewMode::Surface => {
                            if let Some(structure) = snapshot.selected_structure {
                                events.push(SceneEvent::PlacementRequested {
                                    structure,
                                    local_unit: hit.local_unit,
                                });
                            }
                        }
                        _ => {}
                    }
                }
                PointerOutcome::None => {}
            }
        }
    }

    /// Rebuild the ghost from the current hover position, or clear it.
    fn update_ghost(&mut self, snapshot: &FrameSnapshot<'_>) {
        let preview = if snapshot.mode.is_surface() && !self.pointer.is_dragging() {
            snapshot.selected_structure.and_then(|structure| {
                let hit = self.raycast(self.pointer.position(), snapshot.viewport)?;
                let orientation = Quat::from_rotation_arc(Vec3::Y, hit.world_normal);
                let visual_radius = self.visual_radius();
                Some(GhostPreview {
                    structure,
                    hit,
                    orientation,
                    group: structure_model(structure, visual_radius, true),
                    ring: placement_ring(visual_radius),
                    ring_position: hit.world_point + hit.world_normal * RING_LIFT,
                })
            })
        } else {
            None
        };
        self.ghost = preview;
    }

    fn raycast(&self, pixel: Vec2, viewport: Vec2) -> Option<SurfaceHit> {
        let ray = pointer_ray(
            pixel,
            viewport,
            self.camera.view_matrix(),
            self.camera.projection_matrix(),
        )?;
        pick_sphere(ray, Vec3::ZERO, self.visual_radius(), self.rotation_angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pointer::PointerSample;
    use frontier_world::{Building, ResourceLedger, RingSpec, StructureType};

    const DT: f32 = 1.0 / 60.0;
    const VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);

    fn descriptor(rings: bool) -> PlanetDescriptor {
        PlanetDescriptor {
            name: "Testholm".into(),
            biome: frontier_world::BiomeType::Terrestrial,
            base_color: [0.2, 0.5, 0.3],
            atmosphere_color: [0.5, 0.7, 1.0],
            radius: 100.0,
            rotation_speed: 0.001,
            description: String::new(),
            anomalies: vec![],
            rings: rings.then(|| RingSpec {
                color: [0.8, 0.7, 0.6],
                inner: 1.3,
                outer: 2.2,
            }),
            resources: frontier_world::ResourceProfile::new(5.0, 5.0, 5.0),
        }
    }

    fn scene(rings: bool) -> SceneContext {
        SceneContext::new(descriptor(rings), 512, 4000.0, 9500.0, 6.0, 7, 16.0 / 9.0)
    }

    fn snapshot<'a>(
        mode: ViewMode,
        pointer: &'a [PointerSample],
        buildings: &'a [Building],
    ) -> FrameSnapshot<'a> {
        FrameSnapshot {
            mode,
            hyperdrive: false,
            pan: Vec2::ZERO,
            viewport: VIEWPORT,
            pointer,
            selected_structure: Some(StructureType::Extractor),
            buildings,
        }
    }

    fn center_click() -> [PointerSample; 2] {
        [
            PointerSample::Down(Vec2::new(640.0, 360.0)),
            PointerSample::Up(Vec2::new(640.0, 360.0)),
        ]
    }

    #[test]
    fn test_planet_swap_drops_stale_rings() {
        let mut scene = scene(true);
        assert!(scene.planet().rings.is_some());
        scene.set_planet(descriptor(false));
        assert!(scene.planet().rings.is_none());
    }

    #[test]
    fn test_planet_swap_clears_building_visuals() {
        let mut scene = scene(false);
        let mut ledger = ResourceLedger::default();
        ledger
            .place(StructureType::Extractor, Vec3::Y, 0, 0.0)
            .unwrap();
        scene.tick(&snapshot(ViewMode::Surface, &[], ledger.buildings()), DT);
        assert_eq!(scene.buildings().len(), 1);
        scene.set_planet(descriptor(false));
        assert!(scene.buildings().is_empty());
    }

    #[test]
    fn test_reconcile_spawns_and_grows() {
        let mut scene = scene(false);
        let mut ledger = ResourceLedger::default();
        ledger
            .place(StructureType::Solar, Vec3::Y, 0, 0.0)
            .unwrap();
        scene.tick(&snapshot(ViewMode::Surface, &[], ledger.buildings()), DT);
        let first = scene.buildings()[0].scale;
        assert!(first < 0.2);
        for _ in 0..30 {
            scene.tick(&snapshot(ViewMode::Surface, &[], ledger.buildings()), DT);
        }
        assert_eq!(scene.buildings()[0].scale, 1.0);
    }

    #[test]
    fn test_reconcile_removes_missing_ids() {
        let mut scene = scene(false);
        let mut ledger = ResourceLedger::default();
        ledger
            .place(StructureType::Extractor, Vec3::Y, 0, 0.0)
            .unwrap();
        scene.tick(&snapshot(ViewMode::Surface, &[], ledger.buildings()), DT);
        assert_eq!(scene.buildings().len(), 1);
        scene.tick(&snapshot(ViewMode::Surface, &[], &[]), DT);
        assert!(scene.buildings().is_empty());
    }

    #[test]
    fn test_orbit_click_on_planet_requests_landing() {
        let mut scene = scene(false);
        let clicks = center_click();
        let events = scene.tick(&snapshot(ViewMode::Orbit, &clicks, &[]), DT);
        assert!(events.contains(&SceneEvent::LandingRequested));
    }

    #[test]
    fn test_click_off_planet_is_ignored() {
        let mut scene = scene(false);
        let clicks = [
            PointerSample::Down(Vec2::new(5.0, 5.0)),
            PointerSample::Up(Vec2::new(5.0, 5.0)),
        ];
        let events = scene.tick(&snapshot(ViewMode::Orbit, &clicks, &[]), DT);
        assert!(events.is_empty());
    }

    #[test]
    fn test_surface_click_requests_placement_with_unit_position() {
        let mut scene = scene(false);
        let clicks = center_click();
        let events = scene.tick(&snapshot(ViewMode::Surface, &clicks, &[]), DT);
        let placement = events.iter().find_map(|e| match e {
            SceneEvent::PlacementRequested { local_unit, .. } => Some(*local_unit),
            _ => None,
        });
        let local_unit = placement.expect("no placement event");
        assert!((local_unit.length() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_drag_emits_pan_and_suppresses_click() {
        let mut scene = scene(false);
        let gesture = [
            PointerSample::Down(Vec2::new(640.0, 360.0)),
            PointerSample::Move(Vec2::new(680.0, 360.0)),
            PointerSample::Up(Vec2::new(680.0, 360.0)),
        ];
        let events = scene.tick(&snapshot(ViewMode::Orbit, &gesture, &[]), DT);
        assert!(events.contains(&SceneEvent::PanDragged(Vec2::new(40.0, 0.0))));
        assert!(!events.contains(&SceneEvent::LandingRequested));
    }

    #[test]
    fn test_ghost_follows_hover_in_surface_mode() {
        let mut scene = scene(false);
        let hover = [PointerSample::Move(Vec2::new(640.0, 360.0))];
        scene.tick(&snapshot(ViewMode::Surface, &hover, &[]), DT);
        let ghost = scene.ghost().expect("no ghost");
        assert_eq!(ghost.structure, StructureType::Extractor);
        assert!((ghost.hit.local_unit.length() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_no_ghost_in_orbit_mode() {
        let mut scene = scene(false);
        let hover = [PointerSample::Move(Vec2::new(640.0, 360.0))];
        scene.tick(&snapshot(ViewMode::Orbit, &hover, &[]), DT);
        assert!(scene.ghost().is_none());
    }

    #[test]
    fn test_hyperdrive_speeds_up_stars() {
        let mut scene = scene(false);
        let before = scene.stars()[0].position;
        let mut snap = snapshot(ViewMode::Orbit, &[], &[]);
        snap.hyperdrive = true;
        scene.tick(&snap, DT);
        let fast_delta = (scene.stars()[0].position - before).length();

        let mut slow = SceneContext::new(descriptor(false), 512, 4000.0, 9500.0, 6.0, 7, 16.0 / 9.0);
        let before_slow = slow.stars()[0].position;
        slow.tick(&snapshot(ViewMode::Orbit, &[], &[]), DT);
        let slow_delta = (slow.stars()[0].position - before_slow).length();

        assert!(fast_delta > slow_delta * 10.0);
    }

    #[test]
    fn test_configured_shell_radii_bound_the_stars() {
        let mut scene = SceneContext::new(descriptor(false), 256, 100.0, 300.0, 6.0, 7, 16.0 / 9.0);
        for star in scene.stars() {
            let d = star.position.length();
            assert!(d >= 100.0 - 1e-3 && d <= 300.0 + 1e-3, "star at {d}");
        }
        // Drifting stars recycle at the configured outer radius.
        let mut snap = snapshot(ViewMode::Orbit, &[], &[]);
        snap.hyperdrive = true;
        for _ in 0..2400 {
            scene.tick(&snap, DT);
        }
        for star in scene.stars() {
            assert!(star.position.z <= 300.0 + 1e-3);
        }
    }

    #[test]
    fn test_rotation_advances_with_descriptor_speed() {
        let mut scene = scene(false);
        scene.tick(&snapshot(ViewMode::Orbit, &[], &[]), DT);
        assert!((scene.rotation_angle() - 0.001).abs() < 1e-6);
    }
}
