//! The game session: ledger, view mode, warps, missions, achievements.
//!
//! The session owns all game state and drives the scene once per fixed
//! update. Scene events come back from the tick and are applied here, so
//! the scene never mutates the ledger or the view mode itself.

use std::collections::HashSet;

use glam::Vec2;
use tracing::{info, warn};

use frontier_camera::ViewMode;
use frontier_config::Config;
use frontier_gen::{GeneratedLevel, GenerationOutcome, PendingGeneration, PlanetSource, spawn_generation};
use frontier_scene::{FrameSnapshot, PointerSample, SceneContext, SceneEvent};
use frontier_world::{
    Achievement, AchievementState, Mission, PlacementError, ResourceLedger, StructureType,
    evaluate_achievements, evaluate_missions,
};

/// Pan decay factor applied once per fixed update.
const PAN_DECAY: f32 = 0.94;

/// Pixels of drag per unit of pan offset.
const PAN_PIXEL_SCALE: f32 = 0.005;

/// Things the UI layer would surface as toasts.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionNotice {
    StructurePlaced(StructureType),
    PlacementRejected(String),
    MissionCompleted(String),
    AchievementUnlocked(Achievement),
    /// A warp finished and a new body is active.
    Arrived { planet: String, fallback: bool },
}

/// An in-flight warp: the charge timer plus the generation request.
struct Warp {
    elapsed: f64,
    pending: PendingGeneration,
    outcome: Option<GenerationOutcome>,
}

/// Top-level game state and orchestration.
pub struct Session {
    ledger: ResourceLedger,
    mode: ViewMode,
    selected_structure: Option<StructureType>,
    missions: Vec<Mission>,
    achievements: AchievementState,
    visited_planets: HashSet<usize>,
    planet_index: usize,
    pan: Vec2,
    viewport: Vec2,
    pan_sensitivity: f32,
    invert_y: bool,
    resource_tick_seconds: f64,
    hyperdrive_seconds: f64,
    resource_accumulator: f64,
    sim_time: f64,
    warp: Option<Warp>,
}

impl Session {
    pub fn new(config: &Config, missions: Vec<Mission>) -> Self {
        let game = &config.game;
        let mut visited_planets = HashSet::new();
        visited_planets.insert(0);
        Self {
            ledger: ResourceLedger::new(
                game.starting_minerals,
                game.starting_energy,
                game.starting_tech,
            ),
            mode: ViewMode::Orbit,
            selected_structure: None,
            missions,
            achievements: AchievementState::default(),
            visited_planets,
            planet_index: 0,
            pan: Vec2::ZERO,
            viewport: Vec2::new(config.window.width as f32, config.window.height as f32),
            pan_sensitivity: config.input.pan_sensitivity,
            invert_y: config.input.invert_y,
            resource_tick_seconds: game.resource_tick_seconds,
            hyperdrive_seconds: game.hyperdrive_seconds,
            resource_accumulator: 0.0,
            sim_time: 0.0,
            warp: None,
        }
    }

    pub fn ledger(&self) -> &ResourceLedger {
        &self.ledger
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn missions(&self) -> &[Mission] {
        &self.missions
    }

    pub fn achievements(&self) -> &AchievementState {
        &self.achievements
    }

    pub fn is_warping(&self) -> bool {
        self.warp.is_some()
    }

    pub fn selected_structure(&self) -> Option<StructureType> {
        self.selected_structure
    }

    /// Arm (or disarm) a structure for placement.
    pub fn arm_structure(&mut self, structure: Option<StructureType>) {
        self.selected_structure = structure;
    }

    /// Leave the surface. Only meaningful while landed.
    pub fn begin_ascent(&mut self) {
        if self.mode == ViewMode::Surface {
            self.mode = ViewMode::Ascending;
            self.selected_structure = None;
            info!("ascent started");
        }
    }

    /// Start a hyperdrive warp. Ignored while one is already charging or
    /// away from orbit.
    pub fn start_warp(&mut self, source: Box<dyn PlanetSource>) {
        if self.warp.is_some() || self.mode != ViewMode::Orbit {
            return;
        }
        info!("hyperdrive charging");
        self.selected_structure = None;
        self.warp = Some(Warp {
            elapsed: 0.0,
            pending: spawn_generation(source, 1),
            outcome: None,
        });
    }

    /// One fixed update: drive the scene, apply its events, then advance
    /// the resource economy and any in-flight warp.
    pub fn update(
        &mut self,
        scene: &mut SceneContext,
        pointer: &[PointerSample],
        dt: f64,
    ) -> Vec<SessionNotice> {
        let mut notices = Vec::new();
        self.sim_time += dt;
        self.pan *= PAN_DECAY;

        let snapshot = FrameSnapshot {
            mode: self.mode,
            hyperdrive: self.warp.is_some(),
            pan: self.pan,
            viewport: self.viewport,
            pointer,
            selected_structure: self.selected_structure,
            buildings: self.ledger.buildings(),
        };
        let events = scene.tick(&snapshot, dt as f32);

        for event in events {
            self.apply_scene_event(event, &mut notices);
        }

        self.advance_economy(scene, dt, &mut notices);
        self.advance_warp(scene, dt, &mut notices);
        self.evaluate_progress(&mut notices);

        notices
    }

    fn apply_scene_event(&mut self, event: SceneEvent, notices: &mut Vec<SessionNotice>) {
        match event {
            SceneEvent::LandingRequested => {
                if self.mode == ViewMode::Orbit && self.warp.is_none() {
                    info!("landing sequence started");
                    self.mode = ViewMode::Landing;
                }
            }
            SceneEvent::LandComplete => {
                info!("touchdown");
                self.mode = ViewMode::Surface;
            }
            SceneEvent::AscendComplete => {
                info!("orbit reached");
                self.mode = ViewMode::Orbit;
            }
            SceneEvent::PanDragged(delta) => {
                let y_sign = if self.invert_y { -1.0 } else { 1.0 };
                self.pan += Vec2::new(-delta.x, delta.y * y_sign)
                    * PAN_PIXEL_SCALE
                    * self.pan_sensitivity;
            }
            SceneEvent::PlacementRequested {
                structure,
                local_unit,
            } => {
                match self
                    .ledger
                    .place(structure, local_unit, self.planet_index, self.sim_time)
                {
                    Ok(building) => {
                        info!(id = building.id.0, ?structure, "structure placed");
                        notices.push(SessionNotice::StructurePlaced(structure));
                    }
                    Err(err @ PlacementError::NotAffordable { .. }) => {
                        info!(%err, "placement rejected");
                        notices.push(SessionNotice::PlacementRejected(err.to_string()));
                    }
                    Err(err) => {
                        warn!(%err, "placement rejected");
                        notices.push(SessionNotice::PlacementRejected(err.to_string()));
                    }
                }
            }
        }
    }

    /// Resource yields accrue on a coarse timer, paused during warps.
    fn advance_economy(
        &mut self,
        scene: &SceneContext,
        dt: f64,
        _notices: &mut [SessionNotice],
    ) {
        if self.warp.is_some() {
            return;
        }
        self.resource_accumulator += dt;
        while self.resource_accumulator >= self.resource_tick_seconds {
            self.resource_accumulator -= self.resource_tick_seconds;
            self.ledger.tick(&scene.descriptor().resources);
        }
    }

    /// A warp completes when the charge timer has run its course *and* the
    /// generation worker has delivered a destination.
    fn advance_warp(
        &mut self,
        scene: &mut SceneContext,
        dt: f64,
        notices: &mut Vec<SessionNotice>,
    ) {
        let Some(warp) = &mut self.warp else {
            return;
        };
        warp.elapsed += dt;
        if warp.outcome.is_none() {
            warp.outcome = warp.pending.try_recv();
        }
        if warp.elapsed < self.hyperdrive_seconds || warp.outcome.is_none() {
            return;
        }

        let Some(Warp {
            outcome: Some(outcome),
            ..
        }) = self.warp.take()
        else {
            return;
        };
        let fallback = outcome.fell_back();
        let mut levels = outcome.into_levels();
        if levels.is_empty() {
            // The fallback policy always yields at least one level; this
            // guard keeps the arrival total even if that changes.
            warn!("warp resolved with no destinations");
            return;
        }
        let GeneratedLevel { planet, missions } = levels.remove(0);

        self.planet_index += 1;
        self.visited_planets.insert(self.planet_index);
        self.ledger.travel_reset();
        self.missions = missions;
        self.mode = ViewMode::Orbit;
        self.pan = Vec2::ZERO;
        info!(planet = %planet.name, fallback, "warp arrived");
        notices.push(SessionNotice::Arrived {
            planet: planet.name.clone(),
            fallback,
        });
        scene.set_planet(planet);
    }

    fn evaluate_progress(&mut self, notices: &mut Vec<SessionNotice>) {
        for id in evaluate_missions(&mut self.missions, &self.ledger) {
            info!(mission = %id, "mission completed");
            notices.push(SessionNotice::MissionCompleted(id));
        }
        for achievement in
            evaluate_achievements(&mut self.achievements, &self.ledger, &self.visited_planets)
        {
            info!(?achievement, "achievement unlocked");
            notices.push(SessionNotice::AchievementUnlocked(achievement));
        }
    }
}
