//! The binary entry point: a headless scripted session.
//!
//! Runs the full simulation stack without a window: loads config, builds
//! the scene for the first catalog body, then drives a scripted tour
//! (land, build, ascend, warp) through the fixed-timestep loop.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use glam::Vec2;
use tracing::info;

use frontier_app::{FIXED_DT, GameLoop, Session};
use frontier_camera::ViewMode;
use frontier_config::{CliArgs, Config};
use frontier_gen::{ProceduralSource, builtin_catalog};
use frontier_scene::{PointerSample, SceneContext};
use frontier_world::StructureType;

fn main() {
    let args = CliArgs::parse();
    let config_dir = args
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from("config"));

    let mut config = match Config::load_or_create(&config_dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("failed to load configuration: {e}");
            std::process::exit(1);
        }
    };
    config.apply_cli_overrides(&args);

    frontier_log::init_logging(
        Some(Path::new("logs")),
        cfg!(debug_assertions),
        Some(&config),
    );

    let seed = if config.game.seed == 0 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(1)
    } else {
        config.game.seed
    };

    let mut catalog = builtin_catalog();
    let start = catalog.remove(0);
    info!(planet = %start.planet.name, seed, "session starting");

    let aspect = config.window.width as f32 / config.window.height as f32;
    let mut scene = SceneContext::new(
        start.planet,
        config.render.star_count,
        config.render.starfield_min,
        config.render.starfield_max,
        config.input.drag_threshold_px,
        seed,
        aspect,
    );
    let mut session = Session::new(&config, start.missions);

    let center = Vec2::new(
        config.window.width as f32 / 2.0,
        config.window.height as f32 / 2.0,
    );
    let click = [PointerSample::Down(center), PointerSample::Up(center)];

    let mut game_loop = GameLoop::new();
    let mut clicked_to_land = false;
    let mut built = 0usize;
    let mut ascended = false;
    let mut warped = false;

    // Scripted tour: land on the first body, build two structures, climb
    // back to orbit, then warp to a procedurally generated world.
    for _ in 0..3600 {
        let mut pointer: &[PointerSample] = &[];

        match session.mode() {
            ViewMode::Orbit if !clicked_to_land && game_loop.total_sim_time() > 0.5 => {
                clicked_to_land = true;
                pointer = &click;
            }
            ViewMode::Surface if built < 2 => {
                let structure = if built == 0 {
                    StructureType::Extractor
                } else {
                    StructureType::Solar
                };
                session.arm_structure(Some(structure));
                pointer = &click;
                built += 1;
            }
            ViewMode::Surface if !ascended && game_loop.total_sim_time() > 15.0 => {
                ascended = true;
                session.begin_ascent();
            }
            ViewMode::Orbit if ascended && !warped && !session.is_warping() => {
                warped = true;
                session.start_warp(Box::new(ProceduralSource::new(seed)));
            }
            _ => {}
        }

        game_loop.advance(FIXED_DT, |dt, _| {
            for notice in session.update(&mut scene, pointer, dt) {
                info!(?notice, "session notice");
            }
            pointer = &[];
        }, |_| {});
    }

    let ledger = session.ledger();
    info!(
        planet = %scene.descriptor().name,
        minerals = ledger.minerals,
        energy = ledger.energy,
        tech = ledger.tech,
        buildings = ledger.buildings().len(),
        updates = game_loop.update_count(),
        "session complete"
    );
}
