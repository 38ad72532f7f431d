//! Configuration structs with sensible defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ConfigError;

/// Top-level game configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Window settings.
    pub window: WindowConfig,
    /// Rendering settings.
    pub render: RenderConfig,
    /// Input settings.
    pub input: InputConfig,
    /// Simulation settings.
    pub game: GameConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Window configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Window width in logical pixels.
    pub width: u32,
    /// Window height in logical pixels.
    pub height: u32,
    /// Start in fullscreen mode.
    pub fullscreen: bool,
    /// Window title.
    pub title: String,
}

/// Rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Number of stars in the background shell.
    pub star_count: u32,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Target frame rate (0 = unlimited / vsync).
    pub target_fps: u32,
    /// Inner radius of the background star shell.
    pub starfield_min: f32,
    /// Outer radius of the background star shell.
    pub starfield_max: f32,
}

/// Input configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Pointer motion below this many pixels still counts as a click.
    pub drag_threshold_px: f32,
    /// Pan speed multiplier for drag gestures.
    pub pan_sensitivity: f32,
    /// Invert vertical pan.
    pub invert_y: bool,
}

/// Simulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    /// Starting minerals balance.
    pub starting_minerals: f64,
    /// Starting energy balance.
    pub starting_energy: f64,
    /// Starting tech balance.
    pub starting_tech: f64,
    /// Seconds between resource yield ticks.
    pub resource_tick_seconds: f64,
    /// Duration of the hyperdrive charge sequence in seconds.
    pub hyperdrive_seconds: f64,
    /// Seed for procedural generation. 0 picks one from the clock.
    pub seed: u64,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Show FPS overlay.
    pub show_fps: bool,
    /// Log every scene event as it fires.
    pub trace_scene_events: bool,
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            fullscreen: false,
            title: "Frontier".to_string(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            star_count: 8000,
            fov_degrees: 60.0,
            target_fps: 0,
            starfield_min: 4000.0,
            starfield_max: 9500.0,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            drag_threshold_px: 6.0,
            pan_sensitivity: 1.0,
            invert_y: false,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_minerals: 250.0,
            starting_energy: 150.0,
            starting_tech: 0.0,
            resource_tick_seconds: 1.0,
            hyperdrive_seconds: 3.0,
            seed: 0,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            show_fps: false,
            trace_scene_events: false,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            info!("loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            info!("created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }
}
