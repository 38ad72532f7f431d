//! Fixed-timestep game loop implementing the "Fix Your Timestep" pattern.
//!
//! Decouples simulation (fixed 60 Hz) from rendering (variable rate) using
//! an accumulator, and exposes an interpolation alpha for rendering between
//! simulation states.

use std::time::Instant;

use tracing::warn;

/// Fixed simulation timestep: 60 Hz.
pub const FIXED_DT: f64 = 1.0 / 60.0;

/// Maximum frame time clamp to prevent spiral of death. Frames slower than
/// this accept slowdown instead of piling up catch-up steps.
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Fixed-timestep game loop state.
///
/// Call [`tick`](Self::tick) once per frame. The time source lives in
/// `tick`; [`advance`](Self::advance) takes an explicit frame time and is
/// what everything else (including the tests) is built on.
pub struct GameLoop {
    previous_time: Instant,
    accumulator: f64,
    total_sim_time: f64,
    frame_count: u64,
    update_count: u64,
}

impl GameLoop {
    pub fn new() -> Self {
        Self {
            previous_time: Instant::now(),
            accumulator: 0.0,
            total_sim_time: 0.0,
            frame_count: 0,
            update_count: 0,
        }
    }

    /// Runs one wall-clock frame: measures elapsed time, then delegates to
    /// [`advance`](Self::advance).
    pub fn tick(&mut self, update_fn: impl FnMut(f64, f64), render_fn: impl FnMut(f64)) {
        let current_time = Instant::now();
        let frame_time = current_time
            .duration_since(self.previous_time)
            .as_secs_f64();
        self.previous_time = current_time;
        self.advance(frame_time, update_fn, render_fn);
    }

    /// Runs one frame of explicit length.
    ///
    /// - `update_fn(fixed_dt, total_sim_time)` runs zero or more times at
    ///   the fixed rate.
    /// - `render_fn(alpha)` runs exactly once with the interpolation alpha
    ///   in `[0.0, 1.0)`.
    pub fn advance(
        &mut self,
        mut frame_time: f64,
        mut update_fn: impl FnMut(f64, f64),
        mut render_fn: impl FnMut(f64),
    ) {
        if frame_time > MAX_FRAME_TIME {
            warn!(
                "frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_time * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            frame_time = MAX_FRAME_TIME;
        }

        self.accumulator += frame_time;

        while self.accumulator >= FIXED_DT {
            update_fn(FIXED_DT, self.total_sim_time);
            self.total_sim_time += FIXED_DT;
            self.accumulator -= FIXED_DT;
            self.update_count += 1;
        }

        render_fn(self.alpha());
        self.frame_count += 1;
    }

    /// Current interpolation alpha without running a tick.
    pub fn alpha(&self) -> f64 {
        if self.accumulator > 0.0 {
            self.accumulator / FIXED_DT
        } else {
            0.0
        }
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    /// Total simulation time in seconds.
    pub fn total_sim_time(&self) -> f64 {
        self.total_sim_time
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}
