//! Camera and view-mode state machine for Frontier.
//!
//! A [`CameraRig`] chases a per-mode target with exponential smoothing;
//! responsiveness scales with distance, which is what produces the inertial
//! camera feel. The view mode is owned by the session and sampled as input;
//! the rig only reports threshold crossings (landing and ascent completion)
//! as fire-once events.

mod mode;
mod rig;
mod smoothing;

pub use mode::ViewMode;
pub use rig::{Camera, CameraEvent, CameraInputs, CameraParams, CameraRig};
pub use smoothing::{approach, approach_vec3, rate_for_dt};
