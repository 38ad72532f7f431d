//! Application layer: the fixed-timestep loop and the game session.

pub mod game_loop;
pub mod session;

pub use game_loop::{FIXED_DT, GameLoop, MAX_FRAME_TIME};
pub use session::{Session, SessionNotice};
