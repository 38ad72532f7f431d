//! Worker-thread boundary for the blocking generation call.
//!
//! The frame loop never blocks on the service: [`spawn_generation`] runs the
//! source on a named thread and hands the outcome back over a bounded
//! channel. There is no cancellation: the session guards against starting a
//! second warp while one is pending, and dropping the handle just detaches
//! the worker (its result is discarded).

use std::thread;

use crossbeam_channel::{Receiver, TryRecvError, bounded};
use tracing::debug;

use crate::outcome::{GenerationOutcome, PlanetSource, generate_or_fallback};

/// Handle to an in-flight generation request.
pub struct PendingGeneration {
    receiver: Receiver<GenerationOutcome>,
    resolved: bool,
}

impl PendingGeneration {
    /// Poll for completion without blocking. Returns the outcome exactly
    /// once; later calls return `None`.
    pub fn try_recv(&mut self) -> Option<GenerationOutcome> {
        if self.resolved {
            return None;
        }
        match self.receiver.try_recv() {
            Ok(outcome) => {
                self.resolved = true;
                Some(outcome)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                // Worker died without sending; synthesize the fallback so
                // the caller still resolves rather than hanging the warp.
                self.resolved = true;
                debug!("generation worker disconnected before sending");
                Some(generate_or_fallback(&NeverSource, 1))
            }
        }
    }

    /// Whether an outcome has already been delivered.
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }
}

/// Source used only to synthesize a fallback after a dead worker.
struct NeverSource;

impl PlanetSource for NeverSource {
    fn generate(
        &self,
        _count: usize,
    ) -> Result<Vec<crate::outcome::GeneratedLevel>, crate::outcome::GenError> {
        Err(crate::outcome::GenError::Transport(
            "generation worker disconnected".into(),
        ))
    }
}

/// Start a generation request on a worker thread. The fallback policy is
/// applied on the worker, so the delivered outcome is always usable.
pub fn spawn_generation(
    source: Box<dyn PlanetSource>,
    count: usize,
) -> PendingGeneration {
    let (sender, receiver) = bounded(1);
    let builder = thread::Builder::new().name("frontier-gen".into());
    let spawn_result = builder.spawn(move || {
        let outcome = generate_or_fallback(source.as_ref(), count);
        // Receiver may have been dropped; nothing to do then.
        let _ = sender.send(outcome);
    });
    if spawn_result.is_err() {
        debug!("failed to spawn generation worker; outcome will fall back");
    }
    PendingGeneration {
        receiver,
        resolved: false,
    }
}
