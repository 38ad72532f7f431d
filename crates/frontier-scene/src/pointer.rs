//! Click/drag disambiguation for the pointer.
//!
//! A press followed by less than the threshold of motion is a click; once
//! the threshold is crossed the gesture is a drag for the rest of the
//! press, and the release is swallowed.

use glam::Vec2;

/// Raw pointer input for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerSample {
    Down(Vec2),
    Move(Vec2),
    Up(Vec2),
}

/// What a sample resolved to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerOutcome {
    /// Press and release without meaningful motion.
    Click(Vec2),
    /// Per-sample motion delta while dragging, in pixels.
    Drag(Vec2),
    /// Nothing actionable this sample.
    None,
}

/// Tracks one button's press state and classifies the gesture.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    threshold_px: f32,
    press_origin: Option<Vec2>,
    last_position: Vec2,
    dragging: bool,
}

impl PointerTracker {
    pub fn new(threshold_px: f32) -> Self {
        Self {
            threshold_px,
            ..Default::default()
        }
    }

    /// Latest known pointer position, for hover raycasts.
    pub fn position(&self) -> Vec2 {
        self.last_position
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn feed(&mut self, sample: PointerSample) -> PointerOutcome {
        match sample {
            PointerSample::Down(at) => {
                self.press_origin = Some(at);
                self.last_position = at;
                self.dragging = false;
                PointerOutcome::None
            }
            PointerSample::Move(at) => {
                let delta = at - self.last_position;
                self.last_position = at;
                let Some(origin) = self.press_origin else {
                    return PointerOutcome::None;
                };
                if !self.dragging && at.distance(origin) > self.threshold_px {
                    self.dragging = true;
                }
                if self.dragging {
                    PointerOutcome::Drag(delta)
                } else {
                    PointerOutcome::None
                }
            }
            PointerSample::Up(at) => {
                self.last_position = at;
                let was_click = self.press_origin.is_some() && !self.dragging;
                self.press_origin = None;
                self.dragging = false;
                if was_click {
                    PointerOutcome::Click(at)
                } else {
                    PointerOutcome::None
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_release_is_click() {
        let mut t = PointerTracker::new(6.0);
        t.feed(PointerSample::Down(Vec2::new(10.0, 10.0)));
        t.feed(PointerSample::Move(Vec2::new(12.0, 11.0)));
        assert_eq!(
            t.feed(PointerSample::Up(Vec2::new(12.0, 11.0))),
            PointerOutcome::Click(Vec2::new(12.0, 11.0))
        );
    }

    #[test]
    fn test_motion_past_threshold_becomes_drag() {
        let mut t = PointerTracker::new(6.0);
        t.feed(PointerSample::Down(Vec2::ZERO));
        assert_eq!(
            t.feed(PointerSample::Move(Vec2::new(10.0, 0.0))),
            PointerOutcome::Drag(Vec2::new(10.0, 0.0))
        );
        // Release after a drag must not count as a click.
        assert_eq!(
            t.feed(PointerSample::Up(Vec2::new(10.0, 0.0))),
            PointerOutcome::None
        );
    }

    #[test]
    fn test_small_jitter_stays_click() {
        let mut t = PointerTracker::new(6.0);
        t.feed(PointerSample::Down(Vec2::ZERO));
        for i in 0..5 {
            let out = t.feed(PointerSample::Move(Vec2::new(i as f32, 0.0)));
            assert_eq!(out, PointerOutcome::None);
        }
        assert!(matches!(
            t.feed(PointerSample::Up(Vec2::new(4.0, 0.0))),
            PointerOutcome::Click(_)
        ));
    }

    #[test]
    fn test_move_without_press_is_hover_only() {
        let mut t = PointerTracker::new(6.0);
        assert_eq!(
            t.feed(PointerSample::Move(Vec2::new(100.0, 100.0))),
            PointerOutcome::None
        );
        assert_eq!(t.position(), Vec2::new(100.0, 100.0));
    }
}
