//! Ball state
//!
//! Everything the animation loop mutates: position, velocity and the running
//! flag. Nothing here outlives the page.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_POSITION;

/// Position, velocity and running flag of the demo ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimState {
    /// Ball center in canvas pixels, never negative
    pub pos: Vec2,
    /// Displacement applied every frame
    pub vel: Vec2,
    /// True while the animation loop is active
    pub running: bool,
}

impl Default for SimState {
    fn default() -> Self {
        Self::new(DEFAULT_POSITION)
    }
}

impl SimState {
    /// Resting state with the ball at `(default_position, default_position)`
    pub fn new(default_position: f32) -> Self {
        Self {
            pos: Vec2::splat(default_position),
            vel: Vec2::ZERO,
            running: false,
        }
    }

    /// Set one position component, clamping at zero
    pub fn set_position_axis(&mut self, axis: crate::form::Axis, value: f32) {
        let value = value.max(0.0);
        match axis {
            crate::form::Axis::X => self.pos.x = value,
            crate::form::Axis::Y => self.pos.y = value,
        }
    }

    /// Start the loop. Returns false if it was already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        true
    }

    /// Stop the loop. Returns false if it was not running.
    pub fn stop(&mut self) -> bool {
        std::mem::replace(&mut self.running, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Axis;

    #[test]
    fn test_default_state() {
        let state = SimState::default();
        assert_eq!(state.pos, Vec2::new(100.0, 100.0));
        assert_eq!(state.vel, Vec2::ZERO);
        assert!(!state.running);
    }

    #[test]
    fn test_start_stop_flags() {
        let mut state = SimState::default();
        assert!(state.start());
        assert!(!state.start(), "second start is a no-op");
        assert!(state.stop());
        assert!(!state.stop(), "second stop is a no-op");
    }

    #[test]
    fn test_set_position_axis_clamps() {
        let mut state = SimState::default();
        state.set_position_axis(Axis::X, -5.0);
        state.set_position_axis(Axis::Y, 42.0);
        assert_eq!(state.pos, Vec2::new(0.0, 42.0));
    }
}
