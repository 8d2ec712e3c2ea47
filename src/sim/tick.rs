//! Per-frame simulation tick
//!
//! Advances the ball by one frame and reflects it off the canvas edges.

use glam::Vec2;

use super::bounds::{Bounce, Bounds};
use super::state::SimState;
use crate::{format_number, js_round};

/// What happened during one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Position after the move
    pub pos: Vec2,
    /// Velocity after any reflection
    pub vel: Vec2,
    /// Axes that reflected this frame
    pub bounce: Bounce,
    /// Rounded position for the px/py fields
    pub display: (f32, f32),
}

impl FrameReport {
    /// Text for the px/py fields
    pub fn display_fields(&self) -> (String, String) {
        (format_number(self.display.0), format_number(self.display.1))
    }
}

/// Advance the state by one frame
///
/// The move happens first, then each axis whose new position is out of range
/// has its velocity flipped. The position is not pulled back inside, so a fast
/// ball can sit past the edge for a few frames while the flipped velocity
/// brings it back.
pub fn tick(state: &mut SimState, bounds: &Bounds) -> FrameReport {
    state.pos += state.vel;

    let bounce = bounds.reflect(state.pos, &mut state.vel);
    if bounce.any() {
        log::trace!(
            "Bounce x={} y={} at ({:.1}, {:.1})",
            bounce.x,
            bounce.y,
            state.pos.x,
            state.pos.y
        );
    }

    // Positions are never negative
    state.pos = state.pos.max(Vec2::ZERO);

    FrameReport {
        pos: state.pos,
        vel: state.vel,
        bounce,
        display: (js_round(state.pos.x), js_round(state.pos.y)),
    }
}
