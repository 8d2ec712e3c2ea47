//! Keyboard velocity control
//!
//! Arrow keys nudge the ball's velocity while the animation runs.

use glam::Vec2;

/// A velocity change requested from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nudge {
    Up,
    Down,
    Left,
    Right,
}

impl Nudge {
    /// Map a `KeyboardEvent.key` value to a nudge
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Nudge::Up),
            "ArrowDown" => Some(Nudge::Down),
            "ArrowLeft" => Some(Nudge::Left),
            "ArrowRight" => Some(Nudge::Right),
            _ => None,
        }
    }

    /// Unit direction in canvas space (y grows downward)
    pub fn direction(&self) -> Vec2 {
        match self {
            Nudge::Up => Vec2::NEG_Y,
            Nudge::Down => Vec2::Y,
            Nudge::Left => Vec2::NEG_X,
            Nudge::Right => Vec2::X,
        }
    }

    /// Apply to a velocity with the given step
    pub fn apply(&self, vel: Vec2, step: f32) -> Vec2 {
        vel + self.direction() * step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key() {
        assert_eq!(Nudge::from_key("ArrowUp"), Some(Nudge::Up));
        assert_eq!(Nudge::from_key("ArrowRight"), Some(Nudge::Right));
        assert_eq!(Nudge::from_key("w"), None);
        assert_eq!(Nudge::from_key(" "), None);
    }

    #[test]
    fn test_apply() {
        let vel = Vec2::new(5.0, 0.0);
        assert_eq!(Nudge::Up.apply(vel, 1.0), Vec2::new(5.0, -1.0));
        assert_eq!(Nudge::Down.apply(vel, 1.0), Vec2::new(5.0, 1.0));
        assert_eq!(Nudge::Left.apply(vel, 2.0), Vec2::new(3.0, 0.0));
        assert_eq!(Nudge::Right.apply(vel, 1.0), Vec2::new(6.0, 0.0));
    }
}
