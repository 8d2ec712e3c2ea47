//! Canvas bounds and edge reflection
//!
//! The ball center may roam `[radius, dimension - radius]` on each axis.
//! Leaving that range while still heading outward flips the matching velocity
//! component. A ball already heading back in is left alone so it cannot get
//! stuck flipping back and forth past an edge.

use glam::Vec2;

/// Which axes reflected during a frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounce {
    pub x: bool,
    pub y: bool,
}

impl Bounce {
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// Rectangle the ball center can occupy without reflecting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    /// Bounds for a ball of `radius` on a `width` x `height` canvas
    pub fn for_canvas(width: u32, height: u32, radius: f32) -> Self {
        Self {
            min: Vec2::splat(radius),
            max: Vec2::new(width as f32 - radius, height as f32 - radius),
        }
    }

    /// True if `pos` is outside the range on the x axis (strict comparison)
    #[inline]
    pub fn outside_x(&self, pos: Vec2) -> bool {
        pos.x < self.min.x || pos.x > self.max.x
    }

    /// True if `pos` is outside the range on the y axis (strict comparison)
    #[inline]
    pub fn outside_y(&self, pos: Vec2) -> bool {
        pos.y < self.min.y || pos.y > self.max.y
    }

    /// Flip velocity components whose axis is out of range and heading outward
    pub fn reflect(&self, pos: Vec2, vel: &mut Vec2) -> Bounce {
        let bounce = Bounce {
            x: (pos.x < self.min.x && vel.x < 0.0) || (pos.x > self.max.x && vel.x > 0.0),
            y: (pos.y < self.min.y && vel.y < 0.0) || (pos.y > self.max.y && vel.y > 0.0),
        };
        if bounce.x {
            vel.x = -vel.x;
        }
        if bounce.y {
            vel.y = -vel.y;
        }
        bounce
    }
}
