//! Canvas sizing
//!
//! The canvas has a fixed pixel size picked from the viewport width.

use crate::consts::*;

/// Canvas size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub const FULL: CanvasSize = CanvasSize {
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
    };

    pub const COMPACT: CanvasSize = CanvasSize {
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT_COMPACT,
    };
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::FULL
    }
}

/// Pick the canvas size for a viewport `inner_width` (CSS pixels)
///
/// Phones at or under 440px get a shorter canvas; everything wider, tablets
/// included, keeps the full square.
pub fn canvas_size(inner_width: f64) -> CanvasSize {
    if inner_width <= BREAKPOINT_PHONE {
        CanvasSize::COMPACT
    } else {
        CanvasSize::FULL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoints() {
        assert_eq!(canvas_size(320.0), CanvasSize::COMPACT);
        assert_eq!(canvas_size(440.0), CanvasSize::COMPACT);
        assert_eq!(canvas_size(441.0), CanvasSize::FULL);
        assert_eq!(canvas_size(600.0), CanvasSize::FULL);
        assert_eq!(canvas_size(601.0), CanvasSize::FULL);
        assert_eq!(canvas_size(1920.0), CanvasSize::FULL);
    }

    #[test]
    fn test_compact_keeps_width() {
        assert_eq!(CanvasSize::COMPACT.width, CanvasSize::FULL.width);
        assert_eq!(CanvasSize::COMPACT.height, 198);
    }
}
