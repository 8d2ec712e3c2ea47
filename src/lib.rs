//! Bounce Form - a form-driven bouncing ball demo
//!
//! Core modules:
//! - `sim`: Per-frame simulation (position, velocity, edge reflection)
//! - `form`: Form field parsing and submit validation
//! - `input`: Keyboard velocity nudges
//! - `layout`: Canvas sizing breakpoints
//! - `controller`: The state object owned by the page, tying the above together
//! - `settings`: Data-driven demo configuration
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Browser DOM glue (wasm only)

pub mod controller;
pub mod form;
pub mod input;
pub mod layout;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use controller::{BounceDemo, Started};
pub use form::{Axis, FieldId, FormError, FormValues, PositionReset};
pub use settings::{Settings, SettingsError};

/// Demo configuration constants
pub mod consts {
    /// Ball radius in canvas pixels
    pub const BALL_RADIUS: f32 = 20.0;
    /// Position a field falls back to after invalid input
    pub const DEFAULT_POSITION: f32 = 100.0;
    /// Velocity change per arrow-key press
    pub const VELOCITY_STEP: f32 = 1.0;

    /// Canvas dimensions
    pub const CANVAS_WIDTH: u32 = 280;
    pub const CANVAS_HEIGHT: u32 = 280;
    /// Canvas height on very narrow viewports
    pub const CANVAS_HEIGHT_COMPACT: u32 = 198;

    /// Viewports at or under this width (CSS pixels) get the compact canvas
    pub const BREAKPOINT_PHONE: f64 = 440.0;
}

/// Round the way the browser's `Math.round` does: halves go toward +infinity.
#[inline]
pub fn js_round(value: f32) -> f32 {
    (value + 0.5).floor()
}

/// Format a number the way a number input displays it (`5` rather than `5.0`).
pub fn format_number(value: f32) -> String {
    if value == 0.0 {
        // Avoid "-0"
        return "0".to_string();
    }
    format!("{}", value)
}
