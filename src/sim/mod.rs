//! Per-frame simulation module
//!
//! All ball motion lives here. This module must stay free of rendering and
//! platform dependencies:
//! - One tick per animation frame (velocity is a per-frame displacement)
//! - Elastic, axis-aligned reflection only
//! - No DOM access

pub mod bounds;
pub mod state;
pub mod tick;

pub use bounds::{Bounce, Bounds};
pub use state::SimState;
pub use tick::{FrameReport, tick};
