//! WebGPU rendering module
//!
//! Draws the ball with a signed distance field in the fragment shader.

pub mod sdf_pipeline;

pub use sdf_pipeline::{BACKENDS, RenderError, SdfRenderState};
