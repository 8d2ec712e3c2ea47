//! Platform abstraction layer
//!
//! Browser-only DOM access: element lookup, form fields, alerts, and control
//! enable/disable. Everything the demo decides lives in `controller`; this
//! layer only reads and writes the page.

#[cfg(target_arch = "wasm32")]
pub mod dom;

#[cfg(target_arch = "wasm32")]
pub use dom::{Dom, MissingElement};
