//! Demo settings
//!
//! Read once at startup from an optional `<script type="application/json"
//! id="bounce-config">` element. Never written back.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Why settings could not be used
#[derive(Debug)]
pub enum SettingsError {
    /// Malformed JSON
    Json(serde_json::Error),
    /// Colour string that is not `#rrggbb`
    Color(String),
    /// Numeric setting out of range
    Invalid(&'static str),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Json(err) => write!(f, "Settings JSON error: {}", err),
            SettingsError::Color(value) => write!(f, "Invalid colour: {:?}", value),
            SettingsError::Invalid(what) => write!(f, "Invalid setting: {}", what),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::Json(err)
    }
}

/// Demo settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Ball radius in canvas pixels (also the bounce inset)
    pub ball_radius: f32,
    /// Ball fill, `#rrggbb`
    pub ball_color: String,
    /// Canvas clear colour, `#rrggbb`
    pub background_color: String,
    /// Position a field falls back to after negative input
    pub default_position: f32,
    /// Velocity change per arrow-key press
    pub velocity_step: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ball_radius: BALL_RADIUS,
            ball_color: "#007bff".to_string(),
            background_color: "#ffffff".to_string(),
            default_position: DEFAULT_POSITION,
            velocity_step: VELOCITY_STEP,
        }
    }
}

impl Settings {
    /// DOM id of the optional config element
    pub const CONFIG_ELEMENT_ID: &'static str = "bounce-config";

    /// Parse and validate settings from JSON; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check ranges and colour strings
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.ball_radius.is_finite() && self.ball_radius > 0.0) {
            return Err(SettingsError::Invalid("ball_radius must be positive"));
        }
        if !(self.default_position.is_finite() && self.default_position >= 0.0) {
            return Err(SettingsError::Invalid(
                "default_position must not be negative",
            ));
        }
        if !self.velocity_step.is_finite() {
            return Err(SettingsError::Invalid("velocity_step must be finite"));
        }
        parse_hex_color(&self.ball_color)?;
        parse_hex_color(&self.background_color)?;
        Ok(())
    }

    /// Ball colour as linear RGBA
    pub fn ball_rgba(&self) -> [f32; 4] {
        parse_hex_color(&self.ball_color).unwrap_or([0.0, 0.0, 0.0, 1.0])
    }

    /// Background colour as linear RGBA
    pub fn background_rgba(&self) -> [f32; 4] {
        parse_hex_color(&self.background_color).unwrap_or([1.0, 1.0, 1.0, 1.0])
    }

    /// Load settings from the page's config element (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        if let Some(json) = json {
            match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from #{}", Self::CONFIG_ELEMENT_ID);
                    return settings;
                }
                Err(e) => log::warn!("Ignoring #{}: {}", Self::CONFIG_ELEMENT_ID, e),
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

/// Parse `#rrggbb` into linear RGBA for an sRGB render target
pub fn parse_hex_color(value: &str) -> Result<[f32; 4], SettingsError> {
    let hex = value
        .strip_prefix('#')
        .filter(|h| h.len() == 6 && h.is_ascii())
        .ok_or_else(|| SettingsError::Color(value.to_string()))?;

    let mut rgba = [0.0, 0.0, 0.0, 1.0];
    for (i, channel) in rgba.iter_mut().take(3).enumerate() {
        let byte = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
            .map_err(|_| SettingsError::Color(value.to_string()))?;
        *channel = srgb_to_linear(byte as f32 / 255.0);
    }
    Ok(rgba)
}

/// sRGB transfer function inverse
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
