//! Runtime configuration.
//!
//! Defaults come from [`crate::consts`]. A host page may override any subset
//! by passing JSON to [`crate::host::start_with_config`]; missing fields keep
//! their defaults and unknown fields are rejected.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    CANVAS_ID, DEBUG_ENABLED, DEBUG_KEY, DEBUG_MENU_TEXT_SIZE, DEBUGGER_WIDTH, FRAME_RATE_TARGET, MS_PER_SECOND,
};
use crate::error::GameError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// DOM id of the target canvas.
    pub canvas_id: String,
    /// Key toggling the debug overlay; empty disables the toggle.
    pub debug_key: String,
    /// Whether the overlay starts visible.
    pub debug_enabled: bool,
    /// Target frames per second.
    pub frame_rate: f64,
    /// Overlay text size and line height in pixels.
    pub debug_text_size: f64,
    /// Overlay panel width in pixels.
    pub debug_panel_width: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_id: CANVAS_ID.to_owned(),
            debug_key: DEBUG_KEY.to_owned(),
            debug_enabled: DEBUG_ENABLED,
            frame_rate: FRAME_RATE_TARGET,
            debug_text_size: DEBUG_MENU_TEXT_SIZE,
            debug_panel_width: DEBUGGER_WIDTH,
        }
    }
}

impl Config {
    /// Parse a JSON override and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::ConfigParse`] for malformed JSON or unknown fields,
    /// and [`GameError::InvalidConfig`] if a numeric field is out of range.
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every numeric field is finite and strictly positive.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<(), GameError> {
        for (field, value) in [
            ("frame_rate", self.frame_rate),
            ("debug_text_size", self.debug_text_size),
            ("debug_panel_width", self.debug_panel_width),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(GameError::InvalidConfig { field, value });
            }
        }
        Ok(())
    }

    /// Milliseconds between ticks at the target frame rate.
    #[must_use]
    pub fn frame_interval_ms(&self) -> f64 {
        MS_PER_SECOND / self.frame_rate
    }
}
