//! Error taxonomy for mounting and running the game loop.

use wasm_bindgen::JsValue;

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Config JSON could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// A numeric config field was zero, negative, or not finite.
    #[error("invalid config: `{field}` must be a positive number, got {value}")]
    InvalidConfig { field: &'static str, value: f64 },

    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("canvas element not found: #{0}")]
    CanvasNotFound(String),

    #[error("element #{0} is not a canvas")]
    NotACanvas(String),

    #[error("2d context unavailable")]
    NoContext,

    /// The engine was mutably borrowed when the loop tried to start.
    #[error("engine is busy; start skipped")]
    EngineBusy,

    /// A browser API threw; carries the debug rendering of the JS exception.
    #[error("browser call failed: {0}")]
    Js(String),
}

impl GameError {
    /// Wrap a thrown JS value.
    #[must_use]
    pub fn js(value: &JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
