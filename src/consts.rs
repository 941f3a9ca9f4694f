//! Compile-time configuration defaults for the game loop.
//!
//! These seed [`crate::config::Config::default`]. Change them here to retune a
//! downstream game without touching the host page.

// ── Mounting ────────────────────────────────────────────────────

/// DOM id of the `<canvas>` element the game draws into.
pub const CANVAS_ID: &str = "gamebox";

// ── Frame timing ────────────────────────────────────────────────

/// Target update/draw rate in frames per second.
pub const FRAME_RATE_TARGET: f64 = 60.0;

/// Milliseconds per second, the numerator of every interval and FPS figure.
pub const MS_PER_SECOND: f64 = 1000.0;

// ── Debug overlay ───────────────────────────────────────────────

/// Key that toggles the debug overlay (matched in either case). Empty disables it.
pub const DEBUG_KEY: &str = "U";

/// Whether the debug overlay is shown at startup.
pub const DEBUG_ENABLED: bool = false;

/// Debug overlay text size in pixels; also the line height.
pub const DEBUG_MENU_TEXT_SIZE: f64 = 12.0;

/// Debug overlay panel width in pixels.
pub const DEBUGGER_WIDTH: f64 = 300.0;

/// Font family for overlay text.
pub const DEBUG_FONT_FAMILY: &str = "Consolas";

/// Overlay panel fill.
pub const DEBUG_PANEL_FILL: &str = "rgba(0,0,0,0.5)";

/// Overlay text fill.
pub const DEBUG_TEXT_FILL: &str = "#fff";
