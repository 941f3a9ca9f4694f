//! Rendering: draws a frame to the 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It reads engine state and produces pixels; it never mutates game state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The caller ([`crate::engine::Engine::frame`]) hands the result to the host.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{DEBUG_FONT_FAMILY, DEBUG_PANEL_FILL, DEBUG_TEXT_FILL};
use crate::engine::EngineCore;
use crate::overlay::OverlayLayout;

/// Draw one frame: clear the canvas, then game content, then the debug
/// overlay when enabled.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw(ctx: &CanvasRenderingContext2d, core: &EngineCore) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, core.viewport_width, core.viewport_height);

    // Game drawing goes here.

    if core.debug {
        log::trace!("drawing debug overlay");
        let layout = OverlayLayout::new(
            &core.debug_entries(),
            core.config.debug_text_size,
            core.config.debug_panel_width,
            DEBUG_FONT_FAMILY,
        );
        draw_overlay(ctx, &layout)?;
    }
    Ok(())
}

/// Draw the diagnostics panel. Context state is saved and restored around it.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw_overlay(ctx: &CanvasRenderingContext2d, layout: &OverlayLayout) -> Result<(), JsValue> {
    ctx.save();
    ctx.set_shadow_blur(0.0);
    ctx.set_fill_style_str(DEBUG_PANEL_FILL);
    ctx.fill_rect(layout.panel.x, layout.panel.y, layout.panel.width, layout.panel.height);
    ctx.set_fill_style_str(DEBUG_TEXT_FILL);
    ctx.set_font(&layout.font);
    let result = layout
        .lines
        .iter()
        .try_for_each(|line| ctx.fill_text_with_max_width(&line.text, line.x, line.y, line.max_width));
    ctx.restore();
    result
}
