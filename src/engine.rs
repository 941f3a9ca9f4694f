use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::Config;
use crate::error::GameError;
use crate::input::{InputState, KeyAction, KeyDisposition, KeyEvent, map_key};
use crate::overlay::DebugEntry;
use crate::render;
use crate::state::GameState;
use crate::timer::FrameTimer;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Result of offering one animation frame to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Less than one interval since the last tick; nothing ran.
    Waiting,
    /// A tick completed and tapped flags were cleared.
    Ticked,
}

/// Game loop state: config, input, frame timer, game state and debug flag.
///
/// Holds no browser handles, so the loop can be driven from native tests with
/// simulated clock readings.
pub struct EngineCore {
    pub config: Config,
    pub input: InputState,
    pub timer: FrameTimer,
    pub state: GameState,
    pub debug: bool,
    pub viewport_width: f64,
    pub viewport_height: f64,
    /// Completed update steps since start.
    pub ticks: u64,
}

impl EngineCore {
    /// Build a stopped engine from a validated `config`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfig`] if a numeric field is out of range;
    /// a non-positive frame rate would otherwise tick every frame or never.
    pub fn new(config: Config) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self {
            timer: FrameTimer::new(config.frame_rate),
            debug: config.debug_enabled,
            config,
            input: InputState::new(),
            state: GameState::default(),
            viewport_width: 0.0,
            viewport_height: 0.0,
            ticks: 0,
        })
    }

    // --- Lifecycle ---

    /// Start the frame driver. Returns `true` if this call started it.
    pub fn start(&mut self, now_ms: f64) -> bool {
        let started = self.timer.start(now_ms);
        if started {
            log::info!(
                "game loop started: target {} fps, interval {:.3} ms",
                self.config.frame_rate,
                self.config.frame_interval_ms()
            );
        } else {
            log::debug!("start requested while running; ignored");
        }
        started
    }

    /// Offer one animation frame. When a tick is due and the state allows it,
    /// runs [`Self::update`] then `draw`; tapped flags are cleared afterwards
    /// whether or not `draw` succeeded.
    ///
    /// # Errors
    ///
    /// Returns whatever `draw` returned.
    pub fn step<E>(
        &mut self,
        now_ms: f64,
        draw: impl FnOnce(&EngineCore) -> Result<(), E>,
    ) -> Result<FrameOutcome, E> {
        if !self.timer.poll(now_ms) {
            return Ok(FrameOutcome::Waiting);
        }
        let result = if self.state.runs_frame() {
            self.update();
            draw(&*self)
        } else {
            Ok(())
        };
        self.input.clear_taps();
        result.map(|()| FrameOutcome::Ticked)
    }

    /// Advance game logic by one tick.
    pub fn update(&mut self) {
        self.ticks += 1;
    }

    // --- Input ---

    /// Handle a key-down or key-up.
    ///
    /// Returns [`KeyDisposition::PassThrough`] while a text input has focus;
    /// every other key, mapped or not, is consumed. Auto-repeats only refresh
    /// held flags, so taps and the debug toggle fire once per press.
    pub fn on_key(&mut self, event: KeyEvent<'_>) -> KeyDisposition {
        if event.text_input_focused {
            return KeyDisposition::PassThrough;
        }
        let repeat = event.press && event.repeat;
        match map_key(event.key, &self.config.debug_key) {
            Some(KeyAction::ToggleDebug) => {
                if event.press && !repeat {
                    self.debug = !self.debug;
                    log::debug!("debug overlay {}", if self.debug { "on" } else { "off" });
                }
            }
            Some(action) if repeat => self.input.hold_key(action),
            Some(action) => self.input.apply_key(action, event.press),
            None => {}
        }
        KeyDisposition::Consumed
    }

    pub fn on_mouse_move(&mut self, client_x: f64, client_y: f64, bounds_left: f64, bounds_top: f64) {
        self.input.on_mouse_move(client_x, client_y, bounds_left, bounds_top);
    }

    pub fn on_mouse_down(&mut self) {
        self.input.on_mouse_down();
    }

    pub fn on_mouse_up(&mut self) {
        self.input.on_mouse_up();
    }

    // --- Viewport ---

    /// Record the canvas size in pixels.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    // --- Queries ---

    /// Diagnostics shown in the debug overlay, in display order.
    #[must_use]
    pub fn debug_entries(&self) -> Vec<DebugEntry> {
        let fps = self.timer.fps().map_or_else(|| "-".to_owned(), |fps| fps.to_string());
        let mouse = self.input.mouse;
        vec![
            DebugEntry::new("FPS", fps),
            DebugEntry::new("Mouse Position", format!("{}, {}", mouse.x, mouse.y)),
        ]
    }
}

/// The full game engine. Wraps `EngineCore` and owns the canvas and its 2D context.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore,
}

impl Engine {
    /// Create an engine drawing to `canvas` through `ctx`. Image smoothing is
    /// disabled for crisp pixel art.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfig`] as [`EngineCore::new`] does.
    pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d, config: Config) -> Result<Self, GameError> {
        let mut core = EngineCore::new(config)?;
        ctx.set_image_smoothing_enabled(false);
        core.set_viewport(f64::from(canvas.width()), f64::from(canvas.height()));
        Ok(Self { canvas, ctx, core })
    }

    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Re-read the canvas size after a window resize.
    pub fn sync_viewport(&mut self) {
        self.core.set_viewport(f64::from(self.canvas.width()), f64::from(self.canvas.height()));
    }

    /// Run one animation frame: tick and draw if due.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a `Canvas2D` call failed while drawing.
    pub fn frame(&mut self, now_ms: f64) -> Result<FrameOutcome, JsValue> {
        let ctx = &self.ctx;
        self.core.step(now_ms, |core| render::draw(ctx, core))
    }
}
