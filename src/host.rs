//! Bridge between the browser and [`Engine`].
//!
//! ARCHITECTURE
//! ============
//! [`Runtime::mount`] finds the canvas, builds the engine, and attaches DOM
//! listeners that translate raw events into `EngineCore` calls. The frame loop
//! is a self-rescheduling `requestAnimationFrame` closure; it reschedules on
//! every callback whether or not a tick was due, and lives until the page is
//! torn down. Everything runs on the page's single thread; listeners borrow
//! the engine with `try_borrow_mut` and drop the event if it is busy.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, Event, HtmlCanvasElement, KeyboardEvent, MouseEvent, Window};

use crate::config::Config;
use crate::engine::Engine;
use crate::error::GameError;
use crate::input::{KeyDisposition, KeyEvent};

type FrameCallback = Closure<dyn FnMut(f64)>;

thread_local! {
    static RUNTIME: RefCell<Option<Runtime>> = const { RefCell::new(None) };
}

/// Start the game on the default `#gamebox` canvas with compile-time config.
///
/// Idempotent: once a call succeeds, later calls do nothing.
///
/// # Errors
///
/// Fails if the window, document, canvas, or 2D context is unavailable.
#[wasm_bindgen(js_name = requestStart)]
pub fn start() -> Result<(), JsValue> {
    start_installed(Config::default())
}

/// Start the game with a JSON override of [`Config`].
///
/// # Errors
///
/// Fails on invalid config JSON, or as [`start`] does.
#[wasm_bindgen(js_name = requestStartWithConfig)]
pub fn start_with_config(json: &str) -> Result<(), JsValue> {
    start_installed(Config::from_json(json)?)
}

fn start_installed(config: Config) -> Result<(), JsValue> {
    if RUNTIME.with_borrow(Option::is_some) {
        log::debug!("game already started");
        return Ok(());
    }
    init_logging();
    let runtime = Runtime::mount(config)?;
    runtime.start()?;
    RUNTIME.set(Some(runtime));
    Ok(())
}

fn init_logging() {
    console_error_panic_hook::set_once();
    // A second init fails only because a logger is already installed.
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("logger already initialised");
    }
}

/// A mounted game: the engine plus the DOM listeners feeding it.
///
/// Dropping a `Runtime` detaches its listeners. A frame loop that already
/// started keeps running on its own `Rc` of the engine.
pub struct Runtime {
    engine: Rc<RefCell<Engine>>,
    window: Window,
    _listeners: Listeners,
}

/// DOM callbacks owned for as long as they are registered. Dropping this
/// removes them from `document` and `window` before the closures are freed.
struct Listeners {
    document: Document,
    window: Window,
    key_down: Closure<dyn FnMut(KeyboardEvent)>,
    key_up: Closure<dyn FnMut(KeyboardEvent)>,
    mouse_move: Closure<dyn FnMut(MouseEvent)>,
    mouse_down: Closure<dyn FnMut(MouseEvent)>,
    mouse_up: Closure<dyn FnMut(MouseEvent)>,
    resize: Closure<dyn FnMut(Event)>,
}

impl Runtime {
    /// Find `#{config.canvas_id}`, build the engine, and attach listeners.
    /// The frame loop is not running until [`Runtime::start`].
    ///
    /// # Errors
    ///
    /// Fails if the config is invalid, the DOM pieces are missing, or a
    /// listener cannot be attached.
    pub fn mount(config: Config) -> Result<Self, GameError> {
        let window = web_sys::window().ok_or(GameError::NoWindow)?;
        let document = window.document().ok_or(GameError::NoDocument)?;
        let (canvas, ctx) = canvas_and_context(&document, &config.canvas_id)?;
        let engine = Rc::new(RefCell::new(Engine::new(canvas, ctx, config)?));
        let listeners = Listeners::new(&engine, &document, &window);
        listeners.attach()?;
        Ok(Self { engine, window, _listeners: listeners })
    }

    /// Start the frame driver and schedule the first animation frame.
    /// Starting a running game is a no-op.
    ///
    /// # Errors
    ///
    /// Fails if the engine is borrowed elsewhere or `requestAnimationFrame`
    /// throws.
    pub fn start(&self) -> Result<(), GameError> {
        let now = now_ms(&self.window).unwrap_or_default();
        let started = self
            .engine
            .try_borrow_mut()
            .map_err(|_| GameError::EngineBusy)?
            .core
            .start(now);
        if started {
            run_frame_loop(Rc::clone(&self.engine), self.window.clone())?;
        }
        Ok(())
    }

    /// Shared handle to the engine, for games that extend update/draw.
    #[must_use]
    pub fn engine(&self) -> Rc<RefCell<Engine>> {
        Rc::clone(&self.engine)
    }
}

impl Listeners {
    fn new(engine: &Rc<RefCell<Engine>>, document: &Document, window: &Window) -> Self {
        Self {
            document: document.clone(),
            window: window.clone(),
            key_down: key_listener(engine, document, true),
            key_up: key_listener(engine, document, false),
            mouse_move: {
                let engine = Rc::clone(engine);
                Closure::wrap(Box::new(move |ev: MouseEvent| {
                    if let Ok(mut engine) = engine.try_borrow_mut() {
                        let bounds = engine.canvas().get_bounding_client_rect();
                        engine.core.on_mouse_move(
                            f64::from(ev.client_x()),
                            f64::from(ev.client_y()),
                            bounds.left(),
                            bounds.top(),
                        );
                    }
                }) as Box<dyn FnMut(MouseEvent)>)
            },
            mouse_down: {
                let engine = Rc::clone(engine);
                Closure::wrap(Box::new(move |_ev: MouseEvent| {
                    if let Ok(mut engine) = engine.try_borrow_mut() {
                        engine.core.on_mouse_down();
                    }
                }) as Box<dyn FnMut(MouseEvent)>)
            },
            mouse_up: {
                let engine = Rc::clone(engine);
                Closure::wrap(Box::new(move |_ev: MouseEvent| {
                    if let Ok(mut engine) = engine.try_borrow_mut() {
                        engine.core.on_mouse_up();
                    }
                }) as Box<dyn FnMut(MouseEvent)>)
            },
            resize: {
                let engine = Rc::clone(engine);
                Closure::wrap(Box::new(move |_ev: Event| {
                    if let Ok(mut engine) = engine.try_borrow_mut() {
                        engine.sync_viewport();
                    }
                }) as Box<dyn FnMut(Event)>)
            },
        }
    }

    fn document_callbacks(&self) -> [(&'static str, &JsValue); 5] {
        [
            ("keydown", self.key_down.as_ref()),
            ("keyup", self.key_up.as_ref()),
            ("mousemove", self.mouse_move.as_ref()),
            ("mousedown", self.mouse_down.as_ref()),
            ("mouseup", self.mouse_up.as_ref()),
        ]
    }

    fn attach(&self) -> Result<(), GameError> {
        for (event, callback) in self.document_callbacks() {
            self.document
                .add_event_listener_with_callback(event, as_function(callback))
                .map_err(|e| GameError::js(&e))?;
        }
        self.window
            .add_event_listener_with_callback("resize", as_function(self.resize.as_ref()))
            .map_err(|e| GameError::js(&e))
    }
}

impl Drop for Listeners {
    // Removing a listener that was never added is a no-op in the DOM, so a
    // partially attached set is cleaned up too.
    fn drop(&mut self) {
        for (event, callback) in self.document_callbacks() {
            if let Err(err) = self.document.remove_event_listener_with_callback(event, as_function(callback)) {
                log::warn!("failed to detach {event} listener: {err:?}");
            }
        }
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("resize", as_function(self.resize.as_ref()))
        {
            log::warn!("failed to detach resize listener: {err:?}");
        }
    }
}

fn key_listener(engine: &Rc<RefCell<Engine>>, document: &Document, press: bool) -> Closure<dyn FnMut(KeyboardEvent)> {
    let engine = Rc::clone(engine);
    let document = document.clone();
    Closure::wrap(Box::new(move |ev: KeyboardEvent| {
        let key = ev.key();
        let event = KeyEvent { key: &key, press, repeat: ev.repeat(), text_input_focused: text_input_focused(&document) };
        let disposition = match engine.try_borrow_mut() {
            Ok(mut engine) => engine.core.on_key(event),
            Err(_) => return,
        };
        if disposition == KeyDisposition::Consumed {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(KeyboardEvent)>)
}

/// Whether the focused element is an `<input>`.
fn text_input_focused(document: &Document) -> bool {
    document
        .active_element()
        .is_some_and(|el| el.tag_name().eq_ignore_ascii_case("input"))
}

fn canvas_and_context(document: &Document, id: &str) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), GameError> {
    let canvas = document
        .get_element_by_id(id)
        .ok_or_else(|| GameError::CanvasNotFound(id.to_owned()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| GameError::NotACanvas(id.to_owned()))?;
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| GameError::js(&e))?
        .ok_or(GameError::NoContext)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| GameError::NoContext)?;
    Ok((canvas, ctx))
}

fn as_function(closure: &JsValue) -> &js_sys::Function {
    closure.unchecked_ref()
}

fn now_ms(window: &Window) -> Option<f64> {
    window.performance().map(|p| p.now())
}

/// Drive `engine` from `requestAnimationFrame` for the rest of the page's life.
///
/// The closure holds its own slot so it can reschedule itself; the resulting
/// `Rc` cycle is what keeps the loop alive.
fn run_frame_loop(engine: Rc<RefCell<Engine>>, window: Window) -> Result<(), GameError> {
    let holder: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let window_for_cb = window.clone();
    let cb = Closure::wrap(Box::new(move |timestamp: f64| {
        let now = now_ms(&window_for_cb).unwrap_or(timestamp);
        if let Ok(mut engine) = engine.try_borrow_mut() {
            if let Err(err) = engine.frame(now) {
                log::warn!("frame draw failed: {err:?}");
            }
        }
        if let Some(cb) = holder_for_cb.borrow().as_ref() {
            if let Err(err) = window_for_cb.request_animation_frame(as_function(cb.as_ref())) {
                log::error!("requestAnimationFrame failed, loop stopped: {err:?}");
            }
        }
    }) as Box<dyn FnMut(f64)>);

    window
        .request_animation_frame(as_function(cb.as_ref()))
        .map_err(|e| GameError::js(&e))?;
    *holder.borrow_mut() = Some(cb);
    Ok(())
}
