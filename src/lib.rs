//! Canvas game-loop scaffold for the browser.
//!
//! This crate is compiled to WebAssembly and drives a `<canvas>` game: a
//! fixed-rate update/draw loop on `requestAnimationFrame`, keyboard and mouse
//! capture, and a toggleable debug overlay. It is a template; games extend
//! [`engine::EngineCore::update`] and [`render::draw`].
//!
//! The host page calls `requestStart()` once the module is loaded.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`host`] | DOM bridge: listeners, frame loop, exported start functions |
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`timer`] | Frame driver with drift-corrected throttling |
//! | [`input`] | Key mapping and held/tapped/mouse input state |
//! | [`state`] | Top-level [`state::GameState`] |
//! | [`overlay`] | Debug overlay layout |
//! | [`render`] | Canvas drawing |
//! | [`math`] | Clamp, lerp, and overlap tests |
//! | [`config`] | Runtime [`config::Config`] and JSON overrides |
//! | [`consts`] | Compile-time defaults |
//! | [`error`] | [`error::GameError`] |

pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod host;
pub mod input;
pub mod math;
pub mod overlay;
pub mod render;
pub mod state;
pub mod timer;

pub use host::{start, start_with_config};
