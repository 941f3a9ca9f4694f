//! Input model: key mapping, held/tapped flags, and mouse state.
//!
//! `InputState` is mutated only by the discrete handlers below, which the DOM
//! bridge in [`crate::host`] calls from its event listeners. Tapped flags are
//! cleared by the engine once per completed tick, so a tap is visible to
//! exactly one tick.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// Game action a keyboard key is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Left,
    Right,
    Up,
    Down,
    /// Space bar; tap-only, there is no held flag.
    Space,
    /// Toggle the debug overlay (press only).
    ToggleDebug,
}

/// Map a `KeyboardEvent.key` string to its action.
///
/// Movement keys win over the debug key. The debug key matches in either
/// case; an empty `debug_key` disables it.
#[must_use]
pub fn map_key(key: &str, debug_key: &str) -> Option<KeyAction> {
    match key {
        "ArrowLeft" | "A" | "a" => Some(KeyAction::Left),
        "ArrowRight" | "D" | "d" => Some(KeyAction::Right),
        "ArrowUp" | "W" | "w" => Some(KeyAction::Up),
        "ArrowDown" | "S" | "s" => Some(KeyAction::Down),
        " " => Some(KeyAction::Space),
        _ if !debug_key.is_empty() && key.eq_ignore_ascii_case(debug_key) => Some(KeyAction::ToggleDebug),
        _ => None,
    }
}

/// A keyboard event as seen by the engine.
#[derive(Debug, Clone, Copy)]
pub struct KeyEvent<'a> {
    /// The browser's `KeyboardEvent.key`.
    pub key: &'a str,
    /// `true` for key-down, `false` for key-up.
    pub press: bool,
    /// Auto-repeat key-down while the key is held.
    pub repeat: bool,
    /// The focused element is a text input.
    pub text_input_focused: bool,
}

/// What the host should do with the DOM event after the engine saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// Leave the event alone; a text field owns the keyboard.
    PassThrough,
    /// The game owns the event; call `preventDefault`.
    Consumed,
}

/// Integer cursor position relative to the canvas' top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MousePos {
    pub x: i32,
    pub y: i32,
}

/// Held and tapped input flags plus the mouse.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub left_down: bool,
    pub right_down: bool,
    pub up_down: bool,
    pub down_down: bool,
    /// Any mouse button is held.
    pub click_down: bool,
    pub left_tapped: bool,
    pub right_tapped: bool,
    pub space_tapped: bool,
    pub mouse: MousePos,
}

impl InputState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a mapped key transition. [`KeyAction::ToggleDebug`] is owned by
    /// the engine and ignored here.
    pub fn apply_key(&mut self, action: KeyAction, press: bool) {
        match action {
            KeyAction::Left => {
                self.left_down = press;
                self.left_tapped = press;
            }
            KeyAction::Right => {
                self.right_down = press;
                self.right_tapped = press;
            }
            KeyAction::Up => self.up_down = press,
            KeyAction::Down => self.down_down = press,
            KeyAction::Space => self.space_tapped = press,
            KeyAction::ToggleDebug => {}
        }
    }

    /// Refresh the held flag for an auto-repeating key-down. Tapped flags are
    /// left alone; space has no held flag.
    pub fn hold_key(&mut self, action: KeyAction) {
        match action {
            KeyAction::Left => self.left_down = true,
            KeyAction::Right => self.right_down = true,
            KeyAction::Up => self.up_down = true,
            KeyAction::Down => self.down_down = true,
            KeyAction::Space | KeyAction::ToggleDebug => {}
        }
    }

    /// Record a cursor move. `client_*` and `bounds_*` are CSS pixels; the
    /// bounds are the canvas' current `getBoundingClientRect` origin.
    #[allow(clippy::cast_possible_truncation)]
    pub fn on_mouse_move(&mut self, client_x: f64, client_y: f64, bounds_left: f64, bounds_top: f64) {
        self.mouse = MousePos {
            x: (client_x - bounds_left).trunc() as i32,
            y: (client_y - bounds_top).trunc() as i32,
        };
    }

    pub fn on_mouse_down(&mut self) {
        self.click_down = true;
    }

    pub fn on_mouse_up(&mut self) {
        self.click_down = false;
    }

    /// End-of-tick reset. Held flags are untouched.
    pub fn clear_taps(&mut self) {
        self.left_tapped = false;
        self.right_tapped = false;
        self.space_tapped = false;
    }

    /// Whether any tap is pending for the next tick.
    #[must_use]
    pub fn any_tapped(&self) -> bool {
        self.left_tapped || self.right_tapped || self.space_tapped
    }
}
