//! Top-level game state.
//!
//! Add variants (menus, pause, loading) here; every `match` on [`GameState`]
//! must then decide what the new state does each tick.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// Normal play: update and draw run every tick.
    #[default]
    Playing,
}

impl GameState {
    /// Whether update/draw run during this state.
    #[must_use]
    pub fn runs_frame(self) -> bool {
        match self {
            Self::Playing => true,
        }
    }
}
