//! Frame driver: throttles animation-frame callbacks to a target tick rate.
//!
//! The host calls [`FrameTimer::poll`] from every `requestAnimationFrame`
//! callback and reschedules unconditionally. A tick is due once at least one
//! interval has passed since the last tick boundary. The baseline then moves
//! to the most recent ideal boundary (`now - elapsed % interval`) instead of
//! `now`, so ticks stay aligned to the interval grid and slippage does not
//! accumulate.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use crate::consts::MS_PER_SECOND;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum DriverState {
    #[default]
    Stopped,
    Running,
}

#[derive(Debug, Clone)]
pub struct FrameTimer {
    state: DriverState,
    frame_rate: f64,
    interval_ms: f64,
    then_ms: f64,
    elapsed_ms: f64,
}

impl FrameTimer {
    /// A stopped timer targeting `frame_rate` ticks per second. The rate must
    /// be positive; [`crate::engine::EngineCore::new`] validates it.
    #[must_use]
    pub(crate) fn new(frame_rate: f64) -> Self {
        Self {
            state: DriverState::Stopped,
            frame_rate,
            interval_ms: MS_PER_SECOND / frame_rate,
            then_ms: 0.0,
            elapsed_ms: 0.0,
        }
    }

    /// Move from `Stopped` to `Running` with `now_ms` as the first baseline.
    ///
    /// Returns `true` on the transition, meaning the caller must schedule the
    /// first callback. A start while already running is a no-op returning `false`.
    pub fn start(&mut self, now_ms: f64) -> bool {
        if self.state == DriverState::Running {
            return false;
        }
        self.interval_ms = MS_PER_SECOND / self.frame_rate;
        self.then_ms = now_ms;
        self.elapsed_ms = 0.0;
        self.state = DriverState::Running;
        true
    }

    /// Sample the clock. Returns `true` when a tick is due this frame.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        if self.state == DriverState::Stopped {
            return false;
        }
        self.elapsed_ms = now_ms - self.then_ms;
        if self.elapsed_ms < self.interval_ms {
            return false;
        }
        self.then_ms = now_ms - self.elapsed_ms % self.interval_ms;
        true
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    /// Target milliseconds per tick.
    #[must_use]
    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Timestamp of the last tick boundary.
    #[must_use]
    pub fn then_ms(&self) -> f64 {
        self.then_ms
    }

    /// Time between the last baseline and the most recent poll.
    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// Measured frames per second, `trunc(1000 / elapsed)`. `None` before the
    /// first poll, when elapsed is still zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn fps(&self) -> Option<u32> {
        if self.elapsed_ms <= 0.0 {
            return None;
        }
        Some((MS_PER_SECOND / self.elapsed_ms).trunc() as u32)
    }
}
