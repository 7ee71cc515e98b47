//! Collaborator traits for the hardware around the game core.
//!
//! Implement these for your board (GPIO, PWM buzzer, shift-register display,
//! RNG peripheral). None of them can fail: handle hardware errors internally.

use crate::time::TimeDuration;
use crate::types::{SignalId, Turn};

/// Instantaneous raw input sampling.
///
/// Returns `true` when the channel reads as pressed. Active-low wiring must be
/// inverted by the implementation so that the debouncer only sees active-high.
pub trait RawSampler {
    /// Samples the raw level of `channel`.
    fn sample(&mut self, channel: usize) -> bool;
}

/// Light and tone output, indexed by signal id.
///
/// All methods must be idempotent.
pub trait Emitter {
    /// Turns the light and tone of `id` on or off.
    fn set_signal(&mut self, id: SignalId, on: bool);

    /// Turns only the light of `id` on or off.
    ///
    /// Defaults to [`Emitter::set_signal`] for boards without separate control.
    fn set_light(&mut self, id: SignalId, on: bool) {
        self.set_signal(id, on);
    }

    /// Turns the failure tone on or off.
    fn set_failure_tone(&mut self, on: bool);
}

/// Round counter display and turn indicator. Purely observational.
pub trait Scoreboard {
    /// Shows a small value (the round counter).
    fn show(&mut self, value: u8);

    /// Blanks the display.
    fn blank(&mut self);

    /// Updates the whose-turn indicator.
    fn set_turn(&mut self, _turn: Turn) {}
}

/// Source of sequence elements.
pub trait RandomSource {
    /// Returns a uniformly distributed id in `0..signal_count`.
    fn next_signal(&mut self, signal_count: u8) -> SignalId;
}

/// Blocking presentation timing.
///
/// Input is not polled while a hold is in progress.
pub trait Presenter<D: TimeDuration> {
    /// Blocks for `duration`.
    fn hold(&mut self, duration: D);
}
