//! Multi-channel input debouncing with edge detection.
//!
//! Provides [`InputDebouncer`], which turns noisy raw samples from a
//! [`RawSampler`] into stable per-channel pressed/released states and reports
//! each confirmed change exactly once.

use crate::io::RawSampler;
use crate::time::{TimeDuration, TimeInstant, TimeSource, millis_since};
use crate::types::{ChannelRole, ConfigError, Transition};

/// Debounce state of one input line.
#[derive(Debug, Clone, Copy)]
struct Channel<I> {
    raw: bool,
    confirmed: bool,
    last_change: I,
}

/// Debounces a fixed set of input channels.
///
/// A channel's confirmed state only changes once its raw sample has held the
/// same value for strictly longer than the debounce window. Any raw change
/// restarts the window, so bounces never surface.
///
/// Channels are independent. Channels with [`ChannelRole::Control`] are kept
/// out of [`poll_all`](Self::poll_all), [`any_down`](Self::any_down) and
/// [`down_count`](Self::down_count), and are read through
/// [`poll_control`](Self::poll_control) instead.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
/// * `S` - Raw sampler implementation type
/// * `N` - Number of channels
pub struct InputDebouncer<'t, I: TimeInstant, T: TimeSource<I>, S: RawSampler, const N: usize> {
    sampler: S,
    time_source: &'t T,
    debounce_window: I::Duration,
    roles: [ChannelRole; N],
    channels: [Channel<I>; N],
}

impl<'t, I: TimeInstant, T: TimeSource<I>, S: RawSampler, const N: usize>
    InputDebouncer<'t, I, T, S, N>
{
    /// Creates a debouncer with every channel released.
    ///
    /// # Errors
    /// * `NoChannels` - `N` is zero
    pub fn new(
        sampler: S,
        roles: [ChannelRole; N],
        debounce_window: I::Duration,
        time_source: &'t T,
    ) -> Result<Self, ConfigError> {
        if N == 0 {
            return Err(ConfigError::NoChannels);
        }

        let now = time_source.now();
        Ok(Self {
            sampler,
            time_source,
            debounce_window,
            roles,
            channels: [Channel {
                raw: false,
                confirmed: false,
                last_change: now,
            }; N],
        })
    }

    /// Samples `channel` once and updates its debounce state.
    ///
    /// Returns [`Transition::Confirmed`] when the confirmed state flipped on
    /// this call; the new state is available through [`is_down`](Self::is_down).
    ///
    /// # Panics
    /// Panics if `channel >= N`.
    pub fn poll(&mut self, channel: usize) -> Transition {
        let value = self.sampler.sample(channel);
        let now = self.time_source.now();
        let window = self.debounce_window.as_millis();
        let state = &mut self.channels[channel];

        if value != state.raw {
            state.raw = value;
            state.last_change = now;
            Transition::None
        } else if value != state.confirmed && millis_since(now, state.last_change) > window {
            state.confirmed = value;
            Transition::Confirmed
        } else {
            Transition::None
        }
    }

    /// Polls every gameplay channel in index order.
    ///
    /// Returns true if any of them produced a confirmed transition.
    pub fn poll_all(&mut self) -> bool {
        let mut changed = false;
        for channel in 0..N {
            if self.roles[channel] == ChannelRole::Gameplay {
                changed |= self.poll(channel).is_confirmed();
            }
        }
        changed
    }

    /// Polls every control channel.
    ///
    /// Returns true if any of them was confirmed pressed on this call.
    pub fn poll_control(&mut self) -> bool {
        let mut pressed = false;
        for channel in 0..N {
            if self.roles[channel] == ChannelRole::Control
                && self.poll(channel).is_confirmed()
                && self.channels[channel].confirmed
            {
                pressed = true;
            }
        }
        pressed
    }

    /// Whether any control channel is confirmed down. Does not sample.
    pub fn control_down(&self) -> bool {
        self.channels
            .iter()
            .zip(self.roles.iter())
            .any(|(state, role)| *role == ChannelRole::Control && state.confirmed)
    }

    /// Polls every gameplay channel, then reports whether any is down.
    pub fn any_down(&mut self) -> bool {
        self.poll_all();
        self.down_count() > 0
    }

    /// Confirmed state of `channel`. Does not sample.
    ///
    /// # Panics
    /// Panics if `channel >= N`.
    pub fn is_down(&self, channel: usize) -> bool {
        self.channels[channel].confirmed
    }

    /// Number of gameplay channels currently confirmed down. Does not sample.
    pub fn down_count(&self) -> usize {
        self.channels
            .iter()
            .zip(self.roles.iter())
            .filter(|(state, role)| **role == ChannelRole::Gameplay && state.confirmed)
            .count()
    }

    /// Role of `channel`.
    ///
    /// # Panics
    /// Panics if `channel >= N`.
    pub fn role(&self, channel: usize) -> ChannelRole {
        self.roles[channel]
    }

    /// Channel roles in index order.
    pub fn roles(&self) -> &[ChannelRole; N] {
        &self.roles
    }

    /// Total number of channels.
    pub fn channel_count(&self) -> usize {
        N
    }

    /// The configured debounce window.
    pub fn debounce_window(&self) -> I::Duration {
        self.debounce_window
    }
}
