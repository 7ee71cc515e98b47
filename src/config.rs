//! Validated game configuration.

use crate::time::TimeDuration;
use crate::types::ConfigError;

/// Default debounce window of the classic board, in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 40;

/// Fixed-at-construction parameters of a [`SequenceGame`](crate::SequenceGame).
///
/// Built through [`GameConfig::builder`], which starts from the classic
/// four-button board and validates on [`ConfigBuilder::build`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig<D: TimeDuration> {
    signal_count: u8,
    max_length: usize,
    input_timeout: D,
    blink_duration: D,
    inter_element_gap: D,
    next_round_delay: D,
    win_flash_on: D,
    win_flash_off: D,
    win_flashes: u8,
    loss_tone_duration: D,
    cooldown: D,
    demo_interval: D,
    auto_start: bool,
}

impl<D: TimeDuration> GameConfig<D> {
    /// Creates a builder preloaded with the classic board defaults.
    pub fn builder() -> ConfigBuilder<D> {
        ConfigBuilder::new()
    }

    /// Number of distinct signals (and gameplay channels).
    pub fn signal_count(&self) -> u8 {
        self.signal_count
    }

    /// Sequence length at which the game is won.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Allowed idle time after each accepted press or release.
    pub fn input_timeout(&self) -> D {
        self.input_timeout
    }

    /// How long each element is lit during playback.
    pub fn blink_duration(&self) -> D {
        self.blink_duration
    }

    /// Dark gap between consecutive playback elements.
    pub fn inter_element_gap(&self) -> D {
        self.inter_element_gap
    }

    /// Pause between a completed round and the next playback.
    pub fn next_round_delay(&self) -> D {
        self.next_round_delay
    }

    /// Lit time of each win flash.
    pub fn win_flash_on(&self) -> D {
        self.win_flash_on
    }

    /// Dark time after each win flash.
    pub fn win_flash_off(&self) -> D {
        self.win_flash_off
    }

    /// Number of win flashes.
    pub fn win_flashes(&self) -> u8 {
        self.win_flashes
    }

    /// Length of the failure tone.
    pub fn loss_tone_duration(&self) -> D {
        self.loss_tone_duration
    }

    /// Delay after a win or loss before returning to attract mode.
    pub fn cooldown(&self) -> D {
        self.cooldown
    }

    /// Period of the attract mode demo.
    pub fn demo_interval(&self) -> D {
        self.demo_interval
    }

    /// Whether attract mode starts a game without waiting for a start request.
    pub fn auto_start(&self) -> bool {
        self.auto_start
    }
}

/// Builder for [`GameConfig`].
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder<D: TimeDuration> {
    config: GameConfig<D>,
}

impl<D: TimeDuration> ConfigBuilder<D> {
    /// Creates a builder with the classic board defaults.
    pub fn new() -> Self {
        Self {
            config: GameConfig {
                signal_count: 4,
                max_length: 10,
                input_timeout: D::from_millis(4000),
                blink_duration: D::from_millis(200),
                inter_element_gap: D::from_millis(200),
                next_round_delay: D::from_millis(800),
                win_flash_on: D::from_millis(800),
                win_flash_off: D::from_millis(200),
                win_flashes: 3,
                loss_tone_duration: D::from_millis(800),
                cooldown: D::from_millis(2000),
                demo_interval: D::from_millis(1000),
                auto_start: false,
            },
        }
    }

    /// Sets the number of signals.
    pub fn signal_count(mut self, count: u8) -> Self {
        self.config.signal_count = count;
        self
    }

    /// Sets the winning sequence length.
    pub fn max_length(mut self, length: usize) -> Self {
        self.config.max_length = length;
        self
    }

    /// Sets the per-action input timeout.
    pub fn input_timeout(mut self, timeout: D) -> Self {
        self.config.input_timeout = timeout;
        self
    }

    /// Sets the playback blink duration.
    pub fn blink_duration(mut self, duration: D) -> Self {
        self.config.blink_duration = duration;
        self
    }

    /// Sets the playback gap between elements.
    pub fn inter_element_gap(mut self, gap: D) -> Self {
        self.config.inter_element_gap = gap;
        self
    }

    /// Sets the pause before the next round's playback.
    pub fn next_round_delay(mut self, delay: D) -> Self {
        self.config.next_round_delay = delay;
        self
    }

    /// Sets the win celebration: flash count, lit time and dark time.
    pub fn win_flashes(mut self, count: u8, on: D, off: D) -> Self {
        self.config.win_flashes = count;
        self.config.win_flash_on = on;
        self.config.win_flash_off = off;
        self
    }

    /// Sets the failure tone length.
    pub fn loss_tone_duration(mut self, duration: D) -> Self {
        self.config.loss_tone_duration = duration;
        self
    }

    /// Sets the post-game cooldown.
    pub fn cooldown(mut self, cooldown: D) -> Self {
        self.config.cooldown = cooldown;
        self
    }

    /// Sets the attract mode demo period.
    pub fn demo_interval(mut self, interval: D) -> Self {
        self.config.demo_interval = interval;
        self
    }

    /// Starts games from attract mode without a start request.
    pub fn auto_start(mut self, enabled: bool) -> Self {
        self.config.auto_start = enabled;
        self
    }

    /// Validates and returns the configuration.
    ///
    /// # Errors
    /// * `NoSignals` - Signal count is zero
    /// * `ZeroMaxLength` - Maximum length is zero
    /// * `ZeroTimeout` - Input timeout is zero
    pub fn build(self) -> Result<GameConfig<D>, ConfigError> {
        if self.config.signal_count == 0 {
            return Err(ConfigError::NoSignals);
        }
        if self.config.max_length == 0 {
            return Err(ConfigError::ZeroMaxLength);
        }
        if self.config.input_timeout.as_millis() == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(self.config)
    }
}

impl<D: TimeDuration> Default for ConfigBuilder<D> {
    fn default() -> Self {
        Self::new()
    }
}
