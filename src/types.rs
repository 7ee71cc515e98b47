//! Core types shared by the debouncer and the game.

/// Identifies one light/tone pair, and the gameplay channel that answers it.
pub type SignalId = u8;

/// What a debounced input channel is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelRole {
    /// A player button matched against the sequence.
    Gameplay,

    /// A non-gameplay control, such as a start button.
    Control,
}

/// Outcome of polling a single channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    /// Nothing changed.
    None,

    /// The debounced state flipped on this poll.
    Confirmed,
}

impl Transition {
    /// Returns true for [`Transition::Confirmed`].
    #[inline]
    pub fn is_confirmed(self) -> bool {
        self == Transition::Confirmed
    }
}

/// The state of a [`SequenceGame`](crate::SequenceGame).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameState {
    /// Demo mode, waiting for a start request.
    Attract,
    /// Replaying the target sequence. Input is ignored.
    Playback,
    /// Waiting for the next expected channel to go down.
    AwaitPress,
    /// Waiting for the active channel to come back up.
    AwaitRelease,
    /// Sequence completed at maximum length. Cooling down.
    Won,
    /// Round failed. Cooling down.
    Lost,
}

/// Why a round was lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LossReason {
    /// A single channel went down but it was not the expected one.
    WrongSignal,
    /// More than one channel was down at once.
    SimultaneousPress,
    /// No press arrived within the input timeout.
    PressTimeout,
    /// The active channel was not released within the input timeout.
    ReleaseTimeout,
}

/// Whose turn the indicator LEDs should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Turn {
    /// The game is presenting.
    Machine,
    /// The player is expected to respond.
    Player,
}

impl Turn {
    /// The other side.
    pub fn flipped(self) -> Self {
        match self {
            Turn::Machine => Turn::Player,
            Turn::Player => Turn::Machine,
        }
    }
}

/// Construction-time configuration errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The debouncer was given no channels.
    NoChannels,

    /// Signal count is zero.
    NoSignals,

    /// Maximum sequence length is zero.
    ZeroMaxLength,

    /// Input timeout is zero.
    ZeroTimeout,

    /// Maximum sequence length exceeds the storage capacity.
    MaxLengthExceedsCapacity {
        /// Requested maximum length.
        max_length: usize,
        /// Storage capacity of the game.
        capacity: usize,
    },

    /// The channel layout does not map channels `0..signal_count` to gameplay.
    ChannelLayoutMismatch {
        /// Configured signal count.
        signal_count: u8,
        /// Number of gameplay channels on the debouncer.
        gameplay_channels: usize,
    },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::NoChannels => write!(f, "debouncer needs at least one channel"),
            ConfigError::NoSignals => write!(f, "signal count must be at least one"),
            ConfigError::ZeroMaxLength => write!(f, "maximum sequence length must be at least one"),
            ConfigError::ZeroTimeout => write!(f, "input timeout must be non-zero"),
            ConfigError::MaxLengthExceedsCapacity {
                max_length,
                capacity,
            } => {
                write!(
                    f,
                    "maximum sequence length {} exceeds storage capacity {}",
                    max_length, capacity
                )
            }
            ConfigError::ChannelLayoutMismatch {
                signal_count,
                gameplay_channels,
            } => {
                write!(
                    f,
                    "channels 0..{} must be the only gameplay channels, found {} gameplay channels",
                    signal_count, gameplay_channels
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
