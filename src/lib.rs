#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`InputDebouncer`**: Debounces a fixed set of input channels and reports confirmed edges
//! - **`ChannelRole`**: Marks a channel as a player button (`Gameplay`) or a `Control` such as start
//! - **`SequenceGame`**: The game state machine, advanced by calling `tick` from the main loop
//! - **`GameConfig`**: Validated timing and size parameters, built with `GameConfig::builder()`
//! - **`RawSampler`**, **`Emitter`**, **`Scoreboard`**, **`RandomSource`**, **`Presenter`**:
//!   Traits to implement for your board
//! - **`TimeSource`**: Trait to implement for your timing system
//!
//! The driver owns one `InputDebouncer` and one `SequenceGame` and passes the
//! debouncer to every `tick`. There is no global state.

pub mod time;
pub mod types;
pub mod config;
pub mod io;
pub mod debouncer;
pub mod game;
pub mod hal;

pub use config::{ConfigBuilder, DEFAULT_DEBOUNCE_MS, GameConfig};
pub use debouncer::InputDebouncer;
pub use game::SequenceGame;
pub use io::{Emitter, Presenter, RandomSource, RawSampler, Scoreboard};
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::{ChannelRole, ConfigError, GameState, LossReason, SignalId, Transition, Turn};
