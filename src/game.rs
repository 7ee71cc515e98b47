//! Turn-based memory sequence game.
//!
//! Provides [`SequenceGame`], which grows a random signal sequence one element
//! per round, replays it, and verifies the player's press/release handshake
//! against it using debounced edges from an [`InputDebouncer`].

use crate::config::GameConfig;
use crate::debouncer::InputDebouncer;
use crate::io::{Emitter, Presenter, RandomSource, RawSampler, Scoreboard};
use crate::time::{TimeDuration, TimeInstant, TimeSource, millis_since};
use crate::types::{ChannelRole, ConfigError, GameState, LossReason, SignalId, Turn};
use heapless::Vec;

/// Draws per demo step before a repeated light is accepted.
const DEMO_DRAWS: u8 = 8;

/// Progress through the player's reply in the current round.
#[derive(Debug, Clone, Copy)]
struct RoundCursor<I> {
    expected_index: usize,
    active: Option<SignalId>,
    last_activity: I,
}

/// Attract mode demo progress.
#[derive(Debug, Clone, Copy)]
struct Demo<I> {
    light: Option<SignalId>,
    counter: u8,
    turn: Turn,
    last_step: Option<I>,
}

impl<I> Demo<I> {
    fn new() -> Self {
        Self {
            light: None,
            counter: 0,
            turn: Turn::Machine,
            last_step: None,
        }
    }
}

/// Whether edge handling within one tick should go on to the next channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// Drives one Simon-style game.
///
/// Call [`tick`](Self::tick) frequently from the main loop. Each tick polls the
/// debouncer once and reacts to confirmed edges. Playback and the win/loss
/// presentations block through the [`Presenter`]; input is not polled while
/// they run.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
/// * `E` - Light/tone emitter
/// * `D` - Scoreboard (digit display and turn indicator)
/// * `R` - Random source for new sequence elements
/// * `P` - Blocking presenter
/// * `M` - Sequence storage capacity
pub struct SequenceGame<'t, I, T, E, D, R, P, const M: usize>
where
    I: TimeInstant,
    T: TimeSource<I>,
    E: Emitter,
    D: Scoreboard,
    R: RandomSource,
    P: Presenter<I::Duration>,
{
    config: GameConfig<I::Duration>,
    time_source: &'t T,
    emitter: E,
    scoreboard: D,
    random: R,
    presenter: P,
    state: GameState,
    sequence: Vec<SignalId, M>,
    cursor: RoundCursor<I>,
    phase_start: I,
    demo: Demo<I>,
    start_requested: bool,
    last_loss: Option<LossReason>,
}

impl<'t, I, T, E, D, R, P, const M: usize> SequenceGame<'t, I, T, E, D, R, P, M>
where
    I: TimeInstant,
    T: TimeSource<I>,
    E: Emitter,
    D: Scoreboard,
    R: RandomSource,
    P: Presenter<I::Duration>,
{
    /// Creates a game in attract mode with the scoreboard blanked.
    ///
    /// `input` is only inspected for its channel layout: channels
    /// `0..signal_count` must be the gameplay channels, one per signal.
    ///
    /// # Errors
    /// * `MaxLengthExceedsCapacity` - `max_length` is larger than `M`
    /// * `ChannelLayoutMismatch` - The debouncer's gameplay channels do not match the signals
    pub fn new<S: RawSampler, const N: usize>(
        config: GameConfig<I::Duration>,
        input: &InputDebouncer<'_, I, T, S, N>,
        time_source: &'t T,
        emitter: E,
        mut scoreboard: D,
        random: R,
        presenter: P,
    ) -> Result<Self, ConfigError> {
        if config.max_length() > M {
            return Err(ConfigError::MaxLengthExceedsCapacity {
                max_length: config.max_length(),
                capacity: M,
            });
        }
        check_layout(input.roles(), config.signal_count())?;

        scoreboard.blank();
        let now = time_source.now();

        Ok(Self {
            config,
            time_source,
            emitter,
            scoreboard,
            random,
            presenter,
            state: GameState::Attract,
            sequence: Vec::new(),
            cursor: RoundCursor {
                expected_index: 0,
                active: None,
                last_activity: now,
            },
            phase_start: now,
            demo: Demo::new(),
            start_requested: false,
            last_loss: None,
        })
    }

    /// Advances the game by one step.
    ///
    /// Returns the state after the step.
    pub fn tick<S: RawSampler, const N: usize>(
        &mut self,
        input: &mut InputDebouncer<'_, I, T, S, N>,
    ) -> GameState {
        if self.state != GameState::Attract {
            input.poll_control();
        }

        match self.state {
            GameState::Attract => self.attract(input),
            GameState::AwaitPress | GameState::AwaitRelease => self.verify(input),
            GameState::Won | GameState::Lost => {
                input.poll_all();
                let now = self.time_source.now();
                if millis_since(now, self.phase_start) >= self.config.cooldown().as_millis() {
                    self.enter_attract();
                }
            }
            GameState::Playback => {}
        }
        self.state
    }

    /// Requests a new game. Ignored outside attract mode.
    pub fn start(&mut self) {
        if self.state == GameState::Attract {
            self.start_requested = true;
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Returns the target sequence of the current game.
    pub fn sequence(&self) -> &[SignalId] {
        &self.sequence
    }

    /// Returns the current round number (the sequence length).
    pub fn round(&self) -> usize {
        self.sequence.len()
    }

    /// Returns the sequence position the player has to match next.
    pub fn expected_index(&self) -> usize {
        self.cursor.expected_index
    }

    /// Returns the channel held down and awaiting release, if any.
    pub fn active_channel(&self) -> Option<usize> {
        self.cursor.active.map(usize::from)
    }

    /// Returns the instant at which the pending press or release times out.
    ///
    /// `None` outside `AwaitPress`/`AwaitRelease`, or on instant overflow.
    pub fn timeout_deadline(&self) -> Option<I> {
        match self.state {
            GameState::AwaitPress | GameState::AwaitRelease => self
                .cursor
                .last_activity
                .checked_add(self.config.input_timeout()),
            _ => None,
        }
    }

    /// Returns why the most recent round was lost, if the current game lost one.
    pub fn last_loss(&self) -> Option<LossReason> {
        self.last_loss
    }

    /// Returns the configuration.
    pub fn config(&self) -> &GameConfig<I::Duration> {
        &self.config
    }

    /// Returns a reference to the emitter.
    pub fn emitter(&self) -> &E {
        &self.emitter
    }

    /// Returns a reference to the scoreboard.
    pub fn scoreboard(&self) -> &D {
        &self.scoreboard
    }

    /// Returns a reference to the presenter.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    fn attract<S: RawSampler, const N: usize>(
        &mut self,
        input: &mut InputDebouncer<'_, I, T, S, N>,
    ) {
        input.poll_all();
        input.poll_control();

        if self.start_requested || input.control_down() || self.config.auto_start() {
            self.new_game();
            return;
        }

        let now = self.time_source.now();
        let due = match self.demo.last_step {
            None => true,
            Some(last) => millis_since(now, last) >= self.config.demo_interval().as_millis(),
        };
        if due {
            self.demo_step(now);
        }
    }

    fn demo_step(&mut self, now: I) {
        let count = self.config.signal_count();
        let previous = self.demo.light.take();
        if let Some(id) = previous {
            self.emitter.set_light(id, false);
        }

        let mut next = self.random.next_signal(count) % count;
        let mut draws = 1;
        while count > 1 && Some(next) == previous && draws < DEMO_DRAWS {
            next = self.random.next_signal(count) % count;
            draws += 1;
        }

        self.emitter.set_light(next, true);
        self.scoreboard.show(self.demo.counter % 10);
        self.scoreboard.set_turn(self.demo.turn);

        self.demo.light = Some(next);
        self.demo.counter = self.demo.counter.wrapping_add(1);
        self.demo.turn = self.demo.turn.flipped();
        self.demo.last_step = Some(now);
    }

    fn enter_attract(&mut self) {
        self.state = GameState::Attract;
        self.demo = Demo::new();
        self.start_requested = false;
        self.scoreboard.blank();
    }

    fn new_game(&mut self) {
        if let Some(id) = self.demo.light.take() {
            self.emitter.set_light(id, false);
        }
        self.start_requested = false;
        self.last_loss = None;
        self.sequence.clear();
        self.scoreboard.show(0);

        #[cfg(feature = "defmt")]
        defmt::info!("new game");

        self.start_round();
    }

    fn start_round(&mut self) {
        self.state = GameState::Playback;
        self.scoreboard.set_turn(Turn::Machine);

        if self.sequence.len() >= self.config.max_length() {
            self.win();
            return;
        }

        let count = self.config.signal_count();
        let id = self.random.next_signal(count) % count;
        let pushed = self.sequence.push(id);
        debug_assert!(pushed.is_ok(), "max_length is validated against capacity");

        #[cfg(feature = "defmt")]
        defmt::debug!("round {} starts, appended signal {}", self.sequence.len(), id);

        self.playback();

        self.cursor = RoundCursor {
            expected_index: 0,
            active: None,
            last_activity: self.time_source.now(),
        };
        self.scoreboard.set_turn(Turn::Player);
        self.state = GameState::AwaitPress;
    }

    fn playback(&mut self) {
        let blink = self.config.blink_duration();
        let gap = self.config.inter_element_gap();
        let last = self.sequence.len().saturating_sub(1);

        for (position, &id) in self.sequence.iter().enumerate() {
            self.emitter.set_signal(id, true);
            self.presenter.hold(blink);
            self.emitter.set_signal(id, false);
            if position < last {
                self.presenter.hold(gap);
            }
        }
    }

    fn verify<S: RawSampler, const N: usize>(
        &mut self,
        input: &mut InputDebouncer<'_, I, T, S, N>,
    ) {
        for channel in 0..N {
            if input.role(channel) != ChannelRole::Gameplay {
                continue;
            }
            if !input.poll(channel).is_confirmed() {
                continue;
            }

            let flow = if input.is_down(channel) {
                self.on_press(input, channel)
            } else {
                self.on_release(input, channel)
            };
            if flow == Flow::Stop {
                return;
            }
        }

        let now = self.time_source.now();
        let idle = millis_since(now, self.cursor.last_activity);
        if idle >= self.config.input_timeout().as_millis() {
            let reason = match self.state {
                GameState::AwaitRelease => LossReason::ReleaseTimeout,
                _ => LossReason::PressTimeout,
            };
            self.lose(reason);
        }
    }

    fn on_press<S: RawSampler, const N: usize>(
        &mut self,
        input: &InputDebouncer<'_, I, T, S, N>,
        channel: usize,
    ) -> Flow {
        match self.state {
            GameState::AwaitPress => {
                if input.down_count() != 1 {
                    self.lose(LossReason::SimultaneousPress);
                    return Flow::Stop;
                }

                let expected = self.sequence[self.cursor.expected_index];
                if usize::from(expected) != channel {
                    self.lose(LossReason::WrongSignal);
                    return Flow::Stop;
                }

                self.emitter.set_signal(expected, true);
                self.cursor.expected_index += 1;
                self.cursor.active = Some(expected);
                self.cursor.last_activity = self.time_source.now();
                self.state = GameState::AwaitRelease;
                Flow::Continue
            }
            GameState::AwaitRelease if self.active_channel() != Some(channel) => {
                self.lose(LossReason::SimultaneousPress);
                Flow::Stop
            }
            _ => Flow::Continue,
        }
    }

    fn on_release<S: RawSampler, const N: usize>(
        &mut self,
        input: &InputDebouncer<'_, I, T, S, N>,
        channel: usize,
    ) -> Flow {
        if self.state != GameState::AwaitRelease || self.active_channel() != Some(channel) {
            return Flow::Continue;
        }
        if input.down_count() != 0 {
            self.lose(LossReason::SimultaneousPress);
            return Flow::Stop;
        }

        if let Some(id) = self.cursor.active.take() {
            self.emitter.set_signal(id, false);
        }

        if self.cursor.expected_index == self.sequence.len() {
            self.complete_round();
            return Flow::Stop;
        }

        self.cursor.last_activity = self.time_source.now();
        self.state = GameState::AwaitPress;
        Flow::Continue
    }

    fn complete_round(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::debug!("round {} complete", self.sequence.len());

        self.scoreboard
            .show(u8::try_from(self.sequence.len()).unwrap_or(u8::MAX));
        self.presenter.hold(self.config.next_round_delay());
        self.start_round();
    }

    fn win(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::info!("game won at length {}", self.sequence.len());

        self.state = GameState::Won;
        for _ in 0..self.config.win_flashes() {
            self.set_all_lights(true);
            self.presenter.hold(self.config.win_flash_on());
            self.set_all_lights(false);
            self.presenter.hold(self.config.win_flash_off());
        }
        self.phase_start = self.time_source.now();
    }

    fn lose(&mut self, reason: LossReason) {
        #[cfg(feature = "defmt")]
        defmt::warn!(
            "round {} lost at position {}: {}",
            self.sequence.len(),
            self.cursor.expected_index,
            reason
        );

        if let Some(id) = self.cursor.active.take() {
            self.emitter.set_signal(id, false);
        }
        self.state = GameState::Lost;
        self.last_loss = Some(reason);

        self.emitter.set_failure_tone(true);
        self.presenter.hold(self.config.loss_tone_duration());
        self.emitter.set_failure_tone(false);
        self.phase_start = self.time_source.now();
    }

    fn set_all_lights(&mut self, on: bool) {
        for id in 0..self.config.signal_count() {
            self.emitter.set_light(id, on);
        }
    }
}

/// Checks that channels `0..signal_count` are gameplay channels and no others are.
fn check_layout(roles: &[ChannelRole], signal_count: u8) -> Result<(), ConfigError> {
    let gameplay_channels = roles
        .iter()
        .filter(|role| **role == ChannelRole::Gameplay)
        .count();
    let leading = roles
        .iter()
        .take(usize::from(signal_count))
        .take_while(|role| **role == ChannelRole::Gameplay)
        .count();

    if leading != usize::from(signal_count) || gameplay_channels != leading {
        return Err(ConfigError::ChannelLayoutMismatch {
            signal_count,
            gameplay_channels,
        });
    }
    Ok(())
}
