//! Shared test infrastructure for simon-game integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use simon_game::{
    ChannelRole, Emitter, GameConfig, InputDebouncer, Presenter, RandomSource, RawSampler,
    Scoreboard, SequenceGame, SignalId, TimeDuration, TimeInstant, TimeSource, Turn,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }

    fn checked_add(self, duration: Self::Duration) -> Option<Self> {
        self.0.checked_add(duration.0).map(TestInstant)
    }
}

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }

    pub fn millis(&self) -> u64 {
        self.current_time.get().0
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Buttons
// ============================================================================

/// Raw button levels that tests flip directly (true = pressed)
pub struct MockButtons<const N: usize> {
    levels: Cell<[bool; N]>,
}

impl<const N: usize> MockButtons<N> {
    pub fn new() -> Self {
        Self {
            levels: Cell::new([false; N]),
        }
    }

    pub fn set(&self, channel: usize, pressed: bool) {
        let mut levels = self.levels.get();
        levels[channel] = pressed;
        self.levels.set(levels);
    }

    pub fn press(&self, channel: usize) {
        self.set(channel, true);
    }

    pub fn release(&self, channel: usize) {
        self.set(channel, false);
    }
}

impl<const N: usize> RawSampler for &MockButtons<N> {
    fn sample(&mut self, channel: usize) -> bool {
        self.levels.get()[channel]
    }
}

// ============================================================================
// Recording Collaborators
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitterEvent {
    Signal(SignalId, bool),
    Light(SignalId, bool),
    FailureTone(bool),
}

/// Emitter that records every call
#[derive(Default)]
pub struct RecordingEmitter {
    pub events: Vec<EmitterEvent>,
}

impl RecordingEmitter {
    pub fn signal_events(&self) -> Vec<(SignalId, bool)> {
        self.events
            .iter()
            .filter_map(|event| match event {
                EmitterEvent::Signal(id, on) => Some((*id, *on)),
                _ => None,
            })
            .collect()
    }

    pub fn failure_tones(&self) -> usize {
        self.events
            .iter()
            .filter(|event| **event == EmitterEvent::FailureTone(true))
            .count()
    }

    pub fn lit_lights(&self) -> Vec<SignalId> {
        self.events
            .iter()
            .filter_map(|event| match event {
                EmitterEvent::Light(id, true) => Some(*id),
                _ => None,
            })
            .collect()
    }
}

impl Emitter for RecordingEmitter {
    fn set_signal(&mut self, id: SignalId, on: bool) {
        self.events.push(EmitterEvent::Signal(id, on));
    }

    fn set_light(&mut self, id: SignalId, on: bool) {
        self.events.push(EmitterEvent::Light(id, on));
    }

    fn set_failure_tone(&mut self, on: bool) {
        self.events.push(EmitterEvent::FailureTone(on));
    }
}

/// Scoreboard that records shown values (`None` for blank) and turns
#[derive(Default)]
pub struct RecordingScoreboard {
    pub shown: Vec<Option<u8>>,
    pub turns: Vec<Turn>,
}

impl RecordingScoreboard {
    pub fn last_shown(&self) -> Option<Option<u8>> {
        self.shown.last().copied()
    }
}

impl Scoreboard for RecordingScoreboard {
    fn show(&mut self, value: u8) {
        self.shown.push(Some(value));
    }

    fn blank(&mut self) {
        self.shown.push(None);
    }

    fn set_turn(&mut self, turn: Turn) {
        self.turns.push(turn);
    }
}

/// Random source replaying a fixed script, cycling when exhausted
pub struct ScriptedRandom {
    values: Vec<SignalId>,
    next: usize,
}

impl ScriptedRandom {
    pub fn new(values: &[SignalId]) -> Self {
        Self {
            values: values.to_vec(),
            next: 0,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_signal(&mut self, _signal_count: u8) -> SignalId {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}

/// Presenter that advances mock time instead of blocking
pub struct ClockPresenter<'a> {
    clock: &'a MockTimeSource,
    pub holds: Vec<u64>,
}

impl<'a> ClockPresenter<'a> {
    pub fn new(clock: &'a MockTimeSource) -> Self {
        Self {
            clock,
            holds: Vec::new(),
        }
    }
}

impl Presenter<TestDuration> for ClockPresenter<'_> {
    fn hold(&mut self, duration: TestDuration) {
        self.holds.push(duration.0);
        self.clock.advance(duration.0);
    }
}

// ============================================================================
// Game Fixture
// ============================================================================

pub const DEBOUNCE_MS: u64 = 40;
pub const TIMEOUT_MS: u64 = 4000;
pub const CHANNELS: usize = 5;
pub const START: usize = 4;
pub const CAPACITY: usize = 16;

pub const ROLES: [ChannelRole; CHANNELS] = [
    ChannelRole::Gameplay,
    ChannelRole::Gameplay,
    ChannelRole::Gameplay,
    ChannelRole::Gameplay,
    ChannelRole::Control,
];

pub type TestInput<'a> =
    InputDebouncer<'a, TestInstant, MockTimeSource, &'a MockButtons<CHANNELS>, CHANNELS>;

pub type TestGame<'a> = SequenceGame<
    'a,
    TestInstant,
    MockTimeSource,
    RecordingEmitter,
    RecordingScoreboard,
    ScriptedRandom,
    ClockPresenter<'a>,
    CAPACITY,
>;

pub fn config(max_length: usize) -> GameConfig<TestDuration> {
    GameConfig::builder()
        .signal_count(4)
        .max_length(max_length)
        .input_timeout(TestDuration(TIMEOUT_MS))
        .build()
        .unwrap()
}

pub fn new_input<'a>(clock: &'a MockTimeSource, buttons: &'a MockButtons<CHANNELS>) -> TestInput<'a> {
    InputDebouncer::new(buttons, ROLES, TestDuration(DEBOUNCE_MS), clock).unwrap()
}

pub fn new_game<'a>(
    config: GameConfig<TestDuration>,
    input: &TestInput<'a>,
    clock: &'a MockTimeSource,
    script: &[SignalId],
) -> TestGame<'a> {
    SequenceGame::new(
        config,
        input,
        clock,
        RecordingEmitter::default(),
        RecordingScoreboard::default(),
        ScriptedRandom::new(script),
        ClockPresenter::new(clock),
    )
    .unwrap()
}

/// Changes a raw level and ticks until the debounced edge has been handled
pub fn settle(
    buttons: &MockButtons<CHANNELS>,
    clock: &MockTimeSource,
    game: &mut TestGame<'_>,
    input: &mut TestInput<'_>,
    channel: usize,
    pressed: bool,
) -> simon_game::GameState {
    buttons.set(channel, pressed);
    game.tick(input);
    clock.advance(DEBOUNCE_MS + 1);
    game.tick(input)
}
