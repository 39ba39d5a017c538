//! Concurrent sound limiting.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::{Sound, SoundSink};
use crate::player::playback::Dispatcher;

/// Count of in-flight key sounds, capped at `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundBudget {
    in_flight: usize,
    max: usize,
}

impl SoundBudget {
    pub fn new(max: usize) -> Self {
        Self { in_flight: 0, max }
    }

    /// Take a slot if one is free.
    pub fn try_acquire(&mut self) -> bool {
        if self.in_flight >= self.max {
            return false;
        }
        self.in_flight += 1;
        true
    }

    /// Give a slot back.
    pub fn release(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn max(&self) -> usize {
        self.max
    }
}

/// What happened to a sound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundOutcome {
    /// A key sound started
    Played(Sound),
    /// Budget exhausted; the request was dropped
    Dropped,
    /// The finished sound started instead of a key sound
    Finished,
    /// Sound is turned off
    Muted,
}

/// Rate-limits key sounds and plays the finished sound exactly once.
///
/// Key sounds hold a budget slot until their duration elapses. The
/// finished sound bypasses the budget and never occupies a slot, so the
/// in-flight count stays within the cap.
pub struct SoundThrottler {
    sink: Box<dyn SoundSink>,
    budget: SoundBudget,
    completions: Dispatcher<Sound>,
    rng: SmallRng,
    enabled: bool,
    finished_played: bool,
    key_duration_ms: f64,
    finished_duration_ms: f64,
}

impl SoundThrottler {
    /// Create a throttler with an entropy-seeded RNG.
    pub fn new(
        sink: Box<dyn SoundSink>,
        max_concurrent: usize,
        key_duration_ms: f64,
        finished_duration_ms: f64,
    ) -> Self {
        Self::with_rng(
            sink,
            max_concurrent,
            key_duration_ms,
            finished_duration_ms,
            SmallRng::from_entropy(),
        )
    }

    /// Create a throttler with a specific RNG (for deterministic tests).
    pub fn with_rng(
        sink: Box<dyn SoundSink>,
        max_concurrent: usize,
        key_duration_ms: f64,
        finished_duration_ms: f64,
        rng: SmallRng,
    ) -> Self {
        Self {
            sink,
            budget: SoundBudget::new(max_concurrent),
            completions: Dispatcher::new(),
            rng,
            enabled: true,
            finished_played: false,
            key_duration_ms,
            finished_duration_ms,
        }
    }

    /// Turn sound on or off. Muting never affects the finished-once flag.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// A key press count changed.
    ///
    /// `at_terminal` is true when the press happened with the script fully
    /// revealed; the first such press plays the finished sound instead.
    pub fn key_pressed(&mut self, at_terminal: bool, now_ms: f64) -> SoundOutcome {
        if at_terminal && self.terminal_reached(now_ms) {
            return SoundOutcome::Finished;
        }
        if !self.enabled {
            return SoundOutcome::Muted;
        }
        if !self.budget.try_acquire() {
            tracing::trace!(in_flight = self.budget.in_flight(), "key sound dropped");
            return SoundOutcome::Dropped;
        }

        let variants = self.sink.key_variants().max(1);
        let sound = Sound::Key(self.rng.gen_range(0..variants));
        self.sink.play(sound);
        self.completions
            .schedule(now_ms + self.key_duration_ms, sound);
        SoundOutcome::Played(sound)
    }

    /// The terminal position was reached. Plays the finished sound the first
    /// time only; returns whether it played now.
    pub fn terminal_reached(&mut self, now_ms: f64) -> bool {
        if self.finished_played {
            return false;
        }
        self.finished_played = true;
        if self.enabled {
            tracing::debug!(sink = self.sink.name(), "playing finished sound");
            self.sink.play(Sound::Finished);
            self.completions
                .schedule(now_ms + self.finished_duration_ms, Sound::Finished);
        }
        true
    }

    /// Retire sounds whose duration has elapsed. Returns how many finished.
    pub fn tick(&mut self, now_ms: f64) -> usize {
        let done = self.completions.drain_due(now_ms);
        for entry in &done {
            self.complete(entry.action);
        }
        done.len()
    }

    /// Retire every in-flight sound (teardown).
    pub fn teardown(&mut self) {
        for entry in self.completions.drain_all() {
            self.complete(entry.action);
        }
    }

    fn complete(&mut self, sound: Sound) {
        if let Sound::Key(_) = sound {
            self.budget.release();
        }
    }

    pub fn in_flight(&self) -> usize {
        self.budget.in_flight()
    }

    pub fn budget(&self) -> SoundBudget {
        self.budget
    }

    pub fn finished_played(&self) -> bool {
        self.finished_played
    }
}
