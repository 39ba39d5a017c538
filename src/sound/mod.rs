//! Sound effects for key presses and completion.
//!
//! `SoundThrottler` decides *whether* a sound plays and tracks how many are
//! in flight; a `SoundSink` decides *how* it is played.

mod sinks;
mod throttle;

pub use sinks::{sink_from_config, BellSink, CommandSink, NullSink};
pub use throttle::{SoundBudget, SoundOutcome, SoundThrottler};

/// A sound effect request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    /// One of the key click variants
    Key(usize),
    /// Played once when the script is fully revealed
    Finished,
}

/// Plays sounds.
///
/// Sinks must not block; the throttler assumes a sound is "in flight" for
/// its configured duration after `play` returns.
pub trait SoundSink {
    /// Human-readable name for logs.
    fn name(&self) -> &'static str;

    /// Number of distinct key click variants this sink can play.
    fn key_variants(&self) -> usize {
        2
    }

    /// Start playing `sound`.
    fn play(&mut self, sound: Sound);
}
