//! Key press tracking for the on-screen keyboard.
//!
//! Every press of a glyph bumps its counter and stores a fresh
//! `PressRecord`. A key widget derives its animation frame from the record
//! alone, so a new press always restarts the animation even while the
//! previous one is still running.

use std::collections::HashMap;

/// Map a typed or revealed character to the key glyph it presses.
///
/// Letters are upper-cased and non-ASCII characters are transliterated
/// (`é` presses `E`). Characters without a transliteration press themselves.
pub fn key_glyph(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_uppercase();
    }
    deunicode::deunicode_char(c)
        .and_then(|s| s.chars().next())
        .map(|g| g.to_ascii_uppercase())
        .unwrap_or(c)
}

/// Animation phase of a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyFrame {
    /// Not animating
    Rest,
    /// First half of a press: key is held down
    Down,
    /// Second half of a press: key is coming back up
    Rising,
}

/// The most recent press of one key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressRecord {
    /// How many times the key has been pressed, including this one
    pub count: u64,
    /// When this press happened (session clock, ms)
    pub at_ms: f64,
    /// Typing speed of the press; scales the animation duration
    pub speed: f64,
}

impl PressRecord {
    /// Animation length for this press: `base_interval / speed`.
    pub fn duration_ms(&self, base_interval_ms: f64) -> f64 {
        base_interval_ms / self.speed.max(f64::EPSILON)
    }

    /// Animation frame at `now_ms`.
    pub fn frame(&self, now_ms: f64, base_interval_ms: f64) -> KeyFrame {
        let elapsed = now_ms - self.at_ms;
        let duration = self.duration_ms(base_interval_ms);
        if elapsed < 0.0 || elapsed >= duration {
            KeyFrame::Rest
        } else if elapsed < duration / 2.0 {
            KeyFrame::Down
        } else {
            KeyFrame::Rising
        }
    }
}

/// Press counts per key glyph.
#[derive(Debug, Clone, Default)]
pub struct KeyPressCounter {
    presses: HashMap<char, PressRecord>,
}

impl KeyPressCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press of `glyph` and return its new count.
    pub fn press(&mut self, glyph: char, speed: f64, at_ms: f64) -> u64 {
        let count = self.count(glyph) + 1;
        self.presses.insert(
            glyph,
            PressRecord {
                count,
                at_ms,
                speed,
            },
        );
        count
    }

    /// Number of presses of `glyph` so far.
    pub fn count(&self, glyph: char) -> u64 {
        self.presses.get(&glyph).map_or(0, |r| r.count)
    }

    /// Latest press of `glyph`, if it was ever pressed.
    pub fn record(&self, glyph: char) -> Option<&PressRecord> {
        self.presses.get(&glyph)
    }

    /// Total presses across all keys.
    pub fn total(&self) -> u64 {
        self.presses.values().map(|r| r.count).sum()
    }
}
