//! Player state
//!
//! Contains the reveal cursor (`PlaybackPosition`) and the `PlayerCommand`
//! enum that input handlers return to the main loop.

use crate::script::Script;

/// Command produced by an input event.
///
/// Input handlers translate raw terminal events into these so the main
/// loop can apply them to the session in one place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerCommand {
    /// Nothing to do
    Continue,
    /// Mark the page active without pressing anything
    Activate,
    /// Press a key glyph (marks the page active too)
    Press(char),
    /// Jump to the end of the script
    Skip,
    /// Open a revealed link
    OpenLink(String),
    /// Leave the player
    Quit,
}

/// The reveal cursor.
///
/// `segment_index` always points at an existing segment and `char_index`
/// never exceeds that segment's character count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct PlaybackPosition {
    /// Segment currently being typed
    pub segment_index: usize,
    /// Characters of that segment revealed so far
    pub char_index: usize,
}

impl PlaybackPosition {
    /// Position at the very start of a script.
    pub fn start() -> Self {
        Self::default()
    }

    /// Build a position, clamping both indices into range for `script`.
    pub fn clamped(script: &Script, segment_index: usize, char_index: usize) -> Self {
        let segment_index = segment_index.min(script.last_index());
        let len = script.segments()[segment_index].char_len();
        Self {
            segment_index,
            char_index: char_index.min(len),
        }
    }

    /// The terminal position: last segment, fully revealed.
    pub fn terminal(script: &Script) -> Self {
        Self {
            segment_index: script.last_index(),
            char_index: script.last().char_len(),
        }
    }

    /// Whether this is the terminal position of `script`.
    pub fn is_terminal(&self, script: &Script) -> bool {
        *self == Self::terminal(script)
    }

    /// Reveal one more character of the current segment (clamped).
    pub fn reveal_next(&mut self, script: &Script) {
        *self = Self::clamped(script, self.segment_index, self.char_index + 1);
    }

    /// Move to the start of the next segment (clamped to the last one).
    pub fn next_segment(&mut self, script: &Script) {
        if self.segment_index < script.last_index() {
            self.segment_index += 1;
            self.char_index = 0;
        }
    }

    /// Number of characters revealed across the whole script.
    pub fn revealed_chars(&self, script: &Script) -> usize {
        let before: usize = script.segments()[..self.segment_index]
            .iter()
            .map(|s| s.char_len())
            .sum();
        before + self.char_index
    }
}
