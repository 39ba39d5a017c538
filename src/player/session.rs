//! The session controller.
//!
//! `Session` owns every piece of mutable player state: the reveal cursor,
//! key counters, the pending timeline, the sound throttler and the visit
//! ledger. It is created on mount, driven by `tick` and input commands, and
//! shut down with `teardown`. Views get it by reference; there are no
//! globals.

use crate::config::Config;
use crate::player::keys::{key_glyph, KeyPressCounter};
use crate::player::playback::{build_timeline, Dispatcher, TimelineAction};
use crate::player::state::{PlaybackPosition, PlayerCommand};
use crate::script::{committed_styles, Script, TextStyle};
use crate::sound::SoundThrottler;
use crate::visits::VisitLedger;

/// Session settings taken from the config.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOptions {
    /// Time per character at speed 1, in milliseconds
    pub base_interval_ms: f64,
    /// First-time visitors must press a key or click before typing starts
    pub require_activation: bool,
    /// Show the skip control from this visit count onwards
    pub skip_after_visits: u64,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for SessionOptions {
    fn from(config: &Config) -> Self {
        Self {
            base_interval_ms: config.playback.base_interval_ms,
            require_activation: config.session.require_activation,
            skip_after_visits: config.session.skip_after_visits,
        }
    }
}

/// What applying a command asks of the main loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandEffect {
    /// Keep running
    None,
    /// Open this URL
    OpenLink(String),
    /// Leave the player
    Quit,
}

/// Root controller for one playback of a script.
pub struct Session {
    script: Script,
    styles: Vec<TextStyle>,
    options: SessionOptions,
    timeline: Dispatcher<TimelineAction>,
    position: PlaybackPosition,
    keys: KeyPressCounter,
    sounds: SoundThrottler,
    visits: VisitLedger,
    active: bool,
    finished: bool,
    torn_down: bool,
}

impl Session {
    /// Mount a session at `now_ms`.
    ///
    /// Repeat visitors (or everyone, when activation is not required) start
    /// typing immediately; first-time visitors wait for input.
    pub fn mount(
        script: Script,
        options: SessionOptions,
        sounds: SoundThrottler,
        visits: VisitLedger,
        now_ms: f64,
    ) -> Self {
        let styles = committed_styles(script.segments());
        let auto_activate = !options.require_activation || visits.count() >= 1;

        let mut session = Self {
            script,
            styles,
            options,
            timeline: Dispatcher::new(),
            position: PlaybackPosition::start(),
            keys: KeyPressCounter::new(),
            sounds,
            visits,
            active: false,
            finished: false,
            torn_down: false,
        };

        tracing::debug!(
            segments = session.script.len(),
            visits = session.visits.count(),
            auto_activate,
            "session mounted"
        );
        if auto_activate {
            session.activate(now_ms);
        }
        session
    }

    /// Start playback. Returns false if already active or torn down.
    pub fn activate(&mut self, now_ms: f64) -> bool {
        if self.active || self.torn_down {
            return false;
        }
        self.active = true;
        let visits = self.visits.record_visit();
        self.timeline
            .schedule_all(now_ms, build_timeline(&self.script, self.options.base_interval_ms));
        tracing::info!(visits, pending = self.timeline.pending(), "playback activated");
        true
    }

    /// Fire every action due at `now_ms`. Returns how many fired.
    pub fn tick(&mut self, now_ms: f64) -> usize {
        if self.torn_down {
            return 0;
        }
        self.sounds.tick(now_ms);

        let due = self.timeline.drain_due(now_ms);
        let fired = due.len();
        for entry in due {
            self.apply_action(entry.action, now_ms);
        }
        fired
    }

    fn apply_action(&mut self, action: TimelineAction, now_ms: f64) {
        match action {
            TimelineAction::Reveal { segment, ch, speed } => {
                if segment != self.position.segment_index {
                    tracing::warn!(segment, at = self.position.segment_index, "out of order reveal ignored");
                    return;
                }
                self.position.reveal_next(&self.script);
                self.register_press(key_glyph(ch), speed, now_ms);
            }
            TimelineAction::Advance { to } => {
                self.position.next_segment(&self.script);
                debug_assert_eq!(self.position.segment_index, to);
                if self.at_terminal() {
                    self.sounds.terminal_reached(now_ms);
                }
            }
            TimelineAction::Finish => {
                self.finished = true;
                // A script that starts at the end never reaches it through Advance
                self.sounds.terminal_reached(now_ms);
                tracing::info!("playback finished");
            }
        }
    }

    /// A real key press (typed or clicked). Activates the page first.
    pub fn press(&mut self, ch: char, now_ms: f64) {
        if self.torn_down {
            return;
        }
        self.activate(now_ms);
        self.register_press(key_glyph(ch), 1.0, now_ms);
    }

    fn register_press(&mut self, glyph: char, speed: f64, now_ms: f64) {
        let count = self.keys.press(glyph, speed, now_ms);
        let outcome = self.sounds.key_pressed(self.at_terminal(), now_ms);
        tracing::trace!(?glyph, count, ?outcome, "key pressed");
    }

    /// Jump straight to the end of the script.
    ///
    /// Cancels every pending action, commits the final default style and
    /// presses the last character's key once. Returns false when already at
    /// the end.
    pub fn skip(&mut self, now_ms: f64) -> bool {
        if self.torn_down || self.at_terminal() {
            return false;
        }
        self.activate(now_ms);

        let cancelled = self.timeline.cancel_all();
        self.position = PlaybackPosition::terminal(&self.script);
        self.finished = true;

        let last = self.script.last();
        let speed = last.speed;
        match last.text.chars().last() {
            Some(ch) => {
                self.register_press(key_glyph(ch), speed, now_ms);
            }
            None => {
                self.sounds.terminal_reached(now_ms);
            }
        }

        tracing::info!(cancelled, "playback skipped");
        true
    }

    /// Apply an input command.
    pub fn apply(&mut self, command: &PlayerCommand, now_ms: f64) -> CommandEffect {
        match command {
            PlayerCommand::Continue => CommandEffect::None,
            PlayerCommand::Activate => {
                self.activate(now_ms);
                CommandEffect::None
            }
            PlayerCommand::Press(ch) => {
                self.press(*ch, now_ms);
                CommandEffect::None
            }
            PlayerCommand::Skip => {
                if self.skip_visible() {
                    self.skip(now_ms);
                }
                CommandEffect::None
            }
            PlayerCommand::OpenLink(url) => CommandEffect::OpenLink(url.clone()),
            PlayerCommand::Quit => CommandEffect::Quit,
        }
    }

    /// Cancel everything. Nothing changes after this.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        let cancelled = self.timeline.cancel_all();
        self.sounds.teardown();
        self.torn_down = true;
        tracing::debug!(cancelled, "session torn down");
    }

    // --- Accessors ---

    pub fn script(&self) -> &Script {
        &self.script
    }

    pub fn position(&self) -> PlaybackPosition {
        self.position
    }

    /// Default style in effect for each segment.
    pub fn styles(&self) -> &[TextStyle] {
        &self.styles
    }

    /// Default style in effect for the active segment.
    pub fn committed_style(&self) -> &TextStyle {
        &self.styles[self.position.segment_index]
    }

    pub fn keys(&self) -> &KeyPressCounter {
        &self.keys
    }

    pub fn base_interval_ms(&self) -> f64 {
        self.options.base_interval_ms
    }

    pub fn sounds(&self) -> &SoundThrottler {
        &self.sounds
    }

    pub fn visits(&self) -> &VisitLedger {
        &self.visits
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the script is fully revealed.
    pub fn at_terminal(&self) -> bool {
        self.position.is_terminal(&self.script)
    }

    /// Whether the whole timeline (including the last post-delay) is done.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Number of actions still scheduled.
    pub fn pending_actions(&self) -> usize {
        self.timeline.pending()
    }

    /// Whether the skip control is shown at all.
    pub fn skip_visible(&self) -> bool {
        self.visits.count() >= self.options.skip_after_visits
    }

    /// Whether the skip control can be used right now.
    pub fn skip_enabled(&self) -> bool {
        self.skip_visible() && !self.at_terminal() && !self.torn_down
    }
}
