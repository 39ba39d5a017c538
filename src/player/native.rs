//! Native player main loop.
//!
//! Single-threaded: poll crossterm for input with the tick interval as the
//! timeout, fire due actions, redraw. The session clock is milliseconds
//! since the loop started.

use std::time::{Duration, Instant};

use anyhow::Result;

use crate::config::Config;
use crate::links::Links;
use crate::player::input::handle_event;
use crate::player::render::{render_frame, HitMap};
use crate::player::session::{CommandEffect, Session, SessionOptions};
use crate::player::state::PlayerCommand;
use crate::script::Script;
use crate::sound::{sink_from_config, NullSink, SoundSink, SoundThrottler};
use crate::tui::{App, Theme};
use crate::visits::{VisitLedger, VisitStore};

/// How a play session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackResult {
    /// The whole script played (or was skipped) before leaving
    Finished,
    /// The user quit before the end
    Interrupted,
}

/// Per-run switches from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayOptions {
    pub no_sound: bool,
    pub exit_on_finish: bool,
}

/// Build the sound throttler for `config`.
pub fn build_throttler(config: &Config, no_sound: bool) -> SoundThrottler {
    let sink: Box<dyn SoundSink> = if no_sound {
        Box::new(NullSink)
    } else {
        sink_from_config(&config.sound)
    };
    tracing::debug!(sink = sink.name(), "sound sink selected");
    SoundThrottler::new(
        sink,
        config.sound.max_concurrent,
        config.sound.key_duration_ms,
        config.sound.finished_duration_ms,
    )
}

/// Visit ledger backed by the default store, or an in-memory one if the
/// data directory cannot be determined.
pub fn default_ledger() -> VisitLedger {
    match VisitStore::open_default() {
        Ok(store) => VisitLedger::from_store(store),
        Err(e) => {
            tracing::warn!(error = %e, "visit count will not be saved");
            VisitLedger::in_memory(0)
        }
    }
}

/// Everything the loop needs besides the terminal.
pub struct Player {
    session: Session,
    links: Links,
    hits: HitMap,
    exit_on_finish: bool,
    linger_ms: f64,
    finished_at: Option<f64>,
}

impl Player {
    pub fn new(session: Session, links: Links, exit_on_finish: bool, linger_ms: u64) -> Self {
        Self {
            session,
            links,
            hits: HitMap::default(),
            exit_on_finish,
            linger_ms: linger_ms as f64,
            finished_at: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Remember the clickable regions of the frame just drawn.
    pub fn set_hits(&mut self, hits: HitMap) {
        self.hits = hits;
    }

    pub fn hits(&self) -> &HitMap {
        &self.hits
    }

    /// Advance the session clock.
    pub fn tick(&mut self, now_ms: f64) {
        self.session.tick(now_ms);
        if self.session.is_finished() && self.finished_at.is_none() {
            self.finished_at = Some(now_ms);
        }
    }

    /// Apply an input command. Returns true when the loop should stop.
    pub fn handle(&mut self, command: &PlayerCommand, now_ms: f64) -> bool {
        match self.session.apply(command, now_ms) {
            CommandEffect::None => false,
            CommandEffect::OpenLink(url) => {
                if let Err(e) = self.links.open(&url) {
                    tracing::warn!(url, error = %e, "failed to open link");
                }
                false
            }
            CommandEffect::Quit => true,
        }
    }

    /// Whether `--exit-on-finish` says it is time to leave.
    pub fn should_exit(&self, now_ms: f64) -> bool {
        self.exit_on_finish
            && self
                .finished_at
                .is_some_and(|at| now_ms - at >= self.linger_ms)
    }

    /// Stop everything and report how the run ended.
    pub fn finish(mut self) -> PlaybackResult {
        let result = if self.session.at_terminal() {
            PlaybackResult::Finished
        } else {
            PlaybackResult::Interrupted
        };
        self.session.teardown();
        result
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

/// Play `script` full-screen until the user quits (or it finishes, with
/// `exit_on_finish`).
pub fn play_script(script: Script, config: &Config, options: PlayOptions) -> Result<PlaybackResult> {
    let theme = Theme::from_config_name(&config.display.theme);
    let throttler = build_throttler(config, options.no_sound);
    let visits = default_ledger();
    let tick = Duration::from_millis(config.playback.tick_ms);
    let exit_on_finish = options.exit_on_finish || config.playback.exit_on_finish;

    let mut app = App::new()?;
    let start = Instant::now();
    let session = Session::mount(
        script,
        SessionOptions::from(config),
        throttler,
        visits,
        elapsed_ms(start),
    );
    let mut player = Player::new(session, Links::new(), exit_on_finish, config.playback.linger_ms);

    tracing::info!(
        segments = player.session().script().len(),
        visits = player.session().visits().count(),
        "player started"
    );

    loop {
        let now = elapsed_ms(start);
        player.tick(now);
        if player.should_exit(now) {
            break;
        }

        let mut hits = HitMap::default();
        app.draw(|frame| hits = render_frame(frame, player.session(), &theme, now))?;
        player.set_hits(hits);

        if let Some(event) = app.next_event(tick)? {
            let command = handle_event(event, player.hits());
            if player.handle(&command, elapsed_ms(start)) {
                break;
            }
        }
    }

    let result = player.finish();
    app.restore()?;
    tracing::info!(?result, "player stopped");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::links::{LinkError, LinkOpener};
    use crate::script::Segment;
    use std::sync::{Arc, Mutex};

    struct FakeOpener(Arc<Mutex<Vec<String>>>);

    impl LinkOpener for FakeOpener {
        fn name(&self) -> &'static str {
            "fake"
        }

        fn is_available(&self) -> bool {
            true
        }

        fn open(&self, url: &str) -> Result<(), LinkError> {
            self.0.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }

    fn player(exit_on_finish: bool) -> (Player, Arc<Mutex<Vec<String>>>) {
        let script = Script::new(vec![Segment::new("ab", 1.0).with_url("https://example.com")]).unwrap();
        let session = Session::mount(
            script,
            SessionOptions::default(),
            build_throttler(&Config::default(), true),
            VisitLedger::in_memory(1),
            0.0,
        );
        let opened = Arc::new(Mutex::new(Vec::new()));
        let links = Links::with_openers(vec![Box::new(FakeOpener(Arc::clone(&opened)))]);
        (Player::new(session, links, exit_on_finish, 500), opened)
    }

    #[test]
    fn quit_stops_the_loop() {
        let (mut player, _) = player(false);
        assert!(!player.handle(&PlayerCommand::Press('x'), 0.0));
        assert!(player.handle(&PlayerCommand::Quit, 0.0));
        assert_eq!(player.finish(), PlaybackResult::Interrupted);
    }

    #[test]
    fn open_link_uses_opener() {
        let (mut player, opened) = player(false);
        assert!(!player.handle(&PlayerCommand::OpenLink("https://example.com".into()), 0.0));
        assert_eq!(*opened.lock().unwrap(), ["https://example.com"]);
    }

    #[test]
    fn unsupported_link_is_logged_not_fatal() {
        let (mut player, opened) = player(false);
        assert!(!player.handle(&PlayerCommand::OpenLink("file:///etc/passwd".into()), 0.0));
        assert!(opened.lock().unwrap().is_empty());
    }

    #[test]
    fn exit_on_finish_waits_for_linger() {
        let (mut player, _) = player(true);
        player.tick(400.0);
        assert!(player.session().is_finished());
        assert!(!player.should_exit(400.0));
        assert!(!player.should_exit(899.0));
        assert!(player.should_exit(900.0));
        assert_eq!(player.finish(), PlaybackResult::Finished);
    }

    #[test]
    fn without_exit_on_finish_the_player_stays() {
        let (mut player, _) = player(false);
        player.tick(10_000.0);
        assert!(!player.should_exit(1_000_000.0));
    }

    #[test]
    fn skip_counts_as_finished() {
        let (mut player, _) = player(true);
        player.handle(&PlayerCommand::Skip, 10.0);
        player.tick(20.0);
        assert!(player.should_exit(520.0));
        assert_eq!(player.finish(), PlaybackResult::Finished);
    }
}
