//! Full playback runs through the public session API

use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tempfile::TempDir;

use typewriter::player::playback::total_duration_ms;
use typewriter::player::render::visible_text;
use typewriter::player::PlayerCommand;
use typewriter::sound::{NullSink, Sound, SoundSink, SoundThrottler};
use typewriter::visits::{VisitLedger, VisitStore};
use typewriter::{Script, Session, SessionOptions};

use super::helpers::fixture_path;

/// Sink that records every sound and the peak in-flight count.
struct CountingSink {
    played: Rc<RefCell<Vec<Sound>>>,
}

impl SoundSink for CountingSink {
    fn name(&self) -> &'static str {
        "counting"
    }

    fn play(&mut self, sound: Sound) {
        self.played.borrow_mut().push(sound);
    }
}

fn options() -> SessionOptions {
    SessionOptions {
        base_interval_ms: 200.0,
        require_activation: true,
        skip_after_visits: 2,
    }
}

fn quiet() -> SoundThrottler {
    SoundThrottler::with_rng(Box::new(NullSink), 15, 100.0, 500.0, SmallRng::seed_from_u64(7))
}

/// Tick every millisecond until the session finishes or `limit` passes.
fn run_to_end(session: &mut Session, start: f64, limit: f64) -> f64 {
    let mut now = start;
    while !session.is_finished() && now <= limit {
        session.tick(now);
        now += 1.0;
    }
    now
}

#[test]
fn builtin_script_reveals_everything() {
    let script = Script::builtin().unwrap();
    let full = script.full_text();
    let duration = total_duration_ms(&script, 200.0);

    let mut session = Session::mount(script, options(), quiet(), VisitLedger::in_memory(1), 0.0);
    run_to_end(&mut session, 0.0, duration + 10.0);

    assert!(session.is_finished());
    assert!(session.at_terminal());
    assert_eq!(visible_text(session.script(), session.position()), full);
    assert_eq!(session.pending_actions(), 0);
}

#[test]
fn hi_fixture_matches_documented_timing() {
    let script = Script::load(&fixture_path("hi.toml")).unwrap();
    let mut session = Session::mount(script, options(), quiet(), VisitLedger::in_memory(1), 0.0);

    session.tick(3.0);
    assert_eq!(visible_text(session.script(), session.position()), "");
    session.tick(4.0);
    assert_eq!(visible_text(session.script(), session.position()), "H");
    session.tick(8.0);
    assert_eq!(visible_text(session.script(), session.position()), "Hi");
    session.tick(28.0);
    assert_eq!(visible_text(session.script(), session.position()), "Hi!");
    assert!(session.at_terminal());
    assert!(!session.is_finished(), "post delay still pending");
    session.tick(128.0);
    assert!(session.is_finished());
}

#[test]
fn skip_lands_where_natural_playback_ends() {
    let script = Script::load(&fixture_path("styled.toml")).unwrap();
    let duration = total_duration_ms(&script, 200.0);

    let mut natural =
        Session::mount(script.clone(), options(), quiet(), VisitLedger::in_memory(2), 0.0);
    run_to_end(&mut natural, 0.0, duration + 10.0);

    let mut skipped = Session::mount(script, options(), quiet(), VisitLedger::in_memory(2), 0.0);
    skipped.tick(duration / 2.0);
    assert_eq!(
        skipped.apply(&PlayerCommand::Skip, duration / 2.0),
        typewriter::player::CommandEffect::None
    );

    assert_eq!(skipped.position(), natural.position());
    assert_eq!(skipped.committed_style(), natural.committed_style());
    assert_eq!(
        visible_text(skipped.script(), skipped.position()),
        visible_text(natural.script(), natural.position())
    );
    assert_eq!(skipped.pending_actions(), 0);
    assert!(!skipped.skip_enabled());
}

#[test]
fn visits_persist_across_sessions() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("visits.json");
    let mount = || {
        let ledger = VisitLedger::from_store(VisitStore::new(&path));
        Session::mount(
            Script::load(&fixture_path("hi.toml")).unwrap(),
            options(),
            quiet(),
            ledger,
            0.0,
        )
    };

    let mut first = mount();
    assert!(!first.is_active(), "first visit waits for input");
    first.apply(&PlayerCommand::Activate, 10.0);
    assert!(first.is_active());
    assert!(!first.skip_visible());
    first.teardown();

    let second = mount();
    assert!(second.is_active(), "returning visitors start right away");
    assert_eq!(second.visits().count(), 2);
    assert!(second.skip_visible());

    let stored = VisitStore::new(&path).load().unwrap();
    assert_eq!(stored.visits, 2);
    assert!(stored.last_visit.is_some());
}

#[test]
fn skip_hidden_on_first_visit_ignores_command() {
    let script = Script::load(&fixture_path("hi.toml")).unwrap();
    let mut session = Session::mount(script, options(), quiet(), VisitLedger::in_memory(0), 0.0);
    session.activate(0.0);

    session.apply(&PlayerCommand::Skip, 1.0);
    assert!(!session.at_terminal());
    assert!(session.pending_actions() > 0);
}

#[test]
fn sound_budget_is_never_exceeded() {
    let played = Rc::new(RefCell::new(Vec::new()));
    let sink = CountingSink {
        played: Rc::clone(&played),
    };
    let sounds = SoundThrottler::with_rng(Box::new(sink), 3, 100.0, 500.0, SmallRng::seed_from_u64(3));
    let script = Script::builtin().unwrap();
    let duration = total_duration_ms(&script, 200.0);

    let mut session = Session::mount(script, options(), sounds, VisitLedger::in_memory(1), 0.0);
    let mut now = 0.0;
    while !session.is_finished() && now <= duration + 10.0 {
        session.tick(now);
        // Hammer the keyboard on top of the typing
        session.press('a', now);
        assert!(session.sounds().in_flight() <= 3);
        now += 1.0;
    }

    let played = played.borrow();
    let finished = played.iter().filter(|s| **s == Sound::Finished).count();
    assert_eq!(finished, 1, "finished sound plays exactly once");
    assert!(played.iter().any(|s| matches!(s, Sound::Key(_))));
}

#[test]
fn teardown_stops_all_activity() {
    let script = Script::load(&fixture_path("hi.toml")).unwrap();
    let mut session = Session::mount(script, options(), quiet(), VisitLedger::in_memory(1), 0.0);
    session.tick(4.0);
    session.teardown();

    let before = session.position();
    assert_eq!(session.tick(1_000.0), 0);
    session.press('x', 1_000.0);
    assert!(!session.skip(1_000.0));
    assert_eq!(session.position(), before);
    assert_eq!(session.pending_actions(), 0);
}
