//! Script files loaded from disk

use typewriter::player::playback::total_duration_ms;
use typewriter::script::committed_styles;
use typewriter::{Script, ScriptError};

use super::helpers::{fixture_path, load_fixture, temp_fixture};

#[test]
fn hi_fixture_loads() {
    let script = Script::load(&fixture_path("hi.toml")).unwrap();
    assert_eq!(script.len(), 2);
    assert_eq!(script.full_text(), "Hi!");
    assert_eq!(script.segments()[1].post_delay_ms, 100);
    assert_eq!(total_duration_ms(&script, 200.0), 128.0);
}

#[test]
fn styled_fixture_commits_override_for_following_segments() {
    let script = Script::from_toml_str(&load_fixture("styled.toml")).unwrap();
    let styles = committed_styles(script.segments());

    assert_eq!(styles.len(), script.len());
    assert!(styles[0].is_plain());
    assert!(styles[1].is_plain(), "override applies after its own segment");
    assert!(styles[2].italic);
    assert!(styles[4].italic, "override stays in force");
    assert_eq!(
        script.segments()[3].url.as_deref(),
        Some("https://example.com")
    );
    assert_eq!(script.segments()[4].style.font.as_deref(), Some("serif"));
}

#[test]
fn load_reports_path_of_missing_file() {
    let err = Script::load(&fixture_path("does_not_exist.toml")).unwrap_err();
    match err {
        ScriptError::Read { path, .. } => assert!(path.ends_with("does_not_exist.toml")),
        other => panic!("expected read error, got {other:?}"),
    }
}

#[test]
fn invalid_fixtures_fail_validation() {
    assert!(matches!(
        Script::load(&fixture_path("bad_speed.toml")),
        Err(ScriptError::InvalidSpeed { index: 1, .. })
    ));
    assert!(matches!(
        Script::load(&fixture_path("bad_url.toml")),
        Err(ScriptError::InvalidUrl { index: 0, .. })
    ));
    assert!(matches!(
        Script::load(&fixture_path("bad_color.toml")),
        Err(ScriptError::InvalidColor { index: 0, .. })
    ));
    assert!(matches!(
        Script::load(&fixture_path("empty.toml")),
        Err(ScriptError::Empty)
    ));
}

#[test]
fn edited_copy_is_reloaded() {
    let (_dir, path) = temp_fixture("hi.toml");
    let mut content = std::fs::read_to_string(&path).unwrap();
    content.push_str("\n[[segment]]\ntext = \" Bye\"\n");
    std::fs::write(&path, content).unwrap();

    let script = Script::load(&path).unwrap();
    assert_eq!(script.full_text(), "Hi! Bye");
    assert_eq!(script.last().speed, 1.0);
}

#[test]
fn builtin_script_is_valid() {
    let script = Script::builtin().unwrap();
    assert!(!script.full_text().is_empty());
    assert!(total_duration_ms(&script, 200.0) > 0.0);
}
