//! Command-line behavior of the typewriter binary

use predicates::prelude::*;
use tempfile::TempDir;

use super::helpers::{fixture_path, typewriter};

fn home() -> TempDir {
    TempDir::new().expect("Failed to create temp home")
}

#[test]
fn help_lists_subcommands() {
    let home = home();
    typewriter(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("visits"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_prints_name() {
    let home = home();
    typewriter(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("typewriter"));
}

#[test]
fn check_reports_script_statistics() {
    let home = home();
    typewriter(home.path())
        .arg("check")
        .arg(fixture_path("hi.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("is valid"))
        .stdout(predicate::str::is_match(r"segments:\S*\s+2").unwrap())
        .stdout(predicate::str::is_match(r"characters:\S*\s+3").unwrap())
        .stdout(predicate::str::is_match(r"links:\S*\s+0").unwrap())
        .stdout(predicate::str::contains("00:00.1"));
}

#[test]
fn check_accepts_styled_script() {
    let home = home();
    typewriter(home.path())
        .arg("check")
        .arg(fixture_path("styled.toml"))
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"segments:\S*\s+5").unwrap())
        .stdout(predicate::str::is_match(r"links:\S*\s+1").unwrap());
}

#[test]
fn check_uses_base_interval_from_config() {
    let home = home();
    std::fs::write(
        home.path().join("config.toml"),
        "[playback]\nbase_interval_ms = 2000.0\n",
    )
    .unwrap();

    // 2000/50 * 2 + 2000/10 + 100 = 380
    typewriter(home.path())
        .arg("check")
        .arg(fixture_path("hi.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("00:00.3"));
}

#[test]
fn check_rejects_zero_speed() {
    let home = home();
    typewriter(home.path())
        .arg("check")
        .arg(fixture_path("bad_speed.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid script"))
        .stderr(predicate::str::contains("speed must be a positive number"));
}

#[test]
fn check_rejects_unsupported_link() {
    let home = home();
    typewriter(home.path())
        .arg("check")
        .arg(fixture_path("bad_url.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported link"));
}

#[test]
fn check_rejects_unknown_color() {
    let home = home();
    typewriter(home.path())
        .arg("check")
        .arg(fixture_path("bad_color.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown color 'not-a-color'"));
}

#[test]
fn check_rejects_empty_script() {
    let home = home();
    typewriter(home.path())
        .arg("check")
        .arg(fixture_path("empty.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("no segments"));
}

#[test]
fn check_reports_missing_file() {
    let home = home();
    typewriter(home.path())
        .arg("check")
        .arg(home.path().join("nope.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read script"));
}

#[test]
fn visits_starts_at_zero() {
    let home = home();
    typewriter(home.path())
        .arg("visits")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"visits:\S* 0\b").unwrap())
        .stdout(predicate::str::contains("visits.json"));
}

#[test]
fn visits_reset_clears_counter() {
    let home = home();
    std::fs::write(
        home.path().join("visits.json"),
        r#"{"visits": 7, "last_visit": "2024-01-01T00:00:00+00:00"}"#,
    )
    .unwrap();

    typewriter(home.path())
        .arg("visits")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"visits:\S* 7\b").unwrap());

    typewriter(home.path())
        .args(["visits", "--reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Visit counter reset."));

    typewriter(home.path())
        .arg("visits")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"visits:\S* 0\b").unwrap());
}

#[test]
fn config_path_points_into_home() {
    let home = home();
    let expected = home.path().join("config.toml");
    typewriter(home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.display().to_string()));
}

#[test]
fn config_init_refuses_to_overwrite() {
    let home = home();
    typewriter(home.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));
    assert!(home.path().join("config.toml").exists());

    typewriter(home.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    typewriter(home.path())
        .args(["config", "init", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));
}

#[test]
fn config_init_works_with_broken_config() {
    let home = home();
    std::fs::write(home.path().join("config.toml"), "not = [valid").unwrap();

    typewriter(home.path())
        .args(["config", "init", "--force"])
        .assert()
        .success();

    typewriter(home.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[playback]"));
}

#[test]
fn config_show_prints_sections() {
    let home = home();
    typewriter(home.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[playback]"))
        .stdout(predicate::str::contains("[session]"))
        .stdout(predicate::str::contains("[sound]"));
}

#[test]
fn completions_bash_generates_script() {
    let home = home();
    typewriter(home.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("typewriter"));
}

#[test]
fn play_requires_terminal() {
    let home = home();
    typewriter(home.path())
        .args(["play", "--script"])
        .arg(fixture_path("hi.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("interactive terminal"));
}

#[test]
fn play_reports_bad_script_before_terminal_check() {
    let home = home();
    typewriter(home.path())
        .args(["play", "--script"])
        .arg(fixture_path("bad_speed.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid script"));
}

#[test]
fn bare_invocation_plays_builtin_script() {
    let home = home();
    typewriter(home.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("interactive terminal"));
}
