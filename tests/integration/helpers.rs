//! Shared helpers for integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Directory holding the test fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Path of a fixture file.
pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Read a fixture file.
pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", name, e))
}

/// Copy a fixture into a fresh temp dir. Keep the `TempDir` alive while
/// the path is in use.
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    std::fs::copy(fixture_path(name), &path).expect("Failed to copy fixture");
    (dir, path)
}

/// The typewriter binary with its config and data isolated under `home`.
pub fn typewriter(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("typewriter").expect("binary should be built");
    cmd.env("TYPEWRITER_HOME", home)
        .env_remove("RUST_LOG");
    cmd
}
