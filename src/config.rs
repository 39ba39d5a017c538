//! Configuration management
//!
//! Settings live in `<config_dir>/typewriter/config.toml`. Every field has a
//! default, so a missing file or a partial file both load cleanly.
//! `TYPEWRITER_HOME` replaces the platform directories (config and data)
//! with a single directory.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable overriding the config and data directories.
pub const HOME_ENV: &str = "TYPEWRITER_HOME";

const APP_DIR: &str = "typewriter";
const CONFIG_FILE: &str = "config.toml";

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub playback: PlaybackConfig,
    pub session: SessionConfig,
    pub sound: SoundConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// Typing speed and main loop timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Time per character at speed 1, in milliseconds
    pub base_interval_ms: f64,
    /// Main loop poll interval in milliseconds
    pub tick_ms: u64,
    /// Quit automatically once the script has finished
    pub exit_on_finish: bool,
    /// How long to keep the finished page on screen before exiting
    pub linger_ms: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            base_interval_ms: 200.0,
            tick_ms: 16,
            exit_on_finish: false,
            linger_ms: 1500,
        }
    }
}

/// Activation gating and the skip control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// First-time visitors must press a key or click before typing starts
    pub require_activation: bool,
    /// Show the skip control from this visit onwards
    pub skip_after_visits: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            require_activation: true,
            skip_after_visits: 2,
        }
    }
}

/// How sounds are played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoundBackend {
    /// No sound at all
    None,
    /// Terminal bell for the finished sound
    #[default]
    Bell,
    /// External player command with sound files
    Command,
}

/// Sound effect settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundConfig {
    pub backend: SoundBackend,
    /// Maximum key sounds playing at once
    pub max_concurrent: usize,
    /// How long a key sound occupies a slot, in milliseconds
    pub key_duration_ms: f64,
    /// Length of the finished sound, in milliseconds
    pub finished_duration_ms: f64,
    /// Player program for the `command` backend
    pub player: String,
    /// Key click files for the `command` backend (one per variant)
    pub key_files: Vec<PathBuf>,
    /// Finished sound file for the `command` backend
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_file: Option<PathBuf>,
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            backend: SoundBackend::default(),
            max_concurrent: 15,
            key_duration_ms: 150.0,
            finished_duration_ms: 1200.0,
            player: default_player().to_string(),
            key_files: Vec::new(),
            finished_file: None,
        }
    }
}

fn default_player() -> &'static str {
    if cfg!(target_os = "macos") {
        "afplay"
    } else {
        "paplay"
    }
}

/// Look and feel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Theme name: paper, classic or ocean
    pub theme: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            theme: "paper".to_string(),
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level when neither -v nor RUST_LOG is given
    pub level: String,
    /// Log file used while the player owns the terminal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Load config from the default path, falling back to defaults.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Parse and validate config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Write config to the default path, creating the directory if needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&path, self.to_toml_string()?)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// Serialize as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check values that would break playback.
    pub fn validate(&self) -> Result<()> {
        let base = self.playback.base_interval_ms;
        if !(base.is_finite() && base > 0.0) {
            bail!("playback.base_interval_ms must be positive, got {}", base);
        }
        if self.playback.tick_ms == 0 {
            bail!("playback.tick_ms must be at least 1");
        }
        if !(self.sound.key_duration_ms >= 0.0 && self.sound.finished_duration_ms >= 0.0) {
            bail!("sound durations must not be negative");
        }
        Ok(())
    }

    /// Path of the config file.
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Directory holding the config file.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(home) = home_override() {
            return Ok(home);
        }
        dirs::config_dir()
            .map(|d| d.join(APP_DIR))
            .context("Could not determine config directory")
    }

    /// Directory holding persisted state (the visit ledger).
    pub fn data_dir() -> Result<PathBuf> {
        if let Some(home) = home_override() {
            return Ok(home);
        }
        dirs::data_local_dir()
            .map(|d| d.join(APP_DIR))
            .context("Could not determine data directory")
    }
}

fn home_override() -> Option<PathBuf> {
    std::env::var_os(HOME_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
