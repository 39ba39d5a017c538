//! Sound sinks.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use super::{Sound, SoundSink};
use crate::config::{SoundBackend, SoundConfig};

/// Plays nothing.
#[derive(Debug, Default)]
pub struct NullSink;

impl SoundSink for NullSink {
    fn name(&self) -> &'static str {
        "none"
    }

    fn play(&mut self, _sound: Sound) {}
}

/// Rings the terminal bell for the finished sound.
///
/// Key clicks stay silent: a bell per character is not a typewriter.
#[derive(Debug, Default)]
pub struct BellSink;

impl SoundSink for BellSink {
    fn name(&self) -> &'static str {
        "bell"
    }

    fn play(&mut self, sound: Sound) {
        if sound == Sound::Finished {
            let mut stdout = io::stdout();
            let _ = stdout.write_all(b"\x07");
            let _ = stdout.flush();
        }
    }
}

/// Spawns an external audio player (`paplay`, `afplay`, ...) per sound.
#[derive(Debug, Clone)]
pub struct CommandSink {
    program: String,
    key_files: Vec<PathBuf>,
    finished_file: Option<PathBuf>,
}

impl CommandSink {
    pub fn new(
        program: impl Into<String>,
        key_files: Vec<PathBuf>,
        finished_file: Option<PathBuf>,
    ) -> Self {
        Self {
            program: program.into(),
            key_files,
            finished_file,
        }
    }

    /// File to play for `sound`, if one is configured.
    pub fn file_for(&self, sound: Sound) -> Option<&PathBuf> {
        match sound {
            Sound::Key(variant) => self.key_files.get(variant),
            Sound::Finished => self.finished_file.as_ref(),
        }
    }

    /// Build the command that plays `sound`.
    pub fn command(&self, sound: Sound) -> Option<Command> {
        let file = self.file_for(sound)?;
        let mut command = Command::new(&self.program);
        command
            .arg(file)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        Some(command)
    }
}

impl SoundSink for CommandSink {
    fn name(&self) -> &'static str {
        "command"
    }

    fn key_variants(&self) -> usize {
        self.key_files.len()
    }

    fn play(&mut self, sound: Sound) {
        let Some(mut command) = self.command(sound) else {
            return;
        };
        match command.spawn() {
            Ok(mut child) => {
                std::thread::spawn(move || {
                    let _ = child.wait();
                });
            }
            Err(e) => {
                tracing::warn!(program = %self.program, error = %e, "failed to start audio player");
            }
        }
    }
}

/// Build the sink selected by the sound configuration.
pub fn sink_from_config(config: &SoundConfig) -> Box<dyn SoundSink> {
    match config.backend {
        SoundBackend::None => Box::new(NullSink),
        SoundBackend::Bell => Box::new(BellSink),
        SoundBackend::Command => Box::new(CommandSink::new(
            config.player.clone(),
            config.key_files.clone(),
            config.finished_file.clone(),
        )),
    }
}
