//! Script loading errors.

use std::path::PathBuf;

/// Errors that can occur while loading or validating a script.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Script has no segments")]
    Empty,

    #[error("Segment {index}: speed must be a positive number, got {speed}")]
    InvalidSpeed { index: usize, speed: f64 },

    #[error("Segment {index}: unknown color '{color}'")]
    InvalidColor { index: usize, color: String },

    #[error("Segment {index}: unsupported link '{url}' (expected http, https or mailto)")]
    InvalidUrl { index: usize, url: String },

    #[error("Failed to parse script: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to read script {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
