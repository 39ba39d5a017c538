//! Typewriter scripts
//!
//! A script is an ordered, non-empty list of segments. Each segment carries
//! its text plus the timing and styling used while it is typed out.
//!
//! Scripts are authored as TOML:
//!
//! ```toml
//! [[segment]]
//! text = "Hello.\n"
//! speed = 2.0
//! post_delay = 400
//!
//! [[segment]]
//! text = "docs"
//! url = "https://ratatui.rs"
//! underline = true
//! ```

mod error;
pub mod style;

use std::fs;
use std::path::Path;
use std::str::FromStr;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

pub use error::ScriptError;
pub use style::{committed_styles, TextStyle};

/// Built-in script embedded in the binary.
const DEFAULT_SCRIPT: &str = include_str!("default_script.toml");

fn default_speed() -> f64 {
    1.0
}

/// One authored unit of script text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Text revealed one character at a time
    pub text: String,
    /// Characters per base interval (higher is faster)
    #[serde(default = "default_speed")]
    pub speed: f64,
    /// Pause after the segment completes, in milliseconds
    #[serde(default, rename = "post_delay")]
    pub post_delay_ms: u64,
    /// Hyperlink target for the revealed text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// The segment's own style attributes
    #[serde(flatten)]
    pub style: TextStyle,
    /// Default style for all later segments, committed once this one completes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_style: Option<TextStyle>,
}

impl Default for Segment {
    fn default() -> Self {
        Self {
            text: String::new(),
            speed: default_speed(),
            post_delay_ms: 0,
            url: None,
            style: TextStyle::default(),
            override_style: None,
        }
    }
}

impl Segment {
    /// Create a plain segment with the given text and speed.
    pub fn new(text: impl Into<String>, speed: f64) -> Self {
        Self {
            text: text.into(),
            speed,
            ..Self::default()
        }
    }

    /// Builder: set the post-segment delay.
    pub fn with_post_delay(mut self, ms: u64) -> Self {
        self.post_delay_ms = ms;
        self
    }

    /// Builder: set the hyperlink target.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Builder: set the segment's own style.
    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    /// Builder: set the override style committed after this segment.
    pub fn with_override(mut self, style: TextStyle) -> Self {
        self.override_style = Some(style);
        self
    }

    /// Number of characters in the text.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Text truncated to the first `chars` characters (clamped to the length).
    pub fn revealed(&self, chars: usize) -> &str {
        match self.text.char_indices().nth(chars) {
            Some((byte, _)) => &self.text[..byte],
            None => &self.text,
        }
    }
}

/// On-disk layout of a script file.
#[derive(Debug, Deserialize)]
struct ScriptFile {
    #[serde(default)]
    segment: Vec<Segment>,
}

/// A validated, non-empty sequence of segments.
#[derive(Debug, Clone, PartialEq)]
pub struct Script {
    segments: Vec<Segment>,
}

impl Script {
    /// Validate and wrap a list of segments.
    pub fn new(segments: Vec<Segment>) -> Result<Self, ScriptError> {
        if segments.is_empty() {
            return Err(ScriptError::Empty);
        }
        for (index, segment) in segments.iter().enumerate() {
            validate_segment(index, segment)?;
        }
        Ok(Self { segments })
    }

    /// Parse a script from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ScriptError> {
        let file: ScriptFile = toml::from_str(content)?;
        Self::new(file.segment)
    }

    /// Load a script from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let content = fs::read_to_string(path).map_err(|source| ScriptError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// The script embedded in the binary.
    pub fn builtin() -> Result<Self, ScriptError> {
        Self::from_toml_str(DEFAULT_SCRIPT)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segment(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Index of the last segment.
    pub fn last_index(&self) -> usize {
        self.segments.len() - 1
    }

    /// The last segment (scripts are never empty).
    pub fn last(&self) -> &Segment {
        &self.segments[self.last_index()]
    }

    /// Total number of characters across all segments.
    pub fn total_chars(&self) -> usize {
        self.segments.iter().map(Segment::char_len).sum()
    }

    /// The full text of the script.
    pub fn full_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

fn validate_segment(index: usize, segment: &Segment) -> Result<(), ScriptError> {
    if !(segment.speed.is_finite() && segment.speed > 0.0) {
        return Err(ScriptError::InvalidSpeed {
            index,
            speed: segment.speed,
        });
    }

    let colors = std::iter::once(&segment.style)
        .chain(segment.override_style.iter())
        .filter_map(|style| style.color.as_ref());
    for color in colors {
        if Color::from_str(color).is_err() {
            return Err(ScriptError::InvalidColor {
                index,
                color: color.clone(),
            });
        }
    }

    if let Some(url) = &segment.url {
        if !crate::links::is_supported_url(url) {
            return Err(ScriptError::InvalidUrl {
                index,
                url: url.clone(),
            });
        }
    }

    Ok(())
}
