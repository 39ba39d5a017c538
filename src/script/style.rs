//! Text styling for script segments.
//!
//! A `TextStyle` is a set of optional attributes. Segment styles are layered
//! over the override style committed by earlier segments; `committed_styles`
//! folds the script once to compute the default in effect for every segment.

use serde::{Deserialize, Serialize};

use super::Segment;

/// Optional style attributes for a run of text.
///
/// `None` / `false` means "inherit from the layer below".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    /// Foreground color (ratatui color name or `#rrggbb`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub bold: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub italic: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub underline: bool,
    /// Render with the glow treatment
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub glow: bool,
    /// Font family hint. Terminals render a single font, so this is kept
    /// for script fidelity and shown nowhere.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
}

impl TextStyle {
    /// Layer `self` over `base`: attributes set here win, unset ones fall through.
    pub fn over(&self, base: &TextStyle) -> TextStyle {
        TextStyle {
            color: self.color.clone().or_else(|| base.color.clone()),
            bold: self.bold || base.bold,
            italic: self.italic || base.italic,
            underline: self.underline || base.underline,
            glow: self.glow || base.glow,
            font: self.font.clone().or_else(|| base.font.clone()),
        }
    }

    /// True if no attribute is set.
    pub fn is_plain(&self) -> bool {
        *self == TextStyle::default()
    }
}

/// Default style in effect for each segment.
///
/// Entry `i` is the override committed by the most recent segment before
/// `i` that defines one. A segment's own override only applies to later
/// segments, never to itself.
pub fn committed_styles(segments: &[Segment]) -> Vec<TextStyle> {
    segments
        .iter()
        .scan(TextStyle::default(), |committed, segment| {
            let current = committed.clone();
            if let Some(next) = &segment.override_style {
                *committed = next.clone();
            }
            Some(current)
        })
        .collect()
}
