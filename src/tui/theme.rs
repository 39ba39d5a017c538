//! Theme configuration for TUI and CLI
//!
//! Centralizes all color and style definitions for easy customization.
//! Provides both ratatui styles (for the player) and ANSI escape codes (for CLI).

use ratatui::style::{Color, Modifier, Style};

/// Names accepted by `display.theme`.
pub const THEME_NAMES: &[&str] = &["paper", "classic", "ocean"];

/// Theme configuration for the player.
///
/// All colors and styles are defined here for easy customization.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Paper text color (segments without an explicit color)
    pub text_primary: Color,
    /// Secondary/dimmed text color (hints, disabled controls)
    pub text_secondary: Color,
    /// Accent color for highlights and key bindings
    pub accent: Color,
    /// Color of linked text
    pub link: Color,
    /// Color of glowing text
    pub glow: Color,
    /// Key cap border at rest
    pub key_rest: Color,
    /// Key cap while held down
    pub key_down: Color,
    /// Key cap while coming back up
    pub key_rising: Color,
    /// Success color
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::paper()
    }
}

impl Theme {
    /// Paper theme - light gray ink, yellow glow and green key presses.
    /// Uses standard ANSI colors for consistent terminal rendering.
    pub fn paper() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::Green,
            link: Color::LightBlue,
            glow: Color::LightYellow,
            key_rest: Color::DarkGray,
            key_down: Color::Green,
            key_rising: Color::LightGreen,
            success: Color::Green,
        }
    }

    /// Classic terminal theme - white text.
    pub fn classic() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            accent: Color::Yellow,
            link: Color::Cyan,
            glow: Color::Yellow,
            key_rest: Color::Gray,
            key_down: Color::Yellow,
            key_rising: Color::LightYellow,
            success: Color::Green,
        }
    }

    /// Cyan/blue theme.
    pub fn ocean() -> Self {
        Self {
            text_primary: Color::Cyan,
            text_secondary: Color::DarkGray,
            accent: Color::LightCyan,
            link: Color::LightBlue,
            glow: Color::LightCyan,
            key_rest: Color::Blue,
            key_down: Color::LightCyan,
            key_rising: Color::Cyan,
            success: Color::Green,
        }
    }

    /// Look up a theme by its config name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "paper" => Some(Self::paper()),
            "classic" => Some(Self::classic()),
            "ocean" => Some(Self::ocean()),
            _ => None,
        }
    }

    /// Theme for `name`, falling back to the default with a warning.
    pub fn from_config_name(name: &str) -> Self {
        Self::by_name(name).unwrap_or_else(|| {
            tracing::warn!(theme = name, "unknown theme, using paper");
            Self::default()
        })
    }

    // Style helpers

    /// Style for primary text content.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for secondary/dimmed text.
    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for accented/highlighted text.
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for bold accented text (keybindings, etc).
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for linked text.
    pub fn link_style(&self) -> Style {
        Style::default()
            .fg(self.link)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// Style for glowing text.
    pub fn glow_style(&self) -> Style {
        Style::default().fg(self.glow).add_modifier(Modifier::BOLD)
    }

    // ANSI color helpers for CLI output

    /// Format text with the primary color (for CLI output).
    pub fn primary_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.text_primary), text, ANSI_RESET)
    }

    /// Format text with the secondary color (for CLI output).
    pub fn secondary_text(&self, text: &str) -> String {
        format!(
            "{}{}{}",
            color_to_ansi(self.text_secondary),
            text,
            ANSI_RESET
        )
    }

    /// Format text with the success color (for CLI output).
    pub fn success_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.success), text, ANSI_RESET)
    }
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // For RGB and indexed colors, fall back to reset (no color)
        _ => "",
    }
}

/// Theme used for CLI output.
pub fn current_theme() -> Theme {
    Theme::default()
}
