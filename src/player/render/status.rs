//! Status bar rendering for the player.
//!
//! One line under the keyboard: a prompt or playback state on the left,
//! keybinding hints in the middle and the skip control on the right.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::player::session::Session;
use crate::tui::theme::Theme;

/// Label of the skip control.
pub const SKIP_LABEL: &str = "[ skip » ]";

/// Prompt shown until the page is activated.
pub const ACTIVATE_PROMPT: &str = "Press any key or click to start";

/// Left-hand status text for the session.
pub fn status_text(session: &Session) -> String {
    if !session.is_active() {
        ACTIVATE_PROMPT.to_string()
    } else if session.at_terminal() {
        "Done.".to_string()
    } else {
        format!(
            "typing {}/{}",
            session.position().revealed_chars(session.script()),
            session.script().total_chars()
        )
    }
}

/// Keybinding hints for the current state.
pub fn footer_keys(session: &Session) -> Vec<(&'static str, &'static str)> {
    let mut keys = Vec::with_capacity(3);
    if session.skip_enabled() {
        keys.push(("tab", "skip"));
    }
    keys.push(("click", "link"));
    keys.push(("esc", "quit"));
    keys
}

/// Build styled spans for footer keybinding hints.
///
/// Each key is highlighted with the theme accent color, descriptions use
/// the secondary text color, and entries are separated by " | ".
fn build_footer_spans(keys: &[(&str, &str)], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(keys.len() * 3);
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                " | ".to_string(),
                Style::default().fg(theme.text_secondary),
            ));
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default().fg(theme.accent),
        ));
        spans.push(Span::styled(
            format!(": {}", desc),
            Style::default().fg(theme.text_secondary),
        ));
    }
    spans
}

/// Split a status line into status text, footer hints and skip control.
///
/// The skip column is empty when the control is hidden.
pub fn status_columns(area: Rect, status: &str, skip_visible: bool) -> [Rect; 3] {
    let skip_width = if skip_visible { SKIP_LABEL.width() as u16 } else { 0 };
    Layout::horizontal([
        Constraint::Length(status.width() as u16 + 1),
        Constraint::Fill(1),
        Constraint::Length(skip_width),
    ])
    .areas(area)
}

/// Render the status bar. Returns the skip control's area when it is shown.
pub fn render_status_bar(frame: &mut Frame, area: Rect, session: &Session, theme: &Theme) -> Option<Rect> {
    if area.height == 0 || area.width == 0 {
        return None;
    }

    let status = status_text(session);
    let [left, middle, right] = status_columns(area, &status, session.skip_visible());

    let status_style = if session.is_active() {
        theme.text_secondary_style()
    } else {
        theme.accent_bold_style()
    };
    frame.render_widget(Paragraph::new(status).style(status_style), left);

    let footer = Paragraph::new(Line::from(build_footer_spans(&footer_keys(session), theme)))
        .alignment(Alignment::Center);
    frame.render_widget(footer, middle);

    if !session.skip_visible() || right.width == 0 {
        return None;
    }
    let style = if session.skip_enabled() {
        theme.accent_bold_style()
    } else {
        theme
            .text_secondary_style()
            .add_modifier(Modifier::DIM | Modifier::CROSSED_OUT)
    };
    frame.render_widget(Paragraph::new(SKIP_LABEL).style(style), right);
    Some(right)
}
