//! UI rendering helpers for TUI
//!
//! Overlays drawn on top of the player.

use ratatui::{
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::theme::Theme;

/// Render a small bordered message box centered in `area`.
pub fn render_message_box(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
    let width = (text.chars().count() as u16 + 4).min(area.width);
    let height = 3.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    let box_area = Rect::new(x, y, width, height);

    frame.render_widget(Clear, box_area);
    let message = Paragraph::new(text.to_string())
        .style(theme.accent_bold_style())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.accent_style()),
        );
    frame.render_widget(message, box_area);
}
