//! Rendering components for the player.
//!
//! The screen is split into the paper (revealed text), the on-screen
//! keyboard and a one-line status bar. `render_frame` draws all three and
//! returns a `HitMap` that the mouse handler uses to find what was clicked.

mod keyboard;
mod paper;
mod status;

pub use keyboard::{
    key_at, keyboard_height, keyboard_layout, render_keyboard, KeySlot, KeyWidget, KEYBOARD_ROWS,
};
pub use paper::{
    layout_paper, render_paper, segment_style, visible_segments, visible_text, LinkRegion,
    PaperLayout,
};
pub use status::{render_status_bar, status_text, ACTIVATE_PROMPT, SKIP_LABEL};

use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    Frame,
};

use crate::player::session::Session;
use crate::tui::theme::Theme;
use crate::tui::ui::render_message_box;

/// Clickable regions of the last rendered frame.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    pub keys: Vec<KeySlot>,
    pub links: Vec<LinkRegion>,
    pub skip: Option<Rect>,
}

impl HitMap {
    /// URL of the link under a cell.
    pub fn link_at(&self, column: u16, row: u16) -> Option<&str> {
        self.links
            .iter()
            .find(|link| link.contains(column, row))
            .map(|link| link.url.as_str())
    }

    /// Glyph of the key under a cell.
    pub fn key_at(&self, column: u16, row: u16) -> Option<char> {
        key_at(&self.keys, column, row)
    }

    /// Whether a cell is on the skip control.
    pub fn on_skip(&self, column: u16, row: u16) -> bool {
        self.skip.is_some_and(|r| {
            column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
        })
    }
}

/// Split the screen into paper, keyboard and status areas.
pub fn screen_areas(area: Rect) -> (Rect, Rect, Rect) {
    let body = area.height.saturating_sub(1);
    let keyboard = keyboard_height(body.saturating_sub(1));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(keyboard),
            Constraint::Length(1),
        ])
        .split(area);

    let paper = chunks[0].inner(Margin {
        horizontal: 2,
        vertical: 1,
    });
    (paper, chunks[1], chunks[2])
}

/// Draw the whole player screen at `now_ms`.
pub fn render_frame(frame: &mut Frame, session: &Session, theme: &Theme, now_ms: f64) -> HitMap {
    let (paper_area, keyboard_area, status_area) = screen_areas(frame.area());

    let links = render_paper(
        frame,
        paper_area,
        session.script(),
        session.position(),
        session.styles(),
        theme,
    );
    if !session.is_active() {
        render_message_box(frame, paper_area, ACTIVATE_PROMPT, theme);
    }
    let keys = render_keyboard(
        frame,
        keyboard_area,
        session.keys(),
        now_ms,
        session.base_interval_ms(),
        theme,
    );
    let skip = render_status_bar(frame, status_area, session, theme);

    HitMap { keys, links, skip }
}
