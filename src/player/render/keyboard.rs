//! On-screen keyboard rendering.
//!
//! `keyboard_layout` is the single source of key positions: the renderer
//! draws from it and the mouse handler hit-tests against it.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use crate::player::keys::{KeyFrame, KeyPressCounter, PressRecord};
use crate::tui::theme::Theme;

/// Keys of each keyboard row, top to bottom.
pub const KEYBOARD_ROWS: [&[char]; 5] = [
    &['1', '2', '3', '4', '5', '6', '7', '8', '9', '0', '-'],
    &['Q', 'W', 'E', 'R', 'T', 'Y', 'U', 'I', 'O', 'P'],
    &['A', 'S', 'D', 'F', 'G', 'H', 'J', 'K', 'L', ';', '\''],
    &['Z', 'X', 'C', 'V', 'B', 'N', 'M', ',', '.'],
    &[' '],
];

/// Left indent of each row, in columns at full key width.
const ROW_OFFSETS: [u16; 5] = [0, 0, 6, 3, 0];

/// Widest row, in keys.
const MAX_ROW_KEYS: u16 = 11;
/// The space bar spans this many key widths.
const SPACE_KEYS: u16 = 5;

pub const KEY_WIDTH: u16 = 5;
pub const KEY_HEIGHT: u16 = 3;
const MIN_KEY_WIDTH: u16 = 3;

/// Rows needed for the full-size keyboard.
pub const FULL_HEIGHT: u16 = KEY_HEIGHT * KEYBOARD_ROWS.len() as u16;
/// Rows needed for the compact keyboard.
pub const COMPACT_HEIGHT: u16 = KEYBOARD_ROWS.len() as u16;

/// Where one key sits on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySlot {
    pub glyph: char,
    pub area: Rect,
}

/// Keyboard height to reserve out of `available` rows.
///
/// Full-size keys when there is room for them plus a few paper lines,
/// otherwise one row per keyboard row.
pub fn keyboard_height(available: u16) -> u16 {
    if available >= FULL_HEIGHT + 6 {
        FULL_HEIGHT
    } else {
        COMPACT_HEIGHT.min(available)
    }
}

/// Position every key inside `area`, centered horizontally.
///
/// Keys that would fall outside `area` are left out.
pub fn keyboard_layout(area: Rect) -> Vec<KeySlot> {
    let key_h = if area.height >= FULL_HEIGHT {
        KEY_HEIGHT
    } else {
        1
    };
    let key_w = (area.width / (MAX_ROW_KEYS + 1)).clamp(MIN_KEY_WIDTH, KEY_WIDTH);
    let indent = |row: usize| ROW_OFFSETS[row] * key_w / KEY_WIDTH;
    let total_w = KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(row, keys)| indent(row) + keys.len() as u16 * key_w)
        .max()
        .unwrap_or(0);
    let left = area.x + area.width.saturating_sub(total_w) / 2;
    let right = area.x + area.width;

    let mut slots = Vec::with_capacity(48);
    for (row_index, row) in KEYBOARD_ROWS.iter().enumerate() {
        let y = area.y + row_index as u16 * key_h;
        if y + key_h > area.y + area.height {
            break;
        }
        if row[..] == [' '] {
            let width = SPACE_KEYS * key_w;
            let x = left + total_w.saturating_sub(width) / 2;
            if x + width <= right {
                slots.push(KeySlot {
                    glyph: ' ',
                    area: Rect::new(x, y, width, key_h),
                });
            }
            continue;
        }
        for (col, &glyph) in row.iter().enumerate() {
            let x = left + indent(row_index) + col as u16 * key_w;
            if x + key_w > right {
                break;
            }
            slots.push(KeySlot {
                glyph,
                area: Rect::new(x, y, key_w, key_h),
            });
        }
    }
    slots
}

/// Glyph of the key under a screen cell.
pub fn key_at(slots: &[KeySlot], column: u16, row: u16) -> Option<char> {
    slots
        .iter()
        .find(|slot| {
            let a = slot.area;
            column >= a.x && column < a.x + a.width && row >= a.y && row < a.y + a.height
        })
        .map(|slot| slot.glyph)
}

/// A single key cap.
///
/// Stateless: the frame comes from the latest press record and the clock,
/// so re-rendering with a newer record restarts the animation.
pub struct KeyWidget<'a> {
    glyph: char,
    record: Option<&'a PressRecord>,
    now_ms: f64,
    base_interval_ms: f64,
    theme: &'a Theme,
}

impl<'a> KeyWidget<'a> {
    pub fn new(glyph: char, theme: &'a Theme) -> Self {
        Self {
            glyph,
            record: None,
            now_ms: 0.0,
            base_interval_ms: 200.0,
            theme,
        }
    }

    /// Animate according to `record` at `now_ms`.
    pub fn pressed(mut self, record: Option<&'a PressRecord>, now_ms: f64, base_interval_ms: f64) -> Self {
        self.record = record;
        self.now_ms = now_ms;
        self.base_interval_ms = base_interval_ms;
        self
    }

    pub fn frame(&self) -> KeyFrame {
        self.record
            .map_or(KeyFrame::Rest, |r| r.frame(self.now_ms, self.base_interval_ms))
    }

    fn label(&self, width: u16) -> String {
        match self.glyph {
            ' ' if width >= 7 => "space".to_string(),
            ' ' => String::new(),
            g => g.to_string(),
        }
    }

    fn styles(&self) -> (Style, Style) {
        let theme = self.theme;
        match self.frame() {
            KeyFrame::Rest => (Style::default().fg(theme.key_rest), theme.text_style()),
            KeyFrame::Down => {
                let style = Style::default()
                    .fg(theme.key_down)
                    .add_modifier(Modifier::BOLD);
                (style, style.add_modifier(Modifier::REVERSED))
            }
            KeyFrame::Rising => {
                let style = Style::default().fg(theme.key_rising);
                (style, style.add_modifier(Modifier::BOLD))
            }
        }
    }
}

impl Widget for KeyWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (border, label_style) = self.styles();
        let label = self.label(area.width);

        if area.height >= KEY_HEIGHT {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(border);
            Paragraph::new(label)
                .style(label_style)
                .alignment(Alignment::Center)
                .block(block)
                .render(area, buf);
        } else {
            let text = format!("[{}]", if label.is_empty() { " " } else { &label });
            let style = match self.frame() {
                KeyFrame::Rest => border,
                _ => label_style,
            };
            Paragraph::new(text)
                .style(style)
                .alignment(Alignment::Center)
                .render(area, buf);
        }
    }
}

/// Draw the keyboard and return the key positions used.
pub fn render_keyboard(
    frame: &mut Frame,
    area: Rect,
    keys: &KeyPressCounter,
    now_ms: f64,
    base_interval_ms: f64,
    theme: &Theme,
) -> Vec<KeySlot> {
    let slots = keyboard_layout(area);
    for slot in &slots {
        let widget = KeyWidget::new(slot.glyph, theme).pressed(
            keys.record(slot.glyph),
            now_ms,
            base_interval_ms,
        );
        frame.render_widget(widget, slot.area);
    }
    slots
}
