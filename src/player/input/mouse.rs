//! Mouse input handling for the player.
//!
//! Left clicks are resolved against the hit map of the last frame: the skip
//! control first, then revealed links, then keyboard keys. A click anywhere
//! else just activates the page.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::player::render::HitMap;
use crate::player::state::PlayerCommand;

/// Handle a mouse event.
pub fn handle_mouse_event(mouse: MouseEvent, hits: &HitMap) -> PlayerCommand {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return PlayerCommand::Continue;
    }
    let (column, row) = (mouse.column, mouse.row);

    if hits.on_skip(column, row) {
        PlayerCommand::Skip
    } else if let Some(url) = hits.link_at(column, row) {
        PlayerCommand::OpenLink(url.to_string())
    } else if let Some(glyph) = hits.key_at(column, row) {
        PlayerCommand::Press(glyph)
    } else {
        PlayerCommand::Activate
    }
}
