//! Input handling for the player.
//!
//! Translates crossterm events into `PlayerCommand`s. Handlers never touch
//! the session directly; the main loop applies the returned command.

mod keyboard;
mod mouse;

pub use keyboard::handle_key_event;
pub use mouse::handle_mouse_event;

use crossterm::event::Event;

use crate::player::render::HitMap;
use crate::player::state::PlayerCommand;

/// Handle any input event, dispatching to the appropriate handler.
///
/// `hits` describes the clickable regions of the last rendered frame.
pub fn handle_event(event: Event, hits: &HitMap) -> PlayerCommand {
    match event {
        Event::Key(key) => handle_key_event(key),
        Event::Mouse(mouse) => handle_mouse_event(mouse, hits),
        // Resize needs no command: every loop iteration redraws
        _ => PlayerCommand::Continue,
    }
}
