//! Keyboard input handling for the player.
//!
//! Printable keys press their glyph on the on-screen keyboard, Tab skips and
//! Esc / Ctrl-C quit. Every other key only activates the page.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::player::state::PlayerCommand;

/// Handle a keyboard event.
pub fn handle_key_event(key: KeyEvent) -> PlayerCommand {
    // Release and repeat events would double-count presses on some platforms
    if key.kind != KeyEventKind::Press {
        return PlayerCommand::Continue;
    }

    match key.code {
        // === Quit ===
        KeyCode::Esc => PlayerCommand::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => PlayerCommand::Quit,

        // === Skip ===
        KeyCode::Tab => PlayerCommand::Skip,

        // === Presses ===
        KeyCode::Char(_) if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            PlayerCommand::Activate
        }
        KeyCode::Char(c) => PlayerCommand::Press(c),
        KeyCode::Enter => PlayerCommand::Press('\n'),

        _ => PlayerCommand::Activate,
    }
}
