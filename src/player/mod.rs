//! Typewriter player module
//!
//! Plays a script character by character in the terminal, pressing keys on
//! an on-screen keyboard as it goes.
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `state`: reveal cursor and the `PlayerCommand` enum
//! - `keys`: key glyph mapping and press records
//! - `playback/`: timeline construction and the clock-agnostic dispatcher
//! - `session`: the root controller owning all mutable state
//! - `input/`: keyboard and mouse input handling
//! - `render/`: paper, keyboard and status bar rendering
//!
//! # Usage
//!
//! ```no_run
//! use typewriter::config::Config;
//! use typewriter::player::{play_script, PlayOptions, PlaybackResult};
//! use typewriter::script::Script;
//!
//! let script = Script::builtin().unwrap();
//! let result = play_script(script, &Config::default(), PlayOptions::default()).unwrap();
//! if result == PlaybackResult::Interrupted {
//!     println!("Stopped early");
//! }
//! ```

pub(crate) mod input;
pub mod keys;
mod native;
pub mod playback;
pub mod render;
pub mod session;
pub mod state;

pub use native::{build_throttler, default_ledger, play_script, PlayOptions, PlaybackResult, Player};
pub use session::{CommandEffect, Session, SessionOptions};
pub use state::{PlaybackPosition, PlayerCommand};
