//! typewriter - terminal typewriter effect with an animated on-screen keyboard
//!
//! A script of styled text segments is revealed one character at a time.
//! Every revealed character presses the matching key on an on-screen
//! keyboard and plays a (rate-limited) key sound; the last character plays
//! a "finished" sound instead.

pub mod cli;
pub mod config;
pub mod links;
pub mod logging;
pub mod player;
pub mod script;
pub mod sound;
pub mod tui;
pub mod visits;

pub use config::Config;
pub use player::{Session, SessionOptions};
pub use script::{Script, ScriptError, Segment, TextStyle};
