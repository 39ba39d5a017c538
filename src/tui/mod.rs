//! TUI (Text User Interface) module
//!
//! Terminal ownership, theming and layout helpers shared by the player and
//! the CLI output.

pub mod app;
pub mod theme;
pub mod ui;

pub use app::App;
pub use theme::{current_theme, Theme};
