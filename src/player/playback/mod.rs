//! Playback scheduling for the player.
//!
//! `timeline` turns a script into offset-stamped actions; `dispatcher`
//! fires them as the session clock advances.

mod dispatcher;
mod timeline;

pub use dispatcher::{Dispatcher, Scheduled};
pub use timeline::{build_timeline, format_duration_ms, total_duration_ms, TimelineAction};
