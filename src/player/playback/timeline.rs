//! Script timeline construction.
//!
//! Offsets are a running sum: each character adds `base_interval / speed`
//! and each finished segment adds its post-delay. Because the sum never
//! decreases, the timeline comes out already sorted.

use super::dispatcher::Scheduled;
use crate::script::Script;

/// Something the session does at a scheduled offset.
#[derive(Debug, Clone, PartialEq)]
pub enum TimelineAction {
    /// Reveal the next character of `segment`, pressing the key for `ch`
    Reveal { segment: usize, ch: char, speed: f64 },
    /// Move to the start of segment `to`, committing the previous override style
    Advance { to: usize },
    /// The last segment and its post-delay are done
    Finish,
}

/// Build the full timeline for `script`, offsets relative to activation.
pub fn build_timeline(script: &Script, base_interval_ms: f64) -> Vec<Scheduled<TimelineAction>> {
    let mut entries = Vec::with_capacity(script.total_chars() + script.len());
    let mut offset = 0.0f64;

    for (index, segment) in script.segments().iter().enumerate() {
        let char_interval = base_interval_ms / segment.speed;
        for ch in segment.text.chars() {
            offset += char_interval;
            entries.push(Scheduled {
                at_ms: offset,
                action: TimelineAction::Reveal {
                    segment: index,
                    ch,
                    speed: segment.speed,
                },
            });
        }

        offset += segment.post_delay_ms as f64;

        let action = if index == script.last_index() {
            TimelineAction::Finish
        } else {
            TimelineAction::Advance { to: index + 1 }
        };
        entries.push(Scheduled {
            at_ms: offset,
            action,
        });
    }

    entries
}

/// Time from activation until the `Finish` action, in milliseconds.
pub fn total_duration_ms(script: &Script, base_interval_ms: f64) -> f64 {
    script
        .segments()
        .iter()
        .map(|s| s.char_len() as f64 * base_interval_ms / s.speed + s.post_delay_ms as f64)
        .sum()
}

/// Format a duration in milliseconds as `MM:SS.s`.
pub fn format_duration_ms(ms: f64) -> String {
    let tenths = (ms.max(0.0) / 100.0) as u64;
    let mins = tenths / 600;
    let secs = (tenths % 600) as f64 / 10.0;
    format!("{:02}:{:04.1}", mins, secs)
}
