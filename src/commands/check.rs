//! Check subcommand handler

use std::path::Path;

use anyhow::{Context, Result};

use typewriter::player::playback::{format_duration_ms, total_duration_ms};
use typewriter::tui::current_theme;
use typewriter::{Config, Script};

/// Validate a script file and print its statistics.
pub fn handle(file: &Path, config: &Config) -> Result<()> {
    let script = Script::load(file).with_context(|| format!("Invalid script {}", file.display()))?;
    let theme = current_theme();

    let links = script.segments().iter().filter(|s| s.url.is_some()).count();
    let duration = total_duration_ms(&script, config.playback.base_interval_ms);
    tracing::debug!(path = %file.display(), duration, "script checked");

    println!("{}", theme.success_text(&format!("{} is valid", file.display())));
    println!("  {} {}", theme.secondary_text("segments:  "), script.len());
    println!("  {} {}", theme.secondary_text("characters:"), script.total_chars());
    println!("  {} {}", theme.secondary_text("links:     "), links);
    println!(
        "  {} {}",
        theme.secondary_text("duration:  "),
        format_duration_ms(duration)
    );
    Ok(())
}
