//! Play subcommand handler

use anyhow::{bail, Context, Result};

use typewriter::cli::PlayArgs;
use typewriter::player::{play_script, PlayOptions, PlaybackResult};
use typewriter::{Config, Script};

/// Play the chosen script full-screen.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: &PlayArgs, config: &Config) -> Result<()> {
    // Load first so script errors are reported before the terminal changes
    let script = match &args.script {
        Some(path) => {
            Script::load(path).with_context(|| format!("Invalid script {}", path.display()))?
        }
        None => Script::builtin()?,
    };

    if !atty::is(atty::Stream::Stdout) || !atty::is(atty::Stream::Stdin) {
        bail!("The player needs an interactive terminal");
    }

    let options = PlayOptions {
        no_sound: args.no_sound,
        exit_on_finish: args.exit_on_finish,
    };
    match play_script(script, config, options)? {
        PlaybackResult::Finished => tracing::debug!("script finished"),
        PlaybackResult::Interrupted => tracing::debug!("script interrupted"),
    }
    Ok(())
}
