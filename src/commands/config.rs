//! Config subcommands handler

use anyhow::{Context, Result};

use typewriter::tui::current_theme;
use typewriter::Config;

/// Show current configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let toml_str = config.to_toml_string()?;
    let theme = current_theme();
    println!("{}", theme.primary_text(&toml_str));
    Ok(())
}

/// Print the config file path.
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Write a config file with default values.
///
/// Refuses to overwrite an existing file unless `force` is set.
pub fn handle_init(force: bool) -> Result<()> {
    let config_path = Config::config_path()?;
    let theme = current_theme();

    if config_path.exists() && !force {
        println!(
            "{}",
            theme.primary_text(&format!(
                "Config file already exists: {} (use --force to overwrite)",
                config_path.display()
            ))
        );
        return Ok(());
    }

    Config::default()
        .save()
        .with_context(|| format!("Failed to create {}", config_path.display()))?;
    println!(
        "{}",
        theme.success_text(&format!("Wrote {}", config_path.display()))
    );
    Ok(())
}
