//! typewriter CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use typewriter::cli::{Cli, Commands, ConfigCommands};
use typewriter::{logging, Config};

/// Install the log subscriber for this invocation.
///
/// The player owns the terminal, so it only logs when a file is given.
fn init_logging(cli: &Cli, config: &Config, playing: bool) -> Result<()> {
    let level = logging::level_for(cli.verbose, &config.logging.level);
    let file = cli.log_file.as_ref().or(config.logging.file.as_ref());
    match (playing, file) {
        (_, Some(path)) => logging::init_file(&level, path),
        (true, None) => Ok(()),
        (false, None) => logging::init_stderr(&level),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // `config path` and `config init` must work even with a broken config file
    let config = match &cli.command {
        Some(Commands::Config(ConfigCommands::Path | ConfigCommands::Init { .. })) => {
            Config::default()
        }
        _ => Config::load()?,
    };

    let playing = matches!(cli.command, None | Some(Commands::Play(_)));
    init_logging(&cli, &config, playing)?;

    match &cli.command {
        None => commands::play::handle(&cli.play, &config),
        Some(Commands::Play(args)) => commands::play::handle(args, &config),
        Some(Commands::Check { file }) => commands::check::handle(file, &config),
        Some(Commands::Visits { reset }) => commands::visits::handle(*reset),
        Some(Commands::Config(cmd)) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Init { force } => commands::config::handle_init(*force),
        },
        Some(Commands::Completions { shell }) => commands::completions::handle(*shell),
    }
}
