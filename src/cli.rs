//! Command line interface definitions
//!
//! Lives in the library so `xtask` can render the man page from the same
//! definitions the binary parses.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Version string shown by `--version`.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("TYPEWRITER_BUILD_DATE"),
    ")"
);

/// Version string shown by `--version`.
#[cfg(feature = "release")]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("TYPEWRITER_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(
    name = "typewriter",
    version = VERSION,
    about = "Terminal typewriter effect with an animated on-screen keyboard",
    long_about = "Types a script out character by character, pressing keys on an \
                  on-screen keyboard and playing key sounds as it goes.\n\n\
                  Running without a subcommand plays the script.",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub play: PlayArgs,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Write logs to this file (the player never logs to the terminal)
    #[arg(long, value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a script (the default)
    Play(PlayArgs),

    /// Validate a script file and print its statistics
    Check {
        /// Script file (TOML)
        file: PathBuf,
    },

    /// Show or reset the visit counter
    Visits {
        /// Forget all recorded visits
        #[arg(long)]
        reset: bool,
    },

    /// Inspect or create the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct PlayArgs {
    /// Script file to play instead of the built-in one
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Play without any sound
    #[arg(long)]
    pub no_sound: bool,

    /// Quit automatically once the script has finished
    #[arg(long)]
    pub exit_on_finish: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the path of the configuration file
    Path,
    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
