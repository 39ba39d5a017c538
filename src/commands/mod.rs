//! Subcommand handlers

pub mod check;
pub mod completions;
pub mod config;
pub mod play;
pub mod visits;
