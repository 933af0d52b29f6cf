//! gpxfix library root.
//! Exposes the CLI parser, the high-level run() function, the GPX document
//! model and the two track repairs (gap removal, timestamp backfill).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod gpx;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(config_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::RemoveGaps { .. } => cli::commands::remove_gaps::handle(&cli.command, cfg),
        Commands::AddTimestamps { .. } => cli::commands::add_timestamps::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config_path = Config::resolve_path(cli.config.as_deref());
    let cfg = Config::load_from(&config_path)?;
    tracing::debug!(path = %config_path.display(), ?cfg, "configuration loaded");

    dispatch(&cli, &cfg, &config_path)
}
