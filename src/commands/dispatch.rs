//! Command dispatch logic for pathfind
use std::time::Instant;

use pathfind_core::config::PathfindConfig;
use pathfind_core::error::Result;

use crate::cli::{Cli, Commands};
use crate::commands;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = match &cli.config {
        Some(path) => PathfindConfig::load(path)?,
        None => PathfindConfig::default(),
    };
    tracing::debug!(elapsed = ?start.elapsed(), ?config, "load_config");

    match &cli.command {
        None => handle_no_command(),

        Some(Commands::Path {
            grid,
            from,
            to,
            algorithm,
        }) => commands::path::execute(cli, &config, grid, *from, *to, algorithm.as_deref()),

        Some(Commands::Disjoint {
            grid,
            from,
            to,
            paths,
            mode,
        }) => commands::disjoint::execute(
            cli,
            &config,
            grid,
            *from,
            *to,
            *paths,
            mode.as_deref(),
        ),

        Some(Commands::Distances {
            grid,
            from,
            algorithm,
        }) => commands::distances::execute(cli, &config, grid, *from, algorithm.as_deref()),
    }
}

fn handle_no_command() -> Result<()> {
    use clap::CommandFactory;
    Cli::command().print_help()?;
    println!();
    Ok(())
}
