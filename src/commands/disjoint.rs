//! Disjoint paths command
use pathfind_core::config::PathfindConfig;
use pathfind_core::error::Result;
use pathfind_core::{find_disjoint_paths_with_options, DisjointMode, DisjointPathSet};

use crate::cli::parse::Cell;
use crate::cli::{Cli, GridArgs, OutputFormat};
use crate::commands::grid::{format_cells, Grid};

/// Execute the disjoint command
pub fn execute(
    cli: &Cli,
    config: &PathfindConfig,
    grid_args: &GridArgs,
    from: Cell,
    to: Cell,
    paths: Option<usize>,
    mode: Option<&str>,
) -> Result<()> {
    let mode = match mode {
        Some(mode) => mode.parse::<DisjointMode>()?,
        None => config.disjoint.mode,
    };
    let k = paths.unwrap_or(config.disjoint.paths);
    let grid = Grid::from_args(grid_args)?;
    let graph = grid.graph()?;

    let set =
        find_disjoint_paths_with_options(&graph, &from, &to, k, mode, &config.search_options())?;
    if !set.is_complete() {
        tracing::info!(found = set.len(), requested = k, "fewer disjoint paths than requested");
    }

    match cli.format {
        OutputFormat::Json => output_json(&set),
        OutputFormat::Human => {
            output_human(cli, &grid, &set);
            Ok(())
        }
    }
}

fn output_json(set: &DisjointPathSet<Cell>) -> Result<()> {
    let paths: Vec<serde_json::Value> = set
        .paths()
        .iter()
        .map(|path| {
            serde_json::json!({
                "cost": path.cost(),
                "hops": path.hops(),
                "nodes": path.nodes(),
            })
        })
        .collect();
    let json = serde_json::json!({
        "mode": set.mode(),
        "requested": set.requested(),
        "found": set.len(),
        "complete": set.is_complete(),
        "total_cost": set.total_cost(),
        "paths": paths,
    });
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

fn output_human(cli: &Cli, grid: &Grid, set: &DisjointPathSet<Cell>) {
    if set.is_empty() {
        if !cli.quiet {
            println!("No {}-disjoint paths found", set.mode());
        }
        return;
    }

    for (index, path) in set.paths().iter().enumerate() {
        println!(
            "{}. {} (cost {})",
            index + 1,
            format_cells(path.nodes()),
            path.cost()
        );
    }
    println!(
        "total cost: {} ({} of {} {}-disjoint paths)",
        set.total_cost(),
        set.len(),
        set.requested(),
        set.mode()
    );
    if !cli.quiet {
        let nodes: Vec<&[Cell]> = set.paths().iter().map(|path| path.nodes()).collect();
        println!();
        println!("{}", grid.render(&nodes));
    }
}
