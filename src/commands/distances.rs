//! Distances command
use std::collections::BTreeMap;

use pathfind_core::config::PathfindConfig;
use pathfind_core::error::Result;
use pathfind_core::{shortest_distances_with_options, Algorithm, Cost};

use crate::cli::parse::Cell;
use crate::cli::{Cli, GridArgs, OutputFormat};
use crate::commands::grid::{format_cell, Grid};

/// Execute the distances command
pub fn execute(
    cli: &Cli,
    config: &PathfindConfig,
    grid_args: &GridArgs,
    from: Cell,
    algorithm: Option<&str>,
) -> Result<()> {
    let algorithm = match algorithm {
        Some(tag) => tag.parse::<Algorithm>()?,
        None => config.search.algorithm,
    };
    let grid = Grid::from_args(grid_args)?;
    let graph = grid.graph()?;

    let distances =
        shortest_distances_with_options(&graph, &from, algorithm, &config.search_options())?;

    match cli.format {
        OutputFormat::Json => output_json(algorithm, from, &distances),
        OutputFormat::Human => {
            output_human(cli, &distances);
            Ok(())
        }
    }
}

fn output_json(algorithm: Algorithm, from: Cell, distances: &BTreeMap<Cell, Cost>) -> Result<()> {
    // Cells are not valid JSON object keys, so distances are a list
    let entries: Vec<serde_json::Value> = distances
        .iter()
        .map(|(cell, distance)| serde_json::json!({ "node": cell, "distance": distance }))
        .collect();
    let json = serde_json::json!({
        "algorithm": algorithm.as_str(),
        "from": from,
        "distances": entries,
    });
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

fn output_human(cli: &Cli, distances: &BTreeMap<Cell, Cost>) {
    for (cell, distance) in distances {
        println!("{}\t{}", format_cell(cell), distance);
    }
    if !cli.quiet {
        println!("{} reachable cells", distances.len());
    }
}
