//! Path command
use pathfind_core::config::PathfindConfig;
use pathfind_core::error::Result;
use pathfind_core::{find_path_with_options, Algorithm, Path};

use crate::cli::parse::Cell;
use crate::cli::{Cli, GridArgs, OutputFormat};
use crate::commands::grid::{format_cells, manhattan, Grid};

/// Execute the path command
pub fn execute(
    cli: &Cli,
    config: &PathfindConfig,
    grid_args: &GridArgs,
    from: Cell,
    to: Cell,
    algorithm: Option<&str>,
) -> Result<()> {
    let algorithm = match algorithm {
        Some(tag) => tag.parse::<Algorithm>()?,
        None => config.search.algorithm,
    };
    let grid = Grid::from_args(grid_args)?;
    let graph = grid.graph()?;
    let heuristic = manhattan(to);

    let path = find_path_with_options(
        &graph,
        &from,
        &to,
        algorithm,
        Some(&heuristic),
        &config.search_options(),
    )?;

    match cli.format {
        OutputFormat::Json => output_json(algorithm, &path),
        OutputFormat::Human => {
            output_human(cli, &grid, &path);
            Ok(())
        }
    }
}

fn output_json(algorithm: Algorithm, path: &Path<Cell>) -> Result<()> {
    let json = serde_json::json!({
        "algorithm": algorithm.as_str(),
        "from": path.source(),
        "to": path.target(),
        "cost": path.cost(),
        "hops": path.hops(),
        "nodes": path.nodes(),
    });
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

fn output_human(cli: &Cli, grid: &Grid, path: &Path<Cell>) {
    println!("{}", format_cells(path.nodes()));
    println!("cost: {} ({} hops)", path.cost(), path.hops());
    if !cli.quiet {
        println!();
        println!("{}", grid.render(&[path.nodes()]));
    }
}
