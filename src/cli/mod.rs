//! CLI argument parsing for pathfind
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --config

pub mod output;
pub mod parse;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub use output::OutputFormat;
use parse::{parse_cell, parse_grid_size, Cell, GridSize};

/// Pathfind - shortest and disjoint paths on puzzle grids
#[derive(Parser, Debug)]
#[command(name = "pathfind")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log search progress at debug level
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (TOML)
    #[arg(long, global = true, env = "PATHFIND_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Grid fixture shared by every command
#[derive(Args, Debug, Clone)]
pub struct GridArgs {
    /// Grid size as ROWSxCOLS
    #[arg(long, value_parser = parse_grid_size)]
    pub grid: GridSize,

    /// Blocked cell as ROW,COL (repeatable)
    #[arg(long = "block", value_parser = parse_cell)]
    pub blocked: Vec<Cell>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find a shortest path between two cells
    Path {
        #[command(flatten)]
        grid: GridArgs,

        /// Start cell as ROW,COL
        #[arg(long, value_parser = parse_cell)]
        from: Cell,

        /// Target cell as ROW,COL
        #[arg(long, value_parser = parse_cell)]
        to: Cell,

        /// dijkstra, astar, bellman-ford, bfs or dfs (default from config)
        #[arg(long, short)]
        algorithm: Option<String>,
    },

    /// Find disjoint paths between two cells
    Disjoint {
        #[command(flatten)]
        grid: GridArgs,

        /// Start cell as ROW,COL
        #[arg(long, value_parser = parse_cell)]
        from: Cell,

        /// Target cell as ROW,COL
        #[arg(long, value_parser = parse_cell)]
        to: Cell,

        /// Number of paths requested (default from config)
        #[arg(long, short = 'k')]
        paths: Option<usize>,

        /// edge or node (default from config)
        #[arg(long, short)]
        mode: Option<String>,
    },

    /// Distance from a cell to every reachable cell
    Distances {
        #[command(flatten)]
        grid: GridArgs,

        /// Start cell as ROW,COL
        #[arg(long, value_parser = parse_cell)]
        from: Cell,

        /// dijkstra, bellman-ford, bfs or dfs (default from config)
        #[arg(long, short)]
        algorithm: Option<String>,
    },
}
