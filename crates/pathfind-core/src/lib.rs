//! Pathfind Core Library
//!
//! Shortest-path and disjoint-path finding over caller-supplied graphs.
//! Dijkstra, A*, Bellman-Ford, BFS and DFS are specializations of one
//! relaxation engine; Bhandari and Suurballe build on top of it.

pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
pub mod search;

pub use error::{PathfindError, Result};
pub use graph::{
    Algorithm, Cost, DisjointMode, DisjointPathSet, Edge, EdgeId, Graph, GraphBuilder, Heuristic,
    NodeId, Path, SearchOptions,
};
pub use search::{
    find_disjoint_paths, find_disjoint_paths_with_options, find_path, find_path_with_options,
    shortest_distances, shortest_distances_with_options,
};
