//! Graph model and path-finding operations
//!
//! - `model`: immutable graph with functional updates
//! - `algos`: the relaxation engine and algorithm selection
//! - `path`: path reconstruction from a completed search
//! - `disjoint`: edge- and node-disjoint path builders

pub mod algos;
pub mod disjoint;
pub mod model;
pub mod path;
pub mod types;

pub use algos::{
    search, select, select_by_name, Engine, EngineConfig, Heuristic, SearchOptions, SearchState,
    SearchStats, SearchTree, Termination,
};
pub use disjoint::{find_disjoint, DisjointPathSet};
pub use model::{Graph, GraphBuilder};
pub use path::{reconstruct_path, Path};
pub use types::{Algorithm, Cost, DisjointMode, Edge, EdgeId, NodeId};
