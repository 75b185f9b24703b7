//! Search algorithm implementations
//!
//! - `engine`: the relaxation engine every algorithm specializes
//! - `frontier`: heap, queue and stack frontiers
//! - `labels`: per-search label arena
//! - `select`: maps algorithm tags onto engine configurations

pub mod engine;
pub mod frontier;
pub mod labels;
pub mod select;

pub use engine::{
    search, Engine, EngineConfig, Heuristic, SearchState, SearchStats, SearchTree, Termination,
};
pub use frontier::Discipline;
pub use select::{select, select_by_name, SearchOptions, DEFAULT_TOLERANCE};
