//! CLI commands for pathfind

pub mod dispatch;
pub mod disjoint;
pub mod distances;
pub mod grid;
pub mod path;
