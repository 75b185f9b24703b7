//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::graph::algos::DEFAULT_TOLERANCE;
use crate::graph::types::{Algorithm, DisjointMode};

/// Default number of disjoint paths requested
pub const DEFAULT_DISJOINT_PATHS: usize = 2;

/// Pathfind configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathfindConfig {
    /// Point-to-point and single-source searches
    #[serde(default)]
    pub search: SearchConfig,

    /// Disjoint-path queries
    #[serde(default)]
    pub disjoint: DisjointConfig,
}

/// Configuration for single searches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Algorithm used when none is given on the command line
    #[serde(default)]
    pub algorithm: Algorithm,

    /// A relaxation must improve a distance by more than this
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            tolerance: default_tolerance(),
        }
    }
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

/// Configuration for disjoint-path queries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisjointConfig {
    #[serde(default)]
    pub mode: DisjointMode,

    /// Number of paths requested
    #[serde(default = "default_paths")]
    pub paths: usize,
}

impl Default for DisjointConfig {
    fn default() -> Self {
        Self {
            mode: DisjointMode::default(),
            paths: default_paths(),
        }
    }
}

fn default_paths() -> usize {
    DEFAULT_DISJOINT_PATHS
}
