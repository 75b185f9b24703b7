//! Algorithm selection
//!
//! Maps an algorithm tag onto an engine configuration: frontier discipline,
//! heuristic requirement and weight-sign validation. Configuration errors are
//! raised here, before any search executes.

use serde::{Deserialize, Serialize};

use crate::error::{PathfindError, Result};
use crate::graph::algos::engine::EngineConfig;
use crate::graph::algos::frontier::Discipline;
use crate::graph::types::Algorithm;

/// Relaxations must improve a distance by more than this
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Runtime knobs shared by every search
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    pub tolerance: f64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl SearchOptions {
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(PathfindError::invalid_value(
                "tolerance",
                format!("{} (must be finite and non-negative)", self.tolerance),
            ));
        }
        Ok(())
    }
}

impl EngineConfig {
    /// Engine configuration for `algorithm`, without checking the heuristic
    pub fn for_algorithm(algorithm: Algorithm, options: &SearchOptions) -> Self {
        let (discipline, unit_progress, allow_negative) = match algorithm {
            Algorithm::Dijkstra => (Discipline::MinCost, false, false),
            Algorithm::AStar => (Discipline::MinEstimate, false, false),
            Algorithm::BellmanFord => (Discipline::Rounds, false, true),
            Algorithm::Bfs => (Discipline::Fifo, true, false),
            Algorithm::Dfs => (Discipline::Lifo, true, false),
        };
        Self {
            algorithm,
            discipline,
            unit_progress,
            allow_negative,
            tolerance: options.tolerance,
        }
    }

    pub fn requires_heuristic(&self) -> bool {
        self.discipline == Discipline::MinEstimate
    }
}

/// Resolve `algorithm` into an engine configuration
pub fn select(
    algorithm: Algorithm,
    has_heuristic: bool,
    options: &SearchOptions,
) -> Result<EngineConfig> {
    options.validate()?;
    let config = EngineConfig::for_algorithm(algorithm, options);
    if config.requires_heuristic() && !has_heuristic {
        return Err(PathfindError::MissingHeuristic {
            algorithm: algorithm.to_string(),
        });
    }
    Ok(config)
}

/// Parse an algorithm tag, then resolve it with [`select`]
pub fn select_by_name(
    tag: &str,
    has_heuristic: bool,
    options: &SearchOptions,
) -> Result<EngineConfig> {
    let algorithm: Algorithm = tag.parse()?;
    select(algorithm, has_heuristic, options)
}
