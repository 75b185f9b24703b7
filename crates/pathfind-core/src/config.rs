//! Configuration for pathfind
//!
//! Configuration is a TOML file with optional `[search]` and `[disjoint]`
//! sections; every key falls back to its default.

pub mod types;

use std::fs;
use std::path::Path;

use crate::bail_invalid;
use crate::error::{PathfindError, Result};
use crate::graph::algos::SearchOptions;

pub use types::{DisjointConfig, PathfindConfig, SearchConfig, DEFAULT_DISJOINT_PATHS};

impl PathfindConfig {
    /// Load configuration from a file
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: PathfindConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PathfindError::invalid_value("config", e))?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.search_options().validate()?;
        if self.disjoint.paths == 0 {
            bail_invalid!("disjoint.paths", "0 (must be at least 1)");
        }
        Ok(())
    }

    /// Runtime options for the engine
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            tolerance: self.search.tolerance,
        }
    }
}
