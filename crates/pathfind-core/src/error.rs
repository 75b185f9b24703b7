//! Error types and exit codes for pathfind
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (internal invariant violations, IO, serialization)
//! - 2: Usage error (unknown algorithm, missing heuristic, bad config value)
//! - 3: Graph/data error (unknown node, negative weight or cycle, no path)

mod macros;

use std::fmt::Debug;

use thiserror::Error;

/// Exit codes used by the pathfind binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args/config (2)
    Usage = 2,
    /// Data error - the graph does not admit the query (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building graphs or searching them
#[derive(Error, Debug)]
pub enum PathfindError {
    // Graph/data errors (exit code 3)
    #[error("unknown node: {node}")]
    UnknownNode { node: String },

    #[error("negative edge weight {weight} on {from} -> {to} (use bellman-ford)")]
    NegativeWeight {
        from: String,
        to: String,
        weight: f64,
    },

    #[error("negative cycle reachable from the source (relaxable edge into {node})")]
    NegativeCycle { node: String },

    #[error("no path from {from} to {to}")]
    Unreachable { from: String, to: String },

    #[error("invalid graph: {reason}")]
    InvalidGraph { reason: String },

    // Usage errors (exit code 2)
    #[error("unsupported algorithm: {value} (supported: {supported})")]
    UnsupportedAlgorithm { value: String, supported: String },

    #[error("{algorithm} requires a heuristic function")]
    MissingHeuristic { algorithm: String },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("predecessor chain revisits {node}")]
    CycleDetected { node: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PathfindError {
    /// Create an error for a node absent from the graph
    pub fn unknown_node(node: &impl Debug) -> Self {
        PathfindError::UnknownNode {
            node: format!("{:?}", node),
        }
    }

    /// Create an error for a negative edge met by a search that forbids them
    pub fn negative_weight(from: &impl Debug, to: &impl Debug, weight: f64) -> Self {
        PathfindError::NegativeWeight {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
            weight,
        }
    }

    /// Create an error for a negative cycle detected at `node`
    pub fn negative_cycle(node: &impl Debug) -> Self {
        PathfindError::NegativeCycle {
            node: format!("{:?}", node),
        }
    }

    /// Create an error for a target the search never reached
    pub fn unreachable(from: &impl Debug, to: &impl Debug) -> Self {
        PathfindError::Unreachable {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }

    /// Create an error for a predecessor chain that loops
    pub fn cycle_detected(node: &impl Debug) -> Self {
        PathfindError::CycleDetected {
            node: format!("{:?}", node),
        }
    }

    /// Create an error for a graph that cannot satisfy a precondition
    pub fn invalid_graph(reason: impl Into<String>) -> Self {
        PathfindError::InvalidGraph {
            reason: reason.into(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        PathfindError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported algorithm tag
    pub fn unsupported(value: impl std::fmt::Display, supported: impl std::fmt::Display) -> Self {
        PathfindError::UnsupportedAlgorithm {
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// True when the error only says that no path exists
    pub fn is_unreachable(&self) -> bool {
        matches!(self, PathfindError::Unreachable { .. })
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            PathfindError::UnsupportedAlgorithm { .. }
            | PathfindError::MissingHeuristic { .. }
            | PathfindError::InvalidValue { .. } => ExitCode::Usage,

            PathfindError::UnknownNode { .. }
            | PathfindError::NegativeWeight { .. }
            | PathfindError::NegativeCycle { .. }
            | PathfindError::Unreachable { .. }
            | PathfindError::InvalidGraph { .. } => ExitCode::Data,

            PathfindError::CycleDetected { .. }
            | PathfindError::Io(_)
            | PathfindError::Toml(_)
            | PathfindError::Json(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            PathfindError::UnknownNode { .. } => "unknown_node",
            PathfindError::NegativeWeight { .. } => "negative_weight",
            PathfindError::NegativeCycle { .. } => "negative_cycle",
            PathfindError::Unreachable { .. } => "unreachable",
            PathfindError::InvalidGraph { .. } => "invalid_graph",
            PathfindError::UnsupportedAlgorithm { .. } => "unsupported_algorithm",
            PathfindError::MissingHeuristic { .. } => "missing_heuristic",
            PathfindError::InvalidValue { .. } => "invalid_value",
            PathfindError::CycleDetected { .. } => "cycle_detected",
            PathfindError::Io(_) => "io_error",
            PathfindError::Toml(_) => "toml_error",
            PathfindError::Json(_) => "json_error",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for pathfind operations
pub type Result<T> = std::result::Result<T, PathfindError>;
