//! Error macros for pathfind

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::PathfindError::invalid_value($context, $value))
    };
}

/// Macro for creating unsupported algorithm errors
#[macro_export]
macro_rules! bail_unsupported {
    ($value:expr, $supported:expr) => {
        return Err($crate::error::PathfindError::unsupported($value, $supported))
    };
}

/// Macro for rejecting a node the graph does not contain
#[macro_export]
macro_rules! ensure_node {
    ($graph:expr, $node:expr) => {
        if !$graph.has_node($node) {
            return Err($crate::error::PathfindError::unknown_node($node));
        }
    };
}
