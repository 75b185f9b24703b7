use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::iter::Sum;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bail_unsupported;
use crate::error::PathfindError;

/// Identity of a node. Anything cloneable, hashable, ordered and printable
/// qualifies; the payload behind the identifier stays with the caller.
pub trait NodeId: Clone + Eq + Hash + Ord + fmt::Debug {}

impl<T: Clone + Eq + Hash + Ord + fmt::Debug> NodeId for T {}

/// Represents the cost of traversing an edge or a whole path.
/// Signed: negative edge costs are legal for Bellman-Ford and appear in the
/// residual graphs of the disjoint-path builders.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cost(f64);

impl Cost {
    pub const ZERO: Cost = Cost(0.0);
    pub const UNIT: Cost = Cost(1.0);
    pub const INFINITY: Cost = Cost(f64::INFINITY);

    pub fn new(cost: f64) -> Self {
        Cost(cost)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Total order over costs (NaN never enters a graph, see `GraphBuilder`)
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }

    /// True when `self` is cheaper than `other` by more than `tolerance`.
    /// Anything finite improves on `Cost::INFINITY`.
    pub fn improves_on(&self, other: Cost, tolerance: f64) -> bool {
        self.0 < other.0 - tolerance
    }

    /// Clamp rounding noise below zero back to zero
    pub fn non_negative(self) -> Self {
        Cost(self.0.max(0.0))
    }
}

impl Default for Cost {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Cost(self.0 + other.0)
    }
}

impl Sub for Cost {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Cost(self.0 - other.0)
    }
}

impl Neg for Cost {
    type Output = Self;

    fn neg(self) -> Self {
        Cost(-self.0)
    }
}

impl Sum for Cost {
    fn sum<I: Iterator<Item = Cost>>(iter: I) -> Self {
        iter.fold(Cost::ZERO, |acc, c| acc + c)
    }
}

impl From<f64> for Cost {
    fn from(cost: f64) -> Self {
        Cost(cost)
    }
}

impl From<i32> for Cost {
    fn from(cost: i32) -> Self {
        Cost(cost as f64)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable identifier of an edge within a graph and all graphs derived from it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// A directed, weighted edge
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge<N> {
    pub id: EdgeId,
    pub from: N,
    pub to: N,
    pub weight: Cost,
}

impl<N: Clone> Edge<N> {
    /// The same edge pointing the other way with negated weight
    pub fn reversed(&self) -> Edge<N> {
        Edge {
            id: self.id,
            from: self.to.clone(),
            to: self.from.clone(),
            weight: -self.weight,
        }
    }
}

/// Path-finding algorithms served by the relaxation engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Min-heap on distance, stops at the first pop of the target
    #[default]
    Dijkstra,
    /// Min-heap on distance + heuristic estimate
    #[serde(rename = "astar", alias = "a*")]
    AStar,
    /// FIFO rounds, negative weights allowed, negative cycles detected
    #[serde(alias = "bellmanford")]
    BellmanFord,
    /// FIFO queue, unit progress (fewest hops)
    #[serde(alias = "breadth-first")]
    Bfs,
    /// LIFO stack, unit progress (any path)
    #[serde(alias = "depth-first")]
    Dfs,
}

pub const SUPPORTED_ALGORITHMS: &str = "dijkstra, astar, bellman-ford, bfs, dfs";

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "astar",
            Algorithm::BellmanFord => "bellman-ford",
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
        }
    }
}

impl FromStr for Algorithm {
    type Err = PathfindError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a*" => Ok(Algorithm::AStar),
            "bellman-ford" | "bellmanford" => Ok(Algorithm::BellmanFord),
            "bfs" | "breadth-first" => Ok(Algorithm::Bfs),
            "dfs" | "depth-first" => Ok(Algorithm::Dfs),
            other => bail_unsupported!(other, SUPPORTED_ALGORITHMS),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which kind of disjointness a multi-path query must guarantee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisjointMode {
    /// No shared edge (Bhandari)
    #[default]
    Edge,
    /// No shared intermediate node (Suurballe)
    Node,
}

impl FromStr for DisjointMode {
    type Err = PathfindError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "edge" => Ok(DisjointMode::Edge),
            "node" => Ok(DisjointMode::Node),
            other => Err(PathfindError::invalid_value(
                "disjoint mode",
                format!("{} (expected: edge, node)", other),
            )),
        }
    }
}

impl fmt::Display for DisjointMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisjointMode::Edge => f.write_str("edge"),
            DisjointMode::Node => f.write_str("node"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_default() {
        assert_eq!(Cost::default().value(), 0.0);
        assert_eq!(Cost::UNIT.value(), 1.0);
    }

    #[test]
    fn test_cost_arithmetic() {
        let sum = Cost::from(2) + Cost::new(1.5);
        assert_eq!(sum.value(), 3.5);
        assert_eq!((sum - Cost::UNIT).value(), 2.5);
        assert_eq!((-sum).value(), -3.5);
        let total: Cost = [Cost::from(1), Cost::from(2), Cost::from(-4)]
            .into_iter()
            .sum();
        assert_eq!(total.value(), -1.0);
    }

    #[test]
    fn test_cost_improves_on() {
        assert!(Cost::from(3).improves_on(Cost::INFINITY, 1e-9));
        assert!(Cost::from(3).improves_on(Cost::from(4), 1e-9));
        assert!(!Cost::from(3).improves_on(Cost::from(3), 1e-9));
        assert!(!Cost::new(3.0).improves_on(Cost::new(3.0 + 1e-12), 1e-9));
    }

    #[test]
    fn test_cost_non_negative() {
        assert_eq!(Cost::new(-1e-15).non_negative().value(), 0.0);
        assert_eq!(Cost::new(2.0).non_negative().value(), 2.0);
    }

    #[test]
    fn test_edge_reversed_keeps_id() {
        let edge = Edge {
            id: EdgeId(7),
            from: "A",
            to: "B",
            weight: Cost::from(3),
        };
        let back = edge.reversed();
        assert_eq!(back.id, EdgeId(7));
        assert_eq!(back.from, "B");
        assert_eq!(back.to, "A");
        assert_eq!(back.weight.value(), -3.0);
    }

    #[test]
    fn test_algorithm_from_str() {
        assert_eq!(
            "Dijkstra".parse::<Algorithm>().unwrap(),
            Algorithm::Dijkstra
        );
        assert_eq!("a*".parse::<Algorithm>().unwrap(), Algorithm::AStar);
        assert_eq!(
            "bellmanford".parse::<Algorithm>().unwrap(),
            Algorithm::BellmanFord
        );
        assert_eq!(
            "breadth-first".parse::<Algorithm>().unwrap(),
            Algorithm::Bfs
        );
        assert_eq!("DFS".parse::<Algorithm>().unwrap(), Algorithm::Dfs);
    }

    #[test]
    fn test_algorithm_from_str_unsupported() {
        let err = "floyd-warshall".parse::<Algorithm>().unwrap_err();
        assert!(matches!(
            err,
            PathfindError::UnsupportedAlgorithm { ref value, .. } if value == "floyd-warshall"
        ));
    }

    #[test]
    fn test_algorithm_display_round_trips() {
        for algorithm in [
            Algorithm::Dijkstra,
            Algorithm::AStar,
            Algorithm::BellmanFord,
            Algorithm::Bfs,
            Algorithm::Dfs,
        ] {
            assert_eq!(
                algorithm.to_string().parse::<Algorithm>().unwrap(),
                algorithm
            );
        }
    }

    #[test]
    fn test_disjoint_mode_from_str() {
        assert_eq!("EDGE".parse::<DisjointMode>().unwrap(), DisjointMode::Edge);
        assert_eq!("node".parse::<DisjointMode>().unwrap(), DisjointMode::Node);
        assert!("vertex".parse::<DisjointMode>().is_err());
    }
}
