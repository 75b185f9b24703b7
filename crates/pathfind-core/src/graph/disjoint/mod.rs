//! Disjoint-path builders
//!
//! Both builders accumulate a set of "flow" edges of the original graph over
//! several shortest-path rounds on a transformed graph, then decompose the
//! flow into individual paths:
//! - `bhandari`: edge-disjoint paths, Bellman-Ford on edge-reversed graphs
//! - `suurballe`: node-disjoint paths, Dijkstra on split and reweighted graphs

mod bhandari;
mod suurballe;


use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::ensure_node;
use crate::error::{PathfindError, Result};
use crate::graph::algos::SearchOptions;
use crate::graph::model::Graph;
use crate::graph::path::Path;
use crate::graph::types::{Cost, DisjointMode, Edge, NodeId};

pub use bhandari::edge_disjoint_paths;
pub use suurballe::node_disjoint_paths;

/// Up to `requested` pairwise disjoint paths between two nodes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisjointPathSet<N> {
    paths: Vec<Path<N>>,
    requested: usize,
    mode: DisjointMode,
}

impl<N: NodeId> DisjointPathSet<N> {
    pub(crate) fn new(paths: Vec<Path<N>>, requested: usize, mode: DisjointMode) -> Self {
        Self {
            paths,
            requested,
            mode,
        }
    }

    /// Paths ordered by cost, then by node sequence
    pub fn paths(&self) -> &[Path<N>] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn requested(&self) -> usize {
        self.requested
    }

    pub fn mode(&self) -> DisjointMode {
        self.mode
    }

    /// Sum of the path costs
    pub fn total_cost(&self) -> Cost {
        self.paths.iter().map(Path::cost).sum()
    }

    /// True when as many paths were found as requested
    pub fn is_complete(&self) -> bool {
        self.paths.len() == self.requested
    }
}

/// Find up to `k` disjoint paths from `source` to `target`.
/// Fewer than `k` paths is a valid outcome, reported through
/// [`DisjointPathSet::is_complete`].
#[tracing::instrument(level = "debug", skip(graph, options))]
pub fn find_disjoint<N: NodeId>(
    graph: &Graph<N>,
    source: &N,
    target: &N,
    k: usize,
    mode: DisjointMode,
    options: &SearchOptions,
) -> Result<DisjointPathSet<N>> {
    ensure_node!(graph, source);
    ensure_node!(graph, target);
    options.validate()?;
    if source == target {
        return Err(PathfindError::invalid_graph(format!(
            "disjoint paths need distinct endpoints, got {:?} twice",
            source
        )));
    }
    if k == 0 {
        return Ok(DisjointPathSet::new(Vec::new(), 0, mode));
    }

    let paths = match mode {
        DisjointMode::Edge => edge_disjoint_paths(graph, source, target, k, options)?,
        DisjointMode::Node => node_disjoint_paths(graph, source, target, k, options)?,
    };
    tracing::debug!(found = paths.len(), requested = k, "disjoint paths");
    Ok(DisjointPathSet::new(paths, k, mode))
}

/// Split a set of flow edges into source-to-target paths.
///
/// At every node the walk takes the remaining outbound flow edge with the
/// smallest (destination, weight, edge id); a walk that comes back to a node
/// it already visited erases the loop. Every edge is used at most once.
pub(crate) fn decompose_flow<N: NodeId>(
    source: &N,
    target: &N,
    flow: Vec<Edge<N>>,
) -> Vec<Path<N>> {
    let mut successors: BTreeMap<N, Vec<Edge<N>>> = BTreeMap::new();
    for edge in flow {
        successors.entry(edge.from.clone()).or_default().push(edge);
    }
    for edges in successors.values_mut() {
        // Reversed so that `pop` yields the smallest edge
        edges.sort_by(|a, b| compare_edges(b, a));
    }

    let mut paths = Vec::new();
    while successors.get(source).is_some_and(|edges| !edges.is_empty()) {
        match walk_flow(source, target, &mut successors) {
            Some(edges) => paths.push(Path::from_edges(source.clone(), edges)),
            None => {
                tracing::warn!(?source, ?target, "flow walk hit a dead end");
                break;
            }
        }
    }

    paths.sort_by(|a, b| {
        a.cost()
            .total_cmp(&b.cost())
            .then_with(|| a.nodes().cmp(b.nodes()))
    });
    paths
}

fn compare_edges<N: NodeId>(a: &Edge<N>, b: &Edge<N>) -> Ordering {
    a.to.cmp(&b.to)
        .then_with(|| a.weight.total_cmp(&b.weight))
        .then_with(|| a.id.cmp(&b.id))
}

fn walk_flow<N: NodeId>(
    source: &N,
    target: &N,
    successors: &mut BTreeMap<N, Vec<Edge<N>>>,
) -> Option<Vec<Edge<N>>> {
    let mut walk: Vec<Edge<N>> = Vec::new();
    let mut position = HashMap::from([(source.clone(), 0usize)]);
    let mut current = source.clone();

    while &current != target {
        let edge = successors.get_mut(&current)?.pop()?;
        current = edge.to.clone();
        if let Some(&index) = position.get(&edge.to) {
            for erased in walk.drain(index..) {
                position.remove(&erased.to);
            }
            position.insert(edge.to, index);
            continue;
        }
        walk.push(edge);
        position.insert(current.clone(), walk.len());
    }
    Some(walk)
}
