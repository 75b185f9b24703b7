//! Path reconstruction from a completed search

use std::collections::HashSet;

use serde::Serialize;

use crate::error::{PathfindError, Result};
use crate::graph::algos::labels::LabelTable;
use crate::graph::algos::SearchTree;
use crate::graph::types::{Cost, Edge, EdgeId, NodeId};

/// Ordered walk from a source to a target with its total cost
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path<N> {
    nodes: Vec<N>,
    edges: Vec<Edge<N>>,
    cost: Cost,
}

impl<N: NodeId> Path<N> {
    /// Path made of `edges` starting at `source`; cost is the sum of weights
    pub(crate) fn from_edges(source: N, edges: Vec<Edge<N>>) -> Self {
        let mut nodes = Vec::with_capacity(edges.len() + 1);
        nodes.push(source);
        nodes.extend(edges.iter().map(|edge| edge.to.clone()));
        let cost = edges.iter().map(|edge| edge.weight).sum();
        Self { nodes, edges, cost }
    }

    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge<N>] {
        &self.edges
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Number of edges
    pub fn hops(&self) -> usize {
        self.edges.len()
    }

    pub fn source(&self) -> &N {
        &self.nodes[0]
    }

    pub fn target(&self) -> &N {
        &self.nodes[self.nodes.len() - 1]
    }

    /// Nodes strictly between source and target
    pub fn intermediate_nodes(&self) -> &[N] {
        if self.nodes.len() < 2 {
            return &[];
        }
        &self.nodes[1..self.nodes.len() - 1]
    }

    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges.iter().map(|edge| edge.id)
    }

    /// Sum of the edge weights along the path
    pub fn total_weight(&self) -> Cost {
        self.edges.iter().map(|edge| edge.weight).sum()
    }
}

/// Walk the predecessor chain of `target` back to the search source
pub fn reconstruct_path<N: NodeId>(tree: &SearchTree<N>, target: &N) -> Result<Path<N>> {
    let distance = tree
        .distance(target)
        .ok_or_else(|| PathfindError::unreachable(tree.source(), target))?;
    let slot = tree
        .labels()
        .slot(target)
        .ok_or_else(|| PathfindError::unreachable(tree.source(), target))?;

    let (nodes, edges) = walk_predecessors(tree.labels(), slot)?;
    Ok(Path {
        nodes,
        edges,
        cost: distance,
    })
}

fn walk_predecessors<N: NodeId>(
    labels: &LabelTable<N>,
    slot: usize,
) -> Result<(Vec<N>, Vec<Edge<N>>)> {
    let mut seen = HashSet::from([slot]);
    let mut current = labels.get(slot);
    let mut nodes = vec![current.node.clone()];
    let mut edges = Vec::new();

    while let Some(predecessor) = current.predecessor {
        if !seen.insert(predecessor) {
            return Err(PathfindError::cycle_detected(&labels.get(predecessor).node));
        }
        if let Some(edge) = &current.via {
            edges.push(edge.clone());
        }
        current = labels.get(predecessor);
        nodes.push(current.node.clone());
    }

    nodes.reverse();
    edges.reverse();
    Ok((nodes, edges))
}
