//! Immutable directed graph with functional updates
//!
//! A `Graph` never changes once built. Every transformation (adding or
//! removing an edge, reversing the edges of a found path) returns a new
//! value, so graphs derived inside the disjoint-path builders never alias
//! the caller's graph.

use std::collections::{BTreeMap, BTreeSet};

use crate::ensure_node;
use crate::error::{PathfindError, Result};
use crate::graph::types::{Cost, Edge, EdgeId, NodeId};

/// Directed weighted graph: nodes plus outbound adjacency lists
#[derive(Debug, Clone, PartialEq)]
pub struct Graph<N: NodeId> {
    adjacency: BTreeMap<N, Vec<Edge<N>>>,
    next_edge_id: usize,
}

impl<N: NodeId> Default for Graph<N> {
    fn default() -> Self {
        Self {
            adjacency: BTreeMap::new(),
            next_edge_id: 0,
        }
    }
}

impl<N: NodeId> Graph<N> {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a graph in place
    pub fn builder() -> GraphBuilder<N> {
        GraphBuilder::new()
    }

    pub fn has_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Nodes in ascending order
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    /// All edges, grouped by source node in ascending order
    pub fn edges(&self) -> impl Iterator<Item = &Edge<N>> {
        self.adjacency.values().flatten()
    }

    /// Outbound edges of `node` in insertion order
    pub fn outbound_edges(&self, node: &N) -> Result<&[Edge<N>]> {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .ok_or_else(|| PathfindError::unknown_node(node))
    }

    /// Neighbours of `node` with the weight of the connecting edge
    pub fn neighbors(&self, node: &N) -> Result<impl Iterator<Item = (&N, Cost)>> {
        Ok(self
            .outbound_edges(node)?
            .iter()
            .map(|edge| (&edge.to, edge.weight)))
    }

    pub fn has_negative_weight(&self) -> bool {
        self.negative_edge().is_some()
    }

    /// First edge with a negative weight, in adjacency order
    pub fn negative_edge(&self) -> Option<&Edge<N>> {
        self.edges().find(|edge| edge.weight.is_negative())
    }

    /// New graph that also contains `node`
    pub fn with_node(&self, node: N) -> Graph<N> {
        let mut graph = self.clone();
        graph.adjacency.entry(node).or_default();
        graph
    }

    /// New graph with an extra edge `from -> to`
    pub fn add_edge(&self, from: &N, to: &N, weight: impl Into<Cost>) -> Result<Graph<N>> {
        let mut graph = self.clone();
        graph.insert_edge(from, to, weight.into())?;
        Ok(graph)
    }

    /// New graph without any edge `from -> to`
    pub fn remove_edge(&self, from: &N, to: &N) -> Result<Graph<N>> {
        ensure_node!(self, from);
        ensure_node!(self, to);

        let mut graph = self.clone();
        if let Some(edges) = graph.adjacency.get_mut(from) {
            edges.retain(|edge| &edge.to != to);
        }
        Ok(graph)
    }

    /// New graph in which every edge listed in `ids` points the other way
    /// with negated weight. Edge ids are preserved, so a reversed edge can
    /// be traced back to the edge it came from.
    pub fn reverse_edges(&self, ids: &BTreeSet<EdgeId>) -> Graph<N> {
        let mut adjacency: BTreeMap<N, Vec<Edge<N>>> = self
            .adjacency
            .keys()
            .map(|node| (node.clone(), Vec::new()))
            .collect();
        let mut reversed = Vec::new();

        for edge in self.edges() {
            if ids.contains(&edge.id) {
                reversed.push(edge.reversed());
            } else if let Some(edges) = adjacency.get_mut(&edge.from) {
                edges.push(edge.clone());
            }
        }
        for edge in reversed {
            if let Some(edges) = adjacency.get_mut(&edge.from) {
                edges.push(edge);
            }
        }

        Graph {
            adjacency,
            next_edge_id: self.next_edge_id,
        }
    }

    fn insert_edge(&mut self, from: &N, to: &N, weight: Cost) -> Result<EdgeId> {
        ensure_node!(self, from);
        ensure_node!(self, to);
        if !weight.is_finite() {
            return Err(PathfindError::invalid_graph(format!(
                "weight of {:?} -> {:?} must be finite, got {}",
                from, to, weight
            )));
        }

        let id = EdgeId(self.next_edge_id);
        self.next_edge_id += 1;
        if let Some(edges) = self.adjacency.get_mut(from) {
            edges.push(Edge {
                id,
                from: from.clone(),
                to: to.clone(),
                weight,
            });
        }
        Ok(id)
    }
}

/// In-place builder for a `Graph`
#[derive(Debug)]
pub struct GraphBuilder<N: NodeId> {
    graph: Graph<N>,
}

impl<N: NodeId> Default for GraphBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeId> GraphBuilder<N> {
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
        }
    }

    /// Add a node; adding an existing node is a no-op
    pub fn add_node(&mut self, node: N) -> &mut Self {
        self.graph.adjacency.entry(node).or_default();
        self
    }

    pub fn add_nodes(&mut self, nodes: impl IntoIterator<Item = N>) -> &mut Self {
        for node in nodes {
            self.add_node(node);
        }
        self
    }

    /// Add a directed edge between two known nodes
    pub fn add_edge(&mut self, from: &N, to: &N, weight: impl Into<Cost>) -> Result<EdgeId> {
        self.graph.insert_edge(from, to, weight.into())
    }

    /// Add an undirected edge as two directed edges of equal weight
    pub fn add_undirected_edge(
        &mut self,
        a: &N,
        b: &N,
        weight: impl Into<Cost>,
    ) -> Result<(EdgeId, EdgeId)> {
        let weight = weight.into();
        let forward = self.graph.insert_edge(a, b, weight)?;
        let backward = self.graph.insert_edge(b, a, weight)?;
        Ok((forward, backward))
    }

    pub fn has_node(&self, node: &N) -> bool {
        self.graph.has_node(node)
    }

    pub fn build(self) -> Graph<N> {
        self.graph
    }
}
