//! Generalized relaxation engine
//!
//! One search loop serves Dijkstra, A*, Bellman-Ford, BFS and DFS. The
//! algorithms differ only in their [`EngineConfig`]: the frontier discipline,
//! whether progress is counted in distance or in discovery (unit progress),
//! and whether negative weights are accepted.
//!
//! Distance-keyed searches are label-correcting: an improved node is pushed
//! again and outdated heap entries are skipped when popped. Unit-progress
//! searches (BFS/DFS) label a node once, when it is first discovered.
//! Bellman-Ford relaxes in rounds, each round scanning the nodes improved by
//! the previous one, and runs one verification round after |V| - 1 rounds.
//! Searches that reject negative weights check every edge of the graph
//! before the first relaxation, reachable or not.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::ensure_node;
use crate::error::{PathfindError, Result};
use crate::graph::algos::frontier::{Discipline, Frontier, HeapEntry};
use crate::graph::algos::labels::LabelTable;
use crate::graph::model::Graph;
use crate::graph::types::{Algorithm, Cost, Edge, NodeId};


/// Lower-bound estimate of the remaining cost from a node to the target
pub type Heuristic<'h, N> = &'h dyn Fn(&N) -> f64;

/// Tagged configuration consumed by the engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    pub algorithm: Algorithm,
    pub discipline: Discipline,
    /// Label each node once, on discovery, instead of comparing distances
    pub unit_progress: bool,
    pub allow_negative: bool,
    pub tolerance: f64,
}

/// Why a successful search stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    ReachedTarget,
    Exhausted,
}

/// Lifecycle of one search. Terminal states are final.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Unstarted,
    Running,
    Succeeded(Termination),
    Failed,
}

/// Work counters of a finished search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Nodes taken off the frontier (or scanned in a round)
    pub iterations: usize,
    /// Successful label updates
    pub relaxations: usize,
    /// Bellman-Ford rounds, verification round excluded
    pub rounds: usize,
}

/// Distance/predecessor table produced by a completed search
#[derive(Debug, Clone)]
pub struct SearchTree<N: NodeId> {
    source: N,
    labels: LabelTable<N>,
    termination: Termination,
    stats: SearchStats,
}

impl<N: NodeId> SearchTree<N> {
    pub fn source(&self) -> &N {
        &self.source
    }

    /// Distance of `node`, if the search reached it
    pub fn distance(&self, node: &N) -> Option<Cost> {
        self.labels
            .label(node)
            .map(|label| label.distance)
            .filter(Cost::is_finite)
    }

    pub fn reached(&self, node: &N) -> bool {
        self.distance(node).is_some()
    }

    /// Distances of every reached node
    pub fn distances(&self) -> BTreeMap<N, Cost> {
        self.labels
            .iter()
            .filter(|label| label.distance.is_finite())
            .map(|label| (label.node.clone(), label.distance))
            .collect()
    }

    pub fn termination(&self) -> Termination {
        self.termination
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub(crate) fn labels(&self) -> &LabelTable<N> {
        &self.labels
    }
}

/// A single search against a frozen graph
pub struct Engine<'g, N: NodeId> {
    graph: &'g Graph<N>,
    config: EngineConfig,
    heuristic: Option<Heuristic<'g, N>>,
    labels: LabelTable<N>,
    state: SearchState,
    stats: SearchStats,
}

impl<'g, N: NodeId> Engine<'g, N> {
    pub fn new(graph: &'g Graph<N>, config: EngineConfig) -> Self {
        Self {
            graph,
            config,
            heuristic: None,
            labels: LabelTable::new(),
            state: SearchState::Unstarted,
            stats: SearchStats::default(),
        }
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic<'g, N>) -> Self {
        self.heuristic = Some(heuristic);
        self
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Run the search from `source`. With a `target` the search stops once
    /// the target is settled; without one it exhausts the frontier.
    #[tracing::instrument(level = "debug", skip(self), fields(algorithm = %self.config.algorithm))]
    pub fn run(&mut self, source: &N, target: Option<&N>) -> Result<SearchTree<N>> {
        if self.state != SearchState::Unstarted {
            return Err(PathfindError::invalid_value(
                "search state",
                format!("{:?} (a search runs once)", self.state),
            ));
        }
        ensure_node!(self.graph, source);
        if let Some(target) = target {
            ensure_node!(self.graph, target);
        }
        if self.config.requires_heuristic() && self.heuristic.is_none() {
            return Err(PathfindError::MissingHeuristic {
                algorithm: self.config.algorithm.to_string(),
            });
        }
        if !self.config.allow_negative {
            if let Some(edge) = self.graph.negative_edge() {
                return Err(PathfindError::negative_weight(
                    &edge.from,
                    &edge.to,
                    edge.weight.value(),
                ));
            }
        }

        self.state = SearchState::Running;
        let outcome = match self.config.discipline {
            Discipline::Rounds => self.run_rounds(source, target),
            _ => self.run_frontier(source, target),
        };

        match outcome {
            Ok(termination) => {
                self.state = SearchState::Succeeded(termination);
                tracing::debug!(
                    ?termination,
                    iterations = self.stats.iterations,
                    relaxations = self.stats.relaxations,
                    rounds = self.stats.rounds,
                    "search finished"
                );
                Ok(SearchTree {
                    source: source.clone(),
                    labels: std::mem::take(&mut self.labels),
                    termination,
                    stats: self.stats,
                })
            }
            Err(err) => {
                self.state = SearchState::Failed;
                tracing::debug!(error = %err, "search failed");
                Err(err)
            }
        }
    }

    fn run_frontier(&mut self, source: &N, target: Option<&N>) -> Result<Termination> {
        let graph = self.graph;
        let mut frontier = Frontier::for_discipline(self.config.discipline);
        let mut discovered = HashSet::new();

        let origin = self.labels.seed(source);
        discovered.insert(origin);
        frontier.push(self.entry(source, Cost::ZERO));

        while let Some(entry) = frontier.pop() {
            let Some(slot) = self.labels.slot(&entry.node) else {
                continue;
            };
            let distance = self.labels.get(slot).distance;
            if distance.improves_on(entry.distance, self.config.tolerance) {
                // Superseded by a later push
                continue;
            }
            self.stats.iterations += 1;
            tracing::trace!(node = ?entry.node, %distance, "pop");

            if target == Some(&entry.node) {
                return Ok(Termination::ReachedTarget);
            }
            for edge in graph.outbound_edges(&entry.node)? {
                if let Some(next) = self.scan(slot, edge, &mut discovered) {
                    frontier.push(next);
                }
            }
        }
        Ok(Termination::Exhausted)
    }

    /// Relax one edge out of `from`; returns the frontier entry to push
    fn scan(
        &mut self,
        from: usize,
        edge: &Edge<N>,
        discovered: &mut HashSet<usize>,
    ) -> Option<HeapEntry<N>> {
        let candidate = self.labels.get(from).distance + edge.weight;
        let to = self.labels.slot_or_insert(&edge.to);
        if self.config.unit_progress {
            if !discovered.insert(to) {
                return None;
            }
        } else if !candidate.improves_on(self.labels.get(to).distance, self.config.tolerance) {
            return None;
        }

        self.labels.settle(to, candidate, from, edge);
        self.stats.relaxations += 1;
        Some(self.entry(&edge.to, candidate))
    }

    fn entry(&self, node: &N, distance: Cost) -> HeapEntry<N> {
        let priority = match (self.config.discipline, self.heuristic) {
            (Discipline::MinEstimate, Some(heuristic)) => distance + Cost::new(heuristic(node)),
            _ => distance,
        };
        HeapEntry {
            node: node.clone(),
            priority,
            distance,
        }
    }

    fn run_rounds(&mut self, source: &N, target: Option<&N>) -> Result<Termination> {
        let limit = self.graph.node_count().saturating_sub(1);
        let mut active = vec![self.labels.seed(source)];

        while !active.is_empty() && self.stats.rounds < limit {
            self.stats.rounds += 1;
            active = self.relax_round(&active)?;
            tracing::trace!(round = self.stats.rounds, improved = active.len(), "round");
        }

        if !active.is_empty() {
            let still_improving = self.relax_round(&active)?;
            if let Some(slot) = still_improving.first() {
                return Err(PathfindError::negative_cycle(&self.labels.get(*slot).node));
            }
        }

        let reached = target.is_some_and(|target| {
            self.labels
                .label(target)
                .is_some_and(|label| label.distance.is_finite())
        });
        Ok(if reached {
            Termination::ReachedTarget
        } else {
            Termination::Exhausted
        })
    }

    /// Relax every edge out of `active`; returns the improved slots in order
    fn relax_round(&mut self, active: &[usize]) -> Result<Vec<usize>> {
        let graph = self.graph;
        let mut improved = Vec::new();
        let mut queued = HashSet::new();

        for &from in active {
            self.stats.iterations += 1;
            let node = self.labels.get(from).node.clone();
            for edge in graph.outbound_edges(&node)? {
                let candidate = self.labels.get(from).distance + edge.weight;
                let to = self.labels.slot_or_insert(&edge.to);
                if candidate.improves_on(self.labels.get(to).distance, self.config.tolerance) {
                    self.labels.settle(to, candidate, from, edge);
                    self.stats.relaxations += 1;
                    if queued.insert(to) {
                        improved.push(to);
                    }
                }
            }
        }
        Ok(improved)
    }
}

/// Run a complete search in one call
pub fn search<N: NodeId>(
    graph: &Graph<N>,
    config: EngineConfig,
    source: &N,
    target: Option<&N>,
    heuristic: Option<Heuristic<'_, N>>,
) -> Result<SearchTree<N>> {
    let mut engine = Engine::new(graph, config);
    if let Some(heuristic) = heuristic {
        engine = engine.with_heuristic(heuristic);
    }
    engine.run(source, target)
}
