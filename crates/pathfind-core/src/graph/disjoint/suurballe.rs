//! Node-disjoint paths by node splitting and potential reweighting
//!
//! Every intermediate node carrying flow is split into an entry port and an
//! exit port joined by a single internal edge, so that later rounds can pass
//! through it at most once. Edge weights are replaced by reduced costs
//! `w + phi(from) - phi(to)` which stay non-negative, so every round can run
//! Dijkstra instead of Bellman-Ford.

use std::collections::{BTreeSet, HashMap};

use crate::error::{PathfindError, Result};
use crate::graph::algos::{search, EngineConfig, SearchOptions};
use crate::graph::disjoint::decompose_flow;
use crate::graph::model::{Graph, GraphBuilder};
use crate::graph::path::{reconstruct_path, Path};
use crate::graph::types::{Algorithm, Cost, EdgeId, NodeId};

/// A node of the transformed graph
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
enum Port<N> {
    Whole(N),
    Entry(N),
    Exit(N),
}

/// Edge of the original graph a transformed edge stands for
#[derive(Debug, Clone, Copy)]
enum Origin {
    Forward(EdgeId),
    Reversed(EdgeId),
    Internal,
}

type Potentials<N> = HashMap<Port<N>, Cost>;

struct Residual<N: NodeId> {
    graph: Graph<Port<N>>,
    origins: HashMap<EdgeId, Origin>,
}

struct ResidualBuilder<'p, N: NodeId> {
    potentials: &'p Potentials<N>,
    builder: GraphBuilder<Port<N>>,
    origins: HashMap<EdgeId, Origin>,
}

impl<'p, N: NodeId> ResidualBuilder<'p, N> {
    fn new(potentials: &'p Potentials<N>) -> Self {
        Self {
            potentials,
            builder: GraphBuilder::new(),
            origins: HashMap::new(),
        }
    }

    fn add(&mut self, from: Port<N>, to: Port<N>, weight: Cost, origin: Origin) -> Result<()> {
        let (Some(from_potential), Some(to_potential)) =
            (self.potentials.get(&from), self.potentials.get(&to))
        else {
            // Ports the previous round never reached stay unreachable
            return Ok(());
        };
        let reduced = (weight + *from_potential - *to_potential).non_negative();
        let id = self.builder.add_edge(&from, &to, reduced)?;
        self.origins.insert(id, origin);
        Ok(())
    }
}

/// Flow state carried from one round to the next
struct Rounds<'g, N: NodeId> {
    graph: &'g Graph<N>,
    source: &'g N,
    target: &'g N,
    flow: BTreeSet<EdgeId>,
    split: BTreeSet<N>,
    potentials: Potentials<N>,
}

/// Up to `k` paths sharing no node except `source` and `target`, of minimum
/// total cost. Requires non-negative weights.
pub fn node_disjoint_paths<N: NodeId>(
    graph: &Graph<N>,
    source: &N,
    target: &N,
    k: usize,
    options: &SearchOptions,
) -> Result<Vec<Path<N>>> {
    let config = EngineConfig::for_algorithm(Algorithm::Dijkstra, options);
    let initial = search(graph, config, source, None, None)?;
    if !initial.reached(target) {
        return Err(PathfindError::invalid_graph(format!(
            "no potential for {:?}: unreachable from {:?}",
            target, source
        )));
    }

    let mut rounds = Rounds {
        graph,
        source,
        target,
        flow: BTreeSet::new(),
        split: BTreeSet::new(),
        potentials: initial
            .distances()
            .into_iter()
            .map(|(node, distance)| (Port::Whole(node), distance))
            .collect(),
    };

    for round in 1..=k {
        rounds.split_flow_nodes();
        let residual = rounds.residual()?;
        let start = Port::Whole(source.clone());
        let tree = search(&residual.graph, config, &start, None, None)?;
        let path = match reconstruct_path(&tree, &Port::Whole(target.clone())) {
            Ok(path) => path,
            Err(err) if err.is_unreachable() => {
                tracing::debug!(round, "no augmenting path left");
                break;
            }
            Err(err) => return Err(err),
        };
        tracing::debug!(round, reduced_cost = %path.cost(), hops = path.hops(), "augmenting path");

        rounds.augment(&path, &residual.origins);
        rounds.potentials = tree
            .distances()
            .into_iter()
            .filter_map(|(port, distance)| {
                let potential = rounds.potentials.get(&port)?;
                Some((port, *potential + distance))
            })
            .collect();
    }

    let flow_edges = graph
        .edges()
        .filter(|edge| rounds.flow.contains(&edge.id))
        .cloned()
        .collect();
    Ok(decompose_flow(source, target, flow_edges))
}

impl<'g, N: NodeId> Rounds<'g, N> {
    fn is_endpoint(&self, node: &N) -> bool {
        node == self.source || node == self.target
    }

    /// Split every intermediate node touched by flow; new ports inherit the
    /// potential of the whole node
    fn split_flow_nodes(&mut self) {
        let touched: Vec<N> = self
            .graph
            .edges()
            .filter(|edge| self.flow.contains(&edge.id))
            .flat_map(|edge| [edge.from.clone(), edge.to.clone()])
            .filter(|node| !self.is_endpoint(node))
            .collect();

        for node in touched {
            if !self.split.insert(node.clone()) {
                continue;
            }
            if let Some(potential) = self.potentials.get(&Port::Whole(node.clone())).copied() {
                self.potentials.insert(Port::Entry(node.clone()), potential);
                self.potentials.insert(Port::Exit(node), potential);
            }
        }
    }

    fn entry_port(&self, node: &N) -> Port<N> {
        if self.split.contains(node) {
            Port::Entry(node.clone())
        } else {
            Port::Whole(node.clone())
        }
    }

    fn exit_port(&self, node: &N) -> Port<N> {
        if self.split.contains(node) {
            Port::Exit(node.clone())
        } else {
            Port::Whole(node.clone())
        }
    }

    /// Transformed graph for the next round, weighted by reduced cost
    fn residual(&self) -> Result<Residual<N>> {
        let mut residual = ResidualBuilder::new(&self.potentials);
        for node in self.graph.nodes() {
            if self.split.contains(node) {
                residual.builder.add_node(Port::Entry(node.clone()));
                residual.builder.add_node(Port::Exit(node.clone()));
            } else {
                residual.builder.add_node(Port::Whole(node.clone()));
            }
        }

        let mut carrying = BTreeSet::new();
        for edge in self.graph.edges() {
            if self.flow.contains(&edge.id) {
                carrying.insert(edge.to.clone());
                residual.add(
                    self.entry_port(&edge.to),
                    self.exit_port(&edge.from),
                    -edge.weight,
                    Origin::Reversed(edge.id),
                )?;
            } else {
                residual.add(
                    self.exit_port(&edge.from),
                    self.entry_port(&edge.to),
                    edge.weight,
                    Origin::Forward(edge.id),
                )?;
            }
        }

        for node in &self.split {
            let (entry, exit) = (Port::Entry(node.clone()), Port::Exit(node.clone()));
            if carrying.contains(node) {
                residual.add(exit, entry, Cost::ZERO, Origin::Internal)?;
            } else {
                residual.add(entry, exit, Cost::ZERO, Origin::Internal)?;
            }
        }

        Ok(Residual {
            graph: residual.builder.build(),
            origins: residual.origins,
        })
    }

    /// Push one unit of flow along a path of the transformed graph
    fn augment(&mut self, path: &Path<Port<N>>, origins: &HashMap<EdgeId, Origin>) {
        for edge in path.edges() {
            match origins.get(&edge.id) {
                Some(Origin::Forward(id)) => {
                    self.flow.insert(*id);
                }
                Some(Origin::Reversed(id)) => {
                    self.flow.remove(id);
                }
                Some(Origin::Internal) | None => {}
            }
        }
    }
}
