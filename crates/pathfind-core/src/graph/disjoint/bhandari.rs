//! Edge-disjoint paths by iterated shortest paths on edge-reversed graphs

use std::collections::BTreeSet;

use crate::error::Result;
use crate::graph::algos::{search, EngineConfig, SearchOptions};
use crate::graph::disjoint::decompose_flow;
use crate::graph::model::Graph;
use crate::graph::path::{reconstruct_path, Path};
use crate::graph::types::{Algorithm, EdgeId, NodeId};

/// Up to `k` pairwise edge-disjoint paths of minimum total cost.
///
/// Each round reverses and negates every edge currently carrying flow and
/// runs Bellman-Ford from `source`. Traversing a reversed edge cancels the
/// flow on the original edge, which is how interlacing segments of earlier
/// paths are given back.
pub fn edge_disjoint_paths<N: NodeId>(
    graph: &Graph<N>,
    source: &N,
    target: &N,
    k: usize,
    options: &SearchOptions,
) -> Result<Vec<Path<N>>> {
    let config = EngineConfig::for_algorithm(Algorithm::BellmanFord, options);
    let mut flow: BTreeSet<EdgeId> = BTreeSet::new();

    for round in 1..=k {
        let residual = graph.reverse_edges(&flow);
        let tree = search(&residual, config, source, Some(target), None)?;
        let path = match reconstruct_path(&tree, target) {
            Ok(path) => path,
            Err(err) if err.is_unreachable() => {
                tracing::debug!(round, "no augmenting path left");
                break;
            }
            Err(err) => return Err(err),
        };
        tracing::debug!(round, cost = %path.cost(), hops = path.hops(), "augmenting path");

        for id in path.edge_ids() {
            if !flow.remove(&id) {
                flow.insert(id);
            }
        }
    }

    let flow_edges = graph
        .edges()
        .filter(|edge| flow.contains(&edge.id))
        .cloned()
        .collect();
    Ok(decompose_flow(source, target, flow_edges))
}
