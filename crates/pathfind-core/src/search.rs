//! Library entry points
//!
//! Each call configures the relaxation engine for the requested algorithm,
//! runs it against the caller's graph and shapes the result. Configuration
//! errors surface before any search executes.

use std::collections::BTreeMap;
use std::time::Instant;

use crate::error::Result;
use crate::graph::{
    find_disjoint, reconstruct_path, search, select, Algorithm, Cost, DisjointMode,
    DisjointPathSet, Graph, Heuristic, NodeId, Path, SearchOptions,
};
use crate::trace_time;

/// Shortest path from `source` to `target`.
///
/// `heuristic` is required for A* and ignored by every other algorithm.
pub fn find_path<N: NodeId>(
    graph: &Graph<N>,
    source: &N,
    target: &N,
    algorithm: Algorithm,
    heuristic: Option<Heuristic<'_, N>>,
) -> Result<Path<N>> {
    find_path_with_options(
        graph,
        source,
        target,
        algorithm,
        heuristic,
        &SearchOptions::default(),
    )
}

#[tracing::instrument(level = "debug", skip(graph, heuristic, options))]
pub fn find_path_with_options<N: NodeId>(
    graph: &Graph<N>,
    source: &N,
    target: &N,
    algorithm: Algorithm,
    heuristic: Option<Heuristic<'_, N>>,
    options: &SearchOptions,
) -> Result<Path<N>> {
    let start = Instant::now();
    let config = select(algorithm, heuristic.is_some(), options)?;
    let heuristic = heuristic.filter(|_| config.requires_heuristic());

    let tree = search(graph, config, source, Some(target), heuristic)?;
    let path = reconstruct_path(&tree, target)?;
    trace_time!(start, "find_path", hops = path.hops());
    Ok(path)
}

/// Up to `k` disjoint paths from `source` to `target`
pub fn find_disjoint_paths<N: NodeId>(
    graph: &Graph<N>,
    source: &N,
    target: &N,
    k: usize,
    mode: DisjointMode,
) -> Result<DisjointPathSet<N>> {
    find_disjoint_paths_with_options(graph, source, target, k, mode, &SearchOptions::default())
}

pub fn find_disjoint_paths_with_options<N: NodeId>(
    graph: &Graph<N>,
    source: &N,
    target: &N,
    k: usize,
    mode: DisjointMode,
    options: &SearchOptions,
) -> Result<DisjointPathSet<N>> {
    let start = Instant::now();
    let set = find_disjoint(graph, source, target, k, mode, options)?;
    trace_time!(start, "find_disjoint_paths", paths = set.len());
    Ok(set)
}

/// Distance from `source` to every node it reaches
pub fn shortest_distances<N: NodeId>(
    graph: &Graph<N>,
    source: &N,
    algorithm: Algorithm,
) -> Result<BTreeMap<N, Cost>> {
    shortest_distances_with_options(graph, source, algorithm, &SearchOptions::default())
}

#[tracing::instrument(level = "debug", skip(graph, options))]
pub fn shortest_distances_with_options<N: NodeId>(
    graph: &Graph<N>,
    source: &N,
    algorithm: Algorithm,
    options: &SearchOptions,
) -> Result<BTreeMap<N, Cost>> {
    let config = select(algorithm, false, options)?;
    let tree = search(graph, config, source, None, None)?;
    Ok(tree.distances())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PathfindError;

    fn example() -> Graph<&'static str> {
        let mut builder = Graph::builder();
        builder.add_nodes(["A", "B", "C", "D"]);
        builder.add_edge(&"A", &"B", 1).unwrap();
        builder.add_edge(&"B", &"D", 4).unwrap();
        builder.add_edge(&"A", &"C", 2).unwrap();
        builder.add_edge(&"C", &"D", 1).unwrap();
        builder.build()
    }

    #[test]
    fn test_find_path_dijkstra() {
        let path = find_path(&example(), &"A", &"D", Algorithm::Dijkstra, None).unwrap();
        assert_eq!(path.nodes(), &["A", "C", "D"]);
        assert_eq!(path.cost().value(), 3.0);
    }

    #[test]
    fn test_find_path_astar() {
        let zero = |_: &&str| 0.0;
        let path = find_path(&example(), &"A", &"D", Algorithm::AStar, Some(&zero)).unwrap();
        assert_eq!(path.nodes(), &["A", "C", "D"]);

        let err = find_path(&example(), &"A", &"D", Algorithm::AStar, None).unwrap_err();
        assert!(matches!(err, PathfindError::MissingHeuristic { .. }));
    }

    #[test]
    fn test_heuristic_ignored_by_dijkstra() {
        // Wildly inadmissible, would mislead A*
        let misleading = |node: &&str| if *node == "C" { 100.0 } else { 0.0 };
        let graph = example();
        let path = find_path(&graph, &"A", &"D", Algorithm::Dijkstra, Some(&misleading)).unwrap();
        assert_eq!(path.nodes(), &["A", "C", "D"]);
    }

    #[test]
    fn test_find_path_same_node() {
        let path = find_path(&example(), &"B", &"B", Algorithm::Bfs, None).unwrap();
        assert_eq!(path.nodes(), &["B"]);
        assert_eq!(path.cost(), Cost::ZERO);
    }

    #[test]
    fn test_find_path_unreachable() {
        let err = find_path(&example(), &"D", &"A", Algorithm::BellmanFord, None).unwrap_err();
        assert!(err.is_unreachable());
    }

    #[test]
    fn test_find_disjoint_paths_example() {
        let set = find_disjoint_paths(&example(), &"A", &"D", 2, DisjointMode::Edge).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.total_cost().value(), 8.0);
    }

    #[test]
    fn test_shortest_distances() {
        let distances = shortest_distances(&example(), &"B", Algorithm::Dijkstra).unwrap();
        let values: Vec<_> = distances.iter().map(|(n, d)| (*n, d.value())).collect();
        assert_eq!(values, vec![("B", 0.0), ("D", 4.0)]);

        let err = shortest_distances(&example(), &"A", Algorithm::AStar).unwrap_err();
        assert!(matches!(err, PathfindError::MissingHeuristic { .. }));
    }

    #[test]
    fn test_negative_weight_rejected_before_search() {
        // A -> T is found before B -> T is ever scanned
        let mut builder = Graph::builder();
        builder.add_nodes(["A", "B", "T"]);
        builder.add_edge(&"A", &"T", 2).unwrap();
        builder.add_edge(&"A", &"B", 3).unwrap();
        builder.add_edge(&"B", &"T", -5).unwrap();
        let graph = builder.build();

        let err = find_path(&graph, &"A", &"T", Algorithm::Dijkstra, None).unwrap_err();
        assert!(matches!(err, PathfindError::NegativeWeight { .. }));
        let err = find_path(&graph, &"A", &"T", Algorithm::Bfs, None).unwrap_err();
        assert!(matches!(err, PathfindError::NegativeWeight { .. }));

        let path = find_path(&graph, &"A", &"T", Algorithm::BellmanFord, None).unwrap();
        assert_eq!(path.nodes(), &["A", "B", "T"]);
        assert_eq!(path.cost().value(), -2.0);

        // X -> Y is not reachable from A
        let graph = example().with_node("X").with_node("Y");
        let graph = graph.add_edge(&"X", &"Y", -1).unwrap();
        let err = shortest_distances(&graph, &"A", Algorithm::Dijkstra).unwrap_err();
        assert!(matches!(err, PathfindError::NegativeWeight { .. }));
    }

    #[test]
    fn test_options_validated() {
        let options = SearchOptions {
            tolerance: f64::INFINITY,
        };
        let graph = example();
        let err = find_path_with_options(&graph, &"A", &"D", Algorithm::Dijkstra, None, &options)
            .unwrap_err();
        assert!(matches!(err, PathfindError::InvalidValue { .. }));
    }
}
