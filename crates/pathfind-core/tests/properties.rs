//! Behavioural properties of the public API

use std::collections::HashSet;

use pathfind_core::graph::{search, select};
use pathfind_core::{
    find_disjoint_paths, find_path, shortest_distances, Algorithm, DisjointMode, DisjointPathSet,
    EdgeId, Graph, NodeId, PathfindError, SearchOptions,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

type Cell = (i32, i32);

/// Grid with 4-neighbour moves; weight of entering a cell comes from `weight`
fn grid(rows: i32, cols: i32, blocked: &[Cell], weight: impl Fn(Cell) -> i32) -> Graph<Cell> {
    let mut builder = Graph::builder();
    for r in 0..rows {
        for c in 0..cols {
            if !blocked.contains(&(r, c)) {
                builder.add_node((r, c));
            }
        }
    }
    for r in 0..rows {
        for c in 0..cols {
            for (dr, dc) in [(0, 1), (1, 0), (0, -1), (-1, 0)] {
                let (from, to) = ((r, c), (r + dr, c + dc));
                if builder.has_node(&from) && builder.has_node(&to) {
                    builder.add_edge(&from, &to, weight(to)).unwrap();
                }
            }
        }
    }
    builder.build()
}

fn uneven(cell: Cell) -> i32 {
    (cell.0 * 7 + cell.1 * 13) % 9 + 1
}

fn maze() -> Graph<Cell> {
    grid(6, 6, &[(1, 1), (1, 2), (1, 3), (3, 2), (3, 3), (3, 4), (4, 1)], |_| 1)
}

fn manhattan(target: Cell) -> impl Fn(&Cell) -> f64 {
    move |cell: &Cell| ((target.0 - cell.0).abs() + (target.1 - cell.1).abs()) as f64
}

fn example() -> Graph<&'static str> {
    let mut builder = Graph::builder();
    builder.add_nodes(["A", "B", "C", "D"]);
    builder.add_edge(&"A", &"B", 1).unwrap();
    builder.add_edge(&"B", &"D", 4).unwrap();
    builder.add_edge(&"A", &"C", 2).unwrap();
    builder.add_edge(&"C", &"D", 1).unwrap();
    builder.build()
}

fn two_paths() -> Graph<&'static str> {
    let mut builder = Graph::builder();
    builder.add_nodes(["A", "B", "C", "D", "E", "F", "G", "H"]);
    let edges = [
        ("A", "B", 1),
        ("A", "E", 1),
        ("B", "C", 1),
        ("C", "D", 1),
        ("D", "E", 1),
        ("D", "F", 1),
        ("D", "H", 1),
        ("E", "F", 3),
        ("F", "G", 1),
        ("G", "H", 1),
    ];
    for (a, b, weight) in edges {
        builder.add_undirected_edge(&a, &b, weight).unwrap();
    }
    builder.build()
}

type Route<N> = (Vec<EdgeId>, Vec<N>, f64);

/// Every simple path from `source` to `target`, as edge ids with node lists
fn simple_paths<N: NodeId>(graph: &Graph<N>, source: &N, target: &N) -> Vec<Route<N>> {
    fn walk<N: NodeId>(
        graph: &Graph<N>,
        target: &N,
        nodes: &mut Vec<N>,
        edges: &mut Vec<EdgeId>,
        cost: f64,
        found: &mut Vec<Route<N>>,
    ) {
        let current = nodes.last().unwrap().clone();
        if &current == target {
            found.push((edges.clone(), nodes.clone(), cost));
            return;
        }
        for edge in graph.outbound_edges(&current).unwrap() {
            if nodes.contains(&edge.to) {
                continue;
            }
            nodes.push(edge.to.clone());
            edges.push(edge.id);
            walk(graph, target, nodes, edges, cost + edge.weight.value(), found);
            nodes.pop();
            edges.pop();
        }
    }

    let mut found = Vec::new();
    let mut nodes = vec![source.clone()];
    walk(graph, target, &mut nodes, &mut Vec::new(), 0.0, &mut found);
    found
}

fn routes_disjoint<N: NodeId>(a: &Route<N>, b: &Route<N>, mode: DisjointMode) -> bool {
    match mode {
        DisjointMode::Edge => a.0.iter().all(|id| !b.0.contains(id)),
        DisjointMode::Node => {
            let inner = |route: &Route<N>| route.1[1..route.1.len() - 1].to_vec();
            let theirs = inner(b);
            inner(a).iter().all(|node| !theirs.contains(node))
        }
    }
}

/// Size and cost of the largest set of at most `k` disjoint simple paths,
/// cheapest such set, by exhaustive search
fn brute_force<N: NodeId>(
    graph: &Graph<N>,
    source: &N,
    target: &N,
    k: usize,
    mode: DisjointMode,
) -> (usize, f64) {
    fn extend<N: NodeId>(
        routes: &[Route<N>],
        start: usize,
        mode: DisjointMode,
        chosen: &mut Vec<usize>,
        cost: f64,
        best: &mut [Option<f64>],
    ) {
        let count = chosen.len();
        best[count] = Some(best[count].map_or(cost, |b| b.min(cost)));
        if count + 1 == best.len() {
            return;
        }
        for next in start..routes.len() {
            let fits = chosen
                .iter()
                .all(|&i| routes_disjoint(&routes[i], &routes[next], mode));
            if fits {
                chosen.push(next);
                extend(routes, next + 1, mode, chosen, cost + routes[next].2, best);
                chosen.pop();
            }
        }
    }

    let routes = simple_paths(graph, source, target);
    let mut best = vec![None; k + 1];
    extend(&routes, 0, mode, &mut Vec::new(), 0.0, &mut best);
    best.iter()
        .enumerate()
        .rev()
        .find_map(|(count, cost)| cost.map(|cost| (count, cost)))
        .unwrap_or((0, 0.0))
}

/// Random digraph on `0..n` without parallel edges or self-loops.
///
/// Acyclic graphs only have edges `i -> j` with `i < j` and may carry
/// negative weights.
fn random_digraph(rng: &mut ChaCha8Rng, acyclic: bool) -> Graph<usize> {
    let n: usize = rng.gen_range(5..=7);
    let mut builder = Graph::builder();
    builder.add_nodes(0..n);
    for from in 0..n {
        for to in 0..n {
            if from == to || (acyclic && to < from) || !rng.gen_bool(0.4) {
                continue;
            }
            let weight: i32 = if acyclic {
                rng.gen_range(-4..=5)
            } else {
                rng.gen_range(0..=5)
            };
            builder.add_edge(&from, &to, weight).unwrap();
        }
    }
    builder.build()
}

fn assert_disjoint<N: NodeId>(set: &DisjointPathSet<N>) {
    let mut edges = HashSet::new();
    let mut nodes = HashSet::new();
    for path in set.paths() {
        for id in path.edge_ids() {
            assert!(edges.insert(id), "edge {} shared", id);
        }
        if set.mode() == DisjointMode::Node {
            for node in path.intermediate_nodes() {
                assert!(nodes.insert(node.clone()), "node {:?} shared", node);
            }
        }
    }
}

#[test]
fn test_dijkstra_and_bellman_ford_agree_on_non_negative_weights() {
    let graph = grid(6, 7, &[(2, 3), (3, 3)], uneven);
    for source in [(0, 0), (5, 6), (2, 2)] {
        let dijkstra = shortest_distances(&graph, &source, Algorithm::Dijkstra).unwrap();
        let bellman = shortest_distances(&graph, &source, Algorithm::BellmanFord).unwrap();
        assert_eq!(dijkstra, bellman);
        assert_eq!(dijkstra.len(), graph.node_count());
    }
}

#[test]
fn test_astar_matches_dijkstra_with_admissible_heuristic() {
    let graph = grid(6, 7, &[(2, 3), (3, 3)], uneven);
    let options = SearchOptions::default();
    for target in [(5, 6), (0, 6), (4, 3)] {
        let heuristic = manhattan(target);
        let astar = search(
            &graph,
            select(Algorithm::AStar, true, &options).unwrap(),
            &(0, 0),
            Some(&target),
            Some(&heuristic),
        )
        .unwrap();
        let dijkstra = search(
            &graph,
            select(Algorithm::Dijkstra, false, &options).unwrap(),
            &(0, 0),
            Some(&target),
            None,
        )
        .unwrap();
        assert_eq!(astar.distance(&target), dijkstra.distance(&target));
        assert!(astar.stats().iterations <= dijkstra.stats().iterations);
    }
}

#[test]
fn test_bfs_finds_fewest_hops() {
    let graph = maze();
    for target in [(5, 5), (2, 2), (4, 0)] {
        let bfs = find_path(&graph, &(0, 0), &target, Algorithm::Bfs, None).unwrap();
        let dijkstra = find_path(&graph, &(0, 0), &target, Algorithm::Dijkstra, None).unwrap();
        assert_eq!(bfs.hops(), dijkstra.hops());
        assert_eq!(bfs.cost(), dijkstra.cost());
    }
}

#[test]
fn test_path_cost_matches_edge_weights() {
    let graph = grid(5, 5, &[(1, 1), (2, 3)], uneven);
    let heuristic = manhattan((4, 4));
    for algorithm in [
        Algorithm::Dijkstra,
        Algorithm::AStar,
        Algorithm::BellmanFord,
        Algorithm::Bfs,
        Algorithm::Dfs,
    ] {
        let path = find_path(&graph, &(0, 0), &(4, 4), algorithm, Some(&heuristic)).unwrap();
        assert_eq!(path.total_weight(), path.cost(), "{}", algorithm);
        assert_eq!(path.source(), &(0, 0));
        assert_eq!(path.target(), &(4, 4));
        for pair in path.edges().windows(2) {
            assert_eq!(pair[0].to, pair[1].from);
        }
    }
}

#[test]
fn test_repeated_queries_are_identical() {
    let graph = grid(5, 5, &[(2, 2)], uneven);
    let first = find_path(&graph, &(0, 0), &(4, 4), Algorithm::Dijkstra, None).unwrap();
    let second = find_path(&graph, &(0, 0), &(4, 4), Algorithm::Dijkstra, None).unwrap();
    assert_eq!(first, second);

    let first = find_disjoint_paths(&graph, &(0, 0), &(4, 4), 2, DisjointMode::Node).unwrap();
    let second = find_disjoint_paths(&graph, &(0, 0), &(4, 4), 2, DisjointMode::Node).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_disjoint_sets_are_minimal_and_disjoint() {
    let fixtures = [(two_paths(), "A", "H"), (example(), "A", "D")];
    for (graph, source, target) in &fixtures {
        for mode in [DisjointMode::Edge, DisjointMode::Node] {
            let set = find_disjoint_paths(graph, source, target, 2, mode).unwrap();
            assert!(set.len() <= 2);
            assert_disjoint(&set);
            let (count, best) = brute_force(graph, source, target, 2, mode);
            assert_eq!(set.len(), count, "{} mode", mode);
            assert_eq!(set.total_cost().value(), best, "{} mode", mode);
        }
    }
}

#[test]
fn test_disjoint_sets_match_brute_force_on_random_graphs() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for trial in 0..40 {
        let graph = random_digraph(&mut rng, false);
        let target = graph.node_count() - 1;
        for k in [2, 3] {
            for mode in [DisjointMode::Edge, DisjointMode::Node] {
                let (count, best) = brute_force(&graph, &0, &target, k, mode);
                let result = find_disjoint_paths(&graph, &0, &target, k, mode);
                if count == 0 && mode == DisjointMode::Node {
                    // Node mode needs a potential for the target
                    let err = result.unwrap_err();
                    assert!(matches!(err, PathfindError::InvalidGraph { .. }));
                    continue;
                }

                let set = result.unwrap();
                let context = format!("trial {} k={} {} mode", trial, k, mode);
                assert_eq!(set.len(), count, "{}", context);
                assert_eq!(set.total_cost().value(), best, "{}", context);
                assert_eq!(set.is_complete(), count == k, "{}", context);
                assert_disjoint(&set);
                for path in set.paths() {
                    assert_eq!((path.source(), path.target()), (&0, &target));
                    assert_eq!(path.total_weight(), path.cost());
                }
            }
        }
    }
}

#[test]
fn test_edge_disjoint_sets_match_brute_force_with_negative_weights() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for trial in 0..40 {
        let graph = random_digraph(&mut rng, true);
        let target = graph.node_count() - 1;
        for k in [2, 3] {
            let (count, best) = brute_force(&graph, &0, &target, k, DisjointMode::Edge);
            let set = find_disjoint_paths(&graph, &0, &target, k, DisjointMode::Edge).unwrap();
            let context = format!("trial {} k={}", trial, k);
            assert_eq!(set.len(), count, "{}", context);
            assert_eq!(set.total_cost().value(), best, "{}", context);
            assert_disjoint(&set);
        }

        if graph.has_negative_weight() {
            let err = find_disjoint_paths(&graph, &0, &target, 2, DisjointMode::Node).unwrap_err();
            assert!(matches!(err, PathfindError::NegativeWeight { .. }));
        }
    }
}

#[test]
fn test_negative_three_cycle_is_detected() {
    let mut builder = Graph::builder();
    builder.add_nodes([0, 1, 2, 3]);
    builder.add_edge(&0, &1, 5).unwrap();
    builder.add_edge(&1, &2, 2).unwrap();
    builder.add_edge(&2, &3, -4).unwrap();
    builder.add_edge(&3, &1, 1).unwrap();
    let graph = builder.build();

    let err = find_path(&graph, &0, &3, Algorithm::BellmanFord, None).unwrap_err();
    assert!(matches!(err, PathfindError::NegativeCycle { .. }));
}

#[test]
fn test_example_shortest_path() {
    let path = find_path(&example(), &"A", &"D", Algorithm::Dijkstra, None).unwrap();
    assert_eq!(path.nodes(), &["A", "C", "D"]);
    assert_eq!(path.cost().value(), 3.0);
}

#[test]
fn test_example_edge_disjoint_paths() {
    let set = find_disjoint_paths(&example(), &"A", &"D", 2, DisjointMode::Edge).unwrap();
    let nodes: Vec<_> = set.paths().iter().map(|p| p.nodes().to_vec()).collect();
    assert_eq!(nodes, vec![vec!["A", "C", "D"], vec!["A", "B", "D"]]);
    let costs: Vec<_> = set.paths().iter().map(|p| p.cost().value()).collect();
    assert_eq!(costs, vec![3.0, 5.0]);
    assert_eq!(set.total_cost().value(), 8.0);
    assert_disjoint(&set);
}
