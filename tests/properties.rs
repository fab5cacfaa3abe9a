use itertools::Itertools;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use wgraphs::{algo::*, prelude::*};

fn small_graph() -> impl Strategy<Value = (NumNodes, Vec<(Node, Node)>)> {
    (1 as NumNodes..9).prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n), 0..20)))
}

fn small_weighted_graph() -> impl Strategy<Value = (NumNodes, Vec<(Node, Node, Weight)>)> {
    (1 as NumNodes..8).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec((0..n, 0..n, 0.0..10.0f64), 0..16),
        )
    })
}

/// Hop distances via Bellman-Ford style relaxation over the edge list
fn reference_hops(n: NumNodes, arcs: &[(Node, Node)], source: Node) -> Vec<Option<u32>> {
    let mut dist = vec![None; n as usize];
    dist[source as usize] = Some(0);
    for _ in 0..n {
        for &(u, v) in arcs {
            if let Some(du) = dist[u as usize] {
                if dist[v as usize].is_none_or(|dv| du + 1 < dv) {
                    dist[v as usize] = Some(du + 1);
                }
            }
        }
    }
    dist
}

fn both_directions(edges: &[(Node, Node)]) -> Vec<(Node, Node)> {
    edges.iter().flat_map(|&(u, v)| [(u, v), (v, u)]).collect()
}

fn reference_simple_path_distances(graph: &ListGraph, source: Node) -> Vec<Option<Weight>> {
    fn recurse(
        graph: &ListGraph,
        u: Node,
        cost: Weight,
        on_path: &mut Vec<bool>,
        best: &mut Vec<Option<Weight>>,
    ) {
        if best[u as usize].is_none_or(|b| cost < b) {
            best[u as usize] = Some(cost);
        }
        for v in graph.neighbors_of(u) {
            if !on_path[v as usize] {
                on_path[v as usize] = true;
                recurse(graph, v, cost + graph.weight(u, v), on_path, best);
                on_path[v as usize] = false;
            }
        }
    }

    let mut on_path = vec![false; graph.len()];
    let mut best = vec![None; graph.len()];
    on_path[source as usize] = true;
    recurse(graph, source, 0.0, &mut on_path, &mut best);
    best
}

proptest! {
    #[test]
    fn bfs_levels_are_hop_distances((n, edges) in small_graph(), directed in any::<bool>()) {
        let graph: ListGraph = GraphBuilder::new(n)
            .directed(directed)
            .edges(&edges)
            .try_build()
            .unwrap();
        let arcs = if directed { edges.clone() } else { both_directions(&edges) };

        for s in graph.vertices() {
            let tree = graph.try_bfs_tree(s).unwrap();
            let reference = reference_hops(n, &arcs, s);
            for v in graph.vertices() {
                prop_assert_eq!(tree.level_of(v), reference[v as usize]);
                prop_assert_eq!(tree.is_visited(v), reference[v as usize].is_some());
            }
        }
    }

    #[test]
    fn representations_agree_on_traversals((n, edges) in small_graph()) {
        let list = ListGraph::from_edges(n, &edges);
        let matrix = MatrixGraph::from_edges(n, &edges);

        for s in list.vertices() {
            prop_assert_eq!(
                list.try_bfs_tree(s).unwrap().levels(),
                matrix.try_bfs_tree(s).unwrap().levels()
            );
            prop_assert_eq!(
                list.dfs(s).sorted().collect_vec(),
                matrix.dfs(s).sorted().collect_vec()
            );
        }
    }

    #[test]
    fn components_partition_vertices((n, edges) in small_graph()) {
        let graph = ListGraph::from_edges(n, &edges);
        let components = graph.component_list();

        let mut all = components.iter().flatten().copied().collect_vec();
        all.sort_unstable();
        prop_assert_eq!(all, graph.vertices().collect_vec());
        prop_assert!(components.sizes().tuple_windows().all(|(a, b)| a >= b));

        let ids = components.component_ids(n);
        let arcs = both_directions(&edges);
        for u in graph.vertices() {
            let reachable = reference_hops(n, &arcs, u);
            for v in graph.vertices() {
                prop_assert_eq!(ids[u as usize] == ids[v as usize], reachable[v as usize].is_some());
            }
        }
    }

    #[test]
    fn dijkstra_matches_simple_path_search(
        (n, edges) in small_weighted_graph(),
        directed in any::<bool>(),
    ) {
        let graph: ListGraph = GraphBuilder::new(n)
            .directed(directed)
            .weighted(true)
            .weighted_edges(edges)
            .try_build()
            .unwrap();

        let paths = graph.try_dijkstra(0).unwrap();
        let reference = reference_simple_path_distances(&graph, 0);
        for v in graph.vertices() {
            match (paths.distance_to(v), reference[v as usize]) {
                (Some(a), Some(b)) => prop_assert!((a - b).abs() < 1e-9, "{} vs {}", a, b),
                (a, b) => prop_assert_eq!(a, b),
            }
        }
    }

    #[test]
    fn reconstructed_paths_follow_edges((n, edges) in small_graph(), source in 0u32..8) {
        let graph = MatrixGraph::from_edges(n, &edges);
        let source = source % n;
        let paths = graph.try_shortest_paths(source).unwrap();

        for v in graph.vertices() {
            match paths.path_to(v) {
                Some(path) => {
                    prop_assert_eq!(path.first(), Some(&source));
                    prop_assert_eq!(path.last(), Some(&v));
                    prop_assert!(path.iter().tuple_windows().all(|(&a, &b)| graph.has_edge(a, b)));
                    prop_assert_eq!(Some((path.len() - 1) as Weight), paths.distance_to(v));
                }
                None => prop_assert!(!paths.is_reachable(v)),
            }
        }
    }

    #[test]
    fn heuristic_succeeds_on_complete_graphs(n in 3 as NumNodes..16, seed in any::<u64>()) {
        let graph = ListGraph::from_edges(n, (0..n).tuple_combinations::<(_, _)>());
        let attempt = graph.hamiltonian_cycle(&mut Pcg64Mcg::seed_from_u64(seed));

        prop_assert!(attempt.success);
        prop_assert_eq!(attempt.cycle.len(), n as usize + 1);
        prop_assert_eq!(attempt.cycle.first(), attempt.cycle.last());
        prop_assert!(attempt.cycle[..n as usize].iter().all_unique());
    }

    #[test]
    fn heuristic_fails_with_isolated_vertex(n in 2 as NumNodes..12, seed in any::<u64>()) {
        // complete graph on 0..n-1, node n-1 stays isolated
        let graph = MatrixGraph::from_edges(n, (0..n - 1).tuple_combinations::<(_, _)>());
        let attempt = HamiltonianSearch::new()
            .max_failed_rounds(5)
            .run(&graph, &mut Pcg64Mcg::seed_from_u64(seed));

        prop_assert!(!attempt.success);
        prop_assert!(!attempt.cycle.contains(&(n - 1)) || attempt.cycle.len() == 1);
    }
}

#[test]
fn four_cycle_scenario() {
    let graph = ListGraph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
    assert_eq!(graph.try_bfs_tree(0).unwrap().levels(), &[0, 1, 2, 1]);
    assert_eq!(
        graph.try_shortest_paths(0).unwrap().distances(),
        &[0.0, 1.0, 2.0, 1.0]
    );
}

#[test]
fn two_pair_scenario() {
    let graph = ListGraph::from_edges(4, [(0, 1), (2, 3)]);
    let components = graph.component_list();
    assert_eq!(components.sizes().collect_vec(), vec![2, 2]);
}
