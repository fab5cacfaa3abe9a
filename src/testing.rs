//! Small graph constructors and brute-force references shared by the unit tests.

use itertools::Itertools;
use rand::Rng;

use crate::prelude::*;

/// Undirected cycle `0 - 1 - ... - (n-1) - 0`
pub fn cycle_graph<A: AdjacencyView>(n: NumNodes) -> Graph<A> {
    GraphBuilder::new(n)
        .edges((0..n).map(|u| (u, (u + 1) % n)))
        .try_build()
        .unwrap()
}

/// Undirected complete graph on `n` nodes
pub fn complete_graph<A: AdjacencyView>(n: NumNodes) -> Graph<A> {
    GraphBuilder::new(n)
        .edges((0..n).tuple_combinations::<(_, _)>())
        .try_build()
        .unwrap()
}

/// Random graph where each pair (ordered if `directed`) is an edge with probability `p`
pub fn random_graph<A: AdjacencyView>(
    rng: &mut impl Rng,
    n: NumNodes,
    p: f64,
    directed: bool,
) -> Graph<A> {
    let edges = (0..n)
        .cartesian_product(0..n)
        .filter(|&(u, v)| u != v && (directed || u < v))
        .filter(|_| rng.random_bool(p))
        .collect_vec();

    GraphBuilder::new(n)
        .directed(directed)
        .edges(edges)
        .try_build()
        .unwrap()
}

/// Like [`random_graph`] with uniform weights in `[0.5, 5.0)`
pub fn random_weighted_graph(
    rng: &mut impl Rng,
    n: NumNodes,
    p: f64,
    directed: bool,
) -> ListGraph {
    let edges = (0..n)
        .cartesian_product(0..n)
        .filter(|&(u, v)| u != v && (directed || u < v))
        .filter(|_| rng.random_bool(p))
        .collect_vec();

    let weighted = edges
        .into_iter()
        .map(|(u, v)| (u, v, rng.random_range(0.5..5.0)))
        .collect_vec();

    GraphBuilder::new(n)
        .directed(directed)
        .weighted(true)
        .weighted_edges(weighted)
        .try_build()
        .unwrap()
}

/// Hop distances between all pairs via Floyd–Warshall; unreachable pairs are [`INVALID_NODE`]
pub fn brute_force_hops<G: AdjacencyTest>(graph: &G) -> Vec<Vec<Node>> {
    let n = graph.len();
    let mut dist = vec![vec![INVALID_NODE; n]; n];
    for u in graph.vertices() {
        dist[u as usize][u as usize] = 0;
        for v in graph.vertices() {
            if u != v && graph.has_edge(u, v) {
                dist[u as usize][v as usize] = 1;
            }
        }
    }

    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if dist[i][k] != INVALID_NODE && dist[k][j] != INVALID_NODE {
                    dist[i][j] = dist[i][j].min(dist[i][k] + dist[k][j]);
                }
            }
        }
    }
    dist
}

/// Labels each node with the smallest node it is mutually reachable with
pub fn brute_force_component_ids<G: AdjacencyTest>(graph: &G) -> Vec<Node> {
    let hops = brute_force_hops(graph);
    graph
        .vertices()
        .map(|u| {
            graph
                .vertices()
                .find(|&v| {
                    hops[u as usize][v as usize] != INVALID_NODE
                        && hops[v as usize][u as usize] != INVALID_NODE
                })
                .unwrap()
        })
        .collect()
}

/// Minimum weight over all simple paths from `source` (exhaustive search, small graphs only)
pub fn brute_force_distances<G>(graph: &G, source: Node) -> Vec<Option<Weight>>
where
    G: AdjacencyList + EdgeWeights,
{
    fn recurse<G: AdjacencyList + EdgeWeights>(
        graph: &G,
        u: Node,
        cost: Weight,
        on_path: &mut [bool],
        best: &mut [Option<Weight>],
    ) {
        let entry = &mut best[u as usize];
        if entry.is_none_or(|b| cost < b) {
            *entry = Some(cost);
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
