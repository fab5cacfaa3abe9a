/*!
Single-source shortest paths.

- Unweighted graphs use BFS: the distance of a node is its hop count.
- Weighted graphs use Dijkstra's algorithm with a binary heap. Negative weights are handled by
  shifting every edge by `-min_weight` during the relaxation and subtracting
  `edges_on_path * -min_weight` from each final distance.

# Known limitation
The shift penalizes paths with many edges, so when a shorter path uses more edges than a
longer one, the corrected distance belongs to the path that was optimal under the *shifted*
weights. Results are only exact if the shift preserves the order of the relevant path weights
(which is always the case if no weight is negative).
*/

use std::{cmp::Ordering, collections::BinaryHeap};

use tracing::debug;

use super::*;

/// Distance to an unreached node
pub const UNREACHED: Weight = Weight::INFINITY;

/// Distances and shortest-path tree from a single source
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    source: Node,
    distances: Vec<Weight>,
    parents: Vec<Node>,
    weight_shift: Weight,
}

impl ShortestPaths {
    pub fn source(&self) -> Node {
        self.source
    }

    /// Returns *true* if `u` is reachable from the source
    /// ** Panics if `u >= n` **
    pub fn is_reachable(&self, u: Node) -> bool {
        self.distances[u as usize] != UNREACHED
    }

    /// Returns the distance of `u` or `None` if `u` is unreachable
    /// ** Panics if `u >= n` **
    pub fn distance_to(&self, u: Node) -> Option<Weight> {
        self.is_reachable(u).then(|| self.distances[u as usize])
    }

    /// Returns the distance of `u` or `None` if `u` is unreachable.
    ///
    /// # Errors
    /// Fails with [`GraphError::NodeOutOfRange`] if `u >= n`.
    pub fn try_distance_to(&self, u: Node) -> Result<Option<Weight>> {
        self.check_target(u)?;
        Ok(self.distance_to(u))
    }

    /// Returns the predecessor of `u` on its shortest path
    /// ** Panics if `u >= n` **
    pub fn parent_of(&self, u: Node) -> Option<Node> {
        optional_node(self.parents[u as usize])
    }

    /// Distance array with [`UNREACHED`] for unreachable nodes
    pub fn distances(&self) -> &[Weight] {
        &self.distances
    }

    /// Parent array with [`INVALID_NODE`] for the source and unreachable nodes
    pub fn parents(&self) -> &[Node] {
        &self.parents
    }

    /// Amount added to every edge weight during the relaxation (`0` without negative weights)
    pub fn weight_shift(&self) -> Weight {
        self.weight_shift
    }

    /// Returns the shortest path from the source to `target` (both included)
    /// ** Panics if `target >= n` **
    pub fn path_to(&self, target: Node) -> Option<Vec<Node>> {
        reconstruct_path(&self.parents, self.source, target)
    }

    /// Returns the shortest path from the source to `target` (both included), or `None` if
    /// `target` is unreachable.
    ///
    /// # Errors
    /// Fails with [`GraphError::NodeOutOfRange`] if `target >= n`.
    pub fn try_path_to(&self, target: Node) -> Result<Option<Vec<Node>>> {
        self.check_target(target)?;
        Ok(self.path_to(target))
    }

    /// Returns the number of edges on the path to `target`
    /// ** Panics if `target >= n` **
    pub fn edge_count_to(&self, target: Node) -> Option<usize> {
        edge_count(&self.parents, self.source, target)
    }

    fn check_target(&self, target: Node) -> Result<()> {
        check_node(target, self.distances.len() as NumNodes)
    }
}

/// Follows the parent links from `target` back to `source` and returns the path in
/// source-to-target order, or `None` if `target` is not connected to `source` in the tree.
///
/// ** Panics if `target >= parents.len()` **
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let parents = [INVALID_NODE, 0, 1, INVALID_NODE];
/// assert_eq!(reconstruct_path(&parents, 0, 2), Some(vec![0, 1, 2]));
/// assert_eq!(reconstruct_path(&parents, 0, 3), None);
/// ```
pub fn reconstruct_path(parents: &[Node], source: Node, target: Node) -> Option<Vec<Node>> {
    let mut path = vec![target];
    let mut u = target;
    while u != source {
        u = optional_node(parents[u as usize])?;
        path.push(u);
        if path.len() > parents.len() {
            return None;
        }
    }
    path.reverse();
    Some(path)
}

fn edge_count(parents: &[Node], source: Node, target: Node) -> Option<usize> {
    let mut count = 0;
    let mut u = target;
    while u != source {
        u = optional_node(parents[u as usize])?;
        count += 1;
        if count > parents.len() {
            return None;
        }
    }
    Some(count)
}

/// Result of an all-destinations query for a single target
#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    pub target: Node,
    pub route: Route,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Unreachable,
    Reachable { path: Vec<Node>, distance: Weight },
}

/// Heap entry ordered such that `BinaryHeap` pops the smallest cost first (ties: smallest node)
#[derive(Debug, Clone, Copy, PartialEq)]
struct State {
    cost: Weight,
    node: Node,
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn dijkstra<G>(graph: &G, source: Node) -> ShortestPaths
where
    G: AdjacencyList + EdgeWeights,
{
    // `min_weight` includes the default weight of edges without stored weight
    let weight_shift = match graph.min_weight() {
        Some(w) if w < 0.0 => -w,
        _ => 0.0,
    };
    if weight_shift > 0.0 {
        debug!(source, weight_shift, "shifting negative edge weights");
    }

    let n = graph.len();
    let mut distances = vec![UNREACHED; n];
    let mut parents = vec![INVALID_NODE; n];
    let mut heap = BinaryHeap::new();

    distances[source as usize] = 0.0;
    heap.push(State {
        cost: 0.0,
        node: source,
    });

    while let Some(State { cost, node: u }) = heap.pop() {
        // outdated entry
        if cost > distances[u as usize] {
            continue;
        }

        for v in graph.neighbors_of(u) {
            let next = cost + graph.weight(u, v) + weight_shift;
            if next < distances[v as usize] {
                distances[v as usize] = next;
                parents[v as usize] = u;
                heap.push(State { cost: next, node: v });
            }
        }
    }

    if weight_shift > 0.0 {
        for v in 0..n as Node {
            if let Some(edges) = distances[v as usize]
                .is_finite()
                .then(|| edge_count(&parents, source, v))
                .flatten()
            {
                distances[v as usize] -= edges as Weight * weight_shift;
            }
        }
    }

    ShortestPaths {
        source,
        distances,
        parents,
        weight_shift,
    }
}

fn hop_distances<G>(graph: &G, source: Node) -> ShortestPaths
where
    G: AdjacencyList,
{
    let tree = graph.bfs_with_predecessor(source).search_tree(source);
    let distances = tree
        .levels()
        .iter()
        .map(|&l| {
            if l == INVALID_NODE {
                UNREACHED
            } else {
                l as Weight
            }
        })
        .collect();

    ShortestPaths {
        source,
        distances,
        parents: tree.parents().to_vec(),
        weight_shift: 0.0,
    }
}

/// Provides shortest-path queries directly on graphs
pub trait ShortestPath: AdjacencyList + EdgeWeights + Sized {
    /// Runs Dijkstra's algorithm (with negative-weight shift) from `source`.
    ///
    /// # Errors
    /// Fails with [`GraphError::NodeOutOfRange`] if `source >= n`.
    fn try_dijkstra(&self, source: Node) -> Result<ShortestPaths> {
        self.check_node(source)?;
        Ok(dijkstra(self, source))
    }

    /// Computes hop distances from `source` via BFS, ignoring all weights.
    ///
    /// # Errors
    /// Fails with [`GraphError::NodeOutOfRange`] if `source >= n`.
    fn try_hop_distances(&self, source: Node) -> Result<ShortestPaths> {
        self.check_node(source)?;
        Ok(hop_distances(self, source))
    }

    /// Uses Dijkstra for weighted graphs and BFS otherwise.
    ///
    /// # Errors
    /// Fails with [`GraphError::NodeOutOfRange`] if `source >= n`.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g: ListGraph = GraphBuilder::new(3)
    ///     .weighted(true)
    ///     .weighted_edges([(0, 1, 1.0), (1, 2, 1.0), (0, 2, 5.0)])
    ///     .try_build()
    ///     .unwrap();
    ///
    /// let paths = g.try_shortest_paths(0).unwrap();
    /// assert_eq!(paths.distance_to(2), Some(2.0));
    /// assert_eq!(paths.path_to(2), Some(vec![0, 1, 2]));
    /// ```
    fn try_shortest_paths(&self, source: Node) -> Result<ShortestPaths> {
        if self.is_weighted() {
            self.try_dijkstra(source)
        } else {
            self.try_hop_distances(source)
        }
    }

    /// Runs one shortest-path computation from `source` and reports every node
    /// either as unreachable or with its path and distance.
    ///
    /// # Errors
    /// Fails with [`GraphError::NodeOutOfRange`] if `source >= n`.
    fn try_all_destinations(&self, source: Node) -> Result<Vec<Destination>> {
        let paths = self.try_shortest_paths(source)?;
        Ok(self
            .vertices()
            .map(|target| {
                let route = match (paths.path_to(target), paths.distance_to(target)) {
                    (Some(path), Some(distance)) => Route::Reachable { path, distance },
                    _ => Route::Unreachable,
                };
                Destination { target, route }
            })
            .collect())
    }
}

impl<G> ShortestPath for G where G: AdjacencyList + EdgeWeights + Sized {}
