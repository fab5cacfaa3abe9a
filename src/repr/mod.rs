/*!
# Graph Store

A [`Graph`] holds the vertex count, the edge list in load order, an edge-weight mapping and exactly
one adjacency representation. The representation is chosen through the type parameter:

- [`ListGraph`] stores one insertion-ordered neighbor vector per node ([`AdjList`]),
- [`MatrixGraph`] stores one bit row per node ([`AdjMatrix`]).

Algorithms only depend on the [`AdjacencyView`] capability (via [`AdjacencyList`] and
[`AdjacencyTest`]) and never on the concrete representation.
Graphs are built once through a [`GraphBuilder`] (or [`GraphFromScratch`]) and are immutable
afterwards.
*/

use fxhash::FxHashMap;
use itertools::Itertools;
use tracing::warn;

use crate::{error::GraphError, prelude::*};

mod list;
mod matrix;

pub use list::*;
pub use matrix::*;

/// Adjacency information of all nodes in one concrete representation
pub trait AdjacencyView: Clone {
    /// Creates the representation of `n` nodes without any arcs
    fn new(n: NumNodes) -> Self;

    type NeighborIter<'a>: Iterator<Item = Node> + 'a
    where
        Self: 'a;

    /// Returns the out-neighbors of `u` in adjacency order
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> Self::NeighborIter<'_>;

    /// Returns the number of entries `neighbors_of(u)` yields
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns *true* if the arc `u -> v` is stored
    /// ** Panics if `u >= n || v >= n` **
    fn has_arc(&self, u: Node, v: Node) -> bool;

    /// Stores the arc `u -> v`. Representations may keep duplicates.
    /// ** Panics if `u >= n || v >= n` **
    fn add_arc(&mut self, u: Node, v: Node);
}

/// A graph with vertices `0..n` and a single authoritative adjacency representation `A`
#[derive(Clone)]
pub struct Graph<A: AdjacencyView> {
    n: NumNodes,
    directed: bool,
    weighted: bool,
    default_weight: Weight,
    edges: Vec<Edge>,
    weights: FxHashMap<Edge, Weight>,
    adjacency: A,
}

/// Graph backed by adjacency lists
pub type ListGraph = Graph<AdjList>;

/// Graph backed by an adjacency matrix
pub type MatrixGraph = Graph<AdjMatrix>;

impl<A: AdjacencyView> Graph<A> {
    /// Returns the edges in load order (duplicates included)
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns all loaded edges together with the weight [`EdgeWeights::weight`] reports for them
    pub fn weighted_edges(&self) -> impl Iterator<Item = (Edge, Weight)> + '_ {
        self.edges
            .iter()
            .map(|&e| (e, self.weight(e.0, e.1)))
    }
}

impl<A: AdjacencyView> GraphNodeOrder for Graph<A> {
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }
}

impl<A: AdjacencyView> GraphEdgeOrder for Graph<A> {
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }
}

impl<A: AdjacencyView> GraphType for Graph<A> {
    fn is_directed(&self) -> bool {
        self.directed
    }
}

impl<A: AdjacencyView> AdjacencyList for Graph<A> {
    type NeighborIter<'a>
        = A::NeighborIter<'a>
    where
        Self: 'a;

    fn neighbors_of(&self, u: Node) -> Self::NeighborIter<'_> {
        self.adjacency.neighbors_of(u)
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.adjacency.degree_of(u)
    }
}

impl<A: AdjacencyView> AdjacencyTest for Graph<A> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.adjacency.has_arc(u, v)
    }
}

impl<A: AdjacencyView> EdgeWeights for Graph<A> {
    fn is_weighted(&self) -> bool {
        self.weighted
    }

    fn default_weight(&self) -> Weight {
        self.default_weight
    }

    fn try_weight(&self, u: Node, v: Node) -> Option<Weight> {
        if self.weighted {
            self.weights.get(&Edge(u, v)).copied()
        } else {
            None
        }
    }

    fn min_weight(&self) -> Option<Weight> {
        if !self.weighted {
            return None;
        }
        self.weighted_edges().map(|(_, w)| w).reduce(Weight::min)
    }
}

impl<A: AdjacencyView> GraphFromScratch for Graph<A> {
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        match Self::try_from_edges(n, edges) {
            Ok(graph) => graph,
            Err(err) => panic!("{err}"),
        }
    }

    fn try_from_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<Edge>>,
    ) -> crate::error::Result<Self> {
        GraphBuilder::new(n).edges(edges).try_build()
    }
}

/// Configures and validates the construction of a [`Graph`].
///
/// # Example
/// ```
/// use wgraphs::prelude::*;
///
/// let graph: ListGraph = GraphBuilder::new(3)
///     .weighted(true)
///     .weighted_edge(0, 1, 2.5)
///     .edge(1, 2)
///     .try_build()
///     .unwrap();
///
/// assert_eq!(graph.weight(1, 0), 2.5);
/// assert_eq!(graph.weight(1, 2), 1.0); // not stored, falls back
/// ```
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    n: NumNodes,
    directed: bool,
    weighted: bool,
    default_weight: Weight,
    edges: Vec<(Edge, Option<Weight>)>,
}

impl GraphBuilder {
    /// Starts an undirected, unweighted graph with `n` nodes
    pub fn new(n: NumNodes) -> Self {
        Self {
            n,
            directed: false,
            weighted: false,
            default_weight: UNIT_WEIGHT,
            edges: Vec::new(),
        }
    }

    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// If *false*, stored weights are ignored and every edge weighs `default_weight`
    pub fn weighted(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }

    /// Weight reported for unweighted graphs and for pairs without stored weight
    pub fn default_weight(mut self, weight: Weight) -> Self {
        self.default_weight = weight;
        self
    }

    /// Appends an edge without weight
    pub fn edge(mut self, u: Node, v: Node) -> Self {
        self.edges.push((Edge(u, v), None));
        self
    }

    /// Appends an edge with weight; a later weight for the same pair overrides earlier ones
    pub fn weighted_edge(mut self, u: Node, v: Node, weight: Weight) -> Self {
        self.edges.push((Edge(u, v), Some(weight)));
        self
    }

    /// Appends multiple edges without weight
    pub fn edges(mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        self.edges
            .extend(edges.into_iter().map(|e| (e.into(), None)));
        self
    }

    /// Appends multiple weighted edges
    pub fn weighted_edges(mut self, edges: impl IntoIterator<Item = impl Into<WeightedEdge>>) -> Self {
        self.edges.extend(edges.into_iter().map(|e| {
            let WeightedEdge { edge, weight } = e.into();
            (edge, Some(weight))
        }));
        self
    }

    /// Builds the graph in representation `A`.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeOutOfRange`] for the first edge with an endpoint `>= n`.
    pub fn try_build<A: AdjacencyView>(self) -> Result<Graph<A>, GraphError> {
        let n = self.n;
        if let Some(&(Edge(u, v), _)) = self
            .edges
            .iter()
            .find(|(Edge(u, v), _)| *u >= n || *v >= n)
        {
            return Err(GraphError::NodeOutOfRange {
                node: if u >= n { u } else { v },
                n,
            });
        }

        let loops = self.edges.iter().filter(|(e, _)| e.is_loop()).count();
        if loops > 0 {
            warn!(loops, "self-loops are tolerated but not supported by the algorithms");
        }

        let mut adjacency = A::new(n);
        let mut weights = FxHashMap::default();
        for &(Edge(u, v), weight) in &self.edges {
            adjacency.add_arc(u, v);
            if !self.directed {
                adjacency.add_arc(v, u);
            }

            if let Some(w) = weight {
                weights.insert(Edge(u, v), w);
                if !self.directed {
                    weights.insert(Edge(v, u), w);
                }
            }
        }

        Ok(Graph {
            n,
            directed: self.directed,
            weighted: self.weighted,
            default_weight: self.default_weight,
            edges: self.edges.into_iter().map(|(e, _)| e).collect_vec(),
            weights,
            adjacency,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_builder() -> GraphBuilder {
        GraphBuilder::new(5)
            .weighted(true)
            .weighted_edges([(0, 1, 3.0), (1, 2, -1.5), (3, 4, 0.5)])
            .edge(0, 4)
    }

    #[test]
    fn list_and_matrix_agree() {
        let list: ListGraph = sample_builder().try_build().unwrap();
        let matrix: MatrixGraph = sample_builder().try_build().unwrap();

        for u in list.vertices() {
            let mut a = list.neighbors_of(u).collect_vec();
            a.sort_unstable();
            assert_eq!(a, matrix.neighbors_of(u).collect_vec());
            assert_eq!(list.degree_of(u), matrix.degree_of(u));
            for v in list.vertices() {
                assert_eq!(list.has_edge(u, v), matrix.has_edge(u, v));
                assert_eq!(list.weight(u, v), matrix.weight(u, v));
            }
        }
    }

    #[test]
    fn list_preserves_insertion_order_and_duplicates() {
        let graph = ListGraph::from_edges(4, [(0, 3), (0, 1), (2, 0), (0, 1)]);
        assert_eq!(graph.number_of_edges(), 4);
        assert_eq!(graph.neighbors_of(0).collect_vec(), vec![3, 1, 2, 1]);
        assert_eq!(graph.neighbors_of(1).collect_vec(), vec![0, 0]);
        assert_eq!(graph.edges()[2], Edge(2, 0));
    }

    #[test]
    fn directed_graph_stores_orientation() {
        let graph: ListGraph = GraphBuilder::new(3)
            .directed(true)
            .edges([(0, 1), (1, 2)])
            .try_build()
            .unwrap();
        assert!(graph.is_directed());
        assert!(graph.has_edge(0, 1));
        assert!(!graph.has_edge(1, 0));
        assert_eq!(graph.degree_distribution(), vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn weights_of_weighted_graph() {
        let graph: ListGraph = sample_builder().try_build().unwrap();
        assert!(graph.is_weighted());
        assert_eq!(graph.weight(0, 1), 3.0);
        assert_eq!(graph.weight(1, 0), 3.0);
        assert_eq!(graph.weight(2, 1), -1.5);
        assert_eq!(graph.try_weight(0, 4), None);
        assert_eq!(graph.weight(0, 4), UNIT_WEIGHT);
        // absent edges also fall back; `weight` does not detect absence
        assert_eq!(graph.weight(2, 3), UNIT_WEIGHT);
        assert!(!graph.has_edge(2, 3));
        assert_eq!(graph.min_weight(), Some(-1.5));
    }

    #[test]
    fn weights_of_unweighted_graph() {
        let graph: ListGraph = sample_builder()
            .weighted(false)
            .default_weight(2.0)
            .try_build()
            .unwrap();
        assert!(!graph.is_weighted());
        assert_eq!(graph.weight(0, 1), 2.0);
        assert_eq!(graph.weight(1, 2), 2.0);
        assert_eq!(graph.try_weight(0, 1), None);
        assert_eq!(graph.min_weight(), None);
    }

    #[test]
    fn min_weight_covers_default_weight() {
        let graph: ListGraph = sample_builder().default_weight(-7.0).try_build().unwrap();
        assert_eq!(graph.min_weight(), Some(-7.0));

        // every edge carries a stored weight, so the default never applies
        let graph: ListGraph = GraphBuilder::new(3)
            .weighted(true)
            .default_weight(-7.0)
            .weighted_edges([(0, 1, 2.0), (1, 2, 0.5)])
            .try_build()
            .unwrap();
        assert_eq!(graph.min_weight(), Some(0.5));
    }

    #[test]
    fn matrix_cells() {
        let graph: MatrixGraph = sample_builder().try_build().unwrap();
        assert_eq!(graph.cell(0, 1), 3.0);
        assert_eq!(graph.cell(4, 0), UNIT_WEIGHT);
        assert_eq!(graph.cell(0, 2), 0.0);
    }

    #[test]
    fn rejects_out_of_range_endpoints() {
        let result = GraphBuilder::new(3).edge(0, 3).try_build::<AdjList>();
        assert_eq!(
            result.err(),
            Some(GraphError::NodeOutOfRange { node: 3, n: 3 })
        );
        assert!(ListGraph::try_from_edges(2, [(5, 0)]).is_err());
    }

    #[test]
    #[should_panic]
    fn from_edges_panics_out_of_range() {
        let _ = MatrixGraph::from_edges(2, [(0, 2)]);
    }

    #[test]
    fn self_loops_are_tolerated() {
        let graph = ListGraph::from_edges(2, [(0, 0), (0, 1)]);
        assert!(graph.has_edge(0, 0));
        assert_eq!(graph.degree_of(0), 3);
    }
}
