use std::ops::Range;

use itertools::Itertools;

use crate::{error::check_node, *};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    /// The range does not borrow `self`.
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fails with [`GraphError::NodeOutOfRange`] if `u` is not a node of the graph
    fn check_node(&self, u: Node) -> error::Result<()> {
        check_node(u, self.number_of_nodes())
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges as loaded, i.e. including duplicates
    fn number_of_edges(&self) -> NumEdges;
}

/// Whether edges are interpreted with orientation.
/// Decided once at construction.
pub trait GraphType {
    fn is_directed(&self) -> bool;

    fn is_undirected(&self) -> bool {
        !self.is_directed()
    }
}

/// Traits pertaining getters for neighborhoods
pub trait AdjacencyList: GraphNodeOrder + Sized {
    type NeighborIter<'a>: Iterator<Item = Node> + 'a
    where
        Self: 'a;

    /// Returns an iterator over the (out-)neighbors of a given vertex in adjacency order.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> Self::NeighborIter<'_>;

    /// Returns the number of (outgoing) neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over the degrees of all nodes
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns pairs `(degree, number of nodes with this degree)` sorted by degree
    fn degree_distribution(&self) -> Vec<(NumNodes, NumNodes)> {
        let mut distr = self
            .degrees()
            .counts()
            .into_iter()
            .map(|(d, n)| (d, n as NumNodes))
            .collect_vec();
        distr.sort_by_key(|(d, _)| *d);
        distr
    }
}

/// Trait to test existence of edges in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the egde (u,v) exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;
}

/// Access to edge weights.
///
/// `weight` never signals absence: it falls back to [`EdgeWeights::default_weight`].
/// Use [`AdjacencyTest::has_edge`] or [`EdgeWeights::try_weight`] to detect missing edges.
pub trait EdgeWeights {
    /// Returns *true* if stored weights are honoured
    fn is_weighted(&self) -> bool;

    /// Weight assumed whenever no stored weight applies
    fn default_weight(&self) -> Weight;

    /// Returns the stored weight of `(u, v)` if the graph is weighted and the pair is stored
    fn try_weight(&self, u: Node, v: Node) -> Option<Weight>;

    /// Returns the stored weight of `(u, v)` or the default weight
    fn weight(&self, u: Node, v: Node) -> Weight {
        self.try_weight(u, v).unwrap_or(self.default_weight())
    }

    /// Returns the smallest weight [`EdgeWeights::weight`] reports for a loaded edge, or `None` if
    /// the graph is unweighted or has no edges
    fn min_weight(&self) -> Option<Weight>;
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch: Sized {
    /// Creates an undirected, unweighted graph.
    /// ** Panics if any endpoint is `>= n` **
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self;

    /// Creates an undirected, unweighted graph or fails if any endpoint is `>= n`
    fn try_from_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<Edge>>,
    ) -> error::Result<Self>;
}
