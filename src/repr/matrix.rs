use stream_bitset::prelude::{
    BitmaskSliceStream, BitmaskStreamConsumer, BitmaskStreamToIndices, ToBitmaskStream,
};

use super::*;

/// Adjacency-matrix representation.
///
/// Row `u` is a bitset with bit `v` set iff the arc `u -> v` exists; the numeric value of a cell
/// is obtained through [`Graph::cell`]. Neighbors are reported in increasing order and duplicate
/// edges collapse into a single cell.
#[derive(Clone)]
pub struct AdjMatrix {
    rows: Vec<NodeBitSet>,
}

impl AdjacencyView for AdjMatrix {
    fn new(n: NumNodes) -> Self {
        Self {
            rows: vec![NodeBitSet::new(n); n as usize],
        }
    }

    type NeighborIter<'a>
        = BitmaskStreamToIndices<BitmaskSliceStream<'a>, Node, true>
    where
        Self: 'a;

    fn neighbors_of(&self, u: Node) -> Self::NeighborIter<'_> {
        self.rows[u as usize].bitmask_stream().iter_set_bits()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.rows[u as usize].cardinality()
    }

    fn has_arc(&self, u: Node, v: Node) -> bool {
        self.rows[u as usize].get_bit(v)
    }

    fn add_arc(&mut self, u: Node, v: Node) {
        self.rows[u as usize].set_bit(v);
    }
}

impl Graph<AdjMatrix> {
    /// Returns the numeric grid value of `(u, v)`: the edge weight (the default weight for
    /// unweighted graphs) if the edge exists and `0.0` otherwise.
    /// ** Panics if `u >= n || v >= n` **
    pub fn cell(&self, u: Node, v: Node) -> Weight {
        if self.has_edge(u, v) {
            self.weight(u, v)
        } else {
            0.0
        }
    }
}
