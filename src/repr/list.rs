use std::{iter::Copied, slice::Iter};

use super::*;

/// Adjacency-list representation.
///
/// Every node owns a vector of neighbors in insertion (edge load) order. Undirected edges produce
/// one entry at each endpoint and duplicate edges produce duplicate entries.
#[derive(Debug, Clone, Default)]
pub struct AdjList {
    nbs: Vec<Vec<Node>>,
}

impl AdjacencyView for AdjList {
    fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![Vec::new(); n as usize],
        }
    }

    type NeighborIter<'a>
        = Copied<Iter<'a, Node>>
    where
        Self: 'a;

    fn neighbors_of(&self, u: Node) -> Self::NeighborIter<'_> {
        self.nbs[u as usize].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }

    fn has_arc(&self, u: Node, v: Node) -> bool {
        self.nbs[u as usize].contains(&v)
    }

    fn add_arc(&mut self, u: Node, v: Node) {
        self.nbs[u as usize].push(v);
    }
}
