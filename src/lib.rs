/*!
`wgraphs` is a small graph toolkit for graphs whose nodes are numbered `0` to `n - 1` and whose
edges may carry real-valued (possibly negative) weights.

# Representation

We represent **nodes** as `u32` in the range `0..n` and **edges** as the tuple-struct
`Edge(Node, Node)`. A [`Graph`](repr::Graph) stores the edge list as loaded, an edge-weight
mapping and exactly one adjacency representation:

- [`ListGraph`](repr::ListGraph) keeps insertion-ordered neighbor vectors,
- [`MatrixGraph`](repr::MatrixGraph) keeps one bit row per node.

Whether a graph is directed or weighted is decided once by the [`GraphBuilder`](repr::GraphBuilder).

# Design

Algorithms, generators and experiments are configurable structs using the *Builder* pattern.
The most common functionality is also implemented via traits on the graph itself, so
`use wgraphs::{prelude::*, algo::*};` usually suffices:

- [`algo`] contains BFS/DFS traversals, connected components, shortest paths (BFS distances and
  Dijkstra with negative-weight shifting) and the randomized Hamiltonian-cycle heuristic,
- [`gens`] contains random graph generators,
- [`experiment`] measures the success rate of the Hamiltonian-cycle heuristic,
- [`io`] reads edge lists and writes plain-text reports.

Input validation is reported through [`GraphError`]; unreachable nodes and failed heuristic runs
are ordinary results.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod experiment;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;

pub use edge::*;
pub use error::GraphError;
pub use node::*;

/// `wgraphs::prelude` includes definitions for nodes and edges, all basic graph operation traits as
/// well as both representations.
pub mod prelude {
    pub use super::{edge::*, error::GraphError, node::*, ops::*, repr::*};
}
