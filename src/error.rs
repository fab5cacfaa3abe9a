//! Error conditions raised by the graph store and the algorithms operating on it.
//!
//! Unreachable destinations and failed Hamiltonian attempts are *not* errors: they are reported as
//! data inside the respective results.

use thiserror::Error;

use crate::node::{Node, NumNodes};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A queried vertex (or an edge endpoint) does not lie in `0..n`
    #[error("node {node} is out of range for a graph with {n} nodes")]
    NodeOutOfRange { node: Node, n: NumNodes },

    /// The operation requires at least one vertex
    #[error("operation requires a graph with at least one node")]
    EmptyGraph,
}

impl From<GraphError> for std::io::Error {
    fn from(value: GraphError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidData, value)
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;

/// Fails with [`GraphError::NodeOutOfRange`] unless `u < n`
#[inline]
pub fn check_node(u: Node, n: NumNodes) -> Result<()> {
    if u < n {
        Ok(())
    } else {
        Err(GraphError::NodeOutOfRange { node: u, n })
    }
}
