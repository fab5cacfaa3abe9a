/*!
# Graph Algorithms

This module provides the algorithms built on top of the graph representations in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use wgraphs::algo::*;
```
and gain access to traversal, connectivity, shortest paths, the Hamiltonian-cycle heuristic and
graph statistics.
If possible, algorithms are provided as **iterators**, making it easy to consume results lazily.
Operations that validate their input are prefixed with `try_` and return a [`Result`].
*/

mod connectivity;
mod hamiltonian;
mod shortest_path;
mod statistics;
mod traversal;

use crate::{
    error::{GraphError, Result, check_node},
    prelude::*,
};

pub use connectivity::*;
pub use hamiltonian::*;
pub use shortest_path::*;
pub use statistics::*;
pub use traversal::*;
