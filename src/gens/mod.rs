/*!
# Graph Generators

Builder-style random graph generators.

The typical usage workflow is:

1. Create a generator instance (e.g., `DensityGnm::new()`).
2. Set parameters using trait methods (e.g., `.nodes(n).density(c)`).
3. Generate edges via `generate()` or `stream()`.

In addition, the [`RandomGraph`] trait turns generators into constructors of whole graphs.

Supported models:
- DensityGnm: `min(⌊c · n · ln n⌋, n(n-1)/2)` distinct undirected edges drawn by rejection sampling
*/

use rand::Rng;

use crate::prelude::*;

mod density;

pub use density::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// Trait for generators whose edge count scales with a density constant.
pub trait DensityGen {
    /// Sets the density constant `c`.
    fn density(self, c: f64) -> Self;
}

/// General trait for a configurable random edge generator.
///
/// Types implementing this trait can produce a complete edge list
/// or a lazily-evaluated stream (iterator) of edges.
pub trait GraphGenerator {
    /// Generates a list of random edges.
    ///
    /// This collects the full result from `stream()` into a `Vec<Edge>` as default.
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates an iterator (stream) over generated edges.
    ///
    /// Depending on the underlying graph model, this might also be just an iterator over the
    /// already generated list of edges if a direct iterator is not feasible in the model.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng;
}

/// Trait for building full graph instances from random models.
pub trait RandomGraph: Sized {
    /// Creates an undirected random graph with `n` nodes and
    /// `min(⌊c · n · ln n⌋, n(n-1)/2)` distinct edges.
    fn density_gnm<R>(rng: &mut R, n: NumNodes, c: f64) -> Self
    where
        R: Rng;
}

impl<G> RandomGraph for G
where
    G: GraphFromScratch,
{
    fn density_gnm<R>(rng: &mut R, n: NumNodes, c: f64) -> Self
    where
        R: Rng,
    {
        Self::from_edges(n, DensityGnm::new().nodes(n).density(c).stream(rng))
    }
}
