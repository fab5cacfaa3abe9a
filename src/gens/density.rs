use fxhash::FxHashSet;

use super::*;

/// Generator for undirected random graphs whose edge count grows like `c · n · ln n`.
///
/// Draws uniform endpoint pairs, discards self-loops and pairs drawn before, and stops once
/// [`DensityGnm::number_of_edges`] distinct edges were found. Edges are emitted normalized
/// in the order they were first drawn.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, gens::*};
/// use rand::SeedableRng;
/// use rand_pcg::Pcg64Mcg;
///
/// let generator = DensityGnm::new().nodes(10).density(1.0);
/// assert_eq!(generator.number_of_edges(), 23);
///
/// let edges = generator.generate(&mut Pcg64Mcg::seed_from_u64(3));
/// assert_eq!(edges.len(), 23);
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct DensityGnm {
    n: NumNodes,
    c: f64,
}

impl DensityGnm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `min(⌊c · n · ln n⌋, n(n-1)/2)`, or `0` if `n < 2`
    pub fn number_of_edges(&self) -> NumEdges {
        if self.n < 2 {
            return 0;
        }
        let n = self.n as f64;
        let max_edges = self.n as u64 * (self.n as u64 - 1) / 2;
        // the cast saturates, so negative densities yield no edges
        let m = (self.c * n * n.ln()) as u64;
        m.min(max_edges) as NumEdges
    }
}

impl NumNodesGen for DensityGnm {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl DensityGen for DensityGnm {
    fn density(mut self, c: f64) -> Self {
        self.c = c;
        self
    }
}

impl GraphGenerator for DensityGnm {
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng,
    {
        let m = self.number_of_edges() as usize;
        let mut drawn = FxHashSet::default();
        let mut edges = Vec::with_capacity(m);

        while edges.len() < m {
            let u = rng.random_range(0..self.n);
            let v = rng.random_range(0..self.n);
            if u == v {
                continue;
            }

            let edge = Edge(u, v).normalized();
            if drawn.insert(edge) {
                edges.push(edge);
            }
        }

        edges.into_iter()
    }
}
