/*!
# Success-Rate Experiment

Measures how often the Hamiltonian-cycle heuristic succeeds on random graphs of growing density.
For each size `n` and density constant `c`, `rounds` fresh
[`DensityGnm`](crate::gens::DensityGnm) graphs are generated and the heuristic is run once per
graph.
*/

use rand::Rng;
use tracing::info;

use crate::{
    algo::HamiltonianSearch,
    error::{GraphError, Result},
    gens::RandomGraph,
    prelude::*,
};

/// Number of successful attempts among `rounds` graphs with `n` nodes and density `c`
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SuccessRate {
    pub n: NumNodes,
    pub c: f64,
    pub successes: u32,
    pub rounds: u32,
}

impl SuccessRate {
    /// Returns the success rate in percent (`0` if no rounds were run)
    pub fn percentage(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            100.0 * self.successes as f64 / self.rounds as f64
        }
    }
}

/// Configuration of a success-rate experiment.
///
/// # Examples
/// ```
/// use wgraphs::experiment::SuccessRateExperiment;
/// use rand::SeedableRng;
/// use rand_pcg::Pcg64Mcg;
///
/// let rates = SuccessRateExperiment::new()
///     .sizes([12, 16])
///     .densities([10.0])
///     .rounds(3)
///     .run(&mut Pcg64Mcg::seed_from_u64(0))
///     .unwrap();
///
/// // both sizes saturate to complete graphs
/// assert!(rates.iter().all(|r| r.successes == 3));
/// ```
#[derive(Debug, Clone)]
pub struct SuccessRateExperiment {
    sizes: Vec<NumNodes>,
    densities: Vec<f64>,
    rounds: u32,
    search: HamiltonianSearch,
}

impl Default for SuccessRateExperiment {
    fn default() -> Self {
        Self {
            sizes: vec![100, 200, 400, 800],
            densities: vec![1.0, 3.0, 5.0, 7.0, 10.0],
            rounds: 10,
            search: HamiltonianSearch::default(),
        }
    }
}

impl SuccessRateExperiment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the graph sizes to test
    pub fn sizes(mut self, sizes: impl IntoIterator<Item = NumNodes>) -> Self {
        self.sizes = sizes.into_iter().collect();
        self
    }

    /// Sets the density constants to test for every size
    pub fn densities(mut self, densities: impl IntoIterator<Item = f64>) -> Self {
        self.densities = densities.into_iter().collect();
        self
    }

    /// Sets the number of graphs generated per `(n, c)` pair
    pub fn rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    /// Sets the heuristic configuration used in every round
    pub fn search(mut self, search: HamiltonianSearch) -> Self {
        self.search = search;
        self
    }

    /// Runs all `(n, c)` pairs, sizes in the outer loop, and returns one [`SuccessRate`] each.
    ///
    /// # Errors
    /// Fails with [`GraphError::EmptyGraph`] if any configured size is `0`.
    pub fn run<R: Rng>(&self, rng: &mut R) -> Result<Vec<SuccessRate>> {
        if self.sizes.contains(&0) {
            return Err(GraphError::EmptyGraph);
        }

        let mut rates = Vec::with_capacity(self.sizes.len() * self.densities.len());
        for &n in &self.sizes {
            info!(n, "testing graph size");
            for &c in &self.densities {
                let successes = (0..self.rounds)
                    .filter(|_| {
                        let graph = MatrixGraph::density_gnm(rng, n, c);
                        self.search.run(&graph, rng).success
                    })
                    .count() as u32;

                let rate = SuccessRate {
                    n,
                    c,
                    successes,
                    rounds: self.rounds,
                };
                info!(n, c, success = rate.percentage(), "hamiltonian success rate");
                rates.push(rate);
            }
        }

        Ok(rates)
    }
}
