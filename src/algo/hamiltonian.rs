/*!
Randomized insertion heuristic for Hamiltonian cycles (Angluin–Valiant style).

The search starts from a single random vertex and repeatedly inserts a remaining vertex `v`
between two consecutive cycle vertices `u, w` (the cycle is treated as circular) if `v` is adjacent
to both. After each insertion the scan restarts at the first remaining vertex. A full pass without
insertion counts as one failed round; the search stops once all vertices are placed or the
failure budget is exhausted.

The heuristic gives no guarantee: it may fail even if a Hamiltonian cycle exists. In particular,
every insertion closes a triangle, so the search can never grow past two vertices in a
triangle-free graph.
*/

use itertools::Itertools;
use rand::{Rng, seq::SliceRandom};
use tracing::debug;

use super::*;

/// Default number of failed rounds before the search gives up
pub const DEFAULT_MAX_FAILED_ROUNDS: u32 = 100;

/// Outcome of a single run of the heuristic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HamiltonianAttempt {
    /// *true* iff all vertices were placed and the last one is adjacent to the first
    pub success: bool,
    /// On success the closed cycle (first vertex repeated at the end), otherwise the partial
    /// cycle built so far
    pub cycle: Vec<Node>,
    /// Number of passes that did not insert any vertex
    pub failed_rounds: u32,
}

impl HamiltonianAttempt {
    /// Returns the closed cycle if the attempt succeeded
    pub fn closed_cycle(&self) -> Option<&[Node]> {
        self.success.then_some(self.cycle.as_slice())
    }
}

/// Configurable Hamiltonian-cycle heuristic.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
/// use rand::SeedableRng;
/// use rand_pcg::Pcg64Mcg;
///
/// // complete graph on 5 nodes
/// let edges = (0..5).flat_map(|u| (u + 1..5).map(move |v| (u, v)));
/// let g = MatrixGraph::from_edges(5, edges);
///
/// let rng = &mut Pcg64Mcg::seed_from_u64(1);
/// let attempt = HamiltonianSearch::new().max_failed_rounds(10).run(&g, rng);
///
/// assert!(attempt.success);
/// assert_eq!(attempt.cycle.len(), 6);
/// assert_eq!(attempt.cycle.first(), attempt.cycle.last());
/// ```
#[derive(Debug, Copy, Clone)]
pub struct HamiltonianSearch {
    max_failed_rounds: u32,
}

impl Default for HamiltonianSearch {
    fn default() -> Self {
        Self {
            max_failed_rounds: DEFAULT_MAX_FAILED_ROUNDS,
        }
    }
}

impl HamiltonianSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of passes without insertion after which the search gives up
    pub fn max_failed_rounds(mut self, rounds: u32) -> Self {
        self.max_failed_rounds = rounds;
        self
    }

    pub fn get_max_failed_rounds(&self) -> u32 {
        self.max_failed_rounds
    }

    /// Runs one attempt on `graph`; `rng` determines the initial vertex order.
    ///
    /// A graph without nodes yields an unsuccessful attempt with an empty cycle.
    pub fn run<G, R>(&self, graph: &G, rng: &mut R) -> HamiltonianAttempt
    where
        G: AdjacencyTest,
        R: Rng,
    {
        let mut pool = graph.vertices().collect_vec();
        pool.shuffle(rng);

        let Some(seed) = pool.pop() else {
            return HamiltonianAttempt {
                success: false,
                cycle: Vec::new(),
                failed_rounds: 0,
            };
        };

        let mut cycle = vec![seed];
        let mut failed_rounds = 0;

        while !pool.is_empty() && failed_rounds < self.max_failed_rounds {
            match find_insertion(graph, &pool, &cycle) {
                Some((pool_idx, slot)) => {
                    let v = pool.remove(pool_idx);
                    cycle.insert(slot, v);
                }
                None => failed_rounds += 1,
            }
        }

        let last = cycle[cycle.len() - 1];
        if pool.is_empty() && graph.has_edge(last, seed) {
            cycle.push(seed);
            HamiltonianAttempt {
                success: true,
                cycle,
                failed_rounds,
            }
        } else {
            debug!(
                placed = cycle.len(),
                remaining = pool.len(),
                failed_rounds,
                "hamiltonian heuristic gave up"
            );
            HamiltonianAttempt {
                success: false,
                cycle,
                failed_rounds,
            }
        }
    }
}

/// Returns the position in `pool` of the first vertex that can be inserted and the index in
/// `cycle` it has to be inserted at
fn find_insertion<G: AdjacencyTest>(
    graph: &G,
    pool: &[Node],
    cycle: &[Node],
) -> Option<(usize, usize)> {
    pool.iter().enumerate().find_map(|(pool_idx, &v)| {
        cycle
            .iter()
            .zip(cycle.iter().cycle().skip(1))
            .position(|(&u, &w)| graph.has_edge(u, v) && graph.has_edge(w, v))
            .map(|i| (pool_idx, i + 1))
    })
}

/// Runs the Hamiltonian-cycle heuristic directly on graphs
pub trait HamiltonianCycle: AdjacencyTest + Sized {
    /// Runs one attempt with the default failure budget of
    /// [`DEFAULT_MAX_FAILED_ROUNDS`].
    fn hamiltonian_cycle<R: Rng>(&self, rng: &mut R) -> HamiltonianAttempt {
        HamiltonianSearch::default().run(self, rng)
    }
}

impl<G> HamiltonianCycle for G where G: AdjacencyTest + Sized {}
