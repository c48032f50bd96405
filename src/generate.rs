//! Random DAG generation.
//!
//! A graph is acyclic if and only if some ordering of its
//! nodes makes its adjacency matrix strictly triangular. The
//! generator draws a random ordering (the *rank* of every
//! node) and only ever adds edges from a lower to a higher
//! rank, so every possible draw yields a DAG.
//!
//! Seeded generation uses [`ChaCha12Rng`] directly so a
//! given seed yields the same edges on every platform.

use crate::Edge;
use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Generates DAGs over the nodes `0..total_nodes`.
///
/// Without a seed every call to [`generate`] draws fresh
/// entropy. With a seed, calls return the same edges.
///
/// [`generate`]: RandomDagGenerator::generate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RandomDagGenerator {
    total_nodes: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    seed: Option<u64>,
}

impl RandomDagGenerator {
    pub fn new(total_nodes: usize) -> Self {
        RandomDagGenerator {
            total_nodes,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn total_nodes(&self) -> usize {
        self.total_nodes
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn generate(&self) -> Vec<Edge> {
        let mut rng = match self.seed {
            Some(seed) => ChaCha12Rng::seed_from_u64(seed),
            None => ChaCha12Rng::from_entropy(),
        };
        self.generate_with_rng(&mut rng)
    }

    /// Generates the edges using `rng` as the source of
    /// random bits.
    ///
    /// Edges are emitted grouped by the rank of their target,
    /// and within a group by the rank of their source.
    pub fn generate_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Edge> {
        let n = self.total_nodes;
        let mut node_mapping: Vec<usize> = (0..n).collect();
        node_mapping.shuffle(rng);

        tracing::debug!(?node_mapping, "generating random dag");

        let mut out = Vec::new();
        for j in 1..n {
            // rank `j` may depend on any of the ranks `0..j`
            for base in (0..j).step_by(64) {
                let width = (j - base).min(64);
                let mut bits: u64 = rng.gen();
                if width < 64 {
                    bits &= (1u64 << width) - 1;
                }
                while bits != 0 {
                    let i = base + bits.trailing_zeros() as usize;
                    out.push(Edge::new(node_mapping[i], node_mapping[j]));
                    bits &= bits - 1;
                }
            }
        }

        tracing::trace!(total_nodes = n, n_edges = out.len(), "generated random dag");

        out
    }
}

/// Generates a random DAG over `0..total_nodes`.
///
/// Same `(total_nodes, Some(seed))` pairs always produce the
/// same edges.
pub fn generate_random_dag(total_nodes: usize, seed: Option<u64>) -> Vec<Edge> {
    let generator = RandomDagGenerator::new(total_nodes);
    match seed {
        Some(seed) => generator.with_seed(seed).generate(),
        None => generator.generate(),
    }
}
