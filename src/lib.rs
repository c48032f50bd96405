#![doc = include_str!("../README.md")]

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod dependency;
pub mod error;
pub mod generate;
pub mod stress;
pub mod topological_sort;

/// Prelude of data types and functionality.
pub mod prelude {
    pub use crate::dependency::{DependencyGraph, DependencyGraphBuilder};
    pub use crate::error::*;
    pub use crate::generate::{generate_random_dag, RandomDagGenerator};
    pub use crate::stress::{verify_random_dags, CounterExample};
    pub use crate::topological_sort::{is_topological_order, topological_sort, TopologicalSorter};
    pub use crate::Edge;
}

/// A directed edge between two nodes of a graph with
/// nodes `0..n`.
///
/// `from` must come before `to` in any topological
/// order; equivalently, `to` depends on `from`.
#[derive(Ord, PartialOrd, Eq, PartialEq, Debug, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edge {
    pub from: usize,
    pub to: usize,
}

impl Edge {
    #[inline(always)]
    pub const fn new(from: usize, to: usize) -> Self {
        Edge { from, to }
    }

    /// Returns `true` if both ends of the edge are valid
    /// nodes in a graph with `num_nodes` nodes.
    #[inline]
    pub const fn is_within(&self, num_nodes: usize) -> bool {
        self.from < num_nodes && self.to < num_nodes
    }

    #[inline]
    pub const fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

impl From<(usize, usize)> for Edge {
    fn from((from, to): (usize, usize)) -> Self {
        Edge { from, to }
    }
}

impl From<Edge> for (usize, usize) {
    fn from(edge: Edge) -> Self {
        (edge.from, edge.to)
    }
}
