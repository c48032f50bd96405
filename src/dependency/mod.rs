use crate::prelude::*;

mod builder;
mod debug;

pub use builder::DependencyGraphBuilder;

/// Reverse adjacency view of a graph with nodes `0..n`.
///
/// For every node it stores the nodes it directly depends
/// on, that is, every `from` of an edge `from -> node`,
/// in the order the edges were given.
#[derive(Clone, PartialEq, Eq)]
pub struct DependencyGraph {
    pub(crate) dependencies: Vec<Vec<usize>>,
    pub(crate) n_edges: usize,
}

impl DependencyGraph {
    /// Builds the dependency lists of `num_nodes` nodes from
    /// `edges`.
    ///
    /// Fails if any edge references a node outside of
    /// `0..num_nodes`. Nothing is built in that case.
    pub fn build(num_nodes: usize, edges: &[Edge]) -> Result<DependencyGraph, InvalidEdge> {
        if let Some(&edge) = edges.iter().find(|edge| !edge.is_within(num_nodes)) {
            return Err(InvalidEdge { edge, num_nodes });
        }

        let mut dependencies = vec![Vec::new(); num_nodes];
        for edge in edges {
            dependencies[edge.to].push(edge.from);
        }

        tracing::debug!(
            n_nodes = num_nodes,
            n_edges = edges.len(),
            "built dependency graph"
        );

        Ok(DependencyGraph {
            dependencies,
            n_edges: edges.len(),
        })
    }

    pub fn n_nodes(&self) -> usize {
        self.dependencies.len()
    }

    pub fn n_edges(&self) -> usize {
        self.n_edges
    }

    /// Returns the direct dependencies of `node`, or `None`
    /// if `node` is not part of the graph.
    pub fn dependencies(&self, node: usize) -> Option<&[usize]> {
        self.dependencies.get(node).map(Vec::as_slice)
    }

    #[inline(always)]
    pub(crate) fn dependencies_unchecked(&self, node: usize) -> &[usize] {
        &self.dependencies[node]
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> {
        self.dependencies
            .iter()
            .enumerate()
            .map(|(node, deps)| (node, deps.as_slice()))
    }

    /// Nodes without any dependency.
    pub fn roots(&self) -> Vec<usize> {
        self.iter()
            .filter(|(_, deps)| deps.is_empty())
            .map(|(node, _)| node)
            .collect()
    }

    pub fn topological_sort(&self) -> Result<Vec<usize>, GraphHasCycle> {
        topological_sort(self)
    }

    pub fn is_acyclic(&self) -> bool {
        crate::topological_sort::detect_cycle(self).is_ok()
    }
}
