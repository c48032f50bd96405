use crate::prelude::*;

/// Accumulates edges for a graph of a fixed size before
/// building its [`DependencyGraph`].
#[derive(Clone, Debug)]
pub struct DependencyGraphBuilder {
    pub(crate) num_nodes: usize,
    pub(crate) edges: Vec<Edge>,
}

impl DependencyGraphBuilder {
    pub fn new(num_nodes: usize) -> Self {
        DependencyGraphBuilder {
            num_nodes,
            edges: Vec::new(),
        }
    }

    pub fn add_edge(&mut self, from: usize, to: usize) -> &mut Self {
        self.edges.push(Edge::new(from, to));
        self
    }

    pub fn add_path(&mut self, path: impl IntoIterator<Item = usize>) -> &mut Self {
        let mut path = path.into_iter().peekable();
        while let (Some(from), Some(&to)) = (path.next(), path.peek()) {
            self.add_edge(from, to);
        }
        self
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn build(&self) -> Result<DependencyGraph, InvalidEdge> {
        DependencyGraph::build(self.num_nodes, &self.edges)
    }

    /// Builds the graph and sorts it in one step.
    pub fn build_sorted(&self) -> Result<Vec<usize>, GraphError> {
        Ok(self.build()?.topological_sort()?)
    }
}

impl Extend<Edge> for DependencyGraphBuilder {
    fn extend<T: IntoIterator<Item = Edge>>(&mut self, iter: T) {
        self.edges.extend(iter)
    }
}
