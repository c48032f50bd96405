use crate::Edge;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphHasCycle;

impl std::fmt::Display for GraphHasCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unable to topologically sort, graph has at least one cycle"
        )
    }
}

impl std::error::Error for GraphHasCycle {}

/// An edge references a node outside of `0..num_nodes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidEdge {
    pub edge: Edge,
    pub num_nodes: usize,
}

impl std::fmt::Display for InvalidEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Edge `{}` references a node outside of a graph with {} nodes",
            self.edge, self.num_nodes
        )
    }
}

impl std::error::Error for InvalidEdge {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    Cycle(GraphHasCycle),
    InvalidEdge(InvalidEdge),
}

impl From<GraphHasCycle> for GraphError {
    fn from(v: GraphHasCycle) -> Self {
        Self::Cycle(v)
    }
}

impl From<InvalidEdge> for GraphError {
    fn from(v: InvalidEdge) -> Self {
        Self::InvalidEdge(v)
    }
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cycle(err) => std::fmt::Display::fmt(err, f),
            Self::InvalidEdge(err) => std::fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for GraphError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Cycle(err) => Some(err),
            Self::InvalidEdge(err) => Some(err),
        }
    }
}
