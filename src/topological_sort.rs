use crate::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum VisitState {
    Unvisited,
    InProgress,
    Done,
}

/// Depth first traversal over the dependency lists.
///
/// Every node is used as a root in ascending order, and the
/// dependencies of a node are followed in insertion order.
/// `on_done` is called for each node once all of its
/// dependencies are done, which yields a post-order.
///
/// The traversal keeps its own stack of `(node, next
/// dependency)` frames so deep dependency chains do not
/// grow the call stack.
fn traverse(
    graph: &DependencyGraph,
    mut on_done: impl FnMut(usize),
) -> Result<(), GraphHasCycle> {
    let n_nodes = graph.n_nodes();
    let mut state = vec![VisitState::Unvisited; n_nodes];
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..n_nodes {
        if state[root] != VisitState::Unvisited {
            continue;
        }

        state[root] = VisitState::InProgress;
        stack.push((root, 0));

        while let Some((node, cursor)) = stack.last_mut() {
            let node = *node;
            match graph.dependencies_unchecked(node).get(*cursor) {
                Some(&dep) => {
                    *cursor += 1;
                    match state[dep] {
                        VisitState::Done => {}
                        VisitState::InProgress => {
                            tracing::trace!(node, dep, "cycle detected");
                            return Err(GraphHasCycle);
                        }
                        VisitState::Unvisited => {
                            state[dep] = VisitState::InProgress;
                            stack.push((dep, 0));
                        }
                    }
                }
                None => {
                    state[node] = VisitState::Done;
                    on_done(node);
                    stack.pop();
                }
            }
        }
    }

    Ok(())
}

pub(crate) fn detect_cycle(graph: &DependencyGraph) -> Result<(), GraphHasCycle> {
    traverse(graph, |_| {})
}

pub fn topological_sort(graph: &DependencyGraph) -> Result<Vec<usize>, GraphHasCycle> {
    let mut res = Vec::with_capacity(graph.n_nodes());
    traverse(graph, |node| res.push(node))?;
    Ok(res)
}

/// Returns `true` if `order` contains every node of
/// `0..num_nodes` exactly once and every edge points from an
/// earlier to a later node.
///
/// Edges referencing nodes outside of the graph make the
/// order invalid.
pub fn is_topological_order(num_nodes: usize, edges: &[Edge], order: &[usize]) -> bool {
    if order.len() != num_nodes {
        return false;
    }

    let mut position = vec![None; num_nodes];
    for (index, &node) in order.iter().enumerate() {
        match position.get_mut(node) {
            Some(slot) if slot.is_none() => *slot = Some(index),
            _ => return false,
        }
    }

    edges.iter().all(|edge| {
        match (position.get(edge.from), position.get(edge.to)) {
            (Some(Some(from)), Some(Some(to))) => from < to,
            _ => false,
        }
    })
}

/// Sorts edge lists of graphs with nodes `0..n`.
///
/// The sorter holds no state; every call builds its own
/// [`DependencyGraph`] and visit state.
#[derive(Clone, Copy, Debug, Default)]
pub struct TopologicalSorter;

impl TopologicalSorter {
    pub fn new() -> Self {
        TopologicalSorter
    }

    /// Returns `Ok(false)` if the edges contain a cycle.
    pub fn can_sort(&self, num_nodes: usize, edges: &[Edge]) -> Result<bool, InvalidEdge> {
        let graph = DependencyGraph::build(num_nodes, edges)?;
        Ok(detect_cycle(&graph).is_ok())
    }

    /// Returns `Ok(None)` if the edges contain a cycle,
    /// otherwise an order of all `num_nodes` nodes.
    pub fn sort(&self, num_nodes: usize, edges: &[Edge]) -> Result<Option<Vec<usize>>, InvalidEdge> {
        let graph = DependencyGraph::build(num_nodes, edges)?;
        Ok(topological_sort(&graph).ok())
    }
}
