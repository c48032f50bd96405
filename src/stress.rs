use crate::prelude::*;
use rayon::prelude::*;

/// A generated edge list the sorter rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterExample {
    pub total_nodes: usize,
    pub seed: Option<u64>,
    pub edges: Vec<Edge>,
}

impl std::fmt::Display for CounterExample {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Generated graph with {} nodes and {} edges is not sortable",
            self.total_nodes,
            self.edges.len()
        )?;
        if let Some(seed) = self.seed {
            write!(f, " (seed {seed})")?;
        }
        Ok(())
    }
}

impl std::error::Error for CounterExample {}

/// Generates `trials` random DAGs with `total_nodes` nodes
/// and checks that every one of them can be sorted.
///
/// Trial `k` is seeded with `base_seed + k` when a base seed
/// is given, which makes a reported counter example
/// reproducible. Trials run in parallel; the reported counter
/// example is the failing trial with the lowest index.
pub fn verify_random_dags(
    total_nodes: usize,
    trials: u64,
    base_seed: Option<u64>,
) -> Result<(), CounterExample> {
    tracing::info!(total_nodes, trials, ?base_seed, "verifying random dags");

    let sorter = TopologicalSorter::new();
    first_counter_example(total_nodes, trials, base_seed, |edges| {
        match sorter.can_sort(total_nodes, edges) {
            Ok(true) => true,
            Ok(false) | Err(_) => false,
        }
    })
}

fn first_counter_example(
    total_nodes: usize,
    trials: u64,
    base_seed: Option<u64>,
    is_sortable: impl Fn(&[Edge]) -> bool + Sync,
) -> Result<(), CounterExample> {
    let failure = (0..trials).into_par_iter().find_map_first(|trial| {
        let seed = base_seed.map(|base| base.wrapping_add(trial));
        let edges = generate_random_dag(total_nodes, seed);
        if is_sortable(&edges) {
            None
        } else {
            Some(CounterExample {
                total_nodes,
                seed,
                edges,
            })
        }
    });

    match failure {
        Some(counter_example) => {
            tracing::error!(
                total_nodes,
                seed = ?counter_example.seed,
                n_edges = counter_example.edges.len(),
                "generated graph is not sortable"
            );
            Err(counter_example)
        }
        None => Ok(()),
    }
}
