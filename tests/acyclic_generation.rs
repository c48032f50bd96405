use dagloom::prelude::*;

const TRIALS: u64 = 10_000;

#[test]
fn generated_graphs_are_always_sortable() {
    for total_nodes in [0, 1, 2, 10, 100] {
        let result = verify_random_dags(total_nodes, TRIALS, Some(total_nodes as u64 * TRIALS));
        assert!(result.is_ok(), "{}", result.unwrap_err());
    }
}

#[test]
fn generated_edges_are_in_range_without_self_loops() {
    for total_nodes in [2, 10, 100] {
        for seed in 0..100 {
            let edges = generate_random_dag(total_nodes, Some(seed));
            assert!(edges
                .iter()
                .all(|edge| edge.is_within(total_nodes) && !edge.is_self_loop()));
        }
    }
}

#[test]
fn generated_graphs_sort_into_valid_orders() {
    let sorter = TopologicalSorter::new();
    for total_nodes in [0, 1, 2, 10, 100] {
        for seed in 0..200 {
            let edges = generate_random_dag(total_nodes, Some(seed));
            let order = sorter
                .sort(total_nodes, &edges)
                .expect("generated edges are in range")
                .expect("generated graphs have no cycles");
            assert!(is_topological_order(total_nodes, &edges, &order));
        }
    }
}

#[test]
fn unseeded_generation_is_sortable() {
    let sorter = TopologicalSorter::new();
    for _ in 0..100 {
        let edges = RandomDagGenerator::new(50).generate();
        assert_eq!(sorter.can_sort(50, &edges), Ok(true));
    }
}

#[test]
fn dependency_lookup() {
    let dg = DependencyGraph::build(3, &[Edge::new(0, 2), Edge::new(1, 2)]).unwrap();
    assert_eq!(dg.dependencies(2), Some([0, 1].as_slice()));
    assert_eq!(dg.dependencies(5), None);
}

#[test]
fn generated_graph_lookup_matches_edges() {
    let total_nodes = 40;
    let edges = generate_random_dag(total_nodes, Some(11));
    let dg = DependencyGraph::build(total_nodes, &edges).unwrap();

    assert_eq!(dg.n_edges(), edges.len());
    for node in 0..total_nodes {
        let expected: Vec<usize> = edges
            .iter()
            .filter(|edge| edge.to == node)
            .map(|edge| edge.from)
            .collect();
        assert_eq!(dg.dependencies(node), Some(expected.as_slice()));
    }
}
