use dagloom::prelude::*;
use proptest::prelude::*;

fn graph_strategy(max_nodes: usize) -> impl Strategy<Value = (usize, Vec<Edge>)> {
    (1..=max_nodes).prop_flat_map(|n| {
        let edge = (0..n, 0..n).prop_map(Edge::from);
        (Just(n), proptest::collection::vec(edge, 0..3 * n))
    })
}

proptest! {
    #[test]
    fn sort_agrees_with_can_sort((n, edges) in graph_strategy(12)) {
        let sorter = TopologicalSorter::new();
        let can_sort = sorter.can_sort(n, &edges).unwrap();
        let order = sorter.sort(n, &edges).unwrap();
        prop_assert_eq!(can_sort, order.is_some());
    }

    #[test]
    fn sorted_orders_are_valid_and_complete((n, edges) in graph_strategy(12)) {
        if let Some(order) = TopologicalSorter::new().sort(n, &edges).unwrap() {
            prop_assert_eq!(order.len(), n);
            let mut seen = order.clone();
            seen.sort_unstable();
            prop_assert_eq!(seen, (0..n).collect::<Vec<_>>());
            prop_assert!(is_topological_order(n, &edges, &order));
        }
    }

    #[test]
    fn forward_edges_always_sort((n, edges) in graph_strategy(20)) {
        // Orienting every edge from the smaller to the larger
        // label removes every cycle, except self loops.
        let forward: Vec<Edge> = edges
            .into_iter()
            .filter(|edge| !edge.is_self_loop())
            .map(|edge| Edge::new(edge.from.min(edge.to), edge.from.max(edge.to)))
            .collect();
        prop_assert_eq!(TopologicalSorter::new().can_sort(n, &forward), Ok(true));
    }

    #[test]
    fn closed_paths_are_unsortable(n in 2..20usize) {
        let mut builder = DependencyGraphBuilder::new(n);
        builder.add_path((0..n).chain([0]));
        prop_assert_eq!(builder.build_sorted(), Err(GraphError::Cycle(GraphHasCycle)));

        let mut builder = DependencyGraphBuilder::new(n);
        builder.add_path((0..n).rev().chain([n - 1]));
        prop_assert_eq!(builder.build_sorted(), Err(GraphError::Cycle(GraphHasCycle)));
    }

    #[test]
    fn generation_is_deterministic(n in 0..64usize, seed in any::<u64>()) {
        prop_assert_eq!(generate_random_dag(n, Some(seed)), generate_random_dag(n, Some(seed)));
    }
}
