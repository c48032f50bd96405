use super::DependencyGraph;

const DEFAULT_MAX_PRINT_SIZE: usize = 10;
const MAX_PRINTED_ROWS: usize = 10;

fn get_max_str_length(graph: &DependencyGraph) -> usize {
    let widest = graph.n_nodes().saturating_sub(1).to_string().len();
    DEFAULT_MAX_PRINT_SIZE.max(widest)
}

impl std::fmt::Debug for DependencyGraph {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let n_nodes = self.n_nodes();
        let n_edges = self.n_edges;
        let n_roots = self.roots().len();
        let max_string_length = get_max_str_length(self);
        writeln!(f, "# of nodes: {n_nodes}")?;
        writeln!(f, "# of edges: {n_edges}")?;
        writeln!(f, "# of roots: {n_roots}")?;
        writeln!(f)?;
        writeln!(
            f,
            "| {:^width$} | {:^width$} |",
            "Node",
            "Dependency",
            width = max_string_length
        )?;
        writeln!(
            f,
            "| {:-<width$} | {:-<width$} |",
            "",
            "",
            width = max_string_length
        )?;
        let rows = self
            .iter()
            .flat_map(|(node, deps)| deps.iter().map(move |&dep| (node, dep)));
        for (node, dep) in rows.take(MAX_PRINTED_ROWS) {
            writeln!(
                f,
                "| {:0>width$} | {:0>width$} |",
                node,
                dep,
                width = max_string_length
            )?;
        }

        if n_edges > MAX_PRINTED_ROWS {
            writeln!(f, "Omitted {} edges", n_edges - MAX_PRINTED_ROWS)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::dependency::DependencyGraphBuilder;

    #[test]
    fn test_debug() {
        let mut builder = DependencyGraphBuilder::new(13);
        builder.add_path(1..13);
        let dg = builder.build().unwrap();

        let actual = format!("{:?}", dg);

        assert_eq!(
            actual,
            "# of nodes: 13\n# of edges: 11\n# of roots: 2\n\n|    Node    | Dependency |\n| ---------- | ---------- |\n| 0000000002 | 0000000001 |\n| 0000000003 | 0000000002 |\n| 0000000004 | 0000000003 |\n| 0000000005 | 0000000004 |\n| 0000000006 | 0000000005 |\n| 0000000007 | 0000000006 |\n| 0000000008 | 0000000007 |\n| 0000000009 | 0000000008 |\n| 0000000010 | 0000000009 |\n| 0000000011 | 0000000010 |\nOmitted 1 edges\n"
        )
    }

    #[test]
    fn test_debug_small() {
        let mut builder = DependencyGraphBuilder::new(3);
        builder.add_edge(0, 2).add_edge(1, 2);
        let dg = builder.build().unwrap();

        assert_eq!(
            format!("{:?}", dg),
            "# of nodes: 3\n# of edges: 2\n# of roots: 2\n\n|    Node    | Dependency |\n| ---------- | ---------- |\n| 0000000002 | 0000000000 |\n| 0000000002 | 0000000001 |\n"
        )
    }
}
