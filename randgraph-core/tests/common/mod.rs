use std::collections::HashSet;

use randgraph_core::Edge;

/// Asserts that `edges` is a simple graph with exactly `expected` edges over
/// `[0, nodes)`.
pub fn assert_simple_graph(edges: &[Edge], nodes: usize, expected: u64) {
    assert_eq!(edges.len() as u64, expected, "edge count");
    let distinct: HashSet<_> = edges.iter().copied().collect();
    assert_eq!(distinct.len(), edges.len(), "edges must be pairwise distinct");
    for edge in edges {
        assert!(!edge.is_loop(), "self-loop {edge}");
        assert!(*edge.first() < nodes, "{edge} outside [0, {nodes})");
        assert!(*edge.second() < nodes, "{edge} outside [0, {nodes})");
    }
}
