//! Deep and wide inputs that would overflow a recursive traversal

mod common;

use graphwalk::graph::{bridges, tarjan_scc, topological_sort, EdgeKind, Graph, TraversalOptions};

use crate::common::{directed_path, directed_ring};

const DEPTH: usize = 1_000_000;

#[test]
fn test_deep_path_topological_sort() {
    let graph = directed_path(DEPTH);
    let topo = topological_sort(&graph, &TraversalOptions::default()).unwrap();
    assert!(topo.acyclic);
    assert_eq!(topo.order.len(), DEPTH);
    assert_eq!(topo.order[0], 0);
    assert_eq!(topo.order[DEPTH - 1], DEPTH - 1);
}

#[test]
fn test_deep_ring_is_one_component() {
    let graph = directed_ring(DEPTH);
    let scc = tarjan_scc(&graph, &TraversalOptions::default()).unwrap();
    assert_eq!(scc.len(), 1);
    assert_eq!(scc.components[0].len(), DEPTH);
}

#[test]
fn test_deep_undirected_path_is_all_bridges() {
    let edges: Vec<_> = (1..DEPTH).map(|i| (i - 1, i)).collect();
    let graph = Graph::from_edges(DEPTH, EdgeKind::Undirected, &edges).unwrap();
    let found = bridges(&graph, &TraversalOptions::default()).unwrap();
    assert_eq!(found.len(), DEPTH - 1);
}
