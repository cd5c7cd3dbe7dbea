//! Graph builders shared by the integration tests
#![allow(dead_code)]

use graphwalk::graph::{EdgeKind, Graph, GraphProvider, NodeId};

/// Directed ring `0 -> 1 -> ... -> k-1 -> 0`
pub fn directed_ring(k: usize) -> Graph {
    let edges: Vec<_> = (0..k).map(|i| (i, (i + 1) % k)).collect();
    Graph::from_edges(k, EdgeKind::Directed, &edges).unwrap()
}

/// Undirected ring on `k` nodes
pub fn undirected_ring(k: usize) -> Graph {
    let edges: Vec<_> = (0..k).map(|i| (i, (i + 1) % k)).collect();
    Graph::from_edges(k, EdgeKind::Undirected, &edges).unwrap()
}

/// Undirected tree where node `i > 0` hangs off node `(i - 1) / 2`
pub fn binary_tree(n: usize) -> Graph {
    let edges: Vec<_> = (1..n).map(|i| ((i - 1) / 2, i)).collect();
    Graph::from_edges(n, EdgeKind::Undirected, &edges).unwrap()
}

/// Directed path `0 -> 1 -> ... -> n-1`
pub fn directed_path(n: usize) -> Graph {
    let edges: Vec<_> = (1..n).map(|i| (i - 1, i)).collect();
    Graph::from_edges(n, EdgeKind::Directed, &edges).unwrap()
}

/// The two-loop example: {0,1,2,3} -> {4,5,6} -> {7}
pub fn two_loop_graph() -> Graph {
    Graph::from_edges(
        8,
        EdgeKind::Directed,
        &[
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 0),
            (2, 4),
            (4, 5),
            (5, 6),
            (6, 4),
            (6, 7),
        ],
    )
    .unwrap()
}

/// Deterministic pseudo-random edge list (xorshift), no self-loops
pub fn scrambled_edges(n: usize, m: usize, seed: u64) -> Vec<(NodeId, NodeId)> {
    let mut state = seed.max(1);
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };
    let mut edges = Vec::with_capacity(m);
    while edges.len() < m {
        let u = (next() % n as u64) as usize;
        let v = (next() % n as u64) as usize;
        if u != v {
            edges.push((u, v));
        }
    }
    edges
}

/// Nodes reachable from `source` following adjacency entries
pub fn reachable(graph: &dyn GraphProvider, source: NodeId) -> Vec<bool> {
    let mut seen = vec![false; graph.node_count()];
    let mut stack = vec![source];
    seen[source] = true;
    while let Some(u) = stack.pop() {
        for n in graph.neighbors(u) {
            if !seen[n.node] {
                seen[n.node] = true;
                stack.push(n.node);
            }
        }
    }
    seen
}
