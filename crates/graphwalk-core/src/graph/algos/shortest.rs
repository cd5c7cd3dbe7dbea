use crate::error::{GraphError, Result};
use crate::graph::provider::{ordered_neighbors, GraphProvider};
use crate::graph::types::{walk_parents, NodeId, ShortestPaths, TraversalOptions, Weight};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Min-heap entry ordered by tentative distance, then node id
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct HeapEntry {
    dist: Weight,
    node: NodeId,
}

/// Single-source shortest paths by edge weight (Dijkstra)
///
/// Fails with `NegativeWeight` on the first negative edge reachable from
/// `source`.
#[tracing::instrument(skip(graph, opts), fields(nodes = graph.node_count()))]
pub fn dijkstra(
    graph: &dyn GraphProvider,
    source: NodeId,
    opts: &TraversalOptions,
) -> Result<ShortestPaths> {
    graph.check_node(source)?;
    let n = graph.node_count();
    let mut dist: Vec<Option<Weight>> = vec![None; n];
    let mut parent = vec![None; n];
    let mut settled = vec![false; n];
    let mut heap = BinaryHeap::new();

    dist[source] = Some(0);
    heap.push(Reverse(HeapEntry {
        dist: 0,
        node: source,
    }));

    while let Some(Reverse(HeapEntry { dist: d, node: u })) = heap.pop() {
        if settled[u] {
            continue;
        }
        settled[u] = true;

        for next in ordered_neighbors(graph, u, opts.neighbor_order).iter() {
            if next.weight < 0 {
                return Err(GraphError::NegativeWeight {
                    from: u,
                    to: next.node,
                    weight: next.weight,
                });
            }
            let candidate = d.saturating_add(next.weight);
            if dist[next.node].is_none_or(|current| candidate < current) {
                dist[next.node] = Some(candidate);
                parent[next.node] = Some(u);
                heap.push(Reverse(HeapEntry {
                    dist: candidate,
                    node: next.node,
                }));
            }
        }
    }

    tracing::debug!(
        reached = settled.iter().filter(|&&s| s).count(),
        "dijkstra complete"
    );
    Ok(ShortestPaths {
        source,
        dist,
        parent,
    })
}

impl ShortestPaths {
    /// Cheapest path from the source to `target`, inclusive of both ends
    pub fn path_to(&self, target: NodeId) -> Option<Vec<NodeId>> {
        self.dist.get(target).copied().flatten()?;
        Some(walk_parents(&self.parent, self.source, target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{EdgeKind, Graph};

    fn opts() -> TraversalOptions {
        TraversalOptions::default()
    }

    #[test]
    fn test_heap_entry_ordering() {
        let near = HeapEntry { dist: 1, node: 9 };
        let far = HeapEntry { dist: 2, node: 0 };
        assert!(near < far);
        assert!(Reverse(near) > Reverse(far));
    }

    #[test]
    fn test_prefers_cheaper_longer_path() {
        let mut graph = Graph::new(4);
        graph.add_edge(0, 3, 10, EdgeKind::Directed).unwrap();
        graph.add_edge(0, 1, 2, EdgeKind::Directed).unwrap();
        graph.add_edge(1, 2, 2, EdgeKind::Directed).unwrap();
        graph.add_edge(2, 3, 2, EdgeKind::Directed).unwrap();

        let paths = dijkstra(&graph, 0, &opts()).unwrap();
        assert_eq!(paths.dist, vec![Some(0), Some(2), Some(4), Some(6)]);
        assert_eq!(paths.path_to(3), Some(vec![0, 1, 2, 3]));
    }

    #[test]
    fn test_unreachable_node() {
        let mut graph = Graph::new(3);
        graph.add_edge(0, 1, 5, EdgeKind::Undirected).unwrap();

        let paths = dijkstra(&graph, 1, &opts()).unwrap();
        assert_eq!(paths.dist, vec![Some(5), Some(0), None]);
        assert_eq!(paths.path_to(2), None);
    }

    #[test]
    fn test_negative_weight_rejected() {
        let mut graph = Graph::new(2);
        graph.add_edge(0, 1, -1, EdgeKind::Directed).unwrap();

        let err = dijkstra(&graph, 0, &opts()).unwrap_err();
        assert!(matches!(
            err,
            GraphError::NegativeWeight {
                from: 0,
                to: 1,
                weight: -1
            }
        ));
    }

    #[test]
    fn test_invalid_source() {
        let graph = Graph::new(1);
        assert!(matches!(
            dijkstra(&graph, 1, &opts()).unwrap_err(),
            GraphError::InvalidNode { .. }
        ));
    }
}
