use super::*;
use crate::error::GraphError;
use crate::graph::{EdgeKind, Graph};

#[derive(Default)]
struct EdgeLog {
    follow: bool,
    non_tree: Vec<(NodeId, NodeId, EdgeClass)>,
    returns: Vec<(NodeId, NodeId)>,
}

impl DfsVisitor for EdgeLog {
    fn follow_parent_edge(&self) -> bool {
        self.follow
    }

    fn on_non_tree_edge(
        &mut self,
        from: NodeId,
        to: NodeId,
        class: EdgeClass,
        _state: &DfsState,
    ) -> Flow {
        self.non_tree.push((from, to, class));
        Flow::Continue
    }

    fn on_child_finished(&mut self, parent: NodeId, child: NodeId, _state: &DfsState) -> Flow {
        self.returns.push((parent, child));
        Flow::Continue
    }
}

#[test]
fn test_dfs_preorder_and_postorder() {
    // 0 -> 1 -> 2, 0 -> 3
    let graph = Graph::from_edges(4, EdgeKind::Directed, &[(0, 1), (1, 2), (0, 3)]).unwrap();
    let result = dfs(&graph, 0, &TraversalOptions::default()).unwrap();

    assert_eq!(result.order, vec![0, 1, 2, 3]);
    assert_eq!(result.postorder, vec![2, 1, 3, 0]);
    assert_eq!(result.parent, vec![None, Some(0), Some(1), Some(0)]);
}

#[test]
fn test_dfs_times_nest() {
    let graph = Graph::from_edges(4, EdgeKind::Directed, &[(0, 1), (1, 2), (0, 3)]).unwrap();
    let result = dfs(&graph, 0, &TraversalOptions::default()).unwrap();

    // Clock: d0=0 d1=1 d2=2 f2=3 f1=4 d3=5 f3=6 f0=7
    assert_eq!(result.tin, vec![Some(0), Some(1), Some(2), Some(5)]);
    assert_eq!(result.finish, vec![Some(7), Some(4), Some(3), Some(6)]);
}

#[test]
fn test_dfs_unreached_nodes_have_no_times() {
    let graph = Graph::from_edges(3, EdgeKind::Directed, &[(0, 1)]).unwrap();
    let result = dfs(&graph, 0, &TraversalOptions::default()).unwrap();

    assert_eq!(result.tin[2], None);
    assert_eq!(result.finish[2], None);
    assert_eq!(result.low[2], None);
}

#[test]
fn test_dfs_rejects_invalid_source() {
    let graph = Graph::new(1);
    let err = dfs(&graph, 5, &TraversalOptions::default()).unwrap_err();
    assert!(matches!(err, GraphError::InvalidNode { node: 5, .. }));
}

#[test]
fn test_low_link_on_undirected_cycle() {
    // Triangle 0-1-2 with tail 2-3
    let graph = Graph::from_edges(
        4,
        EdgeKind::Undirected,
        &[(0, 1), (1, 2), (2, 0), (2, 3)],
    )
    .unwrap();
    let result = dfs(&graph, 0, &TraversalOptions::default()).unwrap();

    let tin0 = result.tin[0].unwrap();
    assert_eq!(result.low[1], Some(tin0));
    assert_eq!(result.low[2], Some(tin0));
    assert_eq!(result.low[3], result.tin[3]);
    for node in 0..4 {
        assert!(result.low[node] <= result.tin[node]);
    }
}

#[test]
fn test_parent_edge_skipped_by_default() {
    let graph = Graph::from_edges(2, EdgeKind::Undirected, &[(0, 1)]).unwrap();
    let mut log = EdgeLog::default();
    depth_first(&graph, [0], &TraversalOptions::default(), &mut log).unwrap();

    assert!(log.non_tree.is_empty());
    assert_eq!(log.returns, vec![(0, 1)]);
}

#[test]
fn test_parent_edge_followed_when_requested() {
    let graph = Graph::from_edges(2, EdgeKind::Undirected, &[(0, 1)]).unwrap();
    let mut log = EdgeLog {
        follow: true,
        ..Default::default()
    };
    depth_first(&graph, [0], &TraversalOptions::default(), &mut log).unwrap();

    assert_eq!(log.non_tree, vec![(1, 0, EdgeClass::Back)]);
}

#[test]
fn test_edge_classes_directed() {
    // Tree 0->1->2, forward 0->2, cross 3->1 (3 rooted later), back 2->0
    let graph = Graph::from_edges(
        4,
        EdgeKind::Directed,
        &[(0, 1), (1, 2), (2, 0), (0, 2), (3, 1)],
    )
    .unwrap();
    let mut log = EdgeLog::default();
    depth_first(&graph, 0..4, &TraversalOptions::default(), &mut log).unwrap();

    assert_eq!(
        log.non_tree,
        vec![
            (2, 0, EdgeClass::Back),
            (0, 2, EdgeClass::Forward),
            (3, 1, EdgeClass::Cross),
        ]
    );
}

#[test]
fn test_forest_covers_all_nodes() {
    let graph = Graph::from_edges(5, EdgeKind::Directed, &[(0, 1), (3, 4)]).unwrap();
    let result = dfs_forest(&graph, &TraversalOptions::default()).unwrap();

    assert_eq!(result.order, vec![0, 1, 2, 3, 4]);
    assert!(result.tin.iter().all(|t| t.is_some()));
    assert_eq!(result.parent[3], None);
    assert_eq!(result.parent[4], Some(3));
}

#[test]
fn test_deep_path_does_not_overflow() {
    let n = 200_000;
    let edges: Vec<_> = (1..n).map(|i| (i - 1, i)).collect();
    let graph = Graph::from_edges(n, EdgeKind::Directed, &edges).unwrap();
    let result = dfs(&graph, 0, &TraversalOptions::default()).unwrap();

    assert_eq!(result.order.len(), n);
    assert_eq!(result.postorder[0], n - 1);
}

#[test]
fn test_stop_from_discover_hook() {
    struct StopAfter(usize);
    impl DfsVisitor for StopAfter {
        fn on_discover(&mut self, _node: NodeId, state: &DfsState) -> Flow {
            if state.order().len() >= self.0 {
                Flow::Stop
            } else {
                Flow::Continue
            }
        }
    }

    let graph = Graph::from_edges(4, EdgeKind::Directed, &[(0, 1), (1, 2), (2, 3)]).unwrap();
    let opts = TraversalOptions::default();
    let state = depth_first(&graph, 0..4, &opts, &mut StopAfter(2)).unwrap();

    assert_eq!(state.order(), &[0, 1]);
    assert!(state.is_on_path(1));
}
