//! Topological ordering
//!
//! Two methods: reversed DFS post-order, and Kahn's in-degree queue. Neither
//! fails on a cyclic graph; the cycle is reported through
//! [`TopoOrder::acyclic`].

use crate::error::Result;
use crate::graph::adjacency::in_degrees;
use crate::graph::provider::{ordered_neighbors, GraphProvider};
use crate::graph::traversal::{depth_first, DfsState, DfsVisitor};
use crate::graph::types::{EdgeClass, Flow, NodeId, TopoOrder, TraversalOptions};
use std::collections::VecDeque;

/// Records whether any back edge was seen
#[derive(Default)]
struct AcyclicityWitness {
    saw_back_edge: bool,
}

impl DfsVisitor for AcyclicityWitness {
    fn follow_parent_edge(&self) -> bool {
        true
    }

    fn on_non_tree_edge(
        &mut self,
        _from: NodeId,
        _to: NodeId,
        class: EdgeClass,
        _state: &DfsState,
    ) -> Flow {
        if class == EdgeClass::Back {
            self.saw_back_edge = true;
        }
        Flow::Continue
    }
}

/// Topological order from reversed DFS post-order
///
/// `order` always lists all `n` nodes; it is a valid topological order only
/// when `acyclic` is true.
#[tracing::instrument(skip(graph, opts), fields(nodes = graph.node_count()))]
pub fn topological_sort(graph: &dyn GraphProvider, opts: &TraversalOptions) -> Result<TopoOrder> {
    let mut witness = AcyclicityWitness::default();
    let state = depth_first(graph, 0..graph.node_count(), opts, &mut witness)?;

    let mut order = state.postorder().to_vec();
    order.reverse();
    let acyclic = !witness.saw_back_edge;
    tracing::debug!(acyclic, "dfs toposort complete");
    Ok(TopoOrder { order, acyclic })
}

/// Kahn's algorithm
///
/// The queue is seeded with every in-degree-0 node in ascending id order.
/// On a cyclic graph the nodes on or behind a cycle never reach in-degree 0,
/// so `order` comes back shorter than `n` and `acyclic` is false.
#[tracing::instrument(skip(graph, opts), fields(nodes = graph.node_count()))]
pub fn kahn_toposort(graph: &dyn GraphProvider, opts: &TraversalOptions) -> Result<TopoOrder> {
    let n = graph.node_count();
    let mut in_degree = in_degrees(graph);
    let mut queue: VecDeque<NodeId> = (0..n).filter(|&u| in_degree[u] == 0).collect();
    let mut order = Vec::with_capacity(n);

    while let Some(u) = queue.pop_front() {
        order.push(u);
        for next in ordered_neighbors(graph, u, opts.neighbor_order).iter() {
            in_degree[next.node] -= 1;
            if in_degree[next.node] == 0 {
                queue.push_back(next.node);
            }
        }
    }

    let acyclic = order.len() == n;
    tracing::debug!(acyclic, emitted = order.len(), "kahn toposort complete");
    Ok(TopoOrder { order, acyclic })
}

impl TopoOrder {
    /// Position of each node in `order`; `None` for nodes left out
    pub fn positions(&self, node_count: usize) -> Vec<Option<usize>> {
        let mut position = vec![None; node_count];
        for (i, &node) in self.order.iter().enumerate() {
            position[node] = Some(i);
        }
        position
    }

    /// True if every adjacency entry `u -> v` has `u` placed before `v`
    pub fn respects(&self, graph: &dyn GraphProvider) -> bool {
        let position = self.positions(graph.node_count());
        (0..graph.node_count()).all(|u| {
            graph.neighbors(u).iter().all(|n| match (position[u], position[n.node]) {
                (Some(pu), Some(pv)) => pu < pv,
                _ => false,
            })
        })
    }
}
