//! Bridges and articulation points (Tarjan)
//!
//! Both read the engine's low-link values, which for undirected graphs only
//! consider back edges other than the edge that discovered a node.

use crate::error::Result;
use crate::graph::provider::{require_undirected, GraphProvider};
use crate::graph::traversal::{depth_first, DfsState, DfsVisitor};
use crate::graph::types::{Flow, NodeId, TraversalOptions};

#[derive(Default)]
struct BridgeCollector {
    bridges: Vec<(NodeId, NodeId)>,
}

impl DfsVisitor for BridgeCollector {
    fn on_child_finished(&mut self, parent: NodeId, child: NodeId, state: &DfsState) -> Flow {
        if state.low(child) > state.tin(parent) {
            self.bridges.push((parent.min(child), parent.max(child)));
        }
        Flow::Continue
    }
}

/// Every edge whose removal disconnects its endpoints
///
/// Returned as `(min, max)` endpoint pairs in ascending order. One of two
/// parallel edges is never a bridge.
#[tracing::instrument(skip(graph, opts), fields(nodes = graph.node_count()))]
pub fn bridges(
    graph: &dyn GraphProvider,
    opts: &TraversalOptions,
) -> Result<Vec<(NodeId, NodeId)>> {
    require_undirected(graph, "bridge detection")?;
    let mut collector = BridgeCollector::default();
    depth_first(graph, 0..graph.node_count(), opts, &mut collector)?;

    let mut bridges = collector.bridges;
    bridges.sort_unstable();
    tracing::debug!(count = bridges.len(), "bridges found");
    Ok(bridges)
}

struct CutVertexCollector {
    tree_children: Vec<usize>,
    is_cut: Vec<bool>,
}

impl DfsVisitor for CutVertexCollector {
    fn on_child_finished(&mut self, parent: NodeId, child: NodeId, state: &DfsState) -> Flow {
        self.tree_children[parent] += 1;
        let is_root = state.parent(parent).is_none();
        if !is_root && state.low(child) >= state.tin(parent) {
            self.is_cut[parent] = true;
        }
        Flow::Continue
    }

    fn on_finish(&mut self, node: NodeId, state: &DfsState) -> Flow {
        if state.parent(node).is_none() && self.tree_children[node] > 1 {
            self.is_cut[node] = true;
        }
        Flow::Continue
    }
}

/// Every node whose removal increases the number of connected components,
/// in ascending order
#[tracing::instrument(skip(graph, opts), fields(nodes = graph.node_count()))]
pub fn articulation_points(
    graph: &dyn GraphProvider,
    opts: &TraversalOptions,
) -> Result<Vec<NodeId>> {
    require_undirected(graph, "articulation point detection")?;
    let n = graph.node_count();
    let mut collector = CutVertexCollector {
        tree_children: vec![0; n],
        is_cut: vec![false; n],
    };
    depth_first(graph, 0..n, opts, &mut collector)?;

    let points: Vec<_> = (0..n).filter(|&u| collector.is_cut[u]).collect();
    tracing::debug!(count = points.len(), "articulation points found");
    Ok(points)
}
