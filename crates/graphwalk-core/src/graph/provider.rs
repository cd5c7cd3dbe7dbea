use crate::error::Result;
use crate::graph::types::{Neighbor, NeighborOrder, NodeId};
use std::borrow::Cow;

/// Trait for providing graph adjacency to the traversal engine
pub trait GraphProvider {
    /// Size of the node universe `[0, n)`
    fn node_count(&self) -> usize;

    /// Adjacency entries of `node` in insertion order
    fn neighbors(&self, node: NodeId) -> &[Neighbor];

    /// True if any edge was inserted as directed
    fn has_directed_edges(&self) -> bool;

    fn check_node(&self, node: NodeId) -> Result<()> {
        crate::ensure_node!(node, self.node_count());
        Ok(())
    }
}

/// Adjacency of `node` in the requested scan order
pub fn ordered_neighbors(
    graph: &dyn GraphProvider,
    node: NodeId,
    order: NeighborOrder,
) -> Cow<'_, [Neighbor]> {
    let neighbors = graph.neighbors(node);
    match order {
        NeighborOrder::Insertion => Cow::Borrowed(neighbors),
        NeighborOrder::Ascending => {
            if neighbors.windows(2).all(|w| w[0].node <= w[1].node) {
                return Cow::Borrowed(neighbors);
            }
            let mut sorted = neighbors.to_vec();
            sorted.sort_by_key(|n| n.node);
            Cow::Owned(sorted)
        }
    }
}

/// Reject undirected-only operations on graphs with directed edges
pub(crate) fn require_undirected(graph: &dyn GraphProvider, operation: &str) -> Result<()> {
    if graph.has_directed_edges() {
        crate::bail_unsupported!(operation, "graph contains directed edges");
    }
    Ok(())
}
