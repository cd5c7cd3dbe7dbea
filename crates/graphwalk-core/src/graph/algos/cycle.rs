//! Cycle detection
//!
//! Directed detection looks for a back edge to a node still on the active
//! DFS path. Undirected detection looks for any non-tree edge other than the
//! one that discovered the current node.

use crate::error::Result;
use crate::graph::provider::{require_undirected, GraphProvider};
use crate::graph::traversal::{breadth_first, depth_first, BfsVisitor, DfsState, DfsVisitor};
use crate::graph::types::{walk_parents, EdgeClass, EdgeId, Flow, NodeId, TraversalOptions};

/// Stops at the first back edge and remembers it
struct BackEdgeFinder {
    follow_parent_edge: bool,
    found: Option<(NodeId, NodeId)>,
}

impl BackEdgeFinder {
    fn new(follow_parent_edge: bool) -> Self {
        Self {
            follow_parent_edge,
            found: None,
        }
    }
}

impl DfsVisitor for BackEdgeFinder {
    fn follow_parent_edge(&self) -> bool {
        self.follow_parent_edge
    }

    fn on_non_tree_edge(
        &mut self,
        from: NodeId,
        to: NodeId,
        class: EdgeClass,
        _state: &DfsState,
    ) -> Flow {
        if class == EdgeClass::Back {
            self.found = Some((from, to));
            return Flow::Stop;
        }
        Flow::Continue
    }
}

/// True if following edges in their stored direction can return to a node
///
/// An undirected edge counts as two opposite arcs and therefore as a cycle.
#[tracing::instrument(skip(graph, opts), fields(nodes = graph.node_count()))]
pub fn has_directed_cycle(graph: &dyn GraphProvider, opts: &TraversalOptions) -> Result<bool> {
    Ok(find_directed_cycle(graph, opts)?.is_some())
}

/// One directed cycle as a node sequence `[v0, v1, ..., vk]` where each
/// consecutive pair and `vk -> v0` are edges
pub fn find_directed_cycle(
    graph: &dyn GraphProvider,
    opts: &TraversalOptions,
) -> Result<Option<Vec<NodeId>>> {
    let mut finder = BackEdgeFinder::new(true);
    let state = depth_first(graph, 0..graph.node_count(), opts, &mut finder)?;

    let cycle = finder.found.map(|(from, to)| {
        let parents: Vec<_> = (0..graph.node_count()).map(|n| state.parent(n)).collect();
        walk_parents(&parents, to, from)
    });
    tracing::debug!(found = cycle.is_some(), "directed cycle search complete");
    Ok(cycle)
}

/// True if any connected component of an undirected graph has a cycle
///
/// Parallel edges and self-loops count as cycles.
#[tracing::instrument(skip(graph, opts), fields(nodes = graph.node_count()))]
pub fn has_undirected_cycle(graph: &dyn GraphProvider, opts: &TraversalOptions) -> Result<bool> {
    require_undirected(graph, "undirected cycle detection")?;
    let mut finder = BackEdgeFinder::new(false);
    depth_first(graph, 0..graph.node_count(), opts, &mut finder)?;
    Ok(finder.found.is_some())
}

struct RevisitFinder {
    found: bool,
}

impl BfsVisitor for RevisitFinder {
    fn on_revisit(&mut self, _from: NodeId, _to: NodeId, _edge: EdgeId) -> Flow {
        self.found = true;
        Flow::Stop
    }
}

/// BFS variant of undirected cycle detection, limited to the component
/// containing `source`
pub fn bfs_has_undirected_cycle(
    graph: &dyn GraphProvider,
    source: NodeId,
    opts: &TraversalOptions,
) -> Result<bool> {
    require_undirected(graph, "undirected cycle detection")?;
    let mut finder = RevisitFinder { found: false };
    breadth_first(graph, source, opts, &mut finder)?;
    Ok(finder.found)
}
