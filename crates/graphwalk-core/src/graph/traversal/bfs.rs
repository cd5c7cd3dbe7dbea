use crate::error::Result;
use crate::graph::provider::{ordered_neighbors, GraphProvider};
use crate::graph::types::{walk_parents, BfsResult, EdgeId, Flow, NodeId, TraversalOptions};
use std::collections::VecDeque;

/// Hooks invoked by the BFS core
pub trait BfsVisitor {
    /// Called when `node` is first seen and enqueued
    fn on_discover(&mut self, _node: NodeId, _parent: Option<NodeId>, _depth: usize) -> Flow {
        Flow::Continue
    }

    /// Called for an edge to an already visited node. The reverse entry of
    /// the edge that discovered `from` is never reported.
    fn on_revisit(&mut self, _from: NodeId, _to: NodeId, _edge: EdgeId) -> Flow {
        Flow::Continue
    }
}

impl BfsVisitor for () {}

/// State tracked during BFS traversal
///
/// The same state may be run from several sources in turn; nodes visited by
/// an earlier run are not entered again.
#[derive(Debug, Clone)]
pub struct BfsState {
    visited: Vec<bool>,
    parent: Vec<Option<NodeId>>,
    parent_edge: Vec<Option<EdgeId>>,
    distance: Vec<Option<usize>>,
    order: Vec<NodeId>,
    edges_examined: usize,
}

impl BfsState {
    pub fn new(node_count: usize) -> Self {
        Self {
            visited: vec![false; node_count],
            parent: vec![None; node_count],
            parent_edge: vec![None; node_count],
            distance: vec![None; node_count],
            order: Vec::new(),
            edges_examined: 0,
        }
    }

    pub fn is_visited(&self, node: NodeId) -> bool {
        self.visited[node]
    }

    pub fn order(&self) -> &[NodeId] {
        &self.order
    }

    pub fn edges_examined(&self) -> usize {
        self.edges_examined
    }

    fn enqueue(
        &mut self,
        queue: &mut VecDeque<NodeId>,
        node: NodeId,
        parent: Option<NodeId>,
        edge: Option<EdgeId>,
        depth: usize,
    ) {
        self.visited[node] = true;
        self.parent[node] = parent;
        self.parent_edge[node] = edge;
        self.distance[node] = Some(depth);
        queue.push_back(node);
    }

    /// Traverse the component reachable from `source`
    ///
    /// Nodes are marked visited when enqueued, so the queue never holds the
    /// same node twice.
    pub fn run<V: BfsVisitor + ?Sized>(
        &mut self,
        graph: &dyn GraphProvider,
        source: NodeId,
        opts: &TraversalOptions,
        visitor: &mut V,
    ) -> Result<Flow> {
        graph.check_node(source)?;
        if self.visited[source] {
            return Ok(Flow::Continue);
        }

        let mut queue = VecDeque::new();
        self.enqueue(&mut queue, source, None, None, 0);
        if visitor.on_discover(source, None, 0).is_stop() {
            return Ok(Flow::Stop);
        }

        while let Some(current) = queue.pop_front() {
            self.order.push(current);
            let depth = self.distance[current].unwrap_or(0);

            for next in ordered_neighbors(graph, current, opts.neighbor_order).iter() {
                self.edges_examined += 1;
                if self.parent_edge[current] == Some(next.edge) {
                    continue;
                }

                let flow = if self.visited[next.node] {
                    visitor.on_revisit(current, next.node, next.edge)
                } else {
                    self.enqueue(
                        &mut queue,
                        next.node,
                        Some(current),
                        Some(next.edge),
                        depth + 1,
                    );
                    visitor.on_discover(next.node, Some(current), depth + 1)
                };
                if flow.is_stop() {
                    return Ok(Flow::Stop);
                }
            }
        }

        Ok(Flow::Continue)
    }

    pub fn into_result(self, source: NodeId) -> BfsResult {
        BfsResult {
            source,
            order: self.order,
            parent: self.parent,
            distance: self.distance,
        }
    }
}

/// Run the BFS core from a single source with a caller-supplied visitor
pub fn breadth_first<V: BfsVisitor + ?Sized>(
    graph: &dyn GraphProvider,
    source: NodeId,
    opts: &TraversalOptions,
    visitor: &mut V,
) -> Result<BfsState> {
    let mut state = BfsState::new(graph.node_count());
    state.run(graph, source, opts, visitor)?;
    Ok(state)
}

/// Breadth-first traversal of the component containing `source`
///
/// Other components are left unvisited; callers needing full coverage run
/// `bfs` again from an undiscovered node.
#[tracing::instrument(skip(graph, opts), fields(nodes = graph.node_count()))]
pub fn bfs(
    graph: &dyn GraphProvider,
    source: NodeId,
    opts: &TraversalOptions,
) -> Result<BfsResult> {
    let state = breadth_first(graph, source, opts, &mut ())?;
    tracing::debug!(
        visited = state.order().len(),
        edges_examined = state.edges_examined(),
        "bfs complete"
    );
    Ok(state.into_result(source))
}

impl BfsResult {
    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.distance.get(node).is_some_and(|d| d.is_some())
    }

    /// Fewest-hop path from the source to `target`, inclusive of both ends
    pub fn path_to(&self, target: NodeId) -> Option<Vec<NodeId>> {
        if !self.is_reachable(target) {
            return None;
        }
        Some(walk_parents(&self.parent, self.source, target))
    }
}
