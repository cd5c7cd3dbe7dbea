use crate::error::Result;
use crate::graph::provider::{ordered_neighbors, GraphProvider};
use crate::graph::types::{DfsResult, EdgeClass, EdgeId, Flow, Neighbor, NodeId, TraversalOptions};
use std::borrow::Cow;

/// Hooks invoked by the DFS core
///
/// Every hook sees the engine state after the event has been applied, so
/// `state.tin(node)` is already set in `on_discover` and `state.finish(node)`
/// in `on_finish`.
pub trait DfsVisitor {
    /// Whether the reverse entry of an undirected tree edge is followed.
    ///
    /// Undirected analyses (bridges, undirected cycles) skip it so the edge
    /// that discovered a node is not mistaken for a back edge. Directed
    /// analyses follow it, treating an undirected edge as two arcs.
    fn follow_parent_edge(&self) -> bool {
        false
    }

    fn on_discover(&mut self, _node: NodeId, _state: &DfsState) -> Flow {
        Flow::Continue
    }

    /// Called for an edge whose target was already discovered
    fn on_non_tree_edge(
        &mut self,
        _from: NodeId,
        _to: NodeId,
        _class: EdgeClass,
        _state: &DfsState,
    ) -> Flow {
        Flow::Continue
    }

    /// Called when `child` has finished and control returns to `parent`
    fn on_child_finished(&mut self, _parent: NodeId, _child: NodeId, _state: &DfsState) -> Flow {
        Flow::Continue
    }

    fn on_finish(&mut self, _node: NodeId, _state: &DfsState) -> Flow {
        Flow::Continue
    }
}

impl DfsVisitor for () {}

/// One simulated call frame: the node and how far its adjacency has been scanned
struct Frame<'g> {
    node: NodeId,
    neighbors: Cow<'g, [Neighbor]>,
    cursor: usize,
}

/// State tracked during DFS traversal
///
/// A single clock ticks on every discovery and every finish, shared across
/// all runs on the same state, so for a DFS-tree ancestor `u` of `v`:
/// `tin[u] < tin[v] < finish[v] < finish[u]`.
#[derive(Debug, Clone)]
pub struct DfsState {
    tin: Vec<Option<usize>>,
    finish: Vec<Option<usize>>,
    low: Vec<usize>,
    parent: Vec<Option<NodeId>>,
    parent_edge: Vec<Option<EdgeId>>,
    on_path: Vec<bool>,
    order: Vec<NodeId>,
    postorder: Vec<NodeId>,
    clock: usize,
    edges_examined: usize,
}

impl DfsState {
    pub fn new(node_count: usize) -> Self {
        Self {
            tin: vec![None; node_count],
            finish: vec![None; node_count],
            low: vec![usize::MAX; node_count],
            parent: vec![None; node_count],
            parent_edge: vec![None; node_count],
            on_path: vec![false; node_count],
            order: Vec::new(),
            postorder: Vec::new(),
            clock: 0,
            edges_examined: 0,
        }
    }

    pub fn is_visited(&self, node: NodeId) -> bool {
        self.tin[node].is_some()
    }

    /// True while `node` is on the active DFS path (discovered, not finished)
    pub fn is_on_path(&self, node: NodeId) -> bool {
        self.on_path[node]
    }

    pub fn tin(&self, node: NodeId) -> Option<usize> {
        self.tin[node]
    }

    pub fn finish(&self, node: NodeId) -> Option<usize> {
        self.finish[node]
    }

    /// Smallest discovery time reachable from `node`'s subtree through tree
    /// edges and at most one back edge
    pub fn low(&self, node: NodeId) -> Option<usize> {
        self.tin[node].map(|_| self.low[node])
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.parent[node]
    }

    /// Edge through which `node` was discovered
    pub fn parent_edge(&self, node: NodeId) -> Option<EdgeId> {
        self.parent_edge[node]
    }

    pub fn order(&self) -> &[NodeId] {
        &self.order
    }

    pub fn postorder(&self) -> &[NodeId] {
        &self.postorder
    }

    pub fn edges_examined(&self) -> usize {
        self.edges_examined
    }

    fn tick(&mut self) -> usize {
        let now = self.clock;
        self.clock += 1;
        now
    }

    fn discover<V: DfsVisitor + ?Sized>(
        &mut self,
        node: NodeId,
        parent: Option<NodeId>,
        edge: Option<EdgeId>,
        visitor: &mut V,
    ) -> Flow {
        let now = self.tick();
        self.tin[node] = Some(now);
        self.low[node] = now;
        self.parent[node] = parent;
        self.parent_edge[node] = edge;
        self.on_path[node] = true;
        self.order.push(node);
        visitor.on_discover(node, self)
    }

    fn finish_node<V: DfsVisitor + ?Sized>(&mut self, node: NodeId, visitor: &mut V) -> Flow {
        let now = self.tick();
        self.finish[node] = Some(now);
        // on_path holds exactly the active path
        self.on_path[node] = false;
        self.postorder.push(node);

        let parent = self.parent[node];
        if let Some(p) = parent {
            self.low[p] = self.low[p].min(self.low[node]);
        }

        if visitor.on_finish(node, self).is_stop() {
            return Flow::Stop;
        }
        match parent {
            Some(p) => visitor.on_child_finished(p, node, self),
            None => Flow::Continue,
        }
    }

    fn classify(&self, from: NodeId, to: NodeId) -> EdgeClass {
        if self.on_path[to] {
            EdgeClass::Back
        } else if self.tin[to] > self.tin[from] {
            EdgeClass::Forward
        } else {
            EdgeClass::Cross
        }
    }

    /// Explore everything reachable from `root` that is not yet visited
    ///
    /// Uses an explicit stack of frames rather than native recursion, so
    /// path-shaped graphs of any length are safe.
    pub fn run<'g, V: DfsVisitor + ?Sized>(
        &mut self,
        graph: &'g dyn GraphProvider,
        root: NodeId,
        opts: &TraversalOptions,
        visitor: &mut V,
    ) -> Result<Flow> {
        graph.check_node(root)?;
        if self.is_visited(root) {
            return Ok(Flow::Continue);
        }

        let follow_parent_edge = visitor.follow_parent_edge();
        if self.discover(root, None, None, visitor).is_stop() {
            return Ok(Flow::Stop);
        }
        let mut stack: Vec<Frame<'g>> = vec![Frame {
            node: root,
            neighbors: ordered_neighbors(graph, root, opts.neighbor_order),
            cursor: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let node = frame.node;
            let next = frame.neighbors.get(frame.cursor).copied();
            frame.cursor += 1;

            let Some(next) = next else {
                stack.pop();
                if self.finish_node(node, visitor).is_stop() {
                    return Ok(Flow::Stop);
                }
                continue;
            };

            self.edges_examined += 1;
            if !follow_parent_edge && self.parent_edge[node] == Some(next.edge) {
                continue;
            }

            let target = next.node;
            if !self.is_visited(target) {
                if self
                    .discover(target, Some(node), Some(next.edge), visitor)
                    .is_stop()
                {
                    return Ok(Flow::Stop);
                }
                stack.push(Frame {
                    node: target,
                    neighbors: ordered_neighbors(graph, target, opts.neighbor_order),
                    cursor: 0,
                });
                continue;
            }

            let class = self.classify(node, target);
            if class == EdgeClass::Back {
                if let Some(t) = self.tin[target] {
                    self.low[node] = self.low[node].min(t);
                }
            }
            tracing::trace!(from = node, to = target, ?class, "non-tree edge");
            if visitor.on_non_tree_edge(node, target, class, self).is_stop() {
                return Ok(Flow::Stop);
            }
        }

        Ok(Flow::Continue)
    }

    pub fn into_result(self) -> DfsResult {
        let low = self
            .tin
            .iter()
            .zip(&self.low)
            .map(|(tin, low)| tin.map(|_| *low))
            .collect();
        DfsResult {
            order: self.order,
            postorder: self.postorder,
            tin: self.tin,
            finish: self.finish,
            low,
            parent: self.parent,
        }
    }
}

/// Run the DFS core from each root in turn, sharing one state and clock
///
/// Roots already reached by an earlier root are skipped. Stops early when a
/// hook returns [`Flow::Stop`].
pub fn depth_first<V, I>(
    graph: &dyn GraphProvider,
    roots: I,
    opts: &TraversalOptions,
    visitor: &mut V,
) -> Result<DfsState>
where
    V: DfsVisitor + ?Sized,
    I: IntoIterator<Item = NodeId>,
{
    let mut state = DfsState::new(graph.node_count());
    for root in roots {
        if state.run(graph, root, opts, visitor)?.is_stop() {
            break;
        }
    }
    Ok(state)
}

/// Depth-first traversal of the component reachable from `source`
#[tracing::instrument(skip(graph, opts), fields(nodes = graph.node_count()))]
pub fn dfs(
    graph: &dyn GraphProvider,
    source: NodeId,
    opts: &TraversalOptions,
) -> Result<DfsResult> {
    let state = depth_first(graph, [source], opts, &mut ())?;
    tracing::debug!(
        visited = state.order().len(),
        edges_examined = state.edges_examined(),
        "dfs complete"
    );
    Ok(state.into_result())
}

/// Depth-first traversal covering every node, rooting new trees in id order
#[tracing::instrument(skip(graph, opts), fields(nodes = graph.node_count()))]
pub fn dfs_forest(graph: &dyn GraphProvider, opts: &TraversalOptions) -> Result<DfsResult> {
    let state = depth_first(graph, 0..graph.node_count(), opts, &mut ())?;
    tracing::debug!(edges_examined = state.edges_examined(), "dfs forest complete");
    Ok(state.into_result())
}

#[cfg(test)]
mod tests;
