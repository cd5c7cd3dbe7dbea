//! Strongly connected components
//!
//! Tarjan's single pass is the default. Kosaraju's two passes over the graph
//! and its transpose are kept alongside for cross-checking.

use crate::error::Result;
use crate::graph::adjacency::Graph;
use crate::graph::provider::GraphProvider;
use crate::graph::traversal::{depth_first, DfsState, DfsVisitor};
use crate::graph::types::{Condensation, EdgeClass, Flow, NodeId, SccPartition, TraversalOptions};
use std::collections::{BTreeSet, VecDeque};

/// Tarjan bookkeeping kept apart from the engine's path low-link: here a
/// node stays eligible as a low-link target until its component is emitted,
/// not only while it is on the active path.
struct TarjanVisitor {
    low: Vec<usize>,
    unresolved: Vec<NodeId>,
    on_stack: Vec<bool>,
    components: Vec<Vec<NodeId>>,
}

impl TarjanVisitor {
    fn new(node_count: usize) -> Self {
        Self {
            low: vec![usize::MAX; node_count],
            unresolved: Vec::new(),
            on_stack: vec![false; node_count],
            components: Vec::new(),
        }
    }
}

impl DfsVisitor for TarjanVisitor {
    fn follow_parent_edge(&self) -> bool {
        true
    }

    fn on_discover(&mut self, node: NodeId, state: &DfsState) -> Flow {
        self.low[node] = state.tin(node).unwrap_or(usize::MAX);
        self.unresolved.push(node);
        self.on_stack[node] = true;
        Flow::Continue
    }

    fn on_non_tree_edge(
        &mut self,
        from: NodeId,
        to: NodeId,
        _class: EdgeClass,
        state: &DfsState,
    ) -> Flow {
        if self.on_stack[to] {
            if let Some(t) = state.tin(to) {
                self.low[from] = self.low[from].min(t);
            }
        }
        Flow::Continue
    }

    fn on_child_finished(&mut self, parent: NodeId, child: NodeId, _state: &DfsState) -> Flow {
        self.low[parent] = self.low[parent].min(self.low[child]);
        Flow::Continue
    }

    fn on_finish(&mut self, node: NodeId, state: &DfsState) -> Flow {
        if Some(self.low[node]) != state.tin(node) {
            return Flow::Continue;
        }
        let mut component = Vec::new();
        while let Some(member) = self.unresolved.pop() {
            self.on_stack[member] = false;
            component.push(member);
            if member == node {
                break;
            }
        }
        self.components.push(component);
        Flow::Continue
    }
}

/// Collects the nodes discovered since the last `take`
#[derive(Default)]
struct TreeCollector {
    current: Vec<NodeId>,
}

impl DfsVisitor for TreeCollector {
    fn on_discover(&mut self, node: NodeId, _state: &DfsState) -> Flow {
        self.current.push(node);
        Flow::Continue
    }
}

fn finish_partition(mut components: Vec<Vec<NodeId>>, opts: &TraversalOptions) -> SccPartition {
    if opts.canonical_components {
        for component in &mut components {
            component.sort_unstable();
        }
        components.sort_unstable_by_key(|c| c[0]);
    }
    SccPartition { components }
}

/// Tarjan's single-pass SCC algorithm
///
/// Without canonical ordering, components come out in reverse topological
/// order of the condensed graph (sinks first).
#[tracing::instrument(skip(graph, opts), fields(nodes = graph.node_count()))]
pub fn tarjan_scc(graph: &dyn GraphProvider, opts: &TraversalOptions) -> Result<SccPartition> {
    let mut visitor = TarjanVisitor::new(graph.node_count());
    depth_first(graph, 0..graph.node_count(), opts, &mut visitor)?;
    tracing::debug!(components = visitor.components.len(), "tarjan scc complete");
    Ok(finish_partition(visitor.components, opts))
}

/// Kosaraju's two-pass SCC algorithm over `graph` and its transpose
///
/// Without canonical ordering, components come out in topological order of
/// the condensed graph (sources first).
#[tracing::instrument(skip(graph, opts), fields(nodes = graph.node_count()))]
pub fn kosaraju_scc(graph: &Graph, opts: &TraversalOptions) -> Result<SccPartition> {
    let n = graph.node_count();
    let first = depth_first(graph, 0..n, opts, &mut ())?;
    let transposed = graph.transpose();

    let mut collector = TreeCollector::default();
    let mut second = DfsState::new(n);
    let mut components = Vec::new();
    for &root in first.postorder().iter().rev() {
        second.run(&transposed, root, opts, &mut collector)?;
        if !collector.current.is_empty() {
            components.push(std::mem::take(&mut collector.current));
        }
    }

    tracing::debug!(components = components.len(), "kosaraju scc complete");
    Ok(finish_partition(components, opts))
}

/// Collapse each SCC to a single node and order the resulting DAG
///
/// Component indices follow the (canonical or Tarjan) partition order;
/// `order` is a topological order of those indices.
#[tracing::instrument(skip(graph, opts), fields(nodes = graph.node_count()))]
pub fn condensation(graph: &dyn GraphProvider, opts: &TraversalOptions) -> Result<Condensation> {
    let partition = tarjan_scc(graph, opts)?;
    let component_of = partition.component_of(graph.node_count());
    let count = partition.len();

    let mut edge_set = BTreeSet::new();
    for u in 0..graph.node_count() {
        for next in graph.neighbors(u) {
            let (cu, cv) = (component_of[u], component_of[next.node]);
            if cu != cv {
                edge_set.insert((cu, cv));
            }
        }
    }
    let edges: Vec<_> = edge_set.into_iter().collect();

    let mut in_degree = vec![0usize; count];
    let mut successors = vec![Vec::new(); count];
    for &(cu, cv) in &edges {
        in_degree[cv] += 1;
        successors[cu].push(cv);
    }
    let mut queue: VecDeque<usize> = (0..count).filter(|&c| in_degree[c] == 0).collect();
    let mut order = Vec::with_capacity(count);
    while let Some(c) = queue.pop_front() {
        order.push(c);
        for &next in &successors[c] {
            in_degree[next] -= 1;
            if in_degree[next] == 0 {
                queue.push_back(next);
            }
        }
    }

    Ok(Condensation {
        components: partition.components,
        component_of,
        edges,
        order,
    })
}
