//! Config-bound facade over the traversal operations
//!
//! An [`Engine`] borrows a graph and carries the traversal options, so
//! callers configure once and then invoke operations without threading
//! options through every call. It holds no traversal state between calls.

use std::time::Instant;

use serde::Serialize;

use crate::config::EngineConfig;
use crate::error::Result;
use crate::graph::{
    self, BfsResult, Condensation, DfsResult, GraphProvider, NodeId, SccPartition,
    ShortestPaths, TopoOrder, TraversalOptions,
};

pub struct Engine<'g> {
    graph: &'g dyn GraphProvider,
    opts: TraversalOptions,
}

/// One-shot overview of a directed graph's structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    pub nodes: usize,
    pub has_cycle: bool,
    pub scc_count: usize,
    /// Topological order of the graph when acyclic
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topological_order: Option<Vec<NodeId>>,
}

impl<'g> Engine<'g> {
    pub fn new(graph: &'g dyn GraphProvider, opts: TraversalOptions) -> Self {
        Self { graph, opts }
    }

    pub fn from_config(graph: &'g dyn GraphProvider, config: &EngineConfig) -> Self {
        Self::new(graph, config.traversal_options())
    }

    pub fn options(&self) -> &TraversalOptions {
        &self.opts
    }

    pub fn bfs(&self, source: NodeId) -> Result<BfsResult> {
        graph::bfs(self.graph, source, &self.opts)
    }

    pub fn dfs(&self, source: NodeId) -> Result<DfsResult> {
        graph::dfs(self.graph, source, &self.opts)
    }

    pub fn dfs_forest(&self) -> Result<DfsResult> {
        graph::dfs_forest(self.graph, &self.opts)
    }

    pub fn has_directed_cycle(&self) -> Result<bool> {
        graph::has_directed_cycle(self.graph, &self.opts)
    }

    pub fn find_directed_cycle(&self) -> Result<Option<Vec<NodeId>>> {
        graph::find_directed_cycle(self.graph, &self.opts)
    }

    pub fn has_undirected_cycle(&self) -> Result<bool> {
        graph::has_undirected_cycle(self.graph, &self.opts)
    }

    pub fn bfs_has_undirected_cycle(&self, source: NodeId) -> Result<bool> {
        graph::bfs_has_undirected_cycle(self.graph, source, &self.opts)
    }

    pub fn topological_sort(&self) -> Result<TopoOrder> {
        graph::topological_sort(self.graph, &self.opts)
    }

    pub fn kahn_toposort(&self) -> Result<TopoOrder> {
        graph::kahn_toposort(self.graph, &self.opts)
    }

    pub fn bridges(&self) -> Result<Vec<(NodeId, NodeId)>> {
        graph::bridges(self.graph, &self.opts)
    }

    pub fn articulation_points(&self) -> Result<Vec<NodeId>> {
        graph::articulation_points(self.graph, &self.opts)
    }

    pub fn strongly_connected_components(&self) -> Result<SccPartition> {
        graph::tarjan_scc(self.graph, &self.opts)
    }

    pub fn condensation(&self) -> Result<Condensation> {
        graph::condensation(self.graph, &self.opts)
    }

    pub fn connected_components(&self) -> Result<Vec<Vec<NodeId>>> {
        graph::connected_components(self.graph, &self.opts)
    }

    pub fn shortest_paths(&self, source: NodeId) -> Result<ShortestPaths> {
        graph::dijkstra(self.graph, source, &self.opts)
    }

    /// Cycle flag, SCC count and, when acyclic, a topological order
    pub fn summary(&self) -> Result<GraphSummary> {
        let start = Instant::now();
        let topo = self.kahn_toposort()?;
        let scc_count = self.strongly_connected_components()?.len();
        crate::trace_time!(start, "summary", nodes = self.graph.node_count());

        Ok(GraphSummary {
            nodes: self.graph.node_count(),
            has_cycle: !topo.acyclic,
            scc_count,
            topological_order: topo.acyclic.then_some(topo.order),
        })
    }
}
