//! Connected components of undirected graphs
//!
//! Repeated BFS over one shared state; see [`connected_components`].

use crate::error::Result;
use crate::graph::provider::{require_undirected, GraphProvider};
use crate::graph::traversal::BfsState;
use crate::graph::types::{NodeId, TraversalOptions};

/// Connected components of an undirected graph
///
/// Runs BFS from each node not yet discovered, reusing one state so every
/// node is dequeued exactly once overall.
#[tracing::instrument(skip(graph, opts), fields(nodes = graph.node_count()))]
pub fn connected_components(
    graph: &dyn GraphProvider,
    opts: &TraversalOptions,
) -> Result<Vec<Vec<NodeId>>> {
    require_undirected(graph, "connected components")?;
    let mut state = BfsState::new(graph.node_count());
    let mut components = Vec::new();

    for source in 0..graph.node_count() {
        if state.is_visited(source) {
            continue;
        }
        let start = state.order().len();
        state.run(graph, source, opts, &mut ())?;
        let mut component = state.order()[start..].to_vec();
        if opts.canonical_components {
            component.sort_unstable();
        }
        components.push(component);
    }

    tracing::debug!(count = components.len(), "connected components found");
    Ok(components)
}

pub fn count_components(graph: &dyn GraphProvider, opts: &TraversalOptions) -> Result<usize> {
    Ok(connected_components(graph, opts)?.len())
}
