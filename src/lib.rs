//! Graphwalk - graph traversal engine
//!
//! One parameterised traversal core (BFS, and DFS on an explicit stack) with
//! visitor hooks, and the analyses built on it: reachability, cycle
//! detection, topological order, bridges, articulation points and strongly
//! connected components.
//!
//! ```
//! use graphwalk::prelude::*;
//!
//! let graph = Graph::from_edges(3, EdgeKind::Directed, &[(0, 1), (1, 2)]).unwrap();
//! let engine = Engine::new(&graph, TraversalOptions::default());
//! assert_eq!(engine.kahn_toposort().unwrap().order, vec![0, 1, 2]);
//! ```

pub use graphwalk_core::{config, engine, error, graph, logging};
pub use graphwalk_core::{bail_invalid, bail_unsupported, ensure_node, trace_time};

pub use graphwalk_core::engine::{Engine, GraphSummary};
pub use graphwalk_core::error::{GraphError, Result};
pub use graphwalk_core::graph::{Graph, GraphProvider};

/// Common imports for callers
pub mod prelude {
    pub use graphwalk_core::config::EngineConfig;
    pub use graphwalk_core::engine::Engine;
    pub use graphwalk_core::error::{GraphError, Result};
    pub use graphwalk_core::graph::{
        EdgeKind, Flow, Graph, GraphProvider, NeighborOrder, NodeId, TraversalOptions,
    };
}
