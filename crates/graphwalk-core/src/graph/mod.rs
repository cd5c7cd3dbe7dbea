//! Graph storage and traversal
//!
//! Provides an adjacency-list graph and one traversal engine from which
//! every analysis is derived:
//! - BFS and explicit-stack DFS cores with visitor hooks
//! - Cycle detection, topological sorting, bridges, SCCs
//! - Graph provider trait for pluggable adjacency sources

pub mod adjacency;
pub mod algos;
pub mod provider;
pub mod traversal;
pub mod types;

pub use adjacency::Graph;
pub use algos::*;
pub use provider::GraphProvider;
pub use traversal::{
    bfs, breadth_first, depth_first, dfs, dfs_forest, BfsState, BfsVisitor, DfsState, DfsVisitor,
};
pub use types::{
    BfsResult, Condensation, DfsResult, Edge, EdgeClass, EdgeId, EdgeKind, Flow, Neighbor,
    NeighborOrder, NodeId, SccPartition, ShortestPaths, TopoOrder, TraversalOptions, Weight,
    DEFAULT_WEIGHT,
};
