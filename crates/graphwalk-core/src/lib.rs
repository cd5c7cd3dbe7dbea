//! Graphwalk Core Library
//!
//! Adjacency-list graphs and a single traversal engine (BFS and
//! explicit-stack DFS with visitor hooks) from which reachability, cycle
//! detection, topological order, bridges and strongly connected components
//! are derived.

pub mod config;
pub mod engine;
pub mod error;
pub mod graph;
pub mod logging;
