//! Traversal cores
//!
//! Both cores own their per-node state for the duration of a call and hand
//! it back to the caller; nothing is retained between calls. Derived
//! operations plug in through the [`BfsVisitor`] and [`DfsVisitor`] hooks.

pub mod bfs;
pub mod dfs;

pub use bfs::{bfs, breadth_first, BfsState, BfsVisitor};
pub use dfs::{depth_first, dfs, dfs_forest, DfsState, DfsVisitor};
