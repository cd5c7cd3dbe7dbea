//! Operations derived from the traversal cores
//!
//! - `cycle`: directed and undirected cycle detection
//! - `topo`: DFS post-order and Kahn topological sorts
//! - `bridges`: bridges and articulation points
//! - `scc`: Tarjan, Kosaraju, condensation
//! - `components`: undirected connected components
//! - `shortest`: weighted single-source shortest paths

pub mod bridges;
pub mod components;
pub mod cycle;
pub mod scc;
pub mod shortest;
pub mod topo;

pub use bridges::{articulation_points, bridges};
pub use components::{connected_components, count_components};
pub use cycle::{
    bfs_has_undirected_cycle, find_directed_cycle, has_directed_cycle, has_undirected_cycle,
};
pub use scc::{condensation, kosaraju_scc, tarjan_scc};
pub use shortest::dijkstra;
pub use topo::{kahn_toposort, topological_sort};
