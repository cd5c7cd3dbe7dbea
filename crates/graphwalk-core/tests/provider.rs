//! Traversals over a caller-defined adjacency source

use graphwalk_core::graph::{
    bfs, bridges, dfs, kahn_toposort, tarjan_scc, GraphProvider, Neighbor, NodeId,
    TraversalOptions,
};

/// Implicit `rows x cols` grid with 4-neighbour undirected adjacency
struct Grid {
    cols: usize,
    adjacency: Vec<Vec<Neighbor>>,
}

impl Grid {
    fn new(rows: usize, cols: usize) -> Self {
        let mut adjacency = vec![Vec::new(); rows * cols];
        let mut edge = 0;
        for r in 0..rows {
            for c in 0..cols {
                let u = r * cols + c;
                let mut link = |v: NodeId| {
                    adjacency[u].push(Neighbor { node: v, weight: 1, edge });
                    adjacency[v].push(Neighbor { node: u, weight: 1, edge });
                    edge += 1;
                };
                if c + 1 < cols {
                    link(u + 1);
                }
                if r + 1 < rows {
                    link(u + cols);
                }
            }
        }
        Self { cols, adjacency }
    }

    fn cell(&self, r: usize, c: usize) -> NodeId {
        r * self.cols + c
    }
}

impl GraphProvider for Grid {
    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn neighbors(&self, node: NodeId) -> &[Neighbor] {
        &self.adjacency[node]
    }

    fn has_directed_edges(&self) -> bool {
        false
    }
}

#[test]
fn test_bfs_distance_is_manhattan() {
    let grid = Grid::new(4, 5);
    let result = bfs(&grid, 0, &TraversalOptions::default()).unwrap();

    for r in 0..4 {
        for c in 0..5 {
            assert_eq!(result.distance[grid.cell(r, c)], Some(r + c));
        }
    }
}

#[test]
fn test_grid_has_no_bridges() {
    let grid = Grid::new(3, 3);
    assert!(bridges(&grid, &TraversalOptions::default())
        .unwrap()
        .is_empty());
}

#[test]
fn test_single_row_is_all_bridges() {
    let grid = Grid::new(1, 4);
    assert_eq!(
        bridges(&grid, &TraversalOptions::default()).unwrap(),
        vec![(0, 1), (1, 2), (2, 3)]
    );
}

#[test]
fn test_grid_is_one_scc() {
    let grid = Grid::new(3, 3);
    let partition = tarjan_scc(&grid, &TraversalOptions::default()).unwrap();
    assert_eq!(partition.components, vec![(0..9).collect::<Vec<_>>()]);
}

#[test]
fn test_grid_is_not_a_dag() {
    let grid = Grid::new(2, 2);
    let topo = kahn_toposort(&grid, &TraversalOptions::default()).unwrap();
    assert!(!topo.acyclic);
    assert!(topo.order.is_empty());
}

#[test]
fn test_dfs_reaches_every_cell() {
    let grid = Grid::new(5, 5);
    let result = dfs(&grid, grid.cell(2, 2), &TraversalOptions::default()).unwrap();
    assert_eq!(result.order.len(), 25);
    assert_eq!(result.parent[grid.cell(2, 2)], None);
}
