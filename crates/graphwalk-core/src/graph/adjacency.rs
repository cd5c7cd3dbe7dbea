use crate::error::Result;
use crate::graph::provider::GraphProvider;
use crate::graph::types::{Edge, EdgeId, EdgeKind, Neighbor, NodeId, Weight, DEFAULT_WEIGHT};

/// Adjacency-list graph over the fixed node universe `[0, n)`
///
/// Directed and undirected edges may be mixed; an undirected edge is stored
/// as two adjacency entries sharing one [`EdgeId`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<Neighbor>>,
    edges: Vec<Edge>,
    directed_edges: usize,
}

impl Graph {
    pub fn new(node_count: usize) -> Self {
        Graph {
            adjacency: vec![Vec::new(); node_count],
            edges: Vec::new(),
            directed_edges: 0,
        }
    }

    /// Build a graph from unweighted `(u, v)` pairs of a single kind
    pub fn from_edges(
        node_count: usize,
        kind: EdgeKind,
        edges: &[(NodeId, NodeId)],
    ) -> Result<Self> {
        let mut graph = Graph::new(node_count);
        for &(u, v) in edges {
            graph.add_edge(u, v, DEFAULT_WEIGHT, kind)?;
        }
        Ok(graph)
    }

    /// Insert `u -> v` (and `v -> u` for undirected edges)
    ///
    /// Parallel edges are kept as separate entries. Fails with
    /// `InvalidNode` if either endpoint is outside `[0, n)`.
    pub fn add_edge(
        &mut self,
        u: NodeId,
        v: NodeId,
        weight: Weight,
        kind: EdgeKind,
    ) -> Result<EdgeId> {
        self.check_node(u)?;
        self.check_node(v)?;
        Ok(self.push_edge(u, v, weight, kind))
    }

    /// Store an edge whose endpoints are already known to be in range
    fn push_edge(&mut self, u: NodeId, v: NodeId, weight: Weight, kind: EdgeKind) -> EdgeId {
        let edge = self.edges.len();
        self.edges.push(Edge {
            from: u,
            to: v,
            weight,
            kind,
        });
        self.adjacency[u].push(Neighbor {
            node: v,
            weight,
            edge,
        });
        match kind {
            EdgeKind::Undirected => self.adjacency[v].push(Neighbor {
                node: u,
                weight,
                edge,
            }),
            EdgeKind::Directed => self.directed_edges += 1,
        }
        edge
    }

    pub fn add_directed(&mut self, u: NodeId, v: NodeId) -> Result<EdgeId> {
        self.add_edge(u, v, DEFAULT_WEIGHT, EdgeKind::Directed)
    }

    pub fn add_undirected(&mut self, u: NodeId, v: NodeId) -> Result<EdgeId> {
        self.add_edge(u, v, DEFAULT_WEIGHT, EdgeKind::Undirected)
    }

    /// Number of inserted edges (an undirected edge counts once)
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn is_undirected(&self) -> bool {
        self.directed_edges == 0
    }

    /// Number of adjacency entries pointing at each node
    pub fn in_degrees(&self) -> Vec<usize> {
        in_degrees(self)
    }

    /// Graph with every adjacency entry reversed
    ///
    /// Undirected edges map onto themselves; edge ids are preserved.
    pub fn transpose(&self) -> Graph {
        let mut transposed = Graph {
            adjacency: vec![Vec::new(); self.adjacency.len()],
            edges: Vec::with_capacity(self.edges.len()),
            directed_edges: self.directed_edges,
        };
        for edge in &self.edges {
            transposed.edges.push(match edge.kind {
                EdgeKind::Directed => Edge {
                    from: edge.to,
                    to: edge.from,
                    ..*edge
                },
                EdgeKind::Undirected => *edge,
            });
        }
        for (u, neighbors) in self.adjacency.iter().enumerate() {
            for n in neighbors {
                transposed.adjacency[n.node].push(Neighbor {
                    node: u,
                    weight: n.weight,
                    edge: n.edge,
                });
            }
        }
        transposed
    }

    /// Copy of the graph without the given edge
    ///
    /// Later edges shift down by one id. An out-of-range id removes nothing.
    pub fn without_edge(&self, removed: EdgeId) -> Graph {
        let mut graph = Graph::new(self.adjacency.len());
        for (id, edge) in self.edges.iter().enumerate() {
            if id != removed {
                graph.push_edge(edge.from, edge.to, edge.weight, edge.kind);
            }
        }
        graph
    }
}

impl GraphProvider for Graph {
    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn neighbors(&self, node: NodeId) -> &[Neighbor] {
        &self.adjacency[node]
    }

    fn has_directed_edges(&self) -> bool {
        self.directed_edges > 0
    }
}

/// In-degree of every node, counting each adjacency entry once
pub fn in_degrees(graph: &dyn GraphProvider) -> Vec<usize> {
    let mut degrees = vec![0; graph.node_count()];
    for u in 0..graph.node_count() {
        for n in graph.neighbors(u) {
            degrees[n.node] += 1;
        }
    }
    degrees
}
