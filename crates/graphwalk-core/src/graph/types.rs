use serde::{Deserialize, Serialize};

/// Node identifier; valid ids for a graph of `n` nodes are `0..n`
pub type NodeId = usize;

/// Index of an inserted edge. Both adjacency entries of an undirected edge
/// carry the same id.
pub type EdgeId = usize;

/// Edge weight. Unweighted insertions use [`DEFAULT_WEIGHT`].
pub type Weight = i64;

pub const DEFAULT_WEIGHT: Weight = 1;

/// Whether an inserted edge produces one adjacency entry or two
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    Directed,
    Undirected,
}

/// One adjacency entry: the neighbor reached, the weight, and the edge it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    pub node: NodeId,
    pub weight: Weight,
    pub edge: EdgeId,
}

/// An edge as inserted by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Weight,
    pub kind: EdgeKind,
}

/// Returned by visitor hooks to continue or abandon a traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flow {
    #[default]
    Continue,
    Stop,
}

impl Flow {
    pub fn is_stop(self) -> bool {
        self == Flow::Stop
    }
}

/// Classification of an edge that does not discover a new node during DFS
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeClass {
    /// Target is on the active DFS path (an ancestor, or the node itself)
    Back,
    /// Target is a finished descendant
    Forward,
    /// Target is finished and not a descendant
    Cross,
}

/// Order in which each node's adjacency list is scanned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NeighborOrder {
    /// Insertion order
    #[default]
    Insertion,
    /// Ascending neighbor id, ties in insertion order
    Ascending,
}

impl std::str::FromStr for NeighborOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "insertion" => Ok(NeighborOrder::Insertion),
            "ascending" => Ok(NeighborOrder::Ascending),
            other => Err(format!(
                "unknown neighbor order '{}' (expected: insertion, ascending)",
                other
            )),
        }
    }
}

/// Options for a single traversal call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalOptions {
    /// Adjacency scan order
    pub neighbor_order: NeighborOrder,
    /// Sort members of each component and order components by smallest member
    pub canonical_components: bool,
}

impl Default for TraversalOptions {
    fn default() -> Self {
        TraversalOptions {
            neighbor_order: NeighborOrder::Insertion,
            canonical_components: true,
        }
    }
}

/// Breadth-first traversal from a single source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BfsResult {
    pub source: NodeId,
    /// Nodes in dequeue order
    pub order: Vec<NodeId>,
    /// Node from which each node was first discovered
    pub parent: Vec<Option<NodeId>>,
    /// Hop count from the source; `None` for unreachable nodes
    pub distance: Vec<Option<usize>>,
}

/// Depth-first traversal state extracted after a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DfsResult {
    /// Nodes in discovery (pre-) order
    pub order: Vec<NodeId>,
    /// Nodes in finish (post-) order
    pub postorder: Vec<NodeId>,
    /// Discovery time; `None` for nodes never reached
    pub tin: Vec<Option<usize>>,
    /// Finish time; `None` for nodes never reached
    pub finish: Vec<Option<usize>>,
    /// Low-link over back edges to the active path
    pub low: Vec<Option<usize>>,
    pub parent: Vec<Option<NodeId>>,
}

/// Topological ordering attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopoOrder {
    pub order: Vec<NodeId>,
    /// False when the graph has a cycle; `order` must not be trusted then
    pub acyclic: bool,
}

/// Partition of the nodes into strongly connected components
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SccPartition {
    pub components: Vec<Vec<NodeId>>,
}

impl SccPartition {
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Index of the component containing each node
    pub fn component_of(&self, node_count: usize) -> Vec<usize> {
        let mut index = vec![0; node_count];
        for (i, component) in self.components.iter().enumerate() {
            for &node in component {
                index[node] = i;
            }
        }
        index
    }
}

/// SCCs collapsed into a DAG
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Condensation {
    pub components: Vec<Vec<NodeId>>,
    /// Component index of each node
    pub component_of: Vec<usize>,
    /// Deduplicated edges between distinct components
    pub edges: Vec<(usize, usize)>,
    /// Component indices in topological order of the condensed DAG
    pub order: Vec<usize>,
}

/// Single-source weighted shortest paths
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    pub source: NodeId,
    pub dist: Vec<Option<Weight>>,
    pub parent: Vec<Option<NodeId>>,
}

/// Walk a parent array back from `target` to `source`
pub(crate) fn walk_parents(
    parent: &[Option<NodeId>],
    source: NodeId,
    target: NodeId,
) -> Vec<NodeId> {
    let mut path = vec![target];
    let mut current = target;
    while current != source {
        match parent[current] {
            Some(p) => {
                path.push(p);
                current = p;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
