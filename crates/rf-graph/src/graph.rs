//! Core graph data structures.

use rf_core::{Cost, NodeId};

use crate::error::GraphResult;
use crate::indexing::NameIndex;

/// The graph: an immutable, symmetric adjacency structure over named nodes.
///
/// The graph stores:
/// - The name index (name <-> contiguous `NodeId`).
/// - Compact adjacency: for each node, its `(neighbor, cost)` pairs.
///
/// Every stored `u -> v` has a matching `v -> u` with the same cost.
/// Neighbor lists are sorted by id, which makes `cost` a binary search
/// and iteration order deterministic.
#[derive(Debug, Clone)]
pub struct Graph {
    pub(crate) index: NameIndex,

    /// Node i's neighbors are in neighbors[offsets[i]..offsets[i+1]].
    pub(crate) offsets: Vec<usize>,

    /// Flat `(neighbor, cost)` list, grouped by node then sorted by neighbor.
    pub(crate) neighbors: Vec<(NodeId, Cost)>,

    /// Distinct unordered pairs (self-loops count once).
    pub(crate) edge_count: usize,
}

impl Graph {
    /// An empty graph (no nodes, no edges).
    pub fn empty() -> Self {
        Self {
            index: NameIndex::new(),
            offsets: vec![0],
            neighbors: Vec::new(),
            edge_count: 0,
        }
    }

    pub fn node_count(&self) -> usize {
        self.index.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// The name index backing this graph.
    pub fn index(&self) -> &NameIndex {
        &self.index
    }

    /// Id of a node by name.
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.index.get(name)
    }

    /// Id of a node by name, failing with `UnknownNode`.
    pub fn require(&self, name: &str) -> GraphResult<NodeId> {
        self.index.require(name)
    }

    /// Name of a node (None if ID out of bounds).
    pub fn node_name(&self, id: NodeId) -> Option<&str> {
        self.index.name(id)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.get(name).is_some()
    }

    /// All node names in id order.
    pub fn node_names(&self) -> impl Iterator<Item = &str> {
        self.index.names().iter().map(String::as_str)
    }

    /// `(neighbor, cost)` pairs of a node; empty for unknown ids.
    pub fn neighbors(&self, id: NodeId) -> &[(NodeId, Cost)] {
        let idx = id.slot();
        if idx >= self.node_count() {
            return &[];
        }
        let start = self.offsets[idx];
        let end = self.offsets[idx + 1];
        &self.neighbors[start..end]
    }

    pub fn degree(&self, id: NodeId) -> usize {
        self.neighbors(id).len()
    }

    /// Cost of the edge between `a` and `b`, if they are adjacent.
    pub fn cost(&self, a: NodeId, b: NodeId) -> Option<Cost> {
        let adj = self.neighbors(a);
        adj.binary_search_by_key(&b, |&(n, _)| n)
            .ok()
            .map(|pos| adj[pos].1)
    }

    /// Cost of the edge between two named nodes, if both exist and are adjacent.
    pub fn cost_between(&self, a: &str, b: &str) -> Option<Cost> {
        self.cost(self.node_id(a)?, self.node_id(b)?)
    }

    /// Each unordered pair once, as `(low_id, high_id, cost)`.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, Cost)> + '_ {
        (0..self.node_count()).flat_map(move |i| {
            let start = self.offsets[i];
            let end = self.offsets[i + 1];
            self.neighbors[start..end]
                .iter()
                .filter(move |(v, _)| v.slot() >= i)
                .map(move |&(v, c)| (NodeId::from_index(i as u32), v, c))
        })
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::empty()
    }
}
