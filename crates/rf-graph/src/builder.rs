//! Incremental graph builder.

use std::collections::BTreeMap;

use rf_core::{Cost, NodeId, ensure_non_negative};

use crate::edge::Edge;
use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;
use crate::indexing::NameIndex;
use crate::validate;

/// How a second edge for an already-connected pair is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// The later edge overwrites the earlier cost in both directions.
    #[default]
    LastWins,
    /// The cheaper of the two costs is kept.
    KeepMin,
    /// A second edge for the same pair is an error.
    Reject,
}

/// Builder for constructing a graph incrementally.
///
/// Use `add_edge` (or `extend`) to register edges; any name appearing in
/// an edge becomes a node. Then call `build()` to validate and freeze it
/// into an immutable `Graph`.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    index: NameIndex,
    /// Per-node adjacency keyed by neighbor id (ordered for determinism).
    adjacency: Vec<BTreeMap<NodeId, Cost>>,
    edge_count: usize,
    policy: DuplicatePolicy,
}

impl GraphBuilder {
    /// Create a new empty builder with `DuplicatePolicy::LastWins`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty builder with an explicit duplicate policy.
    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Add an undirected edge between two named nodes.
    ///
    /// The cost is checked before any name is registered, so a rejected
    /// edge leaves the builder untouched.
    pub fn add_edge(&mut self, a: &str, b: &str, cost: Cost) -> GraphResult<()> {
        let cost = ensure_non_negative(cost, "edge cost").map_err(|err| {
            GraphError::InvalidEdge {
                a: a.to_owned(),
                b: b.to_owned(),
                cost,
                reason: match err {
                    rf_core::RfError::Negative { .. } => "negative cost",
                    _ => "non-finite cost",
                },
            }
        })?;

        let u = self.register(a)?;
        let v = self.register(b)?;

        let cost = match self.adjacency[u.slot()].get(&v).copied() {
            None => {
                self.edge_count += 1;
                cost
            }
            Some(previous) => match self.policy {
                DuplicatePolicy::LastWins => cost,
                DuplicatePolicy::KeepMin => previous.min(cost),
                DuplicatePolicy::Reject => {
                    return Err(GraphError::DuplicateEdge {
                        a: a.to_owned(),
                        b: b.to_owned(),
                    });
                }
            },
        };

        // Self-loops land on the same key twice; the map keeps one entry.
        self.adjacency[u.slot()].insert(v, cost);
        self.adjacency[v.slot()].insert(u, cost);
        Ok(())
    }

    /// Add every edge in input order, stopping at the first invalid one.
    pub fn extend<I>(&mut self, edges: I) -> GraphResult<()>
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        for edge in edges {
            let edge = edge.into();
            self.add_edge(&edge.a, &edge.b, edge.cost)?;
        }
        Ok(())
    }

    pub fn node_count(&self) -> usize {
        self.index.len()
    }

    /// Distinct unordered pairs added so far.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Build and validate the graph, returning an immutable `Graph`.
    ///
    /// This constructs compact adjacency lists and checks symmetry.
    pub fn build(self) -> GraphResult<Graph> {
        let node_count = self.index.len();
        let (offsets, neighbors) = Self::build_adjacency(&self.adjacency);

        validate::validate_adjacency(node_count, &offsets, &neighbors)?;

        tracing::debug!(
            nodes = node_count,
            edges = self.edge_count,
            policy = ?self.policy,
            "graph built"
        );

        Ok(Graph {
            index: self.index,
            offsets,
            neighbors,
            edge_count: self.edge_count,
        })
    }

    fn register(&mut self, name: &str) -> GraphResult<NodeId> {
        let id = self.index.register(name)?;
        if id.slot() == self.adjacency.len() {
            self.adjacency.push(BTreeMap::new());
        }
        Ok(id)
    }

    /// Flatten per-node maps into offsets + one contiguous neighbor list.
    fn build_adjacency(adjacency: &[BTreeMap<NodeId, Cost>]) -> (Vec<usize>, Vec<(NodeId, Cost)>) {
        let mut offsets = Vec::with_capacity(adjacency.len() + 1);
        let mut flat = Vec::with_capacity(adjacency.iter().map(BTreeMap::len).sum());
        offsets.push(0);

        for adj in adjacency {
            flat.extend(adj.iter().map(|(&v, &c)| (v, c)));
            offsets.push(flat.len());
        }

        (offsets, flat)
    }
}

/// Build a graph from a flat edge list with last-write-wins duplicates.
///
/// The node set is exactly the set of names appearing in `edges`; an
/// empty list yields an empty graph.
pub fn build_graph<I>(edges: I) -> GraphResult<Graph>
where
    I: IntoIterator,
    I::Item: Into<Edge>,
{
    let mut builder = GraphBuilder::new();
    builder.extend(edges)?;
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_basic() {
        let mut builder = GraphBuilder::new();
        builder.add_edge("N1", "N2", 4.0).unwrap();
        builder.add_edge("N2", "N3", 1.0).unwrap();

        assert_eq!(builder.node_count(), 3);
        assert_eq!(builder.edge_count(), 2);
        assert_eq!(builder.adjacency[1].len(), 2);
    }

    #[test]
    fn builder_build_simple() {
        let mut builder = GraphBuilder::new();
        builder.add_edge("A", "B", 5.0).unwrap();

        let graph = builder.build().unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);

        let a = graph.node_id("A").unwrap();
        let b = graph.node_id("B").unwrap();
        assert_eq!(graph.neighbors(a), &[(b, 5.0)]);
        assert_eq!(graph.neighbors(b), &[(a, 5.0)]);
    }

    #[test]
    fn negative_cost_rejected_without_registering() {
        let mut builder = GraphBuilder::new();
        let err = builder.add_edge("A", "B", -1.0).unwrap_err();
        assert!(matches!(
            err,
            GraphError::InvalidEdge {
                reason: "negative cost",
                ..
            }
        ));
        assert_eq!(builder.node_count(), 0);
    }

    #[test]
    fn nan_cost_rejected() {
        let mut builder = GraphBuilder::new();
        assert!(matches!(
            builder.add_edge("A", "B", f64::NAN),
            Err(GraphError::InvalidEdge {
                reason: "non-finite cost",
                ..
            })
        ));
    }

    #[test]
    fn duplicate_last_wins() {
        let graph = build_graph([("A", "B", 5.0), ("B", "A", 2.0), ("A", "B", 7.0)]).unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.cost_between("A", "B"), Some(7.0));
        assert_eq!(graph.cost_between("B", "A"), Some(7.0));
    }

    #[test]
    fn duplicate_keep_min() {
        let mut builder = GraphBuilder::with_policy(DuplicatePolicy::KeepMin);
        builder
            .extend([("A", "B", 5.0), ("B", "A", 2.0), ("A", "B", 7.0)])
            .unwrap();
        let graph = builder.build().unwrap();
        assert_eq!(graph.cost_between("A", "B"), Some(2.0));
        assert_eq!(graph.cost_between("B", "A"), Some(2.0));
    }

    #[test]
    fn duplicate_reject() {
        let mut builder = GraphBuilder::with_policy(DuplicatePolicy::Reject);
        builder.add_edge("A", "B", 5.0).unwrap();
        assert_eq!(
            builder.add_edge("B", "A", 2.0),
            Err(GraphError::DuplicateEdge {
                a: "B".into(),
                b: "A".into()
            })
        );
    }

    #[test]
    fn self_loop_does_not_grow() {
        let graph = build_graph([("A", "A", 1.0), ("A", "A", 3.0), ("A", "B", 2.0)]).unwrap();
        let a = graph.node_id("A").unwrap();
        assert_eq!(graph.degree(a), 2);
        assert_eq!(graph.cost(a, a), Some(3.0));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn empty_input_gives_empty_graph() {
        let graph = build_graph(Vec::<Edge>::new()).unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn edge_list() -> impl Strategy<Value = Vec<(u8, u8, u16)>> {
        prop::collection::vec((0u8..8, 0u8..8, 0u16..1000), 0..40)
    }

    proptest! {
        #[test]
        fn adjacency_is_symmetric(edges in edge_list()) {
            let graph = build_graph(
                edges.iter().map(|&(a, b, c)| (format!("n{a}"), format!("n{b}"), f64::from(c))),
            ).unwrap();

            for (u, v, c) in graph.edges() {
                prop_assert_eq!(graph.cost(u, v), Some(c));
                prop_assert_eq!(graph.cost(v, u), Some(c));
            }
        }

        #[test]
        fn last_write_wins_per_pair(edges in edge_list()) {
            let graph = build_graph(
                edges.iter().map(|&(a, b, c)| (format!("n{a}"), format!("n{b}"), f64::from(c))),
            ).unwrap();

            let mut expected = std::collections::HashMap::new();
            for &(a, b, c) in &edges {
                expected.insert((a.min(b), a.max(b)), f64::from(c));
            }

            prop_assert_eq!(graph.edge_count(), expected.len());
            for ((a, b), c) in expected {
                prop_assert_eq!(graph.cost_between(&format!("n{a}"), &format!("n{b}")), Some(c));
            }
        }

        #[test]
        fn node_set_matches_input_names(edges in edge_list()) {
            let graph = build_graph(
                edges.iter().map(|&(a, b, c)| (format!("n{a}"), format!("n{b}"), f64::from(c))),
            ).unwrap();

            let mut names: std::collections::BTreeSet<String> = std::collections::BTreeSet::new();
            for &(a, b, _) in &edges {
                names.insert(format!("n{a}"));
                names.insert(format!("n{b}"));
            }
            let actual: std::collections::BTreeSet<String> =
                graph.node_names().map(str::to_owned).collect();
            prop_assert_eq!(actual, names);
        }
    }
}
