//! Graph-specific error types.

use rf_core::{Cost, NodeId};

pub type GraphResult<T> = Result<T, GraphError>;

/// Graph construction and validation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// An edge carries a cost that cannot be searched (negative or non-finite).
    InvalidEdge {
        a: String,
        b: String,
        cost: Cost,
        reason: &'static str,
    },

    /// A second edge was supplied for a pair under `DuplicatePolicy::Reject`.
    DuplicateEdge { a: String, b: String },

    /// A name lookup failed.
    UnknownNode { name: String },

    /// More distinct names than the node id space can hold.
    IdSpaceExhausted { count: usize },

    /// `a -> b` is stored but `b -> a` is missing or has a different cost.
    Asymmetric { a: NodeId, b: NodeId },

    /// Adjacency list references a node outside the node table.
    NeighborOutOfRange { node: NodeId, neighbor: u32 },

    /// Offsets table doesn't describe the flat neighbor list.
    InconsistentAdjacency { what: &'static str },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::InvalidEdge { a, b, cost, reason } => {
                write!(f, "Edge {} - {} has invalid cost {} ({})", a, b, cost, reason)
            }
            GraphError::DuplicateEdge { a, b } => {
                write!(f, "Duplicate edge between {} and {}", a, b)
            }
            GraphError::UnknownNode { name } => {
                write!(f, "Node '{}' does not exist in the graph", name)
            }
            GraphError::IdSpaceExhausted { count } => {
                write!(f, "Cannot register {} nodes: id space exhausted", count)
            }
            GraphError::Asymmetric { a, b } => {
                write!(f, "Adjacency {} -> {} has no matching {} -> {}", a, b, b, a)
            }
            GraphError::NeighborOutOfRange { node, neighbor } => {
                write!(
                    f,
                    "Node {} lists neighbor {} which is not a registered node",
                    node, neighbor
                )
            }
            GraphError::InconsistentAdjacency { what } => {
                write!(f, "Inconsistent adjacency: {}", what)
            }
        }
    }
}

impl std::error::Error for GraphError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_both_endpoints() {
        let err = GraphError::InvalidEdge {
            a: "Kazan".into(),
            b: "Perm".into(),
            cost: -5.0,
            reason: "negative cost",
        };
        let msg = err.to_string();
        assert!(msg.contains("Kazan"));
        assert!(msg.contains("Perm"));
        assert!(msg.contains("negative"));
    }
}
