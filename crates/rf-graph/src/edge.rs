//! Weighted undirected edge input.

use rf_core::Cost;

/// An undirected connection between two named nodes.
///
/// The pair is unordered: `Edge::new("A", "B", 1.0)` and
/// `Edge::new("B", "A", 1.0)` describe the same connection.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub a: String,
    pub b: String,
    pub cost: Cost,
}

impl Edge {
    pub fn new(a: impl Into<String>, b: impl Into<String>, cost: Cost) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            cost,
        }
    }

    /// True if both endpoints name the same node.
    pub fn is_self_loop(&self) -> bool {
        self.a == self.b
    }
}

impl<A: Into<String>, B: Into<String>> From<(A, B, Cost)> for Edge {
    fn from((a, b, cost): (A, B, Cost)) -> Self {
        Edge::new(a, b, cost)
    }
}
