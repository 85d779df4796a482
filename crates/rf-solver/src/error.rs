//! Error types for path search.

use rf_graph::GraphError;
use thiserror::Error;

/// Errors that can occur while searching for a route.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Unknown node: '{name}' is not in the graph")]
    UnknownNode { name: String },

    #[error("No route from '{from}' to '{to}'")]
    Unreachable { from: String, to: String },

    #[error("Route from '{from}' to '{to}' exceeds the representable cost range")]
    CostOverflow { from: String, to: String },

    #[error("Search stopped after {limit} frontier pops")]
    IterationLimit { limit: usize },

    #[error("Invalid search state: {what}")]
    Invariant { what: String },

    #[error("Graph error: {0}")]
    Graph(GraphError),
}

pub type SolverResult<T> = Result<T, SolverError>;

impl From<GraphError> for SolverError {
    fn from(e: GraphError) -> Self {
        match e {
            GraphError::UnknownNode { name } => SolverError::UnknownNode { name },
            other => SolverError::Graph(other),
        }
    }
}
