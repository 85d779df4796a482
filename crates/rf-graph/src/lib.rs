//! rf-graph: graph construction layer for routeflow.
//!
//! Provides:
//! - Weighted undirected edge input (`Edge`)
//! - Incremental graph builder with duplicate policy and validation
//! - Immutable compact-adjacency `Graph`
//! - Stable name <-> id indexing for solver integration
//!
//! # Example
//!
//! ```
//! use rf_graph::build_graph;
//!
//! let graph = build_graph([("Moscow", "Kazan", 3000.0), ("Kazan", "Perm", 2000.0)]).unwrap();
//!
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(graph.cost_between("Perm", "Kazan"), Some(2000.0));
//! ```

pub mod builder;
pub mod edge;
pub mod error;
pub mod graph;
pub mod indexing;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::{DuplicatePolicy, GraphBuilder, build_graph};
pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use graph::Graph;
pub use indexing::NameIndex;
