//! Least-cost route search over undirected weighted graphs.
//!
//! This crate provides a Dijkstra search with a binary-heap frontier:
//! a node is re-inserted every time its tentative distance improves and
//! outdated frontier entries are skipped, so results are optimal for any
//! non-negative edge costs. Each call owns its distance and predecessor
//! tables; the graph is only read, and may be shared between threads.

pub mod error;
pub(crate) mod frontier;
pub mod route;
pub mod search;
pub mod solve;
pub mod tree;

pub use error::{SolverError, SolverResult};
pub use route::{Leg, Route};
pub use search::{SearchConfig, SearchStats};
pub use solve::{find_path, find_path_with, find_paths, shortest_path_tree};
pub use tree::ShortestPathTree;
