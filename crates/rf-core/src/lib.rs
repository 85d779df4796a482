//! rf-core: stable foundation for routeflow.
//!
//! Contains:
//! - numeric (Cost + cost validation helpers)
//! - ids (stable compact IDs for graph nodes)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{RfError, RfResult};
pub use ids::*;
pub use numeric::*;
