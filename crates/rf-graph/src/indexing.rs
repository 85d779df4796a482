//! Stable indexing between external node names and compact node ids.
//!
//! Every distinct name is registered once, in first-seen order, and
//! receives a contiguous `NodeId` (0..N). Solvers index their tables by
//! that id; callers keep talking in names.

use std::collections::HashMap;

use rf_core::NodeId;

use crate::error::{GraphError, GraphResult};

/// Bidirectional name <-> id map.
///
/// Provides O(1) lookup in both directions.
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    /// Contiguous list of names (index -> name).
    names: Vec<String>,

    /// Reverse lookup: name -> id.
    ids: HashMap<String, NodeId>,
}

impl NameIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id for `name`, registering it if unseen.
    pub fn register(&mut self, name: &str) -> GraphResult<NodeId> {
        if let Some(&id) = self.ids.get(name) {
            return Ok(id);
        }
        let id = NodeId::try_from_usize(self.names.len()).map_err(|_| {
            GraphError::IdSpaceExhausted {
                count: self.names.len() + 1,
            }
        })?;
        self.names.push(name.to_owned());
        self.ids.insert(name.to_owned(), id);
        Ok(id)
    }

    /// Look up the id of a registered name.
    pub fn get(&self, name: &str) -> Option<NodeId> {
        self.ids.get(name).copied()
    }

    /// Like [`NameIndex::get`] but reports `UnknownNode` on a miss.
    pub fn require(&self, name: &str) -> GraphResult<NodeId> {
        self.get(name).ok_or_else(|| GraphError::UnknownNode {
            name: name.to_owned(),
        })
    }

    /// Name registered for `id` (None if out of range).
    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.names.get(id.slot()).map(String::as_str)
    }

    /// Number of registered names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All names in id order.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}
