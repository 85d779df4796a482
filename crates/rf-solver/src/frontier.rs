//! Min-priority frontier of tentative distances.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rf_core::{Cost, NodeId};

/// One `(tentative cost, node)` entry.
///
/// Ordering is reversed on cost so `BinaryHeap` pops the cheapest entry
/// first; ties go to the lower node id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Entry {
    pub cost: Cost,
    pub node: NodeId,
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Frontier with lazy deletion: a node is re-pushed every time its
/// distance improves and outdated entries are skipped on pop.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
}

impl Frontier {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, node: NodeId, cost: Cost) {
        self.heap.push(Entry { cost, node });
    }

    pub fn pop(&mut self) -> Option<Entry> {
        self.heap.pop()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
