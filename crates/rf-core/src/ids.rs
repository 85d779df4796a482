use core::fmt;
use core::num::NonZeroU32;

use crate::error::{RfError, RfResult};

/// Compact, stable identifier for a registered graph node.
///
/// - `u32` keeps adjacency and search tables small
/// - `NonZero` lets `Option<NodeId>` (the predecessor table entry) stay 4 bytes
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(NonZeroU32);

impl NodeId {
    /// Largest 0-based index that can be stored.
    pub const MAX_INDEX: u32 = u32::MAX - 1;

    /// Create a NodeId from a 0-based index by storing index+1.
    ///
    /// Panics if `index > MAX_INDEX`; use [`NodeId::try_from_usize`] for
    /// indices coming from collection lengths.
    pub fn from_index(index: u32) -> Self {
        // index+1 must be nonzero
        Self(NonZeroU32::new(index + 1).expect("index+1 is nonzero"))
    }

    /// Create a NodeId from a collection position, failing once the
    /// `u32` id space is exhausted.
    pub fn try_from_usize(index: usize) -> RfResult<Self> {
        u32::try_from(index)
            .ok()
            .filter(|&i| i <= Self::MAX_INDEX)
            .map(Self::from_index)
            .ok_or_else(|| RfError::InvalidArg {
                what: format!("node index {index} exceeds id space"),
            })
    }

    /// Recover the 0-based index.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }

    /// The 0-based index as a `usize`, for direct table access.
    #[inline]
    pub fn slot(self) -> usize {
        self.index() as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.index())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}
