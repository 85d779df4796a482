//! Graph validation logic.

use rf_core::{Cost, NodeId};

use crate::error::{GraphError, GraphResult};

/// Validate compact adjacency: offsets describe the flat list, neighbor
/// references are in range, lists are sorted, and every `u -> v` has a
/// matching `v -> u` with the same cost.
pub(crate) fn validate_adjacency(
    node_count: usize,
    offsets: &[usize],
    neighbors: &[(NodeId, Cost)],
) -> GraphResult<()> {
    // Offsets array must have node_count + 1 entries
    if offsets.len() != node_count + 1 {
        return Err(GraphError::InconsistentAdjacency {
            what: "offsets length != node count + 1",
        });
    }
    if offsets.first() != Some(&0) || offsets.last() != Some(&neighbors.len()) {
        return Err(GraphError::InconsistentAdjacency {
            what: "offsets do not span the neighbor list",
        });
    }
    if offsets.windows(2).any(|w| w[0] > w[1]) {
        return Err(GraphError::InconsistentAdjacency {
            what: "offsets are not monotonic",
        });
    }

    let adjacency = |i: usize| &neighbors[offsets[i]..offsets[i + 1]];

    for u in 0..node_count {
        let node = NodeId::from_index(u as u32);
        let adj = adjacency(u);

        // Neighbor must exist
        for &(v, _) in adj {
            if v.slot() >= node_count {
                return Err(GraphError::NeighborOutOfRange {
                    node,
                    neighbor: v.index(),
                });
            }
        }

        // Strictly increasing by id: sorted and no duplicate entries
        if adj.windows(2).any(|w| w[0].0 >= w[1].0) {
            return Err(GraphError::InconsistentAdjacency {
                what: "neighbor list not strictly sorted",
            });
        }

        // Reverse entry must exist with identical cost
        for &(v, cost) in adj {
            let back = adjacency(v.slot());
            let mirrored = back
                .binary_search_by_key(&node, |&(n, _)| n)
                .ok()
                .map(|pos| back[pos].1);
            if mirrored != Some(cost) {
                return Err(GraphError::Asymmetric { a: node, b: v });
            }
        }
    }

    Ok(())
}
