//! Reconstructed routes.

use rf_core::{Cost, NodeId};
use rf_graph::Graph;

use crate::error::{SolverError, SolverResult};
use crate::search::connected;

/// An ordered path from source to target (inclusive) and its total cost.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub nodes: Vec<String>,
    pub cost: Cost,
}

/// One hop of a route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub cost: Cost,
}

impl Route {
    /// First node (the source).
    pub fn source(&self) -> Option<&str> {
        self.nodes.first().map(String::as_str)
    }

    /// Last node (the target).
    pub fn target(&self) -> Option<&str> {
        self.nodes.last().map(String::as_str)
    }

    /// Number of edges traversed.
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Consecutive hops with their edge cost looked up in `graph`.
    ///
    /// Hops whose endpoints are not adjacent in `graph` are skipped, so
    /// use this only with the graph the route was found on.
    pub fn legs<'a>(&'a self, graph: &Graph) -> Vec<Leg<'a>> {
        self.nodes
            .windows(2)
            .filter_map(|pair| {
                let cost = graph.cost_between(&pair[0], &pair[1])?;
                Some(Leg {
                    from: &pair[0],
                    to: &pair[1],
                    cost,
                })
            })
            .collect()
    }

    /// Reversed route (valid on undirected graphs; same cost).
    pub fn reversed(&self) -> Route {
        let mut nodes = self.nodes.clone();
        nodes.reverse();
        Route {
            nodes,
            cost: self.cost,
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (cost {})", self.nodes.join(" -> "), self.cost)
    }
}

/// Walk predecessors from `target` back to `source` and sum edge costs.
///
/// `pred` must come from a search rooted at `source`. The walk is bounded
/// by the node count, so a corrupt table reports an invariant error
/// instead of looping.
pub(crate) fn reconstruct(
    graph: &Graph,
    pred: &[Option<NodeId>],
    source: NodeId,
    target: NodeId,
) -> SolverResult<Route> {
    let name = |id: NodeId| -> SolverResult<String> {
        graph
            .node_name(id)
            .map(str::to_owned)
            .ok_or_else(|| SolverError::Invariant {
                what: format!("node id {id} has no name"),
            })
    };

    if source == target {
        return Ok(Route {
            nodes: vec![name(source)?],
            cost: 0.0,
        });
    }

    let mut ids = vec![target];
    let mut cost = 0.0;
    let mut current = target;

    while current != source {
        let Some(prev) = pred.get(current.slot()).copied().flatten() else {
            let (from, to) = (name(source)?, name(target)?);
            return Err(if connected(graph, source, target) {
                SolverError::CostOverflow { from, to }
            } else {
                SolverError::Unreachable { from, to }
            });
        };
        cost += graph
            .cost(current, prev)
            .ok_or_else(|| SolverError::Invariant {
                what: format!("predecessor {prev} of {current} is not adjacent"),
            })?;
        ids.push(prev);
        current = prev;

        if ids.len() > graph.node_count() {
            return Err(SolverError::Invariant {
                what: "predecessor chain contains a cycle".to_string(),
            });
        }
    }

    if !cost.is_finite() {
        return Err(SolverError::CostOverflow {
            from: name(source)?,
            to: name(target)?,
        });
    }

    ids.reverse();
    let nodes = ids.into_iter().map(name).collect::<SolverResult<Vec<_>>>()?;
    Ok(Route { nodes, cost })
}
