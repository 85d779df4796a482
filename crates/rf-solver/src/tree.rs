//! Full single-source results.

use rf_core::{Cost, NodeId};
use rf_graph::Graph;

use crate::error::SolverResult;
use crate::route::{Route, reconstruct};
use crate::search::SearchStats;

/// Distances and predecessors from one source to every node of a graph.
///
/// Borrows the graph it was computed on, so name lookups stay consistent.
#[derive(Debug)]
pub struct ShortestPathTree<'g> {
    pub(crate) graph: &'g Graph,
    pub(crate) source: NodeId,
    pub(crate) dist: Vec<Cost>,
    pub(crate) pred: Vec<Option<NodeId>>,
    pub(crate) stats: SearchStats,
}

impl<'g> ShortestPathTree<'g> {
    pub fn source(&self) -> &'g str {
        self.graph.node_name(self.source).unwrap_or_default()
    }

    /// Least cost from the source; `None` for unknown or unreachable nodes.
    pub fn distance(&self, name: &str) -> Option<Cost> {
        let id = self.graph.node_id(name)?;
        let d = self.dist[id.slot()];
        d.is_finite().then_some(d)
    }

    /// Node from which `name`'s best cost was reached.
    pub fn predecessor(&self, name: &str) -> Option<&'g str> {
        let id = self.graph.node_id(name)?;
        self.pred[id.slot()].and_then(|p| self.graph.node_name(p))
    }

    /// Names with a finite distance, nearest first (ties by id).
    pub fn reachable(&self) -> Vec<(&'g str, Cost)> {
        let mut out: Vec<(NodeId, Cost)> = self
            .dist
            .iter()
            .enumerate()
            .filter(|(_, d)| d.is_finite())
            .map(|(i, &d)| (NodeId::from_index(i as u32), d))
            .collect();
        out.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));
        out.into_iter()
            .filter_map(|(id, d)| Some((self.graph.node_name(id)?, d)))
            .collect()
    }

    /// Route from the source to `target`.
    pub fn route_to(&self, target: &str) -> SolverResult<Route> {
        let target = self.graph.require(target)?;
        reconstruct(self.graph, &self.pred, self.source, target)
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}
