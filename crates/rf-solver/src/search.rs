//! Single-source relaxation over a shared read-only graph.

use std::collections::VecDeque;

use rf_core::{Cost, NodeId, UNREACHED};
use rf_graph::Graph;

use crate::error::{SolverError, SolverResult};
use crate::frontier::Frontier;

/// Search configuration.
#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    /// Stop as soon as the target is finalized (ignored for full trees).
    pub stop_at_target: bool,
    /// Upper bound on frontier pops; `None` means unbounded.
    pub max_pops: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            stop_at_target: true,
            max_pops: None,
        }
    }
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Entries taken off the frontier, stale ones included.
    pub pops: usize,
    /// Entries skipped because a cheaper route was already recorded.
    pub stale: usize,
    /// Successful distance improvements.
    pub relaxations: usize,
    /// Largest frontier size observed.
    pub max_frontier: usize,
}

/// Working state owned by one search invocation.
///
/// Tables are indexed by `NodeId::slot()`; nothing here outlives the call
/// except what the caller moves out.
#[derive(Debug)]
pub(crate) struct SearchContext {
    pub dist: Vec<Cost>,
    pub pred: Vec<Option<NodeId>>,
    pub stats: SearchStats,
    frontier: Frontier,
}

impl SearchContext {
    pub fn new(node_count: usize) -> Self {
        Self {
            dist: vec![UNREACHED; node_count],
            pred: vec![None; node_count],
            stats: SearchStats::default(),
            frontier: Frontier::with_capacity(node_count),
        }
    }

    /// Run the search from `source`, optionally stopping once `target`
    /// is finalized.
    pub fn run(
        &mut self,
        graph: &Graph,
        source: NodeId,
        target: Option<NodeId>,
        config: &SearchConfig,
    ) -> SolverResult<()> {
        let Some(slot) = self.dist.get_mut(source.slot()) else {
            return Err(SolverError::Invariant {
                what: format!("source id {source} outside distance table"),
            });
        };
        *slot = 0.0;
        self.frontier.push(source, 0.0);
        self.stats.max_frontier = self.frontier.len();

        while let Some(entry) = self.frontier.pop() {
            self.stats.pops += 1;
            if let Some(limit) = config.max_pops {
                if self.stats.pops > limit {
                    return Err(SolverError::IterationLimit { limit });
                }
            }

            let u = entry.node;
            let du = self.dist[u.slot()];
            if entry.cost > du {
                self.stats.stale += 1;
                continue;
            }
            if config.stop_at_target && target == Some(u) {
                break;
            }

            for &(v, cost) in graph.neighbors(u) {
                // An overflowed sum is never an improvement; see `connected`.
                let alt = du + cost;
                if alt.is_finite() && alt < self.dist[v.slot()] {
                    tracing::trace!(from = %u, to = %v, cost = alt, "relaxed");
                    self.dist[v.slot()] = alt;
                    self.pred[v.slot()] = Some(u);
                    self.frontier.push(v, alt);
                    self.stats.relaxations += 1;
                    self.stats.max_frontier = self.stats.max_frontier.max(self.frontier.len());
                }
            }
        }

        tracing::debug!(
            source = graph.node_name(source).unwrap_or("?"),
            pops = self.stats.pops,
            stale = self.stats.stale,
            relaxations = self.stats.relaxations,
            "search finished"
        );
        Ok(())
    }
}

/// True if an edge chain joins `a` and `b`, ignoring costs.
///
/// Separates "no route" from "route cost exceeds the `Cost` range" once a
/// search leaves the target at infinite distance.
pub(crate) fn connected(graph: &Graph, a: NodeId, b: NodeId) -> bool {
    if a == b {
        return true;
    }
    let mut seen = vec![false; graph.node_count()];
    let mut queue = VecDeque::from([a]);
    if let Some(s) = seen.get_mut(a.slot()) {
        *s = true;
    }

    while let Some(u) = queue.pop_front() {
        for &(v, _) in graph.neighbors(u) {
            if v == b {
                return true;
            }
            if !seen[v.slot()] {
                seen[v.slot()] = true;
                queue.push_back(v);
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use rf_graph::build_graph;

    #[test]
    fn distances_on_chain() {
        let graph = build_graph([("A", "B", 1.0), ("B", "C", 2.0), ("C", "D", 3.0)]).unwrap();
        let a = graph.node_id("A").unwrap();

        let mut ctx = SearchContext::new(graph.node_count());
        let config = SearchConfig {
            stop_at_target: false,
            ..SearchConfig::default()
        };
        ctx.run(&graph, a, None, &config).unwrap();

        assert_eq!(ctx.dist, [0.0, 1.0, 3.0, 6.0]);
        assert_eq!(ctx.pred[0], None);
        assert_eq!(ctx.pred[3], graph.node_id("C"));
    }

    #[test]
    fn improvement_reinserts_node() {
        // A-C direct is 10, A-B-C is 2: C is pushed twice
        let graph = build_graph([("A", "C", 10.0), ("A", "B", 1.0), ("B", "C", 1.0)]).unwrap();
        let a = graph.node_id("A").unwrap();

        let mut ctx = SearchContext::new(graph.node_count());
        ctx.run(&graph, a, None, &SearchConfig::default()).unwrap();

        let c = graph.node_id("C").unwrap();
        assert_eq!(ctx.dist[c.slot()], 2.0);
        assert_eq!(ctx.stats.relaxations, 3);
        assert_eq!(ctx.stats.stale, 1);
        assert_eq!(ctx.stats.max_frontier, 2);
    }

    #[test]
    fn pop_limit_is_enforced() {
        let graph = build_graph([("A", "B", 1.0), ("B", "C", 1.0)]).unwrap();
        let a = graph.node_id("A").unwrap();

        let mut ctx = SearchContext::new(graph.node_count());
        let config = SearchConfig {
            stop_at_target: false,
            max_pops: Some(1),
        };
        assert_eq!(
            ctx.run(&graph, a, None, &config),
            Err(SolverError::IterationLimit { limit: 1 })
        );
    }

    #[test]
    fn overflowing_sum_is_not_relaxed() {
        let graph = build_graph([("A", "B", 1e308), ("B", "C", 1e308)]).unwrap();
        let a = graph.node_id("A").unwrap();
        let c = graph.node_id("C").unwrap();

        let mut ctx = SearchContext::new(graph.node_count());
        ctx.run(&graph, a, None, &SearchConfig::default()).unwrap();

        assert_eq!(ctx.dist[1], 1e308);
        assert!(ctx.dist[c.slot()].is_infinite());
        assert_eq!(ctx.pred[c.slot()], None);
        assert!(connected(&graph, a, c));
    }

    #[test]
    fn connectivity_ignores_costs() {
        let graph = build_graph([("A", "B", 0.0), ("B", "C", 9.0), ("X", "Y", 1.0)]).unwrap();
        let id = |n: &str| graph.node_id(n).unwrap();

        assert!(connected(&graph, id("A"), id("C")));
        assert!(connected(&graph, id("X"), id("X")));
        assert!(!connected(&graph, id("A"), id("Y")));
    }

    #[test]
    fn isolated_source_still_seeded() {
        let graph = build_graph([("A", "A", 4.0), ("B", "C", 1.0)]).unwrap();
        let a = graph.node_id("A").unwrap();

        let mut ctx = SearchContext::new(graph.node_count());
        ctx.run(&graph, a, None, &SearchConfig::default()).unwrap();

        assert_eq!(ctx.dist[a.slot()], 0.0);
        assert!(ctx.dist[1..].iter().all(|d| d.is_infinite()));
    }
}
