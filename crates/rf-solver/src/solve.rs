//! Public entry points.

use rayon::prelude::*;
use rf_graph::Graph;

use crate::error::SolverResult;
use crate::route::{Route, reconstruct};
use crate::search::{SearchConfig, SearchContext};
use crate::tree::ShortestPathTree;

/// Find the least-cost route between two named nodes.
///
/// Fails with `UnknownNode` if either name is absent from the graph
/// (source checked first), with `Unreachable` if no route exists and with
/// `CostOverflow` if every route costs more than `Cost` can represent.
/// `find_path(g, s, s)` is `[s]` at cost 0.
pub fn find_path(graph: &Graph, source: &str, target: &str) -> SolverResult<Route> {
    find_path_with(graph, source, target, &SearchConfig::default())
}

/// [`find_path`] with explicit search configuration.
pub fn find_path_with(
    graph: &Graph,
    source: &str,
    target: &str,
    config: &SearchConfig,
) -> SolverResult<Route> {
    let s = graph.require(source)?;
    let t = graph.require(target)?;

    let mut ctx = SearchContext::new(graph.node_count());
    ctx.run(graph, s, Some(t), config)?;
    reconstruct(graph, &ctx.pred, s, t)
}

/// Distances and predecessors from `source` to every node.
///
/// `config.stop_at_target` is ignored: the tree is always complete.
pub fn shortest_path_tree<'g>(
    graph: &'g Graph,
    source: &str,
    config: &SearchConfig,
) -> SolverResult<ShortestPathTree<'g>> {
    let s = graph.require(source)?;

    let mut ctx = SearchContext::new(graph.node_count());
    let config = SearchConfig {
        stop_at_target: false,
        ..*config
    };
    ctx.run(graph, s, None, &config)?;

    Ok(ShortestPathTree {
        graph,
        source: s,
        dist: ctx.dist,
        pred: ctx.pred,
        stats: ctx.stats,
    })
}

/// Run independent queries against one shared graph in parallel.
///
/// Results are returned in query order; one failing query does not
/// affect the others.
pub fn find_paths<Q>(graph: &Graph, queries: &[(Q, Q)]) -> Vec<SolverResult<Route>>
where
    Q: AsRef<str> + Sync,
{
    queries
        .par_iter()
        .map(|(source, target)| find_path(graph, source.as_ref(), target.as_ref()))
        .collect()
}
