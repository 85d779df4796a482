//! Integration tests for rf-graph.

use rf_graph::{DuplicatePolicy, Edge, GraphBuilder, GraphError, build_graph};

fn reference_edges() -> Vec<Edge> {
    vec![
        Edge::new("Moscow", "St.Pitersbourg", 3000.0),
        Edge::new("Moscow", "Kazan", 3000.0),
        Edge::new("Moscow", "Rostov", 6000.0),
        Edge::new("St.Pitersbourg", "Kazan", 1000.0),
        Edge::new("St.Pitersbourg", "Kemerovo", 3000.0),
        Edge::new("Perm", "Kemerovo", 2000.0),
        Edge::new("Perm", "Rostov", 3000.0),
        Edge::new("Kazan", "Kemerovo", 1000.0),
        Edge::new("Kazan", "Rostov", 2000.0),
        Edge::new("Kemerovo", "Rostov", 5000.0),
    ]
}

#[test]
fn build_reference_network() {
    let graph = build_graph(reference_edges()).unwrap();

    assert_eq!(graph.node_count(), 6);
    assert_eq!(graph.edge_count(), 10);

    // Registration follows first appearance
    let names: Vec<&str> = graph.node_names().collect();
    assert_eq!(
        names,
        ["Moscow", "St.Pitersbourg", "Kazan", "Rostov", "Kemerovo", "Perm"]
    );

    // Kazan touches Moscow, St.Pitersbourg, Kemerovo, Rostov
    let kazan = graph.node_id("Kazan").unwrap();
    assert_eq!(graph.degree(kazan), 4);
}

#[test]
fn symmetry_for_every_input_edge() {
    let edges = reference_edges();
    let graph = build_graph(edges.clone()).unwrap();

    for edge in &edges {
        assert_eq!(graph.cost_between(&edge.a, &edge.b), Some(edge.cost));
        assert_eq!(graph.cost_between(&edge.b, &edge.a), Some(edge.cost));
    }
}

#[test]
fn edges_iterator_yields_each_pair_once() {
    let graph = build_graph(reference_edges()).unwrap();
    let pairs: Vec<_> = graph.edges().collect();

    assert_eq!(pairs.len(), 10);
    for (u, v, _) in &pairs {
        assert!(u <= v);
    }
    let total: f64 = pairs.iter().map(|&(_, _, c)| c).sum();
    assert_eq!(total, 29_000.0);
}

#[test]
fn neighbors_sorted_by_id() {
    let graph = build_graph(reference_edges()).unwrap();
    for name in graph.node_names() {
        let id = graph.node_id(name).unwrap();
        let adj = graph.neighbors(id);
        assert!(adj.windows(2).all(|w| w[0].0 < w[1].0));
    }
}

#[test]
fn invalid_edge_stops_extend() {
    let mut builder = GraphBuilder::new();
    let result = builder.extend([("A", "B", 1.0), ("B", "C", -2.0), ("C", "D", 1.0)]);

    assert!(matches!(result, Err(GraphError::InvalidEdge { .. })));
    // Only the edge before the failure was applied
    assert_eq!(builder.node_count(), 2);
    assert_eq!(builder.edge_count(), 1);
}

#[test]
fn policy_is_recorded() {
    let builder = GraphBuilder::with_policy(DuplicatePolicy::KeepMin);
    assert_eq!(builder.policy(), DuplicatePolicy::KeepMin);
    assert_eq!(GraphBuilder::new().policy(), DuplicatePolicy::LastWins);
}

#[test]
fn unknown_lookups() {
    let graph = build_graph([("A", "B", 5.0)]).unwrap();
    assert!(!graph.contains("C"));
    assert_eq!(graph.cost_between("A", "C"), None);
    assert_eq!(
        graph.require("C"),
        Err(GraphError::UnknownNode { name: "C".into() })
    );
}

#[test]
fn disconnected_components_coexist() {
    let graph = build_graph([("A", "B", 1.0), ("C", "D", 2.0)]).unwrap();
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.cost_between("A", "D"), None);
    assert_eq!(graph.cost_between("C", "D"), Some(2.0));
}
