//! Tests for the frozen graph's lookup and iteration surface.

use std::collections::BTreeSet;

use crate::builder::GraphBuilder;
use crate::graph::Graph;

type StrGraph = Graph<&'static str, &'static str, &'static str>;

fn sample_graph() -> StrGraph {
    GraphBuilder::new()
        .add_node("0", "A")
        .add_node("1", "B")
        .add_edge("0", "1", "x:=1")
        .add_nodes([("2", "C"), ("3", "D")])
        .add_edges([("2", "1", "x:=2"), ("3", "4", "x:=3")])
        .add_node("5", "F")
        .add_node("4", "E")
        .build()
        .unwrap()
}

/// Collects every <source-payload, edge-payload, target-payload> triple
/// reachable through outgoing adjacency, the way a consumer prints a graph.
fn triples(graph: &StrGraph) -> BTreeSet<(&str, &str, &str)> {
    let mut out = BTreeSet::new();
    for (_, _, node) in graph.nodes() {
        for &edge_id in node.outgoing() {
            let label = graph.edge_payload(edge_id).unwrap();
            let (source, target) = graph.endpoints(edge_id).unwrap();
            out.insert((*source.payload(), *label, *target.payload()));
        }
    }
    out
}

#[test]
fn test_counts() {
    let graph = sample_graph();
    assert_eq!(graph.node_count(), 6);
    assert_eq!(graph.edge_count(), 3);
    assert!(!graph.is_empty());
}

#[test]
fn test_node_lookup_by_key() {
    let graph = sample_graph();
    let (id, node) = graph.node_by_key("1").unwrap();
    assert_eq!(node.payload(), &"B");
    assert_eq!(graph.node_key(id), Some(&"1"));
    assert!(graph.contains_node_key("5"));
    assert!(!graph.contains_node_key("9"));
    assert!(graph.node_by_key("9").is_none());
}

#[test]
fn test_edge_lookup_by_payload() {
    let graph = sample_graph();
    let (id, edge) = graph.edge_by_payload("x:=2").unwrap();
    assert_eq!(graph.edge_payload(id), Some(&"x:=2"));
    assert_eq!(graph.node(edge.source()).unwrap().payload(), &"C");
    assert_eq!(graph.node(edge.target()).unwrap().payload(), &"B");
    assert!(graph.contains_edge_payload("x:=1"));
    assert!(!graph.contains_edge_payload("x:=4"));
}

#[test]
fn test_handles_resolve_through_the_graph() {
    let graph = sample_graph();
    for (id, key, node) in graph.nodes() {
        assert_eq!(graph.node_key(id), Some(key));
        assert_eq!(graph.node(id).unwrap().payload(), node.payload());
    }
    for (id, payload, edge) in graph.edges() {
        assert_eq!(graph.edge_payload(id), Some(payload));
        assert_eq!(graph.edge(id), Some(edge));
    }
}

#[test]
fn test_incoming_adjacency_of_shared_target() {
    let graph = sample_graph();
    let (_, b) = graph.node_by_key("1").unwrap();
    assert_eq!(b.in_degree(), 2);
    assert_eq!(b.out_degree(), 0);
    let labels: Vec<&str> = b
        .incoming()
        .iter()
        .map(|&id| *graph.edge_payload(id).unwrap())
        .collect();
    assert_eq!(labels, vec!["x:=1", "x:=2"]);
}

#[test]
fn test_isolated_node_has_no_incident_edges() {
    let graph = sample_graph();
    let (_, f) = graph.node_by_key("5").unwrap();
    assert_eq!(f.out_degree(), 0);
    assert_eq!(f.in_degree(), 0);
}

#[test]
fn test_triples_match_the_added_edges_exactly() {
    let graph = sample_graph();
    let expected: BTreeSet<(&str, &str, &str)> =
        [("A", "x:=1", "B"), ("C", "x:=2", "B"), ("D", "x:=3", "E")]
            .into_iter()
            .collect();
    assert_eq!(triples(&graph), expected);
}

#[test]
fn test_iteration_follows_first_insertion_order() {
    let graph = sample_graph();
    let keys: Vec<&str> = graph.nodes().map(|(_, key, _)| *key).collect();
    assert_eq!(keys, vec!["0", "1", "2", "3", "5", "4"]);
    let labels: Vec<&str> = graph.edges().map(|(_, label, _)| *label).collect();
    assert_eq!(labels, vec!["x:=1", "x:=2", "x:=3"]);
}

#[test]
fn test_stale_handle_resolution_is_none_not_panic() {
    let graph = sample_graph();
    let foreign_node = crate::types::NodeId(99);
    let foreign_edge = crate::types::EdgeId(99);
    assert!(graph.node(foreign_node).is_none());
    assert!(graph.node_key(foreign_node).is_none());
    assert!(graph.edge(foreign_edge).is_none());
    assert!(graph.edge_payload(foreign_edge).is_none());
    assert!(graph.endpoints(foreign_edge).is_none());
}

#[test]
fn test_graphs_with_owned_payload_types() {
    #[derive(Debug, PartialEq)]
    struct City {
        population: u64,
    }

    let graph = GraphBuilder::<String, City, String>::new()
        .add_node("cph".to_string(), City { population: 660_000 })
        .add_node("aal".to_string(), City { population: 120_000 })
        .add_edge("cph".to_string(), "aal".to_string(), "E45".to_string())
        .build()
        .unwrap();
    let (_, cph) = graph.node_by_key("cph").unwrap();
    assert_eq!(cph.payload().population, 660_000);
    assert_eq!(cph.out_degree(), 1);
}
