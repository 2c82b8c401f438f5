//! Tests for handle semantics and the node/edge storage types.

use std::collections::HashSet;

use crate::types::{Edge, EdgeId, Node, NodeId};

#[test]
fn test_handle_equality_and_hashing() {
    assert_eq!(NodeId(3), NodeId(3));
    assert_ne!(NodeId(3), NodeId(4));
    assert_eq!(EdgeId(0), EdgeId(0));

    let mut seen = HashSet::new();
    assert!(seen.insert(NodeId(1)));
    assert!(!seen.insert(NodeId(1)));
    assert!(seen.insert(NodeId(2)));
}

#[test]
fn test_handle_ordering_follows_index() {
    assert!(NodeId(1) < NodeId(2));
    assert!(EdgeId(0) < EdgeId(7));
    assert_eq!(NodeId(5).index(), 5);
    assert_eq!(EdgeId(5).index(), 5);
}

#[test]
fn test_handle_display() {
    assert_eq!(NodeId(0).to_string(), "n0");
    assert_eq!(EdgeId(12).to_string(), "e12");
}

#[test]
fn test_node_starts_with_empty_adjacency() {
    let node = Node::new("payload");
    assert_eq!(node.payload(), &"payload");
    assert!(node.outgoing().is_empty());
    assert!(node.incoming().is_empty());
    assert_eq!(node.out_degree(), 0);
    assert_eq!(node.in_degree(), 0);
}

#[test]
fn test_edge_exposes_its_endpoints() {
    let edge = Edge {
        source: NodeId(2),
        target: NodeId(5),
    };
    assert_eq!(edge.source(), NodeId(2));
    assert_eq!(edge.target(), NodeId(5));
}
