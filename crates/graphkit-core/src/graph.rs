//! The frozen graph produced by a successful build.

use std::borrow::Borrow;
use std::hash::Hash;

use indexmap::IndexMap;

use crate::types::{Edge, EdgeId, Node, NodeId};

/// An immutable directed graph: a keyed node collection and a keyed edge
/// collection, cross-linked through [`NodeId`]/[`EdgeId`] handles.
///
/// `K` is the node key type, `N` the node payload type, `E` the edge payload
/// type. Edge payloads double as edge identity keys, so `E` needs the same
/// hash/equality capability as `K`. Both collections preserve the insertion
/// order of the first request that produced each entry, and handles index
/// into them directly, which makes handle resolution O(1) and keyed lookup
/// O(1) expected.
///
/// A `Graph` is only ever produced by
/// [`GraphBuilder::build`](crate::GraphBuilder::build); no mutating API
/// exists on it. It is `Send + Sync` whenever `K`, `N` and `E` are, so an
/// `Arc<Graph>` can be read from any number of threads.
#[derive(Debug, Clone)]
pub struct Graph<K, N, E> {
    pub(crate) nodes: IndexMap<K, Node<N>>,
    pub(crate) edges: IndexMap<E, Edge>,
}

impl<K, N, E> Graph<K, N, E> {
    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true when the graph has no nodes (and therefore no edges).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Resolves a node handle.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node<N>> {
        self.nodes.get_index(id.0).map(|(_, node)| node)
    }

    /// Returns the key under which a node is stored.
    #[must_use]
    pub fn node_key(&self, id: NodeId) -> Option<&K> {
        self.nodes.get_index(id.0).map(|(key, _)| key)
    }

    /// Resolves an edge handle.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get_index(id.0).map(|(_, edge)| edge)
    }

    /// Returns an edge's payload, which is also its identity key in the
    /// edge collection.
    #[must_use]
    pub fn edge_payload(&self, id: EdgeId) -> Option<&E> {
        self.edges.get_index(id.0).map(|(payload, _)| payload)
    }

    /// Resolves an edge handle to its endpoint nodes, `(source, target)`.
    #[must_use]
    pub fn endpoints(&self, id: EdgeId) -> Option<(&Node<N>, &Node<N>)> {
        let edge = self.edge(id)?;
        let (_, source) = self.nodes.get_index(edge.source.0)?;
        let (_, target) = self.nodes.get_index(edge.target.0)?;
        Some((source, target))
    }

    /// Iterates all nodes with their handles and keys, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &K, &Node<N>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, (key, node))| (NodeId(index), key, node))
    }

    /// Iterates all edges with their handles and payloads, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &E, &Edge)> {
        self.edges
            .iter()
            .enumerate()
            .map(|(index, (payload, edge))| (EdgeId(index), payload, edge))
    }
}

impl<K, N, E> Graph<K, N, E>
where
    K: Hash + Eq,
{
    /// Looks up a node by key.
    #[must_use]
    pub fn node_by_key<Q>(&self, key: &Q) -> Option<(NodeId, &Node<N>)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.nodes
            .get_full(key)
            .map(|(index, _, node)| (NodeId(index), node))
    }

    /// Returns true if a node is stored under the given key.
    #[must_use]
    pub fn contains_node_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.nodes.contains_key(key)
    }
}

impl<K, N, E> Graph<K, N, E>
where
    E: Hash + Eq,
{
    /// Looks up an edge by its payload.
    #[must_use]
    pub fn edge_by_payload<Q>(&self, payload: &Q) -> Option<(EdgeId, &Edge)>
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.edges
            .get_full(payload)
            .map(|(index, _, edge)| (EdgeId(index), edge))
    }

    /// Returns true if an edge is stored under the given payload.
    #[must_use]
    pub fn contains_edge_payload<Q>(&self, payload: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.edges.contains_key(payload)
    }
}
