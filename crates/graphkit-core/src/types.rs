//! Node and edge storage types, plus the handle newtypes adjacency lists use.

use std::fmt;

/// Stable handle to a node within one [`Graph`](crate::Graph) instance.
///
/// A handle is a position in the graph's insertion-ordered node collection
/// and stays valid for the lifetime of the graph that issued it. Handles are
/// not meaningful across graph instances: resolving a foreign handle yields
/// an unrelated entry or `None`, never undefined behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in the graph's node collection.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Stable handle to an edge within one [`Graph`](crate::Graph) instance.
///
/// Same validity contract as [`NodeId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Position of the edge in the graph's edge collection.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// A graph vertex: caller payload plus incident-edge adjacency.
///
/// Adjacency lists hold [`EdgeId`] handles in edge-request insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<N> {
    pub(crate) payload: N,
    pub(crate) outgoing: Vec<EdgeId>,
    pub(crate) incoming: Vec<EdgeId>,
}

impl<N> Node<N> {
    pub(crate) fn new(payload: N) -> Self {
        Self {
            payload,
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }

    /// Returns the node payload.
    #[must_use]
    pub fn payload(&self) -> &N {
        &self.payload
    }

    /// Handles of edges leaving this node, in insertion order.
    #[must_use]
    pub fn outgoing(&self) -> &[EdgeId] {
        &self.outgoing
    }

    /// Handles of edges arriving at this node, in insertion order.
    #[must_use]
    pub fn incoming(&self) -> &[EdgeId] {
        &self.incoming
    }

    /// Number of outgoing edges.
    #[must_use]
    pub fn out_degree(&self) -> usize {
        self.outgoing.len()
    }

    /// Number of incoming edges.
    #[must_use]
    pub fn in_degree(&self) -> usize {
        self.incoming.len()
    }
}

/// A directed edge's endpoints.
///
/// The edge payload is not stored here: it is the key of the edge's entry in
/// the graph's edge collection, retrievable via
/// [`Graph::edge_payload`](crate::Graph::edge_payload).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub(crate) source: NodeId,
    pub(crate) target: NodeId,
}

impl Edge {
    /// Handle of the node this edge leaves.
    #[must_use]
    pub fn source(self) -> NodeId {
        self.source
    }

    /// Handle of the node this edge arrives at.
    #[must_use]
    pub fn target(self) -> NodeId {
        self.target
    }
}
