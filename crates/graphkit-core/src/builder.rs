//! Accumulating builder and the validate-then-populate construction pass.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxHashSet;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::{Edge, EdgeId, Node, NodeId};

/// A pending node-construction request: key plus payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSpec<K, N> {
    pub(crate) key: K,
    pub(crate) payload: N,
}

impl<K, N> NodeSpec<K, N> {
    /// Request for a node addressed by an explicit key.
    pub fn new(key: K, payload: N) -> Self {
        Self { key, payload }
    }

    /// The key the node will be stored under.
    #[must_use]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The payload the node will carry.
    #[must_use]
    pub fn payload(&self) -> &N {
        &self.payload
    }
}

impl<N: Clone> NodeSpec<N, N> {
    /// Request for a node whose payload doubles as its key.
    pub fn keyed(payload: N) -> Self {
        Self {
            key: payload.clone(),
            payload,
        }
    }
}

impl<K, N> From<(K, N)> for NodeSpec<K, N> {
    fn from((key, payload): (K, N)) -> Self {
        Self::new(key, payload)
    }
}

/// A pending edge-construction request: endpoint keys plus payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeSpec<K, E> {
    pub(crate) source: K,
    pub(crate) target: K,
    pub(crate) payload: E,
}

impl<K, E> EdgeSpec<K, E> {
    /// Request for an edge from the node keyed `source` to the node keyed
    /// `target`.
    pub fn new(source: K, target: K, payload: E) -> Self {
        Self {
            source,
            target,
            payload,
        }
    }

    /// Key of the intended source node.
    #[must_use]
    pub fn source(&self) -> &K {
        &self.source
    }

    /// Key of the intended target node.
    #[must_use]
    pub fn target(&self) -> &K {
        &self.target
    }

    /// The payload the edge will carry, which is also its identity key.
    #[must_use]
    pub fn payload(&self) -> &E {
        &self.payload
    }
}

impl<K, E> From<(K, K, E)> for EdgeSpec<K, E> {
    fn from((source, target, payload): (K, K, E)) -> Self {
        Self::new(source, target, payload)
    }
}

/// Accumulates node and edge requests, then finalizes them into a
/// [`Graph`] in one validated pass.
///
/// Requests may arrive in any order; an edge can be added before either of
/// its endpoints. Nothing is checked until [`is_valid`](Self::is_valid),
/// [`validate`](Self::validate) or [`build`](Self::build) runs. Methods
/// consume and return the builder so calls chain:
///
/// ```rust
/// use graphkit_core::GraphBuilder;
///
/// let graph = GraphBuilder::new()
///     .add_edge("a", "b", "follows")
///     .add_node("b", 2)
///     .add_node("a", 1)
///     .build()?;
///
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// # Ok::<(), graphkit_core::Error>(())
/// ```
///
/// Two documented policies resolve duplicates silently at build time rather
/// than erroring: node requests sharing a key overwrite last-write-wins, and
/// edge requests sharing a payload collapse into one edge entry (the replaced
/// entry's slot is reused, so earlier adjacency handles resolve to the
/// replacing edge).
#[derive(Debug, Clone)]
pub struct GraphBuilder<K, N, E> {
    nodes: Vec<NodeSpec<K, N>>,
    edges: Vec<EdgeSpec<K, E>>,
}

impl<K, N, E> Default for GraphBuilder<K, N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, N, E> GraphBuilder<K, N, E> {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Creates a builder with pre-allocated request lists.
    #[must_use]
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            edges: Vec::with_capacity(edges),
        }
    }

    /// Appends one node request. Duplicate keys are not checked here;
    /// they resolve last-write-wins at build time.
    #[must_use]
    pub fn add_node(mut self, key: K, payload: N) -> Self {
        self.nodes.push(NodeSpec::new(key, payload));
        self
    }

    /// Appends a batch of node requests, preserving their order.
    #[must_use]
    pub fn add_nodes<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<NodeSpec<K, N>>,
    {
        self.nodes.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Appends one edge request. Endpoint existence is not checked here;
    /// it is checked as a whole-batch condition at validation time.
    #[must_use]
    pub fn add_edge(mut self, source: K, target: K, payload: E) -> Self {
        self.edges.push(EdgeSpec::new(source, target, payload));
        self
    }

    /// Appends a batch of edge requests, preserving their order.
    #[must_use]
    pub fn add_edges<I>(mut self, edges: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<EdgeSpec<K, E>>,
    {
        self.edges.extend(edges.into_iter().map(Into::into));
        self
    }

    /// Number of pending node requests (not yet deduplicated).
    #[must_use]
    pub fn pending_node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of pending edge requests (not yet deduplicated).
    #[must_use]
    pub fn pending_edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Reserved hook for future layout optimizers (duplicate-edge
    /// coalescing, adjacency reordering for locality). Currently returns the
    /// builder unchanged; kept in the chaining contract so call sites written
    /// against it keep compiling once an optimizer lands.
    #[must_use]
    pub fn optimize(self) -> Self {
        self
    }
}

impl<N: Clone, E> GraphBuilder<N, N, E> {
    /// Appends one node request whose payload doubles as its key.
    ///
    /// Only available when the key and payload types coincide; for distinct
    /// types use [`add_node`](Self::add_node).
    #[must_use]
    pub fn add_node_keyed(mut self, payload: N) -> Self {
        self.nodes.push(NodeSpec::keyed(payload));
        self
    }
}

impl<K, N, E> GraphBuilder<K, N, E>
where
    K: Hash + Eq,
{
    /// Returns true iff every pending edge's source and target key appear
    /// among the pending node requests. Pure check, no mutation.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.missing_endpoint().is_none()
    }

    /// First endpoint key referenced by a pending edge but defined by no
    /// pending node, in edge-request order.
    fn missing_endpoint(&self) -> Option<&K> {
        let known: FxHashSet<&K> = self.nodes.iter().map(|spec| &spec.key).collect();
        self.edges.iter().find_map(|spec| {
            if !known.contains(&spec.source) {
                Some(&spec.source)
            } else if !known.contains(&spec.target) {
                Some(&spec.target)
            } else {
                None
            }
        })
    }
}

impl<K, N, E> GraphBuilder<K, N, E>
where
    K: Hash + Eq + fmt::Debug,
    E: Hash + Eq,
{
    /// Runs the same check as [`is_valid`](Self::is_valid), returning the
    /// builder unchanged on success so the call chains into
    /// [`build`](Self::build).
    ///
    /// # Errors
    ///
    /// [`Error::UnknownNodeKey`] when a pending edge references an endpoint
    /// key no pending node defines.
    pub fn validate(self) -> Result<Self> {
        if let Some(key) = self.missing_endpoint() {
            return Err(Error::UnknownNodeKey(format!("{key:?}")));
        }
        Ok(self)
    }

    /// Validates, then consumes the builder and produces the frozen
    /// [`Graph`].
    ///
    /// The pass is all-or-nothing: nodes are inserted first (last-write-wins
    /// on key collision), then edges in request order (keyed by payload,
    /// last-write-wins on payload collision), and each edge's handle is
    /// appended to its source's outgoing and target's incoming adjacency
    /// lists. No partial graph is ever returned.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownNodeKey`] when validation fails; [`Error::Internal`]
    /// when an inserted entry cannot be re-resolved (a construction defect,
    /// not correctable input).
    pub fn build(self) -> Result<Graph<K, N, E>> {
        let builder = self.validate()?;
        tracing::debug!(
            pending_nodes = builder.nodes.len(),
            pending_edges = builder.edges.len(),
            "building graph"
        );

        let mut nodes: IndexMap<K, Node<N>> = IndexMap::with_capacity(builder.nodes.len());
        for NodeSpec { key, payload } in builder.nodes {
            let (slot, replaced) = nodes.insert_full(key, Node::new(payload));
            if replaced.is_some() {
                tracing::trace!(slot, "duplicate node key overwritten, last write wins");
            }
        }

        let mut edges: IndexMap<E, Edge> = IndexMap::with_capacity(builder.edges.len());
        for EdgeSpec {
            source,
            target,
            payload,
        } in builder.edges
        {
            let source_id = nodes
                .get_index_of(&source)
                .map(NodeId)
                .ok_or_else(|| missing_after_validation(&source))?;
            let target_id = nodes
                .get_index_of(&target)
                .map(NodeId)
                .ok_or_else(|| missing_after_validation(&target))?;

            let (slot, replaced) = edges.insert_full(
                payload,
                Edge {
                    source: source_id,
                    target: target_id,
                },
            );
            if replaced.is_some() {
                tracing::warn!(slot, "duplicate edge payload collapsed, last write wins");
            }
            // Inserted entries must resolve through their own slot before any
            // adjacency list records the handle.
            if edges.get_index(slot).is_none() {
                return Err(Error::Internal(format!(
                    "edge slot {slot} unresolvable immediately after insertion"
                )));
            }
            let handle = EdgeId(slot);

            let (_, source_node) = nodes
                .get_index_mut(source_id.0)
                .ok_or_else(|| node_slot_lost(source_id))?;
            source_node.outgoing.push(handle);
            let (_, target_node) = nodes
                .get_index_mut(target_id.0)
                .ok_or_else(|| node_slot_lost(target_id))?;
            target_node.incoming.push(handle);
        }

        Ok(Graph { nodes, edges })
    }

    /// Like [`build`](Self::build), but returns the graph behind an [`Arc`]
    /// so it can be handed to multiple reader threads directly.
    ///
    /// # Errors
    ///
    /// Same conditions as [`build`](Self::build).
    pub fn build_shared(self) -> Result<Arc<Graph<K, N, E>>> {
        self.build().map(Arc::new)
    }
}

fn missing_after_validation<K: fmt::Debug>(key: &K) -> Error {
    Error::Internal(format!(
        "validated endpoint key {key:?} missing from node collection"
    ))
}

fn node_slot_lost(id: NodeId) -> Error {
    Error::Internal(format!("node slot {id} unresolvable during adjacency wiring"))
}
