//! # graphkit-core
//!
//! In-memory directed graphs with a two-phase construction protocol: an
//! accumulating [`GraphBuilder`] that takes node and edge requests in any
//! order, and a frozen [`Graph`] produced by one validated build pass.
//!
//! Nodes carry arbitrary payloads and are addressed by a caller-chosen key
//! type; edge payloads double as edge identity keys. After the build, the
//! graph is traversed through stable [`NodeId`]/[`EdgeId`] handles instead of
//! repeated key lookups: every node holds its incident edges' handles, every
//! edge holds its endpoints' handles. Key and payload types only need the
//! usual `Hash + Eq` capability to act as collection keys.
//!
//! ## Quick start
//!
//! ```rust
//! use graphkit_core::GraphBuilder;
//!
//! let graph = GraphBuilder::new()
//!     .add_node("0", "A")
//!     .add_node("1", "B")
//!     .add_edge("0", "1", "x:=1")
//!     .build()?;
//!
//! let (_, a) = graph.node_by_key("0").expect("node was added");
//! for &edge_id in a.outgoing() {
//!     let (source, target) = graph.endpoints(edge_id).expect("handle is live");
//!     let label = graph.edge_payload(edge_id).expect("handle is live");
//!     println!("<{}, '{}', {}>", source.payload(), label, target.payload());
//! }
//! # Ok::<(), graphkit_core::Error>(())
//! ```
//!
//! Validation is whole-batch and fail-fast: if any pending edge references a
//! key no pending node defines, [`GraphBuilder::build`] refuses to produce a
//! graph at all. Duplicate node keys and duplicate edge payloads are not
//! errors; both resolve last-write-wins (see [`GraphBuilder`]).

#![warn(missing_docs)]

pub mod builder;
pub mod error;
pub mod graph;
pub mod types;

#[cfg(test)]
mod graph_tests;
#[cfg(test)]
mod types_tests;

pub use builder::{EdgeSpec, GraphBuilder, NodeSpec};
pub use error::{Error, Result};
pub use graph::Graph;
pub use types::{Edge, EdgeId, Node, NodeId};
