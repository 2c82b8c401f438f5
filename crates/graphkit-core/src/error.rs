//! Error types for graph validation and construction.

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while validating or building a graph.
///
/// The two variants are deliberately distinct in kind: [`Error::UnknownNodeKey`]
/// is user-correctable (amend the builder and retry), while [`Error::Internal`]
/// reports a broken construction invariant that no amount of retrying fixes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A pending edge references a node key that no pending node request
    /// defines. Add the missing node or drop the edge.
    #[error("edge endpoint references unknown node key {0}")]
    UnknownNodeKey(String),

    /// A freshly inserted entry could not be re-resolved from the collection
    /// that just received it. Indicates a defect in the construction pass,
    /// not bad input.
    #[error("graph construction invariant violated: {0}")]
    Internal(String),
}

impl Error {
    /// Returns true for errors the caller can fix by amending the builder
    /// and building again.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::UnknownNodeKey(_))
    }
}
