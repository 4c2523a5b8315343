//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::entities::NodeType;

/// Domain errors represent violated preconditions on the morphology.
///
/// Numeric degeneracies (zero-length vectors, missing branches) are not errors:
/// they surface as NaN or as dedicated result variants.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("no node of type {0} in morphology")]
    OriginNotFound(NodeType),

    #[error("unknown node: {0}")]
    UnknownNode(String),

    #[error("{ancestor} is not an ancestor of {descendant}")]
    NotAncestor {
        ancestor: String,
        descendant: String,
    },

    #[error("morphology already has a root node")]
    MultipleRoots,

    #[error("invalid node: {message}")]
    InvalidNode { message: String },
}

impl DomainError {
    /// Build an `UnknownNode` error from any debuggable node handle.
    pub fn unknown_node(id: impl std::fmt::Debug) -> Self {
        Self::UnknownNode(format!("{id:?}"))
    }

    pub fn not_ancestor(ancestor: impl std::fmt::Debug, descendant: impl std::fmt::Debug) -> Self {
        Self::NotAncestor {
            ancestor: format!("{ancestor:?}"),
            descendant: format!("{descendant:?}"),
        }
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
