//! DOM operation errors

use thiserror::Error;

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomError {
    /// Node not found (never allocated, or already removed)
    #[error("node not found")]
    NotFound,

    /// Hierarchy error (e.g., inserting a node into its own subtree)
    #[error("hierarchy request error")]
    HierarchyRequest,

    /// Node is not a child of the given parent
    #[error("node is not a child of the given parent")]
    NotAChild,

    /// Operation requires a different node type
    #[error("invalid node type for operation")]
    InvalidNodeType,
}
