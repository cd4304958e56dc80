//! Herald DOM - Document Object Model
//!
//! Arena-based DOM tree, sized for announcement overlays rather than full
//! pages: elements, text nodes, attributes, and the handful of mutations a
//! live region needs.

mod document;
mod error;
mod node;
mod tree;

pub use document::Document;
pub use error::{DomError, DomResult};
pub use node::{Attr, ElementData, Node, NodeData, TextData};
pub use tree::{Children, DomTree};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Root node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Check if this ID refers to a node at all
    #[inline]
    pub fn is_valid(&self) -> bool {
        *self != Self::NONE
    }
}
