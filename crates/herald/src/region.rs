//! Announcement Region
//!
//! The visually hidden container whose content changes screen readers
//! announce.

use herald_a11y::{LiveRegion, SR_ONLY_CLASS};
use herald_dom::{DomResult, DomTree, NodeId};

/// Announcement region
///
/// Pure value: `content` in, one rendered container element out. Holds no
/// state; the announcer re-renders it on every content change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Region {
    /// The content screen readers will announce
    pub content: String,
}

impl Region {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Render into a detached element carrying the live-region attributes
    pub fn render(&self, tree: &mut DomTree) -> DomResult<NodeId> {
        self.render_with(tree, &LiveRegion::default(), SR_ONLY_CLASS)
    }

    /// Render with explicit live-region semantics and hiding class
    pub fn render_with(
        &self,
        tree: &mut DomTree,
        live: &LiveRegion,
        hidden_class: &str,
    ) -> DomResult<NodeId> {
        let node = tree.create_element("div");
        live.apply(tree, node)?;
        tree.set_attr(node, "class", hidden_class)?;
        let text = tree.create_text(&self.content);
        tree.append_child(node, text)?;
        Ok(node)
    }
}
