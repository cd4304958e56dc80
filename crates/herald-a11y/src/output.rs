//! Screen Reader Output
//!
//! Live-region snapshot of a document, and the announcement queue a screen
//! reader would build from watching it.

use std::collections::HashMap;

use herald_dom::{Document, DomTree, NodeId};

use crate::aria::{AriaRole, LivePoliteness};
use crate::live::LiveRegion;

/// One live region as seen by assistive technology
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveRegionView {
    /// Element carrying the live-region attributes
    pub node: NodeId,
    pub politeness: LivePoliteness,
    pub atomic: bool,
    pub role: AriaRole,
    /// Current text content of the region
    pub text: String,
}

/// Collect every live region in the document, in tree order
pub fn live_regions(doc: &Document) -> Vec<LiveRegionView> {
    let mut out = Vec::new();
    collect(doc.tree(), doc.tree().root(), &mut out);
    out
}

fn collect(tree: &DomTree, node: NodeId, out: &mut Vec<LiveRegionView>) {
    for (id, child) in tree.children(node) {
        if child.is_element() {
            if let Ok(region) = LiveRegion::from_element(tree, id) {
                out.push(LiveRegionView {
                    node: id,
                    politeness: region.politeness,
                    atomic: region.atomic,
                    role: region.role,
                    text: tree.text_content(id),
                });
            }
        }
        collect(tree, id, out);
    }
}

/// Live region announcement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveAnnouncement {
    pub text: String,
    pub politeness: LivePoliteness,
}

/// Screen reader output
///
/// Watches a document's live regions across observations and queues an
/// announcement whenever a region's text changes to a non-empty value.
#[derive(Debug, Default)]
pub struct ScreenReaderOutput {
    /// Pending announcements
    announcements: Vec<LiveAnnouncement>,
    /// Last observed text per live-region node
    seen: HashMap<NodeId, String>,
}

impl ScreenReaderOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Diff the document's live regions against the previous observation
    pub fn observe(&mut self, doc: &Document) {
        for view in live_regions(doc) {
            let changed = match self.seen.get(&view.node) {
                Some(prev) => *prev != view.text,
                None => true,
            };
            if changed && !view.text.is_empty() {
                tracing::debug!(text = %view.text, "live region changed");
                self.announce(&view.text, view.politeness);
            }
            self.seen.insert(view.node, view.text);
        }
    }

    /// Queue an announcement
    pub fn announce(&mut self, text: &str, politeness: LivePoliteness) {
        self.announcements.push(LiveAnnouncement {
            text: text.to_string(),
            politeness,
        });
    }

    /// Get next announcement
    pub fn next(&mut self) -> Option<LiveAnnouncement> {
        if self.announcements.is_empty() {
            None
        } else {
            // Assertive announcements first
            if let Some(idx) = self
                .announcements
                .iter()
                .position(|a| a.politeness == LivePoliteness::Assertive)
            {
                Some(self.announcements.remove(idx))
            } else {
                Some(self.announcements.remove(0))
            }
        }
    }

    /// Number of pending announcements
    pub fn pending(&self) -> usize {
        self.announcements.len()
    }
}
