//! Live Regions
//!
//! Writing live-region semantics onto elements and reading them back.

use herald_dom::{DomResult, DomTree, NodeId};

use crate::aria::{AriaRole, LivePoliteness};
use crate::A11yError;

/// Class marking an element as visually hidden but exposed to screen readers
pub const SR_ONLY_CLASS: &str = "sr-only";

/// Screen-reader-only hiding rule for [`SR_ONLY_CLASS`]
///
/// The clip-rect technique removes the element from the visual layout
/// without removing it from the accessibility tree.
pub const SR_ONLY_CSS: &str = "\
.sr-only {
    position: absolute;
    width: 1px;
    height: 1px;
    padding: 0;
    margin: -1px;
    overflow: hidden;
    clip: rect(0, 0, 0, 0);
    white-space: nowrap;
    border: 0;
}
";

/// Live-region semantics of one element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiveRegion {
    /// How screen readers should interrupt for updates
    pub politeness: LivePoliteness,
    /// Announce the whole region per update instead of the changed diff
    pub atomic: bool,
    /// Role exposed to assistive technology
    pub role: AriaRole,
}

impl Default for LiveRegion {
    fn default() -> Self {
        Self {
            politeness: LivePoliteness::Polite,
            atomic: true,
            role: AriaRole::Region,
        }
    }
}

impl LiveRegion {
    pub fn new(politeness: LivePoliteness) -> Self {
        Self {
            politeness,
            ..Default::default()
        }
    }

    /// Write `aria-live`, `aria-atomic`, and `role` onto an element
    pub fn apply(&self, tree: &mut DomTree, node: NodeId) -> DomResult<()> {
        tree.set_attr(node, "aria-live", self.politeness.as_str())?;
        tree.set_attr(node, "role", self.role.as_str())?;
        tree.set_attr(node, "aria-atomic", if self.atomic { "true" } else { "false" })?;
        Ok(())
    }

    /// Read live-region semantics back from an element
    ///
    /// Politeness comes from `aria-live`, falling back to the politeness
    /// implied by the element's role. Elements that resolve to `Off` are
    /// not live regions.
    pub fn from_element(tree: &DomTree, node: NodeId) -> Result<Self, A11yError> {
        let elem = tree
            .get(node)
            .and_then(|n| n.as_element())
            .ok_or(A11yError::NotAnElement)?;

        let role = elem.get_attr("role").and_then(AriaRole::parse);
        let politeness = match elem.get_attr("aria-live").and_then(LivePoliteness::parse) {
            Some(p) => p,
            None => role.map(|r| r.implied_politeness()).unwrap_or_default(),
        };
        if politeness == LivePoliteness::Off {
            return Err(A11yError::NotALiveRegion);
        }

        Ok(Self {
            politeness,
            atomic: elem.get_attr("aria-atomic") == Some("true"),
            role: role.unwrap_or(AriaRole::Region),
        })
    }
}
