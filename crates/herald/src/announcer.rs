//! Announcement Controller
//!
//! Owns the live-region mount: one container element attached to the
//! document body, plus the render root bound to it. Hosts wire
//! [`Announcer::announce`] to focus/mouseenter handlers and
//! [`Announcer::clear`] to blur/mouseleave handlers.

use herald_dom::{Document, DomResult, NodeId};

use crate::config::AnnouncerConfig;
use crate::region::Region;

/// Render root bound to a container element
///
/// Owns the region subtree rendered inside the container. The first render
/// creates the region element; later renders update its text in place, so
/// the element assistive technology watches keeps its identity.
#[derive(Debug)]
struct RenderRoot {
    container: NodeId,
    rendered: Option<NodeId>,
}

impl RenderRoot {
    fn new(container: NodeId) -> Self {
        Self {
            container,
            rendered: None,
        }
    }

    fn render(&mut self, doc: &mut Document, region: &Region, config: &AnnouncerConfig) -> DomResult<()> {
        let tree = doc.tree_mut();
        match self.rendered {
            Some(node) if tree.get(node).is_some() => {
                let text = tree.children(node).next().map(|(id, _)| id);
                match text {
                    Some(text) => tree.set_text(text, &region.content)?,
                    None => {
                        let text = tree.create_text(&region.content);
                        tree.append_child(node, text)?;
                    }
                }
            }
            _ => {
                let node = region.render_with(tree, &config.live_region(), &config.hidden_class)?;
                tree.append_child(self.container, node)?;
                self.rendered = Some(node);
            }
        }
        Ok(())
    }

    /// Remove the rendered subtree, tolerating external removal
    fn unmount(&mut self, doc: &mut Document) {
        if let Some(old) = self.rendered.take() {
            if let Err(err) = doc.tree_mut().remove_child(self.container, old) {
                tracing::debug!(%err, "rendered region already gone");
            }
        }
    }
}

/// The exclusive-owned mount pair: container element + render root
#[derive(Debug)]
struct Mount {
    container: NodeId,
    root: RenderRoot,
}

/// Announcement controller
///
/// Two states: inactive (no mount) and active (owns exactly one container
/// with a bound render root). Content updates while active re-render the
/// region directly; updates while inactive are kept and rendered on the
/// next [`mount`](Self::mount).
#[derive(Debug)]
pub struct Announcer {
    config: AnnouncerConfig,
    /// Current announcement text; empty = no announcement
    content: String,
    mount: Option<Mount>,
}

impl Announcer {
    pub fn new() -> Self {
        Self::with_config(AnnouncerConfig::default())
    }

    pub fn with_config(config: AnnouncerConfig) -> Self {
        Self {
            config,
            content: String::new(),
            mount: None,
        }
    }

    /// Check if the announcer currently owns a mounted container
    pub fn is_active(&self) -> bool {
        self.mount.is_some()
    }

    /// Current announcement text (empty = no announcement)
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The mounted container element, while active
    pub fn container(&self) -> Option<NodeId> {
        self.mount.as_ref().map(|m| m.container)
    }

    /// Activate: create the container, attach it to the body, bind a
    /// render root to it
    ///
    /// Non-empty content set before activation renders immediately, so
    /// announcements are never lost to ordering. Mounting an already
    /// active announcer is a no-op; the single container is kept.
    pub fn mount(&mut self, doc: &mut Document) {
        if self.mount.is_some() {
            tracing::debug!("announcer already mounted, skipping");
            return;
        }

        let body = doc.body();
        let tree = doc.tree_mut();
        let container = tree.create_element("div");
        if let Err(err) = tree.set_attr(container, "id", &self.config.container_id) {
            tracing::warn!(%err, "failed to tag announcement container");
            return;
        }
        if let Err(err) = tree.append_child(body, container) {
            tracing::warn!(%err, "failed to attach announcement container");
            return;
        }
        tracing::debug!(id = %self.config.container_id, "announcement container mounted");

        self.mount = Some(Mount {
            container,
            root: RenderRoot::new(container),
        });
        if !self.content.is_empty() {
            self.render(doc);
        }
    }

    /// Set the announcement content (focus/hover edge)
    ///
    /// `None` sets the empty string. While active, a changed non-empty
    /// value re-renders the region; an empty value only updates state, so
    /// the region keeps its last rendered text.
    pub fn announce(&mut self, doc: &mut Document, content: Option<&str>) {
        self.set_content(doc, content.unwrap_or(""));
    }

    /// Reset the announcement content (blur/leave edge)
    ///
    /// Same mechanism as [`announce`](Self::announce): the state becomes
    /// the given value or the empty string.
    pub fn clear(&mut self, doc: &mut Document, content: Option<&str>) {
        self.set_content(doc, content.unwrap_or(""));
    }

    fn set_content(&mut self, doc: &mut Document, content: &str) {
        if content == self.content {
            return;
        }
        self.content = content.to_string();

        if self.content.is_empty() {
            tracing::trace!("empty announcement, render skipped");
            return;
        }
        if self.mount.is_none() {
            tracing::trace!("announcer inactive, content kept for next mount");
            return;
        }
        self.render(doc);
    }

    fn render(&mut self, doc: &mut Document) {
        let Some(mount) = self.mount.as_mut() else { return };
        let region = Region::new(self.content.as_str());
        if let Err(err) = mount.root.render(doc, &region, &self.config) {
            tracing::warn!(%err, "announcement render failed");
        } else {
            tracing::debug!(content = %self.content, "announcement rendered");
        }
    }

    /// Deactivate: unmount the render root, then detach and drop the
    /// container
    ///
    /// Both steps are best-effort; a node that is already gone is logged
    /// and ignored. Unmounting an inactive announcer is a no-op, so
    /// teardown runs at most once per activation.
    pub fn unmount(&mut self, doc: &mut Document) {
        let Some(mut mount) = self.mount.take() else {
            tracing::debug!("announcer not mounted, nothing to unmount");
            return;
        };

        mount.root.unmount(doc);
        let body = doc.body();
        if let Err(err) = doc.tree_mut().remove_child(body, mount.container) {
            tracing::debug!(%err, "announcement container already removed");
        }
        tracing::debug!("announcement container unmounted");
    }
}

impl Default for Announcer {
    fn default() -> Self {
        Self::new()
    }
}
