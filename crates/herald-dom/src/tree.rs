//! DOM Tree (arena-based allocation)

use crate::{DomError, DomResult, Node, NodeData, NodeId};

/// Arena-based DOM tree
///
/// Nodes are allocated into a flat arena and linked by `NodeId`. Removed
/// nodes leave a tombstone in their slot; slots are never reused, so a
/// stale `NodeId` can never alias a newer node.
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a new tree containing only the document root
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
        }
    }

    /// Document root ID
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached element node
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.alloc(Node::element(tag))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.alloc(Node::text(content))
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        let node = self.nodes.get(id.0 as usize)?;
        match node.data {
            NodeData::Removed => None,
            _ => Some(node),
        }
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let node = self.nodes.get_mut(id.0 as usize)?;
        match node.data {
            NodeData::Removed => None,
            _ => Some(node),
        }
    }

    /// Number of allocated arena slots (tombstones included)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append a child as the last child of `parent`
    ///
    /// The child is detached from its current parent first, mirroring DOM
    /// `appendChild` move semantics.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        if self.get(parent).is_none() || self.get(child).is_none() {
            return Err(DomError::NotFound);
        }

        // Appending a node into its own subtree would create a cycle
        let mut cursor = parent;
        while cursor.is_valid() {
            if cursor == child {
                return Err(DomError::HierarchyRequest);
            }
            cursor = self.get(cursor).map(|n| n.parent).unwrap_or(NodeId::NONE);
        }

        self.detach(child)?;

        let prev = self.nodes[parent.0 as usize].last_child;
        {
            let c = &mut self.nodes[child.0 as usize];
            c.parent = parent;
            c.prev_sibling = prev;
            c.next_sibling = NodeId::NONE;
        }
        if prev.is_valid() {
            self.nodes[prev.0 as usize].next_sibling = child;
        } else {
            self.nodes[parent.0 as usize].first_child = child;
        }
        self.nodes[parent.0 as usize].last_child = child;

        tracing::trace!(parent = parent.0, child = child.0, "append_child");
        Ok(child)
    }

    /// Unlink a node from its parent, keeping its subtree intact
    ///
    /// Detaching an already-detached node is `Ok`.
    pub fn detach(&mut self, node: NodeId) -> DomResult<()> {
        let (parent, prev, next) = {
            let n = self.get(node).ok_or(DomError::NotFound)?;
            (n.parent, n.prev_sibling, n.next_sibling)
        };
        if !parent.is_valid() {
            return Ok(());
        }

        if prev.is_valid() {
            self.nodes[prev.0 as usize].next_sibling = next;
        } else {
            self.nodes[parent.0 as usize].first_child = next;
        }
        if next.is_valid() {
            self.nodes[next.0 as usize].prev_sibling = prev;
        } else {
            self.nodes[parent.0 as usize].last_child = prev;
        }

        let n = &mut self.nodes[node.0 as usize];
        n.parent = NodeId::NONE;
        n.prev_sibling = NodeId::NONE;
        n.next_sibling = NodeId::NONE;
        Ok(())
    }

    /// Detach a node and tombstone it together with its subtree
    pub fn remove(&mut self, node: NodeId) -> DomResult<()> {
        self.detach(node)?;
        self.tombstone(node);
        tracing::trace!(node = node.0, "remove");
        Ok(())
    }

    /// Remove a child node, validating the parent/child relation
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        if self.get(parent).is_none() {
            return Err(DomError::NotFound);
        }
        let child_parent = self.get(child).ok_or(DomError::NotFound)?.parent;
        if child_parent != parent {
            return Err(DomError::NotAChild);
        }
        self.remove(child)?;
        Ok(child)
    }

    fn tombstone(&mut self, node: NodeId) {
        let mut child = self.nodes[node.0 as usize].first_child;
        while child.is_valid() {
            let next = self.nodes[child.0 as usize].next_sibling;
            self.tombstone(child);
            child = next;
        }
        let n = &mut self.nodes[node.0 as usize];
        n.data = NodeData::Removed;
        n.parent = NodeId::NONE;
        n.first_child = NodeId::NONE;
        n.last_child = NodeId::NONE;
        n.prev_sibling = NodeId::NONE;
        n.next_sibling = NodeId::NONE;
    }

    /// Iterate over the children of a node
    pub fn children(&self, parent: NodeId) -> Children<'_> {
        let first = self
            .get(parent)
            .map(|n| n.first_child)
            .unwrap_or(NodeId::NONE);
        Children { tree: self, next: first }
    }

    /// Set an attribute on an element node
    pub fn set_attr(&mut self, node: NodeId, name: &str, value: &str) -> DomResult<()> {
        let n = self.get_mut(node).ok_or(DomError::NotFound)?;
        let elem = n.as_element_mut().ok_or(DomError::InvalidNodeType)?;
        elem.set_attr(name, value);
        Ok(())
    }

    /// Get an attribute value from an element node
    pub fn get_attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.get(node)?.as_element()?.get_attr(name)
    }

    /// Get the tag name of an element node
    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.get(node)?.as_element().map(|e| e.tag.as_str())
    }

    /// Replace the content of a text node
    pub fn set_text(&mut self, node: NodeId, content: &str) -> DomResult<()> {
        let n = self.get_mut(node).ok_or(DomError::NotFound)?;
        match &mut n.data {
            NodeData::Text(t) => {
                t.content = content.to_string();
                Ok(())
            }
            _ => Err(DomError::InvalidNodeType),
        }
    }

    /// Concatenate all descendant text in tree order
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(node, &mut out);
        out
    }

    fn collect_text(&self, node: NodeId, out: &mut String) {
        let Some(n) = self.get(node) else { return };
        if let Some(text) = n.as_text() {
            out.push_str(text);
            return;
        }
        let mut child = n.first_child;
        while child.is_valid() {
            self.collect_text(child, out);
            child = self.get(child).map(|c| c.next_sibling).unwrap_or(NodeId::NONE);
        }
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the children of a node
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.next.is_valid() {
            return None;
        }
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_children_order() {
        let mut tree = DomTree::new();
        let parent = tree.create_element("div");
        tree.append_child(tree.root(), parent).unwrap();

        let a = tree.create_element("span");
        let b = tree.create_text("hello");
        tree.append_child(parent, a).unwrap();
        tree.append_child(parent, b).unwrap();

        let ids: Vec<NodeId> = tree.children(parent).map(|(id, _)| id).collect();
        assert_eq!(ids, vec![a, b]);
        assert_eq!(tree.get(a).unwrap().parent, parent);
    }

    #[test]
    fn test_append_into_own_subtree_fails() {
        let mut tree = DomTree::new();
        let outer = tree.create_element("div");
        let inner = tree.create_element("div");
        tree.append_child(tree.root(), outer).unwrap();
        tree.append_child(outer, inner).unwrap();

        assert_eq!(
            tree.append_child(inner, outer),
            Err(DomError::HierarchyRequest)
        );
        assert_eq!(tree.append_child(outer, outer), Err(DomError::HierarchyRequest));
    }

    #[test]
    fn test_detach_keeps_subtree() {
        let mut tree = DomTree::new();
        let parent = tree.create_element("div");
        let child = tree.create_element("span");
        let text = tree.create_text("x");
        tree.append_child(tree.root(), parent).unwrap();
        tree.append_child(parent, child).unwrap();
        tree.append_child(child, text).unwrap();

        tree.detach(child).unwrap();
        assert_eq!(tree.children(parent).count(), 0);
        assert_eq!(tree.get(child).unwrap().parent, NodeId::NONE);
        assert_eq!(tree.text_content(child), "x");

        // Detaching again is a no-op
        assert!(tree.detach(child).is_ok());
    }

    #[test]
    fn test_remove_tombstones_subtree() {
        let mut tree = DomTree::new();
        let parent = tree.create_element("div");
        let child = tree.create_text("gone");
        tree.append_child(tree.root(), parent).unwrap();
        tree.append_child(parent, child).unwrap();

        tree.remove(parent).unwrap();
        assert!(tree.get(parent).is_none());
        assert!(tree.get(child).is_none());
        assert_eq!(tree.remove(parent), Err(DomError::NotFound));
    }

    #[test]
    fn test_remove_child_validates_relation() {
        let mut tree = DomTree::new();
        let a = tree.create_element("div");
        let b = tree.create_element("div");
        let child = tree.create_element("span");
        tree.append_child(tree.root(), a).unwrap();
        tree.append_child(tree.root(), b).unwrap();
        tree.append_child(a, child).unwrap();

        assert_eq!(tree.remove_child(b, child), Err(DomError::NotAChild));
        assert_eq!(tree.remove_child(a, child), Ok(child));
        assert!(tree.get(child).is_none());
    }

    #[test]
    fn test_text_content_concatenates_in_order() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        let hello = tree.create_text("Hello, ");
        let span = tree.create_element("span");
        let world = tree.create_text("world");
        tree.append_child(tree.root(), div).unwrap();
        tree.append_child(div, hello).unwrap();
        tree.append_child(div, span).unwrap();
        tree.append_child(span, world).unwrap();

        assert_eq!(tree.text_content(div), "Hello, world");
    }

    #[test]
    fn test_set_text_and_attrs() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        let text = tree.create_text("old");

        tree.set_attr(div, "aria-live", "polite").unwrap();
        assert_eq!(tree.get_attr(div, "aria-live"), Some("polite"));
        assert_eq!(tree.set_attr(text, "x", "y"), Err(DomError::InvalidNodeType));

        tree.set_text(text, "new").unwrap();
        assert_eq!(tree.get(text).unwrap().as_text(), Some("new"));
        assert_eq!(tree.set_text(div, "nope"), Err(DomError::InvalidNodeType));
    }
}
