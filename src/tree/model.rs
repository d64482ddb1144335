//! Tree ownership, selection and keyboard navigation.

use std::mem;

use crate::action::Action;
use crate::error::{Error, Result};
use crate::event::{LogLevel, emit_log};
use crate::tree::TreeEvent;
use crate::tree::node::{Arena, Entry, NodeContent, NodeId, TreeNode};
use crate::tree::render::TreeOptions;

/// Navigable, expandable tree of user content.
///
/// The tree owns every attached node. The root is invisible, always
/// expanded and cannot be deleted; its children are the top-level rows.
///
/// Every node caches a `cursor` into its own children. Along the path from
/// the root to the selection, each ancestor's cursor is the index of the
/// child on that path.
pub struct Tree {
    pub(crate) arena: Arena,
    pub(crate) root: NodeId,
    pub(crate) selected: Option<NodeId>,
    pub(crate) start_y: usize,
    pub(crate) options: TreeOptions,
    len: usize,
}

impl Tree {
    /// Create an empty tree with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(TreeOptions::default())
    }

    /// Create an empty tree with the given options.
    #[must_use]
    pub fn with_options(options: TreeOptions) -> Self {
        let mut arena = Arena::default();
        let root = arena.insert(Entry::root());
        Self {
            arena,
            root,
            selected: None,
            start_y: 0,
            options,
            len: 0,
        }
    }

    #[must_use]
    pub const fn options(&self) -> &TreeOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: TreeOptions) {
        self.options = options;
    }

    /// Handle of the invisible root.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        self.root
    }

    /// Currently selected node.
    #[must_use]
    pub const fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    /// Number of attached nodes, not counting the root.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// First visible row after the last render.
    #[must_use]
    pub const fn scroll_offset(&self) -> usize {
        self.start_y
    }

    /// Check if `id` still resolves to an attached node (or the root).
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.arena.get(id).is_some()
    }

    /// Parent of `id`; `None` for the root and for stale handles.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena.get(id)?.parent
    }

    /// Children of `id` in display order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.arena
            .get(id)
            .map_or(&[], |entry| entry.children.as_slice())
    }

    /// Whether the children of `id` are shown. False for stale handles.
    #[must_use]
    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.arena.get(id).is_some_and(|entry| entry.expanded)
    }

    #[must_use]
    pub fn content(&self, id: NodeId) -> Option<&dyn NodeContent> {
        self.arena.get(id)?.content.as_deref()
    }

    pub fn content_mut(&mut self, id: NodeId) -> Option<&mut (dyn NodeContent + 'static)> {
        self.arena.get_mut(id)?.content.as_deref_mut()
    }

    /// Dispatch a navigation or editing event.
    pub fn handle(&mut self, event: TreeEvent) -> Action {
        match event {
            TreeEvent::ToggleExpand => self.toggle_expand(),
            TreeEvent::NavigateUp => self.navigate_up(),
            TreeEvent::NavigateDown => self.navigate_down(),
            TreeEvent::InsertChild(node) => Action::from_changed(self.insert_child(node).is_ok()),
            TreeEvent::InsertSibling(node) => {
                Action::from_changed(self.insert_sibling(node).is_ok())
            }
            TreeEvent::JumpTo(id) => self.jump_to(id),
            TreeEvent::DeleteSelected => self.delete_selected(),
        }
    }

    /// Show or hide the children of the selected node.
    pub fn toggle_expand(&mut self) -> Action {
        let Some(entry) = self.selected.and_then(|id| self.arena.get_mut(id)) else {
            return Action::NoOp;
        };
        entry.expanded = !entry.expanded;
        Action::Redraw
    }

    /// Show or hide the children of `id`.
    ///
    /// Collapsing an ancestor of the selection moves the selection up to
    /// `id` so that it stays visible.
    pub fn set_expanded(&mut self, id: NodeId, expanded: bool) -> Result<()> {
        let Some(entry) = self.arena.get_mut(id) else {
            return Err(Error::StaleNode(id));
        };
        if id == self.root {
            return Ok(());
        }
        entry.expanded = expanded;

        if !expanded && self.selected.is_some_and(|sel| self.is_strict_ancestor(id, sel)) {
            self.jump_to(id);
        }
        Ok(())
    }

    /// Select the next visible node in pre-order.
    pub fn navigate_down(&mut self) -> Action {
        let Some(selected) = self.selected else {
            return Action::NoOp;
        };
        let Some(entry) = self.arena.get_mut(selected) else {
            return Action::NoOp;
        };

        if entry.expanded && !entry.children.is_empty() {
            entry.cursor = 0;
            self.selected = Some(entry.children[0]);
            return Action::Redraw;
        }

        if selected == self.last_visible(self.root) {
            return Action::NoOp;
        }

        let mut node = selected;
        while let Some(parent) = self.parent(node) {
            let Some(entry) = self.arena.get_mut(parent) else {
                break;
            };
            debug_assert_eq!(entry.children.get(entry.cursor), Some(&node));
            if entry.cursor + 1 < entry.children.len() {
                entry.cursor += 1;
                self.selected = Some(entry.children[entry.cursor]);
                return Action::Redraw;
            }
            node = parent;
        }

        Action::NoOp
    }

    /// Select the previous visible node in pre-order.
    pub fn navigate_up(&mut self) -> Action {
        let Some(selected) = self.selected else {
            return Action::NoOp;
        };
        let Some(parent) = self.parent(selected) else {
            return Action::NoOp;
        };
        let Some(entry) = self.arena.get_mut(parent) else {
            return Action::NoOp;
        };

        if entry.cursor > 0 {
            entry.cursor -= 1;
            let sibling = entry.children[entry.cursor];
            let leaf = self.descend_to_last(sibling);
            self.selected = Some(leaf);
            return Action::Redraw;
        }

        if parent != self.root {
            self.selected = Some(parent);
            return Action::Redraw;
        }

        if entry.children.first() == Some(&selected) {
            // Already at the top; scroll back to the first row
            self.start_y = 0;
            return Action::Redraw;
        }

        Action::NoOp
    }

    /// Append `node` as the last child of the selection.
    ///
    /// Without a selection the node is handed back.
    pub fn insert_child(&mut self, node: TreeNode) -> std::result::Result<NodeId, TreeNode> {
        let Some(selected) = self.selected else {
            emit_log(LogLevel::Debug, "tree insert_child rejected: nothing selected");
            return Err(node);
        };
        Ok(self.attach(selected, node))
    }

    /// Append `node` as the last sibling of the selection.
    ///
    /// Without a selection the node becomes a top-level node and is selected.
    pub fn insert_sibling(&mut self, node: TreeNode) -> std::result::Result<NodeId, TreeNode> {
        let Some(selected) = self.selected else {
            let id = self.attach(self.root, node);
            if let Some(root) = self.arena.get_mut(self.root) {
                root.cursor = root.children.len() - 1;
            }
            self.selected = Some(id);
            return Ok(id);
        };

        let parent = self.parent(selected).unwrap_or(self.root);
        Ok(self.attach(parent, node))
    }

    /// Select `id`, repairing the cached cursors along its path.
    ///
    /// Every collapsed ancestor of `id` is expanded so the node is visible,
    /// so a jump can change [`is_expanded`](Self::is_expanded) for nodes
    /// other than `id`.
    pub fn jump_to(&mut self, id: NodeId) -> Action {
        if id == self.root || !self.contains(id) {
            emit_log(LogLevel::Debug, &format!("tree jump_to ignored for {id}"));
            return Action::NoOp;
        }

        if let Some(previous) = self.selected {
            let mut node = previous;
            while let Some(parent) = self.parent(node) {
                if let Some(entry) = self.arena.get_mut(parent) {
                    entry.cursor = 0;
                }
                node = parent;
            }
        }

        let mut node = id;
        while let Some(parent) = self.parent(node) {
            let Some(entry) = self.arena.get_mut(parent) else {
                break;
            };
            if let Some(index) = entry.index_of(node) {
                entry.cursor = index;
            }
            entry.expanded = true;
            node = parent;
        }

        self.selected = Some(id);
        Action::Redraw
    }

    /// Delete the selected node and its subtree.
    pub fn delete_selected(&mut self) -> Action {
        let Some(selected) = self.selected else {
            return Action::NoOp;
        };
        let Some(parent) = self.parent(selected) else {
            return Action::NoOp;
        };
        let root = self.root;
        let Some(entry) = self.arena.get_mut(parent) else {
            return Action::NoOp;
        };

        debug_assert_eq!(entry.children.get(entry.cursor), Some(&selected));
        let index = entry.index_of(selected).unwrap_or(entry.cursor);
        entry.children.remove(index);
        entry.cursor = index;

        self.selected = if let Some(&next) = entry.children.get(index) {
            Some(next)
        } else if index > 0 {
            entry.cursor = index - 1;
            Some(entry.children[index - 1])
        } else if parent != root {
            Some(parent)
        } else {
            None
        };

        let destroyed = self.destroy_subtree(selected);
        emit_log(
            LogLevel::Debug,
            &format!("tree deleted {selected} with {destroyed} node(s)"),
        );
        Action::Redraw
    }

    /// Visible rows taken by `id` and its shown descendants.
    ///
    /// 1 for a collapsed node, 0 for a stale handle.
    #[must_use]
    pub fn extent(&self, id: NodeId) -> usize {
        let Some(entry) = self.arena.get(id) else {
            return 0;
        };
        if !entry.expanded {
            return 1;
        }
        1 + entry
            .children
            .iter()
            .map(|&child| self.extent(child))
            .sum::<usize>()
    }

    /// 1-based visible row of `id`, ignoring scroll. 0 for the root.
    #[must_use]
    pub fn position(&self, id: NodeId) -> usize {
        let mut position = 0;
        let mut node = id;
        while let Some(parent) = self.parent(node) {
            position += 1;
            for &sibling in self.children(parent) {
                if sibling == node {
                    break;
                }
                position += self.extent(sibling);
            }
            node = parent;
        }
        position
    }

    /// Rows the whole tree takes when fully scrolled through.
    #[must_use]
    pub fn visible_rows(&self) -> usize {
        self.extent(self.root) - 1
    }

    fn is_strict_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = node;
        while let Some(parent) = self.parent(current) {
            if parent == ancestor {
                return true;
            }
            current = parent;
        }
        false
    }

    /// Deepest visible last descendant, without touching cursors.
    fn last_visible(&self, id: NodeId) -> NodeId {
        let mut node = id;
        while let Some(entry) = self.arena.get(node) {
            match entry.children.last() {
                Some(&last) if entry.expanded => node = last,
                _ => break,
            }
        }
        node
    }

    /// Walk to the deepest visible last descendant, pointing cursors at it.
    fn descend_to_last(&mut self, id: NodeId) -> NodeId {
        let mut node = id;
        while let Some(entry) = self.arena.get_mut(node) {
            match entry.children.len() {
                len if len > 0 && entry.expanded => {
                    entry.cursor = len - 1;
                    node = entry.children[len - 1];
                }
                _ => break,
            }
        }
        node
    }

    /// Move a detached subtree into the arena under `parent`.
    fn attach(&mut self, parent: NodeId, mut node: TreeNode) -> NodeId {
        let children = mem::take(&mut node.children);
        let id = self.arena.insert(Entry {
            content: node.content.take(),
            expanded: node.expanded,
            parent: Some(parent),
            children: Vec::with_capacity(children.len()),
            cursor: 0,
        });
        if let Some(entry) = self.arena.get_mut(parent) {
            entry.children.push(id);
        }
        self.len += 1;

        for child in children {
            self.attach(id, child);
        }
        id
    }

    /// Free `id` and its descendants, children first. Returns the count.
    fn destroy_subtree(&mut self, id: NodeId) -> usize {
        let Some(entry) = self.arena.remove(id) else {
            return 0;
        };
        let mut destroyed = 1;
        for child in entry.children {
            destroyed += self.destroy_subtree(child);
        }
        if let Some(mut content) = entry.content {
            content.destroy();
        }
        self.len -= 1;
        destroyed
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Tree {
    fn drop(&mut self) {
        let top_level = self
            .arena
            .get_mut(self.root)
            .map(|root| mem::take(&mut root.children))
            .unwrap_or_default();
        self.selected = None;
        for id in top_level {
            self.destroy_subtree(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::node::Label;

    fn node(text: &str) -> TreeNode {
        TreeNode::new(Label::new(text))
    }

    /// root -> A -> [B, C]
    fn abc() -> (Tree, NodeId, NodeId, NodeId) {
        let mut tree = Tree::new();
        let a = tree.insert_sibling(node("A")).unwrap();
        let b = tree.insert_child(node("B")).unwrap();
        let c = tree.insert_child(node("C")).unwrap();
        (tree, a, b, c)
    }

    #[test]
    fn test_first_insert_selects() {
        let mut tree = Tree::new();
        assert!(tree.is_empty());
        assert!(tree.insert_child(node("x")).is_err());
        let a = tree.insert_sibling(node("A")).unwrap();
        assert_eq!(tree.selected(), Some(a));
        assert_eq!(tree.parent(a), Some(tree.root()));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_navigation_abc() {
        let (mut tree, a, b, c) = abc();
        assert_eq!(tree.navigate_down(), Action::Redraw);
        assert_eq!(tree.selected(), Some(b));
        assert_eq!(tree.navigate_down(), Action::Redraw);
        assert_eq!(tree.selected(), Some(c));
        assert_eq!(tree.navigate_down(), Action::NoOp);
        assert_eq!(tree.selected(), Some(c));

        assert_eq!(tree.navigate_up(), Action::Redraw);
        assert_eq!(tree.selected(), Some(b));
        assert_eq!(tree.navigate_up(), Action::Redraw);
        assert_eq!(tree.selected(), Some(a));
        assert_eq!(tree.navigate_up(), Action::Redraw);
        assert_eq!(tree.selected(), Some(a));
    }

    #[test]
    fn test_navigate_up_enters_last_leaf() {
        let mut tree = Tree::new();
        let a = tree.insert_sibling(node("A")).unwrap();
        let a1 = tree.insert_child(node("A1")).unwrap();
        let d = tree.insert_sibling(node("D")).unwrap();
        tree.jump_to(a1);
        let a2 = tree.insert_child(node("A2")).unwrap();
        tree.jump_to(d);

        assert_eq!(tree.navigate_up(), Action::Redraw);
        assert_eq!(tree.selected(), Some(a2));
        assert_eq!(tree.navigate_up(), Action::Redraw);
        assert_eq!(tree.selected(), Some(a1));
        assert_eq!(tree.navigate_up(), Action::Redraw);
        assert_eq!(tree.selected(), Some(a));
    }

    #[test]
    fn test_toggle_expand_hides_children() {
        let (mut tree, a, _, _) = abc();
        assert_eq!(tree.visible_rows(), 3);
        assert_eq!(tree.toggle_expand(), Action::Redraw);
        assert!(!tree.is_expanded(a));
        assert_eq!(tree.visible_rows(), 1);
        assert_eq!(tree.navigate_down(), Action::NoOp);
        tree.toggle_expand();
        assert!(tree.is_expanded(a));
    }

    #[test]
    fn test_heights() {
        let (tree, a, b, c) = abc();
        assert_eq!(tree.extent(a), 3);
        assert_eq!(tree.extent(b), 1);
        assert_eq!(tree.position(a), 1);
        assert_eq!(tree.position(b), 2);
        assert_eq!(tree.position(c), 3);
        assert_eq!(tree.position(tree.root()), 0);
    }

    #[test]
    fn test_delete_reselects() {
        let (mut tree, a, b, c) = abc();
        tree.jump_to(b);
        assert_eq!(tree.delete_selected(), Action::Redraw);
        assert_eq!(tree.selected(), Some(c));
        assert!(!tree.contains(b));

        assert_eq!(tree.delete_selected(), Action::Redraw);
        assert_eq!(tree.selected(), Some(a));
        assert_eq!(tree.delete_selected(), Action::Redraw);
        assert_eq!(tree.selected(), None);
        assert!(tree.is_empty());
        assert_eq!(tree.delete_selected(), Action::NoOp);
    }

    #[test]
    fn test_delete_last_sibling_selects_previous() {
        let (mut tree, _, b, c) = abc();
        tree.jump_to(c);
        tree.delete_selected();
        assert_eq!(tree.selected(), Some(b));
        assert_eq!(tree.navigate_down(), Action::NoOp);
    }

    #[test]
    fn test_jump_to_stale() {
        let (mut tree, _, b, c) = abc();
        tree.jump_to(b);
        tree.delete_selected();
        assert_eq!(tree.jump_to(b), Action::NoOp);
        assert_eq!(tree.jump_to(tree.root()), Action::NoOp);
        assert_eq!(tree.selected(), Some(c));
    }

    #[test]
    fn test_set_expanded_moves_hidden_selection() {
        let (mut tree, a, _, c) = abc();
        tree.jump_to(c);
        tree.set_expanded(a, false).unwrap();
        assert_eq!(tree.selected(), Some(a));

        tree.delete_selected();
        assert_eq!(tree.set_expanded(a, true), Err(Error::StaleNode(a)));
    }

    #[test]
    fn test_handle_dispatch() {
        let mut tree = Tree::new();
        assert_eq!(tree.handle(TreeEvent::InsertChild(node("x"))), Action::NoOp);
        assert_eq!(tree.handle(TreeEvent::InsertSibling(node("A"))), Action::Redraw);
        assert_eq!(tree.handle(TreeEvent::InsertChild(node("B"))), Action::Redraw);
        assert_eq!(tree.handle(TreeEvent::NavigateDown), Action::Redraw);
        assert_eq!(tree.handle(TreeEvent::DeleteSelected), Action::Redraw);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_detached_subtree_insert() {
        let mut tree = Tree::new();
        let a = tree
            .insert_sibling(node("A").with_child(node("A1")).with_child(node("A2").with_expanded(false)))
            .unwrap();
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.children(a).len(), 2);
        assert!(!tree.is_expanded(tree.children(a)[1]));
    }
}
