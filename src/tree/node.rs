//! Node handles, node content and the slot arena that owns attached nodes.
//!
//! A node starts life as a detached [`TreeNode`] built by the caller. Once
//! inserted into a [`Tree`](crate::Tree) its content moves into an arena
//! slot and the caller only holds a [`NodeId`].
//!
//! # Invariants
//!
//! - A slot's generation is bumped every time it is freed
//! - A `NodeId` resolves only while its slot holds the same generation
//! - Freed slots are reused through a free-list

use std::fmt;

use crate::style::Style;
use crate::surface::{Surface, Viewport, fill, print_str};

/// Generational handle to a node attached to a [`Tree`](crate::Tree).
///
/// Handles are weak: once the node is deleted the handle never resolves
/// again, even after its slot is reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

impl NodeId {
    /// Slot index inside the owning tree.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.index
    }

    /// Generation of the slot when this handle was issued.
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}

/// User data drawn on a tree row.
pub trait NodeContent {
    /// Draw into `rect`, a single row to the right of the connector glyphs.
    fn draw(&self, surface: &mut dyn Surface, rect: Viewport, selected: bool);

    /// Called exactly once when the node is destroyed, after its children.
    fn destroy(&mut self) {}
}

/// Plain text content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Label {
    text: String,
    style: Style,
    selected_style: Style,
}

impl Label {
    /// Create a label drawn with default colors, inverted when selected.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::NONE,
            selected_style: Style::inverse(),
        }
    }

    /// Set the unselected style.
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the style layered over the unselected one while selected.
    #[must_use]
    pub fn with_selected_style(mut self, style: Style) -> Self {
        self.selected_style = style;
        self
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl NodeContent for Label {
    fn draw(&self, surface: &mut dyn Surface, rect: Viewport, selected: bool) {
        let style = if selected {
            let style = self.style.merge(self.selected_style);
            fill(surface, rect, style);
            style
        } else {
            self.style
        };
        print_str(surface, rect.x1, rect.y1, rect.x2, style, &self.text);
    }
}

/// A node that is not attached to any tree yet.
///
/// Detached children can be added before insertion; the whole subtree moves
/// into the tree in order. A `TreeNode` dropped without being inserted
/// destroys its children first, then itself.
pub struct TreeNode {
    pub(crate) content: Option<Box<dyn NodeContent>>,
    pub(crate) expanded: bool,
    pub(crate) children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create an expanded node with no children.
    #[must_use]
    pub fn new(content: impl NodeContent + 'static) -> Self {
        Self::boxed(Box::new(content))
    }

    /// Create a node from already boxed content.
    #[must_use]
    pub fn boxed(content: Box<dyn NodeContent>) -> Self {
        Self {
            content: Some(content),
            expanded: true,
            children: Vec::new(),
        }
    }

    /// Set whether children are shown.
    #[must_use]
    pub fn with_expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    /// Append a detached child.
    #[must_use]
    pub fn with_child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append a detached child in place.
    pub fn add_child(&mut self, child: TreeNode) {
        self.children.push(child);
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Detached children.
    #[must_use]
    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    /// Number of nodes in this subtree, including itself.
    #[must_use]
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(TreeNode::subtree_len).sum::<usize>()
    }
}

impl fmt::Debug for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeNode")
            .field("expanded", &self.expanded)
            .field("children", &self.children)
            .finish_non_exhaustive()
    }
}

impl Drop for TreeNode {
    fn drop(&mut self) {
        self.children.clear();
        if let Some(mut content) = self.content.take() {
            content.destroy();
        }
    }
}

/// An attached node.
pub(crate) struct Entry {
    pub(crate) content: Option<Box<dyn NodeContent>>,
    pub(crate) expanded: bool,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    /// Index of the child on the selection path, or the last one visited.
    pub(crate) cursor: usize,
}

impl Entry {
    pub(crate) fn root() -> Self {
        Self {
            content: None,
            expanded: true,
            parent: None,
            children: Vec::new(),
            cursor: 0,
        }
    }

    pub(crate) fn index_of(&self, child: NodeId) -> Option<usize> {
        self.children.iter().position(|&id| id == child)
    }
}

struct Slot {
    generation: u32,
    entry: Option<Entry>,
}

/// Slot storage with generation checks and free-list reuse.
#[derive(Default)]
pub(crate) struct Arena {
    slots: Vec<Slot>,
    free_list: Vec<u32>,
}

impl Arena {
    pub(crate) fn insert(&mut self, entry: Entry) -> NodeId {
        if let Some(index) = self.free_list.pop() {
            let slot = &mut self.slots[index as usize];
            slot.entry = Some(entry);
            return NodeId {
                index,
                generation: slot.generation,
            };
        }

        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            entry: Some(entry),
        });
        NodeId {
            index,
            generation: 0,
        }
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&Entry> {
        let slot = self.slots.get(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.entry.as_ref()
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Entry> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.entry.as_mut()
    }

    /// Free a slot and hand back its entry.
    pub(crate) fn remove(&mut self, id: NodeId) -> Option<Entry> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        let entry = slot.entry.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free_list.push(id.index);
        Some(entry)
    }

    #[cfg(test)]
    pub(crate) fn free_count(&self) -> usize {
        self.free_list.len()
    }
}
