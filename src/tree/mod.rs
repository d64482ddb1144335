//! Expandable tree view with keyboard navigation.
//!
//! Build nodes detached with [`TreeNode`], insert them relative to the
//! selection, and render with [`Tree::render`]. Nodes are owned by the
//! [`Tree`]; callers keep [`NodeId`] handles that stop resolving once the
//! node is deleted.
//!
//! # Examples
//!
//! ```
//! use termwidgets::{Action, CellGrid, Label, Tree, TreeEvent, TreeNode, Viewport};
//!
//! let mut tree = Tree::new();
//! tree.handle(TreeEvent::InsertSibling(TreeNode::new(Label::new("fruit"))));
//! tree.handle(TreeEvent::InsertChild(TreeNode::new(Label::new("apple"))));
//! tree.handle(TreeEvent::InsertChild(TreeNode::new(Label::new("pear"))));
//!
//! assert_eq!(tree.handle(TreeEvent::NavigateDown), Action::Redraw);
//!
//! let mut grid = CellGrid::new(16, 3);
//! let vp = Viewport::full(&grid);
//! tree.render(&mut grid, vp);
//! assert_eq!(grid.to_text(), "fruit\n├──apple\n└──pear");
//! ```

mod model;
mod node;
mod render;

pub use model::Tree;
pub use node::{Label, NodeContent, NodeId, TreeNode};
pub use render::{TreeGlyphs, TreeOptions};

/// Events understood by [`Tree::handle`].
#[derive(Debug)]
pub enum TreeEvent {
    /// Show or hide the selection's children.
    ToggleExpand,
    NavigateUp,
    NavigateDown,
    /// Append under the selection. Dropped (and destroyed) when rejected.
    InsertChild(TreeNode),
    /// Append after the selection's last sibling.
    InsertSibling(TreeNode),
    JumpTo(NodeId),
    /// Delete the selection and its subtree.
    DeleteSelected,
}
