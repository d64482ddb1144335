//! Fuzz target for tree editing, navigation and rendering.
//!
//! Applies arbitrary tree events, jumping to handles that may be stale, and
//! checks that the selection stays reachable.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use termwidgets::{CellGrid, Label, NodeId, Tree, TreeEvent, TreeNode, Viewport};

#[derive(Arbitrary, Debug)]
enum Op {
    Toggle,
    Up,
    Down,
    InsertChild { children: u8 },
    InsertSibling { children: u8 },
    Delete,
    Jump(u16),
    Render { width: u8, height: u8 },
}

fn node(children: u8) -> TreeNode {
    let mut node = TreeNode::new(Label::new("node"));
    for _ in 0..children % 8 {
        node.add_child(TreeNode::new(Label::new("leaf")));
    }
    node
}

fuzz_target!(|ops: Vec<Op>| {
    let mut tree = Tree::new();
    let mut handles: Vec<NodeId> = Vec::new();

    for op in ops.into_iter().take(2048) {
        match op {
            Op::Toggle => {
                tree.handle(TreeEvent::ToggleExpand);
            }
            Op::Up => {
                tree.handle(TreeEvent::NavigateUp);
            }
            Op::Down => {
                tree.handle(TreeEvent::NavigateDown);
            }
            Op::InsertChild { children } => handles.extend(tree.insert_child(node(children)).ok()),
            Op::InsertSibling { children } => {
                handles.extend(tree.insert_sibling(node(children)).ok())
            }
            Op::Delete => {
                tree.handle(TreeEvent::DeleteSelected);
            }
            Op::Jump(index) => {
                if !handles.is_empty() {
                    let id = handles[usize::from(index) % handles.len()];
                    tree.handle(TreeEvent::JumpTo(id));
                }
            }
            Op::Render { width, height } => {
                let mut grid = CellGrid::new(u32::from(width % 64), u32::from(height % 32));
                let vp = Viewport::full(&grid);
                tree.render(&mut grid, vp);
            }
        }

        if let Some(selected) = tree.selected() {
            assert!(tree.contains(selected));
            assert!(tree.position(selected) >= 1);
        } else {
            assert!(tree.is_empty());
        }
    }
});
