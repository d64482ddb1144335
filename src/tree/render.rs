//! Tree rendering with connector glyphs and scroll-into-view.

use crate::scroll::reflow;
use crate::style::Style;
use crate::surface::{Surface, Viewport, print_str};
use crate::tree::model::Tree;
use crate::tree::node::NodeId;
use crate::unicode::str_width;

/// Connector glyphs drawn in front of nested rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TreeGlyphs {
    /// In front of a node that has a later sibling.
    pub branch: &'static str,
    /// In front of a parent's last child.
    pub last: &'static str,
    /// Below a branch, beside the rows of its children.
    pub continuation: &'static str,
}

impl TreeGlyphs {
    /// Box-drawing connectors.
    pub const UNICODE: Self = Self {
        branch: "├──",
        last: "└──",
        continuation: "│",
    };

    /// Connectors for terminals without box-drawing glyphs.
    #[must_use]
    pub const fn ascii() -> Self {
        Self {
            branch: "|--",
            last: "`--",
            continuation: "|",
        }
    }

    /// Columns a nesting level takes.
    #[must_use]
    pub fn indent(&self) -> u32 {
        str_width(self.branch).max(str_width(self.last)) as u32
    }
}

impl Default for TreeGlyphs {
    fn default() -> Self {
        Self::UNICODE
    }
}

/// Tree rendering configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TreeOptions {
    pub glyphs: TreeGlyphs,
    /// Style of the connector glyphs.
    pub connector_style: Style,
}

impl TreeOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the connector glyphs.
    #[must_use]
    pub const fn glyphs(mut self, glyphs: TreeGlyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Set the connector style.
    #[must_use]
    pub const fn connector_style(mut self, style: Style) -> Self {
        self.connector_style = style;
        self
    }
}

/// State of one render pass.
struct Walk<'a> {
    surface: &'a mut dyn Surface,
    viewport: Viewport,
    selected: NodeId,
    start_y: usize,
    /// Non-root nodes visited so far, painted or not.
    skipped: usize,
    indent: u32,
}

impl Tree {
    /// Draw the visible rows into `viewport`, scrolled to the selection.
    ///
    /// Nothing is drawn without a selection or into an empty viewport.
    pub fn render(&mut self, surface: &mut dyn Surface, viewport: Viewport) {
        let Some(selected) = self.selected else {
            return;
        };
        let viewport = viewport.clip_to(&*surface);
        if viewport.is_empty() {
            return;
        }

        let target = self.position(selected);
        debug_assert!(target > 0, "selection {selected} is not reachable");
        self.start_y = reflow(
            self.start_y,
            target,
            self.visible_rows(),
            viewport.height() as usize,
        );

        let mut walk = Walk {
            surface,
            viewport,
            selected,
            start_y: self.start_y,
            skipped: 0,
            indent: self.options.glyphs.indent(),
        };
        self.paint(&mut walk, self.root, viewport.x1, viewport.y1);
    }

    /// Paint `id` and its shown descendants from row `y`. Returns the next
    /// free row.
    fn paint(&self, walk: &mut Walk<'_>, id: NodeId, x: u32, mut y: u32) -> u32 {
        debug_assert!(walk.viewport.contains(x, y));
        let Some(entry) = self.arena.get(id) else {
            return y;
        };

        let nested = entry.parent.is_some_and(|parent| parent != self.root);
        let last = entry
            .parent
            .and_then(|parent| self.children(parent).last().copied())
            == Some(id);
        let indent = if nested { walk.indent } else { 0 };
        let glyphs = self.options.glyphs;
        let style = self.options.connector_style;

        if entry.parent.is_some() {
            let visible = walk.skipped >= walk.start_y;
            walk.skipped += 1;

            if visible {
                if nested {
                    let glyph = if last { glyphs.last } else { glyphs.branch };
                    print_str(&mut *walk.surface, x, y, walk.viewport.x2, style, glyph);
                }
                let rect = walk.viewport.row(x + indent, y);
                if let Some(content) = entry.content.as_deref() {
                    if !rect.is_empty() {
                        content.draw(&mut *walk.surface, rect, id == walk.selected);
                    }
                }
                y += 1;
            }
        }

        if !entry.expanded || x + indent >= walk.viewport.x2 {
            return y;
        }

        for &child in &entry.children {
            if y >= walk.viewport.y2 {
                break;
            }
            let next = self.paint(walk, child, x + indent, y);
            if nested && !last {
                for row in y..next {
                    print_str(
                        &mut *walk.surface,
                        x,
                        row,
                        walk.viewport.x2,
                        style,
                        glyphs.continuation,
                    );
                }
            }
            y = next;
        }

        y
    }
}
