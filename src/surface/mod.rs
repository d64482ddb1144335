//! Drawing surfaces the widgets render into.
//!
//! Widgets never talk to a terminal directly. They write cells and place a
//! cursor through the [`Surface`] trait, confined to a [`Viewport`]. The
//! host decides what a surface is; [`CellGrid`] is the in-memory one used
//! for composition and tests.
//!
//! # Examples
//!
//! ```
//! use termwidgets::{CellGrid, Style, Surface, Viewport};
//! use termwidgets::surface::print_str;
//!
//! let mut grid = CellGrid::new(20, 2);
//! let vp = Viewport::new(&grid, 2, 20, 0, 2);
//! print_str(&mut grid, vp.x1, vp.y1, vp.x2, Style::NONE, "Hello");
//! assert_eq!(grid.row_text(0), "  Hello");
//! ```

mod drawing;
mod viewport;

pub use drawing::{fill, pad_center, print_str};
pub use viewport::Viewport;

use crate::cell::{Cell, CellContent};
use crate::style::Style;
use crate::unicode::sanitize;

/// Something a widget can draw on.
///
/// Coordinates are absolute cell positions. Implementations ignore writes
/// outside of `width() x height()`.
pub trait Surface {
    /// Write one codepoint with a style. Wide glyphs cover `x` and `x + 1`.
    fn set_cell(&mut self, x: u32, y: u32, ch: char, style: Style);

    /// Place the text cursor.
    fn set_cursor(&mut self, x: u32, y: u32);

    /// Width in columns.
    fn width(&self) -> u32;

    /// Height in rows.
    fn height(&self) -> u32;
}

/// Plain in-memory cell grid.
#[derive(Clone, Debug)]
pub struct CellGrid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
    cursor: Option<(u32, u32)>,
}

impl CellGrid {
    /// Create a cleared grid.
    ///
    /// Uses saturating multiplication so huge dimensions cannot overflow.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize).saturating_mul(height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
            cursor: None,
        }
    }

    #[inline]
    fn cell_index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize)
            .checked_mul(self.width as usize)?
            .checked_add(x as usize)?;
        (idx < self.cells.len()).then_some(idx)
    }

    /// Get cell at position.
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<&Cell> {
        self.cell_index(x, y).map(|idx| &self.cells[idx])
    }

    /// Last cursor position a widget placed, if any.
    #[must_use]
    pub const fn cursor(&self) -> Option<(u32, u32)> {
        self.cursor
    }

    /// Clear every cell and forget the cursor.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
        self.cursor = None;
    }

    /// Resize the grid, clearing contents.
    pub fn resize(&mut self, width: u32, height: u32) {
        *self = Self::new(width, height);
    }

    /// Write a cell, repairing any wide glyph it splits.
    fn put(&mut self, x: u32, y: u32, cell: Cell) {
        let Some(idx) = self.cell_index(x, y) else {
            return;
        };

        match self.cells[idx].content {
            CellContent::Continuation if x > 0 => {
                if let Some(head) = self.cell_index(x - 1, y) {
                    self.cells[head] = Cell::clear(self.cells[head].style);
                }
            }
            CellContent::Char(old) if sanitize(old).width == 2 => {
                if let Some(tail) = self.cell_index(x + 1, y) {
                    if self.cells[tail].is_continuation() {
                        self.cells[tail] = Cell::clear(self.cells[tail].style);
                    }
                }
            }
            _ => {}
        }

        self.cells[idx] = cell;
    }

    /// Text of row `y` with trailing blanks removed.
    ///
    /// Empty cells read as spaces; continuation cells are skipped.
    #[must_use]
    pub fn row_text(&self, y: u32) -> String {
        let mut out = String::new();
        for x in 0..self.width {
            match self.get(x, y).map(|cell| cell.content) {
                Some(CellContent::Char(ch)) => out.push(ch),
                Some(CellContent::Empty) => out.push(' '),
                Some(CellContent::Continuation) | None => {}
            }
        }
        out.truncate(out.trim_end_matches(' ').len());
        out
    }

    /// Every row joined with newlines.
    #[must_use]
    pub fn to_text(&self) -> String {
        (0..self.height)
            .map(|y| self.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Surface for CellGrid {
    fn set_cell(&mut self, x: u32, y: u32, ch: char, style: Style) {
        let glyph = sanitize(ch);
        if glyph.is_break() {
            return;
        }

        self.put(x, y, Cell::new(glyph.ch, style));
        if glyph.width == 2 {
            self.put(x + 1, y, Cell::continuation(style));
        }
    }

    fn set_cursor(&mut self, x: u32, y: u32) {
        self.cursor = Some((x, y));
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

impl Default for CellGrid {
    fn default() -> Self {
        Self::new(80, 24)
    }
}
