//! Grid cell type representing a single column position.
//!
//! A wide glyph occupies two cells: the glyph itself and a
//! [`CellContent::Continuation`] marker in the cell to its right.

use crate::style::Style;
use crate::unicode::sanitize;

/// Content of a grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CellContent {
    /// Single codepoint (display width 1-2).
    Char(char),
    /// Empty/cleared cell.
    #[default]
    Empty,
    /// Continuation of a wide character from the previous cell.
    Continuation,
}

impl CellContent {
    /// Get the display width of this content.
    #[must_use]
    pub fn display_width(&self) -> usize {
        match self {
            Self::Char(c) => usize::from(sanitize(*c).width),
            Self::Empty => 1,
            Self::Continuation => 0,
        }
    }

    /// Check if this is a continuation cell.
    #[must_use]
    pub fn is_continuation(&self) -> bool {
        matches!(self, Self::Continuation)
    }

    /// Check if this is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Get the character if this is a single char.
    #[must_use]
    pub fn as_char(&self) -> Option<char> {
        match self {
            Self::Char(c) => Some(*c),
            _ => None,
        }
    }
}

/// A single grid cell with content and styling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    /// The character content.
    pub content: CellContent,
    /// Foreground/background pair.
    pub style: Style,
}

impl Cell {
    /// Create a new cell with a single character.
    #[must_use]
    pub const fn new(ch: char, style: Style) -> Self {
        Self {
            content: CellContent::Char(ch),
            style,
        }
    }

    /// Create a cleared/empty cell with the specified style.
    #[must_use]
    pub const fn clear(style: Style) -> Self {
        Self {
            content: CellContent::Empty,
            style,
        }
    }

    /// Create a continuation cell (placeholder for wide characters).
    #[must_use]
    pub const fn continuation(style: Style) -> Self {
        Self {
            content: CellContent::Continuation,
            style,
        }
    }

    /// Get the display width of this cell.
    #[must_use]
    pub fn display_width(&self) -> usize {
        self.content.display_width()
    }

    /// Check if this is a continuation cell.
    #[must_use]
    pub fn is_continuation(&self) -> bool {
        self.content.is_continuation()
    }

    /// Check if this cell is empty/cleared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
