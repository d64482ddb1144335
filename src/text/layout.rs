//! Line breaking inside a viewport's horizontal span.
//!
//! [`LineLayout`] walks a sequence of glyph widths and decides where each
//! glyph lands. After every glyph it looks ahead by [`MAX_GLYPH_WIDTH`]
//! columns, so the position it reports is always one where a wide glyph
//! could still be drawn in full.

use crate::surface::Viewport;
use crate::unicode::MAX_GLYPH_WIDTH;

/// Check whether a glyph of `width` placed at column `x` must go to the
/// next line.
///
/// True for a forced break (width 0) and for a glyph that would extend past
/// `x2`. A glyph ending exactly at `x2` still fits.
#[inline]
#[must_use]
pub const fn should_wrap(x: u32, width: u8, x2: u32) -> bool {
    width == 0 || x + width as u32 > x2
}

/// Where one glyph landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    /// Column the glyph is drawn at.
    pub column: u32,
    /// 1-based line the glyph is drawn on.
    pub line: usize,
    /// Line breaks taken while placing the glyph (0, 1 or 2).
    pub breaks: usize,
}

/// Running column/line position over `[x1, x2)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineLayout {
    x1: u32,
    x2: u32,
    x: u32,
    line: usize,
}

impl LineLayout {
    /// Start at column `x1` of line 1.
    #[must_use]
    pub const fn new(x1: u32, x2: u32) -> Self {
        Self {
            x1,
            x2,
            x: x1,
            line: 1,
        }
    }

    /// Layout spanning the viewport's columns.
    #[must_use]
    pub const fn for_viewport(viewport: &Viewport) -> Self {
        Self::new(viewport.x1, viewport.x2)
    }

    /// Current column.
    #[must_use]
    pub const fn x(&self) -> u32 {
        self.x
    }

    /// Current 1-based line.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    fn wrap_if(&mut self, width: u8) -> usize {
        if should_wrap(self.x, width, self.x2) {
            self.x = self.x1;
            self.line += 1;
            1
        } else {
            0
        }
    }

    /// Place a glyph of `width` and move past it.
    pub fn advance(&mut self, width: u8) -> Step {
        let mut breaks = self.wrap_if(width);
        let column = self.x;
        let line = self.line;

        if width == 0 {
            return Step {
                column,
                line,
                breaks,
            };
        }

        self.x += u32::from(width);
        breaks += self.wrap_if(MAX_GLYPH_WIDTH);

        Step {
            column,
            line,
            breaks,
        }
    }
}
