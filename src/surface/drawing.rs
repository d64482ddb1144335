//! String drawing helpers shared by the widgets and node content.

use crate::style::Style;
use crate::surface::{Surface, Viewport};
use crate::text::should_wrap;
use crate::unicode::sanitize;

/// Print `text` on row `y` starting at column `x`, stopping before any
/// glyph that would extend past `max_x` and at the first newline.
///
/// Returns the number of columns written.
pub fn print_str<S: Surface + ?Sized>(
    surface: &mut S,
    x: u32,
    y: u32,
    max_x: u32,
    style: Style,
    text: &str,
) -> u32 {
    let mut col = x;

    for ch in text.chars() {
        let glyph = sanitize(ch);
        if should_wrap(col, glyph.width, max_x) {
            break;
        }
        surface.set_cell(col, y, glyph.ch, style);
        col += u32::from(glyph.width);
    }

    col - x
}

/// Fill every cell of `rect` with a blank in `style`.
pub fn fill<S: Surface + ?Sized>(surface: &mut S, rect: Viewport, style: Style) {
    for y in rect.y1..rect.y2 {
        for x in rect.x1..rect.x2 {
            surface.set_cell(x, y, ' ', style);
        }
    }
}

/// Left padding that centres `part` columns inside `total` columns.
///
/// Halves round away from zero; never negative.
#[must_use]
pub const fn pad_center(part: u32, total: u32) -> u32 {
    if part >= total {
        return 0;
    }
    (total - part).div_ceil(2)
}
