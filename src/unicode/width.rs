//! Codepoint sanitizing and display width for terminal cells.
//!
//! Every codepoint that reaches the display goes through [`sanitize`] first.
//! The result always has a width in `0..=MAX_GLYPH_WIDTH`, where width 0 is
//! reserved for the forced line break.

use std::sync::atomic::{AtomicU8, Ordering};
use unicode_width::UnicodeWidthChar;

/// Widest glyph a cell grid can display (CJK, emoji).
pub const MAX_GLYPH_WIDTH: u8 = 2;

/// Glyph substituted for codepoints the grid cannot display.
pub const REPLACEMENT_CHAR: char = '\u{FFFD}';

/// Width calculation method for ambiguous-width characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidthMethod {
    /// POSIX-like wcwidth: ambiguous width = 1.
    #[default]
    WcWidth,
    /// Unicode East Asian Width: ambiguous width = 2.
    Unicode,
}

const WIDTH_METHOD_WCWIDTH: u8 = 0;
const WIDTH_METHOD_UNICODE: u8 = 1;

static WIDTH_METHOD: AtomicU8 = AtomicU8::new(WIDTH_METHOD_WCWIDTH);

/// Set the global width method used by [`sanitize`] and [`str_width`].
pub fn set_width_method(method: WidthMethod) {
    let value = match method {
        WidthMethod::WcWidth => WIDTH_METHOD_WCWIDTH,
        WidthMethod::Unicode => WIDTH_METHOD_UNICODE,
    };
    WIDTH_METHOD.store(value, Ordering::Relaxed);
}

/// Get the global width method.
#[must_use]
pub fn width_method() -> WidthMethod {
    match WIDTH_METHOD.load(Ordering::Relaxed) {
        WIDTH_METHOD_UNICODE => WidthMethod::Unicode,
        _ => WidthMethod::WcWidth,
    }
}

/// A codepoint ready for display, paired with its column width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub width: u8,
}

impl Glyph {
    /// Check if this glyph is a forced line break.
    #[must_use]
    pub const fn is_break(self) -> bool {
        self.width == 0
    }
}

/// Sanitize a codepoint using the global width method.
///
/// Newlines keep width 0 and break the line, tabs become a single space,
/// and anything the terminal would draw with width 0 or more than
/// [`MAX_GLYPH_WIDTH`] (or cannot draw at all) becomes [`REPLACEMENT_CHAR`].
#[inline]
#[must_use]
pub fn sanitize(ch: char) -> Glyph {
    sanitize_with_method(ch, width_method())
}

/// Sanitize a codepoint using a specific width method.
#[must_use]
pub fn sanitize_with_method(ch: char, method: WidthMethod) -> Glyph {
    match ch {
        '\n' => Glyph { ch, width: 0 },
        '\t' => Glyph { ch: ' ', width: 1 },
        // Fast path: ASCII printable characters are always width 1
        ' '..='~' => Glyph { ch, width: 1 },
        _ => {
            let width = match method {
                WidthMethod::WcWidth => UnicodeWidthChar::width(ch),
                WidthMethod::Unicode => UnicodeWidthChar::width_cjk(ch),
            };
            match width {
                Some(w @ 1..=2) => Glyph { ch, width: w as u8 },
                _ => Glyph {
                    ch: REPLACEMENT_CHAR,
                    width: 1,
                },
            }
        }
    }
}

/// Display width of a string in terminal columns (global method).
///
/// Every codepoint is sanitized first, so control characters count as one
/// column and newlines count as zero.
#[must_use]
pub fn str_width(s: &str) -> usize {
    s.chars().map(|ch| usize::from(sanitize(ch).width)).sum()
}

/// Display width of a string using a specific width method.
#[must_use]
pub fn str_width_with_method(s: &str, method: WidthMethod) -> usize {
    s.chars()
        .map(|ch| usize::from(sanitize_with_method(ch, method).width))
        .sum()
}
