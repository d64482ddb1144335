//! Codepoint sanitizing and display width.

mod width;

pub use width::{
    Glyph, MAX_GLYPH_WIDTH, REPLACEMENT_CHAR, WidthMethod, sanitize, sanitize_with_method,
    set_width_method, str_width, str_width_with_method, width_method,
};
