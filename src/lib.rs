//! `termwidgets` - Text input and tree view widgets for character grids
//!
//! Two layout and navigation engines that render into any fixed-size cell
//! surface: a wrapped or horizontally scrolled text input, and an
//! expandable tree view. Both keep their cursor or selection in view and
//! share one codepoint width policy.
//!
//! # Examples
//!
//! ```
//! use termwidgets::{CellGrid, InputEvent, TextInput, Viewport};
//!
//! let mut grid = CellGrid::new(12, 2);
//! let mut input = TextInput::new();
//! for ch in "hello".chars() {
//!     input.handle(InputEvent::Insert(ch));
//! }
//!
//! let vp = Viewport::new(&grid, 0, 12, 0, 2);
//! let rows = input.render(&mut grid, vp);
//! assert_eq!(rows, 1);
//! assert_eq!(grid.to_text(), "\nhello");
//! assert_eq!(grid.cursor(), Some((5, 1)));
//! ```

// Crate-level lint configuration
#![warn(unsafe_code)]
#![allow(clippy::cast_possible_truncation)] // Intentional coordinate casts
#![allow(clippy::cast_sign_loss)] // Intentional coordinate conversions
#![allow(clippy::cast_possible_wrap)] // Intentional coordinate conversions
#![allow(clippy::module_name_repetitions)] // Allow tree::TreeNode etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::must_use_candidate)] // Operations return Action; ignoring it is fine
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::cast_lossless)] // as casts are fine for primitive widening
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::semicolon_if_nothing_returned)] // Style preference

pub mod action;
pub mod cell;
pub mod error;
pub mod event;
pub mod scroll;
pub mod style;
pub mod surface;
pub mod text;
pub mod tree;
pub mod unicode;

// Re-export core types at crate root
pub use action::Action;
pub use cell::{Cell, CellContent};
pub use error::{Error, Result};
pub use event::{LogLevel, clear_log_callback, emit_log, set_log_callback};
pub use style::{Color, Style, StyleBuilder, TextAttributes};

// Re-export drawing types
pub use surface::{CellGrid, Surface, Viewport};

// Re-export widgets
pub use text::{InputEvent, InputOptions, MAX_CODEPOINTS, RenderMode, TextInput};
pub use tree::{
    Label, NodeContent, NodeId, Tree, TreeEvent, TreeGlyphs, TreeNode, TreeOptions,
};
pub use unicode::{WidthMethod, set_width_method, str_width};
