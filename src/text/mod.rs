//! Text input: codepoint storage, line layout and the input widget.
//!
//! Key types:
//!
//! - [`TextInput`]: editable field rendered wrapped or horizontally scrolled
//! - [`CodepointBuffer`]: bounded codepoint storage with a cursor
//! - [`LineLayout`]: wrap decisions over a viewport's columns

mod buffer;
mod input;
mod layout;

pub use buffer::{CodepointBuffer, MAX_CODEPOINTS};
pub use input::{InputEvent, InputOptions, RenderMode, TextInput};
pub use layout::{LineLayout, Step, should_wrap};
