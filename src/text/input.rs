//! Single-field text input widget.
//!
//! [`TextInput`] owns a bounded codepoint buffer and renders it into a
//! viewport either wrapped over several rows or scrolled horizontally on
//! one row. Editing goes through [`TextInput::handle`] or the individual
//! operation methods; every operation reports whether a redraw is needed.
//!
//! # Examples
//!
//! ```
//! use termwidgets::{Action, CellGrid, InputEvent, TextInput, Viewport};
//!
//! let mut input = TextInput::new();
//! for ch in "hi there".chars() {
//!     input.handle(InputEvent::Insert(ch));
//! }
//! assert_eq!(input.handle(InputEvent::DeleteWordBackward), Action::Redraw);
//! assert_eq!(input.export().as_deref(), Some("hi "));
//!
//! let mut grid = CellGrid::new(20, 3);
//! let vp = Viewport::full(&grid);
//! assert_eq!(input.render(&mut grid, vp), 1);
//! // Short content sits on the bottom row
//! assert_eq!(grid.row_text(2), "hi");
//! ```

use crate::action::Action;
use crate::error::Result;
use crate::event::{LogLevel, emit_log};
use crate::scroll::reflow;
use crate::style::Style;
use crate::surface::{Surface, Viewport};
use crate::text::buffer::{CodepointBuffer, MAX_CODEPOINTS};
use crate::text::layout::LineLayout;
use crate::unicode::sanitize;

/// How a [`TextInput`] lays its content out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Single row, scrolled so the cursor stays visible.
    Horizontal,
    /// Wrapped over the viewport's rows, scrolled vertically.
    #[default]
    Wrap,
}

/// Text input configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputOptions {
    /// Layout mode used by [`TextInput::render`].
    pub mode: RenderMode,
    /// Style for painted cells.
    pub style: Style,
}

impl InputOptions {
    /// Create options with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout mode.
    #[must_use]
    pub const fn mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the cell style.
    #[must_use]
    pub const fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

/// Editing events understood by [`TextInput::handle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputEvent {
    Clear,
    DeleteBackward,
    DeleteWordBackward,
    MoveLeft,
    MoveLeftWord,
    MoveRight,
    MoveRightWord,
    Insert(char),
}

/// Editable text field with wrap or horizontal-scroll rendering.
#[derive(Clone, Debug, Default)]
pub struct TextInput {
    buffer: CodepointBuffer,
    options: InputOptions,
    start_y: usize,
}

impl TextInput {
    /// Create an empty input with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty input with the given options.
    #[must_use]
    pub fn with_options(options: InputOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Current options.
    #[must_use]
    pub const fn options(&self) -> &InputOptions {
        &self.options
    }

    /// Replace the options.
    pub fn set_options(&mut self, options: InputOptions) {
        self.options = options;
    }

    /// Cursor position as a codepoint index.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.buffer.cursor()
    }

    /// Number of codepoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// First wrapped line shown by the last render.
    #[must_use]
    pub const fn scroll_offset(&self) -> usize {
        self.start_y
    }

    /// Current contents; empty when nothing was typed.
    #[must_use]
    pub fn text(&self) -> String {
        self.buffer.text()
    }

    /// Current contents, or `None` when empty.
    #[must_use]
    pub fn export(&self) -> Option<String> {
        if self.buffer.is_empty() {
            None
        } else {
            Some(self.buffer.text())
        }
    }

    /// Replace the contents and put the cursor at the end.
    pub fn set_text(&mut self, text: &str) -> Result<()> {
        self.buffer.set_text(text)
    }

    /// Dispatch an editing event.
    pub fn handle(&mut self, event: InputEvent) -> Action {
        match event {
            InputEvent::Clear => self.clear(),
            InputEvent::DeleteBackward => self.delete_backward(),
            InputEvent::DeleteWordBackward => self.delete_word_backward(),
            InputEvent::MoveLeft => self.move_left(),
            InputEvent::MoveLeftWord => self.move_left_word(),
            InputEvent::MoveRight => self.move_right(),
            InputEvent::MoveRightWord => self.move_right_word(),
            InputEvent::Insert(ch) => self.insert(ch),
        }
    }

    /// Insert a codepoint at the cursor.
    pub fn insert(&mut self, ch: char) -> Action {
        let inserted = self.buffer.insert(ch);
        if !inserted {
            emit_log(
                LogLevel::Debug,
                &format!("text input full at {MAX_CODEPOINTS} codepoints, dropped {ch:?}"),
            );
        }
        Action::from_changed(inserted)
    }

    pub fn delete_backward(&mut self) -> Action {
        Action::from_changed(self.buffer.delete_backward())
    }

    pub fn delete_word_backward(&mut self) -> Action {
        Action::from_changed(self.buffer.delete_word_backward())
    }

    pub fn move_left(&mut self) -> Action {
        Action::from_changed(self.buffer.move_left())
    }

    pub fn move_left_word(&mut self) -> Action {
        Action::from_changed(self.buffer.move_left_word())
    }

    pub fn move_right(&mut self) -> Action {
        Action::from_changed(self.buffer.move_right())
    }

    pub fn move_right_word(&mut self) -> Action {
        Action::from_changed(self.buffer.move_right_word())
    }

    pub fn clear(&mut self) -> Action {
        let cleared = self.buffer.clear();
        if cleared {
            self.start_y = 0;
        }
        Action::from_changed(cleared)
    }

    /// Render using the configured mode. Returns the rows used.
    pub fn render(&mut self, surface: &mut dyn Surface, viewport: Viewport) -> u32 {
        self.render_with_mode(surface, viewport, self.options.mode)
    }

    /// Render with an explicit mode. Returns the rows used.
    pub fn render_with_mode(
        &mut self,
        surface: &mut dyn Surface,
        viewport: Viewport,
        mode: RenderMode,
    ) -> u32 {
        let viewport = viewport.clip_to(&*surface);
        if viewport.is_empty() {
            return 0;
        }
        match mode {
            RenderMode::Horizontal => self.render_horizontal(surface, viewport),
            RenderMode::Wrap => self.layout_wrapped(viewport, Some(surface)),
        }
    }

    /// Rows [`render`](Self::render) would use, without drawing.
    ///
    /// The scroll offset is updated exactly as a render would update it.
    /// There is no surface to clip against, so pass a viewport that already
    /// fits the target surface (see [`Viewport::clip_to`]).
    pub fn measure(&mut self, viewport: Viewport) -> u32 {
        if viewport.is_empty() {
            return 0;
        }
        match self.options.mode {
            RenderMode::Horizontal => 1,
            RenderMode::Wrap => self.layout_wrapped(viewport, None),
        }
    }

    fn render_horizontal(&self, surface: &mut dyn Surface, viewport: Viewport) -> u32 {
        let cursor = self.buffer.cursor();
        let visible = viewport.width() as usize;

        // Width up to and including the codepoint under the cursor
        let through_cursor: usize = self
            .buffer
            .chars()
            .take(cursor + 1)
            .map(|ch| usize::from(sanitize(ch).width))
            .sum();

        let mut start = 0;
        if through_cursor >= visible {
            let limit = through_cursor - visible;
            let mut skipped = 0;
            for ch in self.buffer.chars() {
                if skipped > limit {
                    break;
                }
                skipped += usize::from(sanitize(ch).width);
                start += 1;
            }
        }

        surface.set_cursor(viewport.x1, viewport.y1);

        let mut x = viewport.x1;
        for (i, ch) in self.buffer.chars().enumerate().skip(start) {
            let glyph = sanitize(ch);
            if x + u32::from(glyph.width) >= viewport.x2 {
                break;
            }
            if !glyph.is_break() {
                surface.set_cell(x, viewport.y1, glyph.ch, self.options.style);
            }
            x += u32::from(glyph.width);
            if i + 1 == cursor {
                surface.set_cursor(x, viewport.y1);
            }
        }

        1
    }

    fn layout_wrapped(&mut self, viewport: Viewport, surface: Option<&mut dyn Surface>) -> u32 {
        let height = viewport.height() as usize;
        let cursor = self.buffer.cursor();

        let mut layout = LineLayout::for_viewport(&viewport);
        let mut cursor_x = viewport.x1;
        let mut cursor_line = 1;
        for (i, ch) in self.buffer.chars().enumerate() {
            layout.advance(sanitize(ch).width);
            if i + 1 == cursor {
                cursor_x = layout.x();
                cursor_line = layout.line();
            }
        }
        let lines = layout.line();

        self.start_y = reflow(self.start_y, cursor_line, lines, height);

        let fits = lines < height;
        let top = if fits {
            viewport.y2 - lines as u32
        } else {
            viewport.y1
        };

        if let Some(surface) = surface {
            let cursor_y = top + (cursor_line - 1 - self.start_y) as u32;
            debug_assert!(viewport.contains(cursor_x, cursor_y));
            surface.set_cursor(cursor_x, cursor_y);

            let mut layout = LineLayout::for_viewport(&viewport);
            for ch in self.buffer.chars() {
                let glyph = sanitize(ch);
                let step = layout.advance(glyph.width);
                if step.line <= self.start_y {
                    continue;
                }
                let y = top + (step.line - 1 - self.start_y) as u32;
                if y >= viewport.y2 {
                    break;
                }
                // Newlines move the layout but are never painted
                if glyph.is_break() || step.column + u32::from(glyph.width) > viewport.x2 {
                    continue;
                }
                debug_assert!(viewport.contains(step.column, y));
                surface.set_cell(step.column, y, glyph.ch, self.options.style);
            }
        }

        if fits { lines as u32 } else { height as u32 }
    }
}
