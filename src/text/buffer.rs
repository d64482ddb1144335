//! Bounded codepoint storage with a cursor.

use ropey::Rope;

use crate::error::{Error, Result};

/// Most codepoints a [`CodepointBuffer`] holds.
pub const MAX_CODEPOINTS: usize = 2000;

/// Codepoint sequence plus an insertion cursor in `[0, len]`.
///
/// Storage is a rope indexed by `char`, so every position here is a
/// codepoint index, never a byte offset.
#[derive(Clone, Debug, Default)]
pub struct CodepointBuffer {
    rope: Rope,
    cursor: usize,
}

impl CodepointBuffer {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of codepoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rope.len_chars()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Cursor position.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Codepoint at `idx`.
    #[must_use]
    pub fn get(&self, idx: usize) -> Option<char> {
        self.rope.get_char(idx)
    }

    /// Iterate over all codepoints.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.rope.chars()
    }

    /// Contents as a `String`.
    #[must_use]
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    fn is_space_at(&self, idx: usize) -> bool {
        self.get(idx).is_some_and(char::is_whitespace)
    }

    /// Insert at the cursor and move past it. Returns false at capacity.
    pub fn insert(&mut self, ch: char) -> bool {
        if self.len() >= MAX_CODEPOINTS {
            return false;
        }
        self.rope.insert_char(self.cursor, ch);
        self.cursor += 1;
        true
    }

    /// Remove the codepoint before the cursor.
    pub fn delete_backward(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.rope.remove(self.cursor..=self.cursor);
        true
    }

    /// Remove from the start of the word before the cursor up to the cursor.
    pub fn delete_word_backward(&mut self) -> bool {
        let end = self.cursor;
        if !self.move_left_word() {
            return false;
        }
        self.rope.remove(self.cursor..end);
        true
    }

    pub fn move_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub fn move_right(&mut self) -> bool {
        if self.cursor >= self.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Move to the start of the previous word.
    pub fn move_left_word(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        loop {
            self.cursor -= 1;
            let at_word_start =
                !self.is_space_at(self.cursor) && self.is_space_at(self.cursor.wrapping_sub(1));
            if self.cursor == 0 || at_word_start {
                return true;
            }
        }
    }

    /// Move to the end of the next word.
    pub fn move_right_word(&mut self) -> bool {
        let len = self.len();
        if self.cursor >= len {
            return false;
        }
        loop {
            self.cursor += 1;
            let at_word_end = self.is_space_at(self.cursor) && !self.is_space_at(self.cursor - 1);
            if self.cursor >= len || at_word_end {
                return true;
            }
        }
    }

    /// Remove everything.
    pub fn clear(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        self.rope = Rope::new();
        self.cursor = 0;
        true
    }

    /// Replace the contents and put the cursor at the end.
    ///
    /// Fails without touching the buffer when `text` is over capacity.
    pub fn set_text(&mut self, text: &str) -> Result<()> {
        let requested = text.chars().count();
        if requested > MAX_CODEPOINTS {
            return Err(Error::CapacityExceeded {
                capacity: MAX_CODEPOINTS,
                requested,
            });
        }
        self.rope = Rope::from_str(text);
        self.cursor = requested;
        Ok(())
    }
}
