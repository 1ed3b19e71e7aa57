//! Bounds-checked scanner over an immutable string.
//!
//! All counts and offsets taken or returned by [`Cursor`] are in characters,
//! relative to the current position. The position itself is tracked as a byte
//! offset so slices never split a UTF-8 sequence.

use text_size::TextSize;
use thiserror::Error;

/// A read or advance ran past the end of the input.
///
/// Parsers never let this escape: it is translated into a grammar-level error
/// carrying the unparsed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("requested {requested} character(s) at offset {offset}, only {available} available")]
pub struct CursorOutOfBounds {
    pub offset: usize,
    pub requested: usize,
    pub available: usize,
}

/// Position-tracked scanner. One cursor per parse call.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    text: &'a str,
    position: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, position: 0 }
    }

    /// Byte offset of the cursor from the start of the input.
    pub fn offset(&self) -> TextSize {
        TextSize::new(self.position as u32)
    }

    /// The unconsumed tail of the input.
    pub fn remaining(&self) -> &'a str {
        &self.text[self.position..]
    }

    pub fn has_next(&self) -> bool {
        self.position < self.text.len()
    }

    /// Returns the current character without consuming it.
    pub fn peek(&self) -> Result<char, CursorOutOfBounds> {
        self.remaining()
            .chars()
            .next()
            .ok_or_else(|| self.out_of_bounds(1))
    }

    /// Returns the next `n` characters without consuming them.
    pub fn peek_n(&self, n: usize) -> Result<&'a str, CursorOutOfBounds> {
        let end = self.byte_end(n)?;
        Ok(&self.text[self.position..end])
    }

    /// Returns the rest of the input without consuming it.
    pub fn peek_rest(&self) -> &'a str {
        self.remaining()
    }

    /// Consumes and returns the current character.
    pub fn next(&mut self) -> Result<char, CursorOutOfBounds> {
        let c = self.peek()?;
        self.position += c.len_utf8();
        Ok(c)
    }

    /// Consumes and returns the next `n` characters.
    pub fn next_n(&mut self, n: usize) -> Result<&'a str, CursorOutOfBounds> {
        let end = self.byte_end(n)?;
        let taken = &self.text[self.position..end];
        self.position = end;
        Ok(taken)
    }

    /// Consumes and returns the rest of the input.
    pub fn next_rest(&mut self) -> &'a str {
        let taken = self.remaining();
        self.position = self.text.len();
        taken
    }

    /// Offset of the next `c` at or after the current position, if any.
    pub fn find(&self, c: char) -> Option<usize> {
        self.remaining().chars().position(|ch| ch == c)
    }

    fn byte_end(&self, n: usize) -> Result<usize, CursorOutOfBounds> {
        let tail = self.remaining();
        let mut chars = tail.char_indices();
        match chars.nth(n) {
            Some((idx, _)) => Ok(self.position + idx),
            None => {
                let available = tail.chars().count();
                if available == n {
                    Ok(self.text.len())
                } else {
                    Err(self.out_of_bounds(n))
                }
            }
        }
    }

    fn out_of_bounds(&self, requested: usize) -> CursorOutOfBounds {
        CursorOutOfBounds {
            offset: self.position,
            requested,
            available: self.remaining().chars().count(),
        }
    }
}
