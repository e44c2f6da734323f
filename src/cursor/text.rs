//! A [`Cursor`] over an in-memory string.

use std::fmt::Display;

use super::{Cursor, ReadError};

/// A 1-based line and column in some text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// The current line, starting at 1.
    pub line: usize,
    /// The current column in characters, starting at 1.
    pub column: usize,
}

impl Default for Position {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The [`Cursor::Checkpoint`] of a [`TextCursor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextCheckpoint {
    /// A byte offset into the source.
    offset: usize,
    /// The line and column corresponding to `offset`.
    position: Position,
}

/// A [`Cursor`] reading characters from a borrowed `&str`, tracking line and column as it
/// goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextCursor<'src> {
    /// The complete input.
    source: &'src str,
    /// The byte offset of the next character.
    offset: usize,
    /// The line and column of the next character.
    position: Position,
}

impl<'src> From<&'src str> for TextCursor<'src> {
    fn from(value: &'src str) -> Self {
        Self::new(value)
    }
}

impl<'src> TextCursor<'src> {
    /// Constructs a new [`TextCursor`] positioned at the start of `source`.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            offset: 0,
            position: Position::default(),
        }
    }

    /// Returns the input that has not yet been read.
    pub fn remaining(&self) -> &'src str {
        &self.source[self.offset..]
    }

    /// Returns the byte offset of the next character.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the line and column of the next character.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns `true` if every character of the input has been read.
    pub fn is_at_end(&self) -> bool {
        self.offset >= self.source.len()
    }
}

impl<'src> Cursor for TextCursor<'src> {
    type Checkpoint = TextCheckpoint;

    fn read_char(&mut self) -> Result<char, ReadError> {
        let c = self.remaining().chars().next().ok_or(ReadError::EndOfInput)?;
        self.offset += c.len_utf8();
        match c {
            '\n' => {
                self.position.line += 1;
                self.position.column = 1;
            }
            _ => self.position.column += 1,
        }
        Ok(c)
    }

    fn checkpoint(&self) -> Self::Checkpoint {
        TextCheckpoint {
            offset: self.offset,
            position: self.position,
        }
    }

    fn restore(&mut self, checkpoint: Self::Checkpoint) {
        self.offset = checkpoint.offset;
        self.position = checkpoint.position;
    }
}
