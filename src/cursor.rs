//! The [`Cursor`] trait and a minimal in-memory implementation.
//!
//! Grammars never index into their input directly; they read one character at a time from a
//! [`Cursor`], and backtrack by restoring a [`Cursor::Checkpoint`] taken before they started
//! reading. Consumers are expected to provide their own cursors for their own input sources;
//! [`TextCursor`] exists for the common case of parsing a string that is already in memory.
//!
//! # Object safety
//! Grammars receive their cursor as a `&mut dyn Cursor<Checkpoint = K>`, so that a single
//! grammar can be applied to cursors of any lifetime as long as they share a checkpoint type.

use thiserror::Error;

pub mod text;

pub use text::{Position, TextCheckpoint, TextCursor};

/// The error type returned by [`Cursor::read_char`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadError {
    /// There are no characters left to read.
    #[error("end of input")]
    EndOfInput,
    /// The underlying stream produced something that was not a valid character.
    #[error("undecodable input ({0})")]
    Decode(String),
}

/// A character stream supporting checkpoint/restore.
///
/// # Contract
/// Restoring a checkpoint must make subsequent reads behave exactly as if no reads had
/// occurred since that checkpoint was taken. [`Cursor::restore`] must be idempotent, and
/// must accept any checkpoint produced earlier by the same cursor (but never one produced by
/// a different cursor).
pub trait Cursor {
    /// An opaque snapshot of this cursor's position and any auxiliary state.
    type Checkpoint: Clone;

    /// Reads the next character and advances past it.
    fn read_char(&mut self) -> Result<char, ReadError>;

    /// Captures the current state of `self`.
    fn checkpoint(&self) -> Self::Checkpoint;

    /// Resets `self` to a previously captured `checkpoint`.
    fn restore(&mut self, checkpoint: Self::Checkpoint);
}
