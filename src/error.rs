//! The two-tier error model shared by every combinator.
//!
//! A [`ParseError`] is either [`ErrorKind::Recoverable`], meaning "this alternative did not
//! match here", or [`ErrorKind::Fatal`], meaning the parse has committed to a path and no
//! sibling alternative may be tried. Combinators branch on [`ParseError::kind`] rather than
//! on the concrete error type, so every failure path is an exhaustive `match`.

use thiserror::Error;

use crate::cursor::ReadError;

/// The discriminant of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The current alternative failed; the cursor has been restored and the caller may try
    /// something else.
    Recoverable,
    /// The parse is committed past this point and cannot succeed.
    Fatal,
}

/// The error type produced by all grammars.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", self.render())]
pub struct ParseError {
    /// Whether this error may be recovered from by backtracking.
    kind: ErrorKind,
    /// A human-readable description of the failure.
    message: String,
}

impl ParseError {
    /// Constructs an [`ErrorKind::Recoverable`] error.
    pub fn recoverable(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Recoverable,
            message: message.into(),
        }
    }

    /// Constructs an [`ErrorKind::Fatal`] error.
    pub fn fatal(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Fatal,
            message: message.into(),
        }
    }

    /// Consumes `self` and returns an equivalent [`ErrorKind::Fatal`] error.
    ///
    /// Errors which are already fatal are returned as-is, so that nested commit points do
    /// not stack their prefixes.
    pub fn into_fatal(self) -> Self {
        Self {
            kind: ErrorKind::Fatal,
            message: self.message,
        }
    }

    /// Returns the [`ErrorKind`] of `self`.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns `true` if `self` is [`ErrorKind::Fatal`].
    pub fn is_fatal(&self) -> bool {
        matches!(self.kind, ErrorKind::Fatal)
    }

    /// Returns the message carried by `self`, without any fatal prefix.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Renders `self` for [`Display`](std::fmt::Display).
    fn render(&self) -> String {
        match self.kind {
            ErrorKind::Recoverable => self.message.clone(),
            ErrorKind::Fatal => format!("fatal match error: {}", self.message),
        }
    }
}

impl From<ReadError> for ParseError {
    fn from(value: ReadError) -> Self {
        Self::recoverable(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatal_errors_are_prefixed_once() {
        let err = ParseError::recoverable("expected 'a', got 'b'");
        assert!(!err.is_fatal());
        assert_eq!(err.to_string(), "expected 'a', got 'b'");

        let fatal = err.into_fatal().into_fatal();
        assert!(fatal.is_fatal());
        assert_eq!(fatal.kind(), ErrorKind::Fatal);
        assert_eq!(fatal.message(), "expected 'a', got 'b'");
        assert_eq!(fatal.to_string(), "fatal match error: expected 'a', got 'b'");
    }

    #[test]
    fn read_errors_are_recoverable() {
        let err = ParseError::from(ReadError::EndOfInput);
        dbg!(&err);
        assert_eq!(err.kind(), ErrorKind::Recoverable);
        assert_eq!(err.message(), "end of input");
    }
}
