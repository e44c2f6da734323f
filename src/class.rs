//! Bracket-expression character classes.
//!
//! A [`CharClass`] is compiled from the body of a regular-expression bracket expression, i.e.
//! the text that would appear between `[` and `]`. Compilation happens once, when a grammar
//! is constructed; malformed patterns are reported as a [`ClassError`] rather than producing a
//! matcher that fails at parse time.
//!
//! The accepted syntax is that of the [`regex`] crate's bracket classes: negation with a
//! leading `^`, ranges, escapes such as `\n` or `\x{3bb}`, Perl classes (`\d`, `\w`, `\s`),
//! Unicode classes (`\pL`, `\p{Greek}`), POSIX classes (`[:alpha:]`) and nested set
//! operations. A literal `]` is allowed as the first item and a literal `-` as the first or
//! last. Perl classes are Unicode-aware.
//!
//! The body is inserted into the bracket expression verbatim, so an unescaped `]` in the
//! middle of `set` closes the class early and the rest is matched as plain text.

use std::str::FromStr;

use regex::Regex;
use thiserror::Error;
use tracing::debug;

/// The error type produced when a character class fails to compile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid character class [{pattern}]: {reason}")]
pub struct ClassError {
    /// The (escaped) pattern that failed to compile.
    pub pattern: String,
    /// A description of what went wrong, and where.
    pub reason: String,
}

/// Escapes newlines, tabs and carriage returns in `set` so that it renders on a single line.
pub fn escape(set: &str) -> String {
    let mut escaped = String::with_capacity(set.len());
    for c in set.chars() {
        match c {
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            '\r' => escaped.push_str("\\r"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// A compiled character class.
#[derive(Debug, Clone)]
pub struct CharClass {
    /// The escaped source pattern, without the surrounding brackets.
    pattern: String,
    /// Matches a string consisting of exactly one member of the class.
    regex: Regex,
}

impl CharClass {
    /// Compiles the bracket-expression body `set`.
    pub fn new(set: &str) -> Result<Self, ClassError> {
        let pattern = escape(set);
        let regex = Regex::new(&format!("^[{pattern}]$")).map_err(|err| ClassError {
            pattern: pattern.clone(),
            reason: err.to_string(),
        })?;

        debug!(%pattern, "compiled character class");
        Ok(Self { pattern, regex })
    }

    /// Returns `true` if `c` is a member of `self`.
    pub fn contains(&self, c: char) -> bool {
        let mut buf = [0; 4];
        self.regex.is_match(c.encode_utf8(&mut buf))
    }

    /// Returns the escaped source pattern, without brackets.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl FromStr for CharClass {
    type Err = ClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for CharClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.pattern)
    }
}
