//! Grammars which read characters directly from the cursor.

use std::fmt::Display;

use crate::{
    class::{CharClass, ClassError},
    cursor::ReadError,
    error::ParseError,
    grammar::Grammar,
    tree::Match,
};

/// Returns a [`Grammar`] that matches exactly the characters of `text`, producing
/// [`Match::Scalar`] of `text`.
pub fn literal<K: Clone + 'static>(text: impl Into<String>) -> Grammar<K> {
    let text: String = text.into();
    let expected: Vec<char> = text.chars().collect();

    Grammar::new(move |cursor| {
        let start = cursor.checkpoint();
        for &want in &expected {
            match cursor.read_char() {
                Ok(got) if got == want => {}
                got => {
                    cursor.restore(start);
                    return Err(unexpected(format!("{want:?}"), got));
                }
            }
        }
        Ok(Some(Match::Scalar(text.clone())))
    })
}

/// Returns a [`Grammar`] that matches one character in the bracket-expression `set`.
///
/// See [`crate::class`] for the accepted syntax. Malformed sets are rejected here, when the
/// grammar is built, rather than when it is applied.
pub fn class<K: Clone + 'static>(set: &str) -> Result<Grammar<K>, ClassError> {
    let class = CharClass::new(set)?;

    Ok(Grammar::new(move |cursor| {
        let start = cursor.checkpoint();
        match cursor.read_char() {
            Ok(got) if class.contains(got) => Ok(Some(Match::from(got))),
            got => {
                cursor.restore(start);
                Err(unexpected(&class, got))
            }
        }
    }))
}

/// Returns a [`Grammar`] that matches any single character.
pub fn any_char<K: Clone + 'static>() -> Grammar<K> {
    Grammar::new(|cursor| {
        let start = cursor.checkpoint();
        match cursor.read_char() {
            Ok(got) => Ok(Some(Match::from(got))),
            got => {
                cursor.restore(start);
                Err(unexpected("any character", got))
            }
        }
    })
}

/// Describes a failed read as a recoverable [`ParseError`].
fn unexpected(expected: impl Display, got: Result<char, ReadError>) -> ParseError {
    match got {
        Ok(got) => ParseError::recoverable(format!("expected {expected}, got {got:?}")),
        Err(err) => ParseError::recoverable(format!("expected {expected}, got {err}")),
    }
}
