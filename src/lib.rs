//! A backtracking parser-combinator engine.
//!
//! Parsers are built by composing [`Grammar`]s from the functions in [`combinator`], and then
//! applied to a [`Cursor`] over some input. On success a grammar produces a [`Match`] tree,
//! whose interesting parts can be marked with [`tag`](combinator::tag) and later extracted
//! with the helpers in [`tree::query`].
//!
//! # Errors
//! Failures come in two kinds (see [`ErrorKind`]). A _recoverable_ failure means "this did
//! not match here", and always leaves the cursor where it was before the failing grammar ran;
//! an enclosing [`alt`](combinator::alt) will then try its next alternative. A _fatal_
//! failure, introduced by [`require`](combinator::require), means the parse has committed to
//! a path and cannot succeed, so no further alternatives are tried.
//!
//! # Cursors
//! The [`Cursor`] trait is deliberately small: read a character, take a checkpoint, restore a
//! checkpoint. [`TextCursor`] implements it for in-memory strings; other input sources are
//! expected to bring their own implementations.

#![warn(missing_docs)]

extern crate static_assertions as sa;

pub mod class;
pub mod combinator;
pub mod cursor;
pub mod error;
pub mod grammar;
pub mod tree;

pub use cursor::{Cursor, TextCursor};
pub use error::{ErrorKind, ParseError};
pub use grammar::{Forward, Grammar, ParseResult, TextGrammar};
pub use tree::Match;
