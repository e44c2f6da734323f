//! The [`Grammar`] type and forward references for recursive grammars.

use std::{
    fmt::Debug,
    sync::{Arc, OnceLock},
};

use thiserror::Error;

use crate::{
    cursor::{Cursor, TextCheckpoint, TextCursor},
    error::ParseError,
    tree::Match,
};

/// The return type of [`Grammar::apply`].
///
/// `Ok(None)` denotes a successful match with no semantic value, as produced by
/// [`ignore`](crate::combinator::ignore).
pub type ParseResult = Result<Option<Match>, ParseError>;

/// The cursor type accepted by a [`Grammar`] whose checkpoints are of type `K`.
pub type DynCursor<'c, K> = dyn Cursor<Checkpoint = K> + 'c;

/// A [`Grammar`] over [`TextCursor`]s.
pub type TextGrammar = Grammar<TextCheckpoint>;

/// The function wrapped by a [`Grammar`].
type GrammarFn<K> = dyn Fn(&mut DynCursor<'_, K>) -> ParseResult + Send + Sync;

/// A composable parsing function, bound to no particular input.
///
/// Grammars are immutable and cheap to clone; they can be applied any number of times, from
/// any number of threads, to any cursor whose checkpoints are of type `K`.
pub struct Grammar<K> {
    /// The parsing function itself.
    inner: Arc<GrammarFn<K>>,
}

sa::assert_impl_all!(TextGrammar: Send, Sync, Clone);

impl<K> Clone for Grammar<K> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K> Debug for Grammar<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grammar").finish_non_exhaustive()
    }
}

impl<K: Clone + 'static> Grammar<K> {
    /// Wraps `f` in a [`Grammar`].
    ///
    /// Implementations of `f` must restore the cursor before returning a recoverable error.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut DynCursor<'_, K>) -> ParseResult + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    /// Applies `self` to `cursor`.
    #[inline(always)]
    pub fn apply(&self, cursor: &mut DynCursor<'_, K>) -> ParseResult {
        (self.inner)(cursor)
    }

    /// Applies `self` to `cursor`, representing an absent value as an empty sequence.
    pub fn parse(&self, cursor: &mut DynCursor<'_, K>) -> Result<Match, ParseError> {
        self.apply(cursor).map(|m| m.unwrap_or_else(Match::empty))
    }
}

impl Grammar<TextCheckpoint> {
    /// Parses the entirety of `input`.
    ///
    /// Fails recoverably if `self` matches only a prefix of `input`.
    pub fn parse_str(&self, input: &str) -> Result<Match, ParseError> {
        let mut cursor = TextCursor::new(input);
        let tree = self.parse(&mut cursor)?;
        match cursor.is_at_end() {
            true => Ok(tree),
            false => Err(ParseError::recoverable(format!(
                "unexpected trailing input at {}: {:?}",
                cursor.position(),
                cursor.remaining()
            ))),
        }
    }
}

/// The error type returned by [`Forward::define`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForwardError {
    /// The forward reference was already bound to a grammar.
    #[error("grammar `{0}` is already defined")]
    AlreadyDefined(String),
}

/// A named slot for a [`Grammar`] that is not yet constructed.
///
/// Self- and mutually-recursive grammars are built by creating a [`Forward`], referring to it
/// with [`resolve`](crate::combinator::resolve) while constructing the grammar, and finally
/// binding it with [`Forward::define`]. Clones share the same slot.
pub struct Forward<K> {
    /// A name used in error messages.
    name: Arc<str>,
    /// The bound grammar, if any.
    slot: Arc<OnceLock<Grammar<K>>>,
}

impl<K> Clone for Forward<K> {
    fn clone(&self) -> Self {
        Self {
            name: Arc::clone(&self.name),
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<K> Debug for Forward<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Forward")
            .field("name", &self.name)
            .field("defined", &self.slot.get().is_some())
            .finish()
    }
}

impl<K> Forward<K> {
    /// Constructs a new, unbound [`Forward`].
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            slot: Arc::new(OnceLock::new()),
        }
    }

    /// Binds `self` to `grammar`. A [`Forward`] may only be bound once.
    pub fn define(&self, grammar: Grammar<K>) -> Result<(), ForwardError> {
        self.slot
            .set(grammar)
            .map_err(|_| ForwardError::AlreadyDefined(self.name.to_string()))
    }

    /// Returns the name of `self`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the bound grammar, if [`Forward::define`] has been called.
    pub fn get(&self) -> Option<&Grammar<K>> {
        self.slot.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Matches a single `'a'`.
    fn a() -> TextGrammar {
        Grammar::new(|cursor| {
            let start = cursor.checkpoint();
            match cursor.read_char() {
                Ok('a') => Ok(Some(Match::from("a"))),
                _ => {
                    cursor.restore(start);
                    Err(ParseError::recoverable("expected 'a'"))
                }
            }
        })
    }

    #[test]
    fn grammars_are_reusable() {
        let grammar = a();
        let clone = grammar.clone();
        dbg!(&grammar);

        let mut first = TextCursor::new("a");
        let mut second = TextCursor::new("b");
        assert_eq!(grammar.apply(&mut first), Ok(Some(Match::from("a"))));
        assert!(clone.apply(&mut second).is_err());
        assert_eq!(second.offset(), 0);
    }

    #[test]
    fn parse_str_requires_complete_input() {
        assert_eq!(a().parse_str("a"), Ok(Match::from("a")));

        let err = a().parse_str("aa").unwrap_err();
        assert!(!err.is_fatal());
        assert_eq!(err.message(), r#"unexpected trailing input at 1:2: "a""#);
    }

    #[test]
    fn forward_can_only_be_defined_once() {
        let forward = Forward::<TextCheckpoint>::new("expr");
        assert!(forward.get().is_none());
        assert_eq!(forward.name(), "expr");

        forward.clone().define(a()).unwrap();
        assert!(forward.get().is_some());
        assert_eq!(
            forward.define(a()),
            Err(ForwardError::AlreadyDefined(String::from("expr")))
        );
    }
}
