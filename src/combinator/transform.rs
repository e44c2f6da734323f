//! Grammars which reshape the value of another grammar.

use crate::{
    error::ParseError,
    grammar::{Forward, Grammar},
    tree::Match,
};

/// Returns a [`Grammar`] that applies `grammar` and discards its value.
///
/// Input is still consumed, but the result is omitted from any enclosing sequence.
pub fn ignore<K: Clone + 'static>(grammar: Grammar<K>) -> Grammar<K> {
    Grammar::new(move |cursor| grammar.apply(cursor).map(|_| None))
}

/// Returns a [`Grammar`] that wraps the value of `grammar` in a [`Match::Tagged`] labelled
/// `tag`.
///
/// A grammar without a value is tagged as an empty sequence.
pub fn tag<K: Clone + 'static>(tag: impl Into<String>, grammar: Grammar<K>) -> Grammar<K> {
    let tag: String = tag.into();
    Grammar::new(move |cursor| {
        let inner = grammar.apply(cursor)?.unwrap_or_else(Match::empty);
        Ok(Some(Match::tagged(tag.clone(), inner)))
    })
}

/// Returns a [`Grammar`] that applies `transform` to the value of `grammar`.
///
/// This is where parse trees are turned into something more meaningful. If `transform`
/// fails, the cursor is restored and its error is returned as-is; returning a
/// [`ParseError::fatal`] therefore commits the enclosing grammar just like
/// [`require`](super::require).
pub fn node<K, F>(grammar: Grammar<K>, transform: F) -> Grammar<K>
where
    K: Clone + 'static,
    F: Fn(Match) -> Result<Match, ParseError> + Send + Sync + 'static,
{
    Grammar::new(move |cursor| {
        let start = cursor.checkpoint();
        let value = grammar.apply(cursor)?.unwrap_or_else(Match::empty);
        match transform(value) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                cursor.restore(start);
                Err(err)
            }
        }
    })
}

/// Returns a [`Grammar`] that defers to whatever `forward` is eventually bound to.
///
/// Applying the result before [`Forward::define`] has been called is a fatal error.
pub fn resolve<K: Clone + 'static>(forward: &Forward<K>) -> Grammar<K> {
    let forward = forward.clone();
    Grammar::new(move |cursor| match forward.get() {
        Some(grammar) => grammar.apply(cursor),
        None => Err(ParseError::fatal(format!(
            "grammar `{}` was used before it was defined",
            forward.name()
        ))),
    })
}
