//! Repetition and optionality.

use crate::{
    error::{ErrorKind, ParseError},
    grammar::Grammar,
    tree::Match,
};

/// A `max` argument to [`repeat`] denoting no upper bound.
pub const UNBOUNDED: usize = 0;

/// Returns a [`Grammar`] that applies `grammar` at least `min` and at most `max` times,
/// producing a [`Match::Sequence`] of the values it produced.
///
/// A `max` of [`UNBOUNDED`] places no upper limit on the number of repetitions. Once `min`
/// repetitions have succeeded, a recoverable failure simply ends the repetition; before that
/// point, it restores the cursor and fails the whole repetition. Fatal failures are always
/// returned immediately.
///
/// An unbounded repetition of a grammar that can succeed without consuming input will never
/// terminate.
pub fn repeat<K: Clone + 'static>(min: usize, max: usize, grammar: Grammar<K>) -> Grammar<K> {
    let max = match max {
        UNBOUNDED => usize::MAX,
        max => max,
    };

    Grammar::new(move |cursor| {
        let start = cursor.checkpoint();
        let mut values = Vec::new();
        let mut count = 0;

        while count < max {
            match grammar.apply(cursor) {
                Ok(value) => {
                    values.extend(value);
                    count += 1;
                }
                Err(err) => match err.kind() {
                    ErrorKind::Recoverable if count >= min => break,
                    ErrorKind::Recoverable | ErrorKind::Fatal => {
                        cursor.restore(start);
                        return Err(err);
                    }
                },
            }
        }

        // only reachable with min > max, which can never be satisfied
        if count < min {
            cursor.restore(start);
            return Err(ParseError::recoverable(format!(
                "expected at least {min} repetitions, got {count}"
            )));
        }

        Ok(Some(Match::Sequence(values)))
    })
}

/// Returns a [`Grammar`] that applies `grammar` zero or one times.
pub fn optional<K: Clone + 'static>(grammar: Grammar<K>) -> Grammar<K> {
    repeat(0, 1, grammar)
}

/// Returns a [`Grammar`] that applies `grammar` as many times as possible.
pub fn many0<K: Clone + 'static>(grammar: Grammar<K>) -> Grammar<K> {
    repeat(0, UNBOUNDED, grammar)
}

/// Returns a [`Grammar`] that applies `grammar` as many times as possible, but at least once.
pub fn many1<K: Clone + 'static>(grammar: Grammar<K>) -> Grammar<K> {
    repeat(1, UNBOUNDED, grammar)
}
