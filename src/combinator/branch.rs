//! Sequencing, alternation, and committed sequencing.

use std::sync::Arc;

use tracing::trace;

use crate::{
    error::{ErrorKind, ParseError},
    grammar::{DynCursor, Grammar, ParseResult},
    tree::Match,
};

/// Returns a [`Grammar`] that applies each of `grammars` in order, producing a
/// [`Match::Sequence`] of their values.
///
/// Values of children which produced none (see [`ignore`](super::ignore)) are omitted. If any
/// child fails, the cursor is restored to where the sequence began and the child's error is
/// returned unchanged; no partial match is ever produced.
pub fn seq<K, I>(grammars: I) -> Grammar<K>
where
    K: Clone + 'static,
    I: IntoIterator<Item = Grammar<K>>,
{
    let grammars: Arc<[Grammar<K>]> = grammars.into_iter().collect();
    Grammar::new(move |cursor| run_seq(&grammars, cursor))
}

/// Returns a [`Grammar`] that tries each of `grammars` in order, producing the value of the
/// first to succeed.
///
/// A recoverable failure restores the cursor and moves on to the next alternative. A fatal
/// failure is returned immediately without trying any further alternatives. If every
/// alternative fails, the resulting recoverable error lists each of their messages.
pub fn alt<K, I>(grammars: I) -> Grammar<K>
where
    K: Clone + 'static,
    I: IntoIterator<Item = Grammar<K>>,
{
    let grammars: Arc<[Grammar<K>]> = grammars.into_iter().collect();
    Grammar::new(move |cursor| {
        let start = cursor.checkpoint();
        let mut failures = Vec::with_capacity(grammars.len());

        for (index, grammar) in grammars.iter().enumerate() {
            match grammar.apply(cursor) {
                Ok(value) => return Ok(value),
                Err(err) => match err.kind() {
                    ErrorKind::Recoverable => {
                        cursor.restore(start.clone());
                        failures.push(err);
                    }
                    ErrorKind::Fatal => {
                        trace!(alternative = index, error = %err, "alternation aborted");
                        return Err(err);
                    }
                },
            }
        }

        trace!(alternatives = grammars.len(), "alternation exhausted");
        let messages: Vec<_> = failures.iter().map(ParseError::message).collect();
        Err(ParseError::recoverable(format!(
            "no alternative matched: [{}]",
            messages.join("; ")
        )))
    })
}

/// Returns a [`Grammar`] which behaves like [`seq`], except that every failure is fatal.
///
/// This marks a point of no return: once the enclosing grammar has matched enough to reach a
/// `require`, an enclosing [`alt`] will not try its remaining alternatives if the required
/// sequence fails.
pub fn require<K, I>(grammars: I) -> Grammar<K>
where
    K: Clone + 'static,
    I: IntoIterator<Item = Grammar<K>>,
{
    let grammars: Arc<[Grammar<K>]> = grammars.into_iter().collect();
    Grammar::new(move |cursor| {
        run_seq(&grammars, cursor).map_err(|err| {
            trace!(error = %err, "required sequence failed");
            err.into_fatal()
        })
    })
}

/// Applies `grammars` in order, restoring `cursor` if any of them fail.
fn run_seq<K: Clone + 'static>(
    grammars: &[Grammar<K>],
    cursor: &mut DynCursor<'_, K>,
) -> ParseResult {
    let start = cursor.checkpoint();
    let mut values = Vec::with_capacity(grammars.len());

    for grammar in grammars {
        match grammar.apply(cursor) {
            Ok(value) => values.extend(value),
            Err(err) => {
                cursor.restore(start);
                return Err(err);
            }
        }
    }

    Ok(Some(Match::Sequence(values)))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::{
        combinator::{ignore, literal},
        cursor::TextCursor,
        grammar::TextGrammar,
    };

    use super::*;

    /// Returns a grammar that counts its invocations and then defers to `inner`.
    fn counting(inner: TextGrammar) -> (TextGrammar, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let grammar = Grammar::new(move |cursor| {
            counter.fetch_add(1, Ordering::SeqCst);
            inner.apply(cursor)
        });
        (grammar, count)
    }

    #[test]
    fn seq_collects_values_and_drops_ignored_ones() {
        let grammar: TextGrammar = seq([literal("a"), ignore(literal("b")), literal("c")]);
        let mut cursor = TextCursor::new("abcd");
        let tree = grammar.apply(&mut cursor).unwrap().unwrap();
        dbg!(&tree);

        assert_eq!(tree, Match::Sequence(vec!["a".into(), "c".into()]));
        assert_eq!(cursor.remaining(), "d");
    }

    #[test]
    fn seq_is_atomic() {
        let grammar: TextGrammar = seq([literal("a"), literal("b"), literal("c")]);
        let mut cursor = TextCursor::new("abx");
        let err = grammar.apply(&mut cursor).unwrap_err();
        assert_eq!(err.message(), "expected 'c', got 'x'");
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn seq_restores_on_fatal_failure() {
        let grammar: TextGrammar = seq([literal("a"), require([literal("b")])]);
        let mut cursor = TextCursor::new("ax");
        let err = grammar.apply(&mut cursor).unwrap_err();
        assert!(err.is_fatal());
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn empty_seq_matches_nothing() {
        let grammar: TextGrammar = seq([]);
        assert_eq!(
            grammar.apply(&mut TextCursor::new("a")),
            Ok(Some(Match::empty()))
        );
    }

    #[test]
    fn alt_short_circuits_on_success() {
        let (first, first_count) = counting(literal("a"));
        let (second, second_count) = counting(literal("a"));
        let grammar: TextGrammar = alt([first, second]);

        let mut cursor = TextCursor::new("a");
        assert_eq!(grammar.apply(&mut cursor), Ok(Some(Match::from("a"))));
        assert_eq!(first_count.load(Ordering::SeqCst), 1);
        assert_eq!(second_count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn alt_backtracks_between_alternatives() {
        let grammar: TextGrammar = alt([
            seq([literal("a"), literal("b")]),
            seq([literal("a"), literal("c")]),
        ]);
        let mut cursor = TextCursor::new("ac");
        let tree = grammar.apply(&mut cursor).unwrap().unwrap();
        assert_eq!(tree, Match::Sequence(vec!["a".into(), "c".into()]));
        assert!(cursor.is_at_end());
    }

    #[test]
    fn alt_aggregates_failures() {
        let grammar: TextGrammar = alt([literal("a"), literal("b")]);
        let mut cursor = TextCursor::new("c");
        let err = grammar.apply(&mut cursor).unwrap_err();
        dbg!(&err);

        assert!(!err.is_fatal());
        assert_eq!(
            err.message(),
            "no alternative matched: [expected 'a', got 'c'; expected 'b', got 'c']"
        );
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn fatal_failure_stops_alternation() {
        let (fallback, fallback_count) = counting(literal("ab"));
        let grammar: TextGrammar = alt([
            seq([literal("a"), require([literal("c")])]),
            fallback,
        ]);

        let mut cursor = TextCursor::new("ab");
        let err = grammar.apply(&mut cursor).unwrap_err();
        assert!(err.is_fatal());
        assert_eq!(err.to_string(), "fatal match error: expected 'c', got 'b'");
        assert_eq!(fallback_count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn require_succeeds_like_seq() {
        let grammar: TextGrammar = require([literal("a"), ignore(literal("b"))]);
        assert_eq!(
            grammar.apply(&mut TextCursor::new("ab")),
            Ok(Some(Match::Sequence(vec!["a".into()])))
        );
    }
}
