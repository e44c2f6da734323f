//! Searching and flattening [`Match`] trees.

use super::Match;

/// Returns the interior of the first [`Match::Tagged`] in `tree` labelled `tag`.
///
/// The search is depth-first and left-to-right. Tagged matches with other labels are searched
/// into, but the search stops at the first hit, so nested occurrences of `tag` inside it are
/// not considered.
pub fn find_tag<'m>(tree: &'m Match, tag: &str) -> Option<&'m Match> {
    match tree {
        Match::Scalar(_) => None,
        Match::Sequence(children) => children.iter().find_map(|child| find_tag(child, tag)),
        Match::Tagged { tag: label, inner } if label == tag => Some(inner.as_ref()),
        Match::Tagged { inner, .. } => find_tag(inner, tag),
    }
}

/// Returns the interiors of every [`Match::Tagged`] in `tree` labelled `tag`.
///
/// Traversal order matches [`find_tag`], except that matching tags are also searched into:
/// any hits nested inside a hit are listed before the enclosing hit itself.
pub fn find_all_tags<'m>(tree: &'m Match, tag: &str) -> Vec<&'m Match> {
    let mut found = Vec::new();
    collect_tags(tree, tag, &mut found);
    found
}

/// Pushes every hit for `tag` in `tree` onto `found`.
fn collect_tags<'m>(tree: &'m Match, tag: &str, found: &mut Vec<&'m Match>) {
    match tree {
        Match::Scalar(_) => {}
        Match::Sequence(children) => {
            for child in children {
                collect_tags(child, tag, found);
            }
        }
        Match::Tagged { tag: label, inner } => {
            collect_tags(inner, tag, found);
            if label == tag {
                found.push(inner.as_ref());
            }
        }
    }
}

/// Concatenates every [`Match::Scalar`] reachable from `tree`, left to right.
///
/// This recovers the raw matched text regardless of how many combinators wrapped it, except
/// for text consumed under [`ignore`](crate::combinator::ignore), which never reaches the
/// tree.
pub fn flatten(tree: &Match) -> String {
    let mut buf = String::new();
    flatten_into(tree, &mut buf);
    buf
}

/// Appends the scalars of `tree` to `buf`.
fn flatten_into(tree: &Match, buf: &mut String) {
    match tree {
        Match::Scalar(text) => buf.push_str(text),
        Match::Sequence(children) => children.iter().for_each(|child| flatten_into(child, buf)),
        Match::Tagged { inner, .. } => flatten_into(inner, buf),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `(("k" (key: "a")) (value: ((key: "b") "1")) (key: "c"))`
    fn sample() -> Match {
        Match::Sequence(vec![
            Match::Sequence(vec!["k".into(), Match::tagged("key", "a".into())]),
            Match::tagged(
                "value",
                Match::Sequence(vec![Match::tagged("key", "b".into()), "1".into()]),
            ),
            Match::tagged("key", "c".into()),
        ])
    }

    #[test]
    fn find_tag_returns_first_hit() {
        let tree = sample();
        assert_eq!(find_tag(&tree, "key"), Some(&Match::from("a")));
        assert_eq!(
            find_tag(&tree, "value").map(flatten),
            Some(String::from("b1"))
        );
        assert_eq!(find_tag(&tree, "missing"), None);
        assert_eq!(find_tag(&Match::from("key"), "key"), None);
    }

    #[test]
    fn find_all_tags_searches_through_other_labels() {
        let tree = sample();
        let keys: Vec<_> = find_all_tags(&tree, "key")
            .into_iter()
            .map(flatten)
            .collect();
        assert_eq!(keys, ["a", "b", "c"]);
        assert!(find_all_tags(&tree, "missing").is_empty());
    }

    #[test]
    fn find_all_tags_lists_nested_hits_first() {
        let tree = Match::tagged(
            "list",
            Match::Sequence(vec!["(".into(), Match::tagged("list", "x".into()), ")".into()]),
        );
        let hits = find_all_tags(&tree, "list");
        dbg!(&hits);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0], &Match::from("x"));
        assert_eq!(flatten(hits[1]), "(x)");
    }

    #[test]
    fn flatten_concatenates_scalars() {
        assert_eq!(flatten(&sample()), "kab1c");
        assert_eq!(flatten(&Match::empty()), "");
    }
}
