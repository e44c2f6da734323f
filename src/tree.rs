//! Match trees.
//!
//! Every successful grammar produces a [`Match`]: either a [`Match::Scalar`] holding some
//! matched text, a [`Match::Sequence`] of child matches, or a [`Match::Tagged`] wrapper used
//! to mark semantically interesting sub-results for extraction with the helpers in
//! [`query`].
//!
//! The [`Display`](std::fmt::Display) implementation on [`Match`] produces a lisp-style
//! s-expression, e.g. `("a" (digit: "1") "c")`.

pub mod query;

/// The result of a successful parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Match {
    /// A single produced value, typically one character or a literal.
    Scalar(String),
    /// An ordered list of child matches.
    Sequence(Vec<Match>),
    /// A labelled child match.
    Tagged {
        /// The label attached by [`tag`](crate::combinator::tag).
        tag: String,
        /// The wrapped match.
        inner: Box<Match>,
    },
}

impl Match {
    /// Returns an empty [`Match::Sequence`].
    pub const fn empty() -> Self {
        Self::Sequence(Vec::new())
    }

    /// Wraps `inner` in a [`Match::Tagged`] with the given `tag`.
    pub fn tagged(tag: impl Into<String>, inner: Match) -> Self {
        Self::Tagged {
            tag: tag.into(),
            inner: Box::new(inner),
        }
    }

    /// Returns the contained text if `self` is a [`Match::Scalar`].
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the children of `self` if it is a [`Match::Sequence`].
    pub fn as_sequence(&self) -> Option<&[Match]> {
        match self {
            Self::Sequence(children) => Some(children),
            _ => None,
        }
    }

    /// Returns `true` if `self` is a [`Match::Sequence`] with no children.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Sequence(children) if children.is_empty())
    }
}

impl From<&str> for Match {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_owned())
    }
}

impl From<String> for Match {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<char> for Match {
    fn from(value: char) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<Vec<Match>> for Match {
    fn from(value: Vec<Match>) -> Self {
        Self::Sequence(value)
    }
}

impl std::fmt::Display for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scalar(text) => write!(f, "{text:?}"),
            Self::Sequence(children) => {
                write!(f, "(")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{child}")?;
                }
                write!(f, ")")
            }
            Self::Tagged { tag, inner } => write!(f, "({tag}: {inner})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_an_s_expression() {
        let tree = Match::Sequence(vec![
            "a".into(),
            Match::tagged("digit", '1'.into()),
            Match::empty(),
        ]);
        assert_eq!(tree.to_string(), r#"("a" (digit: "1") ())"#);
    }

    #[test]
    fn accessors_match_variants() {
        let scalar = Match::from("x");
        assert_eq!(scalar.as_scalar(), Some("x"));
        assert_eq!(scalar.as_sequence(), None);
        assert!(!scalar.is_empty());

        let seq = Match::from(vec![scalar.clone()]);
        assert_eq!(seq.as_sequence(), Some(&[scalar][..]));
        assert!(Match::empty().is_empty());
    }
}
