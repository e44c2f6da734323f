//! The combinator library.
//!
//! Every function in this module consumes zero or more [`Grammar`](crate::grammar::Grammar)s
//! and returns a new one. Grammars are built once, typically when a program starts, and then
//! applied to as many cursors as needed.
//!
//! # Failure
//! Every combinator leaves the cursor where it found it when it fails recoverably, so that
//! callers can try something else from the same position. Fatal failures, produced by
//! [`require`] (or by a [`node`] transform), are never retried: [`alt`] returns them
//! immediately, and [`repeat`] and [`seq`] pass them straight through.
//!
//! # Example
//! ```
//! use stateparse::{
//!     combinator::{class, ignore, literal, many0, many1, require, seq, tag},
//!     grammar::TextGrammar,
//!     tree::query::{find_all_tags, flatten},
//! };
//!
//! // list ::= '[' item (',' item)* ']'
//! let item: TextGrammar = tag("item", many1(class("a-z").unwrap()));
//! let list: TextGrammar = seq([
//!     ignore(literal("[")),
//!     item.clone(),
//!     many0(seq([ignore(literal(",")), require([item])])),
//!     ignore(literal("]")),
//! ]);
//!
//! let tree = list.parse_str("[ab,c]").unwrap();
//! let items: Vec<_> = find_all_tags(&tree, "item").into_iter().map(flatten).collect();
//! assert_eq!(items, ["ab", "c"]);
//!
//! // a trailing comma commits to another item, so this is a fatal error
//! assert!(list.parse_str("[ab,]").unwrap_err().is_fatal());
//! ```

pub mod branch;
pub mod multi;
pub mod primitive;
pub mod transform;

pub use branch::{alt, require, seq};
pub use multi::{many0, many1, optional, repeat, UNBOUNDED};
pub use primitive::{any_char, class, literal};
pub use transform::{ignore, node, resolve, tag};
