//! Small trait seams between the tree-sitter-backed frontend and the
//! traversal code in `ast_walker`. Adapted from the teacher crate's
//! `traits.rs`, trimmed to the one language this crate supports.

use crate::node::Node;

/// A callback invoked once per matching node during a walk. Returning
/// `false` stops descent into that node's children; the walker still
/// visits its siblings.
pub trait Callback {
    type Res;
    type Cfg;

    fn call(cfg: &Self::Cfg, node: &Node) -> Self::Res;
}

/// Depth-first search helpers shared by every traversal in this crate.
/// Grounded in the teacher's `Search` trait (`node.rs`), narrowed to the
/// handful of queries the analyzer actually needs.
pub trait Search<'a> {
    /// The first descendant (including self) whose tree-sitter node kind
    /// is in `kinds`, pre-order.
    fn first_occurrence(&self, kinds: &[&str]) -> Option<Node<'a>>;

    /// All descendants (including self) whose node kind is in `kinds`,
    /// pre-order, not descending further once a match is found.
    fn occurrences_of(&self, kinds: &[&str]) -> Vec<Node<'a>>;

    /// Nearest ancestor whose node kind is in `kinds`.
    fn first_ancestor(&self, kinds: &[&str]) -> Option<Node<'a>>;
}
