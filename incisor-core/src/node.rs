//! Ergonomic wrapper around `tree_sitter::Node`, adapted from the teacher
//! crate's `node.rs`. Bundles a node with the source text it was parsed
//! from so callers never have to thread a separate `&[u8]` around.

use crate::traits::Search;

#[derive(Clone, Copy)]
pub struct Node<'a> {
    inner: tree_sitter::Node<'a>,
    source: &'a [u8],
}

impl<'a> Node<'a> {
    pub fn new(inner: tree_sitter::Node<'a>, source: &'a [u8]) -> Self {
        Self { inner, source }
    }

    pub fn kind(&self) -> &'static str {
        self.inner.kind()
    }

    pub fn id(&self) -> usize {
        self.inner.id()
    }

    pub fn text(&self) -> &'a str {
        self.inner
            .utf8_text(self.source)
            .unwrap_or_default()
    }

    pub fn start_byte(&self) -> usize {
        self.inner.start_byte()
    }

    pub fn end_byte(&self) -> usize {
        self.inner.end_byte()
    }

    /// 1-based line, 0-based column, matching `SourceLocation`'s convention.
    pub fn start_position(&self) -> (usize, usize) {
        let p = self.inner.start_position();
        (p.row + 1, p.column)
    }

    pub fn parent(&self) -> Option<Node<'a>> {
        self.inner.parent().map(|n| Node::new(n, self.source))
    }

    pub fn child(&self, i: usize) -> Option<Node<'a>> {
        self.inner.child(i).map(|n| Node::new(n, self.source))
    }

    pub fn named_child(&self, i: usize) -> Option<Node<'a>> {
        self.inner
            .named_child(i)
            .map(|n| Node::new(n, self.source))
    }

    pub fn child_count(&self) -> usize {
        self.inner.child_count()
    }

    pub fn named_child_count(&self) -> usize {
        self.inner.named_child_count()
    }

    pub fn child_by_field_name(&self, field: &str) -> Option<Node<'a>> {
        self.inner
            .child_by_field_name(field)
            .map(|n| Node::new(n, self.source))
    }

    pub fn is_error(&self) -> bool {
        self.inner.is_error() || self.inner.is_missing()
    }

    pub fn has_error(&self) -> bool {
        self.inner.has_error()
    }

    /// All direct named children, in order.
    pub fn named_children(&self) -> Vec<Node<'a>> {
        let mut cursor = self.inner.walk();
        let children = self
            .inner
            .named_children(&mut cursor)
            .map(|n| Node::new(n, self.source))
            .collect();
        children
    }

    /// Pre-order iterator over every descendant, including self.
    pub fn iter_preorder(&self) -> PreorderIter<'a> {
        PreorderIter {
            stack: vec![*self],
        }
    }
}

pub struct PreorderIter<'a> {
    stack: Vec<Node<'a>>,
}

impl<'a> Iterator for PreorderIter<'a> {
    type Item = Node<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let mut cursor = node.inner.walk();
        let children: Vec<Node<'a>> = node
            .inner
            .children(&mut cursor)
            .map(|n| Node::new(n, node.source))
            .collect();
        self.stack.extend(children.into_iter().rev());
        Some(node)
    }
}

impl<'a> Search<'a> for Node<'a> {
    fn first_occurrence(&self, kinds: &[&str]) -> Option<Node<'a>> {
        self.iter_preorder().find(|n| kinds.contains(&n.kind()))
    }

    fn occurrences_of(&self, kinds: &[&str]) -> Vec<Node<'a>> {
        self.iter_preorder()
            .filter(|n| kinds.contains(&n.kind()))
            .collect()
    }

    fn first_ancestor(&self, kinds: &[&str]) -> Option<Node<'a>> {
        let mut current = self.parent();
        while let Some(n) = current {
            if kinds.contains(&n.kind()) {
                return Some(n);
            }
            current = n.parent();
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Search;

    fn parse(src: &str) -> (tree_sitter::Tree, Vec<u8>) {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&tree_sitter_cpp::LANGUAGE.into())
            .unwrap();
        let tree = parser.parse(src, None).unwrap();
        (tree, src.as_bytes().to_vec())
    }

    #[test]
    fn preorder_visits_every_node_once() {
        let (tree, source) = parse("int x = 1;");
        let root = Node::new(tree.root_node(), &source);
        let count = root.iter_preorder().count();
        assert!(count > 1);
    }

    #[test]
    fn first_occurrence_finds_identifier() {
        let (tree, source) = parse("int x = 1;");
        let root = Node::new(tree.root_node(), &source);
        let id = root.first_occurrence(&["identifier"]).unwrap();
        assert_eq!(id.text(), "x");
    }

    #[test]
    fn first_ancestor_walks_up() {
        let (tree, source) = parse("int x = 1;");
        let root = Node::new(tree.root_node(), &source);
        let id = root.first_occurrence(&["identifier"]).unwrap();
        let decl = id.first_ancestor(&["declaration"]).unwrap();
        assert_eq!(decl.kind(), "declaration");
    }
}
