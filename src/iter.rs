//! Lazy ascending iteration over a [`Tree`][crate::Tree].

use std::iter::FusedIterator;

use crate::node::{Element, Node};

/// An iterator over the values of a tree in ascending order.
///
/// The stack holds the path of nodes whose values haven't been yielded yet, so it never grows
/// beyond the height of the tree.
#[derive(Debug)]
pub struct Iter<'a, T> {
    stack: Vec<&'a Element<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: &'a Node<T>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    /// Pushes `node` and every left descendant along its leftmost path.
    fn push_left_spine(&mut self, mut node: &'a Node<T>) {
        while let Node::Element(element) = node {
            self.stack.push(element);
            node = element.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.stack.pop()?;
        self.push_left_spine(element.right());
        Some(element.value())
    }
}

impl<T> FusedIterator for Iter<'_, T> {}
