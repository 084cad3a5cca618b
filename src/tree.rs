//! The public face of the crate. A [`Tree`] owns a root [`Node`] and exposes insertion, queries,
//! and both recursive and stack based traversals.
//!
//! # Examples
//!
//! ```
//! use ordered_bst::{Error, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.present(&1));
//! assert_eq!(tree.minimum(), Err(Error::NotFound));
//!
//! tree.insert(2);
//! tree.insert(1);
//! tree.insert(3);
//!
//! // Inserting a value that's already there changes nothing.
//! tree.insert(2);
//!
//! assert!(tree.present(&1));
//! assert_eq!(tree.minimum(), Ok(&1));
//! assert_eq!(tree.maximum(), Ok(&3));
//! assert_eq!(tree.to_string(), "[1 2 3]");
//! ```

use std::fmt;
use std::mem;

use tracing::debug;

use crate::command;
use crate::error::{Error, Result};
use crate::iter::Iter;
use crate::node::Node;
use crate::order::Order;

/// An unbalanced Binary Search Tree holding distinct values. It never rebalances itself;
/// [`is_balanced`][Tree::is_balanced] only reports on the shape insertions produced.
///
/// Visitors passed to the traversal methods are plain `FnMut(&T)` values, so there is no way to
/// hand one a missing callback.
#[derive(Clone, Debug)]
pub struct Tree<T> {
    root: Node<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: Node::Empty }
    }

    /// Inserts `value` into the tree. If an equal value is already present, the tree is left
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert("b");
    /// tree.insert("a");
    /// tree.insert("b");
    ///
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        self.root = mem::take(&mut self.root).insert(value);
    }

    /// Whether the tree holds a value equal to `value`.
    pub fn present(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.root.contains(value)
    }

    /// The smallest value in the tree.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if the tree is empty.
    pub fn minimum(&self) -> Result<&T> {
        self.root.minimum().ok_or_else(|| {
            debug!("minimum requested from an empty tree");
            Error::NotFound
        })
    }

    /// The largest value in the tree.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if the tree is empty.
    pub fn maximum(&self) -> Result<&T> {
        self.root.maximum().ok_or_else(|| {
            debug!("maximum requested from an empty tree");
            Error::NotFound
        })
    }

    /// Recursively visits every value in preorder.
    pub fn preorder(&self, mut visit: impl FnMut(&T)) {
        self.root.preorder(&mut visit);
    }

    /// Recursively visits every value in inorder, i.e. ascending.
    pub fn inorder(&self, mut visit: impl FnMut(&T)) {
        self.root.inorder(&mut visit);
    }

    /// Recursively visits every value in postorder.
    pub fn postorder(&self, mut visit: impl FnMut(&T)) {
        self.root.postorder(&mut visit);
    }

    /// Recursively visits every value in the given `order`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::{Order, Tree};
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// let mut seen = Vec::new();
    /// tree.traverse(Order::Postorder, |x| seen.push(*x));
    /// assert_eq!(seen, [1, 3, 2]);
    /// ```
    pub fn traverse(&self, order: Order, mut visit: impl FnMut(&T)) {
        match order {
            Order::Preorder => self.root.preorder(&mut visit),
            Order::Inorder => self.root.inorder(&mut visit),
            Order::Postorder => self.root.postorder(&mut visit),
        }
    }

    /// Visits every value in preorder without recursion. Always agrees with
    /// [`preorder`][Tree::preorder].
    pub fn preorder_iterative(&self, visit: impl FnMut(&T)) {
        self.traverse_iterative(Order::Preorder, visit);
    }

    /// Visits every value in preorder using a plain stack of nodes rather than the
    /// expand/visit commands [`preorder_iterative`][Tree::preorder_iterative] uses.
    pub fn preorder_iterative_direct(&self, visit: impl FnMut(&T)) {
        command::preorder_direct(&self.root, visit);
    }

    /// Visits every value in inorder without recursion. Always agrees with
    /// [`inorder`][Tree::inorder].
    pub fn inorder_iterative(&self, visit: impl FnMut(&T)) {
        self.traverse_iterative(Order::Inorder, visit);
    }

    /// Visits every value in postorder without recursion. Always agrees with
    /// [`postorder`][Tree::postorder].
    pub fn postorder_iterative(&self, visit: impl FnMut(&T)) {
        self.traverse_iterative(Order::Postorder, visit);
    }

    /// Visits every value in the given `order` using an explicit stack of commands instead of
    /// recursion, so deep trees don't grow the call stack.
    pub fn traverse_iterative(&self, order: Order, visit: impl FnMut(&T)) {
        command::traverse(&self.root, order, visit);
    }

    /// Whether, at every node, the heights of the two subtrees differ by at most one. This is
    /// recomputed from scratch on every call.
    pub fn is_balanced(&self) -> bool {
        self.root.is_balanced()
    }

    /// How many levels the tree has. An empty tree has a height of 0.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// The number of values in the tree. Size isn't tracked so this walks the whole tree.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// An iterator over the values in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::Tree;
    ///
    /// let tree: Tree<_> = [3, 1, 2].into_iter().collect();
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&1, &2, &3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.root)
    }

    /// The root node, for walking the structure by hand.
    pub fn root(&self) -> &Node<T> {
        &self.root
    }
}

/// Renders the values in ascending order, space separated and wrapped in brackets. An empty tree
/// renders as `[]`.
impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.root)
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

/// Inserts the values in iteration order, so the order determines the tree's shape.
impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
