//! This crate exposes a plain, unbalanced Binary Search Tree (BST) over any totally ordered
//! value type, along with recursive and stack based ways of walking it.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert stored values and
//! to ask whether a value is present. BSTs are defined recursively using the notion of a
//! [`Node`]. Here a `Node` is either empty or an element storing one value and two child
//! `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a value less than its
//!    own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a value greater than
//!    its own value.
//!
//! > Note that equal values are never stored twice. Inserting a value that is already present
//! > leaves the tree as it was.
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). This tree never rebalances, so the height depends
//! entirely on insertion order: ascending insertions produce a chain.
//!
//! ## Traversals
//!
//! Trees can be walked depth first in three [`Order`]s. Each order is available recursively
//! ([`Tree::traverse`]) and with an explicit stack ([`Tree::traverse_iterative`]). Both forms
//! visit the same values in the same order for every tree.
//!
//! ```
//! use ordered_bst::{Order, Tree};
//!
//! let tree: Tree<_> = [10, 15, 5, 1, 2, 7, 6, 8, 20, 19].into_iter().collect();
//!
//! let mut recursive = Vec::new();
//! tree.traverse(Order::Postorder, |x| recursive.push(*x));
//!
//! let mut iterative = Vec::new();
//! tree.traverse_iterative(Order::Postorder, |x| iterative.push(*x));
//!
//! assert_eq!(recursive, [2, 1, 6, 8, 7, 5, 19, 20, 15, 10]);
//! assert_eq!(recursive, iterative);
//! ```

#![deny(missing_docs)]

mod command;
pub mod error;
mod iter;
pub mod node;
pub mod order;
pub mod tree;

pub use error::{Error, ParseOrderError, Result};
pub use iter::Iter;
pub use node::{Element, Node};
pub use order::Order;
pub use tree::Tree;
