//! The three depth-first orders a tree can be walked in.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseOrderError;

/// Which depth-first order to visit a tree's values in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// The node, then its left subtree, then its right subtree.
    Preorder,
    /// The left subtree, then the node, then the right subtree. Values come out ascending.
    Inorder,
    /// The left subtree, then the right subtree, then the node.
    Postorder,
}

impl Order {
    /// Every order, in the conventional preorder, inorder, postorder sequence.
    pub const ALL: [Order; 3] = [Order::Preorder, Order::Inorder, Order::Postorder];
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Preorder => "preorder",
            Self::Inorder => "inorder",
            Self::Postorder => "postorder",
        };
        f.write_str(name)
    }
}

/// Parses the names produced by `Display`, ignoring ASCII case.
impl FromStr for Order {
    type Err = ParseOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|order| s.eq_ignore_ascii_case(&order.to_string()))
            .ok_or_else(|| ParseOrderError(s.to_owned()))
    }
}
