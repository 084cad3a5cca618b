//! Errors surfaced by [`Tree`][crate::Tree] queries.

use thiserror::Error;

/// The only way a query against a tree can fail.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `minimum` or `maximum` was asked of a tree with no elements.
    #[error("tree does not have any data")]
    NotFound,
}

/// Shorthand for results of tree queries.
pub type Result<T> = std::result::Result<T, Error>;

/// Returned when a string names no known traversal [`Order`][crate::Order].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown traversal order `{0}`, expected one of preorder, inorder, postorder")]
pub struct ParseOrderError(pub(crate) String);
