//! The recursive representation backing a [`Tree`][crate::Tree].
//!
//! A [`Node`] is either [`Empty`][Node::Empty], marking the absence of a subtree, or an
//! [`Element`][Node::Element] holding one value and exactly two children. Recursion always
//! terminates at `Empty`, so leaf handling lives in the `Empty` arms below and descent lives in
//! the `Element` arms.

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use tracing::trace;

/// One position in a tree. Every child slot holds a `Node`, so a "missing" child is
/// represented by [`Node::Empty`] rather than by an `Option`.
#[derive(Clone, Debug)]
pub enum Node<T> {
    /// No subtree here.
    Empty,
    /// A value with its two (possibly empty) subtrees. This trivially wraps [`Element`].
    Element(Element<T>),
}

/// A `Node` that holds a value. It always owns two children although those children may be
/// [`Empty`][Node::Empty].
#[derive(Clone, Debug)]
pub struct Element<T> {
    value: T,
    left: Box<Node<T>>,
    right: Box<Node<T>>,
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<T> Node<T> {
    /// Returns the node that should occupy this position once `value` is inserted.
    ///
    /// An `Empty` node grows into a new `Element`. An `Element` hands the value to one of its
    /// children and returns itself; inserting a value equal to its own is a no-op.
    pub fn insert(self, value: T) -> Self
    where
        T: Ord,
    {
        match self {
            Self::Empty => {
                trace!("growing a new element node");
                Self::Element(Element::new(value))
            }
            Self::Element(mut element) => {
                element.insert(value);
                Self::Element(element)
            }
        }
    }

    /// The smallest value in this subtree, or `None` when the subtree is empty.
    pub fn minimum(&self) -> Option<&T> {
        match self {
            Self::Empty => None,
            // An empty left subtree means this node holds the minimum.
            Self::Element(element) => element.left.minimum().or(Some(&element.value)),
        }
    }

    /// The largest value in this subtree, or `None` when the subtree is empty.
    pub fn maximum(&self) -> Option<&T> {
        match self {
            Self::Empty => None,
            Self::Element(element) => element.right.maximum().or(Some(&element.value)),
        }
    }

    /// Whether some node in this subtree holds a value equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        match self {
            Self::Empty => false,
            Self::Element(element) => match value.cmp(&element.value) {
                Ordering::Less => element.left.contains(value),
                Ordering::Equal => true,
                Ordering::Greater => element.right.contains(value),
            },
        }
    }

    /// Visits this node's value, then its left subtree, then its right subtree.
    pub fn preorder<F>(&self, visit: &mut F)
    where
        F: FnMut(&T),
    {
        if let Self::Element(element) = self {
            visit(&element.value);
            element.left.preorder(visit);
            element.right.preorder(visit);
        }
    }

    /// Visits the left subtree, then this node's value, then the right subtree. This yields the
    /// values in ascending order.
    pub fn inorder<F>(&self, visit: &mut F)
    where
        F: FnMut(&T),
    {
        if let Self::Element(element) = self {
            element.left.inorder(visit);
            visit(&element.value);
            element.right.inorder(visit);
        }
    }

    /// Visits the left subtree, then the right subtree, then this node's value.
    pub fn postorder<F>(&self, visit: &mut F)
    where
        F: FnMut(&T),
    {
        if let Self::Element(element) = self {
            element.left.postorder(visit);
            element.right.postorder(visit);
            visit(&element.value);
        }
    }

    /// How many levels are in this subtree. `Empty` has a height of 0 and a node with no
    /// children has a height of 1.
    pub fn height(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Element(element) => element.left.height().max(element.right.height()) + 1,
        }
    }

    /// Whether every node in this subtree has children whose heights differ by at most one.
    ///
    /// Heights are not cached, so this recomputes them for every node it checks and is
    /// quadratic on degenerate trees.
    pub fn is_balanced(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Element(element) => {
                element.left.is_balanced()
                    && element.right.is_balanced()
                    && element.left.height().abs_diff(element.right.height()) <= 1
            }
        }
    }

    /// The left and right children of this node, or `None` for `Empty` which has nothing to
    /// expand.
    pub fn children(&self) -> Option<(&Self, &Self)> {
        match self {
            Self::Empty => None,
            Self::Element(element) => Some((element.left(), element.right())),
        }
    }

    /// The value held by this node, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Empty => None,
            Self::Element(element) => Some(element.value()),
        }
    }

    /// Whether this is an `Empty` node.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl<T> Element<T> {
    /// Construct a new `Element` holding `value` with two empty children.
    fn new(value: T) -> Self {
        Self {
            value,
            left: Box::new(Node::Empty),
            right: Box::new(Node::Empty),
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The subtree holding values smaller than this node's.
    pub fn left(&self) -> &Node<T> {
        &self.left
    }

    /// The subtree holding values larger than this node's.
    pub fn right(&self) -> &Node<T> {
        &self.right
    }

    /// Inserts `value` below this node. Only one child slot is ever replaced and this node's own
    /// value never changes.
    fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        match value.cmp(&self.value) {
            Ordering::Less => Self::insert_into(&mut self.left, value),
            Ordering::Equal => trace!("ignoring duplicate value"),
            Ordering::Greater => Self::insert_into(&mut self.right, value),
        }
    }

    fn insert_into(child: &mut Box<Node<T>>, value: T)
    where
        T: Ord,
    {
        let old = mem::take(child.as_mut());
        **child = old.insert(value);
    }
}

/// Renders the values of the subtree in ascending order separated by single spaces. `Empty`
/// renders as nothing.
impl<T> fmt::Display for Node<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self::Element(element) = self else {
            return Ok(());
        };

        if !element.left.is_empty() {
            write!(f, "{} ", element.left)?;
        }
        write!(f, "{}", element.value)?;
        if !element.right.is_empty() {
            write!(f, " {}", element.right)?;
        }
        Ok(())
    }
}
