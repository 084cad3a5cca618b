//! Stack based traversals. These walk a tree without recursion by keeping the pending work on an
//! explicit stack.
//!
//! The general engine pushes [`Command`]s. Each one pairs a node with what should happen to it:
//! either expand it into the commands recursion would have run there, or visit its value. Since
//! the stack is last-in-first-out, the commands for an expansion are pushed in the reverse of the
//! order they should run. For example, inorder runs "left, self, right" so it pushes right, then
//! self, then left:
//!
//! ```text
//!   pop (n, Expand)  ->  push (right, Expand), (n, Visit), (left, Expand)
//!                                                          ^ popped next
//! ```

use tracing::trace;

use crate::node::Node;
use crate::order::Order;

/// What to do with a node when its command is popped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Intent {
    /// Replace the node with the commands for its subtree.
    Expand,
    /// Hand the node's value to the visitor.
    Visit,
}

#[derive(Debug)]
struct Command<'a, T> {
    node: &'a Node<T>,
    intent: Intent,
}

impl<'a, T> Command<'a, T> {
    fn expand(node: &'a Node<T>) -> Self {
        Self {
            node,
            intent: Intent::Expand,
        }
    }

    fn visit(node: &'a Node<T>) -> Self {
        Self {
            node,
            intent: Intent::Visit,
        }
    }
}

/// Walks the tree rooted at `root` in `order` using the command stack. Returns how many commands
/// were popped.
pub(crate) fn traverse<T, F>(root: &Node<T>, order: Order, mut visit: F) -> usize
where
    F: FnMut(&T),
{
    let mut stack = vec![Command::expand(root)];
    let mut popped = 0;

    while let Some(Command { node, intent }) = stack.pop() {
        popped += 1;
        // Commands for empty subtrees are dropped.
        let (Some(value), Some((left, right))) = (node.value(), node.children()) else {
            continue;
        };

        match intent {
            Intent::Visit => visit(value),
            Intent::Expand => match order {
                Order::Preorder => stack.extend([
                    Command::expand(right),
                    Command::expand(left),
                    Command::visit(node),
                ]),
                Order::Inorder => stack.extend([
                    Command::expand(right),
                    Command::visit(node),
                    Command::expand(left),
                ]),
                Order::Postorder => stack.extend([
                    Command::visit(node),
                    Command::expand(right),
                    Command::expand(left),
                ]),
            },
        }
    }

    trace!(%order, popped, "finished command traversal");
    popped
}

/// Preorder without the expand/visit split. Preorder visits a node as soon as it is popped, so
/// the stack only needs to hold nodes: visit, then push right and left.
pub(crate) fn preorder_direct<T, F>(root: &Node<T>, mut visit: F) -> usize
where
    F: FnMut(&T),
{
    let mut stack = vec![root];
    let mut popped = 0;

    while let Some(node) = stack.pop() {
        popped += 1;
        let (Some(value), Some((left, right))) = (node.value(), node.children()) else {
            continue;
        };

        visit(value);
        stack.push(right);
        stack.push(left);
    }

    trace!(popped, "finished direct preorder traversal");
    popped
}
