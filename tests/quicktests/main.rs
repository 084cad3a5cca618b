use ordered_bst::Order;
use quickcheck::{Arbitrary, Gen};

mod tree;

/// An enum for the various kinds of "things" to do to
/// a binary search tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Insert the value into the tree
    Insert(T),
    /// Ask whether the value is present
    Present(T),
    /// Compare recursive and iterative walks in this order
    Traverse(Order),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::Present(T::arbitrary(g)),
            2 => Op::Traverse(*g.choose(&Order::ALL).unwrap()),
            _ => unreachable!(),
        }
    }
}
