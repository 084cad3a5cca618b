use ordered_bst::{Error, Order, Tree};
use quickcheck_macros::quickcheck;

use std::collections::BTreeSet;

use crate::Op;

fn build(xs: &[i8]) -> Tree<i8> {
    xs.iter().copied().collect()
}

fn recursive(tree: &Tree<i8>, order: Order) -> Vec<i8> {
    let mut seen = Vec::new();
    tree.traverse(order, |x| seen.push(*x));
    seen
}

fn iterative(tree: &Tree<i8>, order: Order) -> Vec<i8> {
    let mut seen = Vec::new();
    tree.traverse_iterative(order, |x| seen.push(*x));
    seen
}

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// the tree agrees with the set on every query along the way.
fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, set: &mut BTreeSet<i8>) -> bool {
    for op in ops {
        let agrees = match op {
            Op::Insert(x) => {
                tree.insert(*x);
                set.insert(*x);
                true
            }
            Op::Present(x) => tree.present(x) == set.contains(x),
            Op::Traverse(order) => recursive(tree, *order) == iterative(tree, *order),
        };
        if !agrees {
            return false;
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set) && tree.iter().eq(set.iter())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    xs.iter().all(|x| tree.present(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = build(&xs);
    let added: BTreeSet<_> = xs.into_iter().collect();
    let nots: BTreeSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.present(x))
}

#[quickcheck]
fn inserting_twice_matches_inserting_once(xs: Vec<i8>) -> bool {
    let once = build(&xs);
    let mut twice = build(&xs);
    twice.extend(xs.iter().copied());

    once.to_string() == twice.to_string()
        && Order::ALL
            .into_iter()
            .all(|order| recursive(&once, order) == recursive(&twice, order))
}

#[quickcheck]
fn inorder_is_strictly_ascending(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    recursive(&tree, Order::Inorder)
        .windows(2)
        .all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn every_order_visits_each_distinct_value_once(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let distinct: BTreeSet<_> = xs.into_iter().collect();

    Order::ALL.into_iter().all(|order| {
        let seen = recursive(&tree, order);
        let unique: BTreeSet<i8> = seen.iter().copied().collect();
        seen.len() == distinct.len() && unique == distinct
    })
}

#[quickcheck]
fn iterative_matches_recursive(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    let mut direct = Vec::new();
    tree.preorder_iterative_direct(|x| direct.push(*x));

    direct == recursive(&tree, Order::Preorder)
        && Order::ALL
            .into_iter()
            .all(|order| recursive(&tree, order) == iterative(&tree, order))
}

#[quickcheck]
fn min_max(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    match (xs.iter().min(), xs.iter().max()) {
        (Some(min), Some(max)) => tree.minimum() == Ok(min) && tree.maximum() == Ok(max),
        _ => tree.minimum() == Err(Error::NotFound) && tree.maximum() == Err(Error::NotFound),
    }
}

#[quickcheck]
fn rendering_lists_distinct_values(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let distinct: BTreeSet<_> = xs.into_iter().collect();
    let listed = distinct
        .iter()
        .map(i8::to_string)
        .collect::<Vec<_>>()
        .join(" ");

    tree.to_string() == format!("[{}]", listed) && tree.len() == distinct.len()
}

#[quickcheck]
fn ascending_inserts_are_unbalanced_past_two(n: u8) -> bool {
    let n = n % 64;
    let tree: Tree<u8> = (0..n).collect();

    tree.height() == usize::from(n) && tree.is_balanced() == (n <= 2)
}
