use exercises::functional::Tree;

use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use crate::Op;

/// Applies a set of operations to a tree and a set, checking every
/// `Contains` against the set as it goes. Returns every snapshotted version
/// alongside the set it should still match.
fn do_ops(ops: &[Op<u8>]) -> Option<Vec<(Tree, BTreeSet<String>)>> {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();
    let mut history = Vec::new();

    for op in ops {
        match op {
            Op::Insert(k) => {
                tree = tree.insert(k.to_string());
                set.insert(k.to_string());
            }
            Op::Contains(k) => {
                if tree.contains(&k.to_string()) != set.contains(&k.to_string()) {
                    return None;
                }
            }
            Op::Snapshot => history.push((tree.clone(), set.clone())),
        }
    }
    history.push((tree, set));

    Some(history)
}

/// Checks that a tree holds exactly the keys of a set, in order.
fn matches_model(tree: &Tree, set: &BTreeSet<String>) -> bool {
    tree.size() == set.len()
        && tree.iter().eq(set.iter().map(String::as_str))
        && set.iter().all(|key| tree.contains(key))
}

#[quickcheck]
fn fuzz_multiple_operations_u8(ops: Vec<Op<u8>>) -> bool {
    match do_ops(&ops) {
        Some(history) => history.iter().all(|(tree, set)| matches_model(tree, set)),
        None => false,
    }
}

#[quickcheck]
fn contains(xs: Vec<String>) -> bool {
    let tree: Tree = xs.iter().cloned().collect();

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<String>, nots: Vec<String>) -> bool {
    let tree: Tree = xs.iter().cloned().collect();
    let added: BTreeSet<_> = xs.into_iter().collect();
    let nots: BTreeSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn insertion_order_does_not_change_contents(xs: Vec<u8>, k1: u8, k2: u8) -> bool {
    let tree: Tree = xs.iter().map(u8::to_string).collect();
    let one_way = tree.insert(k1.to_string()).insert(k2.to_string());
    let other_way = tree.insert(k2.to_string()).insert(k1.to_string());

    one_way.size() == other_way.size()
        && one_way.iter().eq(other_way.iter())
        && one_way.contains(&k1.to_string())
        && one_way.contains(&k2.to_string())
}

#[quickcheck]
fn same_insertion_order_gives_equal_trees(xs: Vec<u8>) -> bool {
    let a: Tree = xs.iter().map(u8::to_string).collect();
    let b: Tree = xs.iter().map(u8::to_string).collect();

    a == b && a.to_string() == b.to_string() && hash_of(&a) == hash_of(&b)
}

fn hash_of(tree: &Tree) -> u64 {
    let mut hasher = DefaultHasher::new();
    tree.hash(&mut hasher);
    hasher.finish()
}

#[quickcheck]
fn display_lists_keys_in_order(xs: Vec<u8>) -> bool {
    let tree: Tree = xs.iter().map(|x| format!("<{}>", x)).collect();
    let stripped: String = tree
        .to_string()
        .chars()
        .filter(|c| *c != '(' && *c != ')')
        .collect();

    stripped == tree.iter().collect::<String>()
}
