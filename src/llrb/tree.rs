use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::llrb::node::{Color, Node};
use std::borrow::Borrow;
use std::cmp::{self, Ordering};
use std::mem;

pub type Tree<K, V> = Option<Box<Node<K, V>>>;

/// Shape and balance figures gathered while validating a tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Stats {
    /// Number of entries in the tree.
    pub len: usize,
    /// Number of nodes on the longest path from the root to a leaf.
    pub height: usize,
    /// Number of black nodes on every path from the root to an empty child.
    pub black_height: usize,
}

pub fn is_red<K, V>(tree: &Tree<K, V>) -> bool {
    match tree {
        None => false,
        Some(ref node) => node.color == Color::Red,
    }
}

fn should_shift<K, V>(tree: &Tree<K, V>) -> bool {
    match tree {
        Some(ref child) => child.color != Color::Red && !is_red(&child.left),
        None => false,
    }
}

// precondition: there exists a minimum node in the tree
fn remove_min<K, V>(tree: &mut Tree<K, V>) -> Box<Node<K, V>> {
    if let Some(ref mut node) = tree {
        if node.left.is_some() {
            if should_shift(&node.left) {
                node.shift_left();
            }

            let ret = remove_min(&mut node.left);
            node.balance();
            return ret;
        }
    }

    let mut node = tree.take().expect("Expected a non-empty tree.");
    *tree = node.right.take();
    node
}

fn combine_subtrees<K, V>(
    left_tree: Tree<K, V>,
    mut right_tree: Tree<K, V>,
    color: Color,
) -> Tree<K, V> {
    let mut new_root = remove_min(&mut right_tree);
    new_root.left = left_tree;
    new_root.right = right_tree;
    new_root.color = color;
    Some(new_root)
}

/// Colors the root red when both of its children are black so that removal has a red link to
/// push down.
pub fn fix_root<K, V>(tree: &mut Tree<K, V>) {
    if let Some(ref mut node) = tree {
        if !is_red(&node.left) && !is_red(&node.right) {
            node.color = Color::Red;
        }
    }
}

/// Inserts `new_node` into the tree. If the key already exists, only its value is overwritten and
/// the stored key is kept; the passed-in key is returned with the old value. The caller is
/// responsible for coloring the root black afterwards.
pub fn insert<K, V>(tree: &mut Tree<K, V>, new_node: Node<K, V>) -> Option<Entry<K, V>>
where
    K: Ord,
{
    let ret = match tree {
        Some(ref mut node) => match new_node.entry.key.cmp(&node.entry.key) {
            Ordering::Less => insert(&mut node.left, new_node),
            Ordering::Greater => insert(&mut node.right, new_node),
            Ordering::Equal => {
                let Entry { key, value } = new_node.entry;
                let value = mem::replace(&mut node.entry.value, value);
                Some(Entry { key, value })
            },
        },
        None => {
            *tree = Some(Box::new(new_node));
            return None;
        },
    };

    // A replacement leaves the shape untouched, so only fresh leaves need repairs.
    if ret.is_none() {
        if let Some(ref mut node) = tree {
            node.fix_up();
        }
    }

    ret
}

// precondition: the key exists in the tree
pub fn remove<K, V, Q>(tree: &mut Tree<K, V>, key: &Q) -> Option<Entry<K, V>>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let mut node = tree.take()?;
    let ret = if key < node.entry.key.borrow() {
        if should_shift(&node.left) {
            node.shift_left();
        }

        let ret = remove(&mut node.left, key);
        *tree = Some(node);
        ret
    } else {
        if is_red(&node.left) {
            node.rotate_right();
        }

        if key == node.entry.key.borrow() && node.right.is_none() {
            debug_assert!(node.left.is_none());
            return Some(node.entry);
        }

        if should_shift(&node.right) {
            node.shift_right();
        }

        if key == node.entry.key.borrow() {
            let Node {
                entry,
                left,
                right,
                color,
            } = *node;
            *tree = combine_subtrees(left, right, color);
            Some(entry)
        } else {
            let ret = remove(&mut node.right, key);
            *tree = Some(node);
            ret
        }
    };

    if let Some(ref mut node) = tree {
        node.balance();
    }

    ret
}

pub fn get<'a, K, V, Q>(tree: &'a Tree<K, V>, key: &Q) -> Option<&'a Entry<K, V>>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let mut curr = tree;
    while let Some(ref node) = curr {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => curr = &node.right,
            Ordering::Equal => return Some(&node.entry),
        }
    }
    None
}

pub fn get_mut<'a, K, V, Q>(tree: &'a mut Tree<K, V>, key: &Q) -> Option<&'a mut Entry<K, V>>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    tree.as_mut().and_then(|node| match key.cmp(node.entry.key.borrow()) {
        Ordering::Less => get_mut(&mut node.left, key),
        Ordering::Greater => get_mut(&mut node.right, key),
        Ordering::Equal => Some(&mut node.entry),
    })
}

pub fn ceil<'a, K, V, Q>(tree: &'a Tree<K, V>, key: &Q) -> Option<&'a Entry<K, V>>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| match key.cmp(node.entry.key.borrow()) {
        Ordering::Greater => ceil(&node.right, key),
        Ordering::Less => match ceil(&node.left, key) {
            None => Some(&node.entry),
            res => res,
        },
        Ordering::Equal => Some(&node.entry),
    })
}

pub fn floor<'a, K, V, Q>(tree: &'a Tree<K, V>, key: &Q) -> Option<&'a Entry<K, V>>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| match key.cmp(node.entry.key.borrow()) {
        Ordering::Less => floor(&node.left, key),
        Ordering::Greater => match floor(&node.right, key) {
            None => Some(&node.entry),
            res => res,
        },
        Ordering::Equal => Some(&node.entry),
    })
}

pub fn min<K, V>(tree: &Tree<K, V>) -> Option<&Entry<K, V>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.entry
    })
}

pub fn max<K, V>(tree: &Tree<K, V>) -> Option<&Entry<K, V>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.entry
    })
}

pub fn height<K, V>(tree: &Tree<K, V>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => 1 + cmp::max(height(&node.left), height(&node.right)),
    }
}

/// Checks every left-leaning red-black invariant and that exactly `len` nodes are reachable.
pub fn validate<K, V>(tree: &Tree<K, V>, len: usize) -> Result<Stats>
where
    K: Ord,
{
    if is_red(tree) {
        return Err(Error::RedRoot);
    }

    let mut count = 0;
    let black_height = validate_subtree(tree, None, None, 0, &mut count)?;
    if count != len {
        return Err(Error::LengthMismatch {
            expected: len,
            actual: count,
        });
    }

    Ok(Stats {
        len,
        height: height(tree),
        black_height,
    })
}

// Returns the black height of the subtree. `lower` and `upper` are the exclusive key bounds
// inherited from the ancestors.
fn validate_subtree<'a, K, V>(
    tree: &'a Tree<K, V>,
    lower: Option<&'a Entry<K, V>>,
    upper: Option<&'a Entry<K, V>>,
    depth: usize,
    count: &mut usize,
) -> Result<usize>
where
    K: Ord,
{
    let node = match tree {
        None => return Ok(0),
        Some(ref node) => node,
    };
    *count += 1;

    if lower.map_or(false, |bound| node.entry <= *bound)
        || upper.map_or(false, |bound| node.entry >= *bound)
    {
        return Err(Error::OutOfOrder { depth });
    }
    if is_red(&node.right) {
        return Err(Error::RightLeaningRed { depth });
    }
    if node.color == Color::Red && is_red(&node.left) {
        return Err(Error::ConsecutiveReds { depth });
    }

    let left = validate_subtree(&node.left, lower, Some(&node.entry), depth + 1, count)?;
    let right = validate_subtree(&node.right, Some(&node.entry), upper, depth + 1, count)?;
    if left != right {
        return Err(Error::UnbalancedBlacks { left, right });
    }

    match node.color {
        Color::Black => Ok(left + 1),
        Color::Red => Ok(left),
    }
}
