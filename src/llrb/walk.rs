use crate::llrb::node::{Color, Node};
use crate::llrb::tree::Tree;
use crate::queue::Queue;
use std::collections::VecDeque;
use std::marker::PhantomData;

/// A breadth-first iterator over a tree, yielding each key, value, and link color.
///
/// Nodes are visited level by level from the root, left to right within a level. The queue that
/// holds pending nodes is pluggable through the `Queue` trait and defaults to a `VecDeque`.
pub struct LevelOrder<'a, K, V, Q = VecDeque<&'a Node<K, V>>> {
    queue: Q,
    _marker: PhantomData<&'a Node<K, V>>,
}

impl<'a, K, V, Q> LevelOrder<'a, K, V, Q>
where
    Q: Queue<&'a Node<K, V>>,
{
    pub(crate) fn new(tree: &'a Tree<K, V>, mut queue: Q) -> Self {
        if let Some(root) = tree.as_deref() {
            queue.enqueue(root);
        }
        LevelOrder {
            queue,
            _marker: PhantomData,
        }
    }
}

impl<'a, K, V, Q> Iterator for LevelOrder<'a, K, V, Q>
where
    Q: Queue<&'a Node<K, V>>,
{
    type Item = (&'a K, &'a V, Color);

    fn next(&mut self) -> Option<Self::Item> {
        if self.queue.is_empty() {
            return None;
        }

        let node = self.queue.dequeue()?;
        if let Some(left) = node.left.as_deref() {
            self.queue.enqueue(left);
        }
        if let Some(right) = node.right.as_deref() {
            self.queue.enqueue(right);
        }
        Some((&node.entry.key, &node.entry.value, node.color))
    }
}

/// An iterator that follows right links from the root, yielding each key, value, and link color.
pub struct RightSpine<'a, K, V> {
    current: Option<&'a Node<K, V>>,
}

impl<'a, K, V> RightSpine<'a, K, V> {
    pub(crate) fn new(tree: &'a Tree<K, V>) -> Self {
        RightSpine {
            current: tree.as_deref(),
        }
    }
}

impl<'a, K, V> Iterator for RightSpine<'a, K, V> {
    type Item = (&'a K, &'a V, Color);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        self.current = node.right.as_deref();
        Some((&node.entry.key, &node.entry.value, node.color))
    }
}
