use crate::entry::Entry;
use crate::llrb::tree::{self, Tree};
use log::trace;
use std::mem;

/// The color of the link from a node to its parent.
///
/// A red link glues a node to its parent so that the pair forms one 3-node of the corresponding
/// 2-3 tree. Black links connect distinct 2-3 nodes.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn flip(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    pub fn is_red(self) -> bool {
        self == Color::Red
    }
}

/// A struct representing an internal node of a left-leaning red-black tree.
pub struct Node<K, V> {
    pub entry: Entry<K, V>,
    pub color: Color,
    pub left: Tree<K, V>,
    pub right: Tree<K, V>,
}

impl<K, V> Node<K, V> {
    /// New nodes always start as red leaves.
    pub fn new(key: K, value: V) -> Self {
        Node {
            entry: Entry { key, value },
            color: Color::Red,
            left: None,
            right: None,
        }
    }

    fn has_red_left_grandchild(&self) -> bool {
        match self.left {
            Some(ref child) => child.color.is_red() && tree::is_red(&child.left),
            None => false,
        }
    }

    /// Toggles the color of this node and both of its children. Only the shape is checked here:
    /// insertion splits a black node with two red children, while removal flips a red node with
    /// two black children to move a red link down. `fix_up` asserts the insertion case.
    pub fn flip_colors(&mut self) {
        debug_assert!(
            self.left.is_some() && self.right.is_some(),
            "flip_colors requires two children",
        );
        trace!("llrb: flipping colors of a {:?} node", self.color);
        self.color = self.color.flip();
        if let Some(ref mut child) = self.left {
            child.color = child.color.flip();
        }
        if let Some(ref mut child) = self.right {
            child.color = child.color.flip();
        }
    }

    //       x                y
    //     /   \            /   \
    //    a     y   -->    x     c
    //        /   \      /   \
    //       b     c    a     b
    pub fn rotate_left(&mut self) {
        debug_assert!(tree::is_red(&self.right), "rotate_left requires a red right child");
        trace!("llrb: rotating left");
        let mut child = self
            .right
            .take()
            .expect("Expected right child node to be `Some`.");
        self.right = child.left.take();
        mem::swap(&mut *child, self);
        self.color = child.color;
        child.color = Color::Red;
        self.left = Some(child);
    }

    pub fn rotate_right(&mut self) {
        debug_assert!(tree::is_red(&self.left), "rotate_right requires a red left child");
        trace!("llrb: rotating right");
        let mut child = self
            .left
            .take()
            .expect("Expected left child node to be `Some`.");
        self.left = child.right.take();
        mem::swap(&mut *child, self);
        self.color = child.color;
        child.color = Color::Red;
        self.right = Some(child);
    }

    /// Repairs this subtree after an insertion below it. A 4-node is only ever split at a black
    /// node while inserting.
    pub fn fix_up(&mut self) {
        self.rebalance(true);
    }

    /// Repairs this subtree on the way back up from a removal.
    pub fn balance(&mut self) {
        self.rebalance(false);
    }

    fn rebalance(&mut self, inserting: bool) {
        if tree::is_red(&self.right) && !tree::is_red(&self.left) {
            self.rotate_left();
        }

        if self.has_red_left_grandchild() {
            self.rotate_right();
        }

        if tree::is_red(&self.left) && tree::is_red(&self.right) {
            debug_assert!(
                !inserting || self.color == Color::Black,
                "split a 4-node under a red link",
            );
            self.flip_colors();
        }
    }

    /// Makes the left child or one of its children red before descending left.
    pub fn shift_left(&mut self) {
        trace!("llrb: moving red link left");
        self.flip_colors();
        if let Some(mut child) = self.right.take() {
            if tree::is_red(&child.left) {
                child.rotate_right();
                self.right = Some(child);
                self.rotate_left();
                self.flip_colors();
            } else {
                self.right = Some(child);
            }
        }
    }

    /// Makes the right child or one of its children red before descending right.
    pub fn shift_right(&mut self) {
        trace!("llrb: moving red link right");
        self.flip_colors();
        if self.has_red_left_grandchild() {
            self.rotate_right();
            self.flip_colors();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, Node};

    fn black(key: u32) -> Box<Node<u32, u32>> {
        let mut node = Node::new(key, key);
        node.color = Color::Black;
        Box::new(node)
    }

    fn red(key: u32) -> Box<Node<u32, u32>> {
        Box::new(Node::new(key, key))
    }

    #[test]
    fn test_new_is_red_leaf() {
        let node = Node::new(1, "one");
        assert_eq!(node.color, Color::Red);
        assert!(node.left.is_none());
        assert!(node.right.is_none());
    }

    #[test]
    fn test_color_flip() {
        assert_eq!(Color::Red.flip(), Color::Black);
        assert_eq!(Color::Black.flip(), Color::Red);
        assert!(Color::Red.is_red());
        assert!(!Color::Black.is_red());
    }

    #[test]
    fn test_rotate_left() {
        let mut x = black(2);
        let mut y = red(4);
        x.left = Some(black(1));
        y.left = Some(black(3));
        y.right = Some(black(5));
        x.right = Some(y);

        x.rotate_left();

        assert_eq!(x.entry.key, 4);
        assert_eq!(x.color, Color::Black);
        let left = x.left.as_ref().unwrap();
        assert_eq!(left.entry.key, 2);
        assert_eq!(left.color, Color::Red);
        assert_eq!(left.left.as_ref().unwrap().entry.key, 1);
        assert_eq!(left.right.as_ref().unwrap().entry.key, 3);
        assert_eq!(x.right.as_ref().unwrap().entry.key, 5);
    }

    #[test]
    fn test_rotate_right() {
        let mut y = black(4);
        let mut x = red(2);
        x.left = Some(black(1));
        x.right = Some(black(3));
        y.left = Some(x);
        y.right = Some(black(5));

        y.rotate_right();

        assert_eq!(y.entry.key, 2);
        assert_eq!(y.color, Color::Black);
        assert_eq!(y.left.as_ref().unwrap().entry.key, 1);
        let right = y.right.as_ref().unwrap();
        assert_eq!(right.entry.key, 4);
        assert_eq!(right.color, Color::Red);
        assert_eq!(right.left.as_ref().unwrap().entry.key, 3);
        assert_eq!(right.right.as_ref().unwrap().entry.key, 5);
    }

    #[test]
    fn test_rotate_round_trip() {
        let mut x = black(2);
        x.left = Some(black(1));
        x.right = Some(red(3));

        x.rotate_left();
        x.rotate_right();

        assert_eq!(x.entry.key, 2);
        assert_eq!(x.color, Color::Black);
        assert_eq!(x.left.as_ref().unwrap().entry.key, 1);
        assert_eq!(x.right.as_ref().unwrap().entry.key, 3);
        assert_eq!(x.right.as_ref().unwrap().color, Color::Red);
    }

    #[test]
    fn test_flip_colors() {
        let mut node = black(2);
        node.left = Some(red(1));
        node.right = Some(red(3));

        node.flip_colors();

        assert_eq!(node.color, Color::Red);
        assert_eq!(node.left.as_ref().unwrap().color, Color::Black);
        assert_eq!(node.right.as_ref().unwrap().color, Color::Black);
    }

    #[test]
    fn test_fix_up_right_leaning_red() {
        let mut node = black(1);
        node.right = Some(red(2));

        node.fix_up();

        assert_eq!(node.entry.key, 2);
        assert_eq!(node.color, Color::Black);
        assert_eq!(node.left.as_ref().unwrap().color, Color::Red);
        assert!(node.right.is_none());
    }

    #[test]
    fn test_fix_up_left_chain() {
        let mut middle = red(2);
        middle.left = Some(red(1));
        let mut node = black(3);
        node.left = Some(middle);

        node.fix_up();

        assert_eq!(node.entry.key, 2);
        assert_eq!(node.color, Color::Red);
        assert_eq!(node.left.as_ref().unwrap().color, Color::Black);
        assert_eq!(node.right.as_ref().unwrap().color, Color::Black);
    }

    #[test]
    fn test_fix_up_right_of_3_node() {
        let mut node = black(2);
        node.left = Some(red(1));
        node.right = Some(red(3));

        node.fix_up();

        assert_eq!(node.entry.key, 2);
        assert_eq!(node.color, Color::Red);
        assert_eq!(node.left.as_ref().unwrap().color, Color::Black);
        assert_eq!(node.right.as_ref().unwrap().color, Color::Black);
    }

    #[test]
    fn test_balance_splits_red_node() {
        // Removal can leave a red node with two red children; only insertion forbids that.
        let mut node = red(2);
        node.left = Some(red(1));
        node.right = Some(red(3));

        node.balance();

        assert_eq!(node.entry.key, 2);
        assert_eq!(node.color, Color::Black);
        assert_eq!(node.left.as_ref().unwrap().color, Color::Black);
        assert_eq!(node.right.as_ref().unwrap().color, Color::Black);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "split a 4-node under a red link")]
    fn test_fix_up_red_split_panics() {
        let mut node = red(2);
        node.left = Some(red(1));
        node.right = Some(red(3));

        node.fix_up();
    }

    #[test]
    fn test_flip_colors_pushes_red_down() {
        let mut node = red(2);
        node.left = Some(black(1));
        node.right = Some(black(3));

        node.flip_colors();

        assert_eq!(node.color, Color::Black);
        assert_eq!(node.left.as_ref().unwrap().color, Color::Red);
        assert_eq!(node.right.as_ref().unwrap().color, Color::Red);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "flip_colors requires two children")]
    fn test_flip_colors_missing_child_panics() {
        let mut node = black(2);
        node.left = Some(red(1));

        node.flip_colors();
    }
}
