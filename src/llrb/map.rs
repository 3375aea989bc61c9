use crate::entry::Entry;
use crate::error::Result;
use crate::llrb::node::{Color, Node};
use crate::llrb::tree::{self, Stats};
use crate::llrb::walk::{LevelOrder, RightSpine};
use crate::ordered_tree::OrderedTree;
use crate::queue::Queue;
use log::debug;
use std::borrow::Borrow;
use std::collections::VecDeque;
use std::fmt;
use std::ops::{Index, IndexMut};

/// An ordered map implemented using a left-leaning red-black tree.
///
/// A left-leaning red-black tree is a binary search tree that mirrors a 2-3 tree: a red link
/// joins a node to its parent to form a 3-node, and red links may only lean left. After every
/// insertion or removal the tree is repaired bottom-up with rotations and color flips, so every
/// path from the root to an empty child crosses the same number of black links and the height
/// stays below `2 * log2(n + 1)`.
///
/// # Examples
///
/// ```
/// use llrb_map::llrb::LlrbMap;
///
/// let mut map = LlrbMap::new();
/// map.insert(0, 1);
/// map.insert(3, 4);
///
/// assert_eq!(map[&0], 1);
/// assert_eq!(map.get(&1), None);
/// assert_eq!(map.len(), 2);
///
/// assert_eq!(map.min(), Some(&0));
/// assert_eq!(map.ceil(&2), Some(&3));
///
/// map[&0] = 2;
/// assert_eq!(map.remove(&0), Some((0, 2)));
/// assert_eq!(map.remove(&1), None);
/// ```
pub struct LlrbMap<K, V> {
    tree: tree::Tree<K, V>,
    len: usize,
}

impl<K, V> LlrbMap<K, V> {
    /// Constructs a new, empty `LlrbMap<K, V>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::llrb::LlrbMap;
    ///
    /// let map: LlrbMap<u32, u32> = LlrbMap::new();
    /// ```
    pub fn new() -> Self {
        LlrbMap { tree: None, len: 0 }
    }

    /// Inserts a key-value pair into the map. If the key already exists in the map, only the value
    /// is overwritten and the stored key is kept; the passed-in key is returned with the old value.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::llrb::LlrbMap;
    ///
    /// let mut map = LlrbMap::new();
    /// assert_eq!(map.insert(1, 1), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// assert_eq!(map.insert(1, 2), Some((1, 1)));
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<(K, V)>
    where
        K: Ord,
    {
        let LlrbMap {
            ref mut tree,
            ref mut len,
        } = self;
        let replaced = tree::insert(tree, Node::new(key, value));
        if let Some(ref mut root) = tree {
            root.color = Color::Black;
        }

        match replaced {
            Some(entry) => Some(entry.into_pair()),
            None => {
                *len += 1;
                None
            },
        }
    }

    /// Removes a key-value pair from the map. If the key exists in the map, it will return the
    /// associated key-value pair. Otherwise it will return `None` and leave the tree untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::llrb::LlrbMap;
    ///
    /// let mut map = LlrbMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.remove(&1), Some((1, 1)));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        if !self.contains_key(key) {
            debug!("llrb: remove of an absent key, tree unchanged");
            return None;
        }

        let LlrbMap {
            ref mut tree,
            ref mut len,
        } = self;
        tree::fix_root(tree);
        let removed = tree::remove(tree, key);
        if let Some(ref mut root) = tree {
            root.color = Color::Black;
        }

        removed.map(|entry| {
            *len -= 1;
            entry.into_pair()
        })
    }

    /// Checks if a key exists in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::llrb::LlrbMap;
    ///
    /// let mut map = LlrbMap::new();
    /// map.insert(1, 1);
    /// assert!(!map.contains_key(&0));
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Returns an immutable reference to the value associated with a particular key. It will
    /// return `None` if the key does not exist in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::llrb::LlrbMap;
    ///
    /// let mut map = LlrbMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.get(&0), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        tree::get(&self.tree, key).map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::llrb::LlrbMap;
    ///
    /// let mut map = LlrbMap::new();
    /// map.insert(1, 1);
    /// *map.get_mut(&1).unwrap() = 2;
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        tree::get_mut(&mut self.tree, key).map(|entry| &mut entry.value)
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::llrb::LlrbMap;
    ///
    /// let mut map = LlrbMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::llrb::LlrbMap;
    ///
    /// let map: LlrbMap<u32, u32> = LlrbMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the map, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::llrb::LlrbMap;
    ///
    /// let mut map = LlrbMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// map.clear();
    /// assert_eq!(map.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        debug!("llrb: clearing {} entries", self.len);
        self.tree = None;
        self.len = 0;
    }

    /// Returns a key in the map that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::llrb::LlrbMap;
    ///
    /// let mut map = LlrbMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.floor(&0), None);
    /// assert_eq!(map.floor(&2), Some(&1));
    /// ```
    pub fn floor<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        tree::floor(&self.tree, key).map(|entry| &entry.key)
    }

    /// Returns a key in the map that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::llrb::LlrbMap;
    ///
    /// let mut map = LlrbMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.ceil(&0), Some(&1));
    /// assert_eq!(map.ceil(&2), None);
    /// ```
    pub fn ceil<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        tree::ceil(&self.tree, key).map(|entry| &entry.key)
    }

    /// Returns the minimum key of the map. Returns `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::llrb::LlrbMap;
    ///
    /// let mut map = LlrbMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&K> {
        tree::min(&self.tree).map(|entry| &entry.key)
    }

    /// Returns the maximum key of the map. Returns `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::llrb::LlrbMap;
    ///
    /// let mut map = LlrbMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&K> {
        tree::max(&self.tree).map(|entry| &entry.key)
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::llrb::LlrbMap;
    ///
    /// let mut map = LlrbMap::new();
    /// assert_eq!(map.height(), 0);
    /// for key in 1..=7 {
    ///     map.insert(key, ());
    /// }
    /// assert_eq!(map.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        tree::height(&self.tree)
    }

    /// Checks the structural invariants of the tree: keys are in search order, no red link leans
    /// right, no two red links are consecutive, every path to an empty child crosses the same
    /// number of black links, and the root is black. Returns the tree's statistics, or the first
    /// violation found.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::llrb::LlrbMap;
    ///
    /// let mut map = LlrbMap::new();
    /// for key in 0..100 {
    ///     map.insert(key, key);
    /// }
    ///
    /// let stats = map.validate().unwrap();
    /// assert_eq!(stats.len, 100);
    /// assert!(stats.height <= 13);
    /// ```
    pub fn validate(&self) -> Result<Stats>
    where
        K: Ord,
    {
        tree::validate(&self.tree, self.len).map_err(|err| {
            debug!("llrb: validation failed: {}", err);
            err
        })
    }

    /// Returns a breadth-first iterator over the map. The iterator yields each key, value, and
    /// the color of the link to its parent, level by level from the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::llrb::{Color, LlrbMap};
    ///
    /// let mut map = LlrbMap::new();
    /// map.insert(1, 'a');
    /// map.insert(2, 'b');
    ///
    /// let mut iterator = map.level_order();
    /// assert_eq!(iterator.next(), Some((&2, &'b', Color::Black)));
    /// assert_eq!(iterator.next(), Some((&1, &'a', Color::Red)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn level_order(&self) -> LevelOrder<'_, K, V> {
        LevelOrder::new(&self.tree, VecDeque::new())
    }

    /// Returns a breadth-first iterator over the map that keeps pending nodes in `queue`. The
    /// queue should be empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::llrb::LlrbMap;
    /// use std::collections::VecDeque;
    ///
    /// let mut map = LlrbMap::new();
    /// for key in 1..=3 {
    ///     map.insert(key, ());
    /// }
    ///
    /// let keys = map
    ///     .level_order_with(VecDeque::with_capacity(4))
    ///     .map(|(key, _, _)| *key)
    ///     .collect::<Vec<u32>>();
    /// assert_eq!(keys, vec![2, 1, 3]);
    /// ```
    pub fn level_order_with<'a, Q>(&'a self, queue: Q) -> LevelOrder<'a, K, V, Q>
    where
        Q: Queue<&'a Node<K, V>>,
    {
        LevelOrder::new(&self.tree, queue)
    }

    /// Returns an iterator that starts at the root and follows right links, yielding each key,
    /// value, and link color.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::llrb::LlrbMap;
    ///
    /// let mut map = LlrbMap::new();
    /// for key in 1..=7 {
    ///     map.insert(key, ());
    /// }
    ///
    /// let keys = map.right_spine().map(|(key, _, _)| *key).collect::<Vec<u32>>();
    /// assert_eq!(keys, vec![4, 6, 7]);
    /// ```
    pub fn right_spine(&self) -> RightSpine<'_, K, V> {
        RightSpine::new(&self.tree)
    }

    /// Returns an iterator over the map. The iterator will yield key-value pairs using in-order
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::llrb::LlrbMap;
    ///
    /// let mut map = LlrbMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    ///
    /// let mut iterator = map.iter();
    /// assert_eq!(iterator.next(), Some((&1, &1)));
    /// assert_eq!(iterator.next(), Some((&2, &2)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> LlrbMapIter<'_, K, V> {
        LlrbMapIter {
            current: &self.tree,
            stack: Vec::new(),
        }
    }

    /// Returns a mutable iterator over the map. The iterator will yield key-value pairs using
    /// in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_map::llrb::LlrbMap;
    ///
    /// let mut map = LlrbMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    ///
    /// for (key, value) in &mut map {
    ///     *value += 1;
    /// }
    ///
    /// let mut iterator = map.iter_mut();
    /// assert_eq!(iterator.next(), Some((&1, &mut 2)));
    /// assert_eq!(iterator.next(), Some((&2, &mut 3)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter_mut(&mut self) -> LlrbMapIterMut<'_, K, V> {
        LlrbMapIterMut {
            current: self.tree.as_deref_mut(),
            stack: Vec::new(),
        }
    }
}

impl<K, V> OrderedTree<K, V> for LlrbMap<K, V>
where
    K: Ord,
{
    fn is_empty(&self) -> bool {
        LlrbMap::is_empty(self)
    }

    fn len(&self) -> usize {
        LlrbMap::len(self)
    }

    fn contains_key(&self, key: &K) -> bool {
        LlrbMap::contains_key(self, key)
    }

    fn insert(&mut self, key: K, value: V) -> Option<(K, V)> {
        LlrbMap::insert(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<(K, V)> {
        LlrbMap::remove(self, key)
    }
}

impl<K, V> IntoIterator for LlrbMap<K, V> {
    type IntoIter = LlrbMapIntoIter<K, V>;
    type Item = (K, V);

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.tree,
            stack: Vec::new(),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a LlrbMap<K, V>
where
    K: 'a,
    V: 'a,
{
    type IntoIter = LlrbMapIter<'a, K, V>;
    type Item = (&'a K, &'a V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a mut LlrbMap<K, V>
where
    K: 'a,
    V: 'a,
{
    type IntoIter = LlrbMapIterMut<'a, K, V>;
    type Item = (&'a K, &'a mut V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An owning iterator for `LlrbMap<K, V>`.
///
/// This iterator traverses the elements of the map in-order and yields owned entries.
pub struct LlrbMapIntoIter<K, V> {
    current: tree::Tree<K, V>,
    stack: Vec<Node<K, V>>,
}

impl<K, V> Iterator for LlrbMapIntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { entry, right, .. } = node;
            self.current = right;
            entry.into_pair()
        })
    }
}

/// An iterator for `LlrbMap<K, V>`.
///
/// This iterator traverses the elements of the map in-order and yields immutable references.
pub struct LlrbMapIter<'a, K, V> {
    current: &'a tree::Tree<K, V>,
    stack: Vec<&'a Node<K, V>>,
}

impl<'a, K, V> Iterator for LlrbMapIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            let Node {
                entry: Entry { ref key, ref value },
                ref right,
                ..
            } = node;
            self.current = right;
            (key, value)
        })
    }
}

/// A mutable iterator for `LlrbMap<K, V>`.
///
/// This iterator traverses the elements of the map in-order and yields mutable references.
pub struct LlrbMapIterMut<'a, K, V> {
    current: Option<&'a mut Node<K, V>>,
    stack: Vec<(&'a mut Entry<K, V>, Option<&'a mut Node<K, V>>)>,
}

impl<'a, K, V> Iterator for LlrbMapIterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        let LlrbMapIterMut {
            ref mut current,
            ref mut stack,
        } = self;
        while let Some(node) = current.take() {
            let Node { entry, left, right, .. } = node;
            *current = left.as_deref_mut();
            stack.push((entry, right.as_deref_mut()));
        }
        stack.pop().map(|(entry, right)| {
            *current = right;
            let Entry { key, value } = entry;
            (&*key, value)
        })
    }
}

impl<K, V> Default for LlrbMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for LlrbMap<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, K, V, Q> Index<&'a Q> for LlrbMap<K, V>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    type Output = V;

    fn index(&self, key: &Q) -> &Self::Output {
        self.get(key).expect("Error: key does not exist.")
    }
}

impl<'a, K, V, Q> IndexMut<&'a Q> for LlrbMap<K, V>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    fn index_mut(&mut self, key: &Q) -> &mut Self::Output {
        self.get_mut(key).expect("Error: key does not exist.")
    }
}
