//! Capability shared by ordered associative containers.

/// An ordered associative container with unique keys.
///
/// Callers that only need to store, probe, and drop keys can be written against this trait
/// instead of a concrete tree.
///
/// # Examples
///
/// ```
/// use llrb_map::llrb::LlrbMap;
/// use llrb_map::ordered_tree::OrderedTree;
///
/// fn fill<T: OrderedTree<u32, u32>>(tree: &mut T) {
///     for key in 0..10 {
///         tree.insert(key, key);
///     }
/// }
///
/// let mut map = LlrbMap::new();
/// fill(&mut map);
/// assert_eq!(OrderedTree::len(&map), 10);
/// assert!(OrderedTree::contains_key(&map, &9));
/// ```
pub trait OrderedTree<K, V> {
    /// Returns `true` if the container holds no keys.
    fn is_empty(&self) -> bool;

    /// Returns the number of distinct keys in the container.
    fn len(&self) -> usize;

    /// Checks if a key exists in the container.
    fn contains_key(&self, key: &K) -> bool;

    /// Inserts a key-value pair. If the key already exists, its value is overwritten and the
    /// passed-in key is returned with the old value.
    fn insert(&mut self, key: K, value: V) -> Option<(K, V)>;

    /// Removes a key. Returns the removed pair, or `None` if the key was absent.
    fn remove(&mut self, key: &K) -> Option<(K, V)>;
}
