//! First-in, first-out queue capability used by breadth-first traversals.

use std::collections::VecDeque;

/// A first-in, first-out queue.
///
/// Traversals only need these three operations, so any queue implementation can back them.
/// `VecDeque<T>` implements this trait and is used when no other queue is supplied.
///
/// # Examples
///
/// ```
/// use llrb_map::queue::Queue;
/// use std::collections::VecDeque;
///
/// let mut queue = VecDeque::new();
/// queue.enqueue(1);
/// queue.enqueue(2);
///
/// assert_eq!(queue.dequeue(), Some(1));
/// assert_eq!(queue.dequeue(), Some(2));
/// assert!(Queue::is_empty(&queue));
/// ```
pub trait Queue<T> {
    /// Adds an item to the back of the queue.
    fn enqueue(&mut self, item: T);

    /// Removes the item at the front of the queue. Returns `None` if the queue is empty.
    fn dequeue(&mut self) -> Option<T>;

    /// Returns `true` if the queue holds no items.
    fn is_empty(&self) -> bool;
}

impl<T> Queue<T> for VecDeque<T> {
    fn enqueue(&mut self, item: T) {
        self.push_back(item);
    }

    fn dequeue(&mut self) -> Option<T> {
        self.pop_front()
    }

    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }
}
