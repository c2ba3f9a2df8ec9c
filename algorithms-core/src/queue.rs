//! Min-priority queue used by graph search.
//!
//! [`MinPriorityQueue`] is a thin wrapper over [`BinaryHeap`] that inverts
//! its ordering so the entry with the smallest priority pops first. Entries
//! with equal priority pop in ascending value order, which keeps searches
//! deterministic. There is no decrease-key operation: callers push a new entry
//! when a priority improves and discard stale entries when they surface.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A prioritised value held by [`MinPriorityQueue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueueEntry<P, V> {
    /// Ordering key; smaller keys pop first.
    pub priority: P,
    /// Payload carried alongside the key.
    pub value: V,
}

impl<P: Ord, V: Ord> Ord for QueueEntry<P, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap behaves as a min-heap.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.value.cmp(&self.value))
    }
}

impl<P: Ord, V: Ord> PartialOrd for QueueEntry<P, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A binary-heap priority queue popping the smallest priority first.
///
/// # Examples
/// ```
/// use algorithms_core::MinPriorityQueue;
///
/// let mut queue = MinPriorityQueue::new();
/// queue.push(7, 'c');
/// queue.push(2, 'a');
/// queue.push(2, 'b');
///
/// assert_eq!(queue.pop().map(|entry| entry.value), Some('a'));
/// assert_eq!(queue.pop().map(|entry| entry.value), Some('b'));
/// assert_eq!(queue.pop().map(|entry| entry.priority), Some(7));
/// assert!(queue.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct MinPriorityQueue<P, V> {
    heap: BinaryHeap<QueueEntry<P, V>>,
}

impl<P: Ord, V: Ord> Default for MinPriorityQueue<P, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Ord, V: Ord> MinPriorityQueue<P, V> {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    /// Create an empty queue with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Insert `value` with the given `priority`.
    pub fn push(&mut self, priority: P, value: V) {
        self.heap.push(QueueEntry { priority, value });
    }

    /// Remove and return the entry with the smallest priority.
    pub fn pop(&mut self) -> Option<QueueEntry<P, V>> {
        self.heap.pop()
    }

    /// Borrow the entry that [`pop`](Self::pop) would return next.
    #[must_use]
    pub fn peek(&self) -> Option<&QueueEntry<P, V>> {
        self.heap.peek()
    }

    /// Number of entries, stale ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<P: Ord, V: Ord> FromIterator<(P, V)> for MinPriorityQueue<P, V> {
    fn from_iter<I: IntoIterator<Item = (P, V)>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<P: Ord, V: Ord> Extend<(P, V)> for MinPriorityQueue<P, V> {
    fn extend<I: IntoIterator<Item = (P, V)>>(&mut self, iter: I) {
        self.heap.extend(
            iter.into_iter()
                .map(|(priority, value)| QueueEntry { priority, value }),
        );
    }
}
