//! Updatable Priority Heap
//!
//! A binary heap whose entries can have their priority changed after
//! insertion without being removed and reinserted. The collapse loop uses it
//! to always pick the most constrained cell next, re-ranking neighbors as
//! their candidate sets shrink.
//!
//! # Ordering
//!
//! The comparator is the only extension point. [`HeapOrder`] covers the
//! usual min-first / max-first cases; anything else implements
//! [`PriorityOrder`]. Every operation is comparator-agnostic.
//!
//! # Complexity
//!
//! - `insert`, `pop`: O(log n)
//! - `peek`: O(1)
//! - `update_priority`: O(n) to locate the item, O(log n) to restore order.
//!   Lattices stay in the low hundreds of cells, so a linear scan is fine.

mod order;

pub use order::{HeapOrder, PriorityOrder};

#[derive(Debug, Clone)]
struct Entry<T, P> {
    item: T,
    priority: P,
}

/// Binary heap keyed by a mutable priority.
///
/// # Examples
///
/// ```
/// use hexfill_heap::{HeapOrder, PriorityHeap};
///
/// let mut heap = PriorityHeap::new(HeapOrder::Min);
/// heap.insert('a', 5);
/// heap.insert('b', 1);
/// heap.insert('c', 3);
/// heap.update_priority(&'a', 0);
///
/// assert_eq!(heap.pop(), Some('a'));
/// assert_eq!(heap.pop(), Some('b'));
/// assert_eq!(heap.pop(), Some('c'));
/// assert_eq!(heap.pop(), None);
/// ```
#[derive(Debug, Clone)]
pub struct PriorityHeap<T, P, O = HeapOrder> {
    entries: Vec<Entry<T, P>>,
    order: O,
}

impl<T, P, O: Default> Default for PriorityHeap<T, P, O> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            order: O::default(),
        }
    }
}

impl<T, P, O: PriorityOrder<P>> PriorityHeap<T, P, O> {
    /// Create an empty heap using `order`.
    pub fn new(order: O) -> Self {
        Self {
            entries: Vec::new(),
            order,
        }
    }

    /// Create an empty heap with room for `capacity` entries.
    pub fn with_capacity(order: O, capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            order,
        }
    }

    /// The comparator in use.
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry, keeping the allocation.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Add `item` with `priority`.
    pub fn insert(&mut self, item: T, priority: P) {
        self.entries.push(Entry { item, priority });
        self.sift_up(self.entries.len() - 1);
    }

    /// Remove and return the top item, or `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        self.pop_with_priority().map(|(item, _)| item)
    }

    /// Remove and return the top item together with its priority.
    pub fn pop_with_priority(&mut self) -> Option<(T, P)> {
        if self.entries.is_empty() {
            return None;
        }
        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let top = self.entries.pop()?;
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Some((top.item, top.priority))
    }

    /// The top item without removing it, or `None` when empty.
    pub fn peek(&self) -> Option<&T> {
        self.entries.first().map(|e| &e.item)
    }

    /// Priority of the top item.
    pub fn peek_priority(&self) -> Option<&P> {
        self.entries.first().map(|e| &e.priority)
    }

    /// Entries in internal (heap) order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, &P)> + '_ {
        self.entries.iter().map(|e| (&e.item, &e.priority))
    }

    fn precedes(&self, a: usize, b: usize) -> bool {
        self.order
            .precedes(&self.entries[a].priority, &self.entries[b].priority)
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.precedes(index, parent) {
                break;
            }
            self.entries.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut best = index;
            if left < len && self.precedes(left, best) {
                best = left;
            }
            if right < len && self.precedes(right, best) {
                best = right;
            }
            if best == index {
                return;
            }
            self.entries.swap(index, best);
            index = best;
        }
    }
}

impl<T: PartialEq, P, O: PriorityOrder<P>> PriorityHeap<T, P, O> {
    fn position(&self, item: &T) -> Option<usize> {
        self.entries.iter().position(|e| e.item == *item)
    }

    /// Whether `item` is in the heap.
    pub fn contains(&self, item: &T) -> bool {
        self.position(item).is_some()
    }

    /// Current priority of `item`.
    pub fn priority_of(&self, item: &T) -> Option<&P> {
        self.position(item).map(|i| &self.entries[i].priority)
    }

    /// Change the priority of `item` and restore heap order.
    ///
    /// Returns `false` and does nothing if `item` is not in the heap.
    pub fn update_priority(&mut self, item: &T, priority: P) -> bool {
        let Some(index) = self.position(item) else {
            return false;
        };
        let old = std::mem::replace(&mut self.entries[index].priority, priority);
        let new = &self.entries[index].priority;
        if self.order.precedes(new, &old) {
            self.sift_up(index);
        } else if self.order.precedes(&old, new) {
            self.sift_down(index);
        }
        true
    }
}
