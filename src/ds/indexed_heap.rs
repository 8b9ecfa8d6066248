//! Indexed binary min-heap with arbitrary removal.
//!
//! A priority queue whose storage is a plain array-backed binary heap, paired
//! with a [`PositionIndex`] that maps each value to the slots holding it.
//! The index turns `contains` into a hash lookup and `remove(&value)` into a
//! lookup plus one O(log n) repair, instead of an O(n) scan.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────────┐
//! │                        IndexedMinHeap Layout                                │
//! │                                                                             │
//! │   heap: Vec<T>  (min-heap order, len() == logical size)                     │
//! │                                                                             │
//! │              [0] 2                                                          │
//! │             /     \                                                         │
//! │         [1] 2     [2] 9                                                     │
//! │         /   \                                                               │
//! │     [3] 7   [4] 4                                                           │
//! │                                                                             │
//! │   index: PositionIndex<T>                                                   │
//! │     2 → {0, 1}    4 → {4}    7 → {3}    9 → {2}                             │
//! │                                                                             │
//! │   Every slot exchange goes through swap(i, j), which updates both.          │
//! └─────────────────────────────────────────────────────────────────────────────┘
//!
//! Remove Flow
//! ───────────
//!   remove(&7):
//!     1. i = index.last_position(7)      → 3
//!     2. swap(3, last)                   (7 now at the tail)
//!     3. heap.pop(); index.remove(7, last)
//!     4. sink(3); if it did not move → swim(3)
//!
//! Heapify
//! ───────
//!   from_vec(v): index every element at its slot, then sink slots
//!   len/2 - 1 down to 0. Each subtree is ordered before its parent sinks,
//!   so the whole build is O(n).
//! ```
//!
//! ## Ordering
//!
//! Smaller values have higher priority. Comparisons are non-strict (`<=`):
//! an element swims past an equal parent, and during a sink the right child
//! is chosen when both children are equal. Equal values are
//! indistinguishable through the public API, so this only shows in
//! [`positions`](IndexedMinHeap::positions) and [`iter`](IndexedMinHeap::iter).
//!
//! ## Operations
//!
//! | Operation          | Description                              | Complexity |
//! |--------------------|------------------------------------------|------------|
//! | `push`             | Append and swim                          | O(log n)   |
//! | `peek`             | Smallest element                         | O(1)       |
//! | `pop`              | Remove smallest                          | O(log n)   |
//! | `contains`         | Index lookup                             | O(1)       |
//! | `remove`           | Remove one occurrence of a value         | O(log n)   |
//! | `remove_at`        | Remove the element at a slot             | O(log n)   |
//! | `from_vec`         | Heapify                                  | O(n)       |
//! | `from_iter`        | Repeated `push`                          | O(n log n) |
//! | `is_min_heap`      | Recursive order check of a subtree       | O(n)       |
//!
//! ## Example Usage
//!
//! ```
//! use heapdex::ds::IndexedMinHeap;
//!
//! let mut heap = IndexedMinHeap::new();
//! for job in [7, 2, 9, 2, 4] {
//!     heap.push(job);
//! }
//!
//! assert_eq!(heap.peek(), Some(&2));
//! assert!(heap.remove(&9));
//! assert!(!heap.contains(&9));
//!
//! assert_eq!(heap.pop(), Some(2));
//! assert!(heap.contains(&2)); // one duplicate left
//! assert_eq!(heap.into_sorted_vec(), vec![2, 4, 7]);
//! ```
//!
//! ## Thread Safety
//!
//! `IndexedMinHeap` is not thread-safe. Wrap in a mutex for shared access.
//!
//! ## Implementation Notes
//!
//! - Stored values must not change their `Ord`/`Hash`/`Eq` behaviour while
//!   inside the heap; the API never hands out `&mut T`.
//! - `check_invariants()` verifies heap order and index agreement;
//!   `debug_validate_invariants()` asserts it in debug/test builds.

use std::fmt;
use std::hash::Hash;

use crate::ds::position_index::PositionIndex;
use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::HeapMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::HeapMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    HeapMetricsReadRecorder, HeapMetricsRecorder, MetricsReset, MetricsSnapshotProvider,
};

/// Binary min-heap with a value → positions index.
///
/// # Type Parameters
///
/// - `T`: Element type (must be `Ord + Hash + Clone`). `Ord` gives priority
///   (smallest first); `Hash + Eq` key the index, which keeps one clone per
///   distinct value.
///
/// # Example
///
/// ```
/// use heapdex::ds::IndexedMinHeap;
///
/// // O(n) build from an unordered vector
/// let mut heap = IndexedMinHeap::from_vec(vec![5, 3, 8, 1, 9, 2]);
/// assert!(heap.is_min_heap(0));
///
/// assert_eq!(heap.pop(), Some(1));
/// assert_eq!(heap.pop(), Some(2));
/// assert_eq!(heap.len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<T> {
    heap: Vec<T>,
    index: PositionIndex<T>,
    #[cfg(feature = "metrics")]
    metrics: HeapMetrics,
}

impl<T> IndexedMinHeap<T>
where
    T: Ord + Hash + Clone,
{
    /// Creates an empty heap.
    ///
    /// # Example
    ///
    /// ```
    /// use heapdex::ds::IndexedMinHeap;
    ///
    /// let heap: IndexedMinHeap<u32> = IndexedMinHeap::new();
    /// assert!(heap.is_empty());
    /// assert_eq!(heap.peek(), None);
    /// ```
    pub fn new() -> Self {
        Self {
            heap: Vec::new(),
            index: PositionIndex::new(),
            #[cfg(feature = "metrics")]
            metrics: HeapMetrics::default(),
        }
    }

    /// Creates an empty heap with room for `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if the allocation fails, like [`Vec::with_capacity`]. Use
    /// [`try_with_capacity`](Self::try_with_capacity) for untrusted hints.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            index: PositionIndex::with_capacity(capacity),
            #[cfg(feature = "metrics")]
            metrics: HeapMetrics::default(),
        }
    }

    /// Creates an empty heap with room for `capacity` elements, rejecting
    /// hints that cannot be allocated.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` exceeds what storage or the
    /// index can reserve. Nothing is allocated in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use heapdex::ds::IndexedMinHeap;
    ///
    /// let heap = IndexedMinHeap::<String>::try_with_capacity(128).unwrap();
    /// assert!(heap.capacity() >= 128);
    ///
    /// let err = IndexedMinHeap::<String>::try_with_capacity(usize::MAX).unwrap_err();
    /// assert!(err.message().contains("capacity"));
    /// ```
    pub fn try_with_capacity(capacity: usize) -> Result<Self, ConfigError> {
        let mut heap = Self::new();
        heap.heap.try_reserve_exact(capacity).map_err(|err| {
            ConfigError::new(format!(
                "capacity hint {} cannot be reserved for heap storage: {}",
                capacity, err
            ))
        })?;
        heap.index.try_reserve(capacity).map_err(|err| {
            ConfigError::new(format!(
                "capacity hint {} cannot be reserved for the position index: {}",
                capacity, err
            ))
        })?;
        Ok(heap)
    }

    /// Builds a heap from `elements` in O(n) by heapifying in place.
    ///
    /// # Example
    ///
    /// ```
    /// use heapdex::ds::IndexedMinHeap;
    ///
    /// let heap = IndexedMinHeap::from_vec(vec!["pear", "apple", "fig", "apple"]);
    /// assert_eq!(heap.peek(), Some(&"apple"));
    /// assert_eq!(heap.count(&"apple"), 2);
    /// ```
    pub fn from_vec(elements: Vec<T>) -> Self {
        let mut index = PositionIndex::with_capacity(elements.len());
        for (position, value) in elements.iter().enumerate() {
            index.insert(value, position);
        }

        let mut heap = Self {
            heap: elements,
            index,
            #[cfg(feature = "metrics")]
            metrics: HeapMetrics::default(),
        };
        #[cfg(feature = "metrics")]
        heap.metrics.record_heapify();

        for k in (0..heap.heap.len() / 2).rev() {
            heap.sink(k);
        }
        heap
    }

    /// Builds a heap by pushing `elements` one at a time, O(n log n).
    ///
    /// Equivalent to `collect()`; use [`from_vec`](Self::from_vec) when the
    /// elements are already in a vector.
    ///
    /// # Example
    ///
    /// ```
    /// use heapdex::ds::IndexedMinHeap;
    ///
    /// let heap = IndexedMinHeap::from_iter_incremental([5, 3, 8, 1, 9, 2]);
    /// assert_eq!(heap.into_sorted_vec(), vec![1, 2, 3, 5, 8, 9]);
    /// ```
    pub fn from_iter_incremental<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let elements = elements.into_iter();
        let mut heap = Self::with_capacity(elements.size_hint().0);
        heap.extend(elements);
        heap
    }

    /// Returns the number of stored elements, duplicates included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements storage can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    /// Returns the number of distinct values stored.
    pub fn distinct_len(&self) -> usize {
        self.index.len()
    }

    /// Returns the smallest element without removing it.
    ///
    /// # Example
    ///
    /// ```
    /// use heapdex::ds::IndexedMinHeap;
    ///
    /// let mut heap = IndexedMinHeap::new();
    /// assert_eq!(heap.peek(), None);
    ///
    /// heap.push(4);
    /// heap.push(1);
    /// assert_eq!(heap.peek(), Some(&1));
    /// assert_eq!(heap.len(), 2);
    /// ```
    pub fn peek(&self) -> Option<&T> {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_peek_call();

        let top = self.heap.first();

        #[cfg(feature = "metrics")]
        if top.is_some() {
            (&self.metrics).record_peek_found();
        }
        top
    }

    /// Adds `value`, restoring heap order by swimming it up.
    ///
    /// # Example
    ///
    /// ```
    /// use heapdex::ds::IndexedMinHeap;
    ///
    /// let mut heap = IndexedMinHeap::new();
    /// heap.push(3);
    /// heap.push(3);
    /// assert_eq!(heap.len(), 2);
    /// assert_eq!(heap.count(&3), 2);
    /// ```
    pub fn push(&mut self, value: T) {
        #[cfg(feature = "metrics")]
        self.metrics.record_push();

        let slot = self.heap.len();
        self.index.insert(&value, slot);
        self.heap.push(value);
        self.swim(slot);
    }

    /// Adds `value` if present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for `None`; the heap is unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use heapdex::ds::IndexedMinHeap;
    ///
    /// let mut heap = IndexedMinHeap::new();
    /// assert!(heap.push_opt(Some(5)).is_ok());
    /// assert!(heap.push_opt(None).is_err());
    /// assert_eq!(heap.len(), 1);
    /// ```
    pub fn push_opt(&mut self, value: Option<T>) -> Result<(), ConfigError> {
        match value {
            Some(value) => {
                self.push(value);
                Ok(())
            },
            None => Err(ConfigError::new("cannot add a missing element to the heap")),
        }
    }

    /// Removes and returns the smallest element.
    ///
    /// # Example
    ///
    /// ```
    /// use heapdex::ds::IndexedMinHeap;
    ///
    /// let mut heap = IndexedMinHeap::from_vec(vec![3, 1, 2]);
    /// assert_eq!(heap.pop(), Some(1));
    /// assert_eq!(heap.pop(), Some(2));
    /// assert_eq!(heap.pop(), Some(3));
    /// assert_eq!(heap.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        #[cfg(feature = "metrics")]
        self.metrics.record_pop_call();

        let top = self.remove_at(0);

        #[cfg(feature = "metrics")]
        if top.is_some() {
            self.metrics.record_pop_found();
        }
        top
    }

    /// Returns `true` if at least one element equals `value`.
    pub fn contains(&self, value: &T) -> bool {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_contains_call();

        let found = self.index.contains(value);

        #[cfg(feature = "metrics")]
        if found {
            (&self.metrics).record_contains_found();
        }
        found
    }

    /// Returns how many stored elements equal `value`.
    pub fn count(&self, value: &T) -> usize {
        self.index.count(value)
    }

    /// Returns the ascending slots currently holding `value`.
    ///
    /// Slots change on every mutation; this is a diagnostic view.
    pub fn positions(&self, value: &T) -> &[usize] {
        self.index.positions(value)
    }

    /// Removes one element equal to `value`. Returns `false` if none exists.
    ///
    /// With duplicates, the occurrence in the highest slot is removed.
    ///
    /// # Example
    ///
    /// ```
    /// use heapdex::ds::IndexedMinHeap;
    ///
    /// let mut heap = IndexedMinHeap::from_vec(vec![2, 8, 2]);
    /// assert!(heap.remove(&2));
    /// assert!(heap.contains(&2));
    /// assert!(heap.remove(&2));
    /// assert!(!heap.remove(&2));
    /// assert_eq!(heap.len(), 1);
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        #[cfg(feature = "metrics")]
        self.metrics.record_remove_call();

        let Some(slot) = self.index.last_position(value) else {
            return false;
        };
        self.remove_at(slot);

        #[cfg(feature = "metrics")]
        self.metrics.record_remove_found();
        true
    }

    /// Removes and returns the element at storage slot `i`, or `None` if
    /// `i >= len()`.
    ///
    /// The tail element is moved into the hole and then sunk or swum,
    /// whichever direction restores order.
    ///
    /// # Example
    ///
    /// ```
    /// use heapdex::ds::IndexedMinHeap;
    ///
    /// let mut heap = IndexedMinHeap::from_vec(vec![1, 5, 2, 6, 7, 3]);
    /// let slot = heap.positions(&5)[0];
    /// assert_eq!(heap.remove_at(slot), Some(5));
    /// assert_eq!(heap.remove_at(99), None);
    /// assert!(heap.is_min_heap(0));
    /// ```
    pub fn remove_at(&mut self, i: usize) -> Option<T> {
        #[cfg(feature = "metrics")]
        self.metrics.record_remove_at_call();

        if i >= self.heap.len() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(i, last);

        let removed = self.heap.pop()?;
        self.index.remove(&removed, last);

        if i != last && self.sink(i) == i {
            self.swim(i);
        }
        Some(removed)
    }

    /// Removes every element, keeping allocated storage.
    ///
    /// # Example
    ///
    /// ```
    /// use heapdex::ds::IndexedMinHeap;
    ///
    /// let mut heap = IndexedMinHeap::from_vec(vec![1, 2, 3]);
    /// heap.clear();
    /// assert!(heap.is_empty());
    /// assert!(!heap.contains(&1));
    /// assert_eq!(heap.pop(), None);
    /// ```
    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();

        self.heap.clear();
        self.index.clear();
    }

    /// Returns `true` if the subtree rooted at slot `k` is heap-ordered.
    ///
    /// `is_min_heap(0)` checks the whole heap; slots past the end are
    /// trivially ordered.
    pub fn is_min_heap(&self, k: usize) -> bool {
        let len = self.heap.len();
        if k >= len {
            return true;
        }
        let left = 2 * k + 1;
        let right = left + 1;

        if left < len && !self.is_less(k, left) {
            return false;
        }
        if right < len && !self.is_less(k, right) {
            return false;
        }
        self.is_min_heap(left) && self.is_min_heap(right)
    }

    /// Iterates over elements in storage (heap) order, not sorted order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.heap.iter()
    }

    /// Returns storage as a vector in heap order.
    pub fn into_vec(self) -> Vec<T> {
        self.heap
    }

    /// Drains the heap into an ascending vector.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.heap.len());
        while let Some(value) = self.pop() {
            sorted.push(value);
        }
        sorted
    }

    /// Reserves room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.heap.reserve(additional);
        self.index.reserve(additional);
    }

    /// Shrinks storage and index to fit current contents.
    pub fn shrink_to_fit(&mut self) {
        self.heap.shrink_to_fit();
        self.index.shrink_to_fit();
    }

    /// Returns an approximate memory footprint in bytes.
    ///
    /// # Example
    ///
    /// ```
    /// use heapdex::ds::IndexedMinHeap;
    ///
    /// let heap: IndexedMinHeap<u64> = IndexedMinHeap::with_capacity(100);
    /// assert!(heap.approx_bytes() >= 100 * std::mem::size_of::<u64>());
    /// ```
    pub fn approx_bytes(&self) -> usize {
        std::mem::size_of::<Self>()
            + self.heap.capacity() * std::mem::size_of::<T>()
            + self.index.approx_bytes()
    }

    /// Checks heap order and storage/index agreement.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantError`] describing the first violation found.
    pub fn check_invariants(&self) -> Result<(), InvariantError>
    where
        T: fmt::Debug,
    {
        for child in 1..self.heap.len() {
            let parent = (child - 1) / 2;
            if self.heap[parent] > self.heap[child] {
                return Err(InvariantError::new(format!(
                    "slot {} ({:?}) is ordered after its child slot {} ({:?})",
                    parent, self.heap[parent], child, self.heap[child]
                )));
            }
        }

        if self.index.total_positions() != self.heap.len() {
            return Err(InvariantError::new(format!(
                "index tracks {} positions but heap holds {} elements",
                self.index.total_positions(),
                self.heap.len()
            )));
        }

        for (value, positions) in self.index.iter() {
            if positions.is_empty() {
                return Err(InvariantError::new(format!(
                    "value {:?} has an empty position set",
                    value
                )));
            }
            if positions.windows(2).any(|pair| pair[0] >= pair[1]) {
                return Err(InvariantError::new(format!(
                    "positions {:?} for {:?} are not strictly ascending",
                    positions, value
                )));
            }
            for &slot in positions {
                match self.heap.get(slot) {
                    Some(stored) if stored == value => {},
                    Some(stored) => {
                        return Err(InvariantError::new(format!(
                            "index places {:?} at slot {} which holds {:?}",
                            value, slot, stored
                        )));
                    },
                    None => {
                        return Err(InvariantError::new(format!(
                            "index places {:?} at slot {} past len {}",
                            value,
                            slot,
                            self.heap.len()
                        )));
                    },
                }
            }
        }
        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    /// Panics if [`check_invariants`](Self::check_invariants) fails.
    pub fn debug_validate_invariants(&self)
    where
        T: fmt::Debug,
    {
        if let Err(err) = self.check_invariants() {
            panic!("IndexedMinHeap invariant violated: {}", err);
        }
    }

    #[cfg(any(test, debug_assertions))]
    /// Returns a debug snapshot of storage and index sizes.
    pub fn debug_snapshot(&self) -> IndexedHeapSnapshot {
        IndexedHeapSnapshot {
            len: self.heap.len(),
            capacity: self.heap.capacity(),
            distinct_values: self.index.len(),
            indexed_positions: self.index.total_positions(),
        }
    }

    // Non-strict: equal elements count as "less".
    fn is_less(&self, i: usize, j: usize) -> bool {
        self.heap[i] <= self.heap[j]
    }

    // The only place elements change slots.
    fn swap(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        #[cfg(feature = "metrics")]
        self.metrics.record_swap();

        self.heap.swap(i, j);
        // the value that was at i now sits at j
        self.index.swap(&self.heap[j], &self.heap[i], i, j);
    }

    fn swim(&mut self, mut k: usize) -> usize {
        while k > 0 {
            let parent = (k - 1) / 2;
            if !self.is_less(k, parent) {
                break;
            }
            #[cfg(feature = "metrics")]
            self.metrics.record_swim_step();

            self.swap(parent, k);
            k = parent;
        }
        k
    }

    // Returns the slot the element settled in.
    fn sink(&mut self, mut k: usize) -> usize {
        let len = self.heap.len();
        loop {
            let left = 2 * k + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let smallest = if right < len && self.is_less(right, left) {
                right
            } else {
                left
            };
            if self.is_less(k, smallest) {
                break;
            }
            #[cfg(feature = "metrics")]
            self.metrics.record_sink_step();

            self.swap(smallest, k);
            k = smallest;
        }
        k
    }
}

#[cfg(feature = "metrics")]
impl<T> IndexedMinHeap<T>
where
    T: Ord + Hash + Clone,
{
    pub fn metrics_snapshot(&self) -> HeapMetricsSnapshot {
        HeapMetricsSnapshot {
            push_calls: self.metrics.push_calls,
            pop_calls: self.metrics.pop_calls,
            pop_found: self.metrics.pop_found,
            peek_calls: self.metrics.peek_calls.get(),
            peek_found: self.metrics.peek_found.get(),
            remove_calls: self.metrics.remove_calls,
            remove_found: self.metrics.remove_found,
            remove_at_calls: self.metrics.remove_at_calls,
            contains_calls: self.metrics.contains_calls.get(),
            contains_found: self.metrics.contains_found.get(),
            swaps: self.metrics.swaps,
            swim_steps: self.metrics.swim_steps,
            sink_steps: self.metrics.sink_steps,
            heapify_builds: self.metrics.heapify_builds,
            clear_calls: self.metrics.clear_calls,
            heap_len: self.heap.len(),
            distinct_values: self.index.len(),
            capacity: self.heap.capacity(),
        }
    }
}

#[cfg(feature = "metrics")]
impl<T> MetricsSnapshotProvider<HeapMetricsSnapshot> for IndexedMinHeap<T>
where
    T: Ord + Hash + Clone,
{
    fn snapshot(&self) -> HeapMetricsSnapshot {
        self.metrics_snapshot()
    }
}

#[cfg(feature = "metrics")]
impl<T> MetricsReset for IndexedMinHeap<T>
where
    T: Ord + Hash + Clone,
{
    fn reset_metrics(&mut self) {
        self.metrics.reset();
    }
}

#[cfg(any(test, debug_assertions))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedHeapSnapshot {
    pub len: usize,
    pub capacity: usize,
    pub distinct_values: usize,
    pub indexed_positions: usize,
}

impl<T> Default for IndexedMinHeap<T>
where
    T: Ord + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for IndexedMinHeap<T>
where
    T: Ord + Hash + Clone,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for IndexedMinHeap<T>
where
    T: Ord + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_incremental(iter)
    }
}

impl<T> From<Vec<T>> for IndexedMinHeap<T>
where
    T: Ord + Hash + Clone,
{
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}

impl<T, const N: usize> From<[T; N]> for IndexedMinHeap<T>
where
    T: Ord + Hash + Clone,
{
    fn from(elements: [T; N]) -> Self {
        Self::from_vec(Vec::from(elements))
    }
}

impl<'a, T> IntoIterator for &'a IndexedMinHeap<T>
where
    T: Ord + Hash + Clone,
{
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Renders storage in heap order, e.g. `[1, 3, 2]`.
impl<T> fmt::Display for IndexedMinHeap<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.heap.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", value)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<T: Ord + Hash + Clone>(heap: &mut IndexedMinHeap<T>) -> Vec<T> {
        let mut out = Vec::new();
        while let Some(value) = heap.pop() {
            out.push(value);
        }
        out
    }

    #[test]
    fn duplicate_scenario_polls_in_order() {
        let mut heap = IndexedMinHeap::new();
        for value in [7, 2, 9, 2, 4] {
            heap.push(value);
        }
        assert_eq!(heap.len(), 5);

        assert_eq!(heap.pop(), Some(2));
        assert_eq!(heap.len(), 4);
        assert!(heap.contains(&2));

        assert_eq!(heap.pop(), Some(2));
        assert!(!heap.contains(&2));

        assert_eq!(drain(&mut heap), vec![4, 7, 9]);
        heap.debug_validate_invariants();
    }

    #[test]
    fn heapify_and_incremental_agree() {
        let input = [5, 3, 8, 1, 9, 2];
        let mut heapified = IndexedMinHeap::from_vec(input.to_vec());
        let mut incremental = IndexedMinHeap::from_iter_incremental(input);

        heapified.debug_validate_invariants();
        incremental.debug_validate_invariants();
        assert_eq!(drain(&mut heapified), vec![1, 2, 3, 5, 8, 9]);
        assert_eq!(drain(&mut incremental), vec![1, 2, 3, 5, 8, 9]);
    }

    #[test]
    fn heapify_layout_matches_bottom_up_sinks() {
        // sink(2): 8 vs 2 → swap; sink(1): 3 vs min(1, 9) → swap; sink(0): 5 → 1 → 3
        let heap = IndexedMinHeap::from_vec(vec![5, 3, 8, 1, 9, 2]);
        assert_eq!(heap.iter().copied().collect::<Vec<_>>(), vec![1, 3, 2, 5, 9, 8]);
        assert_eq!(heap.positions(&5), &[3]);
        assert_eq!(heap.positions(&8), &[5]);
    }

    #[test]
    fn empty_heap_signals_none() {
        let mut heap: IndexedMinHeap<i32> = IndexedMinHeap::new();
        assert_eq!(heap.peek(), None);
        assert_eq!(heap.pop(), None);
        assert!(!heap.remove(&1));
        assert_eq!(heap.remove_at(0), None);
        assert!(heap.is_min_heap(0));

        heap.push(1);
        heap.clear();
        assert_eq!(heap.peek(), None);
        assert_eq!(heap.pop(), None);
        assert_eq!(heap.debug_snapshot().indexed_positions, 0);
    }

    #[test]
    fn push_then_remove_restores_len() {
        let mut heap = IndexedMinHeap::from_vec(vec![4, 6, 8]);
        heap.push(5);
        assert!(heap.remove(&5));
        assert_eq!(heap.len(), 3);
        assert!(!heap.contains(&5));
        heap.debug_validate_invariants();
    }

    #[test]
    fn remove_takes_highest_slot_of_duplicates() {
        let mut heap = IndexedMinHeap::from_vec(vec![1, 3, 3, 3]);
        assert_eq!(heap.positions(&3), &[1, 2, 3]);

        assert!(heap.remove(&3));
        assert_eq!(heap.positions(&3), &[1, 2]);
        assert_eq!(heap.count(&3), 2);
        heap.debug_validate_invariants();
    }

    #[test]
    fn remove_at_swims_when_tail_is_smaller() {
        //        1
        //      /   \
        //    10     2
        //   /  \   / \
        //  11  12 3   4
        let mut heap = IndexedMinHeap::from_vec(vec![1, 10, 2, 11, 12, 3, 4]);
        assert!(heap.is_min_heap(0));

        // removing 11 moves the tail (4) under 10, where it must swim up
        assert!(heap.remove(&11));
        assert_eq!(heap.iter().copied().collect::<Vec<_>>(), vec![1, 4, 2, 10, 12, 3]);
        assert!(heap.is_min_heap(0));
        heap.debug_validate_invariants();
    }

    #[test]
    fn remove_at_sinks_when_tail_is_larger() {
        let mut heap = IndexedMinHeap::from_vec(vec![1, 2, 3, 4, 5, 6, 20]);
        assert_eq!(heap.remove_at(1), Some(2));
        assert!(heap.is_min_heap(0));
        assert_eq!(drain(&mut heap), vec![1, 3, 4, 5, 6, 20]);
    }

    #[test]
    fn remove_last_slot_needs_no_repair() {
        let mut heap = IndexedMinHeap::from_vec(vec![1, 2, 3]);
        assert_eq!(heap.remove_at(2), Some(3));
        assert_eq!(heap.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
        heap.debug_validate_invariants();
    }

    #[test]
    fn swim_passes_equal_parent() {
        let mut heap = IndexedMinHeap::new();
        heap.push((1, 'a'));
        heap.push((2, 'b'));
        heap.push((1, 'a'));
        // the pushed duplicate swapped with its equal parent at slot 0
        assert_eq!(heap.positions(&(1, 'a')), &[0, 2]);
        heap.debug_validate_invariants();
    }

    #[test]
    fn is_min_heap_checks_subtrees() {
        let heap = IndexedMinHeap::from_vec(vec![2, 4, 3, 9]);
        assert!(heap.is_min_heap(0));
        assert!(heap.is_min_heap(1));
        assert!(heap.is_min_heap(3));
        assert!(heap.is_min_heap(100));
    }

    #[test]
    fn check_invariants_reports_broken_order() {
        let mut heap = IndexedMinHeap::from_vec(vec![1, 2, 3]);
        heap.heap.swap(0, 2);
        assert!(!heap.is_min_heap(0));
        let err = heap.check_invariants().unwrap_err();
        assert!(err.message().contains("ordered after"));
    }

    #[test]
    fn check_invariants_reports_index_drift() {
        let mut heap = IndexedMinHeap::from_vec(vec![1, 2]);
        heap.index.insert(&7, 5);
        let err = heap.check_invariants().unwrap_err();
        assert!(err.message().contains("positions"));
    }

    #[test]
    fn try_with_capacity_rejects_unallocatable_hint() {
        assert!(IndexedMinHeap::<u64>::try_with_capacity(16).is_ok());
        let err = IndexedMinHeap::<u64>::try_with_capacity(usize::MAX).unwrap_err();
        assert!(err.to_string().contains("capacity hint"));
    }

    #[test]
    fn push_opt_rejects_none_without_effect() {
        let mut heap = IndexedMinHeap::from_vec(vec![3]);
        assert!(heap.push_opt(None).is_err());
        assert_eq!(heap.len(), 1);
        heap.push_opt(Some(1)).unwrap();
        assert_eq!(heap.peek(), Some(&1));
    }

    #[test]
    fn display_lists_storage_order() {
        let heap = IndexedMinHeap::from_vec(vec![3, 1, 2]);
        assert_eq!(heap.to_string(), "[1, 3, 2]");
        assert_eq!(IndexedMinHeap::<u8>::new().to_string(), "[]");
    }

    #[test]
    fn conversions_build_valid_heaps() {
        let from_array = IndexedMinHeap::from([4, 1, 3]);
        let from_vec: IndexedMinHeap<_> = vec![4, 1, 3].into();
        let collected: IndexedMinHeap<_> = [4, 1, 3].into_iter().collect();

        for heap in [&from_array, &from_vec, &collected] {
            assert_eq!(heap.peek(), Some(&1));
            heap.debug_validate_invariants();
        }
        assert_eq!(from_array.into_sorted_vec(), vec![1, 3, 4]);
        assert_eq!((&from_vec).into_iter().count(), 3);
        assert_eq!(collected.into_vec().len(), 3);
    }

    #[test]
    fn clone_is_independent() {
        let mut original = IndexedMinHeap::from_vec(vec![2, 1]);
        let copy = original.clone();
        original.pop();
        assert_eq!(copy.len(), 2);
        assert!(copy.contains(&1));
        assert!(!original.contains(&1));
    }

    #[test]
    fn reserve_and_shrink_keep_contents() {
        let mut heap = IndexedMinHeap::from_vec(vec![5, 6]);
        heap.reserve(64);
        assert!(heap.capacity() >= 66);
        heap.shrink_to_fit();
        assert_eq!(heap.len(), 2);
        assert_eq!(heap.distinct_len(), 2);
        heap.debug_validate_invariants();
    }

    #[cfg(feature = "metrics")]
    #[test]
    fn metrics_track_operations() {
        let mut heap = IndexedMinHeap::from_vec(vec![3, 1, 2]);
        heap.push(0);
        heap.peek();
        heap.contains(&9);
        heap.pop();
        heap.remove(&3);
        heap.remove(&42);

        let snapshot = heap.snapshot();
        assert_eq!(snapshot.heapify_builds, 1);
        assert_eq!(snapshot.push_calls, 1);
        assert_eq!(snapshot.peek_calls, 1);
        assert_eq!(snapshot.peek_found, 1);
        assert_eq!(snapshot.contains_calls, 1);
        assert_eq!(snapshot.contains_found, 0);
        assert_eq!(snapshot.pop_found, 1);
        assert_eq!(snapshot.remove_calls, 2);
        assert_eq!(snapshot.remove_found, 1);
        assert_eq!(snapshot.remove_at_calls, 2);
        assert!(snapshot.swaps > 0);
        assert_eq!(snapshot.heap_len, 2);

        heap.reset_metrics();
        assert_eq!(heap.snapshot().swaps, 0);
    }
}
