//! Value-to-positions index for heap-ordered storage.
//!
//! Maps each stored value to the ascending set of slots that currently hold
//! an equal value. A plain `value -> slot` map cannot represent duplicates;
//! keeping a set per value can.
//!
//! ## Architecture
//!
//! ```text
//!   storage:  [ 2 ][ 4 ][ 2 ][ 7 ][ 9 ]
//!               0    1    2    3    4
//!
//!   PositionIndex (FxHashMap<T, SmallVec<[usize; 2]>>)
//!   ┌───────┬───────────┐
//!   │ value │ positions │
//!   ├───────┼───────────┤
//!   │   2   │  [0, 2]   │  ← last_position(2) == Some(2)
//!   │   4   │  [1]      │
//!   │   7   │  [3]      │
//!   │   9   │  [4]      │
//!   └───────┴───────────┘
//!   total_positions() == 5 == storage.len()
//! ```
//!
//! Sets are sorted `SmallVec`s: most values occur once or twice, so the
//! common case never allocates, and lookups inside a set are binary searches.
//!
//! The index never looks at storage; the owner reports every change.
//! [`IndexedMinHeap`](crate::ds::IndexedMinHeap) does so from its single
//! swap primitive.
//!
//! ## Failure Mode
//!
//! Removing or relocating a `(value, position)` pair that is not indexed,
//! or indexing a position twice, means the owner has lost track of its
//! storage. Those calls panic.

use std::hash::Hash;

use rustc_hash::FxHashMap;
use smallvec::{SmallVec, smallvec};

type PositionSet = SmallVec<[usize; 2]>;

/// Maps values to the ordered set of storage positions holding them.
///
/// # Example
///
/// ```
/// use heapdex::ds::PositionIndex;
///
/// let mut index = PositionIndex::new();
/// index.insert(&"a", 0);
/// index.insert(&"b", 1);
/// index.insert(&"a", 2);
///
/// assert_eq!(index.positions(&"a"), &[0, 2]);
/// assert_eq!(index.last_position(&"a"), Some(2));
///
/// // storage slots 1 and 2 exchanged their values
/// index.swap(&"b", &"a", 1, 2);
/// assert_eq!(index.positions(&"a"), &[0, 1]);
/// assert_eq!(index.positions(&"b"), &[2]);
/// ```
#[derive(Debug, Clone)]
pub struct PositionIndex<T> {
    slots: FxHashMap<T, PositionSet>,
    total: usize,
}

impl<T> PositionIndex<T>
where
    T: Eq + Hash + Clone,
{
    /// Creates an empty index.
    pub fn new() -> Self {
        Self {
            slots: FxHashMap::default(),
            total: 0,
        }
    }

    /// Creates an empty index sized for `capacity` distinct values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            total: 0,
        }
    }

    /// Number of distinct values indexed.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no value is indexed.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Sum of all position-set sizes.
    pub fn total_positions(&self) -> usize {
        self.total
    }

    /// Returns `true` if at least one position holds `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.slots.contains_key(value)
    }

    /// Number of positions holding `value`.
    pub fn count(&self, value: &T) -> usize {
        self.slots.get(value).map_or(0, |set| set.len())
    }

    /// Ascending positions holding `value`; empty if absent.
    pub fn positions(&self, value: &T) -> &[usize] {
        self.slots.get(value).map(|set| set.as_slice()).unwrap_or(&[])
    }

    /// Largest position holding `value`.
    ///
    /// Duplicates make "the" position ambiguous; the largest is returned so
    /// the choice is deterministic.
    pub fn last_position(&self, value: &T) -> Option<usize> {
        self.slots.get(value).and_then(|set| set.last().copied())
    }

    /// Records that `position` now holds `value`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is already indexed under `value`.
    pub fn insert(&mut self, value: &T, position: usize) {
        match self.slots.get_mut(value) {
            Some(set) => insert_sorted(set, position),
            None => {
                self.slots.insert(value.clone(), smallvec![position]);
            },
        }
        self.total += 1;
    }

    /// Forgets that `position` holds `value`, dropping the key when its
    /// last position goes.
    ///
    /// # Panics
    ///
    /// Panics if the pair is not indexed.
    pub fn remove(&mut self, value: &T, position: usize) {
        let Some(set) = self.slots.get_mut(value) else {
            panic!("position index: no entry for value removed from slot {position}");
        };
        remove_sorted(set, position);
        if set.is_empty() {
            self.slots.remove(value);
        }
        self.total -= 1;
    }

    /// Mirrors a physical exchange: `a` moved from `pos_a` to `pos_b` and
    /// `b` moved from `pos_b` to `pos_a`.
    ///
    /// Equal values or equal positions leave every set unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `a` is not indexed at `pos_a` or `b` is not indexed at
    /// `pos_b`.
    pub fn swap(&mut self, a: &T, b: &T, pos_a: usize, pos_b: usize) {
        if pos_a == pos_b || a == b {
            return;
        }
        self.relocate(a, pos_a, pos_b);
        self.relocate(b, pos_b, pos_a);
    }

    /// Iterates over `(value, ascending positions)` in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, &[usize])> {
        self.slots.iter().map(|(value, set)| (value, set.as_slice()))
    }

    /// Removes every entry, keeping the allocated table.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.total = 0;
    }

    /// Reserves room for at least `additional` more distinct values.
    pub fn reserve(&mut self, additional: usize) {
        self.slots.reserve(additional);
    }

    /// Fallible [`reserve`](Self::reserve).
    pub fn try_reserve(
        &mut self,
        additional: usize,
    ) -> Result<(), std::collections::TryReserveError> {
        self.slots.try_reserve(additional)
    }

    /// Shrinks the table to fit current contents.
    pub fn shrink_to_fit(&mut self) {
        self.slots.shrink_to_fit();
    }

    /// Approximate heap footprint of the table in bytes.
    ///
    /// Spilled position sets (values held by more than two slots) are not
    /// counted.
    pub fn approx_bytes(&self) -> usize {
        self.slots.capacity() * std::mem::size_of::<(T, PositionSet)>()
    }

    fn relocate(&mut self, value: &T, from: usize, to: usize) {
        let Some(set) = self.slots.get_mut(value) else {
            panic!("position index: no entry for value moved from slot {from} to {to}");
        };
        remove_sorted(set, from);
        insert_sorted(set, to);
    }
}

impl<T> Default for PositionIndex<T>
where
    T: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

fn insert_sorted(set: &mut PositionSet, position: usize) {
    match set.binary_search(&position) {
        Ok(_) => panic!("position index: slot {position} indexed twice for one value"),
        Err(at) => set.insert(at, position),
    }
}

fn remove_sorted(set: &mut PositionSet, position: usize) {
    match set.binary_search(&position) {
        Ok(at) => {
            set.remove(at);
        },
        Err(_) => panic!("position index: slot {position} is not indexed for this value"),
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::{BTreeMap, BTreeSet};

    // Slots are handed out like a growing/shrinking storage vector so every
    // call stays within the index's contract.
    proptest! {
        /// Property: sets, counts and totals match a BTreeMap model
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_matches_model(
            ops in prop::collection::vec((0u8..3, 0u8..6, any::<u8>(), any::<u8>()), 0..200)
        ) {
            let mut index = PositionIndex::new();
            let mut storage: Vec<u8> = Vec::new();

            for (op, value, a, b) in ops {
                match op {
                    0 => {
                        index.insert(&value, storage.len());
                        storage.push(value);
                    }
                    1 => {
                        if let Some(value) = storage.pop() {
                            index.remove(&value, storage.len());
                        }
                    }
                    _ => {
                        if !storage.is_empty() {
                            let i = a as usize % storage.len();
                            let j = b as usize % storage.len();
                            storage.swap(i, j);
                            index.swap(&storage[j], &storage[i], i, j);
                        }
                    }
                }

                let mut model: BTreeMap<u8, BTreeSet<usize>> = BTreeMap::new();
                for (pos, value) in storage.iter().enumerate() {
                    model.entry(*value).or_default().insert(pos);
                }

                prop_assert_eq!(index.len(), model.len());
                prop_assert_eq!(index.total_positions(), storage.len());
                for (value, positions) in &model {
                    let expected: Vec<usize> = positions.iter().copied().collect();
                    prop_assert_eq!(index.positions(value), expected.as_slice());
                    prop_assert_eq!(index.last_position(value), positions.last().copied());
                }
            }
        }
    }
}
