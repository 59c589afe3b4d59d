//! `AtomicArrayList`: a growable list with concurrent element access.
//!
//! Layout:
//! - `slots`: a [`SlotArray`] owned by an `RwLock`. The lock is the list's
//!   shared/exclusive gate; replacing the array requires the write guard.
//! - `len`: the logical length, an atomic kept on its own cache line.
//!
//! Locking discipline:
//! - **Shared** (read guard): `get`, `len`, `capacity`, scans, and `set` on an
//!   index the current array already has. Any number of these run together;
//!   the per-slot atomics order racing `set`s on the same index.
//! - **Exclusive** (write guard): everything that replaces the array, moves
//!   values between slots, or resets the list: `push`, `insert`, `remove`,
//!   `clear`, the bulk operations, and a `set` that needs more capacity.
//!
//! `RwLock` is not reentrant, so composed operations (`push`, `add_if_absent`,
//! `add_all_absent`, and `remove_item`) take the guard once and call `*_locked`
//! helpers that receive the already-held array. The same applies to callers:
//! closures and `PartialEq` impls run by `retain`, `remove_all`, `remove_item`
//! and the `*_absent` operations execute under the write guard and must not
//! touch the list they were passed to, or the calling thread deadlocks.
//!
//! Growth reserves the new array before moving anything, so a failed
//! reservation leaves storage and length as they were. Elements discarded by
//! `retain` and `clear` are dropped after the guard is released.
//!
//! Invariants:
//! - `len <= capacity` whenever no writer holds the lock.
//! - Capacity only grows, until `clear` resets it to one slot.
//! - Slots at or past `len` are empty.

use crate::sequence::{AtomicSequence, Iter};
use crate::slot::{fmt_slots, SlotArray};
use crate::trace::event;
use crate::ListError;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::sync::atomic::{AtomicUsize, Ordering};
use crossbeam_utils::CachePadded;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Capacity of a new list and of a list after `clear`.
pub const DEFAULT_CAPACITY: usize = 1;

/// A concurrent, growable list.
///
/// Elements are stored as `Arc<T>`; reads hand out clones of that `Arc`, and
/// a slot may be empty (`None`) if a `set` skipped past it.
pub struct AtomicArrayList<T> {
    slots: RwLock<SlotArray<T>>,
    len: CachePadded<AtomicUsize>,
}

impl<T> AtomicArrayList<T> {
    /// Creates an empty list with [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty list with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_parts(SlotArray::new(capacity), 0)
    }

    /// Creates a list holding `values`; length and capacity both equal
    /// `values.len()`.
    pub fn from_vec(values: Vec<T>) -> Self {
        Self::from_slots(values.into_iter().map(|v| Some(Arc::new(v))).collect())
    }

    pub(crate) fn from_slots(values: Vec<Option<Arc<T>>>) -> Self {
        let len = values.len();
        Self::from_parts(SlotArray::from_values(values), len)
    }

    fn from_parts(slots: SlotArray<T>, len: usize) -> Self {
        Self {
            slots: RwLock::new(slots),
            len: CachePadded::new(AtomicUsize::new(len)),
        }
    }

    // A panic inside a critical section cannot leave a slot half-written,
    // so a poisoned lock still guards a consistent array.
    #[inline]
    fn read_slots(&self) -> RwLockReadGuard<'_, SlotArray<T>> {
        self.slots.read().unwrap_or_else(PoisonError::into_inner)
    }

    #[inline]
    fn write_slots(&self) -> RwLockWriteGuard<'_, SlotArray<T>> {
        self.slots.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        let _slots = self.read_slots();
        self.len.load(Ordering::Acquire)
    }

    /// Returns `true` if the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of slots in the current backing array.
    pub fn capacity(&self) -> usize {
        self.read_slots().capacity()
    }

    /// Reads the element at `index`.
    ///
    /// # Errors
    /// `IndexOutOfRange` if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<Option<Arc<T>>, ListError> {
        let slots = self.read_slots();
        ListError::check_index(index, self.len.load(Ordering::Acquire))?;
        Ok(slots.load(index))
    }

    /// Stores `element` at `index` and returns the previous value.
    ///
    /// Writing at or past the end extends the list to `index + 1`; any slots
    /// skipped over are left empty. While the backing array already covers
    /// `index` this runs under the shared lock, concurrently with other reads
    /// and writes. Otherwise it retakes the lock exclusively and grows the
    /// array to `max(index + 1, 2 * capacity)`.
    ///
    /// # Errors
    /// `CapacityOverflow` if storage reaching `index` cannot be reserved; the
    /// list is unchanged.
    pub fn set(&self, index: usize, element: T) -> Result<Option<Arc<T>>, ListError> {
        let element = Some(Arc::new(element));
        {
            let slots = self.read_slots();
            if index < slots.capacity() {
                self.len.fetch_max(index + 1, Ordering::AcqRel);
                return Ok(slots.replace(index, element));
            }
        }

        let mut slots = self.write_slots();
        // Another writer may have grown the array while we waited.
        if index >= slots.capacity() {
            self.grow_locked(&mut slots, index, "set")?;
        }
        self.len.fetch_max(index + 1, Ordering::AcqRel);
        Ok(slots.replace(index, element))
    }

    /// Appends `element`.
    ///
    /// # Panics
    /// Like `Vec::push`, if the grown storage cannot be reserved. The list is
    /// left unchanged.
    pub fn push(&self, element: T) {
        if let Err(err) = self.try_push(element) {
            panic!("{err}");
        }
    }

    fn try_push(&self, element: T) -> Result<(), ListError> {
        let mut slots = self.write_slots();
        let len = self.len.load(Ordering::Acquire);
        self.insert_locked(&mut slots, len, len, vec![Arc::new(element)])
    }

    /// Inserts `element` at `index`, shifting every later element up by one.
    ///
    /// # Errors
    /// `IndexOutOfRange` if `index > len()`, `CapacityOverflow` if the grown
    /// storage cannot be reserved.
    pub fn insert(&self, index: usize, element: T) -> Result<(), ListError> {
        let mut slots = self.write_slots();
        let len = self.len.load(Ordering::Acquire);
        ListError::check_position(index, len)?;
        self.insert_locked(&mut slots, len, index, vec![Arc::new(element)])
    }

    /// Inserts every item of `items`, in order, starting at `index`.
    ///
    /// `items` is drained before the lock is taken.
    ///
    /// # Errors
    /// `IndexOutOfRange` if `index > len()`, `CapacityOverflow` if the grown
    /// storage cannot be reserved.
    pub fn insert_all<I>(&self, index: usize, items: I) -> Result<(), ListError>
    where
        I: IntoIterator<Item = T>,
    {
        let items: Vec<Arc<T>> = items.into_iter().map(Arc::new).collect();
        let mut slots = self.write_slots();
        let len = self.len.load(Ordering::Acquire);
        ListError::check_position(index, len)?;
        self.insert_locked(&mut slots, len, index, items)
    }

    /// Appends every item of `items`, in order, as one exclusive operation.
    ///
    /// # Panics
    /// If the grown storage cannot be reserved; nothing is appended.
    pub fn add_all<I>(&self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        let items: Vec<Arc<T>> = items.into_iter().map(Arc::new).collect();
        let mut slots = self.write_slots();
        let len = self.len.load(Ordering::Acquire);
        if let Err(err) = self.insert_locked(&mut slots, len, len, items) {
            panic!("{err}");
        }
    }

    /// Removes and returns the element at `index`, shifting every later
    /// element down by one. Capacity is kept.
    ///
    /// # Errors
    /// `IndexOutOfRange` if `index >= len()`.
    pub fn remove(&self, index: usize) -> Result<Option<Arc<T>>, ListError> {
        let mut slots = self.write_slots();
        let len = self.len.load(Ordering::Acquire);
        ListError::check_index(index, len)?;
        Ok(self.remove_locked(&mut slots, len, index))
    }

    /// Removes the first element equal to `element`. Returns whether one was
    /// found.
    ///
    /// `T::eq` runs under the write guard; it must not access this list.
    pub fn remove_item(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        let mut slots = self.write_slots();
        let len = self.len.load(Ordering::Acquire);
        match slots.position(0..len, element) {
            Some(index) => {
                self.remove_locked(&mut slots, len, index);
                true
            }
            None => false,
        }
    }

    /// Removes every element equal to any of `items`. Returns whether the list
    /// changed.
    ///
    /// `T::eq` runs under the write guard; it must not access this list.
    pub fn remove_all<'e, I>(&self, items: I) -> bool
    where
        I: IntoIterator<Item = &'e T>,
        T: PartialEq + 'e,
    {
        let items: Vec<&T> = items.into_iter().collect();
        self.retain_counting(|slot| match slot {
            Some(value) => !items.iter().any(|item| *item == value),
            None => true,
        }) > 0
    }

    /// Keeps only the slots for which `keep` returns `true`, preserving order.
    ///
    /// `keep` sees `None` for empty slots and is called once per slot, in
    /// index order. It runs for every slot before any slot moves, so a
    /// panicking predicate leaves the list untouched.
    ///
    /// `keep` runs while the write guard is held. It must not call back into
    /// this list (not even `len` or `get`): the lock is not reentrant and the
    /// calling thread would deadlock.
    pub fn retain<F>(&self, keep: F)
    where
        F: FnMut(Option<&T>) -> bool,
    {
        self.retain_counting(keep);
    }

    fn retain_counting<F>(&self, mut keep: F) -> usize
    where
        F: FnMut(Option<&T>) -> bool,
    {
        let mut slots = self.write_slots();
        let len = self.len.load(Ordering::Acquire);
        let flags: Vec<bool> = (0..len).map(|i| keep(slots.load(i).as_deref())).collect();
        let discarded = slots.compact(&flags);
        let removed = discarded.len();
        self.len.store(len - removed, Ordering::Release);
        drop(slots);
        drop(discarded);
        removed
    }

    /// Empties the list and shrinks it back to [`DEFAULT_CAPACITY`].
    pub fn clear(&self) {
        let mut slots = self.write_slots();
        event!(
            debug,
            len = self.len.load(Ordering::Relaxed),
            capacity = slots.capacity(),
            "clearing atomic list"
        );
        let old = core::mem::replace(&mut *slots, SlotArray::new(DEFAULT_CAPACITY));
        self.len.store(0, Ordering::Release);
        drop(slots);
        drop(old);
    }

    /// Appends `element` unless an equal element is already present.
    /// Returns whether it was appended.
    ///
    /// The check and the append form one exclusive step, so `T::eq` runs under
    /// the write guard and must not access this list.
    ///
    /// # Panics
    /// If the grown storage cannot be reserved; nothing is appended.
    pub fn add_if_absent(&self, element: T) -> bool
    where
        T: PartialEq,
    {
        let mut slots = self.write_slots();
        let len = self.len.load(Ordering::Acquire);
        if slots.position(0..len, &element).is_some() {
            return false;
        }
        if let Err(err) = self.insert_locked(&mut slots, len, len, vec![Arc::new(element)]) {
            panic!("{err}");
        }
        true
    }

    /// Appends each item of `items`, in iteration order, that is not already
    /// present (including items appended earlier in the same call). Returns the
    /// number appended.
    ///
    /// Runs as one exclusive step; `T::eq` must not access this list.
    ///
    /// # Panics
    /// If the grown storage cannot be reserved; items appended before that
    /// point stay.
    pub fn add_all_absent<I>(&self, items: I) -> usize
    where
        I: IntoIterator<Item = T>,
        T: PartialEq,
    {
        let items: Vec<T> = items.into_iter().collect();
        let mut slots = self.write_slots();
        let mut len = self.len.load(Ordering::Acquire);
        let mut added = 0;
        for item in items {
            if slots.position(0..len, &item).is_none() {
                if let Err(err) = self.insert_locked(&mut slots, len, len, vec![Arc::new(item)]) {
                    panic!("{err}");
                }
                len += 1;
                added += 1;
            }
        }
        added
    }

    /// Lowest index `>= from` holding an element equal to `element`.
    pub fn index_of_from(&self, element: &T, from: usize) -> Option<usize>
    where
        T: PartialEq,
    {
        let slots = self.read_slots();
        let len = self.len.load(Ordering::Acquire);
        if from >= len {
            return None;
        }
        slots.position(from..len, element)
    }

    /// Highest index `<= from` holding an element equal to `element`.
    ///
    /// # Errors
    /// `IndexOutOfRange` if `from >= len()`.
    pub fn last_index_of_from(&self, element: &T, from: usize) -> Result<Option<usize>, ListError>
    where
        T: PartialEq,
    {
        let slots = self.read_slots();
        ListError::check_index(from, self.len.load(Ordering::Acquire))?;
        Ok(slots.rposition(0..from + 1, element))
    }

    /// Lowest index holding an element equal to `element`.
    pub fn index_of(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.index_of_from(element, 0)
    }

    /// Highest index holding an element equal to `element`.
    pub fn last_index_of(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let slots = self.read_slots();
        let len = self.len.load(Ordering::Acquire);
        slots.rposition(0..len, element)
    }

    /// Returns `true` if an equal element is present.
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(element).is_some()
    }

    /// A consistent copy of every slot, taken under one shared lock.
    pub fn to_vec(&self) -> Vec<Option<Arc<T>>> {
        let slots = self.read_slots();
        slots.snapshot(self.len.load(Ordering::Acquire))
    }

    /// Iterates by index; see [`Iter`].
    pub fn iter(&self) -> Iter<'_, Self> {
        Iter::new(self, 0)
    }

    /// Inserts `items` at `index` with the write guard already held.
    ///
    /// `len` is the length read under that guard; `index <= len` was checked.
    /// Growth happens before any slot moves.
    fn insert_locked(
        &self,
        slots: &mut SlotArray<T>,
        len: usize,
        index: usize,
        items: Vec<Arc<T>>,
    ) -> Result<(), ListError> {
        let count = items.len();
        if count == 0 {
            return Ok(());
        }
        let new_len = len + count;
        if new_len > slots.capacity() {
            self.grow_locked(slots, new_len - 1, "insert")?;
        }
        slots.shift_right(index, len, count);
        for (offset, item) in items.into_iter().enumerate() {
            slots.replace(index + offset, Some(item));
        }
        self.len.store(new_len, Ordering::Release);
        Ok(())
    }

    fn remove_locked(&self, slots: &mut SlotArray<T>, len: usize, index: usize) -> Option<Arc<T>> {
        let removed = slots.replace(index, None);
        slots.shift_left(index, len);
        self.len.store(len - 1, Ordering::Release);
        removed
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn grow_locked(
        &self,
        slots: &mut SlotArray<T>,
        required_index: usize,
        cause: &'static str,
    ) -> Result<(), ListError> {
        let old_capacity = slots.capacity();
        match slots.grow_to_fit(required_index) {
            Ok(new_capacity) => {
                event!(
                    trace,
                    old_capacity,
                    new_capacity,
                    required_index,
                    cause,
                    "grew atomic list storage"
                );
                Ok(())
            }
            Err(err) => {
                event!(
                    warn,
                    old_capacity,
                    required_index,
                    cause,
                    "atomic list storage could not grow"
                );
                Err(err)
            }
        }
    }
}

impl<T> AtomicSequence for AtomicArrayList<T> {
    type Item = T;

    fn len(&self) -> usize {
        AtomicArrayList::len(self)
    }

    fn get(&self, index: usize) -> Result<Option<Arc<T>>, ListError> {
        AtomicArrayList::get(self, index)
    }

    fn set(&self, index: usize, element: T) -> Result<Option<Arc<T>>, ListError> {
        AtomicArrayList::set(self, index, element)
    }

    fn insert(&self, index: usize, element: T) -> Result<(), ListError> {
        AtomicArrayList::insert(self, index, element)
    }

    fn remove(&self, index: usize) -> Result<Option<Arc<T>>, ListError> {
        AtomicArrayList::remove(self, index)
    }

    fn push(&self, element: T) -> Result<(), ListError> {
        self.try_push(element)
    }

    fn to_vec(&self) -> Vec<Option<Arc<T>>> {
        AtomicArrayList::to_vec(self)
    }

    fn index_of_from(&self, element: &T, from: usize) -> Option<usize>
    where
        T: PartialEq,
    {
        AtomicArrayList::index_of_from(self, element, from)
    }

    fn last_index_of_from(&self, element: &T, from: usize) -> Result<Option<usize>, ListError>
    where
        T: PartialEq,
    {
        AtomicArrayList::last_index_of_from(self, element, from)
    }
}

impl<T> Default for AtomicArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Produces an independent list with the same elements in the same order.
/// The element `Arc`s are shared; the slots are not.
impl<T> Clone for AtomicArrayList<T> {
    fn clone(&self) -> Self {
        let snapshot = self.to_vec();
        event!(trace, len = snapshot.len(), "cloning atomic list");
        Self::from_slots(snapshot)
    }
}

impl<T: PartialEq> PartialEq for AtomicArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.to_vec() == other.to_vec()
    }
}

impl<T: Eq> Eq for AtomicArrayList<T> {}

impl<T: Hash> Hash for AtomicArrayList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sequence_hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for AtomicArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_slots(f, &self.to_vec())
    }
}

impl<T> From<Vec<T>> for AtomicArrayList<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_vec(values)
    }
}

impl<T> FromIterator<T> for AtomicArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for AtomicArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<'a, T> IntoIterator for &'a AtomicArrayList<T> {
    type Item = Option<Arc<T>>;
    type IntoIter = Iter<'a, AtomicArrayList<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::panic::{self, AssertUnwindSafe};

    fn values(list: &AtomicArrayList<i32>) -> Vec<Option<i32>> {
        list.to_vec().into_iter().map(|v| v.map(|v| *v)).collect()
    }

    #[test]
    fn new_list_is_empty_with_default_capacity() {
        let list: AtomicArrayList<i32> = AtomicArrayList::new();
        assert!(list.is_empty());
        assert_eq!(list.capacity(), DEFAULT_CAPACITY);
        assert_eq!(
            list.get(0),
            Err(ListError::IndexOutOfRange { index: 0, bound: 0 })
        );
    }

    #[test]
    fn set_in_place_extends_length() {
        let list = AtomicArrayList::with_capacity(4);
        assert_eq!(list.set(2, 7), Ok(None));
        assert_eq!(list.len(), 3);
        assert_eq!(list.capacity(), 4);
        assert_eq!(values(&list), vec![None, None, Some(7)]);

        // A write below the current end never shrinks the list.
        assert_eq!(list.set(0, 1), Ok(None));
        assert_eq!(list.len(), 3);
        assert_eq!(list.set(2, 8).unwrap().as_deref(), Some(&7));
    }

    #[test]
    fn set_past_capacity_grows() {
        let list = AtomicArrayList::new();
        assert_eq!(list.set(5, "x"), Ok(None));
        assert_eq!(list.len(), 6);
        assert_eq!(list.capacity(), 6);
        for i in 0..5 {
            assert_eq!(list.get(i), Ok(None));
        }
        assert_eq!(list.get(5).unwrap().as_deref(), Some(&"x"));

        // Doubling wins once it exceeds the requested index.
        list.set(6, "y").unwrap();
        assert_eq!(list.capacity(), 12);
    }

    #[test]
    fn insert_shifts_right() {
        let list = AtomicArrayList::from_vec(vec![0, 1, 2]);
        list.insert(0, -1).unwrap();
        assert_eq!(values(&list), vec![Some(-1), Some(0), Some(1), Some(2)]);
        list.insert(4, 3).unwrap();
        list.insert(2, 9).unwrap();
        assert_eq!(
            values(&list),
            vec![Some(-1), Some(0), Some(9), Some(1), Some(2), Some(3)]
        );
        assert_eq!(
            list.insert(7, 0),
            Err(ListError::IndexOutOfRange { index: 7, bound: 7 })
        );
        assert_eq!(list.len(), 6);
    }

    #[test]
    fn remove_shifts_left_and_clears_tail() {
        let list = AtomicArrayList::from_vec(vec![-1, 0, 1, 2]);
        assert_eq!(list.remove(1).unwrap().as_deref(), Some(&0));
        assert_eq!(values(&list), vec![Some(-1), Some(1), Some(2)]);
        assert_eq!(list.capacity(), 4);

        // The vacated slot must not reappear after an insert.
        list.insert(3, 5).unwrap();
        assert_eq!(values(&list), vec![Some(-1), Some(1), Some(2), Some(5)]);
        assert!(list.remove(4).is_err());
    }

    #[test]
    fn insert_all_keeps_order() {
        let list = AtomicArrayList::from_vec(vec![1, 5]);
        list.insert_all(1, [2, 3, 4]).unwrap();
        assert_eq!(values(&list), (1..=5).map(Some).collect::<Vec<_>>());
        assert!(list.insert_all(9, [0]).is_err());
        list.insert_all(0, Vec::new()).unwrap();
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn clear_resets_capacity() {
        let list = AtomicArrayList::from_vec((0..16).collect());
        list.clear();
        assert_eq!(list.len(), 0);
        assert_eq!(list.capacity(), DEFAULT_CAPACITY);
        assert!(list.get(0).is_err());
        list.push(3);
        assert_eq!(values(&list), vec![Some(3)]);
    }

    #[test]
    fn absent_operations() {
        let list = AtomicArrayList::from_vec(vec![0, 1, 2]);
        assert!(!list.add_if_absent(1));
        assert!(list.add_if_absent(3));
        assert_eq!(list.add_all_absent([3, 4, 4, 5]), 2);
        assert_eq!(values(&list), (0..6).map(Some).collect::<Vec<_>>());
    }

    #[test]
    fn retain_and_remove_all() {
        let list = AtomicArrayList::from_vec((0..10).collect());
        list.retain(|v| v.is_some_and(|v| v % 2 == 0));
        assert_eq!(values(&list), vec![Some(0), Some(2), Some(4), Some(6), Some(8)]);
        assert!(list.remove_all(&[2, 8, 42]));
        assert!(!list.remove_all(&[42]));
        assert_eq!(values(&list), vec![Some(0), Some(4), Some(6)]);
        assert!(list.remove_item(&4));
        assert!(!list.remove_item(&4));
    }

    #[test]
    fn searches() {
        let list = AtomicArrayList::from_vec(vec!["x", "a", "b", "a"]);
        assert_eq!(list.index_of_from(&"a", 0), Some(1));
        assert_eq!(list.index_of_from(&"a", 2), Some(3));
        assert_eq!(list.index_of_from(&"a", 9), None);
        assert_eq!(list.last_index_of_from(&"a", 3), Ok(Some(3)));
        assert_eq!(list.last_index_of_from(&"a", 2), Ok(Some(1)));
        assert!(list.last_index_of_from(&"a", 4).is_err());
        assert_eq!(list.index_of(&"z"), None);
        assert_eq!(list.last_index_of(&"x"), Some(0));
    }

    #[test]
    fn growth_is_logarithmic() {
        let list = AtomicArrayList::new();
        let mut capacity = list.capacity();
        let mut reallocations = 0;
        for i in 0..1000 {
            list.push(i);
            let now = list.capacity();
            if now != capacity {
                assert_eq!(now, (i + 1).max(capacity * 2));
                capacity = now;
                reallocations += 1;
            }
        }
        assert_eq!(reallocations, 10);
        assert_eq!(capacity, 1024);
    }

    #[test]
    fn debug_marks_empty_slots() {
        let list = AtomicArrayList::new();
        list.set(1, 4).unwrap();
        assert_eq!(format!("{list:?}"), "[<empty>, 4]");
    }

    #[test]
    fn oversized_set_leaves_list_intact() {
        let list = AtomicArrayList::from_vec(vec![1, 2, 3]);
        let huge = usize::MAX / 4;
        assert_eq!(
            list.set(huge, 9),
            Err(ListError::CapacityOverflow { required: huge })
        );
        assert_eq!(list.len(), 3);
        assert_eq!(list.capacity(), 3);
        assert_eq!(values(&list), vec![Some(1), Some(2), Some(3)]);

        assert!(list.set(usize::MAX, 9).is_err());
        list.push(4);
        assert_eq!(list.get(3).unwrap().as_deref(), Some(&4));
    }

    #[test]
    fn retain_visits_each_slot_once_in_order() {
        let list = AtomicArrayList::new();
        list.set(0, 10).unwrap();
        list.set(2, 30).unwrap();
        let mut seen = Vec::new();
        list.retain(|slot| {
            seen.push(slot.copied());
            true
        });
        assert_eq!(seen, vec![Some(10), None, Some(30)]);
        assert_eq!(list.len(), 3);
    }

    struct Loud(i32);

    impl PartialEq for Loud {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }

    impl Drop for Loud {
        fn drop(&mut self) {
            if self.0 == 13 && !std::thread::panicking() {
                panic!("dropped 13");
            }
        }
    }

    #[test]
    fn panicking_drop_after_retain_keeps_list_consistent() {
        let list = AtomicArrayList::from_vec((10..16).map(Loud).collect());
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            list.retain(|slot| slot.is_some_and(|v| v.0 % 2 == 0));
        }));
        assert!(result.is_err());

        let kept: Vec<i32> = list.to_vec().iter().flatten().map(|v| v.0).collect();
        assert_eq!(kept, vec![10, 12, 14]);
        assert_eq!(list.len(), 3);
        assert!(list.get(3).is_err());
        list.push(Loud(16));
        assert_eq!(list.len(), 4);
    }
}
