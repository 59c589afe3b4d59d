//! `FixedAtomicArrayList`: a concurrent list whose length never changes.
//!
//! One [`SlotArray`] sized at construction. Since nothing can change its
//! shape, `get` and `set` are bounds-checked slot operations with no lock.

use crate::sequence::{AtomicSequence, Iter};
use crate::slot::{fmt_slots, SlotArray};
use crate::ListError;
use core::fmt;
use core::hash::{Hash, Hasher};
use std::sync::Arc;

/// A concurrent list of fixed length.
pub struct FixedAtomicArrayList<T> {
    slots: SlotArray<T>,
}

impl<T> FixedAtomicArrayList<T> {
    /// Creates a list of `len` empty slots.
    pub fn new(len: usize) -> Self {
        Self {
            slots: SlotArray::new(len),
        }
    }

    /// Creates a list holding exactly `values`.
    pub fn from_vec(values: Vec<T>) -> Self {
        Self::from_slots(values.into_iter().map(|v| Some(Arc::new(v))).collect())
    }

    pub(crate) fn from_slots(values: Vec<Option<Arc<T>>>) -> Self {
        Self {
            slots: SlotArray::from_values(values),
        }
    }

    /// Number of slots; fixed at construction.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.capacity()
    }

    /// Returns `true` if the list was built with no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reads the slot at `index`.
    ///
    /// # Errors
    /// `IndexOutOfRange` if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<Option<Arc<T>>, ListError> {
        ListError::check_index(index, self.len())?;
        Ok(self.slots.load(index))
    }

    /// Atomically replaces the slot at `index`, returning the previous value.
    ///
    /// # Errors
    /// `IndexOutOfRange` if `index >= len()`.
    pub fn set(&self, index: usize, element: T) -> Result<Option<Arc<T>>, ListError> {
        ListError::check_index(index, self.len())?;
        Ok(self.slots.replace(index, Some(Arc::new(element))))
    }

    /// Copies every slot out in order.
    ///
    /// Each slot is read independently; there is no lock to make the copy a
    /// single snapshot.
    pub fn to_vec(&self) -> Vec<Option<Arc<T>>> {
        self.slots.snapshot(self.len())
    }

    /// Iterates by index; see [`Iter`].
    pub fn iter(&self) -> Iter<'_, Self> {
        Iter::new(self, 0)
    }
}

impl<T> AtomicSequence for FixedAtomicArrayList<T> {
    type Item = T;

    fn len(&self) -> usize {
        FixedAtomicArrayList::len(self)
    }

    fn get(&self, index: usize) -> Result<Option<Arc<T>>, ListError> {
        FixedAtomicArrayList::get(self, index)
    }

    fn set(&self, index: usize, element: T) -> Result<Option<Arc<T>>, ListError> {
        FixedAtomicArrayList::set(self, index, element)
    }

    fn to_vec(&self) -> Vec<Option<Arc<T>>> {
        FixedAtomicArrayList::to_vec(self)
    }
}

impl<T> Clone for FixedAtomicArrayList<T> {
    fn clone(&self) -> Self {
        Self::from_slots(self.to_vec())
    }
}

impl<T: PartialEq> PartialEq for FixedAtomicArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.to_vec() == other.to_vec()
    }
}

impl<T: Eq> Eq for FixedAtomicArrayList<T> {}

impl<T: Hash> Hash for FixedAtomicArrayList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sequence_hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for FixedAtomicArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_slots(f, &self.to_vec())
    }
}

impl<T> From<Vec<T>> for FixedAtomicArrayList<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_vec(values)
    }
}

impl<T> FromIterator<T> for FixedAtomicArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a FixedAtomicArrayList<T> {
    type Item = Option<Arc<T>>;
    type IntoIter = Iter<'a, FixedAtomicArrayList<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
