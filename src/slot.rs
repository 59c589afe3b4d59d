//! `SlotArray`: the fixed-length array of atomic cells both lists are built on.
//!
//! Each slot is an [`ArcSwapOption`], so replacing a slot is a single atomic swap
//! and readers walk away with their own `Arc<T>`. The array itself never changes
//! length; growing means building a new array and moving every slot across,
//! which requires `&mut self`.
//!
//! Invariant maintained by the owning list: slots at or past the logical length
//! are empty.

use crate::ListError;
use arc_swap::ArcSwapOption;
use core::fmt;
use core::ops::Range;
use std::sync::Arc;

/// Growth rule shared by every capacity-raising path.
///
/// Doubling keeps repeated appends amortized O(1); the `required + 1` floor
/// covers writes that land far past the current end.
#[inline]
pub(crate) const fn grown_capacity(current: usize, required_index: usize) -> usize {
    let doubled = current.saturating_mul(2);
    let needed = required_index.saturating_add(1);
    if needed > doubled {
        needed
    } else {
        doubled
    }
}

pub(crate) struct SlotArray<T> {
    slots: Box<[ArcSwapOption<T>]>,
}

impl<T> SlotArray<T> {
    /// Creates `capacity` empty slots.
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| ArcSwapOption::empty()).collect(),
        }
    }

    /// Creates an array holding exactly `values`, in order.
    pub(crate) fn from_values(values: Vec<Option<Arc<T>>>) -> Self {
        Self {
            slots: values.into_iter().map(ArcSwapOption::new).collect(),
        }
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Atomically reads the slot at `index`.
    ///
    /// Callers have already checked `index` against their own bound.
    #[inline]
    pub(crate) fn load(&self, index: usize) -> Option<Arc<T>> {
        self.slots[index].load_full()
    }

    /// Atomically replaces the slot at `index`, returning the previous value.
    #[inline]
    pub(crate) fn replace(&self, index: usize, value: Option<Arc<T>>) -> Option<Arc<T>> {
        self.slots[index].swap(value)
    }

    /// Reallocates so that `required_index` is addressable, following
    /// [`grown_capacity`]. Every existing value keeps its index.
    ///
    /// The new storage is reserved before any slot moves; if it cannot be
    /// reserved the array is left exactly as it was.
    ///
    /// Returns the new capacity.
    pub(crate) fn grow_to_fit(&mut self, required_index: usize) -> Result<usize, ListError> {
        let new_capacity = grown_capacity(self.capacity(), required_index);
        let mut grown = Vec::new();
        grown
            .try_reserve_exact(new_capacity)
            .map_err(|_| ListError::CapacityOverflow {
                required: required_index,
            })?;
        grown.extend(core::mem::take(&mut self.slots).into_vec());
        grown.resize_with(new_capacity, ArcSwapOption::empty);
        self.slots = grown.into_boxed_slice();
        Ok(new_capacity)
    }

    /// Moves the values in `[index, len)` up by `by` positions.
    ///
    /// Requires `len + by <= capacity`; the `by` empty tail slots rotate down
    /// into `[index, index + by)`.
    pub(crate) fn shift_right(&mut self, index: usize, len: usize, by: usize) {
        debug_assert!(len + by <= self.capacity());
        self.slots[index..len + by].rotate_right(by);
    }

    /// Moves the values in `[index + 1, len)` down by one position, carrying the
    /// slot at `index` to `len - 1`. The caller empties `index` first.
    pub(crate) fn shift_left(&mut self, index: usize, len: usize) {
        debug_assert!(index < len && len <= self.capacity());
        self.slots[index..len].rotate_left(1);
    }

    /// Keeps the values in `[0, len)` whose flag is set, compacting them to the
    /// front in order. Returns the discarded values so the caller decides when
    /// they drop.
    pub(crate) fn compact(&mut self, keep: &[bool]) -> Vec<Option<Arc<T>>> {
        let mut kept = 0;
        let mut discarded = Vec::with_capacity(keep.len());
        for (index, &retain) in keep.iter().enumerate() {
            let value = self.replace(index, None);
            if retain {
                self.replace(kept, value);
                kept += 1;
            } else {
                discarded.push(value);
            }
        }
        discarded
    }

    /// Copies out the values in `[0, len)`.
    pub(crate) fn snapshot(&self, len: usize) -> Vec<Option<Arc<T>>> {
        self.slots[..len].iter().map(ArcSwapOption::load_full).collect()
    }

    /// Lowest index in `range` whose value equals `element`.
    pub(crate) fn position(&self, mut range: Range<usize>, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        range.find(|&index| self.holds(index, element))
    }

    /// Highest index in `range` whose value equals `element`.
    pub(crate) fn rposition(&self, range: Range<usize>, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        range.rev().find(|&index| self.holds(index, element))
    }

    #[inline]
    fn holds(&self, index: usize, element: &T) -> bool
    where
        T: PartialEq,
    {
        matches!(&*self.slots[index].load(), Some(value) if **value == *element)
    }
}

/// Formats a run of slot values as a list, showing empty slots as `<empty>`.
pub(crate) fn fmt_slots<T: fmt::Debug>(
    f: &mut fmt::Formatter<'_>,
    values: &[Option<Arc<T>>],
) -> fmt::Result {
    struct Slot<'a, T>(&'a Option<Arc<T>>);

    impl<T: fmt::Debug> fmt::Debug for Slot<'_, T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self.0 {
                Some(value) => fmt::Debug::fmt(value, f),
                None => f.write_str("<empty>"),
            }
        }
    }

    f.debug_list().entries(values.iter().map(Slot)).finish()
}
