//! `AtomicSequence`: the ordered, indexable container capability.
//!
//! Both list types and every [`SubList`] view implement this trait. The
//! required methods are the per-index primitives (`len`, `get`, `set`, and
//! optionally `insert`/`remove`); everything else (iteration, search,
//! equality, hashing, sub-range views, export) is written once here against
//! those primitives.
//!
//! The provided algorithms call the primitives one index at a time, so on a
//! sequence that is being structurally modified concurrently they observe
//! whatever interleaving happens. Implementations that can do better (the
//! growable list takes one shared lock for a whole scan) override them.

mod iter;
mod sub_list;

pub use iter::Iter;
pub use sub_list::SubList;

use crate::ListError;
use core::hash::{Hash, Hasher};
use std::sync::Arc;

/// An ordered container of atomically replaceable slots.
///
/// Slots hold `Some(Arc<Item>)` or are empty (`None`).
pub trait AtomicSequence {
    /// Element type.
    type Item;

    /// Number of logical slots.
    fn len(&self) -> usize;

    /// Reads the slot at `index`.
    ///
    /// # Errors
    /// `IndexOutOfRange` if `index >= len()`.
    fn get(&self, index: usize) -> Result<Option<Arc<Self::Item>>, ListError>;

    /// Replaces the slot at `index`, returning the previous value.
    ///
    /// # Errors
    /// Sequences that cannot extend themselves fail with `IndexOutOfRange`
    /// when `index >= len()`; growable ones fail with `CapacityOverflow` when
    /// storage reaching `index` cannot be reserved.
    fn set(&self, index: usize, element: Self::Item)
        -> Result<Option<Arc<Self::Item>>, ListError>;

    /// Inserts `element` at `index`, shifting later elements up by one.
    ///
    /// # Errors
    /// `Unsupported` unless the sequence overrides it; otherwise
    /// `IndexOutOfRange` if `index > len()`.
    fn insert(&self, index: usize, element: Self::Item) -> Result<(), ListError> {
        let _ = (index, element);
        Err(ListError::Unsupported { operation: "insert" })
    }

    /// Removes the slot at `index`, shifting later elements down by one.
    ///
    /// # Errors
    /// `Unsupported` unless the sequence overrides it; otherwise
    /// `IndexOutOfRange` if `index >= len()`.
    fn remove(&self, index: usize) -> Result<Option<Arc<Self::Item>>, ListError> {
        let _ = index;
        Err(ListError::Unsupported { operation: "remove" })
    }

    /// Returns `true` if the sequence has no slots.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends `element`.
    ///
    /// # Errors
    /// Whatever `insert` reports.
    fn push(&self, element: Self::Item) -> Result<(), ListError> {
        self.insert(self.len(), element)
    }

    /// Iterates from the first slot.
    fn iter(&self) -> Iter<'_, Self>
    where
        Self: Sized,
    {
        Iter::new(self, 0)
    }

    /// Iterates starting at `index`.
    ///
    /// # Errors
    /// `IndexOutOfRange` if `index > len()`.
    fn iter_from(&self, index: usize) -> Result<Iter<'_, Self>, ListError>
    where
        Self: Sized,
    {
        ListError::check_position(index, self.len())?;
        Ok(Iter::new(self, index))
    }

    /// Copies every slot out in order.
    fn to_vec(&self) -> Vec<Option<Arc<Self::Item>>>
    where
        Self: Sized,
    {
        self.iter().collect()
    }

    /// Lowest index `>= from` holding an element equal to `element`.
    ///
    /// A `from` at or past the end simply finds nothing.
    fn index_of_from(&self, element: &Self::Item, from: usize) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        (from..self.len()).find(|&index| matches!(self.get(index), Ok(Some(v)) if *v == *element))
    }

    /// Highest index `<= from` holding an element equal to `element`.
    ///
    /// # Errors
    /// `IndexOutOfRange` if `from >= len()`.
    fn last_index_of_from(
        &self,
        element: &Self::Item,
        from: usize,
    ) -> Result<Option<usize>, ListError>
    where
        Self::Item: PartialEq,
    {
        ListError::check_index(from, self.len())?;
        Ok((0..=from)
            .rev()
            .find(|&index| matches!(self.get(index), Ok(Some(v)) if *v == *element)))
    }

    /// Lowest index holding an element equal to `element`.
    fn index_of(&self, element: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        self.index_of_from(element, 0)
    }

    /// Highest index holding an element equal to `element`.
    fn last_index_of(&self, element: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        match self.len() {
            0 => None,
            len => self.last_index_of_from(element, len - 1).ok().flatten(),
        }
    }

    /// Returns `true` if some slot holds an element equal to `element`.
    fn contains(&self, element: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.index_of(element).is_some()
    }

    /// Lowest index whose slot is empty, such as a gap left by `set` past the
    /// end.
    fn index_of_empty(&self) -> Option<usize>
    where
        Self: Sized,
    {
        self.to_vec().iter().position(Option::is_none)
    }

    /// Highest index whose slot is empty.
    fn last_index_of_empty(&self) -> Option<usize>
    where
        Self: Sized,
    {
        self.to_vec().iter().rposition(Option::is_none)
    }

    /// Returns `true` if every item in `items` is present.
    fn contains_all<'e, I>(&self, items: I) -> bool
    where
        I: IntoIterator<Item = &'e Self::Item>,
        Self::Item: PartialEq + 'e,
        Self: Sized,
    {
        let snapshot = self.to_vec();
        items
            .into_iter()
            .all(|item| snapshot.iter().any(|slot| slot.as_deref() == Some(item)))
    }

    /// Element-wise equality with any other sequence of the same item type.
    fn sequence_eq<S>(&self, other: &S) -> bool
    where
        S: AtomicSequence<Item = Self::Item>,
        Self::Item: PartialEq,
        Self: Sized,
    {
        self.to_vec() == other.to_vec()
    }

    /// Feeds the length and every slot into `state`.
    ///
    /// Sequences for which [`sequence_eq`](Self::sequence_eq) holds hash equally.
    fn sequence_hash<H: Hasher>(&self, state: &mut H)
    where
        Self::Item: Hash,
        Self: Sized,
    {
        self.to_vec().hash(state);
    }

    /// A live view of `[from, to)`.
    ///
    /// # Errors
    /// `IndexOutOfRange` if `to > len()` or `from > to`.
    fn sub_list(&self, from: usize, to: usize) -> Result<SubList<'_, Self>, ListError>
    where
        Self: Sized,
    {
        ListError::check_position(to, self.len())?;
        ListError::check_position(from, to)?;
        Ok(SubList::new(self, from, to - from))
    }

    /// Exports every slot into a vector of `U`, converting each element.
    ///
    /// # Errors
    /// `ArrayTypeMismatch` naming the first element that `U` cannot hold.
    fn try_export<U>(&self) -> Result<Vec<Option<U>>, ListError>
    where
        U: TryFrom<Self::Item>,
        Self::Item: Clone,
        Self: Sized,
    {
        self.to_vec()
            .into_iter()
            .enumerate()
            .map(|(index, slot)| match slot {
                None => Ok(None),
                Some(value) => U::try_from(Arc::unwrap_or_clone(value))
                    .map(Some)
                    .map_err(|_| ListError::ArrayTypeMismatch { index }),
            })
            .collect()
    }
}
