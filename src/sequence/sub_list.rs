use super::AtomicSequence;
use crate::ListError;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// A live view over a contiguous range of a parent sequence.
///
/// Reads and writes go straight to the parent at `start + index`. Bounds are
/// checked against the view's own length, so `set` never extends the parent.
/// Inserting or removing through the view moves the parent's later elements
/// and adjusts the view length; changes made to the parent directly are not
/// tracked.
pub struct SubList<'a, S> {
    parent: &'a S,
    start: usize,
    len: AtomicUsize,
}

impl<'a, S> SubList<'a, S> {
    pub(crate) fn new(parent: &'a S, start: usize, len: usize) -> Self {
        Self {
            parent,
            start,
            len: AtomicUsize::new(len),
        }
    }

    /// Offset of the view's first slot within the parent.
    pub fn start(&self) -> usize {
        self.start
    }
}

impl<'a, S: AtomicSequence> AtomicSequence for SubList<'a, S> {
    type Item = S::Item;

    fn len(&self) -> usize {
        self.len.load(Ordering::Acquire)
    }

    fn get(&self, index: usize) -> Result<Option<Arc<S::Item>>, ListError> {
        ListError::check_index(index, self.len())?;
        self.parent.get(self.start + index)
    }

    fn set(&self, index: usize, element: S::Item) -> Result<Option<Arc<S::Item>>, ListError> {
        ListError::check_index(index, self.len())?;
        self.parent.set(self.start + index, element)
    }

    fn insert(&self, index: usize, element: S::Item) -> Result<(), ListError> {
        ListError::check_position(index, self.len())?;
        self.parent.insert(self.start + index, element)?;
        self.len.fetch_add(1, Ordering::AcqRel);
        Ok(())
    }

    fn remove(&self, index: usize) -> Result<Option<Arc<S::Item>>, ListError> {
        ListError::check_index(index, self.len())?;
        let removed = self.parent.remove(self.start + index)?;
        self.len.fetch_sub(1, Ordering::AcqRel);
        Ok(removed)
    }
}
