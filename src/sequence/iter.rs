use super::AtomicSequence;
use core::iter::FusedIterator;
use std::sync::Arc;

/// Index-driven iterator over an [`AtomicSequence`].
///
/// Each step is an independent `get`, so concurrent `set`s are seen as they
/// land. Iteration stops the first time the next index is out of range,
/// e.g. because another thread removed elements.
pub struct Iter<'a, S> {
    seq: &'a S,
    next: usize,
    done: bool,
}

impl<'a, S> Iter<'a, S> {
    pub(crate) fn new(seq: &'a S, start: usize) -> Self {
        Self {
            seq,
            next: start,
            done: false,
        }
    }

    /// Index of the slot the next call to `next` will read.
    pub fn next_index(&self) -> usize {
        self.next
    }
}

impl<'a, S: AtomicSequence> Iterator for Iter<'a, S> {
    type Item = Option<Arc<S::Item>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.seq.get(self.next) {
            Ok(slot) => {
                self.next += 1;
                Some(slot)
            }
            Err(_) => {
                self.done = true;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Other threads may grow or shrink the sequence between steps.
        (0, None)
    }
}

impl<'a, S: AtomicSequence> FusedIterator for Iter<'a, S> {}

impl<'a, S> Clone for Iter<'a, S> {
    fn clone(&self) -> Self {
        Self {
            seq: self.seq,
            next: self.next,
            done: self.done,
        }
    }
}
