//! Rayon integration (`parallel` feature).

use super::{AtomicArrayList, FixedAtomicArrayList};
use rayon::prelude::*;
use std::sync::Arc;

impl<T: Send + Sync> AtomicArrayList<T> {
    /// Parallel iterator over a snapshot taken under one shared lock.
    pub fn par_iter(&self) -> rayon::vec::IntoIter<Option<Arc<T>>> {
        self.to_vec().into_par_iter()
    }
}

impl<T: Send + Sync> FixedAtomicArrayList<T> {
    /// Parallel iterator over a copy of every slot.
    pub fn par_iter(&self) -> rayon::vec::IntoIter<Option<Arc<T>>> {
        self.to_vec().into_par_iter()
    }
}
