//! # `atomic-array-list` - Concurrent Lists with Atomic Slots
//!
//! Two list types whose elements can be read and replaced by many threads at
//! once:
//!
//! - [`AtomicArrayList`]: a growable list. Element reads and in-place writes
//!   share a reader-writer lock; growth, insertion, removal and clearing take
//!   it exclusively. Costs match a plain dynamic array (amortized O(1) append,
//!   O(n) positional insert/remove).
//! - [`FixedAtomicArrayList`]: a fixed-length list with no lock at all, for
//!   callers that only need per-slot atomicity.
//!
//! ## Model
//!
//! Every slot is an independently atomic cell holding `Some(Arc<T>)` or
//! nothing. Replacing a slot is atomic with respect to reads of that slot and
//! unordered with respect to other slots. A reader owns the `Arc` it got back,
//! so later writes never invalidate it.
//!
//! Generic sequence behaviour (iteration, search, equality, hashing,
//! sub-range views, export) lives on the [`AtomicSequence`] trait and is shared
//! by both lists and by [`SubList`] views.
//!
//! ## Features
//!
//! - `parallel`: `par_iter` through rayon
//! - `tracing`: structured events for storage growth and resets
//! - `proptest`: strategies for generating populated lists
//!
//! ## Example
//!
//! ```rust
//! use atomic_array_list::{AtomicArrayList, AtomicSequence};
//! use std::thread;
//!
//! let list = AtomicArrayList::from_vec(vec![0, 1, 2]);
//! list.insert(0, -1).unwrap();
//! assert_eq!(list.remove(1).unwrap().as_deref(), Some(&0));
//!
//! thread::scope(|s| {
//!     for i in 0..4 {
//!         let list = &list;
//!         s.spawn(move || list.push(10 + i));
//!     }
//! });
//! assert_eq!(list.len(), 7);
//! assert!(list.contains_all(&[10, 11, 12, 13]));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod error;
mod slot;
mod trace;

pub mod collections;
pub mod sequence;

#[cfg(feature = "proptest")]
pub mod strategy;

pub use collections::{AtomicArrayList, FixedAtomicArrayList, DEFAULT_CAPACITY};
pub use error::ListError;
pub use sequence::{AtomicSequence, Iter, SubList};

// Compile-time layout checks.
const _: () = {
    use core::mem;

    // The fixed list is just its boxed slot slice.
    assert!(mem::size_of::<FixedAtomicArrayList<u64>>() == 2 * mem::size_of::<usize>());

    // Errors stay small enough to return by value cheaply.
    assert!(mem::size_of::<ListError>() <= 3 * mem::size_of::<usize>());
};
