//! Concurrent list implementations.
//!
//! - `growable`: [`AtomicArrayList`], resizable under a shared/exclusive lock
//! - `fixed`: [`FixedAtomicArrayList`], fixed length, lock-free slot access

pub mod fixed;
pub mod growable;
mod persist;

#[cfg(feature = "parallel")]
mod parallel;

pub use fixed::FixedAtomicArrayList;
pub use growable::{AtomicArrayList, DEFAULT_CAPACITY};
