//! Proptest strategies for populated lists (`proptest` feature).

use crate::{AtomicArrayList, FixedAtomicArrayList};
use proptest::collection::{vec, SizeRange};
use proptest::option;
use proptest::strategy::Strategy;
use std::sync::Arc;

/// Growable lists whose elements are drawn from `element`.
pub fn atomic_array_list<S>(
    element: S,
    size: impl Into<SizeRange>,
) -> impl Strategy<Value = AtomicArrayList<S::Value>>
where
    S: Strategy,
{
    vec(element, size).prop_map(AtomicArrayList::from_vec)
}

/// Growable lists that may contain empty slots.
pub fn sparse_atomic_array_list<S>(
    element: S,
    size: impl Into<SizeRange>,
) -> impl Strategy<Value = AtomicArrayList<S::Value>>
where
    S: Strategy,
{
    vec(option::of(element), size)
        .prop_map(|values| AtomicArrayList::from_slots(values.into_iter().map(|v| v.map(Arc::new)).collect()))
}

/// Fixed-length lists whose elements are drawn from `element`.
pub fn fixed_atomic_array_list<S>(
    element: S,
    size: impl Into<SizeRange>,
) -> impl Strategy<Value = FixedAtomicArrayList<S::Value>>
where
    S: Strategy,
{
    vec(element, size).prop_map(FixedAtomicArrayList::from_vec)
}
