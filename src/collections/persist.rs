//! Serde support for both lists.
//!
//! Only the logical contents are written: a sequence of optional elements.
//! Capacity and lock state are not part of the format, and a deserialized
//! growable list has exactly as many slots as elements.

use super::{AtomicArrayList, FixedAtomicArrayList};
use crate::trace::event;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::sync::Arc;

fn into_slots<T>(values: Vec<Option<T>>) -> Vec<Option<Arc<T>>> {
    values.into_iter().map(|v| v.map(Arc::new)).collect()
}

impl<T: Serialize> Serialize for AtomicArrayList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.to_vec().iter().map(Option::as_deref))
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for AtomicArrayList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<Option<T>>::deserialize(deserializer)?;
        event!(trace, len = values.len(), "restoring atomic list");
        Ok(Self::from_slots(into_slots(values)))
    }
}

impl<T: Serialize> Serialize for FixedAtomicArrayList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.to_vec().iter().map(Option::as_deref))
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for FixedAtomicArrayList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<Option<T>>::deserialize(deserializer)?;
        event!(trace, len = values.len(), "restoring fixed atomic list");
        Ok(Self::from_slots(into_slots(values)))
    }
}
