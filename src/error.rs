//! Error type shared by every list operation.

use core::fmt;

/// The error type for list operations.
///
/// Every check that produces one of these runs before any slot or length is
/// touched, so a failed call never leaves the list partially modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListError {
    /// An index argument was outside the range valid for the operation.
    ///
    /// `bound` is the exclusive limit that was violated: the length for reads,
    /// removals and in-place writes, `len + 1` for insertions, and the view end
    /// for sub-list ranges whose start lies past their end.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The exclusive upper bound in effect when the check ran.
        bound: usize,
    },
    /// An exported element could not be converted into the destination type.
    ArrayTypeMismatch {
        /// Position of the first element that failed to convert.
        index: usize,
    },
    /// Storage addressing `required` could not be reserved.
    ///
    /// The list keeps its previous storage and length.
    CapacityOverflow {
        /// The index the growth had to cover.
        required: usize,
    },
    /// The sequence does not support this operation (e.g. inserting into a
    /// fixed-capacity list).
    Unsupported {
        /// Name of the rejected operation.
        operation: &'static str,
    },
}

impl ListError {
    #[inline]
    pub(crate) const fn out_of_range(index: usize, bound: usize) -> Self {
        Self::IndexOutOfRange { index, bound }
    }

    /// Checks `index < bound`.
    #[inline]
    pub(crate) const fn check_index(index: usize, bound: usize) -> Result<(), Self> {
        if index < bound {
            Ok(())
        } else {
            Err(Self::out_of_range(index, bound))
        }
    }

    /// Checks `index <= len`, the rule for insertion points.
    #[inline]
    pub(crate) const fn check_position(index: usize, len: usize) -> Result<(), Self> {
        if index <= len {
            Ok(())
        } else {
            Err(Self::out_of_range(index, len + 1))
        }
    }
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, bound } => {
                write!(f, "index {index} out of range (bound {bound})")
            }
            Self::ArrayTypeMismatch { index } => {
                write!(f, "element at index {index} does not fit the destination type")
            }
            Self::CapacityOverflow { required } => {
                write!(f, "cannot reserve storage up to index {required}")
            }
            Self::Unsupported { operation } => {
                write!(f, "operation `{operation}` is not supported by this sequence")
            }
        }
    }
}

impl std::error::Error for ListError {}
