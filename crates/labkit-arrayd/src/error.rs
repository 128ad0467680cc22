//! Array error types.

use std::error::Error;
use std::fmt;

/// Errors reported by [`ArrayD`](crate::ArrayD) operations.
///
/// There are exactly two kinds: a position outside the bounds valid for
/// the operation, and a size or policy value that can never be valid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// An index or position falls outside the valid range.
    OutOfRange {
        /// The offending index.
        index: isize,
        /// Exclusive upper bound of the valid range at the time of the call.
        ///
        /// For `insert` this is `size + 1`, since appending is allowed.
        bound: isize,
    },
    /// A requested size, capacity, or configuration value is invalid.
    InvalidArgument {
        /// Description of the rejected value.
        reason: String,
    },
}

impl ArrayError {
    /// Returns `true` for [`ArrayError::OutOfRange`].
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, bound } => {
                write!(f, "index {index} out of range [0, {bound})")
            }
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
        }
    }
}

impl Error for ArrayError {}
