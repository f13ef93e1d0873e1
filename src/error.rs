//! Error type shared by the container structures
//!
//! Absence is never an error here: lookups on a missing key, `peek` on an
//! empty heap and AVL `search` all return `None`/`false`. The variants below
//! cover the cases where the caller asked for something the container cannot
//! give.

use std::fmt;

use crate::traits::HeapKind;

/// Error type for container operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    /// Extract or dequeue was called on an empty heap / priority queue
    EmptyContainer,
    /// A min-only or max-only extraction was called on a heap of the other ordering
    TypeMismatch {
        /// The ordering the caller asked for
        requested: HeapKind,
        /// The ordering the heap was built with
        actual: HeapKind,
    },
    /// Linear probing wrapped around the whole table without finding a free slot
    ///
    /// The load factor threshold keeps free slots available, so reaching
    /// this means the resize policy was violated.
    CapacityExhausted {
        /// Slot count of the table at the time of the failed insert
        capacity: usize,
    },
    /// A hash table was configured with an unknown method or invalid parameters
    InvalidConfiguration(String),
}

impl fmt::Display for ContainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerError::EmptyContainer => write!(f, "container is empty"),
            ContainerError::TypeMismatch { requested, actual } => {
                write!(f, "cannot extract {requested} from a {actual}-heap")
            }
            ContainerError::CapacityExhausted { capacity } => {
                write!(f, "hash table full after probing all {capacity} slots")
            }
            ContainerError::InvalidConfiguration(reason) => {
                write!(f, "invalid configuration: {reason}")
            }
        }
    }
}

impl std::error::Error for ContainerError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(ContainerError::EmptyContainer.to_string(), "container is empty");
        assert_eq!(
            ContainerError::TypeMismatch {
                requested: HeapKind::Min,
                actual: HeapKind::Max,
            }
            .to_string(),
            "cannot extract min from a max-heap"
        );
        assert_eq!(
            ContainerError::CapacityExhausted { capacity: 8 }.to_string(),
            "hash table full after probing all 8 slots"
        );
        assert_eq!(
            ContainerError::InvalidConfiguration("bad".into()).to_string(),
            "invalid configuration: bad"
        );
    }
}
