//! Common traits for heap-ordered containers
//!
//! [`Heap`] is the seam shared by [`BinaryHeap`](crate::binary_heap::BinaryHeap)
//! and [`PriorityQueue`](crate::priority_queue::PriorityQueue), so that generic
//! code and tests can drive either one.
//!
//! Unlike `std::collections::BinaryHeap`, which is always a max-heap, the
//! ordering here is a runtime property chosen at construction through
//! [`HeapKind`].

use std::fmt;

use crate::error::ContainerError;

/// Which end of the ordering a heap keeps at its root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HeapKind {
    /// Smallest element on top
    #[default]
    Min,
    /// Largest element on top
    Max,
}

impl HeapKind {
    /// Returns true if `a` belongs above `b` under this ordering.
    ///
    /// This is the single policy switch used by both sift directions:
    /// `a < b` for a min-heap, `a > b` for a max-heap.
    #[inline]
    pub fn precedes<T: Ord + ?Sized>(self, a: &T, b: &T) -> bool {
        match self {
            HeapKind::Min => a < b,
            HeapKind::Max => a > b,
        }
    }
}

impl fmt::Display for HeapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapKind::Min => write!(f, "min"),
            HeapKind::Max => write!(f, "max"),
        }
    }
}

/// Base trait for heap-ordered containers
///
/// # Example
///
/// ```rust
/// use classic_algos::{BinaryHeap, Heap, HeapKind};
///
/// let mut heap = BinaryHeap::new(HeapKind::Min);
/// heap.insert(3);
/// heap.insert(1);
/// heap.insert(2);
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.extract(), Ok(1));
/// ```
pub trait Heap<T: Ord> {
    /// The ordering this container was built with
    fn kind(&self) -> HeapKind;

    /// Returns true if the container holds no elements
    fn is_empty(&self) -> bool;

    /// Returns the number of elements
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n)
    fn insert(&mut self, value: T);

    /// Returns the top element without removing it, or `None` when empty
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the top element
    ///
    /// # Errors
    /// Returns [`ContainerError::EmptyContainer`] if there is nothing to extract.
    ///
    /// # Time Complexity
    /// O(log n)
    fn extract(&mut self) -> Result<T, ContainerError>;
}
