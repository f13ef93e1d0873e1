//! Priority queue adapter over [`BinaryHeap`]
//!
//! Exposes the queue vocabulary (`enqueue`/`dequeue`) on top of a heap it
//! owns exclusively. It is a min-queue by default; use
//! [`PriorityQueue::max`] to dequeue the largest element first.
//!
//! # Example
//!
//! ```rust
//! use classic_algos::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new();
//! for value in [7, 2, 9, 1] {
//!     queue.enqueue(value);
//! }
//! assert_eq!(queue.peek(), Some(&1));
//! assert_eq!(queue.dequeue(), Ok(1));
//! assert_eq!(queue.dequeue(), Ok(2));
//! ```

use crate::binary_heap::BinaryHeap;
use crate::error::ContainerError;
use crate::traits::{Heap, HeapKind};

/// A priority queue backed by a binary heap
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    heap: BinaryHeap<T>,
}

impl<T: Ord> PriorityQueue<T> {
    /// Creates an empty min-queue
    pub fn new() -> Self {
        Self::with_kind(HeapKind::Min)
    }

    /// Creates an empty max-queue
    pub fn max() -> Self {
        Self::with_kind(HeapKind::Max)
    }

    pub fn with_kind(kind: HeapKind) -> Self {
        Self {
            heap: BinaryHeap::new(kind),
        }
    }

    /// Adds a value to the queue
    pub fn enqueue(&mut self, value: T) {
        self.heap.insert(value)
    }

    /// Removes and returns the highest-priority value
    ///
    /// # Errors
    /// Returns [`ContainerError::EmptyContainer`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<T, ContainerError> {
        self.heap.extract()
    }

    /// Returns the highest-priority value without removing it
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<T: Ord> Heap<T> for PriorityQueue<T> {
    fn kind(&self) -> HeapKind {
        self.heap.kind()
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn insert(&mut self, value: T) {
        self.enqueue(value)
    }

    fn peek(&self) -> Option<&T> {
        self.heap.peek()
    }

    fn extract(&mut self) -> Result<T, ContainerError> {
        self.dequeue()
    }
}

impl<T: Ord> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
