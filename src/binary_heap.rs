//! Array-backed binary heap with a runtime min/max ordering
//!
//! Elements live in a single `Vec`; the children of index `i` sit at `2i + 1`
//! and `2i + 2`. Every parent precedes its existing children under the
//! heap's [`HeapKind`], so the root is always the minimum (or maximum).
//!
//! # Time Complexity
//!
//! | Operation  | Complexity |
//! |------------|------------|
//! | `insert`   | O(log n)   |
//! | `extract`  | O(log n)   |
//! | `peek`     | O(1)       |
//! | `heapify`  | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use classic_algos::{BinaryHeap, HeapKind};
//!
//! let mut heap = BinaryHeap::from_vec(HeapKind::Min, vec![5, 3, 8, 1, 2]);
//! assert_eq!(heap.peek(), Some(&1));
//!
//! let mut drained = Vec::new();
//! while let Ok(value) = heap.extract() {
//!     drained.push(value);
//! }
//! assert_eq!(drained, vec![1, 2, 3, 5, 8]);
//! ```

use crate::error::ContainerError;
use crate::traits::{Heap, HeapKind};

/// A binary heap whose ordering is fixed at construction
#[derive(Debug, Clone)]
pub struct BinaryHeap<T> {
    /// Heap-ordered storage, root at index 0
    data: Vec<T>,
    kind: HeapKind,
}

impl<T: Ord> BinaryHeap<T> {
    /// Creates an empty heap with the given ordering
    pub fn new(kind: HeapKind) -> Self {
        Self {
            data: Vec::new(),
            kind,
        }
    }

    /// Creates an empty min-heap
    pub fn min() -> Self {
        Self::new(HeapKind::Min)
    }

    /// Creates an empty max-heap
    pub fn max() -> Self {
        Self::new(HeapKind::Max)
    }

    /// Builds a heap from `items` in O(n)
    pub fn from_vec(kind: HeapKind, items: Vec<T>) -> Self {
        let mut heap = Self { data: items, kind };
        heap.rebuild();
        heap
    }

    /// Bulk-loads `items` into the heap and restores the heap order in O(n + m)
    ///
    /// Existing elements are kept; the whole storage is re-heapified.
    pub fn heapify<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.data.extend(items);
        self.rebuild();
    }

    /// Returns the ordering of this heap
    pub fn kind(&self) -> HeapKind {
        self.kind
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Appends `value` and sifts it up toward the root
    pub fn insert(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Returns the root without removing it
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Removes and returns the root
    ///
    /// The last element takes the root position and sifts down.
    pub fn extract(&mut self) -> Result<T, ContainerError> {
        if self.data.is_empty() {
            return Err(ContainerError::EmptyContainer);
        }

        let top = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }

        Ok(top)
    }

    /// Like [`extract`](Self::extract), but only on a min-heap
    pub fn extract_min(&mut self) -> Result<T, ContainerError> {
        self.extract_expecting(HeapKind::Min)
    }

    /// Like [`extract`](Self::extract), but only on a max-heap
    pub fn extract_max(&mut self) -> Result<T, ContainerError> {
        self.extract_expecting(HeapKind::Max)
    }

    /// Consumes the heap and returns its elements in extraction order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.data.len());
        while let Ok(value) = self.extract() {
            out.push(value);
        }
        out
    }

    /// Returns the underlying storage in heap order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    fn extract_expecting(&mut self, requested: HeapKind) -> Result<T, ContainerError> {
        if self.kind != requested {
            return Err(ContainerError::TypeMismatch {
                requested,
                actual: self.kind,
            });
        }
        self.extract()
    }

    /// Sift down every internal node, last internal node first
    fn rebuild(&mut self) {
        for index in (0..self.data.len() / 2).rev() {
            self.sift_down(index);
        }
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.kind.precedes(&self.data[index], &self.data[parent]) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut best = index;

            if left < len && self.kind.precedes(&self.data[left], &self.data[best]) {
                best = left;
            }
            if right < len && self.kind.precedes(&self.data[right], &self.data[best]) {
                best = right;
            }

            if best != index {
                self.data.swap(index, best);
                index = best;
            } else {
                break;
            }
        }
    }
}

impl<T: Ord> Heap<T> for BinaryHeap<T> {
    fn kind(&self) -> HeapKind {
        self.kind
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn insert(&mut self, value: T) {
        BinaryHeap::insert(self, value)
    }

    fn peek(&self) -> Option<&T> {
        BinaryHeap::peek(self)
    }

    fn extract(&mut self) -> Result<T, ContainerError> {
        BinaryHeap::extract(self)
    }
}

impl<T: Ord> Default for BinaryHeap<T> {
    fn default() -> Self {
        Self::min()
    }
}

impl<T: Ord> Extend<T> for BinaryHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinaryHeap<T> {
    /// Collects into a min-heap
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(HeapKind::Min, iter.into_iter().collect())
    }
}
