//! Classic Algorithms and Data Structures for Rust
//!
//! This crate collects textbook algorithms with an emphasis on the containers
//! that keep an invariant under mutation and repair it locally.
//!
//! # Containers
//!
//! - **Binary Heap**: array-backed min- or max-heap; O(log n) insert/extract, O(n) heapify
//! - **Priority Queue**: enqueue/dequeue adapter over the binary heap
//! - **Hash Table**: separate chaining or linear probing, doubling at load factor 0.7
//! - **AVL Tree**: height-balanced ordered set with four-case rotation repair
//!
//! # Algorithms
//!
//! - **Graphs**: adjacency list/matrix graph, BFS, DFS (recursive and iterative), Dijkstra
//! - **Sorting**: bubble, selection, insertion, merge and randomized quick sort
//! - **Dynamic programming**: Fibonacci, 0/1 knapsack and LCS, each naive, memoized and tabulated
//!
//! All structures are single-threaded, in-memory values. Share one across
//! threads by wrapping it in a lock.
//!
//! # Example
//!
//! ```rust
//! use classic_algos::{AvlTree, BinaryHeap, HashTable, HeapKind};
//!
//! let mut heap = BinaryHeap::new(HeapKind::Max);
//! heap.insert(3);
//! heap.insert(9);
//! assert_eq!(heap.extract_max(), Ok(9));
//!
//! let mut table = HashTable::new();
//! table.insert("answer", 42).unwrap();
//! assert_eq!(table.get("answer"), Some(&42));
//!
//! let tree: AvlTree<i32> = (1..=100).collect();
//! assert!(tree.height() <= 8);
//! ```

pub mod avl_tree;
pub mod binary_heap;
pub mod dp;
pub mod error;
pub mod generator;
pub mod graph;
pub mod hash_table;
pub mod priority_queue;
pub mod sorting;
pub mod traits;
pub mod traversal;

// Re-export the main types for convenience
pub use avl_tree::AvlTree;
pub use binary_heap::BinaryHeap;
pub use error::ContainerError;
pub use hash_table::{CollisionMethod, HashTable, HashTableConfig};
pub use priority_queue::PriorityQueue;
pub use traits::{Heap, HeapKind};
