//! Binary Heaps and Heap-Based Algorithms for Rust
//!
//! This crate provides an array-backed binary heap parametrised by an ordering,
//! and the classic algorithms built on top of it.
//!
//! # Features
//!
//! - **Binary Heap**: O(log n) insert and extract-root, O(1) peek, O(n) heapify
//! - **Fixed Heap**: the same heap with a capacity that is never exceeded
//! - **Heap Sort**: in-place, O(n log n), O(1) extra space, not stable
//! - **Top-K Selection**: K largest, K smallest or K most frequent in O(n log k)
//! - **K-Way Merge**: merge K sorted sequences in O(n log k), eagerly or lazily
//! - **Running Median**: O(log n) insertion, O(1) median from two balanced heaps
//!
//! Min-heaps, max-heaps and heaps under caller-supplied orderings are all the
//! same [`BinaryHeap`] type carrying a different [`Compare`] implementation.
//!
//! # Example
//!
//! ```rust
//! use heap_algorithms::{BinaryHeap, HeapError};
//!
//! let mut heap = BinaryHeap::new();
//! heap.insert(5);
//! heap.insert(3);
//! heap.insert(8);
//! assert_eq!(heap.peek_root(), Ok(&3));
//! assert_eq!(heap.extract_root(), Ok(3));
//! assert_eq!(heap.len(), 2);
//!
//! let mut empty: BinaryHeap<i32> = BinaryHeap::new();
//! assert_eq!(empty.extract_root(), Err(HeapError::EmptyHeap));
//! ```

pub mod binary;
pub mod fixed;
pub mod median;
pub mod merge;
pub mod select;
pub mod sift;
pub mod sort;
pub mod traits;

// Re-export the main types for convenience
pub use binary::BinaryHeap;
pub use fixed::FixedHeap;
pub use median::MedianTracker;
pub use merge::{kmerge, merge_k_sorted};
pub use select::{top_k, top_k_frequent, TopK};
pub use sort::heap_sort;
pub use traits::{Compare, Heap, HeapError, MaxOrder, MinOrder};
