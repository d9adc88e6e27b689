//! Fixed-capacity heap
//!
//! A [`BinaryHeap`] whose storage is allocated once, up front, and never
//! grows. Inserting into a full heap fails with
//! [`HeapError::CapacityExceeded`] instead of reallocating.
//!
//! # Example
//!
//! ```rust
//! use heap_algorithms::fixed::FixedHeap;
//! use heap_algorithms::HeapError;
//!
//! let mut heap = FixedHeap::new(2);
//! heap.insert(7).unwrap();
//! heap.insert(3).unwrap();
//! assert_eq!(heap.insert(5), Err(HeapError::CapacityExceeded { capacity: 2 }));
//! assert_eq!(heap.extract_root(), Ok(3));
//! ```

use crate::binary::BinaryHeap;
use crate::traits::{Compare, Heap, HeapError, MaxOrder, MinOrder};

/// A binary heap that holds at most `capacity` elements
#[derive(Debug, Clone)]
pub struct FixedHeap<T, C = MinOrder> {
    heap: BinaryHeap<T, C>,
    capacity: usize,
}

impl<T: Ord> FixedHeap<T, MinOrder> {
    /// Creates an empty min-heap holding at most `capacity` elements
    pub fn new(capacity: usize) -> Self {
        Self::with_comparator(capacity, MinOrder)
    }
}

impl<T: Ord> FixedHeap<T, MaxOrder> {
    /// Creates an empty max-heap holding at most `capacity` elements
    pub fn new_max(capacity: usize) -> Self {
        Self::with_comparator(capacity, MaxOrder)
    }
}

impl<T, C: Compare<T>> FixedHeap<T, C> {
    /// Creates an empty heap ordered by `cmp` holding at most `capacity` elements
    pub fn with_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            heap: BinaryHeap::with_capacity_and_comparator(capacity, cmp),
            capacity,
        }
    }

    /// Builds a heap from `values`, with a capacity of exactly `values.len()`
    pub fn heapify(values: Vec<T>, cmp: C) -> Self {
        let capacity = values.len();
        Self {
            heap: BinaryHeap::heapify(values, cmp),
            capacity,
        }
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns true if no further element can be inserted
    pub fn is_full(&self) -> bool {
        self.heap.len() >= self.capacity
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns the fixed capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Inserts an element
    ///
    /// # Errors
    /// Returns `HeapError::CapacityExceeded` if the heap is full. The heap is
    /// left unchanged.
    pub fn insert(&mut self, value: T) -> Result<(), HeapError> {
        if self.is_full() {
            return Err(HeapError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.heap.insert(value);
        Ok(())
    }

    /// Returns the root element without removing it
    pub fn peek_root(&self) -> Result<&T, HeapError> {
        self.heap.peek_root()
    }

    /// Removes and returns the root element
    pub fn extract_root(&mut self) -> Result<T, HeapError> {
        self.heap.extract_root()
    }

    /// The elements in level order
    pub fn as_slice(&self) -> &[T] {
        self.heap.as_slice()
    }

    /// Consumes the heap, returning its elements in level order
    pub fn into_vec(self) -> Vec<T> {
        self.heap.into_vec()
    }

    /// Consumes the heap, returning its elements root first
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.heap.into_sorted_vec()
    }

    /// Checks the heap-order invariant
    pub fn is_valid(&self) -> bool {
        self.heap.is_valid()
    }
}

impl<T, C: Compare<T>> Heap<T> for FixedHeap<T, C> {
    fn is_empty(&self) -> bool {
        FixedHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        FixedHeap::len(self)
    }

    fn try_insert(&mut self, value: T) -> Result<(), HeapError> {
        self.insert(value)
    }

    fn peek_root(&self) -> Result<&T, HeapError> {
        FixedHeap::peek_root(self)
    }

    fn extract_root(&mut self) -> Result<T, HeapError> {
        FixedHeap::extract_root(self)
    }
}
