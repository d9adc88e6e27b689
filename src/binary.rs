//! Binary Heap implementation
//!
//! An array-backed binary heap parametrised by an ordering. The same type is a
//! min-heap ([`MinOrder`], the default), a max-heap ([`MaxOrder`]) or a heap
//! under any [`Compare`] implementation supplied by the caller.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity |
//! |----------------|------------|
//! | `insert`       | O(log n)   |
//! | `extract_root` | O(log n)   |
//! | `peek_root`    | O(1)       |
//! | `heapify`      | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use heap_algorithms::binary::BinaryHeap;
//! use heap_algorithms::traits::MinOrder;
//!
//! let mut heap = BinaryHeap::heapify(vec![9, 4, 7, 1, -2, 6, 5], MinOrder);
//! assert_eq!(heap.peek_root(), Ok(&-2));
//!
//! heap.insert(-5);
//! assert_eq!(heap.extract_root(), Ok(-5));
//! assert_eq!(heap.extract_root(), Ok(-2));
//! assert_eq!(heap.len(), 6);
//! ```

use crate::sift;
use crate::traits::{Compare, Heap, HeapError, MaxOrder, MinOrder};
use log::trace;
use std::fmt;
use std::iter::FusedIterator;
use std::slice;

/// A growable binary heap
///
/// Elements are kept in a `Vec` laid out as a complete binary tree. The root,
/// at index 0, is an element that no other element outranks under `C`.
#[derive(Clone)]
pub struct BinaryHeap<T, C = MinOrder> {
    /// The heap data in level order
    data: Vec<T>,
    cmp: C,
}

impl<T: Ord> BinaryHeap<T, MinOrder> {
    /// Creates an empty min-heap
    pub fn new() -> Self {
        Self::with_comparator(MinOrder)
    }

    /// Creates an empty min-heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, MinOrder)
    }
}

impl<T: Ord> BinaryHeap<T, MaxOrder> {
    /// Creates an empty max-heap
    pub fn new_max() -> Self {
        Self::with_comparator(MaxOrder)
    }
}

impl<T, C: Compare<T>> BinaryHeap<T, C> {
    /// Creates an empty heap ordered by `cmp`
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            data: Vec::new(),
            cmp,
        }
    }

    /// Creates an empty heap ordered by `cmp` with room for `capacity` elements
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// Builds a heap from arbitrary values in one pass
    ///
    /// The values are rearranged in place by bottom-up sift-down, which costs
    /// O(n) rather than the O(n log n) of inserting them one by one.
    pub fn heapify(values: Vec<T>, cmp: C) -> Self {
        let mut data = values;
        trace!("heapify: building heap of {} elements", data.len());
        sift::build_heap(&mut data, &cmp);
        Self { data, cmp }
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns the number of elements the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Returns the ordering of this heap
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Inserts an element, growing the storage if needed
    pub fn insert(&mut self, value: T) {
        self.data.push(value);
        let last = self.data.len() - 1;
        sift::sift_up(&mut self.data, last, &self.cmp);
    }

    /// Returns the root element without removing it
    pub fn peek_root(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::EmptyHeap)
    }

    /// Removes and returns the root element
    pub fn extract_root(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::EmptyHeap);
        }

        let root = self.data.swap_remove(0);
        if !self.data.is_empty() {
            sift::sift_down(&mut self.data, 0, &self.cmp);
        }

        Ok(root)
    }

    /// Removes every element, keeping the allocated storage
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// The elements in level order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates over the elements in level order
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the heap, returning its elements in level order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap, returning its elements root first
    ///
    /// For a min-heap this is ascending order, for a max-heap descending.
    pub fn into_sorted_vec(self) -> Vec<T> {
        let Self { mut data, cmp } = self;
        for end in (1..data.len()).rev() {
            data.swap(0, end);
            sift::sift_down(&mut data[..end], 0, &cmp);
        }
        data.reverse();
        data
    }

    /// Removes the elements root first, leaving the heap empty once the
    /// iterator is exhausted
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, C> {
        DrainSorted { heap: self }
    }

    /// Checks the heap-order invariant over every parent/child pair
    pub fn is_valid(&self) -> bool {
        sift::is_heap(&self.data, &self.cmp)
    }
}

impl<T, C: Compare<T>> Heap<T> for BinaryHeap<T, C> {
    fn is_empty(&self) -> bool {
        BinaryHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        BinaryHeap::len(self)
    }

    fn try_insert(&mut self, value: T) -> Result<(), HeapError> {
        self.insert(value);
        Ok(())
    }

    fn peek_root(&self) -> Result<&T, HeapError> {
        BinaryHeap::peek_root(self)
    }

    fn extract_root(&mut self) -> Result<T, HeapError> {
        BinaryHeap::extract_root(self)
    }
}

impl<T, C: Compare<T> + Default> Default for BinaryHeap<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: fmt::Debug, C> fmt::Debug for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for BinaryHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::heapify(iter.into_iter().collect(), C::default())
    }
}

impl<T, C: Compare<T>> Extend<T> for BinaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T, C> IntoIterator for &'a BinaryHeap<T, C> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// Iterator returned by [`BinaryHeap::drain_sorted`]
pub struct DrainSorted<'a, T, C: Compare<T>> {
    heap: &'a mut BinaryHeap<T, C>,
}

impl<T, C: Compare<T>> Iterator for DrainSorted<'_, T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.extract_root().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T, C: Compare<T>> ExactSizeIterator for DrainSorted<'_, T, C> {}

impl<T, C: Compare<T>> FusedIterator for DrainSorted<'_, T, C> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{FnOrder, KeyOrder};

    #[test]
    fn test_basic_operations() {
        let mut heap = BinaryHeap::new();

        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);

        heap.insert(3);
        heap.insert(1);
        heap.insert(2);

        assert!(!heap.is_empty());
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.peek_root(), Ok(&1));

        assert_eq!(heap.extract_root(), Ok(1));
        assert_eq!(heap.extract_root(), Ok(2));
        assert_eq!(heap.extract_root(), Ok(3));
        assert_eq!(heap.extract_root(), Err(HeapError::EmptyHeap));
    }

    #[test]
    fn test_max_heap() {
        let mut heap = BinaryHeap::new_max();
        for value in [4, 8, 1, 9, 3] {
            heap.insert(value);
        }
        assert_eq!(heap.peek_root(), Ok(&9));
        assert_eq!(heap.into_sorted_vec(), vec![9, 8, 4, 3, 1]);
    }

    #[test]
    fn test_empty_heap_errors() {
        let mut heap: BinaryHeap<i32> = BinaryHeap::new();
        assert_eq!(heap.peek_root(), Err(HeapError::EmptyHeap));
        assert_eq!(heap.extract_root(), Err(HeapError::EmptyHeap));
        assert_eq!(heap.len(), 0);
    }

    #[test]
    fn test_heapify_example() {
        let heap = BinaryHeap::heapify(vec![9, 4, 7, 1, -2, 6, 5], MinOrder);
        assert!(heap.is_valid());
        assert_eq!(heap.peek_root(), Ok(&-2));
        assert_eq!(heap.into_sorted_vec(), vec![-2, 1, 4, 5, 6, 7, 9]);
    }

    #[test]
    fn test_peek_is_idempotent() {
        let mut heap = BinaryHeap::new();
        heap.insert(5);
        heap.insert(2);
        for _ in 0..10 {
            assert_eq!(heap.peek_root(), Ok(&2));
            assert_eq!(heap.len(), 2);
        }
    }

    #[test]
    fn test_duplicate_values() {
        let mut heap = BinaryHeap::new();
        heap.insert(1);
        heap.insert(1);
        heap.insert(1);

        assert_eq!(heap.len(), 3);
        assert_eq!(heap.extract_root(), Ok(1));
        assert_eq!(heap.extract_root(), Ok(1));
        assert_eq!(heap.extract_root(), Ok(1));
    }

    #[test]
    fn test_ascending_insertion() {
        let mut heap = BinaryHeap::new();

        for i in 0..100 {
            heap.insert(i);
        }

        for i in 0..100 {
            assert_eq!(heap.extract_root(), Ok(i));
        }
    }

    #[test]
    fn test_descending_insertion() {
        let mut heap = BinaryHeap::new();

        for i in (0..100).rev() {
            heap.insert(i);
            assert!(heap.is_valid());
        }

        for i in 0..100 {
            assert_eq!(heap.extract_root(), Ok(i));
        }
    }

    #[test]
    fn test_custom_comparators() {
        let closest_to_zero = FnOrder(|a: &i32, b: &i32| b.abs().cmp(&a.abs()));
        let mut by_abs = BinaryHeap::with_comparator(closest_to_zero);
        for value in [-7, 3, -1, 5] {
            by_abs.insert(value);
        }
        assert_eq!(by_abs.extract_root(), Ok(-1));
        assert_eq!(by_abs.extract_root(), Ok(3));

        let mut by_len = BinaryHeap::with_comparator(KeyOrder(|s: &String| s.len()));
        by_len.insert("ab".to_string());
        by_len.insert("abcd".to_string());
        by_len.insert("a".to_string());
        assert_eq!(by_len.peek_root().map(String::as_str), Ok("abcd"));
    }

    #[test]
    fn test_collect_and_extend() {
        let mut heap: BinaryHeap<i32> = vec![5, 3, 8].into_iter().collect();
        heap.extend([1, 9]);
        assert!(heap.is_valid());
        assert_eq!(heap.drain_sorted().collect::<Vec<_>>(), vec![1, 3, 5, 8, 9]);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_with_capacity_and_clear() {
        let mut heap = BinaryHeap::with_capacity(16);
        assert!(heap.capacity() >= 16);
        heap.extend(0..10);
        heap.clear();
        assert!(heap.is_empty());
        assert!(heap.capacity() >= 16);
    }

    #[test]
    fn test_debug_lists_level_order() {
        let heap = BinaryHeap::heapify(vec![3, 1, 2], MinOrder);
        assert_eq!(format!("{:?}", heap), "[1, 3, 2]");
    }
}
