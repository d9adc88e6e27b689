//! Common traits for heap data structures
//!
//! This module provides the two seams every structure in this crate is built on:
//!
//! - [`Compare`]: the ordering a heap is parametrised by. A single heap
//!   implementation serves as a min-heap, a max-heap or a heap under any
//!   caller-supplied ordering, depending only on the comparator it carries.
//! - [`Heap`]: the trait-level API shared by the growable
//!   [`BinaryHeap`](crate::binary::BinaryHeap) and the fixed-capacity
//!   [`FixedHeap`](crate::fixed::FixedHeap).
//!
//! Errors for every fallible operation are reported through [`HeapError`].

use std::cmp::Ordering;
use thiserror::Error;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// `extract_root` or `peek_root` was called on a heap with no elements
    #[error("heap is empty")]
    EmptyHeap,
    /// A median was requested before any value was added
    #[error("no data: median requested before any value was added")]
    NoData,
    /// `insert` was called on a fixed-capacity heap that is already full
    #[error("heap capacity of {capacity} elements exceeded")]
    CapacityExceeded {
        /// The fixed capacity of the heap that rejected the insert
        capacity: usize,
    },
}

/// An ordering that decides which of two elements belongs closer to the root.
///
/// `compare(a, b)` returning [`Ordering::Greater`] means `a` has higher
/// priority than `b`. The root of a heap is always an element that no other
/// element outranks.
///
/// # Example
///
/// ```rust
/// use heap_algorithms::traits::{Compare, MaxOrder, MinOrder};
///
/// assert!(MaxOrder.outranks(&5, &3));
/// assert!(MinOrder.outranks(&3, &5));
/// ```
pub trait Compare<T: ?Sized> {
    /// Compares two elements by priority
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns true if `a` must sit above `b` in the heap
    fn outranks(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Greater
    }
}

impl<T: ?Sized, C: Compare<T> + ?Sized> Compare<T> for &C {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (**self).compare(a, b)
    }
}

/// Smallest element first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinOrder;

impl<T: Ord + ?Sized> Compare<T> for MinOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

/// Largest element first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxOrder;

impl<T: Ord + ?Sized> Compare<T> for MaxOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Largest element first under a comparison closure
///
/// The closure follows the convention of [`slice::sort_by`]: it orders its
/// arguments ascending, and the heap keeps the greatest element at the root.
#[derive(Clone, Copy, Default)]
pub struct FnOrder<F>(pub F);

impl<T: ?Sized, F> Compare<T> for FnOrder<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}

/// Largest key first, with the key extracted by a closure
#[derive(Clone, Copy, Default)]
pub struct KeyOrder<F>(pub F);

impl<T: ?Sized, K: Ord, F> Compare<T> for KeyOrder<F>
where
    F: Fn(&T) -> K,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a).cmp(&(self.0)(b))
    }
}

/// The opposite of another ordering
///
/// `Reversed<MaxOrder>` behaves like [`MinOrder`]. Bounded selections use it
/// to keep the *worst* retained element at the root, ready for eviction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Compare<T>> Compare<T> for Reversed<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Base trait for the heaps in this crate
///
/// This trait provides the operations every array-backed heap supports:
/// - `try_insert` adds an element, failing only if the heap has a fixed capacity
/// - `extract_root` removes and returns the highest-priority element
/// - `peek_root` returns the highest-priority element without removing it
///
/// Empty-heap access is an error, never a default value.
///
/// # Example
///
/// ```rust
/// use heap_algorithms::{BinaryHeap, Heap, HeapError};
///
/// fn drain<H: Heap<i32>>(heap: &mut H) -> Vec<i32> {
///     let mut out = Vec::new();
///     while let Ok(value) = heap.extract_root() {
///         out.push(value);
///     }
///     out
/// }
///
/// let mut heap = BinaryHeap::new();
/// heap.try_insert(3).unwrap();
/// heap.try_insert(1).unwrap();
/// heap.try_insert(2).unwrap();
/// assert_eq!(drain(&mut heap), vec![1, 2, 3]);
/// assert_eq!(heap.peek_root(), Err(HeapError::EmptyHeap));
/// ```
pub trait Heap<T> {
    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Errors
    /// Returns `HeapError::CapacityExceeded` if the heap has a fixed capacity
    /// and is full. Growable heaps never fail.
    ///
    /// # Time Complexity
    /// O(log n)
    fn try_insert(&mut self, value: T) -> Result<(), HeapError>;

    /// Returns the root element without removing it
    ///
    /// # Errors
    /// Returns `HeapError::EmptyHeap` if the heap is empty.
    ///
    /// # Time Complexity
    /// O(1)
    fn peek_root(&self) -> Result<&T, HeapError>;

    /// Removes and returns the root element
    ///
    /// # Errors
    /// Returns `HeapError::EmptyHeap` if the heap is empty.
    ///
    /// # Time Complexity
    /// O(log n)
    fn extract_root(&mut self) -> Result<T, HeapError>;
}
