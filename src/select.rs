//! Top-K selection with a bounded heap
//!
//! Finding the K best elements of a stream does not require sorting it. A
//! heap bounded to K elements keeps the *worst* retained element at its root:
//! every new element is inserted, and whenever the heap grows past K its root
//! is evicted. What remains at the end is exactly the K best elements.
//!
//! | Query         | Retained by      |
//! |---------------|------------------|
//! | K largest     | min-heap         |
//! | K smallest    | max-heap         |
//! | K most common | min-heap on count|
//!
//! # Time Complexity
//!
//! O(n log k) time and O(k) space for n input elements.
//!
//! # Example
//!
//! ```rust
//! use heap_algorithms::select::{top_k, top_k_frequent};
//!
//! let mut largest = top_k(vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5], 3, true);
//! largest.sort();
//! assert_eq!(largest, vec![5, 6, 9]);
//!
//! assert_eq!(top_k_frequent(vec!["a", "b", "a", "c", "b", "a"], 2), vec!["a", "b"]);
//! ```

use crate::binary::BinaryHeap;
use crate::traits::{Compare, FnOrder, MaxOrder, MinOrder, Reversed};
use log::debug;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::hash::Hash;

/// A streaming selector that retains the `k` highest-priority elements under `C`
///
/// # Example
///
/// ```rust
/// use heap_algorithms::select::TopK;
///
/// let mut smallest = TopK::smallest(2);
/// smallest.extend([8, 3, 5, 1, 9]);
/// assert_eq!(smallest.into_sorted_vec(), vec![1, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct TopK<T, C> {
    /// Root is the worst retained element
    heap: BinaryHeap<T, Reversed<C>>,
    k: usize,
}

impl<T: Ord> TopK<T, MaxOrder> {
    /// Retains the `k` largest elements
    pub fn largest(k: usize) -> Self {
        Self::with_comparator(k, MaxOrder)
    }
}

impl<T: Ord> TopK<T, MinOrder> {
    /// Retains the `k` smallest elements
    pub fn smallest(k: usize) -> Self {
        Self::with_comparator(k, MinOrder)
    }
}

impl<T, C: Compare<T>> TopK<T, C> {
    /// Retains the `k` elements that `cmp` ranks highest
    pub fn with_comparator(k: usize, cmp: C) -> Self {
        Self::with_size_hint(k, 0, cmp)
    }

    /// Preallocates for the smaller of `k` and the expected input size
    fn with_size_hint(k: usize, hint: usize, cmp: C) -> Self {
        let capacity = k.min(hint).saturating_add(1);
        Self {
            heap: BinaryHeap::with_capacity_and_comparator(capacity, Reversed(cmp)),
            k,
        }
    }

    /// The number of elements this selector retains at most
    pub fn k(&self) -> usize {
        self.k
    }

    /// The number of elements currently retained
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if nothing is retained
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Offers an element to the selector
    ///
    /// Returns the element that fell out of the selection, which is the worst
    /// of the k + 1 candidates once `k` elements are retained, or `None` while
    /// the selector is still filling up. With `k == 0` the offered element is
    /// handed straight back.
    pub fn push(&mut self, value: T) -> Option<T> {
        if self.k == 0 {
            return Some(value);
        }
        self.heap.insert(value);
        if self.heap.len() > self.k {
            self.heap.extract_root().ok()
        } else {
            None
        }
    }

    /// The worst of the retained elements, which is the k-th best seen so far
    /// once `len() == k()`
    pub fn threshold(&self) -> Option<&T> {
        self.heap.peek_root().ok()
    }

    /// Consumes the selector, returning the retained elements in no particular order
    pub fn into_vec(self) -> Vec<T> {
        self.heap.into_vec()
    }

    /// Consumes the selector, returning the retained elements best first
    pub fn into_sorted_vec(self) -> Vec<T> {
        let mut sorted = self.heap.into_sorted_vec();
        sorted.reverse();
        sorted
    }
}

impl<T, C: Compare<T>> Extend<T> for TopK<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

/// Returns the `k` largest (or, with `select_largest` false, the `k` smallest)
/// elements of `values` in no particular order
///
/// Returns every element when `k` is at least the input length, and nothing
/// when `k` is zero.
pub fn top_k<T, I>(values: I, k: usize, select_largest: bool) -> Vec<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    if select_largest {
        select(values, k, MaxOrder).into_vec()
    } else {
        select(values, k, MinOrder).into_vec()
    }
}

/// Returns the `k` greatest elements under `compare`, greatest first
pub fn top_k_by<T, I, F>(values: I, k: usize, compare: F) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T, &T) -> Ordering,
{
    select(values, k, FnOrder(compare)).into_sorted_vec()
}

/// Returns the `k` most frequent values, most frequent first
///
/// Values that occur equally often are ranked by value, smallest first, so
/// the result does not depend on hash iteration order.
pub fn top_k_frequent<T, I>(values: I, k: usize) -> Vec<T>
where
    T: Hash + Eq + Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts: FxHashMap<T, usize> = FxHashMap::default();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    debug!(
        "top_k_frequent: {} distinct values, k = {}",
        counts.len(),
        k
    );

    let by_count = FnOrder(|a: &(usize, T), b: &(usize, T)| {
        a.0.cmp(&b.0).then_with(|| b.1.cmp(&a.1))
    });
    select(counts.into_iter().map(|(value, count)| (count, value)), k, by_count)
        .into_sorted_vec()
        .into_iter()
        .map(|(_, value)| value)
        .collect()
}

/// Returns the k-th largest element (1-based), or `None` if `k` is zero or
/// exceeds the number of elements
pub fn kth_largest<T, I>(values: I, k: usize) -> Option<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    kth(select(values, k, MaxOrder))
}

/// Returns the k-th smallest element (1-based), or `None` if `k` is zero or
/// exceeds the number of elements
pub fn kth_smallest<T, I>(values: I, k: usize) -> Option<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    kth(select(values, k, MinOrder))
}

fn select<T, I, C>(values: I, k: usize, cmp: C) -> TopK<T, C>
where
    I: IntoIterator<Item = T>,
    C: Compare<T>,
{
    let values = values.into_iter();
    let mut selector = TopK::with_size_hint(k, values.size_hint().0, cmp);
    selector.extend(values);
    selector
}

fn kth<T, C: Compare<T>>(mut selector: TopK<T, C>) -> Option<T> {
    if selector.k == 0 || selector.len() < selector.k {
        return None;
    }
    selector.heap.extract_root().ok()
}
