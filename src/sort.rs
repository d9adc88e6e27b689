//! In-place heap sort
//!
//! The slice is first rearranged into a heap in O(n). The root is then
//! repeatedly swapped with the last unsorted element and the shrunken heap is
//! repaired by sifting down, n - 1 times in total.
//!
//! Ascending order uses a max-heap and descending order a min-heap; both go
//! through the same routine with a different [`Compare`] ordering.
//!
//! # Guarantees
//!
//! - O(n log n) time in every case
//! - O(1) auxiliary space (sift-down is iterative)
//! - **Not stable**: elements that compare equal may change their relative
//!   order. Use [`slice::sort`] when stability matters.
//!
//! # Example
//!
//! ```rust
//! use heap_algorithms::sort::heap_sort;
//!
//! let mut values = vec![5, -1, 3, 3, 0];
//! heap_sort(&mut values, true);
//! assert_eq!(values, vec![-1, 0, 3, 3, 5]);
//!
//! heap_sort(&mut values, false);
//! assert_eq!(values, vec![5, 3, 3, 0, -1]);
//! ```

use crate::sift;
use crate::traits::{Compare, FnOrder, KeyOrder, MaxOrder, MinOrder};
use std::cmp::Ordering;

/// Sorts `values` in place, ascending if `ascending` is true and descending otherwise
pub fn heap_sort<T: Ord>(values: &mut [T], ascending: bool) {
    if ascending {
        sort_with(values, &MaxOrder);
    } else {
        sort_with(values, &MinOrder);
    }
}

/// Sorts `values` in place, ascending under `compare`
pub fn heap_sort_by<T, F>(values: &mut [T], compare: F)
where
    F: Fn(&T, &T) -> Ordering,
{
    sort_with(values, &FnOrder(compare));
}

/// Sorts `values` in place, ascending by the key `key` extracts
pub fn heap_sort_by_key<T, K, F>(values: &mut [T], key: F)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    sort_with(values, &KeyOrder(key));
}

/// Leaves the elements that `cmp` ranks highest at the end of the slice
fn sort_with<T, C: Compare<T>>(values: &mut [T], cmp: &C) {
    sift::build_heap(values, cmp);
    for end in (1..values.len()).rev() {
        // values[..=end] is a heap, values[end + 1..] is sorted
        values.swap(0, end);
        sift::sift_down(&mut values[..end], 0, cmp);
    }
}
