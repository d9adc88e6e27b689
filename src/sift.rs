//! Sift primitives over slices
//!
//! Every heap in this crate stores a complete binary tree in a contiguous
//! slice. Parent and child positions are computed, never stored:
//!
//! ```text
//!           0
//!      1         2
//!    3   4     5   6
//!   7 8 9 10 11 12 13 14
//! ```
//!
//! - `parent(i) = (i - 1) / 2`
//! - `left(i)   = 2i + 1`
//! - `right(i)  = 2i + 2`
//!
//! The functions here are shared by [`BinaryHeap`](crate::binary::BinaryHeap),
//! [`FixedHeap`](crate::fixed::FixedHeap) and [`heap_sort`](crate::sort::heap_sort),
//! so the heap logic exists exactly once regardless of ordering.

use crate::traits::Compare;

/// Index of the parent of `index`. `index` must be non-zero.
#[inline]
pub const fn parent(index: usize) -> usize {
    (index - 1) / 2
}

/// Index of the left child of `index`
#[inline]
pub const fn left(index: usize) -> usize {
    2 * index + 1
}

/// Index of the right child of `index`
#[inline]
pub const fn right(index: usize) -> usize {
    2 * index + 2
}

/// Moves the element at `index` towards the root until its parent outranks
/// or equals it.
pub fn sift_up<T, C: Compare<T>>(data: &mut [T], mut index: usize, cmp: &C) {
    while index > 0 {
        let parent = parent(index);
        if cmp.outranks(&data[index], &data[parent]) {
            data.swap(index, parent);
            index = parent;
        } else {
            break;
        }
    }
}

/// Moves the element at `index` towards the leaves until no child outranks it.
///
/// When both children outrank the element and are equal to each other, the
/// left child is chosen.
pub fn sift_down<T, C: Compare<T>>(data: &mut [T], mut index: usize, cmp: &C) {
    let len = data.len();
    loop {
        let left = left(index);
        let right = right(index);
        let mut best = index;

        if left < len && cmp.outranks(&data[left], &data[best]) {
            best = left;
        }
        if right < len && cmp.outranks(&data[right], &data[best]) {
            best = right;
        }

        if best == index {
            break;
        }
        data.swap(index, best);
        index = best;
    }
}

/// Rearranges `data` into a heap in place.
///
/// Sifts down every non-leaf, from the last one (`len / 2 - 1`) back to the
/// root. Each sift is bounded by the height of its subtree, so the total work
/// is O(n) and at most `2 * (n - 1)` comparisons.
pub fn build_heap<T, C: Compare<T>>(data: &mut [T], cmp: &C) {
    let len = data.len();
    if len < 2 {
        return;
    }
    for index in (0..len / 2).rev() {
        sift_down(data, index, cmp);
    }
}

/// Returns true if every element of `data` is outranked by or equal to its parent
pub fn is_heap<T, C: Compare<T>>(data: &[T], cmp: &C) -> bool {
    (1..data.len()).all(|index| !cmp.outranks(&data[index], &data[parent(index)]))
}
