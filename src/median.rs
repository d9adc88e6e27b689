//! Running median over a stream
//!
//! Two heaps split the values seen so far at the median:
//!
//! - `lower`: a max-heap holding the smaller half
//! - `upper`: a min-heap holding the larger half
//!
//! After every insertion `lower.len() == upper.len()` or
//! `lower.len() == upper.len() + 1`, and every value in `lower` is at most
//! every value in `upper`. The median is therefore either the root of
//! `lower` (odd count) or the mean of both roots (even count).
//!
//! # Time Complexity
//!
//! | Operation     | Complexity |
//! |---------------|------------|
//! | `add_num`     | O(log n)   |
//! | `find_median` | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use heap_algorithms::median::MedianTracker;
//!
//! let mut tracker = MedianTracker::new();
//! let medians: Vec<f64> = (1..=5)
//!     .map(|value| {
//!         tracker.add_num(value);
//!         tracker.find_median().unwrap()
//!     })
//!     .collect();
//! assert_eq!(medians, vec![1.0, 1.5, 2.0, 2.5, 3.0]);
//! ```

use crate::binary::BinaryHeap;
use crate::traits::{Compare, HeapError};
use log::trace;
use std::cmp::Ordering;

/// A number the median tracker can order and average
///
/// Implemented for every primitive integer and float type. Floats are ordered
/// by [`f64::total_cmp`], so NaN values sort above positive infinity.
pub trait Numeric: Copy {
    /// Total order used to split the stream
    fn total_order(&self, other: &Self) -> Ordering;

    /// Conversion used when averaging; large 64- and 128-bit integers lose precision
    fn to_f64(self) -> f64;
}

macro_rules! impl_numeric_int {
    ($($ty:ty),*) => {
        $(
            impl Numeric for $ty {
                fn total_order(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }

                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_numeric_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Numeric for f32 {
    fn total_order(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }

    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Numeric for f64 {
    fn total_order(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }

    fn to_f64(self) -> f64 {
        self
    }
}

/// Largest value at the root
#[derive(Debug, Clone, Copy, Default)]
struct LowerHalf;

impl<T: Numeric> Compare<T> for LowerHalf {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.total_order(b)
    }
}

/// Smallest value at the root
#[derive(Debug, Clone, Copy, Default)]
struct UpperHalf;

impl<T: Numeric> Compare<T> for UpperHalf {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.total_order(a)
    }
}

/// Tracks the median of every value added so far
#[derive(Debug, Clone)]
pub struct MedianTracker<T: Numeric> {
    lower: BinaryHeap<T, LowerHalf>,
    upper: BinaryHeap<T, UpperHalf>,
}

impl<T: Numeric> MedianTracker<T> {
    /// Creates a tracker with no values
    pub fn new() -> Self {
        Self {
            lower: BinaryHeap::with_comparator(LowerHalf),
            upper: BinaryHeap::with_comparator(UpperHalf),
        }
    }

    /// Returns the number of values added
    pub fn len(&self) -> usize {
        self.lower.len() + self.upper.len()
    }

    /// Returns true if no value has been added
    pub fn is_empty(&self) -> bool {
        self.lower.is_empty()
    }

    /// Number of values at or below the median
    pub fn lower_half_len(&self) -> usize {
        self.lower.len()
    }

    /// Number of values above the median
    pub fn upper_half_len(&self) -> usize {
        self.upper.len()
    }

    /// Adds a value to the stream
    pub fn add_num(&mut self, value: T) {
        match self.lower.peek_root() {
            Ok(top) if value.total_order(top) == Ordering::Greater => self.upper.insert(value),
            _ => self.lower.insert(value),
        }
        self.rebalance();
    }

    fn rebalance(&mut self) {
        if self.lower.len() > self.upper.len() + 1 {
            if let Ok(moved) = self.lower.extract_root() {
                self.upper.insert(moved);
                trace!("median: moved lower root to upper half");
            }
        } else if self.upper.len() > self.lower.len() {
            if let Ok(moved) = self.upper.extract_root() {
                self.lower.insert(moved);
                trace!("median: moved upper root to lower half");
            }
        }
    }

    /// Returns the median of every value added so far
    ///
    /// For an even count this is the mean of the two middle values, computed
    /// in `f64` so integer inputs cannot overflow. Integers wider than the
    /// 53-bit `f64` mantissa are rounded before averaging, so medians of large
    /// `i64`, `u64` or `i128` values are approximate.
    ///
    /// # Errors
    /// Returns `HeapError::NoData` if no value has been added.
    pub fn find_median(&self) -> Result<f64, HeapError> {
        let low = self.lower.peek_root().map_err(|_| HeapError::NoData)?;
        if self.lower.len() > self.upper.len() {
            return Ok(low.to_f64());
        }
        let high = self.upper.peek_root().map_err(|_| HeapError::NoData)?;
        Ok((low.to_f64() + high.to_f64()) / 2.0)
    }

    /// Removes every value
    pub fn clear(&mut self) {
        self.lower.clear();
        self.upper.clear();
    }
}

impl<T: Numeric> Default for MedianTracker<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Numeric> Extend<T> for MedianTracker<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add_num(value);
        }
    }
}

impl<T: Numeric> FromIterator<T> for MedianTracker<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tracker = Self::new();
        tracker.extend(iter);
        tracker
    }
}
