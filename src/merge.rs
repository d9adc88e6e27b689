//! K-way merge of sorted sequences
//!
//! A min-heap holds one *head* per source: the source's next unconsumed
//! element together with where it came from. Extracting the root yields the
//! smallest remaining element overall; its successor from the same source (if
//! any) takes its place in the heap. Empty sources are never seeded.
//!
//! Heads with equal values are ordered by source index, so elements that
//! compare equal come out in source order.
//!
//! # Time Complexity
//!
//! O(n log k) for n elements spread over k sources, with O(k) heap space.
//!
//! # Example
//!
//! ```rust
//! use heap_algorithms::merge::{kmerge, merge_k_sorted};
//!
//! let runs = vec![vec![1, 4, 7, 10], vec![2, 5, 8, 11], vec![3, 6, 9, 12]];
//! assert_eq!(merge_k_sorted(&runs), (1..=12).collect::<Vec<_>>());
//!
//! let lazy: Vec<i32> = kmerge(vec![vec![1, 3], vec![], vec![2]]).collect();
//! assert_eq!(lazy, vec![1, 2, 3]);
//! ```

use crate::binary::BinaryHeap;
use crate::traits::{Compare, FnOrder, MaxOrder};
use log::debug;
use std::cmp::Ordering;
use std::iter::FusedIterator;

/// The next unconsumed element of one source
#[derive(Debug, Clone)]
struct HeadEntry<T> {
    value: T,
    source: usize,
    position: usize,
}

/// Puts the smallest head at the root, given an ascending value ordering
#[derive(Debug, Clone)]
struct HeadOrder<C>(C);

impl<T, C: Compare<T>> Compare<HeadEntry<T>> for HeadOrder<C> {
    fn compare(&self, a: &HeadEntry<T>, b: &HeadEntry<T>) -> Ordering {
        self.0
            .compare(&b.value, &a.value)
            .then_with(|| b.source.cmp(&a.source))
    }
}

/// Merges already-sorted sources into one sorted `Vec`
pub fn merge_k_sorted<T, S>(sources: &[S]) -> Vec<T>
where
    T: Ord + Clone,
    S: AsRef<[T]>,
{
    merge_with(sources, MaxOrder)
}

/// Merges sources sorted ascending under `compare` into one sorted `Vec`
pub fn merge_k_sorted_by<T, S, F>(sources: &[S], compare: F) -> Vec<T>
where
    T: Clone,
    S: AsRef<[T]>,
    F: Fn(&T, &T) -> Ordering,
{
    merge_with(sources, FnOrder(compare))
}

fn merge_with<T, S, C>(sources: &[S], cmp: C) -> Vec<T>
where
    T: Clone,
    S: AsRef<[T]>,
    C: Compare<T>,
{
    let total: usize = sources.iter().map(|source| source.as_ref().len()).sum();
    debug!(
        "merge_k_sorted: {} sources, {} elements",
        sources.len(),
        total
    );

    let mut heap = BinaryHeap::with_capacity_and_comparator(sources.len(), HeadOrder(cmp));
    for (source, values) in sources.iter().enumerate() {
        if let Some(first) = values.as_ref().first() {
            heap.insert(HeadEntry {
                value: first.clone(),
                source,
                position: 0,
            });
        }
    }

    let mut merged = Vec::with_capacity(total);
    while let Ok(head) = heap.extract_root() {
        let next = head.position + 1;
        if let Some(value) = sources[head.source].as_ref().get(next) {
            heap.insert(HeadEntry {
                value: value.clone(),
                source: head.source,
                position: next,
            });
        }
        merged.push(head.value);
    }
    merged
}

/// Lazily merges sorted iterators
///
/// Created by [`kmerge`] and [`kmerge_by`]. Only the current head of each
/// source is held in memory.
pub struct KMerge<I: Iterator, C> {
    sources: Vec<I>,
    heap: BinaryHeap<HeadEntry<I::Item>, HeadOrder<C>>,
}

/// Lazily merges iterables that are each sorted ascending
pub fn kmerge<I>(iterables: I) -> KMerge<<I::Item as IntoIterator>::IntoIter, MaxOrder>
where
    I: IntoIterator,
    I::Item: IntoIterator,
    <I::Item as IntoIterator>::Item: Ord,
{
    KMerge::new(iterables, MaxOrder)
}

/// Lazily merges iterables that are each sorted ascending under `compare`
pub fn kmerge_by<I, F>(
    iterables: I,
    compare: F,
) -> KMerge<<I::Item as IntoIterator>::IntoIter, FnOrder<F>>
where
    I: IntoIterator,
    I::Item: IntoIterator,
    F: Fn(&<I::Item as IntoIterator>::Item, &<I::Item as IntoIterator>::Item) -> Ordering,
{
    KMerge::new(iterables, FnOrder(compare))
}

impl<I: Iterator, C: Compare<I::Item>> KMerge<I, C> {
    fn new<S>(iterables: S, cmp: C) -> Self
    where
        S: IntoIterator,
        S::Item: IntoIterator<IntoIter = I, Item = I::Item>,
    {
        let mut sources: Vec<I> = iterables.into_iter().map(IntoIterator::into_iter).collect();
        let mut heap = BinaryHeap::with_capacity_and_comparator(sources.len(), HeadOrder(cmp));
        for (source, iter) in sources.iter_mut().enumerate() {
            if let Some(value) = iter.next() {
                heap.insert(HeadEntry {
                    value,
                    source,
                    position: 0,
                });
            }
        }
        debug!("kmerge: {} of {} sources non-empty", heap.len(), sources.len());
        Self { sources, heap }
    }
}

impl<I: Iterator, C: Compare<I::Item>> Iterator for KMerge<I, C> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let head = self.heap.extract_root().ok()?;
        if let Some(value) = self.sources[head.source].next() {
            self.heap.insert(HeadEntry {
                value,
                source: head.source,
                position: head.position + 1,
            });
        }
        Some(head.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let queued = self.heap.len();
        self.sources
            .iter()
            .map(Iterator::size_hint)
            .fold((queued, Some(queued)), |(low, high), (source_low, source_high)| {
                let high = match (high, source_high) {
                    (Some(a), Some(b)) => a.checked_add(b),
                    _ => None,
                };
                (low.saturating_add(source_low), high)
            })
    }
}

impl<I: FusedIterator, C: Compare<I::Item>> FusedIterator for KMerge<I, C> {}
