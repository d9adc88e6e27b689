//! End-to-end tests for the algorithms built on the binary heap
//!
//! Each test pins down a concrete input/output pair so that regressions in
//! ordering, tie-breaking or edge-case handling show up as exact mismatches.

use heap_algorithms::median::MedianTracker;
use heap_algorithms::merge::{kmerge, kmerge_by, merge_k_sorted, merge_k_sorted_by};
use heap_algorithms::select::{kth_smallest, top_k, top_k_by, top_k_frequent, TopK};
use heap_algorithms::sort::{heap_sort, heap_sort_by, heap_sort_by_key};
use heap_algorithms::traits::{KeyOrder, MinOrder};
use heap_algorithms::{BinaryHeap, HeapError};

// ============================================================================
// Binary heap
// ============================================================================

#[test]
fn test_heapify_root_and_extraction_sequence() {
    let mut heap = BinaryHeap::heapify(vec![9, 4, 7, 1, -2, 6, 5], MinOrder);
    assert_eq!(heap.peek_root(), Ok(&-2));

    let mut extracted = Vec::new();
    while let Ok(value) = heap.extract_root() {
        extracted.push(value);
    }
    assert_eq!(extracted, vec![-2, 1, 4, 5, 6, 7, 9]);
}

#[test]
fn test_empty_structures_report_errors() {
    let mut heap: BinaryHeap<u64> = BinaryHeap::new();
    assert_eq!(heap.peek_root(), Err(HeapError::EmptyHeap));
    assert_eq!(heap.extract_root(), Err(HeapError::EmptyHeap));

    let tracker: MedianTracker<u64> = MedianTracker::new();
    assert_eq!(tracker.find_median(), Err(HeapError::NoData));
}

#[test]
fn test_heap_of_records_by_key() {
    #[derive(Debug, Clone, PartialEq)]
    struct Job {
        name: &'static str,
        priority: u8,
    }

    let jobs = vec![
        Job { name: "backup", priority: 2 },
        Job { name: "deploy", priority: 9 },
        Job { name: "lint", priority: 5 },
    ];
    let mut heap = BinaryHeap::heapify(jobs, KeyOrder(|job: &Job| job.priority));
    assert_eq!(heap.extract_root().map(|job| job.name), Ok("deploy"));
    assert_eq!(heap.extract_root().map(|job| job.name), Ok("lint"));
    assert_eq!(heap.extract_root().map(|job| job.name), Ok("backup"));
}

// ============================================================================
// Heap sort
// ============================================================================

#[test]
fn test_heap_sort_preserves_multiset() {
    let original = vec![5, 3, 5, 1, 3, 5, 0, -7, 12, 3];
    let mut values = original.clone();
    heap_sort(&mut values, true);

    let mut expected = original;
    expected.sort();
    assert_eq!(values, expected);
    assert_eq!(values.len(), 10);
}

#[test]
fn test_heap_sort_is_not_stable() {
    // Three records share the key 1; heap sort scrambles their input order
    let mut records = vec![(1, "first"), (1, "second"), (1, "third"), (0, "zero")];
    heap_sort_by_key(&mut records, |record| record.0);

    assert_eq!(records[0], (0, "zero"));
    let tied: Vec<&str> = records[1..].iter().map(|record| record.1).collect();
    assert_ne!(tied, vec!["first", "second", "third"]);
}

#[test]
fn test_heap_sort_by_descending_closure() {
    let mut values = vec![2.5f64, -1.0, 9.75, 0.0];
    heap_sort_by(&mut values, |a, b| b.total_cmp(a));
    assert_eq!(values, vec![9.75, 2.5, 0.0, -1.0]);
}

// ============================================================================
// Top-K
// ============================================================================

#[test]
fn test_top_three_largest() {
    let mut result = top_k(vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5], 3, true);
    result.sort();
    assert_eq!(result, vec![5, 6, 9]);
}

#[test]
fn test_top_k_edge_cases() {
    assert!(top_k(Vec::<i32>::new(), 3, true).is_empty());
    assert!(top_k(vec![1, 2, 3], 0, false).is_empty());

    let mut everything = top_k(vec![3, 1, 2], 10, false);
    everything.sort();
    assert_eq!(everything, vec![1, 2, 3]);
}

#[test]
fn test_top_k_from_borrowed_values() {
    let values = [10, 30, 20];
    let mut result = top_k(values.iter(), 2, true);
    result.sort();
    assert_eq!(result, vec![&20, &30]);
}

#[test]
fn test_top_k_frequent_words() {
    let text = "the cat and the dog and the bird";
    let words = text.split_whitespace();
    assert_eq!(top_k_frequent(words, 2), vec!["the", "and"]);
}

#[test]
fn test_top_k_frequent_boundary_tie() {
    // 2 and 5 both occur twice and compete for the second slot
    let values = vec![5, 2, 8, 8, 8, 2, 5];
    assert_eq!(top_k_frequent(values, 2), vec![8, 2]);
}

#[test]
fn test_top_k_by_and_streaming_selector() {
    let closest_to_zero = top_k_by(vec![-8, 3, -1, 7, 2], 2, |a: &i32, b: &i32| {
        b.abs().cmp(&a.abs())
    });
    assert_eq!(closest_to_zero, vec![-1, 2]);

    let mut selector = TopK::smallest(2);
    for value in [40, 10, 30, 20] {
        selector.push(value);
    }
    assert_eq!(selector.threshold(), Some(&20));
    assert_eq!(selector.k(), 2);
    assert_eq!(selector.into_sorted_vec(), vec![10, 20]);

    assert_eq!(kth_smallest(vec![9, 1, 8, 2], 3), Some(8));
}

// ============================================================================
// K-way merge
// ============================================================================

#[test]
fn test_merge_three_interleaved_runs() {
    let runs = vec![vec![1, 4, 7, 10], vec![2, 5, 8, 11], vec![3, 6, 9, 12]];
    assert_eq!(
        merge_k_sorted(&runs),
        vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]
    );
}

#[test]
fn test_merge_with_empty_runs() {
    let runs: Vec<Vec<i32>> = vec![vec![], vec![], vec![]];
    assert!(merge_k_sorted(&runs).is_empty());

    let runs = vec![vec![], vec![4], vec![], vec![1, 9]];
    assert_eq!(merge_k_sorted(&runs), vec![1, 4, 9]);
}

#[test]
fn test_merge_strings_by_length() {
    let runs = vec![vec!["a", "ccc"], vec!["bb", "dddd"]];
    let merged = merge_k_sorted_by(&runs, |a: &&str, b: &&str| a.len().cmp(&b.len()));
    assert_eq!(merged, vec!["a", "bb", "ccc", "dddd"]);
}

#[test]
fn test_lazy_merge_over_iterators() {
    let evens = (0..10).step_by(2);
    let odds = (1..10).step_by(2);
    let merged: Vec<i32> = kmerge(vec![evens, odds]).collect();
    assert_eq!(merged, (0..10).collect::<Vec<_>>());

    let descending: Vec<i32> =
        kmerge_by(vec![vec![9, 5, 1], vec![6, 2]], |a: &i32, b: &i32| b.cmp(a)).collect();
    assert_eq!(descending, vec![9, 6, 5, 2, 1]);
}

// ============================================================================
// Running median
// ============================================================================

#[test]
fn test_running_median_one_to_five() {
    let mut tracker = MedianTracker::new();
    let mut medians = Vec::new();
    for value in 1..=5 {
        tracker.add_num(value);
        medians.push(tracker.find_median().unwrap());
    }
    assert_eq!(medians, vec![1.0, 1.5, 2.0, 2.5, 3.0]);
}

#[test]
fn test_running_median_unsorted_stream() {
    let mut tracker = MedianTracker::new();
    let stream = [41, 35, 62, 5, 97, 108];
    let expected = [41.0, 38.0, 41.0, 38.0, 41.0, 51.5];
    for (value, median) in stream.into_iter().zip(expected) {
        tracker.add_num(value);
        assert_eq!(tracker.find_median(), Ok(median));
    }
    assert_eq!(tracker.len(), 6);
    assert_eq!(tracker.lower_half_len(), 3);
    assert_eq!(tracker.upper_half_len(), 3);
}
