//! Classic comparison sorts
//!
//! Every function takes a slice and returns a new sorted `Vec`, leaving the
//! input untouched.
//!
//! | Algorithm        | Time (average) | Stable |
//! |------------------|----------------|--------|
//! | `bubble_sort`    | O(n^2)         | yes    |
//! | `selection_sort` | O(n^2)         | no     |
//! | `insertion_sort` | O(n^2)         | yes    |
//! | `merge_sort`     | O(n log n)     | yes    |
//! | `quick_sort`     | O(n log n)     | no     |
//!
//! Quick sort partitions three ways and recurses into the smaller side only,
//! so heavily duplicated input neither degrades it nor deepens the stack.
//!
//! # Example
//!
//! ```rust
//! use classic_algos::sorting::{merge_sort, quick_sort};
//!
//! let data = [5, 2, 9, 1, 5, 6];
//! assert_eq!(merge_sort(&data), vec![1, 2, 5, 5, 6, 9]);
//! assert_eq!(quick_sort(&data), merge_sort(&data));
//! ```

use std::cmp::Ordering;
use std::mem;

use rand::Rng;

/// Ranges at most this long are finished with insertion sort in [`quick_sort`]
pub const QUICK_SORT_THRESHOLD: usize = 10;

/// Bubble sort that stops after a pass without swaps
pub fn bubble_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    let mut a = items.to_vec();
    let n = a.len();

    for i in 0..n {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            if a[j] > a[j + 1] {
                a.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
    a
}

pub fn selection_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    let mut a = items.to_vec();
    let n = a.len();

    for i in 0..n {
        let mut min_idx = i;
        for j in (i + 1)..n {
            if a[j] < a[min_idx] {
                min_idx = j;
            }
        }
        a.swap(i, min_idx);
    }
    a
}

pub fn insertion_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    let mut a = items.to_vec();
    insertion_sort_in_place(&mut a);
    a
}

/// Shift each element left past every larger predecessor
fn insertion_sort_in_place<T: Ord>(a: &mut [T]) {
    for i in 1..a.len() {
        let mut j = i;
        while j > 0 && a[j] < a[j - 1] {
            a.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Top-down merge sort
pub fn merge_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    if items.len() <= 1 {
        return items.to_vec();
    }

    let mid = items.len() / 2;
    let left = merge_sort(&items[..mid]);
    let right = merge_sort(&items[mid..]);
    merge(left, right)
}

/// Merge two sorted vectors; ties take the left element first
pub fn merge<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut result = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        let next = if l <= r { left.next() } else { right.next() };
        result.extend(next);
    }
    result.extend(left);
    result.extend(right);
    result
}

/// Quick sort with a random pivot and the default insertion-sort cutoff
pub fn quick_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    quick_sort_with(items, QUICK_SORT_THRESHOLD, &mut rand::rng())
}

/// Quick sort with an explicit cutoff and random source
///
/// Ranges of at most `threshold` elements are sorted by insertion sort;
/// larger ranges are split three ways around a uniformly chosen pivot, so a
/// run of keys equal to the pivot is settled in a single pass. Only the
/// smaller side is sorted recursively, which bounds the stack depth by
/// O(log n) whatever the input.
pub fn quick_sort_with<T, R>(items: &[T], threshold: usize, rng: &mut R) -> Vec<T>
where
    T: Ord + Clone,
    R: Rng,
{
    let mut a = items.to_vec();
    quick_sort_slice(&mut a, threshold, rng);
    a
}

fn quick_sort_slice<T: Ord, R: Rng>(mut a: &mut [T], threshold: usize, rng: &mut R) {
    loop {
        if a.len() <= 1 {
            return;
        }
        if a.len() <= threshold {
            insertion_sort_in_place(a);
            return;
        }

        let (lt, gt) = partition(a, rng);
        let (lower, rest) = mem::take(&mut a).split_at_mut(lt);
        let upper = &mut rest[gt - lt..];

        if lower.len() < upper.len() {
            quick_sort_slice(lower, threshold, rng);
            a = upper;
        } else {
            quick_sort_slice(upper, threshold, rng);
            a = lower;
        }
    }
}

/// Three-way partition around a random pivot
///
/// Returns `(lt, gt)` such that `a[..lt]` is less than the pivot,
/// `a[lt..gt]` equals it and `a[gt..]` is greater.
fn partition<T: Ord, R: Rng>(a: &mut [T], rng: &mut R) -> (usize, usize) {
    let pivot_index = rng.random_range(0..a.len());
    a.swap(0, pivot_index);

    // a[lt] always holds a copy of the pivot value
    let (mut lt, mut i, mut gt) = (0, 1, a.len());
    while i < gt {
        match a[i].cmp(&a[lt]) {
            Ordering::Less => {
                a.swap(lt, i);
                lt += 1;
                i += 1;
            }
            Ordering::Greater => {
                gt -= 1;
                a.swap(i, gt);
            }
            Ordering::Equal => i += 1,
        }
    }
    (lt, gt)
}
