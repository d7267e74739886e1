//! Stable insertion sort over roster snapshots.
//!
//! This module provides the pure sorting function behind the "Ascending" and
//! "Descending" views. Insertion sort is used deliberately: equal scores
//! compare equal and are never shifted past each other, so the sort is stable
//! without any extra bookkeeping, and the quadratic worst case is part of the
//! demonstrated behavior rather than something to optimize away.

use std::cmp::Ordering;

use crate::core::{SortDirection, Student};

/// Sorts a roster snapshot by score in the given direction.
///
/// Pure function - consumes the working copy it was handed (callers pass a
/// `Roster::snapshot`) and returns it sorted. The store itself is never
/// touched.
///
/// Ties keep their original relative order. Complexity is O(n²) comparisons
/// and shifts in the worst case, O(n) when the input is already sorted.
pub fn insertion_sort(mut records: Vec<Student>, direction: SortDirection) -> Vec<Student> {
    debug_assert!(
        records.iter().all(|s| s.score.is_finite()),
        "non-finite score reached the sort engine"
    );

    for i in 1..records.len() {
        let key = records[i].clone();
        let mut j = i;
        while j > 0 && compare(&records[j - 1], &key, direction) == Ordering::Greater {
            records[j] = records[j - 1].clone();
            j -= 1;
        }
        records[j] = key;
    }
    records
}

/// Orders two records by score, reversed for descending sorts.
///
/// Equal scores yield `Equal`, which is what makes the sort stable: the shift
/// loop only moves records that compare strictly greater than the key.
fn compare(a: &Student, b: &Student, direction: SortDirection) -> Ordering {
    let ord = a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal);
    if direction.is_ascending() {
        ord
    } else {
        ord.reverse()
    }
}
