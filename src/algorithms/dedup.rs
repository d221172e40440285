use std::collections::HashSet;

use crate::common::traits::Countable;

/// Returns the distinct values of `values` in order of first occurrence.
///
/// Each value is checked against a seen-set before being appended, so the
/// whole thing is a single O(n) average-time pass. Space is O(k) for the set
/// plus O(k) for the output.
///
/// # Example
/// ```rust
/// use perf_lab::algorithms::dedup::remove_duplicates;
///
/// assert_eq!(remove_duplicates([4, 5, 4, 6, 5, 7]), vec![4, 5, 6, 7]);
/// ```
pub fn remove_duplicates<T, I>(values: I) -> Vec<T>
where
    T: Countable,
    I: IntoIterator<Item = T>,
{
    let mut seen: HashSet<T> = HashSet::new();
    let mut out: Vec<T> = Vec::new();

    for value in values {
        if !seen.contains(&value) {
            out.push(value);
            seen.insert(value);
        }
    }

    out
}

/// Removes duplicates from input that is already sorted.
///
/// Equal values are adjacent in sorted input, so comparing each value with the
/// last one kept is enough. O(n) time and no set.
///
/// Unsorted input is not rejected, but only adjacent repeats are removed.
pub fn remove_duplicates_sorted<T: PartialEq + Copy>(sorted: &[T]) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(sorted.len());
    for value in sorted {
        if out.last() != Some(value) {
            out.push(*value);
        }
    }
    out
}
