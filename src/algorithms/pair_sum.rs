use std::collections::HashSet;

use num_traits::{CheckedAdd, CheckedSub};

use crate::common::traits::PairSumValue;
use crate::error::PairSumError;

/// Orders a pair as `(min, max)`.
fn ordered_pair<T: Ord>(a: T, b: T) -> (T, T) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Returns every unordered pair of values in `nums` that sums to `target`,
/// each reported as `(min, max)`.
///
/// Single pass over `nums`: for each `x`, if `target - x` has already been
/// seen, the pair is emitted, then `x` is added to the seen-set.
/// O(n) average time, O(n) space.
///
/// `nums` must not contain duplicate values. Duplicates are neither rejected
/// nor removed here, and the result for such input should not be relied on;
/// use [find_pairs_checked] to have them rejected. When `target - x` falls
/// outside the range of `T`, `x` can't be part of a pair and is skipped.
///
/// # Example
/// ```rust
/// use std::collections::HashSet;
/// use perf_lab::algorithms::pair_sum::find_pairs;
///
/// let pairs = find_pairs(&[1, 2, 3, 4], 5);
/// assert_eq!(pairs, HashSet::from([(1, 4), (2, 3)]));
/// ```
pub fn find_pairs<T: PairSumValue>(nums: &[T], target: T) -> HashSet<(T, T)> {
    let mut seen: HashSet<T> = HashSet::with_capacity(nums.len());
    let mut pairs: HashSet<(T, T)> = HashSet::new();

    for &x in nums {
        // An out-of-range complement can't be in the input
        if let Some(complement) = target.checked_sub(&x) {
            if seen.contains(&complement) {
                pairs.insert(ordered_pair(complement, x));
            }
        }
        seen.insert(x);
    }

    pairs
}

/// Same as [find_pairs], but returns an error on the first value that
/// appears more than once instead of producing an unspecified result.
pub fn find_pairs_checked<T>(
    nums: &[T],
    target: T,
) -> Result<HashSet<(T, T)>, PairSumError<T>>
where
    T: PairSumValue + std::fmt::Debug,
{
    let mut seen: HashSet<T> = HashSet::with_capacity(nums.len());
    let mut pairs: HashSet<(T, T)> = HashSet::new();

    for &x in nums {
        if seen.contains(&x) {
            return Err(PairSumError::DuplicateValue { value: x });
        }

        if let Some(complement) = target.checked_sub(&x) {
            if seen.contains(&complement) {
                pairs.insert(ordered_pair(complement, x));
            }
        }
        seen.insert(x);
    }

    Ok(pairs)
}

/// Exhaustive baseline for [find_pairs]: checks every index pair `i < j`.
///
/// O(n^2) time, no extra space besides the output. Kept alongside the
/// hash-set version so the two can be compared; on distinct input both
/// return the same set.
pub fn find_pairs_naive<T: PairSumValue>(nums: &[T], target: T) -> HashSet<(T, T)> {
    let mut pairs: HashSet<(T, T)> = HashSet::new();

    for i in 0..nums.len() {
        for j in (i + 1)..nums.len() {
            if nums[i].checked_add(&nums[j]) == Some(target) {
                pairs.insert(ordered_pair(nums[i], nums[j]));
            }
        }
    }

    pairs
}

/// Two-pointer variant over a sorted copy of `nums`.
///
/// O(n log n) time for the sort, then a single O(n) sweep inward from both
/// ends. Needs no seen-set. Same distinct-values precondition as [find_pairs].
pub fn find_pairs_two_pointer<T: PairSumValue>(nums: &[T], target: T) -> HashSet<(T, T)> {
    let mut pairs: HashSet<(T, T)> = HashSet::new();
    if nums.len() < 2 {
        return pairs;
    }

    let mut sorted = nums.to_vec();
    sorted.sort_unstable();

    let mut lo = 0;
    let mut hi = sorted.len() - 1;
    while lo < hi {
        let sum = match sorted[lo].checked_add(&sorted[hi]) {
            Some(sum) => sum,
            // Only same-signed values overflow: both positive means the sum
            // is too large, both negative means it is too small
            None if sorted[hi] > T::zero() => {
                hi -= 1;
                continue;
            }
            None => {
                lo += 1;
                continue;
            }
        };

        if sum == target {
            pairs.insert((sorted[lo], sorted[hi]));
            lo += 1;
            hi -= 1;
        } else if sum < target {
            lo += 1;
        } else {
            hi -= 1;
        }
    }

    pairs
}
