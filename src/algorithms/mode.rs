// https://en.wikipedia.org/wiki/Mode_(statistics)

use std::collections::HashMap;

use crate::common::traits::Countable;

/// Builds the value -> occurrence count mapping for `values`.
///
/// O(n) time, O(k) space where k is the number of distinct values.
pub fn frequencies<T, I>(values: I) -> HashMap<T, usize>
where
    T: Countable,
    I: IntoIterator<Item = T>,
{
    let mut counts: HashMap<T, usize> = HashMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}

/// Returns one of the values that occurs most often in `values`.
///
/// Returns `None` if `values` is empty. When several values share the highest
/// count, any one of them may be returned; callers should not depend on which.
///
/// Runs in O(n) time: a single counting pass, then a scan over the k distinct
/// counts to pick the maximum. Space is O(k).
///
/// # Example
/// ```rust
/// use perf_lab::algorithms::mode::most_frequent;
///
/// assert_eq!(most_frequent([1, 3, 2, 3, 4, 1, 3]), Some(3));
/// assert_eq!(most_frequent(Vec::<i32>::new()), None);
/// ```
pub fn most_frequent<T, I>(values: I) -> Option<T>
where
    T: Countable,
    I: IntoIterator<Item = T>,
{
    frequencies(values)
        .into_iter()
        .max_by_key(|(_, count)| *count)
        .map(|(value, _)| value)
}

/// Returns every value tied for the highest count, sorted ascending.
///
/// Returns an empty vector if `values` is empty.
pub fn most_frequent_all<T, I>(values: I) -> Vec<T>
where
    T: Countable + Ord,
    I: IntoIterator<Item = T>,
{
    let counts = frequencies(values);
    let max_count = match counts.values().max() {
        Some(c) => *c,
        None => return Vec::new(),
    };

    let mut modes: Vec<T> = counts
        .into_iter()
        .filter(|(_, count)| *count == max_count)
        .map(|(value, _)| value)
        .collect();
    modes.sort_unstable();
    modes
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn count_of(values: &[i64], target: i64) -> usize {
        values.iter().filter(|v| **v == target).count()
    }

    #[test]
    fn empty_input_returns_none() {
        assert_eq!(most_frequent(Vec::<i64>::new()), None);
        assert!(most_frequent_all(Vec::<i64>::new()).is_empty());
    }

    #[test]
    fn single_value() {
        assert_eq!(most_frequent([7]), Some(7));
    }

    #[test]
    fn clear_winner() {
        assert_eq!(most_frequent([1, 3, 2, 3, 4, 1, 3]), Some(3));
        assert_eq!(most_frequent_all([1, 3, 2, 3, 4, 1, 3]), vec![3]);
    }

    #[test]
    fn tie_returns_member_of_tie_set() {
        let input = [1, 2, 2, 3, 3];
        let ties = most_frequent_all(input);
        assert_eq!(ties, vec![2, 3]);

        let got = most_frequent(input).unwrap();
        assert!(ties.contains(&got), "got {got}, expected one of {ties:?}");
    }

    #[test]
    fn frequencies_counts_every_value() {
        let counts = frequencies([4, 4, -1, 4, -1, 9]);
        assert_eq!(counts.len(), 3);
        assert_eq!(counts[&4], 3);
        assert_eq!(counts[&-1], 2);
        assert_eq!(counts[&9], 1);
    }

    #[test]
    fn result_frequency_is_maximal_on_random_input() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let len = rng.gen_range(1..60);
            let values: Vec<i64> = (0..len).map(|_| rng.gen_range(-5..5)).collect();

            let mode = most_frequent(values.iter().copied()).unwrap();
            let mode_count = count_of(&values, mode);
            for v in &values {
                assert!(mode_count >= count_of(&values, *v), "values: {values:?}");
            }
        }
    }
}
