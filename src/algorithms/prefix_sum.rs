// https://en.wikipedia.org/wiki/Prefix_sum

use crate::common::traits::Summable;

/// Returns the running totals of `values`: element `i` of the output is the
/// sum of input elements `0..=i`.
///
/// One accumulator, one pass. O(n) time, O(n) for the output. Floats use
/// plain accumulation, so the usual rounding applies.
///
/// # Example
/// ```rust
/// use perf_lab::algorithms::prefix_sum::running_total;
///
/// assert_eq!(running_total([1, 2, 3, 4]), vec![1, 3, 6, 10]);
/// assert_eq!(running_total([0.5, 0.5]), vec![0.5, 1.0]);
/// ```
pub fn running_total<T, I>(values: I) -> Vec<T>
where
    T: Summable,
    I: IntoIterator<Item = T>,
{
    let mut total = T::default();
    values
        .into_iter()
        .map(|x| {
            total = total + x;
            total
        })
        .collect()
}

/// Replaces every element of `values` with its running total, using no
/// extra space.
pub fn running_total_in_place<T: Summable>(values: &mut [T]) {
    for i in 1..values.len() {
        values[i] = values[i - 1] + values[i];
    }
}
