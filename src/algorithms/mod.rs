/// Provides mode finding: the most frequent value in a sequence.
pub mod mode;

/// Provides order-preserving duplicate removal.
pub mod dedup;

/// Provides methods for finding pairs of values that sum to a target.
///
/// You most likely want [find_pairs](crate::algorithms::pair_sum::find_pairs);
/// [find_pairs_naive](crate::algorithms::pair_sum::find_pairs_naive) is the
/// quadratic baseline it replaces.
pub mod pair_sum;

/// Provides a doubling buffer that reports each reallocation, for
/// demonstrating amortized insertion cost.
pub mod growable_buffer;

/// Provides running totals (prefix sums).
pub mod prefix_sum;

#[cfg(test)]
mod pair_sum_tests;
