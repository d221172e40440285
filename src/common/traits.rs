use std::hash::Hash;
use std::ops::Add;

use num_traits::{CheckedAdd, CheckedSub, Zero};

/// A simple trait encapsulating what other traits are needed
/// for a type to be counted or deduplicated with a hash set.
pub trait Countable: Eq + Hash + Copy {}
impl<T> Countable for T where T: Eq + Hash + Copy {}

/// Trait encapsulating what a value needs to take part in a pair-sum search.
///
/// `Ord` is required so pairs can be reported as `(min, max)`. Sums and
/// complements go through the checked operations so values near the limits
/// of `T` are skipped rather than overflowing.
pub trait PairSumValue: Countable + Ord + Zero + CheckedAdd + CheckedSub {}
impl<T> PairSumValue for T where T: Countable + Ord + Zero + CheckedAdd + CheckedSub {}

/// Trait encapsulating what a value needs to be accumulated into a running total.
///
/// `Default` supplies the zero the accumulator starts from, so this covers
/// both integers and floats.
pub trait Summable: Copy + Default + Add<Output = Self> {}
impl<T> Summable for T where T: Copy + Default + Add<Output = T> {}
