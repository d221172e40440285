use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::{Rng, SeedableRng};

use super::pair_sum::*;
use crate::error::PairSumError;

fn distinct_sample(rng: &mut StdRng, amount: usize) -> Vec<i64> {
    // Values drawn without replacement from -50..50
    sample(rng, 100, amount)
        .into_iter()
        .map(|i| i as i64 - 50)
        .collect()
}

// Empty and single-element inputs never produce a pair
#[test]
pub fn find_pairs_returns_nothing_for_short_input() {
    assert!(find_pairs::<i64>(&[], 5).is_empty());
    assert!(find_pairs(&[5], 5).is_empty());
    assert!(find_pairs_naive::<i64>(&[], 5).is_empty());
    assert!(find_pairs_naive(&[5], 5).is_empty());
    assert!(find_pairs_two_pointer(&[5], 5).is_empty());
}

#[test]
pub fn find_pairs_reports_min_then_max() {
    let expected = HashSet::from([(1, 4), (2, 3)]);
    assert_eq!(find_pairs(&[1, 2, 3, 4], 5), expected);
    assert_eq!(find_pairs(&[4, 3, 2, 1], 5), expected);
    assert_eq!(find_pairs_naive(&[4, 3, 2, 1], 5), expected);
    assert_eq!(find_pairs_two_pointer(&[4, 3, 2, 1], 5), expected);
}

#[test]
pub fn find_pairs_handles_negative_and_zero() {
    let expected = HashSet::from([(-1, 2), (0, 1)]);
    assert_eq!(find_pairs(&[0, -1, 1, 2], 1), expected);
    assert_eq!(find_pairs_naive(&[0, -1, 1, 2], 1), expected);
}

#[test]
pub fn find_pairs_no_match() {
    assert!(find_pairs(&[1, 2, 3], 100).is_empty());
    assert!(find_pairs_naive(&[1, 2, 3], 100).is_empty());
    assert!(find_pairs_two_pointer(&[1, 2, 3], 100).is_empty());
}

// A value never pairs with itself on distinct input, even when 2x == target
#[test]
pub fn find_pairs_does_not_pair_value_with_itself() {
    assert!(find_pairs(&[3, 10], 6).is_empty());
    assert!(find_pairs_naive(&[3, 10], 6).is_empty());
    assert!(find_pairs_two_pointer(&[3, 10], 6).is_empty());
}

#[test]
pub fn find_pairs_checked_rejects_duplicates() {
    assert_eq!(
        find_pairs_checked(&[1, 2, 3, 2], 5),
        Err(PairSumError::DuplicateValue { value: 2 })
    );
    assert_eq!(
        find_pairs_checked(&[1, 2, 3, 4], 5),
        Ok(HashSet::from([(1, 4), (2, 3)]))
    );
}

#[test]
pub fn duplicate_value_error_names_the_value() {
    let err = find_pairs_checked(&[9, 9], 18).unwrap_err();
    assert!(err.to_string().contains("9"), "{err}");
}

// All variants agree on randomized distinct input, for targets with zero, one or many matches
#[test]
pub fn all_variants_agree_on_random_distinct_input() {
    let mut rng = StdRng::seed_from_u64(1234);
    for _ in 0..300 {
        let amount = rng.gen_range(0..=30);
        let nums = distinct_sample(&mut rng, amount);
        let target = rng.gen_range(-60..60);

        let naive = find_pairs_naive(&nums, target);
        assert_eq!(find_pairs(&nums, target), naive, "nums: {nums:?}, target: {target}");
        assert_eq!(
            find_pairs_two_pointer(&nums, target),
            naive,
            "nums: {nums:?}, target: {target}"
        );
        assert_eq!(find_pairs_checked(&nums, target), Ok(naive));
    }
}

#[test]
pub fn every_reported_pair_sums_to_target() {
    let mut rng = StdRng::seed_from_u64(99);
    let nums = distinct_sample(&mut rng, 40);
    for target in -20..20 {
        for (a, b) in find_pairs(&nums, target) {
            assert!(a < b);
            assert_eq!(a + b, target);
            assert!(nums.contains(&a) && nums.contains(&b));
        }
    }
}

// Values at the integer limits are skipped instead of overflowing, and all variants still agree
#[test]
pub fn all_variants_agree_near_integer_limits() {
    let cases: [(&[i64], i64); 7] = [
        (&[i64::MAX, 1], 0),
        (&[i64::MIN, 5], 1),
        (&[i64::MIN, -1, 0, 1, i64::MAX], 0),
        (&[i64::MIN, -1, 0, 1, i64::MAX], -1),
        (&[i64::MAX, i64::MAX - 2, 2, -3, 0], i64::MAX),
        (&[1, 2, i64::MAX - 1, i64::MAX], 3),
        (&[i64::MIN, i64::MIN + 1, -2, 3], i64::MIN),
    ];

    for (nums, target) in cases {
        let naive = find_pairs_naive(nums, target);
        assert_eq!(find_pairs(nums, target), naive, "nums: {nums:?}, target: {target}");
        assert_eq!(
            find_pairs_two_pointer(nums, target),
            naive,
            "nums: {nums:?}, target: {target}"
        );
        assert_eq!(find_pairs_checked(nums, target), Ok(naive));
    }

    assert!(find_pairs_naive(&[i64::MAX, 1], 0).is_empty());
    assert!(find_pairs(&[i64::MIN, 5], 1).is_empty());
    assert_eq!(
        find_pairs(&[i64::MIN, -1, 0, 1, i64::MAX], -1),
        HashSet::from([(i64::MIN, i64::MAX), (-1, 0)])
    );
    assert_eq!(
        find_pairs_two_pointer(&[i64::MAX, i64::MAX - 2, 2, -3, 0], i64::MAX),
        HashSet::from([(0, i64::MAX), (2, i64::MAX - 2)])
    );
    assert_eq!(
        find_pairs_two_pointer(&[1, 2, i64::MAX - 1, i64::MAX], 3),
        HashSet::from([(1, 2)])
    );
}
