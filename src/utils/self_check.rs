use std::collections::HashSet;

use tracing::{debug, info};

use crate::algorithms::growable_buffer::{simulate, BufferSimulation, DEFAULT_INITIAL_CAPACITY};
use crate::algorithms::{dedup, mode, pair_sum, prefix_sum};
use crate::error::SelfCheckError;

fn ensure(
    check: &'static str,
    ok: bool,
    detail: impl FnOnce() -> String,
) -> Result<(), SelfCheckError> {
    if ok {
        debug!(target: "self_check", check, "passed");
        Ok(())
    } else {
        Err(SelfCheckError::CheckFailed {
            check,
            detail: detail(),
        })
    }
}

fn check_mode() -> Result<(), SelfCheckError> {
    let got = mode::most_frequent(Vec::<i64>::new());
    ensure("mode/empty", got.is_none(), || format!("got {got:?}"))?;

    let got = mode::most_frequent([7]);
    ensure("mode/single", got == Some(7), || format!("got {got:?}"))?;

    let got = mode::most_frequent([1, 2, 2, 3, 3]);
    ensure("mode/tie", matches!(got, Some(2) | Some(3)), || {
        format!("got {got:?}, expected 2 or 3")
    })?;

    let got = mode::most_frequent([1, 3, 2, 3, 4, 1, 3]);
    ensure("mode/example", got == Some(3), || format!("got {got:?}"))
}

fn check_dedup() -> Result<(), SelfCheckError> {
    let cases: [(&[i64], &[i64]); 5] = [
        (&[], &[]),
        (&[1], &[1]),
        (&[4, 5, 4, 6, 5, 7], &[4, 5, 6, 7]),
        (&[1, 1, 1], &[1]),
        (&[3, -1, 3, -1, 2], &[3, -1, 2]),
    ];

    for (input, expected) in cases {
        let got = dedup::remove_duplicates(input.iter().copied());
        ensure("dedup", got == expected, || {
            format!("input {input:?}: got {got:?}, expected {expected:?}")
        })?;
    }
    Ok(())
}

fn check_pair_sum() -> Result<(), SelfCheckError> {
    let got = pair_sum::find_pairs::<i64>(&[], 5);
    ensure("pair_sum/empty", got.is_empty(), || format!("got {got:?}"))?;

    let got = pair_sum::find_pairs(&[5], 5);
    ensure("pair_sum/single", got.is_empty(), || format!("got {got:?}"))?;

    let got = pair_sum::find_pairs(&[1, 2, 3, 4], 5);
    let expected = HashSet::from([(1, 4), (2, 3)]);
    ensure("pair_sum/example", got == expected, || format!("got {got:?}"))?;

    let got = pair_sum::find_pairs(&[0, -1, 1, 2], 1);
    let expected = HashSet::from([(-1, 2), (0, 1)]);
    ensure("pair_sum/negative", got == expected, || format!("got {got:?}"))?;

    // 37 is coprime to 100, so this yields 20 distinct values in -50..50
    let nums: Vec<i64> = (0..20).map(|i| (i * 37) % 100 - 50).collect();
    for target in [-30, 0, 10, 25] {
        let fast = pair_sum::find_pairs(&nums, target);
        let naive = pair_sum::find_pairs_naive(&nums, target);
        ensure("pair_sum/matches_naive", fast == naive, || {
            format!("target {target}: optimized {fast:?}, naive {naive:?}")
        })?;
    }
    Ok(())
}

fn check_growable_buffer() -> Result<(), SelfCheckError> {
    let got = simulate(0, DEFAULT_INITIAL_CAPACITY);
    let empty = got.contents().is_empty() && got.events().is_empty();
    ensure("growable_buffer/zero", empty, || format!("got {got:?}"))?;

    let got = simulate(1, DEFAULT_INITIAL_CAPACITY);
    ensure("growable_buffer/one", got.contents() == [0], || format!("got {got:?}"))?;

    let got = simulate(6, 1);
    let transitions: Vec<(usize, usize)> = got
        .events()
        .iter()
        .map(|e| (e.old_capacity, e.new_capacity))
        .collect();
    ensure(
        "growable_buffer/six",
        got.contents() == [0, 1, 2, 3, 4, 5] && transitions == [(1, 2), (2, 4), (4, 8)],
        || format!("got {got:?}"),
    )
}

fn check_prefix_sum() -> Result<(), SelfCheckError> {
    let got = prefix_sum::running_total(Vec::<i64>::new());
    ensure("prefix_sum/empty", got.is_empty(), || format!("got {got:?}"))?;

    let got = prefix_sum::running_total([5]);
    ensure("prefix_sum/single", got == [5], || format!("got {got:?}"))?;

    let got = prefix_sum::running_total([1, 2, 3, 4]);
    ensure("prefix_sum/example", got == [1, 3, 6, 10], || format!("got {got:?}"))?;

    let got = prefix_sum::running_total([0, -1, 1]);
    ensure("prefix_sum/negative", got == [0, -1, 0], || format!("got {got:?}"))?;

    let got = prefix_sum::running_total([0.5, 0.5]);
    ensure("prefix_sum/fractional", got == [0.5, 1.0], || format!("got {got:?}"))
}

/// Runs the built-in checks for every algorithm, stopping at the first failure.
pub fn run_all() -> Result<(), SelfCheckError> {
    check_mode()?;
    check_dedup()?;
    check_pair_sum()?;
    check_growable_buffer()?;
    check_prefix_sum()?;
    info!(target: "self_check", "All self-checks passed");
    Ok(())
}

/// Runs `checks`, then the resizing demo if they all passed.
///
/// The demo is skipped when a check fails, and the failure is returned.
pub fn run_with<C>(
    checks: C,
    n: usize,
    initial_capacity: usize,
) -> Result<BufferSimulation, SelfCheckError>
where
    C: FnOnce() -> Result<(), SelfCheckError>,
{
    checks()?;
    Ok(resize_demo(n, initial_capacity))
}

/// Runs every built-in check, then the resizing demo.
pub fn run(n: usize, initial_capacity: usize) -> Result<BufferSimulation, SelfCheckError> {
    run_with(run_all, n, initial_capacity)
}

/// Fills a buffer once more so its resize notifications can be inspected.
///
/// Each resize is logged by the buffer as it happens and also recorded in the
/// returned simulation.
pub fn resize_demo(n: usize, initial_capacity: usize) -> BufferSimulation {
    info!(target: "self_check", n, initial_capacity, "Resizing demo");
    simulate(n, initial_capacity)
}
