/// Provides the self-check routine run by the `perf-lab` binary.
pub mod self_check;
