/// Provides common definitions used across the crate
pub mod common;

/// Provides individual algorithm implementations
pub mod algorithms;

/// Provides helper routines built on top of the algorithms
pub mod utils;

/// Error types returned by the crate
pub mod error;
