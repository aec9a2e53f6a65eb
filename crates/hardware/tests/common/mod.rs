/// Simulator harness (`TestContext`).
pub mod harness;

/// Program generators for property tests.
pub mod programs;
