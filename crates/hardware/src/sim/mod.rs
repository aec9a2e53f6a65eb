//! Simulation driver and program loading.
//!
//! Provides the assembly loader, the cycle driver, and the per-cycle report
//! types the driver emits.

/// Assembly text to [`Program`].
pub mod loader;

/// Per-cycle reports and sinks.
pub mod report;

/// Cycle driver.
pub mod simulator;

pub use self::loader::Program;
pub use self::report::{CycleReport, NullSink, ReportSink, RunSummary};
pub use self::simulator::Simulator;
