//! Per-cycle state reports.
//!
//! After every cycle the simulator hands the observable architectural state to
//! a [`ReportSink`]: the full register file and the data words written during
//! that cycle. Sinks decide how (and whether) to render it.

use serde::Serialize;

use crate::common::NUM_REGS;
use crate::stats::SimStats;

/// Architectural state at the end of one cycle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CycleReport {
    /// Cycle number; 0 is the state before the first cycle.
    pub cycle: u64,
    /// Register values, `$0` through `$31`.
    pub registers: [i32; NUM_REGS],
    /// `(byte address, value)` of every word written this cycle, ascending by address.
    pub memory_delta: Vec<(u32, i32)>,
}

/// Receives one report per simulated cycle.
pub trait ReportSink {
    /// Called after each cycle (and once for cycle 0).
    fn on_cycle(&mut self, report: &CycleReport);
}

/// Discards every report.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl ReportSink for NullSink {
    fn on_cycle(&mut self, _report: &CycleReport) {}
}

/// Collects every report, mostly for tests.
impl ReportSink for Vec<CycleReport> {
    fn on_cycle(&mut self, report: &CycleReport) {
        self.push(report.clone());
    }
}

/// Outcome of a run that drained normally.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Total cycles simulated.
    pub cycles: u64,
    /// Statistics gathered during the run.
    pub stats: SimStats,
}
