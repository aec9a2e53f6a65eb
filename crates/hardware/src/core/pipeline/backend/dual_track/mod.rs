//! Dual-track in-order pipeline.
//!
//! Every instruction passes IF1, IF2, ID1, ID2 and RR, then splits by class:
//! 1. **R-track** (arithmetic, branches, jumps): EX_R, WB. Seven stages in total.
//! 2. **I-track** (loads, stores): EX_I, MEM1, MEM2, WB. Nine stages in total.
//!
//! Register read is the only dispatch point and issues in program order, so
//! the tracks themselves are plain FIFOs. Write-back re-serializes register
//! writes with sequence numbers, which keeps the architectural state identical
//! to sequential execution even though an R-track result is ready two cycles
//! before an older load's.
//!
//! A stage whose output latch holds an instruction waits; a stall backs up
//! towards RR, and a stall at RR freezes the whole front end.

/// Track execute stages.
pub mod execute;

/// I-track memory stages.
pub mod memory;

/// Dispatch stage.
pub mod register_read;

/// In-order commit.
pub mod writeback;

use tracing::debug;

use crate::common::error::Fault;
use crate::config::PipelineKind;
use crate::core::Cpu;
use crate::core::pipeline::engine::{Phase, PipelineEngine};
use crate::core::pipeline::frontend::Frontend;
use crate::core::pipeline::latches::{DecodeEntry, ExMemEntry, Latch, MemWbEntry, OperandEntry, SeqNo};

use self::execute::{ex_i_stage, ex_r_stage};
use self::memory::{mem1_stage, mem2_stage};
use self::register_read::register_read_stage;
use self::writeback::{CommitOrder, writeback_stage};

/// The dual-track 7/9-stage pipeline.
#[derive(Debug, Default)]
pub struct DualTrackEngine {
    /// IF1 through ID2.
    pub frontend: Frontend,
    /// ID2 -> RR latch.
    pub rr: Latch<DecodeEntry>,
    /// RR -> EX_R latch.
    pub ex_r: Latch<OperandEntry>,
    /// EX_R -> WB latch.
    pub wb_r: Latch<MemWbEntry>,
    /// RR -> EX_I latch.
    pub ex_i: Latch<OperandEntry>,
    /// EX_I -> MEM1 latch.
    pub mem1: Latch<ExMemEntry>,
    /// MEM1 -> MEM2 latch.
    pub mem2: Latch<ExMemEntry>,
    /// MEM2 -> WB latch.
    pub wb_i: Latch<MemWbEntry>,
    order: CommitOrder,
}

impl DualTrackEngine {
    /// Creates an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sequence numbers in the order they committed.
    pub fn commit_log(&self) -> &[SeqNo] {
        &self.order.log
    }

    /// True if no latch past the front end holds an instruction.
    pub const fn backend_idle(&self) -> bool {
        self.rr.is_idle()
            && self.ex_r.is_idle()
            && self.wb_r.is_idle()
            && self.ex_i.is_idle()
            && self.mem1.is_idle()
            && self.mem2.is_idle()
            && self.wb_i.is_idle()
    }
}

impl PipelineEngine for DualTrackEngine {
    fn advance(&mut self, cpu: &mut Cpu, phase: Phase) -> Result<(), Fault> {
        match phase {
            Phase::Commit => {
                writeback_stage(cpu, &mut self.wb_r, &mut self.wb_i, &mut self.order);
            }
            Phase::Propagate => {
                let branch_waiting = ex_r_stage(cpu, &mut self.ex_r, &mut self.wb_r)?
                    && self.ex_r.entry().is_some_and(|e| e.ctrl.branch.is_some());
                mem2_stage(cpu, &mut self.mem2, &mut self.wb_i);
                mem1_stage(&mut self.mem1, &mut self.mem2);
                ex_i_stage(cpu, &mut self.ex_i, &mut self.mem1)?;

                let dispatch = register_read_stage(cpu, &mut self.rr, &mut self.ex_r, &mut self.ex_i);
                // An unresolved branch must not let its stall window run out.
                if dispatch.advanced() && !branch_waiting {
                    self.frontend.tick(cpu, &mut self.rr);
                } else if cpu.trace {
                    debug!(?dispatch, branch_waiting, "front end held");
                }
            }
        }
        Ok(())
    }

    fn is_drained(&self) -> bool {
        self.backend_idle() && self.frontend.is_idle()
    }

    fn kind(&self) -> PipelineKind {
        PipelineKind::DualTrack
    }

    fn last_committed(&self) -> Option<SeqNo> {
        Some(self.order.last)
    }
}
