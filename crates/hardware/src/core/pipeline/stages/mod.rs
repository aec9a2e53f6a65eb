//! 5-stage pipeline: IF, ID, EX, MEM, WB.
//!
//! This module contains the individual stages and the engine that sequences them:
//! 1. **Fetch:** Loads the instruction at the PC or injects control-stall bubbles.
//! 2. **Decode:** Derives control signals, opens stall windows, applies jump targets.
//! 3. **Execute:** Gates on register locks, computes results and addresses, resolves branches.
//! 4. **Memory:** Performs stores (commit half) and loads (propagate half).
//! 5. **Writeback:** Commits results and queues lock releases.
//!
//! A stall anywhere freezes everything upstream of the stalled stage for the
//! rest of the cycle, so a younger instruction never overtakes an older one.

/// Instruction decode stage implementation.
pub mod decode;

/// Instruction execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Memory access stage implementation.
pub mod memory;

/// Writeback stage implementation.
pub mod writeback;

/// Decode stage entry point (ID stage).
pub use decode::decode_stage;
/// Execute stage entry point (EX stage).
pub use execute::execute_stage;
/// Fetch stage entry point (IF stage).
pub use fetch::fetch_stage;
/// Memory stage entry points (MEM stage, both halves).
pub use memory::{mem_commit_stage, mem_stage};
/// Writeback stage entry point (WB stage).
pub use writeback::wb_stage;

use crate::common::error::Fault;
use crate::config::PipelineKind;
use crate::core::Cpu;
use crate::core::pipeline::engine::{Phase, PipelineEngine};
use crate::core::pipeline::hazards::{StallPolicy, StallWindow};
use crate::core::pipeline::latches::{DecodeEntry, ExMemEntry, FetchEntry, Latch, MemWbEntry};

/// The classic 5-stage in-order pipeline with register locks.
#[derive(Debug, Default)]
pub struct FiveStageEngine {
    /// IF/ID latch.
    pub if_id: Latch<FetchEntry>,
    /// ID/EX latch.
    pub id_ex: Latch<DecodeEntry>,
    /// EX/MEM latch.
    pub ex_mem: Latch<ExMemEntry>,
    /// MEM/WB latch.
    pub mem_wb: Latch<MemWbEntry>,
    /// Fetch bubbles still owed to an unresolved branch or jump.
    pub window: StallWindow,
    /// The store in MEM is waiting this cycle; skip the propagate half.
    mem_stalled: bool,
    /// The drain marker reached write-back.
    finished: bool,
}

impl FiveStageEngine {
    /// Creates an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// True if every latch is empty, a bubble, or the drain marker.
    pub const fn latches_idle(&self) -> bool {
        self.if_id.is_idle() && self.id_ex.is_idle() && self.ex_mem.is_idle() && self.mem_wb.is_idle()
    }
}

impl PipelineEngine for FiveStageEngine {
    fn advance(&mut self, cpu: &mut Cpu, phase: Phase) -> Result<(), Fault> {
        match phase {
            Phase::Commit => {
                if wb_stage(cpu, &mut self.mem_wb) {
                    self.finished = true;
                }
                self.mem_stalled = mem_commit_stage(cpu, &mut self.ex_mem, &mut self.mem_wb).is_stall();
            }
            Phase::Propagate => {
                if self.mem_stalled {
                    return Ok(());
                }
                mem_stage(cpu, &mut self.ex_mem, &mut self.mem_wb);
                if execute_stage(cpu, &mut self.id_ex, &mut self.ex_mem)?.is_stall() {
                    return Ok(());
                }
                decode_stage(
                    cpu,
                    &mut self.if_id,
                    &mut self.id_ex,
                    &mut self.window,
                    StallPolicy::FIVE_STAGE,
                );
                fetch_stage(cpu, &mut self.if_id, &mut self.window);
            }
        }
        Ok(())
    }

    fn is_drained(&self) -> bool {
        self.finished || (self.latches_idle() && !self.window.is_active())
    }

    fn kind(&self) -> PipelineKind {
        PipelineKind::FiveStage
    }
}
