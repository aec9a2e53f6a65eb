//! Writeback (WB) Stage.
//!
//! This module implements the final stage of the 5-stage pipeline. It commits
//! results to the register file, queues the release of the destination lock,
//! updates retirement statistics, and recognizes the drain marker.

use tracing::trace;

use crate::core::Cpu;
use crate::core::pipeline::latches::{Latch, MemWbEntry};

/// Executes the writeback stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
/// * `mem_wb` - Input latch; consumed
///
/// # Returns
///
/// `true` if the drain marker reached write-back (the pipeline is finished).
pub fn wb_stage(cpu: &mut Cpu, mem_wb: &mut Latch<MemWbEntry>) -> bool {
    match mem_wb.take() {
        Latch::Instruction(entry) => {
            retire(cpu, &entry);
            false
        }
        Latch::Drain => true,
        Latch::Empty | Latch::Bubble => false,
    }
}

/// Commits one finished instruction.
///
/// Writes the destination register (ignored for `$zero`), queues the lock
/// release for the end of the cycle, and counts the retirement.
pub fn retire(cpu: &mut Cpu, entry: &MemWbEntry) {
    if let Some(rd) = entry.ctrl.dest {
        cpu.regs.write(rd, entry.result);
        cpu.locks.release_deferred(rd);
    }
    cpu.stats.record_retire(entry.pc, entry.ctrl.class);
    if cpu.trace {
        trace!(pc = entry.pc, inst = %entry.inst, result = entry.result, "WB  retire");
    }
}
