//! Execute Stages (EX_R, EX_I).
//!
//! Both tracks compute with the operand values captured at register read:
//! 1. **EX_R:** ALU results, branch resolution (overwrites `pc.next`), and the
//!    pass-through of jumps. Feeds write-back directly.
//! 2. **EX_I:** Effective-address computation and validation for loads and
//!    stores. Feeds MEM1.
//!
//! A stage whose output latch still holds an instruction leaves its input alone.

use tracing::trace;

use crate::common::error::Fault;
use crate::core::Cpu;
use crate::core::pipeline::latches::{ExMemEntry, Latch, MemWbEntry, OperandEntry};
use crate::core::pipeline::stages::execute::compute;

/// Executes the R-track execute stage.
///
/// # Returns
///
/// `Ok(true)` if the stage was blocked by an occupied write-back latch.
pub fn ex_r_stage(
    cpu: &mut Cpu,
    ex_r: &mut Latch<OperandEntry>,
    wb_r: &mut Latch<MemWbEntry>,
) -> Result<bool, Fault> {
    if wb_r.is_occupied() {
        return Ok(true);
    }
    let entry = match ex_r.take().into_entry() {
        Ok(entry) => entry,
        Err(sentinel) => {
            *wb_r = sentinel;
            return Ok(false);
        }
    };

    let (result, _) = compute(cpu, entry.pc, &entry.inst, &entry.ctrl, entry.rv1, entry.rv2)?;
    if cpu.trace {
        trace!(pc = entry.pc, inst = %entry.inst, result, "EXR execute");
    }
    *wb_r = Latch::Instruction(MemWbEntry {
        pc: entry.pc,
        inst: entry.inst,
        ctrl: entry.ctrl,
        seq: entry.seq,
        result,
    });
    Ok(false)
}

/// Executes the I-track execute stage.
///
/// # Returns
///
/// `Err` if the effective address is outside data memory.
pub fn ex_i_stage(
    cpu: &mut Cpu,
    ex_i: &mut Latch<OperandEntry>,
    mem1: &mut Latch<ExMemEntry>,
) -> Result<(), Fault> {
    if mem1.is_occupied() {
        return Ok(());
    }
    let entry = match ex_i.take().into_entry() {
        Ok(entry) => entry,
        Err(sentinel) => {
            *mem1 = sentinel;
            return Ok(());
        }
    };

    let (result, addr) = compute(cpu, entry.pc, &entry.inst, &entry.ctrl, entry.rv1, entry.rv2)?;
    if cpu.trace {
        trace!(pc = entry.pc, inst = %entry.inst, addr, "EXI address");
    }
    *mem1 = Latch::Instruction(ExMemEntry {
        pc: entry.pc,
        inst: entry.inst,
        ctrl: entry.ctrl,
        seq: entry.seq,
        result,
        addr,
        store_data: entry.store_data,
    });
    Ok(())
}
