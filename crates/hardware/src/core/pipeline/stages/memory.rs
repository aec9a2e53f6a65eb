//! Memory Access (MEM) Stage.
//!
//! This module implements the fourth stage of the 5-stage pipeline, split
//! across the two half-cycles:
//! 1. **Commit half:** A store checks that its value register has no pending
//!    writer, then writes memory. If the register is locked the store waits,
//!    a bubble goes to write-back, and the whole propagate half is skipped.
//! 2. **Propagate half:** Loads read memory; every entry moves to MEM/WB.
//!
//! Address validation already happened in execute, so accesses here cannot fail.

use tracing::{debug, trace};

use crate::core::Cpu;
use crate::core::pipeline::hazards::{Gate, check_store_value};
use crate::core::pipeline::latches::{ExMemEntry, Latch, MemWbEntry};

/// Commit half of the memory stage: performs a pending store.
///
/// # Returns
///
/// `Gate::Stall` when the store's value register is still locked.
pub fn mem_commit_stage(
    cpu: &mut Cpu,
    ex_mem: &mut Latch<ExMemEntry>,
    mem_wb: &mut Latch<MemWbEntry>,
) -> Gate {
    let Latch::Instruction(entry) = ex_mem else {
        return Gate::Proceed;
    };
    if !entry.ctrl.mem_write {
        return Gate::Proceed;
    }

    let gate = check_store_value(&cpu.locks, &entry.inst);
    if let Gate::Stall { reg } = gate {
        cpu.stats.stalls_data += 1;
        if cpu.trace {
            debug!(pc = entry.pc, reg, "MEM store waits on value register");
        }
        *mem_wb = Latch::Bubble;
        return gate;
    }

    if let Some(rt) = entry.inst.store_value_reg() {
        entry.store_data = cpu.regs.read(rt);
    }
    cpu.memory.write(entry.addr, entry.store_data);
    if cpu.trace {
        trace!(pc = entry.pc, addr = entry.addr, value = entry.store_data, "MEM store");
    }
    Gate::Proceed
}

/// Propagate half of the memory stage: performs loads and moves EX/MEM to MEM/WB.
pub fn mem_stage(cpu: &mut Cpu, ex_mem: &mut Latch<ExMemEntry>, mem_wb: &mut Latch<MemWbEntry>) {
    let entry = match ex_mem.take().into_entry() {
        Ok(entry) => entry,
        Err(sentinel) => {
            *mem_wb = sentinel;
            return;
        }
    };

    let result = if entry.ctrl.mem_read {
        let value = cpu.memory.read(entry.addr);
        if cpu.trace {
            trace!(pc = entry.pc, addr = entry.addr, value, "MEM load");
        }
        value
    } else {
        entry.result
    };

    *mem_wb = Latch::Instruction(MemWbEntry {
        pc: entry.pc,
        inst: entry.inst,
        ctrl: entry.ctrl,
        seq: entry.seq,
        result,
    });
}
