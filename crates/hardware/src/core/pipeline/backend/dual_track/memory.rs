//! Memory Stages (MEM1, MEM2).
//!
//! MEM1 only models the extra cycle of the I-track. MEM2 performs the access:
//! loads read the word at the validated address, stores write the value they
//! captured at register read.

use tracing::trace;

use crate::core::Cpu;
use crate::core::pipeline::latches::{ExMemEntry, Latch, MemWbEntry};

/// Executes MEM1: moves the entry on when MEM2's latch is free.
pub fn mem1_stage(mem1: &mut Latch<ExMemEntry>, mem2: &mut Latch<ExMemEntry>) {
    if mem2.is_occupied() {
        return;
    }
    *mem2 = mem1.take();
}

/// Executes MEM2.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
/// * `mem2` - Input latch; consumed unless write-back is still occupied
/// * `wb_i` - I-track write-back latch
pub fn mem2_stage(cpu: &mut Cpu, mem2: &mut Latch<ExMemEntry>, wb_i: &mut Latch<MemWbEntry>) {
    if wb_i.is_occupied() {
        return;
    }
    let entry = match mem2.take().into_entry() {
        Ok(entry) => entry,
        Err(sentinel) => {
            *wb_i = sentinel;
            return;
        }
    };

    let mut result = entry.result;
    if entry.ctrl.mem_read {
        result = cpu.memory.read(entry.addr);
        if cpu.trace {
            trace!(pc = entry.pc, addr = entry.addr, value = result, "MEM load");
        }
    } else if entry.ctrl.mem_write {
        cpu.memory.write(entry.addr, entry.store_data);
        if cpu.trace {
            trace!(pc = entry.pc, addr = entry.addr, value = entry.store_data, "MEM store");
        }
    }

    *wb_i = Latch::Instruction(MemWbEntry {
        pc: entry.pc,
        inst: entry.inst,
        ctrl: entry.ctrl,
        seq: entry.seq,
        result,
    });
}
