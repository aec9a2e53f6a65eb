//! Execute (EX) Stage.
//!
//! This module implements the third stage of the 5-stage pipeline. It performs:
//! 1. **Hazard Gate:** If any source register has a pending writer, the
//!    instruction stays in ID/EX, a bubble goes downstream, and the caller
//!    skips the upstream stages for the rest of the cycle.
//! 2. **Operand Read:** Source values come straight from the register file;
//!    an unlocked register already holds its final value.
//! 3. **Computation:** ALU results, load/store effective addresses (validated
//!    here), and branch outcomes (which overwrite `pc.next`).
//! 4. **Lock Acquire:** Register-writing instructions lock their destination.

use tracing::{debug, trace};

use crate::common::error::Fault;
use crate::core::Cpu;
use crate::core::pipeline::hazards::{Gate, check_operands};
use crate::core::pipeline::latches::{DecodeEntry, ExMemEntry, Latch};
use crate::core::pipeline::signals::ControlSignals;
use crate::core::units::alu::Alu;
use crate::core::units::bru::Bru;
use crate::core::units::lsu::Lsu;
use crate::isa::instruction::{InstClass, Instruction};

/// Executes the execute stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
/// * `id_ex` - Input latch; consumed unless the instruction stalls
/// * `ex_mem` - Output latch; overwritten
///
/// # Returns
///
/// `Gate::Stall` if the instruction is held back by a locked source, in which
/// case fetch and decode must not run this cycle. `Err` on an invalid address.
pub fn execute_stage(
    cpu: &mut Cpu,
    id_ex: &mut Latch<DecodeEntry>,
    ex_mem: &mut Latch<ExMemEntry>,
) -> Result<Gate, Fault> {
    if let Some(entry) = id_ex.entry() {
        let gate = check_operands(&cpu.locks, &entry.inst);
        if let Gate::Stall { reg } = gate {
            cpu.stats.stalls_data += 1;
            if cpu.trace {
                debug!(pc = entry.pc, reg, "EX  stall on locked register");
            }
            *ex_mem = Latch::Bubble;
            return Ok(gate);
        }
    }

    let entry = match id_ex.take().into_entry() {
        Ok(entry) => entry,
        Err(sentinel) => {
            *ex_mem = sentinel;
            return Ok(Gate::Proceed);
        }
    };

    let (rv1, rv2) = read_operands(cpu, &entry.inst);
    let (result, addr) = compute(cpu, entry.pc, &entry.inst, &entry.ctrl, rv1, rv2)?;
    if let Some(rd) = entry.ctrl.dest {
        cpu.locks.acquire(rd);
    }
    if cpu.trace {
        trace!(pc = entry.pc, inst = %entry.inst, result, "EX  execute");
    }

    *ex_mem = Latch::Instruction(ExMemEntry {
        pc: entry.pc,
        inst: entry.inst,
        ctrl: entry.ctrl,
        seq: entry.seq,
        result,
        addr,
        store_data: 0,
    });
    Ok(Gate::Proceed)
}

/// Reads both source registers of `inst` (0 for an absent operand).
pub(crate) fn read_operands(cpu: &Cpu, inst: &Instruction) -> (i32, i32) {
    let [a, b] = inst.operand_regs();
    (
        a.map_or(0, |r| cpu.regs.read(r)),
        b.map_or(0, |r| cpu.regs.read(r)),
    )
}

/// Computes an instruction's result from its operand values.
///
/// Returns `(result, address)`: the ALU value for arithmetic, the validated
/// byte address (twice) for loads and stores, zeros for control transfers.
/// Conditional branches overwrite `pc.next` with their resolved successor.
pub(crate) fn compute(
    cpu: &mut Cpu,
    pc: usize,
    inst: &Instruction,
    ctrl: &ControlSignals,
    rv1: i32,
    rv2: i32,
) -> Result<(i32, u32), Fault> {
    match ctrl.class {
        InstClass::ArithRegister | InstClass::ArithImmediate => {
            let b = if ctrl.b_imm { ctrl.imm } else { rv2 };
            Ok((Alu::execute(ctrl.alu, rv1, b), 0))
        }
        InstClass::Load | InstClass::Store => {
            let addr = Lsu::effective_address(&cpu.memory, rv1, ctrl.imm)
                .map_err(|error| Fault::new(pc, error))?;
            Ok((addr as i32, addr))
        }
        InstClass::Branch => {
            if let (Some(cond), Some(target)) = (ctrl.branch, inst.target()) {
                if Bru::taken(cond, rv1, rv2) {
                    cpu.stats.branches_taken += 1;
                    if cpu.trace {
                        debug!(pc, target, "EX  branch taken");
                    }
                }
                cpu.pc.next = Bru::next_pc(cond, rv1, rv2, pc, target);
            }
            Ok((0, 0))
        }
        InstClass::Jump => Ok((0, 0)),
    }
}
