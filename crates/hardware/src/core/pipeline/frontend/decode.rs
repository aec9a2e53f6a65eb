//! Decode Stages (ID1, ID2).
//!
//! The dual-track pipeline spends two cycles in decode:
//! 1. **ID1:** Derives the control signals.
//! 2. **ID2:** Applies an unconditional jump's target to `pc.next` and hands the
//!    instruction to register read.

use tracing::debug;

use crate::core::Cpu;
use crate::core::pipeline::latches::{DecodeEntry, FetchEntry, Latch};
use crate::core::pipeline::signals::ControlSignals;

/// Executes the ID1 stage.
pub fn decode1_stage(fetch2_decode1: &mut Latch<FetchEntry>, decode1_decode2: &mut Latch<DecodeEntry>) {
    *decode1_decode2 = match fetch2_decode1.take().into_entry() {
        Ok(fetched) => Latch::Instruction(DecodeEntry {
            pc: fetched.pc,
            ctrl: ControlSignals::decode(&fetched.inst),
            inst: fetched.inst,
            seq: fetched.seq,
        }),
        Err(sentinel) => sentinel,
    };
}

/// Executes the ID2 stage.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
/// * `decode1_decode2` - Input latch; consumed
/// * `decode2_rr` - Output latch (register read input); overwritten
pub fn decode2_stage(
    cpu: &mut Cpu,
    decode1_decode2: &mut Latch<DecodeEntry>,
    decode2_rr: &mut Latch<DecodeEntry>,
) {
    let latch = decode1_decode2.take();
    if let Some(entry) = latch.entry() {
        if entry.ctrl.jump {
            if let Some(target) = entry.inst.target() {
                cpu.pc.next = target;
                if cpu.trace {
                    debug!(pc = entry.pc, target, "ID2 jump target");
                }
            }
        }
    }
    *decode2_rr = latch;
}
