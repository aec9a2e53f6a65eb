//! Instruction Decode (ID) Stage.
//!
//! This module implements the second stage of the 5-stage pipeline. It derives
//! the control signals for the fetched instruction and handles the control
//! side effects that are known at decode:
//! 1. **Stall Windows:** Branches and jumps open a window of fetch bubbles.
//! 2. **Jump Targets:** `j` redirects `pc.next` immediately.
//!
//! Operand values are not read here; the execute stage reads them once the
//! lock table says they are final.

use tracing::debug;

use crate::core::Cpu;
use crate::core::pipeline::hazards::{StallPolicy, StallWindow};
use crate::core::pipeline::latches::{DecodeEntry, FetchEntry, Latch};
use crate::core::pipeline::signals::ControlSignals;

/// Executes the instruction decode stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
/// * `if_id` - Input latch; consumed
/// * `id_ex` - Output latch; overwritten
/// * `window` - Fetch stall window to open for branches and jumps
/// * `policy` - Window lengths for this pipeline depth
pub fn decode_stage(
    cpu: &mut Cpu,
    if_id: &mut Latch<FetchEntry>,
    id_ex: &mut Latch<DecodeEntry>,
    window: &mut StallWindow,
    policy: StallPolicy,
) {
    let fetched = match if_id.take().into_entry() {
        Ok(entry) => entry,
        Err(sentinel) => {
            *id_ex = sentinel;
            return;
        }
    };

    let ctrl = ControlSignals::decode(&fetched.inst);
    if let Some(cycles) = policy.window_for(ctrl.class) {
        window.begin(cycles);
        if cpu.trace {
            debug!(pc = fetched.pc, cycles, "ID  control transfer, stalling fetch");
        }
    }
    if ctrl.jump {
        if let Some(target) = fetched.inst.target() {
            cpu.pc.next = target;
        }
    }

    *id_ex = Latch::Instruction(DecodeEntry {
        pc: fetched.pc,
        inst: fetched.inst,
        ctrl,
        seq: fetched.seq,
    });
}
