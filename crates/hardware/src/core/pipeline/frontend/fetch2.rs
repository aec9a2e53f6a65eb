//! Fetch2 (IF2) Stage.
//!
//! Second fetch stage of the dual-track pipeline. The opcode is recognized
//! here, early enough to open the control stall window before IF1 fetches a
//! wrong-path instruction in the same cycle.

use tracing::debug;

use crate::core::Cpu;
use crate::core::pipeline::hazards::{StallPolicy, StallWindow};
use crate::core::pipeline::latches::{FetchEntry, Latch};

/// Executes the IF2 stage.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
/// * `fetch1_fetch2` - Input latch; consumed
/// * `fetch2_decode1` - Output latch; overwritten
/// * `window` - Fetch stall window to open for branches and jumps
pub fn fetch2_stage(
    cpu: &mut Cpu,
    fetch1_fetch2: &mut Latch<FetchEntry>,
    fetch2_decode1: &mut Latch<FetchEntry>,
    window: &mut StallWindow,
) {
    let latch = fetch1_fetch2.take();
    if let Some(entry) = latch.entry() {
        if let Some(cycles) = StallPolicy::DUAL_TRACK.window_for(entry.inst.class()) {
            window.begin(cycles);
            if cpu.trace {
                debug!(pc = entry.pc, cycles, "IF2 control transfer, stalling fetch");
            }
        }
    }
    *fetch2_decode1 = latch;
}
