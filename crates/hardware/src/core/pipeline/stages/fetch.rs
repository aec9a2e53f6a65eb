//! Instruction Fetch (IF) Stage.
//!
//! This module implements the first stage of the instruction pipeline. It
//! copies the next-PC into the current PC, then either injects a bubble (while a
//! branch or jump stall window is open) or loads the instruction at the PC. Past
//! the end of the program it emits the drain marker instead.

use tracing::trace;

use crate::core::Cpu;
use crate::core::pipeline::hazards::StallWindow;
use crate::core::pipeline::latches::{FetchEntry, Latch};

/// Executes the instruction fetch stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
/// * `if_id` - The latch feeding the next stage; overwritten
/// * `window` - Control stall window opened by decode
///
/// # Behavior
///
/// - Applies `pc.next` to `pc.current`
/// - While the stall window is open: emits a bubble and consumes one window cycle
/// - Otherwise fetches `pc.current` and sets `pc.next = pc.current + 1`
/// - Past the last instruction: emits `Drain` and leaves the PC where it is
pub fn fetch_stage(cpu: &mut Cpu, if_id: &mut Latch<FetchEntry>, window: &mut StallWindow) {
    cpu.pc.current = cpu.pc.next;
    let pc = cpu.pc.current;

    if window.tick() {
        cpu.stats.stalls_control += 1;
        if cpu.trace {
            trace!(pc, remaining = window.remaining(), "IF  bubble (control stall)");
        }
        *if_id = Latch::Bubble;
        return;
    }

    match cpu.instruction_at(pc) {
        Some(inst) => {
            if cpu.trace {
                trace!(pc, %inst, "IF  fetch");
            }
            cpu.pc.next = pc + 1;
            *if_id = Latch::Instruction(FetchEntry {
                pc,
                inst,
                seq: None,
            });
        }
        None => *if_id = Latch::Drain,
    }
}
