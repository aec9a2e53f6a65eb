//! Fetch1 (IF1) Stage.
//!
//! First fetch stage of the dual-track pipeline. It fetches exactly like the
//! 5-stage IF and additionally hands out commit-order sequence numbers: every
//! instruction that writes a register gets the next number, while stores,
//! branches and jumps get none and never take part in commit ordering.

use crate::core::Cpu;
use crate::core::pipeline::hazards::StallWindow;
use crate::core::pipeline::latches::{FetchEntry, Latch, SeqNo};
use crate::core::pipeline::stages::fetch_stage;

/// Executes the IF1 stage.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
/// * `fetch1_fetch2` - Output latch; overwritten
/// * `window` - Control stall window opened by IF2
/// * `next_seq` - Next sequence number to hand out; advanced when used
pub fn fetch1_stage(
    cpu: &mut Cpu,
    fetch1_fetch2: &mut Latch<FetchEntry>,
    window: &mut StallWindow,
    next_seq: &mut SeqNo,
) {
    fetch_stage(cpu, fetch1_fetch2, window);
    if let Latch::Instruction(entry) = fetch1_fetch2 {
        if entry.inst.is_sequenced() {
            entry.seq = Some(*next_seq);
            *next_seq = next_seq.next();
        }
    }
}
