//! Writeback (WB) Stage with in-order commit.
//!
//! Both tracks end in their own write-back latch. Commit order is enforced with
//! the sequence numbers IF1 assigned:
//! 1. **Unsequenced entries** (stores, branches, jumps) write no register and
//!    retire as soon as they arrive.
//! 2. **Sequenced entries** commit only when their number is exactly one past
//!    the last committed number. At most one commits per cycle; the R-track is
//!    considered first.
//! 3. **Waiting entries** stay in their latch and block their track.

use tracing::trace;

use crate::core::Cpu;
use crate::core::pipeline::latches::{Latch, MemWbEntry, SeqNo};
use crate::core::pipeline::stages::writeback::retire;

/// Commit-order bookkeeping shared by both tracks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommitOrder {
    /// Highest sequence number committed so far (0 before the first commit).
    pub last: SeqNo,
    /// Every committed sequence number, in commit order.
    pub log: Vec<SeqNo>,
}

/// Executes the write-back stage for both tracks.
pub fn writeback_stage(
    cpu: &mut Cpu,
    wb_r: &mut Latch<MemWbEntry>,
    wb_i: &mut Latch<MemWbEntry>,
    order: &mut CommitOrder,
) {
    for latch in [&mut *wb_r, &mut *wb_i] {
        match latch.take() {
            Latch::Instruction(entry) if entry.seq.is_some() => *latch = Latch::Instruction(entry),
            Latch::Instruction(entry) => retire(cpu, &entry),
            Latch::Drain => *latch = Latch::Drain,
            Latch::Empty | Latch::Bubble => {}
        }
    }

    let expected = order.last.next();
    for latch in [&mut *wb_r, &mut *wb_i] {
        if latch.entry().is_some_and(|e| e.seq == Some(expected)) {
            if let Latch::Instruction(entry) = latch.take() {
                retire(cpu, &entry);
                order.last = expected;
                order.log.push(expected);
                if cpu.trace {
                    trace!(pc = entry.pc, seq = %expected, "WB  commit");
                }
            }
            break;
        }
    }

    if wb_r.is_occupied() || wb_i.is_occupied() {
        cpu.stats.stalls_commit += 1;
    }
}
