//! Register Read (RR) Stage.
//!
//! The single dispatch point of the dual-track pipeline. An instruction leaves
//! RR only when:
//! 1. **Its track is free:** The first latch of its track (EX_R or EX_I) is not
//!    holding an instruction.
//! 2. **Its sources are free:** No operand or store-value register has a
//!    pending writer.
//!
//! On dispatch it captures every source value, locks its destination, and moves
//! into the chosen track. RR dispatches strictly in program order.

use tracing::{debug, trace};

use crate::core::Cpu;
use crate::core::pipeline::hazards::{Gate, check_all_sources};
use crate::core::pipeline::latches::{DecodeEntry, Latch, OperandEntry};
use crate::isa::instruction::Track;

/// What register read did this cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// Nothing to dispatch (empty, bubble, or drain marker).
    Idle,
    /// The instruction moved into `track`.
    Issued(Track),
    /// The target track's first latch is still occupied.
    TrackBusy(Track),
    /// A source register has a pending writer.
    Hazard {
        /// The locked register.
        reg: usize,
    },
}

impl Dispatch {
    /// True if the RR latch was consumed and the front end may advance.
    pub const fn advanced(self) -> bool {
        matches!(self, Self::Idle | Self::Issued(_))
    }
}

/// Executes the register-read stage.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
/// * `rr` - Input latch (ID2 output); consumed on dispatch
/// * `ex_r` - First latch of the R-track
/// * `ex_i` - First latch of the I-track
pub fn register_read_stage(
    cpu: &mut Cpu,
    rr: &mut Latch<DecodeEntry>,
    ex_r: &mut Latch<OperandEntry>,
    ex_i: &mut Latch<OperandEntry>,
) -> Dispatch {
    let Some(entry) = rr.entry() else {
        if !matches!(rr, Latch::Drain) {
            *rr = Latch::Empty;
        }
        return Dispatch::Idle;
    };

    let track = entry.ctrl.class.track();
    let target = match track {
        Track::R => ex_r,
        Track::I => ex_i,
    };
    if target.is_occupied() {
        return Dispatch::TrackBusy(track);
    }

    if let Gate::Stall { reg } = check_all_sources(&cpu.locks, &entry.inst) {
        cpu.stats.stalls_data += 1;
        if cpu.trace {
            debug!(pc = entry.pc, reg, "RR  stall on locked register");
        }
        *target = Latch::Bubble;
        return Dispatch::Hazard { reg };
    }

    let Ok(entry) = rr.take().into_entry::<OperandEntry>() else {
        return Dispatch::Idle;
    };
    let [a, b] = entry.inst.operand_regs();
    let rv1 = a.map_or(0, |r| cpu.regs.read(r));
    let rv2 = b.map_or(0, |r| cpu.regs.read(r));
    let store_data = entry.inst.store_value_reg().map_or(0, |r| cpu.regs.read(r));
    if let Some(rd) = entry.ctrl.dest {
        cpu.locks.acquire(rd);
    }
    if cpu.trace {
        trace!(pc = entry.pc, inst = %entry.inst, ?track, seq = ?entry.seq, "RR  dispatch");
    }

    *target = Latch::Instruction(OperandEntry {
        pc: entry.pc,
        inst: entry.inst,
        ctrl: entry.ctrl,
        seq: entry.seq,
        rv1,
        rv2,
        store_data,
    });
    Dispatch::Issued(track)
}
