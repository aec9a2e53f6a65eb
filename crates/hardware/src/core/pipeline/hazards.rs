//! Hazard and Stall Control.
//!
//! This module decides, per stage and per cycle, whether an instruction may
//! proceed. It provides:
//! 1. **Data Hazard Gating:** An instruction whose source registers have pending
//!    writers is held back (see [`LockTable`]).
//! 2. **Store Hazard Gating:** A store may not write memory while its value
//!    register has a pending writer.
//! 3. **Control Stall Windows:** After a branch or jump is decoded, fetch injects
//!    a fixed number of bubbles while the target is resolved.

use crate::common::constants::{
    DUAL_TRACK_BRANCH_STALL, DUAL_TRACK_JUMP_STALL, FIVE_STAGE_BRANCH_STALL, FIVE_STAGE_JUMP_STALL,
};
use crate::core::pipeline::scoreboard::LockTable;
use crate::isa::instruction::{InstClass, Instruction};

/// Outcome of a hazard check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gate {
    /// All required registers are free.
    Proceed,
    /// The instruction must wait for a pending write of `reg`.
    Stall {
        /// The locked register.
        reg: usize,
    },
}

impl Gate {
    const fn from_locked(reg: Option<usize>) -> Self {
        match reg {
            Some(reg) => Self::Stall { reg },
            None => Self::Proceed,
        }
    }

    /// True if the instruction must wait.
    pub const fn is_stall(self) -> bool {
        matches!(self, Self::Stall { .. })
    }
}

/// Checks the registers an instruction reads to compute its result or address.
pub fn check_operands(locks: &LockTable, inst: &Instruction) -> Gate {
    Gate::from_locked(locks.first_locked(inst.operand_regs().into_iter().flatten()))
}

/// Checks the value register of a store.
pub fn check_store_value(locks: &LockTable, inst: &Instruction) -> Gate {
    Gate::from_locked(locks.first_locked(inst.store_value_reg()))
}

/// Checks every register an instruction reads (operands and store value).
pub fn check_all_sources(locks: &LockTable, inst: &Instruction) -> Gate {
    match check_operands(locks, inst) {
        Gate::Proceed => check_store_value(locks, inst),
        stall @ Gate::Stall { .. } => stall,
    }
}

/// Number of bubbles fetch injects after each kind of control transfer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StallPolicy {
    /// Bubbles after a conditional branch.
    pub branch: u32,
    /// Bubbles after an unconditional jump.
    pub jump: u32,
}

impl StallPolicy {
    /// Branch resolves in EX (two stages after fetch); jump target known at ID.
    pub const FIVE_STAGE: Self = Self {
        branch: FIVE_STAGE_BRANCH_STALL,
        jump: FIVE_STAGE_JUMP_STALL,
    };

    /// Branch resolves in EX_R (five stages after IF2); jump target known at ID2.
    pub const DUAL_TRACK: Self = Self {
        branch: DUAL_TRACK_BRANCH_STALL,
        jump: DUAL_TRACK_JUMP_STALL,
    };

    /// Window length for an instruction of `class`, or `None` if it does not redirect.
    pub const fn window_for(self, class: InstClass) -> Option<u32> {
        match class {
            InstClass::Branch => Some(self.branch),
            InstClass::Jump => Some(self.jump),
            _ => None,
        }
    }
}

/// Countdown of bubbles fetch still has to inject.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StallWindow {
    remaining: u32,
}

impl StallWindow {
    /// Opens a window of `cycles` bubbles.
    pub const fn begin(&mut self, cycles: u32) {
        self.remaining = cycles;
    }

    /// True while fetch must keep injecting bubbles.
    pub const fn is_active(&self) -> bool {
        self.remaining > 0
    }

    /// Bubbles still owed.
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Consumes one bubble if the window is open; returns whether it was.
    pub const fn tick(&mut self) -> bool {
        if self.remaining > 0 {
            self.remaining -= 1;
            true
        } else {
            false
        }
    }
}
