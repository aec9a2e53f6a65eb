//! Counting lock table for register dependency tracking.
//!
//! Each architectural register has a count of in-flight instructions that
//! will write it. A source register with a nonzero count is hazardous: the
//! reader must stall until every older writer has committed.
//!
//! Acquire and release are the only ways to change a count. Releases are
//! queued during the cycle and applied by [`LockTable::apply_releases`] once
//! every stage has run, so a stage stalled earlier in the cycle never sees a
//! lock drop before the register file holds the new value.

use crate::common::constants::{NUM_REGS, ZERO_REG};

/// Per-register outstanding-write counters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LockTable {
    counts: [u32; NUM_REGS],
    /// Registers whose writers committed this cycle.
    pending: Vec<usize>,
}

impl LockTable {
    /// Create a lock table with every register unlocked.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one more in-flight writer of `reg`. No-op for `$zero`.
    pub fn acquire(&mut self, reg: usize) {
        if reg != ZERO_REG {
            self.counts[reg] += 1;
        }
    }

    /// Queue the release of one writer of `reg`, applied at end of cycle.
    pub fn release_deferred(&mut self, reg: usize) {
        if reg != ZERO_REG {
            self.pending.push(reg);
        }
    }

    /// Apply every queued release. Called once per cycle after all stages ran.
    ///
    /// Releasing a register with no outstanding writer is an engine bug; it
    /// trips a debug assertion and is otherwise clamped at zero.
    pub fn apply_releases(&mut self) {
        for reg in self.pending.drain(..) {
            let count = &mut self.counts[reg];
            debug_assert!(*count > 0, "lock release without acquire on register {reg}");
            *count = count.saturating_sub(1);
        }
    }

    /// Number of in-flight writers of `reg`.
    pub const fn count(&self, reg: usize) -> u32 {
        self.counts[reg]
    }

    /// True if `reg` has an in-flight writer.
    pub const fn is_locked(&self, reg: usize) -> bool {
        self.counts[reg] != 0
    }

    /// First locked register among `regs`, if any.
    pub fn first_locked<I>(&self, regs: I) -> Option<usize>
    where
        I: IntoIterator<Item = usize>,
    {
        regs.into_iter().find(|&reg| self.is_locked(reg))
    }

    /// True if no register is locked and no release is pending.
    pub fn all_clear(&self) -> bool {
        self.pending.is_empty() && self.counts.iter().all(|&c| c == 0)
    }

    /// Copy of every register's count.
    pub const fn counts(&self) -> [u32; NUM_REGS] {
        self.counts
    }
}
