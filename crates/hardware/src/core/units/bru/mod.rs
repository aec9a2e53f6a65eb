//! Branch Resolution Unit (BRU).
//!
//! Conditional branches are resolved in the execute stage by comparing the
//! two source registers. There is no prediction: fetch stalls until the
//! outcome is known.

use crate::core::pipeline::signals::BranchCond;

/// Branch Resolution Unit.
#[derive(Debug)]
pub struct Bru;

impl Bru {
    /// Returns whether a branch with condition `cond` is taken for operands `a` and `b`.
    pub fn taken(cond: BranchCond, a: i32, b: i32) -> bool {
        match cond {
            BranchCond::Eq => a == b,
            BranchCond::Ne => a != b,
        }
    }

    /// Computes the next PC after a branch at `pc`.
    ///
    /// # Arguments
    ///
    /// * `cond`   - Branch condition.
    /// * `a`, `b` - Operand values.
    /// * `pc`     - Instruction index of the branch.
    /// * `target` - Instruction index of the branch target.
    pub fn next_pc(cond: BranchCond, a: i32, b: i32, pc: usize, target: usize) -> usize {
        if Self::taken(cond, a, b) { target } else { pc + 1 }
    }
}
