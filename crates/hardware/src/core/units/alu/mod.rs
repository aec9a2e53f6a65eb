//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used by the execute stages. All
//! arithmetic is 32-bit two's complement and wraps on overflow, matching the
//! register width of the simulated machine.

use crate::core::pipeline::signals::AluOp;

/// Arithmetic Logic Unit (ALU) for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand (`rs`)
    /// * `b`  - Second operand (`rt` or the immediate)
    ///
    /// # Returns
    ///
    /// The 32-bit result. `Slt` yields 1 when `a < b` (signed), else 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::core::pipeline::signals::AluOp;
    /// use mipsim_core::core::units::alu::Alu;
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 2, 3), 5);
    /// assert_eq!(Alu::execute(AluOp::Sub, 2, 3), -1);
    /// assert_eq!(Alu::execute(AluOp::Slt, -1, 0), 1);
    /// assert_eq!(Alu::execute(AluOp::Add, i32::MAX, 1), i32::MIN);
    /// ```
    pub const fn execute(op: AluOp, a: i32, b: i32) -> i32 {
        match op {
            AluOp::Add => a.wrapping_add(b),
            AluOp::Sub => a.wrapping_sub(b),
            AluOp::Mul => a.wrapping_mul(b),
            AluOp::Slt => (a < b) as i32,
        }
    }
}
