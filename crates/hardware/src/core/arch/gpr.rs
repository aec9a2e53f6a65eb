//! MIPS General-Purpose Register File.
//!
//! This module implements the 32-entry integer register file. It performs the following:
//! 1. **Storage:** Maintains 32 signed 32-bit registers (`$0`-`$31`).
//! 2. **Invariant Enforcement:** Ensures that register `$zero` is hardwired to zero.
//! 3. **Reporting:** Provides a snapshot of the complete register state.

use crate::common::constants::{NUM_REGS, ZERO_REG};

/// General-Purpose Register file.
///
/// Register `$zero` is hardwired to zero; writes to it are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [i32; NUM_REGS],
}

impl Gpr {
    /// Creates a new general-purpose register file with all registers initialized to zero.
    ///
    /// # Returns
    ///
    /// A new `Gpr` instance with all registers set to 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    ///
    /// # Returns
    ///
    /// The value stored in the specified register. Register `$zero` always returns 0.
    pub fn read(&self, idx: usize) -> i32 {
        if idx == ZERO_REG { 0 } else { self.regs[idx] }
    }

    /// Writes a value to a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The value to write. Ignored for `$zero`.
    pub fn write(&mut self, idx: usize, val: i32) {
        if idx != ZERO_REG {
            self.regs[idx] = val;
        }
    }

    /// Copies out all 32 register values in index order.
    pub const fn snapshot(&self) -> [i32; NUM_REGS] {
        self.regs
    }
}
