//! Load/Store Unit (LSU).
//!
//! Computes effective addresses for `lw`/`sw` and validates them against the
//! data segment. The actual access happens in the memory stage.

use crate::common::error::SimError;
use crate::core::cpu::memory::DataMemory;

/// Load/Store Unit (LSU) for memory operations.
#[derive(Debug)]
pub struct Lsu;

impl Lsu {
    /// Computes and validates `base + offset`.
    ///
    /// The sum is formed in 64 bits so that overflow is reported as an
    /// out-of-range address rather than wrapping into the segment.
    ///
    /// # Returns
    ///
    /// The validated byte address, or `SimError::InvalidAddress`.
    pub fn effective_address(mem: &DataMemory, base: i32, offset: i32) -> Result<u32, SimError> {
        mem.check_address(i64::from(base) + i64::from(offset))
    }
}
