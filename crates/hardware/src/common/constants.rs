//! Global Simulator Constants.
//!
//! This module defines the fixed architectural numbers shared across the simulator:
//! 1. **Register Constants:** Register-file width and the hard-wired zero register.
//! 2. **Memory Constants:** Word size and the default data-segment capacity.
//! 3. **Pipeline Constants:** Stall-window lengths for each pipeline organization.

/// Number of architectural general-purpose registers.
pub const NUM_REGS: usize = 32;

/// Index of the hard-wired zero register (`$zero`).
pub const ZERO_REG: usize = 0;

/// Size of one data word (and one instruction slot) in bytes.
pub const WORD_BYTES: u32 = 4;

/// Default data-segment capacity in bytes (1 MiB).
///
/// A program must occupy fewer than `DEFAULT_DATA_BYTES / WORD_BYTES`
/// instruction slots, otherwise simulation refuses to start.
pub const DEFAULT_DATA_BYTES: usize = 1 << 20;

/// Bubbles injected after a conditional branch in the 5-stage pipeline.
pub const FIVE_STAGE_BRANCH_STALL: u32 = 2;

/// Bubbles injected after an unconditional jump in the 5-stage pipeline.
pub const FIVE_STAGE_JUMP_STALL: u32 = 1;

/// Bubbles injected after a conditional branch in the dual-track pipeline.
pub const DUAL_TRACK_BRANCH_STALL: u32 = 5;

/// Bubbles injected after an unconditional jump in the dual-track pipeline.
pub const DUAL_TRACK_JUMP_STALL: u32 = 3;
