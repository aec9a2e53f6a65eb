//! Common types and constants shared by every part of the simulator.
//!
//! 1. **Constants:** Register-file width, word size, data capacity, stall windows.
//! 2. **Error Handling:** Fatal error kinds and their stage, loader, and run wrappers.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for loading and simulation.
pub mod error;

pub use constants::{NUM_REGS, WORD_BYTES};
pub use error::{FatalError, Fault, LoadError, ProgramError, SimError};
