//! Core processor implementation.
//!
//! This module contains the CPU state, the pipeline engines that advance it,
//! the architectural register file, and the execution units the stages call.

/// Architectural components (register file).
pub mod arch;

/// CPU state container.
pub mod cpu;

/// Instruction pipeline implementation (engines, stages, latches, hazards, signals).
pub mod pipeline;

/// Execution units (ALU, BRU, LSU).
pub mod units;

pub use self::cpu::Cpu;
