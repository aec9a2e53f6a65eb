//! Execution units and functional components.
//!
//! These are the pure functions the pipeline stages call into:
//! the ALU for arithmetic, the BRU for branch outcomes, and the LSU for
//! effective-address computation.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Branch Resolution Unit.
pub mod bru;

/// Load/Store Unit for effective addresses.
pub mod lsu;
