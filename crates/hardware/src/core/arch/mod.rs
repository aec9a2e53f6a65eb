//! MIPS architectural state.
//!
//! Only the general-purpose register file is architecturally visible in this
//! ISA subset; there are no control registers or privilege modes.

/// General-Purpose Register file implementation.
pub mod gpr;
