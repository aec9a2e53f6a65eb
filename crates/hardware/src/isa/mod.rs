//! Instruction Set Architecture (ISA) Definitions.
//!
//! The simulated ISA is a small MIPS subset: `add`, `sub`, `mul`, `slt`, `addi`,
//! `lw`, `sw`, `beq`, `bne` and `j`.
//!
//! # Modules
//!
//! * `abi`: Register names and their indices.
//! * `instruction`: The closed instruction enum and its classification.
//! * `decode`: Assembly tokens to instructions.

/// Register name mappings.
pub mod abi;

/// Assembly statement decoding.
pub mod decode;

/// Decoded instruction representation.
pub mod instruction;

pub use instruction::{InstClass, Instruction, Opcode, Track};
