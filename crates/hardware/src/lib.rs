//! MIPS pipeline simulator library.
//!
//! This crate implements a cycle-accurate simulator for a small MIPS subset with the following:
//! 1. **ISA:** Instruction model, register names, and the assembly text decoder.
//! 2. **Core:** Register file, register locks, data memory, and three engines: an
//!    unpipelined reference, the 5-stage pipeline, and the dual-track 7/9-stage pipeline.
//! 3. **Simulation:** Loader, cycle driver, per-cycle reports, configuration, and statistics.
//!
//! ```
//! use mipsim_core::{Config, Program, Simulator};
//! use mipsim_core::sim::NullSink;
//!
//! let program = Program::parse("addi $t0, $zero, 5\nsw $t0, 0($zero)\nlw $t1, 0($zero)\n").unwrap();
//! let mut sim = Simulator::new(program, &Config::default());
//! let summary = sim.run(&mut NullSink).unwrap();
//! assert_eq!(sim.registers()[9], 5);
//! assert!(summary.cycles > 3);
//! ```

/// Common types and constants (errors, register count, word size).
pub mod common;
/// Simulator configuration (defaults, pipeline kind, hierarchical config structures).
pub mod config;
/// CPU core (architectural state, execution units, pipelines).
pub mod core;
/// Instruction set (instruction model, ABI names, text decoder).
pub mod isa;
/// Loader, cycle driver, and reports.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, locks, memory, and stats.
pub use crate::core::Cpu;
/// A loaded assembly program.
pub use crate::sim::Program;
/// Cycle driver; construct with `Simulator::new`.
pub use crate::sim::Simulator;
