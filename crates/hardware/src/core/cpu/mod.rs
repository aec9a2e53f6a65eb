//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, the container for all state
//! the pipeline stages share. It coordinates the following:
//! 1. **Architectural State:** Register file and the dual program counter.
//! 2. **Hazard State:** The register lock table.
//! 3. **Memory:** The data segment and its per-cycle change log.
//! 4. **Program Storage:** The loaded instruction sequence.
//!
//! Only pipeline stages mutate a `Cpu`, and only in the fixed order the
//! engines impose within a cycle.

/// Data segment and change log.
pub mod memory;

use crate::config::Config;
use crate::core::arch::gpr::Gpr;
use crate::core::pipeline::scoreboard::LockTable;
use crate::isa::instruction::Instruction;
use crate::sim::loader::Program;
use crate::stats::SimStats;

use self::memory::DataMemory;

/// Program counter pair.
///
/// `current` is the instruction fetch dispatches this cycle; `next` is where
/// fetch goes next. Decode and execute overwrite `next` once a control
/// transfer is known; fetch copies it into `current` at the start of its turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProgramCounter {
    /// Instruction index being fetched.
    pub current: usize,
    /// Instruction index to fetch next.
    pub next: usize,
}

/// Main CPU structure containing all processor state.
#[derive(Debug)]
pub struct Cpu {
    /// General-purpose registers.
    pub regs: Gpr,
    /// Outstanding-write counters per register.
    pub locks: LockTable,
    /// Data segment.
    pub memory: DataMemory,
    /// Program counter pair.
    pub pc: ProgramCounter,
    /// Loaded program.
    pub program: Program,
    /// Performance statistics.
    pub stats: SimStats,
    /// Emit per-stage trace events.
    pub trace: bool,
}

impl Cpu {
    /// Creates a CPU with zeroed registers and memory, ready to fetch instruction 0.
    pub fn new(program: Program, config: &Config) -> Self {
        let protected_below = if config.memory.protect_program_region {
            (program.len() as u32).saturating_mul(crate::common::WORD_BYTES)
        } else {
            0
        };
        Self {
            regs: Gpr::new(),
            locks: LockTable::new(),
            memory: DataMemory::new(config.memory.data_bytes, protected_below),
            pc: ProgramCounter::default(),
            stats: SimStats::new(program.len()),
            program,
            trace: config.general.trace_instructions,
        }
    }

    /// Instruction at `pc`, or `None` past the end of the program.
    pub fn instruction_at(&self, pc: usize) -> Option<Instruction> {
        self.program.instruction_at(pc)
    }
}
