//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the state held at every stage boundary of both pipeline
//! organizations:
//! 1. **`Latch`:** The four-state slot (empty, bubble, instruction, drain marker).
//! 2. **Entries:** What an instruction carries between stages, growing as it moves
//!    downstream (decoded signals, operand values, results, addresses).
//! 3. **Sequence Numbers:** Dispatch-order tags for dual-track in-order commit.
//!
//! Latches are always replaced wholesale; a stage never patches a field of an
//! entry that is still owned by another stage.

use std::fmt;

use crate::core::pipeline::signals::ControlSignals;
use crate::isa::instruction::Instruction;

/// Dispatch-order number of a register-writing instruction (dual-track only).
///
/// Numbering starts at 1; the default value 0 means "nothing committed yet".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeqNo(pub u64);

impl SeqNo {
    /// The number that follows this one.
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for SeqNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Contents of one stage-boundary latch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Latch<T> {
    /// Nothing has ever been placed here (reset state).
    Empty,
    /// A no-op slot injected by a stall.
    Bubble,
    /// An in-flight instruction.
    Instruction(T),
    /// Fetch ran past the end of the program; everything behind this is done.
    Drain,
}

impl<T> Default for Latch<T> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<T> Latch<T> {
    /// True unless the latch holds an instruction.
    pub const fn is_idle(&self) -> bool {
        !matches!(self, Self::Instruction(_))
    }

    /// True if the latch holds an instruction.
    pub const fn is_occupied(&self) -> bool {
        matches!(self, Self::Instruction(_))
    }

    /// Borrows the held instruction entry, if any.
    pub const fn entry(&self) -> Option<&T> {
        match self {
            Self::Instruction(entry) => Some(entry),
            _ => None,
        }
    }

    /// Moves the contents out, leaving the latch `Empty`.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Splits into the held entry or an equivalent sentinel of another entry type.
    ///
    /// Stages use this to pass `Bubble` and `Drain` downstream unchanged.
    pub fn into_entry<U>(self) -> Result<T, Latch<U>> {
        match self {
            Self::Instruction(entry) => Ok(entry),
            Self::Empty => Err(Latch::Empty),
            Self::Bubble => Err(Latch::Bubble),
            Self::Drain => Err(Latch::Drain),
        }
    }
}

/// Entry leaving a fetch stage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchEntry {
    /// Instruction index.
    pub pc: usize,
    /// The fetched instruction.
    pub inst: Instruction,
    /// Commit-order number (dual-track register writers only).
    pub seq: Option<SeqNo>,
}

/// Entry leaving a decode stage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeEntry {
    /// Instruction index.
    pub pc: usize,
    /// The instruction.
    pub inst: Instruction,
    /// Control signals derived at decode.
    pub ctrl: ControlSignals,
    /// Commit-order number (dual-track register writers only).
    pub seq: Option<SeqNo>,
}

/// Entry leaving the dual-track register-read stage: operands captured.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperandEntry {
    /// Instruction index.
    pub pc: usize,
    /// The instruction.
    pub inst: Instruction,
    /// Control signals derived at decode.
    pub ctrl: ControlSignals,
    /// Commit-order number.
    pub seq: Option<SeqNo>,
    /// Value of the first source register (`rs` or `base`).
    pub rv1: i32,
    /// Value of the second source register (`rt`), 0 if unused.
    pub rv2: i32,
    /// Value a store writes to memory.
    pub store_data: i32,
}

/// Entry leaving an execute stage bound for memory access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExMemEntry {
    /// Instruction index.
    pub pc: usize,
    /// The instruction.
    pub inst: Instruction,
    /// Control signals derived at decode.
    pub ctrl: ControlSignals,
    /// Commit-order number.
    pub seq: Option<SeqNo>,
    /// ALU result (arithmetic) or validated byte address (load/store).
    pub result: i32,
    /// Validated byte address for loads and stores.
    pub addr: u32,
    /// Value a store writes to memory (dual-track captures it at register read).
    pub store_data: i32,
}

/// Entry waiting in front of write-back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemWbEntry {
    /// Instruction index.
    pub pc: usize,
    /// The instruction.
    pub inst: Instruction,
    /// Control signals derived at decode.
    pub ctrl: ControlSignals,
    /// Commit-order number.
    pub seq: Option<SeqNo>,
    /// Value written to the destination register.
    pub result: i32,
}
