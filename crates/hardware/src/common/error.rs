//! Simulator error definitions.
//!
//! Every malformed program condition is fatal. This module provides:
//! 1. **`SimError`:** The five fatal error kinds and their process exit codes.
//! 2. **`Fault`:** A `SimError` raised by a pipeline stage, tagged with the instruction's PC.
//! 3. **`LoadError`:** A `SimError` raised while parsing program text, tagged with the source line.
//! 4. **`FatalError`:** What the simulator hands back to its caller when a run aborts.

use thiserror::Error;

/// Fatal conditions detected while loading or simulating a program.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SimError {
    /// A register operand names no architectural register.
    #[error("invalid register `{0}`")]
    InvalidRegister(String),

    /// A label is malformed, undefined, or defined more than once.
    #[error("invalid label `{0}`")]
    InvalidLabel(String),

    /// A data address is misaligned, out of range, or inside the program region.
    #[error("invalid address {0}")]
    InvalidAddress(i64),

    /// An instruction or operand could not be parsed.
    #[error("syntax error: {0}")]
    Syntax(String),

    /// The program does not fit below the data-segment capacity.
    #[error("memory limit exceeded: {instructions} instructions do not fit in {capacity} words")]
    MemoryLimitExceeded {
        /// Number of instructions in the program.
        instructions: usize,
        /// Data-segment capacity in words.
        capacity: usize,
    },
}

impl SimError {
    /// Process exit code conventionally associated with this error.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidRegister(_) => 1,
            Self::InvalidLabel(_) => 2,
            Self::InvalidAddress(_) => 3,
            Self::Syntax(_) => 4,
            Self::MemoryLimitExceeded { .. } => 5,
        }
    }
}

/// An error raised by a pipeline stage while processing the instruction at `pc`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("instruction {pc}: {error}")]
pub struct Fault {
    /// Instruction index of the faulting instruction.
    pub pc: usize,
    /// The underlying error.
    #[source]
    pub error: SimError,
}

impl Fault {
    /// Creates a fault for the instruction at `pc`.
    pub const fn new(pc: usize, error: SimError) -> Self {
        Self { pc, error }
    }
}

/// An error raised while parsing program text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("line {line}: {error} (`{text}`)")]
pub struct LoadError {
    /// One-based source line number.
    pub line: usize,
    /// The offending source line with comments stripped.
    pub text: String,
    /// The underlying error.
    #[source]
    pub error: SimError,
}

/// A run that stopped on a fatal error.
///
/// Carries everything a report needs: the error, the offending instruction
/// (when one is to blame), and the number of cycles simulated.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{error} after {cycles} cycles")]
pub struct FatalError {
    /// The underlying error.
    #[source]
    pub error: SimError,
    /// Instruction index of the offending instruction, if any.
    pub pc: Option<usize>,
    /// Source text of the offending instruction, if any.
    pub instruction: Option<String>,
    /// Cycles simulated before the error was raised.
    pub cycles: u64,
}

/// Failure to read or parse a program file.
#[derive(Debug, Error)]
pub enum ProgramError {
    /// The file could not be read.
    #[error("could not read `{path}`: {source}")]
    Io {
        /// Path that was requested.
        path: std::path::PathBuf,
        /// The I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The file was read but does not hold a valid program.
    #[error(transparent)]
    Load(#[from] LoadError),
}
