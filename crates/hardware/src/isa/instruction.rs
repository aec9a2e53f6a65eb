//! Decoded MIPS instructions.
//!
//! Every instruction the simulator understands is a variant of the closed
//! [`Instruction`] enum. Register operands are resolved to indices and branch
//! targets to instruction indices by the loader, so the pipeline never sees text.
//! The enum also answers the structural questions the pipeline asks:
//! 1. **Destination:** which register (if any) the instruction writes.
//! 2. **Sources:** which registers must be free of pending writes before it executes.
//! 3. **Class:** which functional group (and dual-track lane) it belongs to.

use std::fmt;

use crate::isa::abi::register_name;

/// Opcode tag, independent of operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// `add rd, rs, rt`
    Add,
    /// `sub rd, rs, rt`
    Sub,
    /// `mul rd, rs, rt`
    Mul,
    /// `slt rd, rs, rt`
    Slt,
    /// `addi rt, rs, imm`
    Addi,
    /// `lw rt, offset(base)`
    Lw,
    /// `sw rt, offset(base)`
    Sw,
    /// `beq rs, rt, label`
    Beq,
    /// `bne rs, rt, label`
    Bne,
    /// `j label`
    J,
}

impl Opcode {
    /// Every opcode, in mnemonic order.
    pub const ALL: [Self; 10] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Slt,
        Self::Addi,
        Self::Lw,
        Self::Sw,
        Self::Beq,
        Self::Bne,
        Self::J,
    ];

    /// Assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Slt => "slt",
            Self::Addi => "addi",
            Self::Lw => "lw",
            Self::Sw => "sw",
            Self::Beq => "beq",
            Self::Bne => "bne",
            Self::J => "j",
        }
    }

    /// Looks up an opcode by mnemonic.
    pub fn from_mnemonic(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.mnemonic() == text)
    }

    /// Functional class of the opcode.
    pub const fn class(self) -> InstClass {
        match self {
            Self::Add | Self::Sub | Self::Mul | Self::Slt => InstClass::ArithRegister,
            Self::Addi => InstClass::ArithImmediate,
            Self::Lw => InstClass::Load,
            Self::Sw => InstClass::Store,
            Self::Beq | Self::Bne => InstClass::Branch,
            Self::J => InstClass::Jump,
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Functional class assigned at decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstClass {
    /// Three-register arithmetic (`add`, `sub`, `mul`, `slt`).
    ArithRegister,
    /// Register-immediate arithmetic (`addi`).
    ArithImmediate,
    /// Memory load (`lw`).
    Load,
    /// Memory store (`sw`).
    Store,
    /// Conditional branch (`beq`, `bne`).
    Branch,
    /// Unconditional jump (`j`).
    Jump,
}

impl InstClass {
    /// Execution lane in the dual-track pipeline.
    pub const fn track(self) -> Track {
        match self {
            Self::Load | Self::Store => Track::I,
            Self::ArithRegister | Self::ArithImmediate | Self::Branch | Self::Jump => Track::R,
        }
    }
}

/// Execution lane of the dual-track pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Track {
    /// Arithmetic, branch and jump lane: EX then WB.
    R,
    /// Load/store lane: EX, MEM1, MEM2 then WB.
    I,
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::R => f.write_str("R"),
            Self::I => f.write_str("I"),
        }
    }
}

/// A fully resolved instruction.
///
/// Branch and jump targets are instruction indices, not byte addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// `rd = rs + rt`
    Add { rd: usize, rs: usize, rt: usize },
    /// `rd = rs - rt`
    Sub { rd: usize, rs: usize, rt: usize },
    /// `rd = rs * rt` (low 32 bits)
    Mul { rd: usize, rs: usize, rt: usize },
    /// `rd = (rs < rt) ? 1 : 0`
    Slt { rd: usize, rs: usize, rt: usize },
    /// `rt = rs + imm`
    Addi { rt: usize, rs: usize, imm: i32 },
    /// `rt = mem[base + offset]`
    Lw { rt: usize, base: usize, offset: i32 },
    /// `mem[base + offset] = rt`
    Sw { rt: usize, base: usize, offset: i32 },
    /// `if rs == rt goto target`
    Beq { rs: usize, rt: usize, target: usize },
    /// `if rs != rt goto target`
    Bne { rs: usize, rt: usize, target: usize },
    /// `goto target`
    J { target: usize },
}

impl Instruction {
    /// Opcode tag of this instruction.
    pub const fn opcode(&self) -> Opcode {
        match self {
            Self::Add { .. } => Opcode::Add,
            Self::Sub { .. } => Opcode::Sub,
            Self::Mul { .. } => Opcode::Mul,
            Self::Slt { .. } => Opcode::Slt,
            Self::Addi { .. } => Opcode::Addi,
            Self::Lw { .. } => Opcode::Lw,
            Self::Sw { .. } => Opcode::Sw,
            Self::Beq { .. } => Opcode::Beq,
            Self::Bne { .. } => Opcode::Bne,
            Self::J { .. } => Opcode::J,
        }
    }

    /// Functional class of this instruction.
    pub const fn class(&self) -> InstClass {
        self.opcode().class()
    }

    /// Register written at write-back, if any.
    pub const fn dest(&self) -> Option<usize> {
        match *self {
            Self::Add { rd, .. }
            | Self::Sub { rd, .. }
            | Self::Mul { rd, .. }
            | Self::Slt { rd, .. } => Some(rd),
            Self::Addi { rt, .. } | Self::Lw { rt, .. } => Some(rt),
            Self::Sw { .. } | Self::Beq { .. } | Self::Bne { .. } | Self::J { .. } => None,
        }
    }

    /// Registers read to compute the result or effective address.
    ///
    /// For stores this is only the base register; the stored value is
    /// reported separately by [`Instruction::store_value_reg`].
    pub const fn operand_regs(&self) -> [Option<usize>; 2] {
        match *self {
            Self::Add { rs, rt, .. }
            | Self::Sub { rs, rt, .. }
            | Self::Mul { rs, rt, .. }
            | Self::Slt { rs, rt, .. }
            | Self::Beq { rs, rt, .. }
            | Self::Bne { rs, rt, .. } => [Some(rs), Some(rt)],
            Self::Addi { rs, .. } => [Some(rs), None],
            Self::Lw { base, .. } | Self::Sw { base, .. } => [Some(base), None],
            Self::J { .. } => [None, None],
        }
    }

    /// Register holding the value a store writes to memory.
    pub const fn store_value_reg(&self) -> Option<usize> {
        match *self {
            Self::Sw { rt, .. } => Some(rt),
            _ => None,
        }
    }

    /// Control-flow target, for branches and jumps.
    pub const fn target(&self) -> Option<usize> {
        match *self {
            Self::Beq { target, .. } | Self::Bne { target, .. } | Self::J { target } => {
                Some(target)
            }
            _ => None,
        }
    }

    /// Whether this instruction takes a number in the dual-track commit order.
    pub const fn is_sequenced(&self) -> bool {
        self.dest().is_some()
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = register_name;
        let op = self.opcode();
        match *self {
            Self::Add { rd, rs, rt }
            | Self::Sub { rd, rs, rt }
            | Self::Mul { rd, rs, rt }
            | Self::Slt { rd, rs, rt } => write!(f, "{op} {}, {}, {}", r(rd), r(rs), r(rt)),
            Self::Addi { rt, rs, imm } => write!(f, "{op} {}, {}, {imm}", r(rt), r(rs)),
            Self::Lw { rt, base, offset } | Self::Sw { rt, base, offset } => {
                write!(f, "{op} {}, {offset}({})", r(rt), r(base))
            }
            Self::Beq { rs, rt, target } | Self::Bne { rs, rt, target } => {
                write!(f, "{op} {}, {}, @{target}", r(rs), r(rt))
            }
            Self::J { target } => write!(f, "{op} @{target}"),
        }
    }
}
