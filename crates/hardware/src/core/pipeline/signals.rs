//! Pipeline control signals and operation types.
//!
//! This module defines the signals decode attaches to every instruction. It performs:
//! 1. **Operation Classification:** ALU operation and branch condition.
//! 2. **Operand Selection:** Whether ALU operand B is `rt` or the immediate.
//! 3. **Memory and Register Control:** Which side effects the later stages perform.

use crate::isa::instruction::{InstClass, Instruction};

/// ALU operation types.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOp {
    /// Addition (also used for address computation).
    #[default]
    Add,
    /// Subtraction.
    Sub,
    /// Multiplication (low word).
    Mul,
    /// Set less than (signed).
    Slt,
}

/// Comparison performed by a conditional branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BranchCond {
    /// `beq`
    Eq,
    /// `bne`
    Ne,
}

/// Control signals for pipeline execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlSignals {
    /// Functional class the instruction was decoded into.
    pub class: InstClass,
    /// Destination register written at write-back.
    pub dest: Option<usize>,
    /// Enable memory read operation (load).
    pub mem_read: bool,
    /// Enable memory write operation (store).
    pub mem_write: bool,
    /// Condition of a conditional branch.
    pub branch: Option<BranchCond>,
    /// Instruction is an unconditional jump.
    pub jump: bool,
    /// ALU operation to perform.
    pub alu: AluOp,
    /// ALU operand B is the immediate rather than `rt`.
    pub b_imm: bool,
    /// Sign-extended immediate or memory offset.
    pub imm: i32,
}

impl ControlSignals {
    /// Derives the control signals for `inst`.
    pub const fn decode(inst: &Instruction) -> Self {
        let mut ctrl = Self {
            class: inst.class(),
            dest: inst.dest(),
            mem_read: false,
            mem_write: false,
            branch: None,
            jump: false,
            alu: AluOp::Add,
            b_imm: false,
            imm: 0,
        };
        match *inst {
            Instruction::Add { .. } => {}
            Instruction::Sub { .. } => ctrl.alu = AluOp::Sub,
            Instruction::Mul { .. } => ctrl.alu = AluOp::Mul,
            Instruction::Slt { .. } => ctrl.alu = AluOp::Slt,
            Instruction::Addi { imm, .. } => {
                ctrl.b_imm = true;
                ctrl.imm = imm;
            }
            Instruction::Lw { offset, .. } => {
                ctrl.mem_read = true;
                ctrl.b_imm = true;
                ctrl.imm = offset;
            }
            Instruction::Sw { offset, .. } => {
                ctrl.mem_write = true;
                ctrl.b_imm = true;
                ctrl.imm = offset;
            }
            Instruction::Beq { .. } => ctrl.branch = Some(BranchCond::Eq),
            Instruction::Bne { .. } => ctrl.branch = Some(BranchCond::Ne),
            Instruction::J { .. } => ctrl.jump = true,
        }
        ctrl
    }
}
