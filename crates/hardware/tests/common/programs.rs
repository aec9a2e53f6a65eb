use mipsim_core::Program;
use mipsim_core::isa::abi::{REG_T0, REG_ZERO};
use mipsim_core::isa::instruction::Instruction;
use proptest::prelude::*;

/// Registers the generated programs draw from (`$zero`, `$t0`-`$t3`).
fn any_reg() -> impl Strategy<Value = usize> {
    prop_oneof![Just(REG_ZERO), (REG_T0..REG_T0 + 4)]
}

/// Word-aligned offsets from `$zero` into the first 64 bytes of data memory.
fn any_offset() -> impl Strategy<Value = i32> {
    (0..16_i32).prop_map(|w| w * 4)
}

/// Any straight-line instruction (no branches or jumps).
pub fn any_straight_line_inst() -> impl Strategy<Value = Instruction> {
    prop_oneof![
        (any_reg(), any_reg(), any_reg()).prop_map(|(rd, rs, rt)| Instruction::Add { rd, rs, rt }),
        (any_reg(), any_reg(), any_reg()).prop_map(|(rd, rs, rt)| Instruction::Sub { rd, rs, rt }),
        (any_reg(), any_reg(), any_reg()).prop_map(|(rd, rs, rt)| Instruction::Mul { rd, rs, rt }),
        (any_reg(), any_reg(), any_reg()).prop_map(|(rd, rs, rt)| Instruction::Slt { rd, rs, rt }),
        (any_reg(), any_reg(), -50..50_i32).prop_map(|(rt, rs, imm)| Instruction::Addi { rt, rs, imm }),
        (any_reg(), any_offset()).prop_map(|(rt, offset)| Instruction::Lw {
            rt,
            base: REG_ZERO,
            offset
        }),
        (any_reg(), any_offset()).prop_map(|(rt, offset)| Instruction::Sw {
            rt,
            base: REG_ZERO,
            offset
        }),
    ]
}

/// Straight-line programs of 1 to 24 instructions.
pub fn any_straight_line_program() -> impl Strategy<Value = Program> {
    prop::collection::vec(any_straight_line_inst(), 1..24).prop_map(Program::from_instructions)
}
