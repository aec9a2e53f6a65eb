//! # Control Signal Tests
//!
//! Which side effects decode enables for each instruction form.

use mipsim_core::core::pipeline::signals::{AluOp, BranchCond, ControlSignals};
use mipsim_core::isa::abi::{REG_T0, REG_T1, REG_T2, REG_ZERO};
use mipsim_core::isa::instruction::Instruction;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(Instruction::Add { rd: REG_T2, rs: REG_T0, rt: REG_T1 }, Some(REG_T2))]
#[case(Instruction::Addi { rt: REG_T0, rs: REG_ZERO, imm: 5 }, Some(REG_T0))]
#[case(Instruction::Lw { rt: REG_T1, base: REG_ZERO, offset: 4 }, Some(REG_T1))]
#[case(Instruction::Sw { rt: REG_T1, base: REG_ZERO, offset: 4 }, None)]
#[case(Instruction::Beq { rs: REG_T0, rt: REG_T1, target: 0 }, None)]
#[case(Instruction::J { target: 0 }, None)]
fn test_destination_register(#[case] inst: Instruction, #[case] dest: Option<usize>) {
    assert_eq!(ControlSignals::decode(&inst).dest, dest);
}

#[test]
fn test_memory_forms_use_offset_as_immediate() {
    let load = ControlSignals::decode(&Instruction::Lw { rt: REG_T0, base: REG_T1, offset: -8 });
    assert!(load.mem_read && !load.mem_write);
    assert!(load.b_imm);
    assert_eq!(load.imm, -8);
    assert_eq!(load.alu, AluOp::Add);

    let store = ControlSignals::decode(&Instruction::Sw { rt: REG_T0, base: REG_T1, offset: 12 });
    assert!(store.mem_write && !store.mem_read);
    assert_eq!(store.imm, 12);
}

#[test]
fn test_control_transfers() {
    let bne = ControlSignals::decode(&Instruction::Bne { rs: REG_T0, rt: REG_T1, target: 3 });
    assert_eq!(bne.branch, Some(BranchCond::Ne));
    assert!(!bne.jump);

    let j = ControlSignals::decode(&Instruction::J { target: 3 });
    assert!(j.jump);
    assert_eq!(j.branch, None);
}
