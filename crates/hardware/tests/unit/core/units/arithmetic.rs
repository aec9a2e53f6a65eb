//! # Functional Unit Tests
//!
//! Wrapping arithmetic, set-less-than, branch conditions, and effective addresses.

use mipsim_core::common::error::SimError;
use mipsim_core::core::cpu::memory::DataMemory;
use mipsim_core::core::pipeline::signals::{AluOp, BranchCond};
use mipsim_core::core::units::alu::Alu;
use mipsim_core::core::units::bru::Bru;
use mipsim_core::core::units::lsu::Lsu;
use rstest::rstest;

#[rstest]
#[case(AluOp::Add, 2, 3, 5)]
#[case(AluOp::Add, i32::MAX, 1, i32::MIN)]
#[case(AluOp::Sub, 2, 3, -1)]
#[case(AluOp::Sub, i32::MIN, 1, i32::MAX)]
#[case(AluOp::Mul, -4, 6, -24)]
#[case(AluOp::Mul, 0x1_0000, 0x1_0000, 0)]
#[case(AluOp::Slt, -1, 0, 1)]
#[case(AluOp::Slt, 0, -1, 0)]
#[case(AluOp::Slt, 3, 3, 0)]
fn test_alu(#[case] op: AluOp, #[case] a: i32, #[case] b: i32, #[case] expected: i32) {
    assert_eq!(Alu::execute(op, a, b), expected);
}

#[test]
fn test_branch_conditions() {
    assert!(Bru::taken(BranchCond::Eq, 4, 4));
    assert!(!Bru::taken(BranchCond::Eq, 4, 5));
    assert!(Bru::taken(BranchCond::Ne, 4, 5));
    assert_eq!(Bru::next_pc(BranchCond::Ne, 1, 1, 10, 2), 11);
    assert_eq!(Bru::next_pc(BranchCond::Eq, 1, 1, 10, 2), 2);
}

#[test]
fn test_effective_address_does_not_wrap() {
    let mem = DataMemory::new(64, 0);
    assert_eq!(Lsu::effective_address(&mem, 8, -4), Ok(4));
    assert_eq!(
        Lsu::effective_address(&mem, i32::MAX, 4),
        Err(SimError::InvalidAddress(i64::from(i32::MAX) + 4))
    );
}
