//! # Simulator Tests
//!
//! Cycle reports, the memory-limit check, fatal errors, and the behaviours
//! every pipeline organization must share.

use mipsim_core::common::error::SimError;
use mipsim_core::config::PipelineKind;
use mipsim_core::isa::abi::{REG_T0, REG_T1, REG_T2, REG_T3};
use mipsim_core::sim::NullSink;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::harness::{TestContext, config_for};

const ROUND_TRIP: &str = "addi $t0, $zero, 5\n\
                          sw $t0, 0($zero)\n\
                          lw $t1, 0($zero)\n";

#[rstest]
fn test_round_trip(
    #[values(PipelineKind::Unpipelined, PipelineKind::FiveStage, PipelineKind::DualTrack)]
    kind: PipelineKind,
) {
    let ctx = TestContext::new(ROUND_TRIP, kind).run_ok();
    assert_eq!(ctx.reg(REG_T0), 5);
    assert_eq!(ctx.reg(REG_T1), 5);
    assert_eq!(ctx.memory_image(), vec![(0, 5)]);
    let store = ctx.write_cycle(0).expect("store never reported");
    assert_eq!(store.memory_delta, vec![(0, 5)]);
    assert!(ctx.sim.cpu.locks.all_clear());
}

#[test]
fn test_reports_start_at_cycle_zero() {
    let ctx = TestContext::new(ROUND_TRIP, PipelineKind::FiveStage).run_ok();
    let cycles: Vec<u64> = ctx.reports.iter().map(|r| r.cycle).collect();
    let expected: Vec<u64> = (0..=ctx.sim.cycles()).collect();
    assert_eq!(cycles, expected);
    assert_eq!(ctx.reports[0].registers, [0; 32]);
    assert!(ctx.reports[0].memory_delta.is_empty());
    // Only one cycle writes memory.
    assert_eq!(ctx.reports.iter().filter(|r| !r.memory_delta.is_empty()).count(), 1);
}

#[test]
fn test_five_stage_round_trip_timing() {
    // The store waits one cycle in MEM for $t0's lock, so it writes in cycle 6.
    let ctx = TestContext::new(ROUND_TRIP, PipelineKind::FiveStage).run_ok();
    assert_eq!(ctx.write_cycle(0).map(|r| r.cycle), Some(6));
    assert_eq!(ctx.sim.cycles(), 8);
}

#[rstest]
#[case(PipelineKind::Unpipelined)]
#[case(PipelineKind::FiveStage)]
#[case(PipelineKind::DualTrack)]
fn test_memory_limit_exceeded(#[case] kind: PipelineKind) {
    let mut config = config_for(kind);
    config.memory.data_bytes = 8;
    let mut ctx = TestContext::with_config("addi $t0, $zero, 1\naddi $t1, $zero, 2\n", config);
    let err = ctx.run().unwrap_err();
    assert_eq!(
        err.error,
        SimError::MemoryLimitExceeded {
            instructions: 2,
            capacity: 2
        }
    );
    assert_eq!(err.error.exit_code(), 5);
    assert_eq!(err.cycles, 0);
    assert_eq!(err.pc, None);
    assert_eq!(ctx.sim.cycles(), 0);
    assert!(ctx.reports.is_empty());
}

#[test]
fn test_program_just_below_capacity_runs() {
    let mut config = config_for(PipelineKind::FiveStage);
    config.memory.data_bytes = 12;
    let mut ctx = TestContext::with_config("addi $t0, $zero, 1\naddi $t1, $zero, 2\n", config);
    assert!(ctx.run().is_ok());
}

#[rstest]
#[case(PipelineKind::Unpipelined, 1)]
#[case(PipelineKind::FiveStage, 3)]
#[case(PipelineKind::DualTrack, 6)]
fn test_misaligned_load_is_fatal(#[case] kind: PipelineKind, #[case] cycles: u64) {
    let mut ctx = TestContext::new("lw $t0, 2($zero)\naddi $t1, $zero, 1\n", kind);
    let err = ctx.run().unwrap_err();
    assert_eq!(err.error, SimError::InvalidAddress(2));
    assert_eq!(err.pc, Some(0));
    assert_eq!(err.instruction.as_deref(), Some("lw $t0, 2($zero)"));
    assert_eq!(err.cycles, cycles);
    assert_eq!(err.error.exit_code(), 3);
}

#[rstest]
#[case("sw $t0, -4($zero)\n", -4)]
#[case("addi $t0, $zero, 4096\nlw $t1, 0($t0)\n", 4096)]
fn test_out_of_range_address(#[case] source: &str, #[case] addr: i64) {
    let mut config = config_for(PipelineKind::FiveStage);
    config.memory.data_bytes = 4096;
    let mut ctx = TestContext::with_config(source, config);
    assert_eq!(ctx.run().unwrap_err().error, SimError::InvalidAddress(addr));
}

#[test]
fn test_protected_program_region() {
    let mut config = config_for(PipelineKind::FiveStage);
    config.memory.protect_program_region = true;
    let mut ctx = TestContext::with_config(ROUND_TRIP, config);
    let err = ctx.run().unwrap_err();
    assert_eq!(err.error, SimError::InvalidAddress(0));
    assert_eq!(err.pc, Some(1));
}

#[rstest]
fn test_writes_to_zero_are_ignored(
    #[values(PipelineKind::Unpipelined, PipelineKind::FiveStage, PipelineKind::DualTrack)]
    kind: PipelineKind,
) {
    let ctx = TestContext::new("addi $zero, $zero, 9\nadd $t0, $zero, $zero\n", kind).run_ok();
    assert_eq!(ctx.reg(0), 0);
    assert_eq!(ctx.reg(REG_T0), 0);
}

#[rstest]
fn test_loop_and_jump(
    #[values(PipelineKind::Unpipelined, PipelineKind::FiveStage, PipelineKind::DualTrack)]
    kind: PipelineKind,
) {
    let ctx = TestContext::new(
        "      addi $t0, $zero, 4\n\
               addi $t1, $zero, 0\n\
         loop: add $t1, $t1, $t0\n\
               addi $t0, $t0, -1\n\
               bne $t0, $zero, loop\n\
               j out\n\
               addi $t2, $zero, 99\n\
         out:  sw $t1, 16($zero)\n\
               slt $t3, $zero, $t1\n",
        kind,
    )
    .run_ok();
    assert_eq!(ctx.reg(REG_T1), 10);
    assert_eq!(ctx.reg(REG_T2), 0);
    assert_eq!(ctx.reg(REG_T3), 1);
    assert_eq!(ctx.mem(16), 10);
    assert_eq!(ctx.sim.stats().exec_counts[6], 0);
    assert!(ctx.sim.cpu.locks.all_clear());
}

#[rstest]
fn test_empty_program_finishes(
    #[values(PipelineKind::Unpipelined, PipelineKind::FiveStage, PipelineKind::DualTrack)]
    kind: PipelineKind,
) {
    let mut ctx = TestContext::new("", kind);
    let summary = ctx.run().unwrap();
    assert_eq!(summary.cycles, 1);
    assert_eq!(summary.stats.instructions_retired, 0);
}

#[test]
fn test_step_and_run_agree() {
    let mut stepped = TestContext::new(ROUND_TRIP, PipelineKind::DualTrack);
    stepped.step_until_done(100);
    let mut ran = TestContext::new(ROUND_TRIP, PipelineKind::DualTrack);
    let summary = ran.sim.run(&mut NullSink).unwrap();
    assert_eq!(stepped.sim.cycles(), summary.cycles);
    assert_eq!(stepped.sim.registers(), ran.sim.registers());
    assert!(stepped.sim.is_finished());
}
