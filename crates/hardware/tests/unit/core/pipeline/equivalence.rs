//! # Pipeline Equivalence Properties
//!
//! For straight-line programs every pipelined organization must leave exactly
//! the architectural state of the unpipelined reference, release every lock,
//! and (dual-track) commit register writes in sequence order.

use mipsim_core::Program;
use mipsim_core::config::PipelineKind;
use proptest::prelude::*;

use crate::common::harness::{TestContext, config_for};
use crate::common::programs::any_straight_line_program;

fn simulate(program: &Program, kind: PipelineKind) -> TestContext {
    TestContext::from_program(program.clone(), config_for(kind)).run_ok()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_five_stage_matches_reference(program in any_straight_line_program()) {
        let reference = simulate(&program, PipelineKind::Unpipelined);
        let piped = simulate(&program, PipelineKind::FiveStage);
        prop_assert_eq!(piped.sim.registers(), reference.sim.registers());
        prop_assert_eq!(piped.memory_image(), reference.memory_image());
        prop_assert_eq!(&piped.sim.stats().exec_counts, &reference.sim.stats().exec_counts);
        prop_assert!(piped.sim.cpu.locks.all_clear());
        prop_assert!(piped.sim.cycles() >= reference.sim.cycles());
    }

    #[test]
    fn prop_dual_track_matches_reference(program in any_straight_line_program()) {
        let reference = simulate(&program, PipelineKind::Unpipelined);
        let piped = simulate(&program, PipelineKind::DualTrack);
        prop_assert_eq!(piped.sim.registers(), reference.sim.registers());
        prop_assert_eq!(piped.memory_image(), reference.memory_image());
        prop_assert!(piped.sim.cpu.locks.all_clear());

        let engine = piped.sim.pipeline.as_dual_track().unwrap();
        let writers = program.instructions().iter().filter(|i| i.is_sequenced()).count();
        prop_assert_eq!(engine.commit_log().len(), writers);
        prop_assert!(engine.commit_log().windows(2).all(|w| w[1].0 == w[0].0 + 1));
    }

    #[test]
    fn prop_every_cycle_is_reported(program in any_straight_line_program()) {
        let ctx = simulate(&program, PipelineKind::FiveStage);
        prop_assert_eq!(ctx.reports.len() as u64, ctx.sim.cycles() + 1);
        prop_assert_eq!(ctx.reports.last().map(|r| r.registers), Some(ctx.sim.registers()));
    }
}
