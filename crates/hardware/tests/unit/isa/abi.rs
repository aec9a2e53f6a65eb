//! # Register Name Tests

use mipsim_core::isa::abi::*;
use rstest::rstest;

#[rstest]
#[case("$zero", REG_ZERO)]
#[case("$0", REG_ZERO)]
#[case("$v0", REG_V0)]
#[case("$t0", REG_T0)]
#[case("$t1", REG_T1)]
#[case("$s0", REG_S0)]
#[case("$16", REG_S0)]
#[case("$sp", REG_SP)]
#[case("$ra", REG_RA)]
#[case("$31", REG_RA)]
fn test_register_index_accepts(#[case] token: &str, #[case] idx: usize) {
    assert_eq!(register_index(token), Some(idx));
}

#[rstest]
#[case("t0")]
#[case("$")]
#[case("$32")]
#[case("$t10")]
#[case("$07")]
#[case("$-1")]
#[case("$T0")]
fn test_register_index_rejects(#[case] token: &str) {
    assert_eq!(register_index(token), None);
}

#[test]
fn test_register_name_round_trips() {
    for idx in 0..32 {
        assert_eq!(register_index(&register_name(idx)), Some(idx));
    }
}
