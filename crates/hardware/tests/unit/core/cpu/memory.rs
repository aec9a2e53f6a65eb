//! # Data Memory Tests

use mipsim_core::common::error::SimError;
use mipsim_core::core::cpu::memory::DataMemory;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn test_capacity_rounds_down_to_words() {
    assert_eq!(DataMemory::new(10, 0).capacity_words(), 2);
}

#[rstest]
#[case(0, true)]
#[case(60, true)]
#[case(64, false)]
#[case(2, false)]
#[case(-4, false)]
#[case(i64::from(i32::MAX) + 1, false)]
fn test_check_address(#[case] addr: i64, #[case] ok: bool) {
    let mem = DataMemory::new(64, 0);
    let result = mem.check_address(addr);
    if ok {
        assert_eq!(result, Ok(addr as u32));
    } else {
        assert_eq!(result, Err(SimError::InvalidAddress(addr)));
    }
}

#[test]
fn test_protected_region() {
    let mem = DataMemory::new(64, 8);
    assert!(mem.check_address(4).is_err());
    assert_eq!(mem.check_address(8), Ok(8));
}

#[test]
fn test_delta_tracks_last_write_per_address() {
    let mut mem = DataMemory::new(64, 0);
    mem.write(8, 1);
    mem.write(4, 2);
    mem.write(8, 3);
    let delta: Vec<(u32, i32)> = mem.delta().iter().map(|(&a, &v)| (a, v)).collect();
    assert_eq!(delta, vec![(4, 2), (8, 3)]);
    mem.clear_delta();
    assert!(mem.delta().is_empty());
    assert_eq!(mem.read(8), 3);
}

#[test]
fn test_non_zero_lists_byte_addresses() {
    let mut mem = DataMemory::new(64, 0);
    mem.write(12, -7);
    mem.write(0, 1);
    mem.write(0, 0);
    assert_eq!(mem.non_zero().collect::<Vec<_>>(), vec![(12, -7)]);
}
