//! # General-Purpose Register Tests

use mipsim_core::core::arch::gpr::Gpr;

#[test]
fn test_gpr_new_initializes_to_zero() {
    let gpr = Gpr::new();
    assert_eq!(gpr.snapshot(), [0; 32]);
}

#[test]
fn test_gpr_write_zero_ignored() {
    let mut gpr = Gpr::new();
    gpr.write(0, -1);
    assert_eq!(gpr.read(0), 0);
}

#[test]
fn test_gpr_write_all_registers() {
    let mut gpr = Gpr::new();
    for i in 1..32 {
        gpr.write(i, i as i32 * -3);
    }
    for i in 1..32 {
        assert_eq!(gpr.read(i), i as i32 * -3);
    }
    assert_eq!(gpr.snapshot()[31], -93);
}
