//! MIPS register names.
//!
//! Maps the conventional assembler register names (`$t0`, `$sp`, ...) and
//! the numeric forms (`$0`-`$31`) to register indices.

use crate::common::constants::NUM_REGS;

/// Register $0 (`$zero`, always zero).
pub const REG_ZERO: usize = 0;
/// Register $2 (`$v0`, first return value).
pub const REG_V0: usize = 2;
/// Register $8 (`$t0`, first temporary).
pub const REG_T0: usize = 8;
/// Register $9 (`$t1`).
pub const REG_T1: usize = 9;
/// Register $10 (`$t2`).
pub const REG_T2: usize = 10;
/// Register $11 (`$t3`).
pub const REG_T3: usize = 11;
/// Register $16 (`$s0`, first saved register).
pub const REG_S0: usize = 16;
/// Register $29 (`$sp`, stack pointer).
pub const REG_SP: usize = 29;
/// Register $31 (`$ra`, return address).
pub const REG_RA: usize = 31;

/// Conventional name of every register, indexed by register number.
const NAMES: [&str; NUM_REGS] = [
    "zero", "at", "v0", "v1", "a0", "a1", "a2", "a3", //
    "t0", "t1", "t2", "t3", "t4", "t5", "t6", "t7", //
    "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", //
    "t8", "t9", "k0", "k1", "gp", "sp", "s8", "ra",
];

/// Resolves a register operand such as `$t0`, `$zero` or `$17`.
///
/// Returns `None` when the token is not a register name.
pub fn register_index(token: &str) -> Option<usize> {
    let name = token.strip_prefix('$')?;
    if let Some(idx) = NAMES.iter().position(|&n| n == name) {
        return Some(idx);
    }
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Reject forms like `$007`; the numeric name is canonical.
    if name.len() > 1 && name.starts_with('0') {
        return None;
    }
    name.parse::<usize>().ok().filter(|&idx| idx < NUM_REGS)
}

/// Conventional name of register `idx` including the `$` sigil.
pub fn register_name(idx: usize) -> String {
    NAMES
        .get(idx)
        .map_or_else(|| format!("${idx}"), |name| format!("${name}"))
}
