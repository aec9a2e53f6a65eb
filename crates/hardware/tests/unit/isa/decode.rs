//! # Decoder Tests
//!
//! Operand forms, operand counts, and the error each malformed statement raises.

use mipsim_core::common::error::SimError;
use mipsim_core::isa::abi::{REG_SP, REG_T0, REG_T1, REG_T2, REG_ZERO};
use mipsim_core::isa::decode::{decode, immediate, memory_operand};
use mipsim_core::isa::instruction::Instruction;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn labels(name: &str) -> Result<usize, SimError> {
    match name {
        "top" => Ok(0),
        "done" => Ok(7),
        _ => Err(SimError::InvalidLabel(name.to_owned())),
    }
}

fn dec(stmt: &str) -> Result<Instruction, SimError> {
    let tokens: Vec<&str> = stmt.split([',', ' ']).filter(|t| !t.is_empty()).collect();
    decode(&tokens, labels)
}

#[test]
fn test_decode_every_opcode() {
    assert_eq!(
        dec("add $t2, $t0, $t1"),
        Ok(Instruction::Add { rd: REG_T2, rs: REG_T0, rt: REG_T1 })
    );
    assert_eq!(
        dec("sub $t2, $t0, $t1"),
        Ok(Instruction::Sub { rd: REG_T2, rs: REG_T0, rt: REG_T1 })
    );
    assert_eq!(
        dec("mul $t2, $t0, $t1"),
        Ok(Instruction::Mul { rd: REG_T2, rs: REG_T0, rt: REG_T1 })
    );
    assert_eq!(
        dec("slt $t2, $t0, $t1"),
        Ok(Instruction::Slt { rd: REG_T2, rs: REG_T0, rt: REG_T1 })
    );
    assert_eq!(
        dec("addi $t0, $zero, -4"),
        Ok(Instruction::Addi { rt: REG_T0, rs: REG_ZERO, imm: -4 })
    );
    assert_eq!(
        dec("lw $t1, 8($sp)"),
        Ok(Instruction::Lw { rt: REG_T1, base: REG_SP, offset: 8 })
    );
    assert_eq!(
        dec("sw $t1, -4($t0)"),
        Ok(Instruction::Sw { rt: REG_T1, base: REG_T0, offset: -4 })
    );
    assert_eq!(
        dec("beq $t0, $t1, done"),
        Ok(Instruction::Beq { rs: REG_T0, rt: REG_T1, target: 7 })
    );
    assert_eq!(
        dec("bne $t0, $zero, top"),
        Ok(Instruction::Bne { rs: REG_T0, rt: REG_ZERO, target: 0 })
    );
    assert_eq!(dec("j done"), Ok(Instruction::J { target: 7 }));
}

#[rstest]
#[case("frob $t0, $t1, $t2")]
#[case("add $t0, $t1")]
#[case("add $t0, $t1, $t2, $t3")]
#[case("j")]
#[case("lw $t0")]
#[case("addi $t0, $t0, ten")]
#[case("lw $t0, 4($t1")]
fn test_syntax_errors(#[case] stmt: &str) {
    assert!(matches!(dec(stmt), Err(SimError::Syntax(_))), "{stmt}");
}

#[rstest]
#[case("add $t0, $t1, $x9", "$x9")]
#[case("addi t0, $zero, 1", "t0")]
#[case("sw $t0, 0($t99)", "$t99")]
fn test_invalid_register(#[case] stmt: &str, #[case] bad: &str) {
    assert_eq!(dec(stmt), Err(SimError::InvalidRegister(bad.to_owned())));
}

#[test]
fn test_undefined_label() {
    assert_eq!(
        dec("beq $t0, $t1, nowhere"),
        Err(SimError::InvalidLabel("nowhere".to_owned()))
    );
}

#[rstest]
#[case("0", 0)]
#[case("42", 42)]
#[case("-42", -42)]
#[case("+7", 7)]
#[case("0x10", 16)]
#[case("-0x10", -16)]
#[case("2147483647", i32::MAX)]
#[case("-2147483648", i32::MIN)]
fn test_immediate(#[case] token: &str, #[case] value: i32) {
    assert_eq!(immediate(token), Ok(value));
}

#[test]
fn test_immediate_out_of_range() {
    assert!(immediate("2147483648").is_err());
    assert!(immediate("0x1_0000_0000").is_err());
}

#[rstest]
#[case("--5")]
#[case("+-5")]
#[case("-+5")]
#[case("0x-5")]
#[case("0x+5")]
#[case("-")]
#[case("0x")]
#[case("1 2")]
#[case("--9223372036854775808")]
#[case("99999999999999999999999")]
fn test_immediate_rejects_malformed(#[case] token: &str) {
    assert!(
        matches!(immediate(token), Err(SimError::Syntax(_))),
        "`{token}` should be a syntax error"
    );
}

#[test]
fn test_memory_operand_forms() {
    assert_eq!(memory_operand("12($t0)"), Ok((REG_T0, 12)));
    assert_eq!(memory_operand("($t0)"), Ok((REG_T0, 0)));
    assert_eq!(memory_operand("64"), Ok((REG_ZERO, 64)));
}
