//! # Loader Tests
//!
//! Labels, comments, error line numbers, and file loading.

use std::io::Write;

use mipsim_core::Program;
use mipsim_core::common::error::{ProgramError, SimError};
use mipsim_core::isa::abi::REG_T0;
use mipsim_core::isa::instruction::Instruction;
use pretty_assertions::assert_eq;

#[test]
fn test_forward_and_backward_labels() {
    let program = Program::parse(
        "top:  beq $t0, $zero, done\n\
               j top\n\
         done: addi $t0, $t0, 1\n",
    )
    .unwrap();
    assert_eq!(program.len(), 3);
    assert_eq!(
        program.instruction_at(0),
        Some(Instruction::Beq { rs: REG_T0, rt: 0, target: 2 })
    );
    assert_eq!(program.instruction_at(1), Some(Instruction::J { target: 0 }));
    assert_eq!(program.address_of("done"), Some(2));
    assert_eq!(program.address_of("missing"), None);
    assert_eq!(program.instruction_at(3), None);
}

#[test]
fn test_trailing_label_points_past_end() {
    let program = Program::parse("j end\nend:\n").unwrap();
    assert_eq!(program.address_of("end"), Some(1));
    assert_eq!(program.len(), 1);
}

#[test]
fn test_error_carries_line_and_text() {
    let err = Program::parse("addi $t0, $zero, 1\n\n# comment\nadd $t0, $t1, $bogus\n").unwrap_err();
    assert_eq!(err.line, 4);
    assert_eq!(err.text, "add $t0, $t1, $bogus");
    assert_eq!(err.error, SimError::InvalidRegister("$bogus".to_owned()));
    assert_eq!(err.error.exit_code(), 1);
}

#[test]
fn test_invalid_label_names() {
    for text in ["1abc: j 1abc\n", "add: j add\n", "a-b: j a\n"] {
        let err = Program::parse(text).unwrap_err();
        assert!(matches!(err.error, SimError::InvalidLabel(_)), "{text}");
        assert_eq!(err.error.exit_code(), 2);
    }
}

#[test]
fn test_empty_source() {
    let program = Program::parse("# nothing here\n\n").unwrap();
    assert!(program.is_empty());
}

#[test]
fn test_load_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "addi $t0, $zero, 5").unwrap();
    writeln!(file, "sw $t0, 0($zero)").unwrap();
    let program = Program::load_file(file.path()).unwrap();
    assert_eq!(program.len(), 2);
    assert_eq!(program.text_of(1), Some("sw $t0, 0($zero)"));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Program::load_file(dir.path().join("absent.s")).unwrap_err();
    assert!(matches!(err, ProgramError::Io { .. }));
}
