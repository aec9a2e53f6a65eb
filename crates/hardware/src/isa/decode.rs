//! MIPS Assembly Decoder.
//!
//! This module turns the tokens of one assembly statement into an [`Instruction`].
//! It performs:
//! 1. **Opcode Lookup:** Unknown mnemonics are syntax errors.
//! 2. **Operand Resolution:** Register names become indices, immediates are parsed,
//!    and `offset($base)` memory operands are split into base and offset.
//! 3. **Label Resolution:** Branch and jump labels are resolved through a caller-supplied
//!    lookup so the decoder stays independent of the program loader.

use crate::common::error::SimError;
use crate::isa::abi::{REG_ZERO, register_index};
use crate::isa::instruction::{Instruction, Opcode};

/// Decodes one statement (mnemonic followed by its operands).
///
/// # Arguments
///
/// * `tokens` - The mnemonic and operand tokens, separators already removed.
/// * `resolve` - Maps a label to the index of the instruction it names.
///
/// # Returns
///
/// The decoded instruction, or the first error found in its operands.
pub fn decode<F>(tokens: &[&str], resolve: F) -> Result<Instruction, SimError>
where
    F: Fn(&str) -> Result<usize, SimError>,
{
    let (&mnemonic, operands) = tokens
        .split_first()
        .ok_or_else(|| SimError::Syntax("empty statement".to_owned()))?;
    let opcode = Opcode::from_mnemonic(mnemonic)
        .ok_or_else(|| SimError::Syntax(format!("unknown instruction `{mnemonic}`")))?;

    let expected = if opcode == Opcode::J {
        1
    } else if matches!(opcode, Opcode::Lw | Opcode::Sw) {
        2
    } else {
        3
    };
    if operands.len() != expected {
        return Err(SimError::Syntax(format!(
            "`{mnemonic}` takes {expected} operands, found {}",
            operands.len()
        )));
    }

    let inst = match opcode {
        Opcode::Add | Opcode::Sub | Opcode::Mul | Opcode::Slt => {
            let rd = reg(operands[0])?;
            let rs = reg(operands[1])?;
            let rt = reg(operands[2])?;
            match opcode {
                Opcode::Add => Instruction::Add { rd, rs, rt },
                Opcode::Sub => Instruction::Sub { rd, rs, rt },
                Opcode::Mul => Instruction::Mul { rd, rs, rt },
                _ => Instruction::Slt { rd, rs, rt },
            }
        }
        Opcode::Addi => Instruction::Addi {
            rt: reg(operands[0])?,
            rs: reg(operands[1])?,
            imm: immediate(operands[2])?,
        },
        Opcode::Lw | Opcode::Sw => {
            let rt = reg(operands[0])?;
            let (base, offset) = memory_operand(operands[1])?;
            if opcode == Opcode::Lw {
                Instruction::Lw { rt, base, offset }
            } else {
                Instruction::Sw { rt, base, offset }
            }
        }
        Opcode::Beq | Opcode::Bne => {
            let rs = reg(operands[0])?;
            let rt = reg(operands[1])?;
            let target = resolve(operands[2])?;
            if opcode == Opcode::Beq {
                Instruction::Beq { rs, rt, target }
            } else {
                Instruction::Bne { rs, rt, target }
            }
        }
        Opcode::J => Instruction::J {
            target: resolve(operands[0])?,
        },
    };
    Ok(inst)
}

fn reg(token: &str) -> Result<usize, SimError> {
    register_index(token).ok_or_else(|| SimError::InvalidRegister(token.to_owned()))
}

/// Parses a signed decimal or `0x`-prefixed hexadecimal immediate.
pub fn immediate(token: &str) -> Result<i32, SimError> {
    let syntax = || SimError::Syntax(format!("bad immediate `{token}`"));
    let (negative, digits) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };
    let (radix, body) = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) => (16, hex),
        None => (10, digits),
    };
    // `from_str_radix` takes a sign of its own; only bare digits may reach it.
    if body.is_empty() || !body.chars().all(|c| c.is_digit(radix)) {
        return Err(syntax());
    }
    let magnitude = i64::from_str_radix(body, radix).map_err(|_| syntax())?;
    let value = if negative {
        magnitude.checked_neg().ok_or_else(syntax)?
    } else {
        magnitude
    };
    i32::try_from(value).map_err(|_| syntax())
}

/// Splits a memory operand into `(base register, offset)`.
///
/// Accepts `offset($reg)`, `($reg)` and a bare absolute address.
pub fn memory_operand(token: &str) -> Result<(usize, i32), SimError> {
    let Some(inner) = token.strip_suffix(')') else {
        return Ok((REG_ZERO, immediate(token)?));
    };
    let (offset, base) = inner
        .split_once('(')
        .ok_or_else(|| SimError::Syntax(format!("bad memory operand `{token}`")))?;
    let offset = if offset.is_empty() {
        0
    } else {
        immediate(offset)?
    };
    Ok((reg(base)?, offset))
}
