//! Assembly Program Loader.
//!
//! This module turns MIPS assembly text into a [`Program`]. It performs:
//! 1. **Tokenizing:** Strips `#` comments and splits statements on commas and whitespace.
//! 2. **Label Collection:** Accepts `label:` on its own line or in front of an
//!    instruction (`label: inst`, `label:inst`, `label : inst`), rejecting malformed
//!    and duplicate labels.
//! 3. **Decoding:** Resolves every statement, including branch and jump labels, into
//!    an [`Instruction`] so that no text reaches the pipeline.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::common::error::{LoadError, ProgramError, SimError};
use crate::isa::decode::decode;
use crate::isa::instruction::{Instruction, Opcode};

/// A loaded program: instructions, their source text, and the label table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
    source: Vec<String>,
    labels: HashMap<String, usize>,
}

/// One statement gathered in the first pass.
struct Statement {
    line: usize,
    text: String,
    tokens: Vec<String>,
}

impl Program {
    /// Parses assembly text.
    ///
    /// # Returns
    ///
    /// The program, or the first error with its one-based line number.
    pub fn parse(text: &str) -> Result<Self, LoadError> {
        let mut labels = HashMap::new();
        let mut statements = Vec::new();

        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            let code = raw.split('#').next().unwrap_or_default().trim();
            let fail = |error| LoadError {
                line,
                text: code.to_owned(),
                error,
            };
            let mut tokens: Vec<String> = code
                .split([',', ' ', '\t'])
                .filter(|t| !t.is_empty())
                .map(str::to_owned)
                .collect();
            if tokens.is_empty() {
                continue;
            }

            if let Some(label) = split_label(&mut tokens) {
                if !is_valid_label(&label) {
                    return Err(fail(SimError::InvalidLabel(label)));
                }
                if labels.insert(label.clone(), statements.len()).is_some() {
                    return Err(fail(SimError::InvalidLabel(label)));
                }
            }
            if !tokens.is_empty() {
                statements.push(Statement {
                    line,
                    text: tokens_to_text(&tokens),
                    tokens,
                });
            }
        }

        let mut instructions = Vec::with_capacity(statements.len());
        let mut source = Vec::with_capacity(statements.len());
        for stmt in statements {
            let tokens: Vec<&str> = stmt.tokens.iter().map(String::as_str).collect();
            let inst = decode(&tokens, |name| {
                labels
                    .get(name)
                    .copied()
                    .ok_or_else(|| SimError::InvalidLabel(name.to_owned()))
            })
            .map_err(|error| LoadError {
                line: stmt.line,
                text: stmt.text.clone(),
                error,
            })?;
            instructions.push(inst);
            source.push(stmt.text);
        }

        Ok(Self {
            instructions,
            source,
            labels,
        })
    }

    /// Reads and parses an assembly file.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, ProgramError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ProgramError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&text)?)
    }

    /// Builds a program directly from decoded instructions (no labels).
    pub fn from_instructions(instructions: Vec<Instruction>) -> Self {
        let source = instructions.iter().map(ToString::to_string).collect();
        Self {
            instructions,
            source,
            labels: HashMap::new(),
        }
    }

    /// Instruction at index `pc`, or `None` past the end.
    pub fn instruction_at(&self, pc: usize) -> Option<Instruction> {
        self.instructions.get(pc).copied()
    }

    /// Instruction index a label refers to, if defined.
    pub fn address_of(&self, label: &str) -> Option<usize> {
        self.labels.get(label).copied()
    }

    /// Normalized source text of the instruction at `pc`.
    pub fn text_of(&self, pc: usize) -> Option<&str> {
        self.source.get(pc).map(String::as_str)
    }

    /// All instructions in program order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// True if the program has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

/// Removes a leading label definition from `tokens` and returns its name.
fn split_label(tokens: &mut Vec<String>) -> Option<String> {
    let first = tokens.first()?.clone();
    if let Some(label) = first.strip_suffix(':') {
        let _ = tokens.remove(0);
        return Some(label.to_owned());
    }
    if let Some((label, rest)) = first.split_once(':') {
        tokens[0] = rest.to_owned();
        return Some(label.to_owned());
    }
    let rest = tokens.get(1)?.strip_prefix(':')?.to_owned();
    if rest.is_empty() {
        let _ = tokens.drain(..2);
    } else {
        tokens[1] = rest;
        let _ = tokens.remove(0);
    }
    Some(first)
}

/// Letters, digits and underscores, starting with a letter, and not a mnemonic.
fn is_valid_label(label: &str) -> bool {
    let mut chars = label.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && Opcode::from_mnemonic(label).is_none()
}

fn tokens_to_text(tokens: &[String]) -> String {
    match tokens.split_first() {
        Some((op, rest)) if !rest.is_empty() => format!("{op} {}", rest.join(", ")),
        _ => tokens.join(" "),
    }
}
