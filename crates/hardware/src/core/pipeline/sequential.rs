//! Unpipelined reference engine.
//!
//! Executes one whole instruction per cycle, entirely in the commit half. It
//! shares the arithmetic, branch and address logic with the pipelined engines
//! but has no latches and no locks, so its architectural state after every
//! instruction is the ground truth the pipelines are checked against.

use tracing::trace;

use crate::common::error::Fault;
use crate::config::PipelineKind;
use crate::core::Cpu;
use crate::core::pipeline::engine::{Phase, PipelineEngine};
use crate::core::pipeline::signals::ControlSignals;
use crate::core::pipeline::stages::execute::{compute, read_operands};
use crate::isa::instruction::InstClass;

/// One instruction per cycle, no overlap.
#[derive(Clone, Debug, Default)]
pub struct SequentialEngine {
    halted: bool,
}

impl SequentialEngine {
    /// Creates an engine that starts at instruction 0.
    pub const fn new() -> Self {
        Self { halted: false }
    }

    fn step(&mut self, cpu: &mut Cpu) -> Result<(), Fault> {
        let pc = cpu.pc.current;
        let Some(inst) = cpu.instruction_at(pc) else {
            self.halted = true;
            return Ok(());
        };
        let ctrl = ControlSignals::decode(&inst);
        let (rv1, rv2) = read_operands(cpu, &inst);

        cpu.pc.next = pc + 1;
        let (result, addr) = compute(cpu, pc, &inst, &ctrl, rv1, rv2)?;
        match ctrl.class {
            InstClass::ArithRegister | InstClass::ArithImmediate => {
                if let Some(rd) = ctrl.dest {
                    cpu.regs.write(rd, result);
                }
            }
            InstClass::Load => {
                let value = cpu.memory.read(addr);
                if let Some(rt) = ctrl.dest {
                    cpu.regs.write(rt, value);
                }
            }
            InstClass::Store => {
                let value = inst.store_value_reg().map_or(0, |rt| cpu.regs.read(rt));
                cpu.memory.write(addr, value);
            }
            InstClass::Branch => {}
            InstClass::Jump => {
                if let Some(target) = inst.target() {
                    cpu.pc.next = target;
                }
            }
        }
        cpu.stats.record_retire(pc, ctrl.class);
        if cpu.trace {
            trace!(pc, %inst, "SEQ execute");
        }

        cpu.pc.current = cpu.pc.next;
        if cpu.pc.current >= cpu.program.len() {
            self.halted = true;
        }
        Ok(())
    }
}

impl PipelineEngine for SequentialEngine {
    fn advance(&mut self, cpu: &mut Cpu, phase: Phase) -> Result<(), Fault> {
        match phase {
            Phase::Commit if !self.halted => self.step(cpu),
            Phase::Commit | Phase::Propagate => Ok(()),
        }
    }

    fn is_drained(&self) -> bool {
        self.halted
    }

    fn kind(&self) -> PipelineKind {
        PipelineKind::Unpipelined
    }
}
