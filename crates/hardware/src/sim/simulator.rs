//! Simulator: owns both the CPU and the pipeline side-by-side.
//!
//! The simulator is the cycle driver. Each cycle it:
//! 1. **Clears** the memory change log.
//! 2. **Commits:** Advances the engine through the commit half.
//! 3. **Propagates:** Advances the engine through the propagate half.
//! 4. **Releases** the register locks queued by write-back.
//! 5. **Checks** whether the pipeline has drained.
//!
//! A stage fault stops the run with a [`FatalError`] that names the offending
//! instruction and the cycle count.

use tracing::{debug, info};

use crate::common::error::{Fault, FatalError, SimError};
use crate::config::Config;
use crate::core::Cpu;
use crate::core::cpu::memory::DataMemory;
use crate::core::pipeline::engine::{Phase, PipelineDispatch};
use crate::sim::loader::Program;
use crate::sim::report::{CycleReport, ReportSink, RunSummary};
use crate::stats::SimStats;

/// Top-level simulator: CPU architectural state + pipeline.
#[derive(Debug)]
pub struct Simulator {
    /// CPU architectural state (registers, locks, memory, stats).
    pub cpu: Cpu,
    /// Pipeline implementation.
    pub pipeline: PipelineDispatch,
    cycle: u64,
    finished: bool,
}

impl Simulator {
    /// Creates a simulator for `program` with the organization and memory size from `config`.
    pub fn new(program: Program, config: &Config) -> Self {
        let cpu = Cpu::new(program, config);
        let pipeline = PipelineDispatch::new(config.pipeline.kind);
        Self {
            cpu,
            pipeline,
            cycle: 0,
            finished: false,
        }
    }

    /// Rejects programs that do not fit below the data-segment capacity.
    pub fn check_capacity(&self) -> Result<(), FatalError> {
        let instructions = self.cpu.program.len();
        let capacity = self.cpu.memory.capacity_words();
        if instructions >= capacity {
            return Err(FatalError {
                error: SimError::MemoryLimitExceeded {
                    instructions,
                    capacity,
                },
                pc: None,
                instruction: None,
                cycles: self.cycle,
            });
        }
        Ok(())
    }

    /// Advances the simulator by one clock cycle.
    ///
    /// # Returns
    ///
    /// The state at the end of the cycle, or the fatal error a stage raised.
    pub fn step(&mut self) -> Result<CycleReport, FatalError> {
        self.cycle += 1;
        self.cpu.memory.clear_delta();

        self.pipeline
            .advance(&mut self.cpu, Phase::Commit)
            .map_err(|fault| self.fatal(fault))?;
        self.pipeline
            .advance(&mut self.cpu, Phase::Propagate)
            .map_err(|fault| self.fatal(fault))?;
        self.cpu.locks.apply_releases();

        self.cpu.stats.cycles = self.cycle;
        if self.pipeline.is_drained() {
            self.finished = true;
            debug!(cycle = self.cycle, "pipeline drained");
        }
        Ok(self.report())
    }

    /// Runs until the pipeline drains, sending every cycle's state to `sink`.
    pub fn run(&mut self, sink: &mut dyn ReportSink) -> Result<RunSummary, FatalError> {
        self.check_capacity()?;
        info!(
            pipeline = self.pipeline.kind().name(),
            instructions = self.cpu.program.len(),
            "simulation start"
        );

        sink.on_cycle(&self.report());
        while !self.finished {
            let report = self.step()?;
            sink.on_cycle(&report);
        }

        info!(cycles = self.cycle, retired = self.cpu.stats.instructions_retired, "simulation finished");
        Ok(RunSummary {
            cycles: self.cycle,
            stats: self.cpu.stats.clone(),
        })
    }

    /// Snapshot of the current architectural state.
    pub fn report(&self) -> CycleReport {
        CycleReport {
            cycle: self.cycle,
            registers: self.cpu.regs.snapshot(),
            memory_delta: self.cpu.memory.delta().iter().map(|(&a, &v)| (a, v)).collect(),
        }
    }

    /// Current register values.
    pub const fn registers(&self) -> [i32; 32] {
        self.cpu.regs.snapshot()
    }

    /// The data segment.
    pub const fn memory(&self) -> &DataMemory {
        &self.cpu.memory
    }

    /// Statistics so far.
    pub const fn stats(&self) -> &SimStats {
        &self.cpu.stats
    }

    /// Cycles simulated so far.
    pub const fn cycles(&self) -> u64 {
        self.cycle
    }

    /// True once the pipeline has drained.
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    fn fatal(&self, fault: Fault) -> FatalError {
        FatalError {
            instruction: self.cpu.program.text_of(fault.pc).map(str::to_owned),
            pc: Some(fault.pc),
            error: fault.error,
            cycles: self.cycle,
        }
    }
}
