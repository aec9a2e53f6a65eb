use mipsim_core::common::error::FatalError;
use mipsim_core::config::{Config, PipelineKind};
use mipsim_core::sim::{CycleReport, RunSummary};
use mipsim_core::{Program, Simulator};

pub struct TestContext {
    pub sim: Simulator,
    pub reports: Vec<CycleReport>,
}

impl TestContext {
    /// Builds a simulator for `source` on the given pipeline with default memory.
    pub fn new(source: &str, kind: PipelineKind) -> Self {
        Self::with_config(source, config_for(kind))
    }

    pub fn with_config(source: &str, config: Config) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter("warn")
            .try_init();
        let program = Program::parse(source).expect("test program must parse");
        Self::from_program(program, config)
    }

    pub fn from_program(program: Program, config: Config) -> Self {
        Self {
            sim: Simulator::new(program, &config),
            reports: Vec::new(),
        }
    }

    /// Runs to completion, keeping every cycle report.
    pub fn run(&mut self) -> Result<RunSummary, FatalError> {
        self.sim.run(&mut self.reports)
    }

    /// Runs to completion and panics on a fatal error.
    pub fn run_ok(mut self) -> Self {
        if let Err(e) = self.run() {
            panic!("simulation failed: {e}");
        }
        self
    }

    /// Steps until the pipeline drains or `limit` cycles pass.
    pub fn step_until_done(&mut self, limit: u64) {
        while !self.sim.is_finished() {
            assert!(self.sim.cycles() < limit, "no drain within {limit} cycles");
            let report = self.sim.step().expect("step failed");
            self.reports.push(report);
        }
    }

    pub fn reg(&self, idx: usize) -> i32 {
        self.sim.registers()[idx]
    }

    pub fn mem(&self, addr: u32) -> i32 {
        self.sim.memory().read(addr)
    }

    /// Every non-zero data word as `(byte address, value)`.
    pub fn memory_image(&self) -> Vec<(u32, i32)> {
        self.sim.memory().non_zero().collect()
    }

    /// Report of the cycle in which `addr` was written, if any.
    pub fn write_cycle(&self, addr: u32) -> Option<&CycleReport> {
        self.reports
            .iter()
            .find(|r| r.memory_delta.iter().any(|&(a, _)| a == addr))
    }
}

pub fn config_for(kind: PipelineKind) -> Config {
    let mut config = Config::default();
    config.pipeline.kind = kind;
    config
}
