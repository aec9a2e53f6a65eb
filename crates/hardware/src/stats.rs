//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for a pipeline run. It provides:
//! 1. **Cycle and CPI:** Total cycles, retired instructions, and derived ratios.
//! 2. **Instruction mix:** Counts by class (ALU, load, store, branch, jump).
//! 3. **Stalls:** Data-hazard, control (branch/jump bubble) and commit-order stall cycles.
//! 4. **Execution counts:** How many times each program instruction retired.

use serde::Serialize;

use crate::isa::instruction::InstClass;

/// Simulation statistics for one run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Total simulated cycles.
    pub cycles: u64,
    /// Number of instructions retired.
    pub instructions_retired: u64,

    /// Arithmetic (register and immediate) instructions retired.
    pub inst_alu: u64,
    /// Loads retired.
    pub inst_load: u64,
    /// Stores retired.
    pub inst_store: u64,
    /// Conditional branches retired.
    pub inst_branch: u64,
    /// Unconditional jumps retired.
    pub inst_jump: u64,
    /// Conditional branches that redirected the PC.
    pub branches_taken: u64,

    /// Cycles in which an instruction waited on a locked register.
    pub stalls_data: u64,
    /// Bubbles fetched while a branch or jump target was unresolved.
    pub stalls_control: u64,
    /// Cycles in which a finished result waited for an older commit.
    pub stalls_commit: u64,

    /// Retire count of every instruction, indexed by instruction position.
    pub exec_counts: Vec<u64>,
}

/// Section names accepted by [`SimStats::print_sections`].
pub const STATS_SECTIONS: &[&str] = &["summary", "stalls", "instruction_mix"];

impl SimStats {
    /// Creates zeroed statistics for a program of `program_len` instructions.
    pub fn new(program_len: usize) -> Self {
        Self {
            exec_counts: vec![0; program_len],
            ..Self::default()
        }
    }

    /// Records the retirement of the instruction at `pc`.
    pub fn record_retire(&mut self, pc: usize, class: InstClass) {
        self.instructions_retired += 1;
        if let Some(count) = self.exec_counts.get_mut(pc) {
            *count += 1;
        }
        match class {
            InstClass::ArithRegister | InstClass::ArithImmediate => self.inst_alu += 1,
            InstClass::Load => self.inst_load += 1,
            InstClass::Store => self.inst_store += 1,
            InstClass::Branch => self.inst_branch += 1,
            InstClass::Jump => self.inst_jump += 1,
        }
    }

    /// Cycles per retired instruction, or 0.0 before anything retires.
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_retired as f64
        }
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// Each element of `sections` should be one of [`STATS_SECTIONS`]. Pass an
    /// empty slice to print all sections (same as `print()`).
    ///
    /// # Arguments
    ///
    /// * `sections` - Slice of section names to print, or empty for all.
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let cyc = self.cycles.max(1) as f64;
        let instr = self.instructions_retired.max(1) as f64;

        println!("\n==========================================================");
        println!("MIPS PIPELINE SIMULATION STATISTICS");
        println!("==========================================================");
        if want("summary") {
            println!("sim_cycles               {}", self.cycles);
            println!("sim_insts                {}", self.instructions_retired);
            println!("sim_ipc                  {:.4}", self.instructions_retired as f64 / cyc);
            println!("sim_cpi                  {:.4}", self.cpi());
            println!("----------------------------------------------------------");
        }
        if want("stalls") {
            let pct = |n: u64| (n as f64 / cyc) * 100.0;
            println!("STALL BREAKDOWN");
            println!("  stalls.data            {} ({:.2}%)", self.stalls_data, pct(self.stalls_data));
            println!(
                "  stalls.control         {} ({:.2}%)",
                self.stalls_control,
                pct(self.stalls_control)
            );
            println!(
                "  stalls.commit          {} ({:.2}%)",
                self.stalls_commit,
                pct(self.stalls_commit)
            );
            println!("----------------------------------------------------------");
        }
        if want("instruction_mix") {
            let pct = |n: u64| (n as f64 / instr) * 100.0;
            println!("INSTRUCTION MIX");
            println!("  op.alu                 {} ({:.2}%)", self.inst_alu, pct(self.inst_alu));
            println!("  op.load                {} ({:.2}%)", self.inst_load, pct(self.inst_load));
            println!("  op.store               {} ({:.2}%)", self.inst_store, pct(self.inst_store));
            println!(
                "  op.branch              {} ({:.2}%, {} taken)",
                self.inst_branch,
                pct(self.inst_branch),
                self.branches_taken
            );
            println!("  op.jump                {} ({:.2}%)", self.inst_jump, pct(self.inst_jump));
        }
        println!("==========================================================");
    }

    /// Prints all statistics sections to stdout.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
