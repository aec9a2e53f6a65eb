//! MIPS pipeline simulator CLI.
//!
//! This binary provides a single entry point for all simulation modes. It performs:
//! 1. **Run:** Load an assembly file, simulate it on the chosen pipeline, and print
//!    the register file and memory changes after every cycle.
//! 2. **Check:** Load an assembly file and print the decoded listing without simulating.
//!
//! Fatal program errors are printed to stderr together with the offending
//! instruction and cycle count, and the process exits with the error's code.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::{fs, iter, process};

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use mipsim_core::common::error::{ProgramError, SimError};
use mipsim_core::config::{Config, PipelineKind};
use mipsim_core::sim::{CycleReport, NullSink, ReportSink};
use mipsim_core::stats::STATS_SECTIONS;
use mipsim_core::{Program, Simulator};

/// Exit code for failures that are not program errors (unreadable file, bad config).
const EXIT_USAGE: i32 = 64;

#[derive(Parser, Debug)]
#[command(
    name = "mipsim",
    author,
    version,
    about = "Cycle-accurate MIPS pipeline simulator",
    long_about = "Simulate a MIPS assembly program on an unpipelined, 5-stage, or dual-track 7/9-stage pipeline.\n\nExamples:\n  mipsim run -f programs/sum.s\n  mipsim run -f programs/sum.s --pipeline dual-track --stats\n  mipsim check programs/sum.s\n\nSet RUST_LOG=debug (or trace with --trace) for pipeline events on stderr."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Simulate a program until the pipeline drains.
    Run {
        /// Assembly file to execute.
        #[arg(short, long)]
        file: PathBuf,

        /// Pipeline organization (overrides the config file).
        #[arg(short, long, value_enum)]
        pipeline: Option<PipelineArg>,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Per-cycle output format.
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Emit per-stage trace events (needs RUST_LOG=trace to be visible).
        #[arg(long)]
        trace: bool,

        /// Suppress the per-cycle reports; print only the final summary.
        #[arg(short, long)]
        quiet: bool,

        /// Print statistics sections after the run (summary, stalls, instruction_mix).
        #[arg(long, num_args = 0.., value_delimiter = ',')]
        stats: Option<Vec<String>>,
    },

    /// Load a program and print its decoded instructions.
    Check {
        /// Assembly file to check.
        path: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PipelineArg {
    Unpipelined,
    FiveStage,
    DualTrack,
}

impl From<PipelineArg> for PipelineKind {
    fn from(arg: PipelineArg) -> Self {
        match arg {
            PipelineArg::Unpipelined => Self::Unpipelined,
            PipelineArg::FiveStage => Self::FiveStage,
            PipelineArg::DualTrack => Self::DualTrack,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// Registers on one line, then the memory delta.
    Text,
    /// One JSON object per cycle.
    Json,
}

/// Prints cycle reports to stdout.
struct PrintSink<W: Write> {
    out: W,
    format: Format,
}

impl<W: Write> ReportSink for PrintSink<W> {
    fn on_cycle(&mut self, report: &CycleReport) {
        let written = match self.format {
            Format::Text => write_text_report(&mut self.out, report),
            Format::Json => serde_json::to_string(report)
                .map_err(io::Error::other)
                .and_then(|line| writeln!(self.out, "{line}")),
        };
        if let Err(e) = written {
            error!("could not write cycle report: {e}");
        }
    }
}

fn write_text_report(out: &mut impl Write, report: &CycleReport) -> io::Result<()> {
    let regs: Vec<String> = report.registers.iter().map(ToString::to_string).collect();
    writeln!(out, "{}", regs.join("\t"))?;
    writeln!(out, "{}", report.memory_delta.len())?;
    for (addr, value) in &report.memory_delta {
        writeln!(out, "{addr}\t{value}")?;
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            file,
            pipeline,
            config,
            format,
            trace,
            quiet,
            stats,
        } => {
            init_logging(trace);
            cmd_run(&file, pipeline, config.as_deref(), format, trace, quiet, stats.as_deref());
        }
        Commands::Check { path } => {
            init_logging(false);
            cmd_check(&path);
        }
    }
}

/// Installs a stderr subscriber filtered by `RUST_LOG` (default `warn`, or `trace` with `--trace`).
fn init_logging(trace: bool) {
    let default = if trace { "trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_program(path: &Path) -> Program {
    Program::load_file(path).unwrap_or_else(|e| match e {
        ProgramError::Load(load) => {
            // Nothing ran: empty memory, zero cycles, no execution counts.
            let stdout = io::stdout();
            let _ = write_summary(&mut stdout.lock(), iter::empty(), 0, iter::empty());
            let location = format!("line {}: {}", load.line, load.text);
            let _ = write_fatal(&mut io::stderr(), &load.error, Some(&location), 0);
            process::exit(load.error.exit_code());
        }
        ProgramError::Io { .. } => {
            eprintln!("Error: {e}");
            process::exit(EXIT_USAGE);
        }
    })
}

fn load_config(path: Option<&Path>) -> Config {
    let Some(path) = path else {
        return Config::default();
    };
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading config {}: {e}", path.display());
        process::exit(EXIT_USAGE);
    });
    Config::from_json(&text).unwrap_or_else(|e| {
        eprintln!("Error parsing config {}: {e}", path.display());
        process::exit(EXIT_USAGE);
    })
}

/// Runs the simulator to completion and prints the final summary.
///
/// On a fatal error the summary is still printed (memory and execution counts
/// as they stood), then the error goes to stderr and the process exits with
/// the error's code.
fn cmd_run(
    file: &Path,
    pipeline: Option<PipelineArg>,
    config: Option<&Path>,
    format: Format,
    trace: bool,
    quiet: bool,
    stats: Option<&[String]>,
) {
    let mut config = load_config(config);
    if let Some(kind) = pipeline {
        config.pipeline.kind = kind.into();
    }
    config.general.trace_instructions |= trace;

    let program = load_program(file);
    info!(file = %file.display(), pipeline = config.pipeline.kind.name(), "loaded program");
    let mut sim = Simulator::new(program, &config);

    let result = if quiet {
        sim.run(&mut NullSink)
    } else {
        let stdout = io::stdout();
        let mut sink = PrintSink {
            out: stdout.lock(),
            format,
        };
        sim.run(&mut sink)
    };

    print_summary(&sim);
    if let Some(sections) = stats {
        for s in sections {
            if !STATS_SECTIONS.contains(&s.as_str()) {
                eprintln!("Warning: unknown stats section `{s}`");
            }
        }
        sim.stats().print_sections(sections);
    }
    let _ = io::stdout().flush();

    if let Err(e) = result {
        let location = match (e.pc, e.instruction.as_deref()) {
            (Some(pc), Some(text)) => Some(format!("instruction {pc}: {text}")),
            _ => None,
        };
        let _ = write_fatal(&mut io::stderr(), &e.error, location.as_deref(), e.cycles);
        process::exit(e.error.exit_code());
    }
}

/// The error, where it was raised, and how many cycles ran.
fn write_fatal(
    out: &mut impl Write,
    error: &SimError,
    location: Option<&str>,
    cycles: u64,
) -> io::Result<()> {
    writeln!(out, "\n[!] FATAL: {error}")?;
    if let Some(location) = location {
        writeln!(out, "    {location}")?;
    }
    writeln!(out, "    cycles: {cycles}")
}

/// Final memory image, cycle count, and how often each instruction executed.
fn print_summary(sim: &Simulator) {
    let counts = sim
        .stats()
        .exec_counts
        .iter()
        .enumerate()
        .map(|(pc, &count)| (count, sim.cpu.program.text_of(pc).unwrap_or_default()));
    let stdout = io::stdout();
    if let Err(e) = write_summary(&mut stdout.lock(), sim.memory().non_zero(), sim.cycles(), counts) {
        error!("could not write summary: {e}");
    }
}

fn write_summary<'a>(
    out: &mut impl Write,
    memory: impl Iterator<Item = (u32, i32)>,
    cycles: u64,
    counts: impl Iterator<Item = (u64, &'a str)>,
) -> io::Result<()> {
    writeln!(out)?;
    for (addr, value) in memory {
        writeln!(out, "{}-{}: {:#010x}", addr, addr + 3, value as u32)?;
    }
    writeln!(out, "Total cycles: {cycles}")?;
    for (count, text) in counts {
        writeln!(out, "{count} times:\t{text}")?;
    }
    Ok(())
}

fn cmd_check(path: &Path) {
    let program = load_program(path);
    for (pc, inst) in program.instructions().iter().enumerate() {
        println!("{pc:>5}  {inst}");
    }
    println!("{} instructions", program.len());
}
