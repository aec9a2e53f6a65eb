//! Configuration system for the MIPS pipeline simulator.
//!
//! This module defines the configuration structures used to parameterize a run.
//! It provides:
//! 1. **Defaults:** Baseline constants (data-segment size, pipeline organization).
//! 2. **Structures:** Hierarchical config for general, memory, and pipeline settings.
//! 3. **Enums:** The pipeline organization to simulate.
//!
//! Configuration is supplied as JSON (see [`Config`]) or built with `Config::default()`.
//! Every field is optional in JSON; missing fields take their defaults.

use serde::Deserialize;

/// Default configuration constants for the simulator.
mod defaults {
    use crate::common::constants::DEFAULT_DATA_BYTES;

    /// Data-segment capacity in bytes (1 MiB).
    ///
    /// Also bounds the program: a program must have fewer instructions than
    /// the data segment has words.
    pub const DATA_BYTES: usize = DEFAULT_DATA_BYTES;
}

/// Pipeline organization to simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum PipelineKind {
    /// One instruction per cycle, no overlap and no hazards.
    Unpipelined,
    /// Classic IF/ID/EX/MEM/WB pipeline with register locks.
    #[default]
    FiveStage,
    /// IF1/IF2/ID1/ID2/RR front end feeding an R-type lane (EX, WB) and an
    /// I-type lane (EX, MEM1, MEM2, WB) with sequence-ordered commit.
    DualTrack,
}

impl PipelineKind {
    /// Short human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unpipelined => "unpipelined",
            Self::FiveStage => "5-stage",
            Self::DualTrack => "dual-track 7/9-stage",
        }
    }
}

/// Root configuration for the simulator.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use mipsim_core::config::{Config, PipelineKind};
///
/// let config = Config::default();
/// assert_eq!(config.general.trace_instructions, false);
/// assert_eq!(config.memory.data_bytes, 1 << 20);
/// assert_eq!(config.pipeline.kind, PipelineKind::FiveStage);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use mipsim_core::config::{Config, PipelineKind};
///
/// let json = r#"{
///     "general": { "trace_instructions": true },
///     "memory": { "data_bytes": 4096, "protect_program_region": true },
///     "pipeline": { "kind": "DualTrack" }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.memory.data_bytes, 4096);
/// assert!(config.memory.protect_program_region);
/// assert_eq!(config.pipeline.kind, PipelineKind::DualTrack);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Data memory configuration
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Pipeline organization
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// General simulation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Emit per-stage trace events (stalls, bubbles, commits).
    #[serde(default)]
    pub trace_instructions: bool,
}

/// Data memory settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemoryConfig {
    /// Data-segment capacity in bytes; rounded down to whole words.
    #[serde(default = "MemoryConfig::default_data_bytes")]
    pub data_bytes: usize,

    /// Reject data addresses that fall inside the program's own footprint
    /// (`address < 4 * program length`).
    #[serde(default)]
    pub protect_program_region: bool,
}

impl MemoryConfig {
    fn default_data_bytes() -> usize {
        defaults::DATA_BYTES
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            data_bytes: Self::default_data_bytes(),
            protect_program_region: false,
        }
    }
}

/// Pipeline settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PipelineConfig {
    /// Which pipeline organization to simulate.
    #[serde(default)]
    pub kind: PipelineKind,
}
